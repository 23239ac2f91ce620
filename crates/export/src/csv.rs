//! CSV text assembly and field escaping.

/// Escapes one field for a CSV line. `None` renders as an empty string. A
/// field containing a comma, double quote, or newline is wrapped in double
/// quotes with internal quotes doubled (RFC 4180).
pub fn escape_field(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return String::new();
    };

    if raw.contains(',') || raw.contains('"') || raw.contains('\n') || raw.contains('\r') {
        format!("\"{}\"", raw.replace('"', "\"\""))
    } else {
        raw.to_string()
    }
}

/// Serializes rows under a header line, `\n`-joined. The header list defines
/// the column order; each row must already be projected into that order.
/// Empty `rows` yields a header-only CSV.
pub fn to_csv(headers: &[&str], rows: &[Vec<Option<String>>]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(
        headers
            .iter()
            .map(|h| escape_field(Some(h)))
            .collect::<Vec<_>>()
            .join(","),
    );

    for row in rows {
        lines.push(
            headers
                .iter()
                .enumerate()
                .map(|(i, _)| escape_field(row.get(i).and_then(|f| f.as_deref())))
                .collect::<Vec<_>>()
                .join(","),
        );
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Minimal RFC 4180 parser used to check that escaped output round-trips.
    fn parse_line(line: &str) -> Vec<String> {
        let mut fields = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;
        let mut chars = line.chars().peekable();

        while let Some(c) = chars.next() {
            match c {
                '"' if in_quotes => {
                    if chars.peek() == Some(&'"') {
                        chars.next();
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                }
                '"' => in_quotes = true,
                ',' if !in_quotes => {
                    fields.push(std::mem::take(&mut field));
                }
                c => field.push(c),
            }
        }
        fields.push(field);
        fields
    }

    #[test]
    fn plain_fields_pass_through() {
        assert_eq!(escape_field(Some("hello")), "hello");
        assert_eq!(escape_field(None), "");
    }

    #[test]
    fn commas_quotes_and_newlines_are_quoted() {
        assert_eq!(escape_field(Some("Smith, John")), "\"Smith, John\"");
        assert_eq!(escape_field(Some("say \"hi\"")), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field(Some("a\nb")), "\"a\nb\"");
    }

    #[test]
    fn comma_bearing_field_round_trips() {
        let csv = to_csv(
            &["name", "role"],
            &[vec![Some("Smith, John".to_string()), Some("admin".to_string())]],
        );
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(lines[0], "name,role");
        assert_eq!(parse_line(lines[1]), vec!["Smith, John", "admin"]);
    }

    #[test]
    fn empty_rows_yield_header_only_csv() {
        assert_eq!(to_csv(&["a", "b", "c"], &[]), "a,b,c");
    }

    #[test]
    fn short_rows_pad_with_empty_fields() {
        let csv = to_csv(&["a", "b"], &[vec![Some("1".to_string())]]);
        assert_eq!(csv, "a,b\n1,");
    }
}
