use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// A non-2xx response carrying (or lacking) a structured message. The
    /// Display string is always the human-readable message the UI shows.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Authentication required: {0}")]
    Unauthenticated(String),

    #[error("Failed to deserialize the API response: {0}")]
    Deserialization(String),

    #[error("Failed to persist session: {0}")]
    Session(String),
}

/// Maps a failed HTTP response body to a single typed error.
///
/// The backend is inconsistent about error shapes, so the structured message
/// is probed in order: `{"message": ...}`, then `{"data": {"message": ...}}`,
/// then `{"error": ...}`. When nothing parses, the caller-supplied fallback
/// becomes the message, so UI code can always read one `.to_string()`.
pub fn map_error_body(status: u16, body: &str, fallback: &str) -> ApiError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .and_then(|m| m.as_str().map(str::to_string))
                .or_else(|| {
                    v.get("data")
                        .and_then(|d| d.get("message"))
                        .and_then(|m| m.as_str().map(str::to_string))
                })
                .or_else(|| v.get("error").and_then(|m| m.as_str().map(str::to_string)))
        })
        .unwrap_or_else(|| fallback.to_string());

    if status == 401 {
        ApiError::Unauthenticated(message)
    } else {
        ApiError::Api { status, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_message_is_extracted() {
        let err = map_error_body(400, r#"{"message":"X"}"#, "fallback");
        assert_eq!(err.to_string(), "X");
    }

    #[test]
    fn nested_data_message_is_extracted() {
        let err = map_error_body(422, r#"{"data":{"message":"bad proposal"}}"#, "fallback");
        assert_eq!(err.to_string(), "bad proposal");
    }

    #[test]
    fn error_field_is_probed_last() {
        let err = map_error_body(500, r#"{"error":"boom"}"#, "fallback");
        assert_eq!(err.to_string(), "boom");
    }

    #[test]
    fn unstructured_body_falls_back_to_caller_message() {
        let err = map_error_body(502, "<html>Bad Gateway</html>", "Failed to load proposals");
        assert_eq!(err.to_string(), "Failed to load proposals");
    }

    #[test]
    fn status_401_maps_to_unauthenticated() {
        let err = map_error_body(401, r#"{"message":"token expired"}"#, "fallback");
        assert!(matches!(err, ApiError::Unauthenticated(_)));
        assert_eq!(err.to_string(), "Authentication required: token expired");
    }
}
