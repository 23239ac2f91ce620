//! # Dashboard CSV Export
//!
//! Serializes ordered lists of flat records into RFC 4180-style CSV text and
//! packages them as timestamped, downloadable documents. Export is
//! best-effort: an empty dataset still produces a header-only file.

pub mod csv;
pub mod document;
pub mod error;
pub mod rows;

// Re-export the key components to create a clean, public-facing API.
pub use csv::{escape_field, to_csv};
pub use document::{export_filename, ts_stamp, CsvDocument, CSV_MIME};
pub use error::ExportError;
pub use rows::{export_records, ToCsvRows};
