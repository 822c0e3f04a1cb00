//! # dsv_codec
//!
//! A codec between delimiter-separated text (CSV/TSV/SSV and generic DSV
//! dialects) and structured records.
//!
//! ## What it does
//!
//! Given text lines, [`parse`] produces records — ordered field lists or
//! insertion-ordered key→value rows, depending on how the header resolves.
//! Given records, [`serialize`] produces delimited text. Both directions
//! share one configuration type, one ordered field-processing pipeline, and
//! one error model: errors accumulate per row, nothing panics, and partial
//! results are always returned.
//!
//! ## Key Features
//!
//! - **Configurable dialects**: any delimiter/quote/escape combination,
//!   including same-character quoting (`""`) and distinct-character
//!   escaping (`\"`)
//! - **Header resolution**: provided headers, inferred headers, or none;
//!   the first row is data or schema according to a fixed policy
//! - **Ordered pipeline**: fixed-length validation, whitespace trimming,
//!   empty/null normalization and missing-field filling run in a fixed
//!   order on both directions
//! - **Non-aborting errors**: every problem is an accumulated value in the
//!   output, never an early return that discards clean rows
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! dsv_codec = "0.1"
//! ```
//!
//! ### Parsing
//!
//! ```rust
//! use dsv_codec::{parse, DsvOptions, Value};
//!
//! let output = parse(&["a,b", "1,2", "3,4"], &DsvOptions::csv());
//!
//! assert!(output.errors.is_empty());
//! assert_eq!(output.records.len(), 2);
//! assert_eq!(output.records[0].get("a"), Some(&Value::from("1")));
//! assert_eq!(output.records[1].get("b"), Some(&Value::from("4")));
//! ```
//!
//! ### Serializing
//!
//! ```rust
//! use dsv_codec::{dsv, serialize, DsvOptions, Record, Value};
//!
//! let record = match dsv!({"a": "1", "b": "2"}) {
//!     Value::Object(map) => Record::Object(map),
//!     _ => unreachable!(),
//! };
//!
//! let output = serialize(&[record], &DsvOptions::csv());
//! assert_eq!(output.text, "a,b\n1,2\n");
//! ```
//!
//! ### Dialects beyond CSV
//!
//! ```rust
//! use dsv_codec::{parse, DsvOptions};
//!
//! // Semicolon-delimited, single-quoted, backslash-escaped
//! let options = DsvOptions::new()
//!     .with_delimiter(';')
//!     .with_quote('\'')
//!     .with_escape('\\')
//!     .with_header(Vec::<String>::new());
//!
//! let output = parse(&["x;y", "'a;b';c"], &options);
//! assert_eq!(output.records[0].get("x").unwrap().as_str(), Some("a;b"));
//! ```
//!
//! ## Scope
//!
//! Each input row is one logical record: embedded record separators inside
//! quoted fields are out of contract, and the codec performs no I/O — it
//! consumes and produces in-memory rows, records and text. See the
//! [`format`] module for the dialect rules in full.

pub mod de;
pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod options;
pub mod ser;
pub mod value;

mod header;
mod pipeline;

pub use de::{ParseOutput, Parser};
pub use error::{ErrorItem, ErrorKind};
pub use map::RecordMap;
pub use options::{DsvOptions, Verbosity};
pub use ser::{SerializeOutput, Serializer};
pub use value::{Number, Record, Value};

/// Parses text rows into records under the given configuration.
///
/// Diagnostic line numbers default to 1-based row positions; use
/// [`Parser::parse_with_line_numbers`] when the rows are a slice of a
/// larger document.
///
/// This never fails: configuration problems and malformed rows surface in
/// [`ParseOutput::errors`] next to whatever records parsed cleanly.
///
/// # Examples
///
/// ```rust
/// use dsv_codec::{parse, DsvOptions};
///
/// let output = parse(&["x\ty", "1\t2"], &DsvOptions::tsv());
/// assert_eq!(output.records.len(), 1);
/// ```
#[must_use]
pub fn parse<S: AsRef<str>>(rows: &[S], options: &DsvOptions) -> ParseOutput {
    Parser::new(options.clone()).parse(rows)
}

/// Serializes records into delimited text under the given configuration.
///
/// This never fails: configuration problems and unrepresentable fields
/// surface in [`SerializeOutput::errors`] next to whatever text could be
/// produced.
///
/// # Examples
///
/// ```rust
/// use dsv_codec::{serialize, DsvOptions, Record, Value};
///
/// let rows = vec![Record::List(vec![Value::from("a"), Value::from("b")])];
/// let output = serialize(&rows, &DsvOptions::csv().with_skip_header(true));
/// assert_eq!(output.text, "a,b\n");
/// ```
#[must_use]
pub fn serialize(records: &[Record], options: &DsvOptions) -> SerializeOutput {
    Serializer::new(options.clone()).serialize(records)
}
