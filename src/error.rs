//! Error types for DSV parsing and serialization.
//!
//! Unlike parsers that abort on the first problem, this codec accumulates
//! errors per row and always returns partial results. The types here reflect
//! that model:
//!
//! - [`ErrorKind`]: The closed taxonomy of things that can go wrong
//! - [`ErrorItem`]: One accumulated error, with optional line number and
//!   detail payload depending on the configured [`Verbosity`]
//!
//! ## Error Categories
//!
//! - **Missing options**: A required configuration value is absent — fatal
//!   for the whole call, which returns empty output plus one error per
//!   missing option
//! - **Field count mismatches**: A row or record deviates from the header
//!   length under fixed-length validation — the row is dropped, processing
//!   continues
//! - **Disallowed field types**: A list or object value in a field without
//!   `allow_list_values` — the field is nulled, the record continues
//! - **Unsupported field types**: A value that cannot be rendered as a field
//!   at all — the field is dropped
//!
//! ## Examples
//!
//! ```rust
//! use dsv_codec::{parse, DsvOptions};
//!
//! // Parsing without a delimiter is a configuration error, not a panic.
//! let options = DsvOptions::new()
//!     .with_quote('"')
//!     .with_escape('"')
//!     .with_header(Vec::<String>::new());
//! let output = parse(&["a,b"], &options);
//! assert!(output.records.is_empty());
//! assert_eq!(output.errors.len(), 1);
//! assert!(output.errors[0].to_string().contains("delimiter"));
//! ```

use crate::options::Verbosity;
use std::fmt;
use thiserror::Error;

/// The closed set of error conditions the codec can report.
///
/// Every variant carries its user-facing message via `Display`; positional
/// and diagnostic context live on the surrounding [`ErrorItem`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorKind {
    /// A required configuration option was not provided.
    ///
    /// Fatal for the whole call: the codec returns empty output together
    /// with one of these per absent option.
    #[error("Please provide {option} option")]
    MissingOption {
        /// Name of the absent option, e.g. `"delimiter"`.
        option: String,
    },

    /// A row's field count deviates from the header length under
    /// fixed-length validation. The row is dropped.
    #[error("Number of values does not match number of headers")]
    FieldCountMismatch,

    /// A list or object appeared as a field value while `allow_list_values`
    /// was off. The field is replaced with null.
    #[error("{kind}s are not allowed as fields")]
    DisallowedFieldType {
        /// Either `"Array"` or `"Object"`.
        kind: &'static str,
    },

    /// A value that cannot be rendered as a field at all. The field is
    /// dropped from the record.
    #[error("Type not allowed as field")]
    UnsupportedFieldType,
}

/// One accumulated codec error.
///
/// The `line` and `detail` fields are populated only when the configured
/// [`Verbosity`] asks for them, so callers comparing errors at the default
/// verbosity see stable, payload-free values.
///
/// # Examples
///
/// ```rust
/// use dsv_codec::{ErrorItem, ErrorKind};
///
/// let err = ErrorItem::new(ErrorKind::FieldCountMismatch);
/// assert_eq!(
///     err.to_string(),
///     "Number of values does not match number of headers"
/// );
/// assert_eq!(err.line, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorItem {
    /// What went wrong.
    pub kind: ErrorKind,
    /// 1-based line number, present at [`Verbosity::WithLines`] and above
    /// when the direction has a meaningful position.
    pub line: Option<usize>,
    /// Free-form diagnostic payload, present at [`Verbosity::WithDetails`].
    pub detail: Option<String>,
}

impl ErrorItem {
    /// Creates an error with no positional or diagnostic payload.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        ErrorItem {
            kind,
            line: None,
            detail: None,
        }
    }

    /// Attaches a line number, kept only at `WithLines` verbosity or above.
    #[must_use]
    pub(crate) fn at_line(mut self, verbosity: Verbosity, line: Option<usize>) -> Self {
        if verbosity >= Verbosity::WithLines {
            self.line = line;
        }
        self
    }

    /// Attaches a detail payload, built lazily and kept only at
    /// `WithDetails` verbosity.
    #[must_use]
    pub(crate) fn with_detail<F>(mut self, verbosity: Verbosity, make: F) -> Self
    where
        F: FnOnce() -> String,
    {
        if verbosity >= Verbosity::WithDetails {
            self.detail = Some(make());
        }
        self
    }
}

impl fmt::Display for ErrorItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;
        if let Some(line) = self.line {
            write!(f, " (line {})", line)?;
        }
        if let Some(detail) = &self.detail {
            write!(f, ": {}", detail)?;
        }
        Ok(())
    }
}

impl From<ErrorKind> for ErrorItem {
    fn from(kind: ErrorKind) -> Self {
        ErrorItem::new(kind)
    }
}
