//! Configuration options for the DSV codec.
//!
//! This module provides the types that make up one resolved configuration:
//!
//! - [`DsvOptions`]: Main configuration struct, shared by both directions
//! - [`Verbosity`]: How much context accumulated errors carry
//!
//! Delimiter, quote and escape characters are required: both
//! [`parse`](crate::parse) and [`serialize`](crate::serialize) collect one
//! `MissingOption` error per absent required option before touching any row.
//! The header is required in the weaker sense that *some* value must be
//! given; an empty header means "infer the header from the data".
//!
//! ## Presets
//!
//! The csv/tsv/ssv formats are just default configurations of the same core:
//!
//! ```rust
//! use dsv_codec::DsvOptions;
//!
//! let csv = DsvOptions::csv();
//! assert_eq!(csv.delimiter, Some(','));
//! assert!(csv.fixed_length);
//!
//! let tsv = DsvOptions::tsv();
//! assert_eq!(tsv.delimiter, Some('\t'));
//!
//! let ssv = DsvOptions::ssv();
//! assert_eq!(ssv.delimiter, Some(' '));
//! assert!(ssv.skip_header);
//! ```
//!
//! ## Examples
//!
//! ```rust
//! use dsv_codec::{DsvOptions, Verbosity};
//!
//! let options = DsvOptions::new()
//!     .with_delimiter(';')
//!     .with_quote('\'')
//!     .with_escape('\\')
//!     .with_header(["id", "name"])
//!     .with_fixed_length(true)
//!     .with_verbosity(Verbosity::WithLines);
//! ```

use crate::error::{ErrorItem, ErrorKind};

/// Controls how much payload accumulated errors carry.
///
/// - `Quiet`: message only
/// - `WithLines`: adds the 1-based line number where available
/// - `WithDetails`: additionally adds a diagnostic dump (offending fields
///   and header, or the full configuration for missing options)
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    #[default]
    Quiet,
    WithLines,
    WithDetails,
}

/// Configuration for parsing and serializing delimiter-separated values.
///
/// One immutable value of this type drives a whole `parse` or `serialize`
/// call; no stage mutates it. Fields that are `Option` are required and
/// reported as `MissingOption` errors when absent (`record_separator` only
/// on the serialize side).
///
/// # Examples
///
/// ```rust
/// use dsv_codec::{parse, DsvOptions};
///
/// let output = parse(&["a,b", "1,2"], &DsvOptions::csv());
/// assert!(output.errors.is_empty());
/// assert_eq!(output.records.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DsvOptions {
    /// Character separating fields within a row. Required.
    pub delimiter: Option<char>,
    /// Character used to quote field content. Required.
    pub quote: Option<char>,
    /// Character escaping an embedded quote. May equal `quote` (doubled
    /// quotes, CSV-style) or differ (backslash-style). Required.
    pub escape: Option<char>,
    /// String terminating each serialized row. Required for serialize only.
    pub record_separator: Option<String>,
    /// Provided header keys. `Some(vec![])` means "no keys provided, infer
    /// from data"; `None` is a missing option.
    pub header: Option<Vec<String>>,
    /// Prefix for keys synthesized when a row has more values than the
    /// header has keys.
    pub header_prefix: String,
    /// Parse: do not interpret the first row at all. Serialize: do not emit
    /// a header row.
    pub skip_header: bool,
    /// Require every row/record to have exactly as many fields as the
    /// header; deviating rows are dropped with an error.
    pub fixed_length: bool,
    /// Parse-side: drop fields that are empty strings.
    pub skip_empty_values: bool,
    /// Trim Unicode whitespace around field values.
    pub trim_whitespaces: bool,
    /// Replace empty-string fields with null.
    pub empty_as_null: bool,
    /// Drop null fields.
    pub skip_null: bool,
    /// Parse-side: pad/truncate each row to exactly the header length,
    /// filling absent positions with null.
    pub missing_as_null: bool,
    /// Serialize-side: allow list and object field values, JSON-encoded.
    /// Without it they become null plus a `DisallowedFieldType` error.
    pub allow_list_values: bool,
    /// Serialize-side: when set, pad each record to the header length and
    /// render null/missing fields as this string.
    pub null_as: Option<String>,
    /// Error payload richness.
    pub verbosity: Verbosity,
}

impl DsvOptions {
    /// Creates an empty configuration: every required option absent, every
    /// flag off. The generic starting point for fully explicit setups.
    #[must_use]
    pub fn new() -> Self {
        DsvOptions {
            header_prefix: "_".to_string(),
            ..Default::default()
        }
    }

    /// Comma-separated values: delimiter `,`, quote and escape `"`, newline
    /// record separator, inferred header, fixed-length validation on.
    #[must_use]
    pub fn csv() -> Self {
        DsvOptions {
            delimiter: Some(','),
            quote: Some('"'),
            escape: Some('"'),
            record_separator: Some("\n".to_string()),
            header: Some(Vec::new()),
            fixed_length: true,
            ..Self::new()
        }
    }

    /// Tab-separated values: like [`csv`](Self::csv) with a tab delimiter.
    #[must_use]
    pub fn tsv() -> Self {
        DsvOptions {
            delimiter: Some('\t'),
            ..Self::csv()
        }
    }

    /// Space-separated values: delimiter ` `, no header row, empty values
    /// skipped and whitespace trimmed on parse.
    #[must_use]
    pub fn ssv() -> Self {
        DsvOptions {
            delimiter: Some(' '),
            quote: Some('"'),
            escape: Some('"'),
            record_separator: Some("\n".to_string()),
            header: Some(Vec::new()),
            skip_header: true,
            skip_empty_values: true,
            trim_whitespaces: true,
            ..Self::new()
        }
    }

    /// Sets the field delimiter.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Sets the quote character.
    #[must_use]
    pub fn with_quote(mut self, quote: char) -> Self {
        self.quote = Some(quote);
        self
    }

    /// Sets the escape character.
    #[must_use]
    pub fn with_escape(mut self, escape: char) -> Self {
        self.escape = Some(escape);
        self
    }

    /// Sets the record separator used when serializing.
    #[must_use]
    pub fn with_record_separator<S: Into<String>>(mut self, separator: S) -> Self {
        self.record_separator = Some(separator.into());
        self
    }

    /// Sets the header keys. Pass an empty iterator for "infer from data".
    #[must_use]
    pub fn with_header<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the prefix for synthesized surplus keys (default `_`).
    #[must_use]
    pub fn with_header_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.header_prefix = prefix.into();
        self
    }

    /// Toggles skipping/omitting the header row.
    #[must_use]
    pub fn with_skip_header(mut self, on: bool) -> Self {
        self.skip_header = on;
        self
    }

    /// Toggles fixed-length validation.
    #[must_use]
    pub fn with_fixed_length(mut self, on: bool) -> Self {
        self.fixed_length = on;
        self
    }

    /// Toggles dropping of empty-string fields on parse.
    #[must_use]
    pub fn with_skip_empty_values(mut self, on: bool) -> Self {
        self.skip_empty_values = on;
        self
    }

    /// Toggles whitespace trimming around field values.
    #[must_use]
    pub fn with_trim_whitespaces(mut self, on: bool) -> Self {
        self.trim_whitespaces = on;
        self
    }

    /// Toggles treating empty fields as null.
    #[must_use]
    pub fn with_empty_as_null(mut self, on: bool) -> Self {
        self.empty_as_null = on;
        self
    }

    /// Toggles dropping of null fields.
    #[must_use]
    pub fn with_skip_null(mut self, on: bool) -> Self {
        self.skip_null = on;
        self
    }

    /// Toggles padding short rows with null up to the header length.
    #[must_use]
    pub fn with_missing_as_null(mut self, on: bool) -> Self {
        self.missing_as_null = on;
        self
    }

    /// Toggles JSON encoding of list and object field values.
    #[must_use]
    pub fn with_allow_list_values(mut self, on: bool) -> Self {
        self.allow_list_values = on;
        self
    }

    /// Sets the serialize-side replacement for null and missing fields.
    #[must_use]
    pub fn with_null_as<S: Into<String>>(mut self, null_as: S) -> Self {
        self.null_as = Some(null_as.into());
        self
    }

    /// Sets the error payload richness.
    #[must_use]
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    fn missing_option(&self, option: &str) -> ErrorItem {
        ErrorItem::new(ErrorKind::MissingOption {
            option: option.to_string(),
        })
        .with_detail(self.verbosity, || format!("{:?}", self))
    }

    /// Resolves the options the parse direction needs, or the accumulated
    /// `MissingOption` errors if any required option is absent.
    pub(crate) fn resolve_parse(&self) -> Result<Resolved, Vec<ErrorItem>> {
        let mut errors = Vec::new();
        if self.delimiter.is_none() {
            errors.push(self.missing_option("delimiter"));
        }
        if self.quote.is_none() {
            errors.push(self.missing_option("quote"));
        }
        if self.escape.is_none() {
            errors.push(self.missing_option("escape"));
        }
        if self.header.is_none() {
            errors.push(self.missing_option("header"));
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(self.resolved())
    }

    /// Resolves the options the serialize direction needs; the record
    /// separator is required here on top of the parse-side set.
    pub(crate) fn resolve_serialize(&self) -> Result<Resolved, Vec<ErrorItem>> {
        let mut errors = Vec::new();
        if self.record_separator.is_none() {
            errors.push(self.missing_option("record_separator"));
        }
        if self.delimiter.is_none() {
            errors.push(self.missing_option("delimiter"));
        }
        if self.quote.is_none() {
            errors.push(self.missing_option("quote"));
        }
        if self.escape.is_none() {
            errors.push(self.missing_option("escape"));
        }
        if self.header.is_none() {
            errors.push(self.missing_option("header"));
        }
        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(self.resolved())
    }

    fn resolved(&self) -> Resolved {
        Resolved {
            delimiter: self.delimiter.unwrap_or_default(),
            quote: self.quote.unwrap_or_default(),
            escape: self.escape.unwrap_or_default(),
            record_separator: self.record_separator.clone().unwrap_or_default(),
            header: self.header.clone().unwrap_or_default(),
            header_prefix: self.header_prefix.clone(),
            skip_header: self.skip_header,
            fixed_length: self.fixed_length,
            skip_empty_values: self.skip_empty_values,
            trim_whitespaces: self.trim_whitespaces,
            empty_as_null: self.empty_as_null,
            skip_null: self.skip_null,
            missing_as_null: self.missing_as_null,
            allow_list_values: self.allow_list_values,
            null_as: self.null_as.clone(),
            verbosity: self.verbosity,
        }
    }
}

/// A fully resolved configuration: every required option present, owned for
/// the duration of one codec call.
#[derive(Clone, Debug)]
pub(crate) struct Resolved {
    pub delimiter: char,
    pub quote: char,
    pub escape: char,
    pub record_separator: String,
    pub header: Vec<String>,
    pub header_prefix: String,
    pub skip_header: bool,
    pub fixed_length: bool,
    pub skip_empty_values: bool,
    pub trim_whitespaces: bool,
    pub empty_as_null: bool,
    pub skip_null: bool,
    pub missing_as_null: bool,
    pub allow_list_values: bool,
    pub null_as: Option<String>,
    pub verbosity: Verbosity,
}
