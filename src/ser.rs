//! DSV serialization: the field encoder and the serialize facade.
//!
//! ## Overview
//!
//! Serializing mirrors parsing stage for stage. A record moves through:
//!
//! 1. row extraction — lists pass through, object-shaped records flatten in
//!    their own key order
//! 2. type coercion — every field value becomes a string or a null: numbers
//!    render decimally (NaN becomes null, the infinities their string
//!    forms), booleans their literal form, lists and objects JSON under
//!    `allow_list_values`
//! 3. the optional fixed-length check against the header length
//! 4. the enabled pipeline stages in their fixed order
//! 5. the encoder, which quotes and escapes each field exactly when its
//!    content collides with the delimiter or the quote character
//!
//! Problems accumulate in [`SerializeOutput::errors`]; a disallowed field
//! nulls out, an unencodable one is dropped, and the call always returns
//! whatever text could be produced.
//!
//! ## Usage
//!
//! ```rust
//! use dsv_codec::{dsv, serialize, DsvOptions, Record, Value};
//!
//! let record = match dsv!({"a": "1", "b": "2"}) {
//!     Value::Object(map) => Record::Object(map),
//!     _ => unreachable!(),
//! };
//! let output = serialize(&[record], &DsvOptions::csv());
//! assert!(output.errors.is_empty());
//! assert_eq!(output.text, "a,b\n1,2\n");
//! ```

use crate::error::{ErrorItem, ErrorKind};
use crate::header::SerializeHeaderState;
use crate::options::{DsvOptions, Resolved};
use crate::pipeline::{run_serialize_stages, serialize_stages};
use crate::{Record, Value};

/// The result of one `serialize` call: accumulated errors next to the text
/// that could be produced.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SerializeOutput {
    /// Errors in record order; empty on full success.
    pub errors: Vec<ErrorItem>,
    /// The serialized rows, each terminated by the record separator.
    pub text: String,
}

/// The quote/escape-aware field encoder, the scanner's mirror.
#[derive(Debug, Clone)]
pub(crate) struct Encoder {
    delimiter: char,
    quote: char,
    escape: char,
}

impl Encoder {
    pub(crate) fn new(delimiter: char, quote: char, escape: char) -> Self {
        Encoder {
            delimiter,
            quote,
            escape,
        }
    }

    /// Encodes one already-coerced field. Null renders as the literal
    /// `null` marker; a value containing the delimiter or the quote char is
    /// wrapped in quotes with every embedded quote escape-prefixed.
    pub(crate) fn encode(&self, field: Option<&str>) -> String {
        let value = match field {
            Some(value) => value,
            None => return "null".to_string(),
        };

        let mut needs_quotes = value.contains(self.delimiter);

        if value.contains(self.quote) {
            needs_quotes = true;
            let mut escaped = String::with_capacity(value.len() + 4);
            escaped.push(self.quote);
            for ch in value.chars() {
                if ch == self.quote {
                    escaped.push(self.escape);
                }
                escaped.push(ch);
            }
            escaped.push(self.quote);
            return escaped;
        }

        if needs_quotes {
            let mut quoted = String::with_capacity(value.len() + 2);
            quoted.push(self.quote);
            quoted.push_str(value);
            quoted.push(self.quote);
            quoted
        } else {
            value.to_string()
        }
    }
}

/// The serialize-direction facade.
///
/// Holds the configuration; header adoption and error accumulation are
/// local to each [`serialize`](Serializer::serialize) call.
///
/// # Examples
///
/// ```rust
/// use dsv_codec::{DsvOptions, Record, Serializer, Value};
///
/// let serializer = Serializer::new(DsvOptions::csv().with_skip_header(true));
/// let rows = vec![Record::List(vec![Value::from("x"), Value::from("y")])];
/// assert_eq!(serializer.serialize(&rows).text, "x,y\n");
/// ```
#[derive(Debug, Clone)]
pub struct Serializer {
    options: DsvOptions,
}

impl Serializer {
    /// Creates a serializer for the given configuration. Option validation
    /// happens per call, so construction never fails.
    #[must_use]
    pub fn new(options: DsvOptions) -> Self {
        Serializer { options }
    }

    /// Serializes the given records into delimited text.
    pub fn serialize(&self, records: &[Record]) -> SerializeOutput {
        let resolved = match self.options.resolve_serialize() {
            Ok(resolved) => resolved,
            Err(errors) => {
                return SerializeOutput {
                    errors,
                    text: String::new(),
                }
            }
        };

        let encoder = Encoder::new(resolved.delimiter, resolved.quote, resolved.escape);
        let mut header = SerializeHeaderState::resolve(&resolved.header, resolved.skip_header);
        let stages = serialize_stages(&resolved);

        let mut errors = Vec::new();
        let mut rows: Vec<Vec<Option<String>>> = Vec::new();

        if header.emit_provided() {
            rows.push(header.keys().iter().cloned().map(Some).collect());
            header.mark_set();
        }

        // No provided header, no skip: the first record's keys take over.
        if !header.is_set() {
            if let Some(first) = records.first() {
                match first {
                    Record::List(values) => {
                        header.adopt(values.iter().cloned().map(Value::into_key).collect());
                    }
                    Record::Object(map) => {
                        header.adopt(map.keys().cloned().collect());
                        rows.push(header.keys().iter().cloned().map(Some).collect());
                    }
                }
            }
            header.mark_set();
        }

        for record in records {
            rows.push(self.coerce_record(record, &resolved, &mut errors));
        }

        if resolved.fixed_length {
            let mut checked = Vec::with_capacity(rows.len());
            for row in rows {
                header.fix_len_from(&row);
                if header.keys().len() != row.len() {
                    errors.push(
                        ErrorItem::new(ErrorKind::FieldCountMismatch).with_detail(
                            resolved.verbosity,
                            || {
                                format!(
                                    "values [{}] and headers [{}]",
                                    join_row(&row),
                                    header.keys().join(",")
                                )
                            },
                        ),
                    );
                } else {
                    checked.push(row);
                }
            }
            rows = checked;
        }

        let mut text = String::new();
        let keys_len = header.keys().len();

        for row in rows {
            let row = run_serialize_stages(&stages, row, keys_len, &resolved);
            let mut first = true;
            for field in &row {
                if !first {
                    text.push(resolved.delimiter);
                }
                first = false;
                text.push_str(&encoder.encode(field.as_deref()));
            }
            text.push_str(&resolved.record_separator);
        }

        SerializeOutput { errors, text }
    }

    /// Flattens one record and coerces every field to a string-or-null.
    fn coerce_record(
        &self,
        record: &Record,
        resolved: &Resolved,
        errors: &mut Vec<ErrorItem>,
    ) -> Vec<Option<String>> {
        let values: Vec<&Value> = match record {
            Record::List(values) => values.iter().collect(),
            Record::Object(map) => map.values().collect(),
        };

        let mut row = Vec::with_capacity(values.len());

        for value in values {
            match value {
                Value::String(s) => row.push(Some(s.clone())),
                Value::Number(n) if n.is_nan() => row.push(None),
                Value::Number(n) => row.push(Some(n.to_string())),
                Value::Bool(b) => row.push(Some(b.to_string())),
                Value::Null => row.push(None),
                Value::Array(_) | Value::Object(_) => {
                    if resolved.allow_list_values {
                        match serde_json::to_string(value) {
                            Ok(json) => row.push(Some(json)),
                            // Unencodable content (a non-finite number
                            // somewhere inside): drop the field.
                            Err(_) => errors.push(
                                ErrorItem::new(ErrorKind::UnsupportedFieldType)
                                    .with_detail(resolved.verbosity, || value.to_string()),
                            ),
                        }
                    } else {
                        let kind = if value.is_array() { "Array" } else { "Object" };
                        errors.push(
                            ErrorItem::new(ErrorKind::DisallowedFieldType { kind }).with_detail(
                                resolved.verbosity,
                                || {
                                    serde_json::to_string(value)
                                        .unwrap_or_else(|_| value.to_string())
                                },
                            ),
                        );
                        row.push(None);
                    }
                }
            }
        }

        row
    }
}

/// Joins a coerced row for diagnostics; null fields render as empty slots.
fn join_row(row: &[Option<String>]) -> String {
    row.iter()
        .map(|field| field.clone().unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn csv_encoder() -> Encoder {
        Encoder::new(',', '"', '"')
    }

    #[test]
    fn plain_values_stay_unquoted() {
        assert_eq!(csv_encoder().encode(Some("abc")), "abc");
        assert_eq!(csv_encoder().encode(Some("")), "");
    }

    #[test]
    fn null_renders_as_its_marker() {
        assert_eq!(csv_encoder().encode(None), "null");
    }

    #[test]
    fn embedded_delimiter_forces_quoting() {
        assert_eq!(csv_encoder().encode(Some("a,b")), "\"a,b\"");
    }

    #[test]
    fn embedded_quotes_are_doubled_in_doubling_mode() {
        assert_eq!(
            csv_encoder().encode(Some("he said \"hi\"")),
            "\"he said \"\"hi\"\"\""
        );
    }

    #[test]
    fn embedded_quotes_are_escape_prefixed_in_escaping_mode() {
        let encoder = Encoder::new(',', '"', '\\');
        assert_eq!(encoder.encode(Some("a\"b")), "\"a\\\"b\"");
    }
}
