//! Ordered field-processing stages shared by both codec directions.
//!
//! Each direction owns a fixed stage order; configuration flags decide which
//! stages participate, never in which order they run. The enabled stages are
//! collected once per call into an ordered list and applied row by row:
//!
//! Parse direction (post-processing, after scanning):
//!
//! 1. fixed-length check — deviating rows are emptied with an error
//! 2. skip empty values
//! 3. trim whitespaces
//! 4. empty as null
//! 5. skip null
//! 6. missing as null (pad/truncate to the header length)
//!
//! Serialize direction (pre-processing, after type coercion):
//!
//! 1. trim whitespaces
//! 2. empty as null
//! 3. skip null
//! 4. fill missing (pad to the header length, rendering nulls as `null_as`)
//!
//! Only the fixed-length check short-circuits its row; every other stage
//! keeps going, and errors accumulate without aborting the call.

use crate::error::{ErrorItem, ErrorKind};
use crate::header::ParseHeaderState;
use crate::options::Resolved;
use crate::Value;

/// One parse-side stage tag, evaluated in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ParseStage {
    FixedLength,
    SkipEmptyValues,
    TrimWhitespaces,
    EmptyAsNull,
    SkipNull,
    MissingAsNull,
}

/// Collects the enabled parse-side stages in their fixed order.
pub(crate) fn parse_stages(resolved: &Resolved) -> Vec<ParseStage> {
    let mut stages = Vec::new();
    if resolved.fixed_length {
        stages.push(ParseStage::FixedLength);
    }
    if resolved.skip_empty_values {
        stages.push(ParseStage::SkipEmptyValues);
    }
    if resolved.trim_whitespaces {
        stages.push(ParseStage::TrimWhitespaces);
    }
    if resolved.empty_as_null {
        stages.push(ParseStage::EmptyAsNull);
    }
    if resolved.skip_null {
        stages.push(ParseStage::SkipNull);
    }
    if resolved.missing_as_null {
        stages.push(ParseStage::MissingAsNull);
    }
    stages
}

/// Runs the enabled parse-side stages over one row's fields.
///
/// Returns the accumulated errors next to the transformed fields; a row
/// emptied by the fixed-length check flows through the remaining stages as
/// an empty list, which they all leave alone.
pub(crate) fn run_parse_stages(
    stages: &[ParseStage],
    mut fields: Vec<Value>,
    header: &ParseHeaderState,
    line: Option<usize>,
    resolved: &Resolved,
) -> (Vec<ErrorItem>, Vec<Value>) {
    let mut errors = Vec::new();

    for stage in stages {
        match stage {
            ParseStage::FixedLength => {
                if header.is_set() && header.keys_len() != fields.len() {
                    errors.push(
                        ErrorItem::new(ErrorKind::FieldCountMismatch)
                            .at_line(resolved.verbosity, line)
                            .with_detail(resolved.verbosity, || {
                                format!(
                                    "values [{}] and headers [{}]",
                                    join_fields(&fields),
                                    header.keys().join(",")
                                )
                            }),
                    );
                    fields.clear();
                }
            }
            ParseStage::SkipEmptyValues => {
                fields.retain(|field| field.as_str() != Some(""));
            }
            ParseStage::TrimWhitespaces => {
                for field in &mut fields {
                    if let Value::String(s) = field {
                        let trimmed = s.trim();
                        if trimmed.len() != s.len() {
                            *field = Value::String(trimmed.to_string());
                        }
                    }
                }
            }
            ParseStage::EmptyAsNull => {
                for field in &mut fields {
                    if field.as_str() == Some("") {
                        *field = Value::Null;
                    }
                }
            }
            ParseStage::SkipNull => {
                fields.retain(|field| !field.is_null());
            }
            ParseStage::MissingAsNull => {
                if header.is_set() {
                    fields.resize(header.keys_len(), Value::Null);
                }
            }
        }
    }

    (errors, fields)
}

/// One serialize-side stage tag, evaluated in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SerializeStage {
    TrimWhitespaces,
    EmptyAsNull,
    SkipNull,
    FillMissing,
}

/// Collects the enabled serialize-side stages in their fixed order. The
/// fill stage participates exactly when a `null_as` replacement is set.
pub(crate) fn serialize_stages(resolved: &Resolved) -> Vec<SerializeStage> {
    let mut stages = Vec::new();
    if resolved.trim_whitespaces {
        stages.push(SerializeStage::TrimWhitespaces);
    }
    if resolved.empty_as_null {
        stages.push(SerializeStage::EmptyAsNull);
    }
    if resolved.skip_null {
        stages.push(SerializeStage::SkipNull);
    }
    if resolved.null_as.is_some() {
        stages.push(SerializeStage::FillMissing);
    }
    stages
}

/// Runs the enabled serialize-side stages over one coerced row. Fields here
/// are already stringified; `None` is a null field.
pub(crate) fn run_serialize_stages(
    stages: &[SerializeStage],
    mut row: Vec<Option<String>>,
    keys_len: usize,
    resolved: &Resolved,
) -> Vec<Option<String>> {
    for stage in stages {
        match stage {
            SerializeStage::TrimWhitespaces => {
                for field in &mut row {
                    if let Some(s) = field {
                        let trimmed = s.trim();
                        if trimmed.len() != s.len() {
                            *field = Some(trimmed.to_string());
                        }
                    }
                }
            }
            SerializeStage::EmptyAsNull => {
                for field in &mut row {
                    if field.as_deref() == Some("") {
                        *field = None;
                    }
                }
            }
            SerializeStage::SkipNull => {
                row.retain(Option::is_some);
            }
            SerializeStage::FillMissing => {
                let fill = resolved.null_as.clone().unwrap_or_default();
                row = (0..keys_len)
                    .map(|i| match row.get(i) {
                        Some(Some(value)) => Some(value.clone()),
                        _ => Some(fill.clone()),
                    })
                    .collect();
            }
        }
    }
    row
}

/// Joins fields for diagnostics the way the error dumps expect: nulls
/// render as empty slots, everything else as its display form.
fn join_fields(fields: &[Value]) -> String {
    fields
        .iter()
        .map(|field| match field {
            Value::Null => String::new(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(",")
}
