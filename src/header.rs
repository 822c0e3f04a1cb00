//! Header resolution and per-call header state.
//!
//! Whether the first row of a DSV input is data or schema depends on two
//! configuration inputs: the `skip_header` flag and whether a header was
//! provided. The combinations resolve as follows (parse direction):
//!
//! | skip_header | provided header | header set | first row | record shape |
//! |-------------|-----------------|------------|-----------|--------------|
//! | true        | empty           | yes        | ignored   | list         |
//! | true        | keys            | yes        | ignored   | object       |
//! | false       | keys            | yes        | data      | object       |
//! | false       | empty           | no         | becomes header | object  |
//!
//! When the header starts out unset, the first successfully post-processed
//! data row is adopted as the header (consumed, not emitted) and the state
//! flips for the rest of the call.
//!
//! All of this state is local to one `parse`/`serialize` invocation. Nothing
//! here outlives a call, so repeated invocations with different inputs can
//! never leak keys into each other.

use crate::Value;

/// Parse-direction header state, threaded through one `parse` call.
#[derive(Debug, Clone)]
pub(crate) struct ParseHeaderState {
    keys: Vec<String>,
    keys_len: usize,
    header_is_set: bool,
    ignore_first_row: bool,
    object_records: bool,
}

impl ParseHeaderState {
    /// Applies the resolution table to the configured header and flag.
    pub(crate) fn resolve(provided: &[String], skip_header: bool) -> Self {
        let provided_keys = provided.len();
        ParseHeaderState {
            keys: provided.to_vec(),
            keys_len: provided_keys,
            header_is_set: skip_header || provided_keys > 0,
            ignore_first_row: skip_header,
            object_records: !skip_header || provided_keys > 0,
        }
    }

    /// The header keys resolved so far (empty until set in list mode).
    pub(crate) fn keys(&self) -> &[String] {
        &self.keys
    }

    /// The row length every record is validated against.
    pub(crate) fn keys_len(&self) -> usize {
        self.keys_len
    }

    /// Whether a header (or, in list mode, a fixed row length) is in effect.
    pub(crate) fn is_set(&self) -> bool {
        self.header_is_set
    }

    /// Whether the first input row is skipped outright.
    pub(crate) fn ignore_first_row(&self) -> bool {
        self.ignore_first_row
    }

    /// Whether records are emitted as key→value maps rather than lists.
    pub(crate) fn object_records(&self) -> bool {
        self.object_records
    }

    /// In list mode the first scanned row fixes the expected length for
    /// fixed-length validation, without becoming a header.
    pub(crate) fn fix_list_len(&mut self, len: usize) {
        if self.keys_len == 0 && !self.object_records {
            self.keys_len = len;
        }
    }

    /// Adopts a post-processed data row as the header. The row is consumed.
    pub(crate) fn adopt(&mut self, fields: Vec<Value>) {
        self.keys = fields.into_iter().map(Value::into_key).collect();
        self.keys_len = self.keys.len();
        self.header_is_set = true;
        self.ignore_first_row = false;
    }
}

/// Serialize-direction header state, threaded through one `serialize` call.
///
/// The serialize table is simpler: a provided header is emitted as the first
/// row unless `skip_header`; with no provided header the first record's keys
/// take its place (emitted only when that record is object-shaped, since a
/// list record has no keys worth printing).
#[derive(Debug, Clone)]
pub(crate) struct SerializeHeaderState {
    keys: Vec<String>,
    header_is_set: bool,
    emit_provided: bool,
}

impl SerializeHeaderState {
    pub(crate) fn resolve(provided: &[String], skip_header: bool) -> Self {
        let provided_keys = provided.len();
        SerializeHeaderState {
            keys: provided.to_vec(),
            header_is_set: skip_header,
            emit_provided: !skip_header && provided_keys > 0,
        }
    }

    pub(crate) fn keys(&self) -> &[String] {
        &self.keys
    }

    pub(crate) fn is_set(&self) -> bool {
        self.header_is_set
    }

    /// Whether the provided header should be emitted as the first row.
    pub(crate) fn emit_provided(&self) -> bool {
        self.emit_provided
    }

    pub(crate) fn mark_set(&mut self) {
        self.header_is_set = true;
    }

    /// Adopts keys derived from the first record.
    pub(crate) fn adopt(&mut self, keys: Vec<String>) {
        self.keys = keys;
        self.header_is_set = true;
    }

    /// Fixed-length validation with no keys yet locks onto the first emitted
    /// row's fields.
    pub(crate) fn fix_len_from(&mut self, row: &[Option<String>]) {
        if self.keys.is_empty() {
            self.keys = row
                .iter()
                .map(|field| field.clone().unwrap_or_else(|| "null".to_string()))
                .collect();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn skip_header_without_keys_ignores_first_row_and_emits_lists() {
        let state = ParseHeaderState::resolve(&[], true);
        assert!(state.is_set());
        assert!(state.ignore_first_row());
        assert!(!state.object_records());
    }

    #[test]
    fn skip_header_with_keys_ignores_first_row_and_emits_objects() {
        let state = ParseHeaderState::resolve(&keys(&["a", "b"]), true);
        assert!(state.is_set());
        assert!(state.ignore_first_row());
        assert!(state.object_records());
    }

    #[test]
    fn provided_keys_without_skip_treat_first_row_as_data() {
        let state = ParseHeaderState::resolve(&keys(&["a", "b"]), false);
        assert!(state.is_set());
        assert!(!state.ignore_first_row());
        assert!(state.object_records());
    }

    #[test]
    fn no_keys_and_no_skip_waits_for_a_data_header() {
        let mut state = ParseHeaderState::resolve(&[], false);
        assert!(!state.is_set());
        assert!(!state.ignore_first_row());
        assert!(state.object_records());

        state.adopt(vec![Value::from("x"), Value::from("y")]);
        assert!(state.is_set());
        assert_eq!(state.keys(), ["x", "y"]);
        assert_eq!(state.keys_len(), 2);
    }

    #[test]
    fn list_mode_locks_length_from_the_first_row_only() {
        let mut state = ParseHeaderState::resolve(&[], true);
        state.fix_list_len(3);
        state.fix_list_len(5);
        assert_eq!(state.keys_len(), 3);
        assert!(state.keys().is_empty());
    }

    #[test]
    fn serialize_emits_a_provided_header_unless_skipped() {
        let state = SerializeHeaderState::resolve(&keys(&["a"]), false);
        assert!(state.emit_provided());
        assert!(!state.is_set());

        let skipped = SerializeHeaderState::resolve(&keys(&["a"]), true);
        assert!(!skipped.emit_provided());
        assert!(skipped.is_set());
    }
}
