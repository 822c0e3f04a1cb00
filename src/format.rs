//! DSV Dialect Rules
//!
//! This module documents the delimiter-separated-value dialect family as
//! implemented by this library.
//!
//! # Overview
//!
//! DSV is not one format but a family: CSV, TSV and whitespace-separated
//! tables all share the same shape — one record per line, fields split on a
//! delimiter, a quoting convention to protect delimiters inside fields —
//! and differ only in which characters play which role. This library models
//! the family with three dialect characters and a set of boolean shaping
//! options, so any member can be described without a new parser.
//!
//! ## Design Philosophy
//!
//! - **Totality**: parsing and serializing never fail; problems accumulate
//!   as error values next to the usable output
//! - **Symmetry**: both directions share the header policy and the ordered
//!   field pipeline
//! - **Line independence**: each input row is one logical record, so rows
//!   can be processed from any windowed or chunked source
//!
//! # Dialect Parameters
//!
//! | Parameter | Role | CSV | TSV | SSV |
//! |-----------|------|-----|-----|-----|
//! | `delimiter` | Splits fields | `,` | `\t` | ` ` (space) |
//! | `quote` | Wraps fields containing the delimiter | `"` | `"` | `"` |
//! | `escape` | Prefixes a literal quote inside a quoted field | `"` | `"` | `\` |
//! | `record_separator` | Terminates each serialized record | `\n` | `\n` | `\n` |
//!
//! The `quote` and `escape` characters select one of two quoting
//! conventions:
//!
//! - **Doubling** (`quote == escape`, RFC 4180 style): a literal quote
//!   inside a quoted field is written twice: `"he said ""hi"""`
//! - **Escaping** (`quote != escape`, Unix style): a literal quote is
//!   prefixed by the escape character: `"he said \"hi\""`
//!
//! ## Quoting While Scanning
//!
//! A field begins quoted if its first character is the quote character.
//! Inside a quoted field the delimiter is ordinary text. The surrounding
//! quote pair is stripped from the scanned field, and escaped quotes
//! collapse to single quotes:
//!
//! ```text
//! a,"b,c",d        →  a | b,c | d
//! "he said ""hi""" →  he said "hi"
//! ```
//!
//! A trailing delimiter at the end of a line always contributes one more
//! empty field, and an empty line scans as a single empty field.
//!
//! ## Quoting While Encoding
//!
//! The encoder quotes only when it must:
//!
//! - Field contains the quote character: wrap in quotes and escape each
//!   inner quote
//! - Field contains the delimiter (but no quote): wrap in quotes
//! - Otherwise: emit the field verbatim
//!
//! # Header Resolution
//!
//! Whether records are keyed objects or plain field lists, and whether the
//! first row is schema or data, follow from two inputs — the provided
//! `header` (possibly empty) and the `skip_header` flag:
//!
//! | `skip_header` | provided keys | header set | first row ignored | records |
//! |---------------|---------------|------------|-------------------|---------|
//! | `false` | none | no — adopted from first row | no (it is the schema) | objects |
//! | `false` | some | yes | no (it is data) | objects |
//! | `true` | none | yes | yes | lists |
//! | `true` | some | yes | yes | objects |
//!
//! A row skipped by `skip_header` is not scanned at all; its content never
//! influences field counts or diagnostics.
//!
//! # Field Pipeline
//!
//! Enabled shaping options run per record in a fixed order:
//!
//! 1. `fixed_length` — reject rows whose field count differs from the
//!    header's
//! 2. `skip_empty_values` — drop empty-string fields
//! 3. `trim_whitespaces` — trim each field
//! 4. `empty_as_null` — turn empty strings into nulls
//! 5. `skip_null` — drop null fields
//! 6. `missing_as_null` — pad short rows with nulls up to the header length
//!
//! The order is observable: with both `trim_whitespaces` and
//! `empty_as_null` enabled, a whitespace-only field becomes null, because
//! trimming runs first.
//!
//! # Values
//!
//! Parsed fields are always strings; typed values arise only on the
//! serializing side, where records may hold booleans, numbers, nulls and —
//! when `allow_list_values` is enabled — nested arrays and objects
//! rendered as JSON text.
//!
//! | Value | Serialized field |
//! |-------|------------------|
//! | `null` | `null` |
//! | `true` / `false` | `true` / `false` |
//! | Finite number | Decimal notation |
//! | `Infinity` / `-Infinity` | `Infinity` / `-Infinity` |
//! | `NaN` | `null` |
//! | Array / Object | JSON text, or an error when not allowed |
//!
//! # Error Model
//!
//! Both directions return `{errors, output}` pairs. The `verbosity` option
//! controls how much context each error carries: `Quiet` keeps only the
//! error kind, `WithLines` adds 1-based line numbers, and `WithDetails`
//! additionally attaches the offending values.
//!
//! # Limitations
//!
//! - **Record separators inside quoted fields**: not supported; every
//!   physical line is one record
//! - **Parsing does no type inference**: `"42"` parses as the string `42`
//! - **Duplicate header keys**: later columns overwrite earlier ones in
//!   object records

// This module contains only documentation; no implementation code
