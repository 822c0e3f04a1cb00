//! DSV parsing: the field scanner and the parse facade.
//!
//! ## Overview
//!
//! Parsing is strictly line-oriented — each input row is one logical record,
//! embedded record separators are out of contract. A row moves through:
//!
//! 1. the scanner, a single left-to-right character state machine that
//!    splits the raw line into field strings, honoring quoting and escaping
//! 2. the enabled pipeline stages in their fixed order
//! 3. header resolution — an unset header consumes the first surviving row
//! 4. record assembly — object-shaped against the header keys, or the plain
//!    field list when no object header is in effect
//!
//! Scanning never fails: malformed quoting (an unterminated quote) consumes
//! to end of line and yields a best-effort field. All reportable problems
//! accumulate in [`ParseOutput::errors`] while parsing continues.
//!
//! ## Usage
//!
//! Most users go through [`parse`](crate::parse) in the crate root:
//!
//! ```rust
//! use dsv_codec::{parse, DsvOptions, Value};
//!
//! let output = parse(&["a,b", "1,2", "3,4"], &DsvOptions::csv());
//! assert!(output.errors.is_empty());
//! assert_eq!(output.records[0].get("a"), Some(&Value::from("1")));
//! assert_eq!(output.records[1].get("b"), Some(&Value::from("4")));
//! ```

use crate::error::ErrorItem;
use crate::header::ParseHeaderState;
use crate::options::DsvOptions;
use crate::pipeline::{parse_stages, run_parse_stages};
use crate::{Record, RecordMap, Value};

/// The result of one `parse` call: accumulated errors next to the records
/// that made it through. Partial success is the normal case, not an
/// exception.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParseOutput {
    /// Errors in input order; empty on full success.
    pub errors: Vec<ErrorItem>,
    /// One record per surviving input row, in input order.
    pub records: Vec<Record>,
}

/// Quote handling variant, fixed at scanner construction.
///
/// The two conventions have genuinely different state machines — doubling
/// needs one character of lookbehind to tell an escaped quote from a closing
/// quote, escaping needs a one-shot literal flag — so they are separate scan
/// loops rather than branches inside one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteMode {
    /// `quote == escape`: an embedded quote is written twice (`""`).
    Doubling,
    /// `quote != escape`: an embedded quote is preceded by the escape char.
    Escaping,
}

/// The quote/escape-aware field tokenizer.
///
/// `scan` is a pure function of the line and the construction-time
/// configuration.
#[derive(Debug, Clone)]
pub(crate) struct Scanner {
    delimiter: char,
    quote: char,
    escape: char,
    mode: QuoteMode,
}

impl Scanner {
    pub(crate) fn new(delimiter: char, quote: char, escape: char) -> Self {
        let mode = if quote == escape {
            QuoteMode::Doubling
        } else {
            QuoteMode::Escaping
        };
        Scanner {
            delimiter,
            quote,
            escape,
            mode,
        }
    }

    /// Splits one raw line into its fields.
    ///
    /// An empty line is one empty field, and a line ending exactly on a
    /// delimiter carries one more empty trailing field.
    pub(crate) fn scan(&self, line: &str) -> Vec<String> {
        match self.mode {
            QuoteMode::Doubling => self.scan_doubling(line),
            QuoteMode::Escaping => self.scan_escaping(line),
        }
    }

    fn scan_doubling(&self, line: &str) -> Vec<String> {
        let mut fields = Vec::new();
        if line.is_empty() {
            fields.push(String::new());
            return fields;
        }

        let mut from = 0usize;
        let mut in_quote = false;
        let mut maybe_escaped = false;
        let mut has_quotes = false;
        let mut has_escaped_quotes = false;

        for (at, ch) in line.char_indices() {
            let next = at + ch.len_utf8();
            let is_last = next == line.len();
            let mut boundary = false;

            if in_quote {
                has_quotes = true;
                if maybe_escaped {
                    // The previous char was the quote/escape char inside a
                    // quoted field; this char decides what it meant.
                    maybe_escaped = false;
                    if ch == self.quote {
                        has_escaped_quotes = true;
                    } else {
                        in_quote = false;
                    }
                    if ch == self.delimiter {
                        boundary = true;
                    }
                } else if ch == self.quote {
                    maybe_escaped = true;
                }
            } else if ch == self.quote {
                in_quote = true;
            } else if ch == self.delimiter {
                boundary = true;
            }

            if boundary || is_last {
                let end = if boundary { at } else { next };
                fields.push(self.finish_field(
                    &line[from..end],
                    has_quotes,
                    has_escaped_quotes,
                ));
                from = next;
                has_quotes = false;
                has_escaped_quotes = false;
            }

            if is_last && ch == self.delimiter {
                fields.push(String::new());
            }
        }

        fields
    }

    fn scan_escaping(&self, line: &str) -> Vec<String> {
        let mut fields = Vec::new();
        if line.is_empty() {
            fields.push(String::new());
            return fields;
        }

        let mut from = 0usize;
        let mut in_quote = false;
        let mut is_escaped = false;
        let mut has_quotes = false;
        let mut has_escaped_quotes = false;

        for (at, ch) in line.char_indices() {
            let next = at + ch.len_utf8();
            let is_last = next == line.len();
            let mut boundary = false;

            if in_quote {
                has_quotes = true;
                if is_escaped {
                    is_escaped = false;
                    if ch == self.quote {
                        has_escaped_quotes = true;
                    }
                } else if ch == self.escape {
                    is_escaped = true;
                } else if ch == self.quote {
                    in_quote = false;
                }
            } else if ch == self.quote {
                in_quote = true;
            } else if ch == self.delimiter {
                boundary = true;
            }

            if boundary || is_last {
                let end = if boundary { at } else { next };
                fields.push(self.finish_field(
                    &line[from..end],
                    has_quotes,
                    has_escaped_quotes,
                ));
                from = next;
                has_quotes = false;
                has_escaped_quotes = false;
            }

            if is_last && ch == self.delimiter {
                fields.push(String::new());
            }
        }

        fields
    }

    fn finish_field(&self, raw: &str, has_quotes: bool, has_escaped_quotes: bool) -> String {
        let mut field = raw.to_string();
        if has_quotes {
            field = strip_quote_pair(&field, self.quote);
        }
        if has_escaped_quotes {
            field = collapse_escaped_quotes(&field, self.escape, self.quote);
        }
        field
    }
}

/// Strips exactly one leading/trailing quote pair, if both are present.
fn strip_quote_pair(field: &str, quote: char) -> String {
    let first = field.chars().next();
    let last = field.chars().last();
    if first == Some(quote) && last == Some(quote) {
        let start = quote.len_utf8();
        let end = field.len().saturating_sub(quote.len_utf8());
        if end >= start {
            return field[start..end].to_string();
        }
        return String::new();
    }
    field.to_string()
}

/// Collapses every escape+quote pair into a single quote character.
fn collapse_escaped_quotes(field: &str, escape: char, quote: char) -> String {
    let mut out = String::with_capacity(field.len());
    let mut pending: Option<char> = None;
    for ch in field.chars() {
        match pending {
            None => pending = Some(ch),
            Some(prev) if prev == escape && ch == quote => {
                out.push(quote);
                pending = None;
            }
            Some(prev) => {
                out.push(prev);
                pending = Some(ch);
            }
        }
    }
    if let Some(prev) = pending {
        out.push(prev);
    }
    out
}

/// The parse-direction facade.
///
/// Holds the configuration; all per-call state (header, errors, records) is
/// local to each [`parse`](Parser::parse) invocation, so one `Parser` can be
/// reused across inputs without leakage.
///
/// # Examples
///
/// ```rust
/// use dsv_codec::{DsvOptions, Parser, Record, Value};
///
/// let parser = Parser::new(DsvOptions::csv().with_skip_header(true));
/// let output = parser.parse(&["header,row", "1,2"]);
/// assert_eq!(
///     output.records,
///     vec![Record::List(vec![Value::from("1"), Value::from("2")])]
/// );
/// ```
#[derive(Debug, Clone)]
pub struct Parser {
    options: DsvOptions,
}

impl Parser {
    /// Creates a parser for the given configuration. Option validation
    /// happens per call, so construction never fails.
    #[must_use]
    pub fn new(options: DsvOptions) -> Self {
        Parser { options }
    }

    /// Parses the given rows, numbering diagnostics by 1-based position.
    pub fn parse<S: AsRef<str>>(&self, rows: &[S]) -> ParseOutput {
        self.parse_inner(rows, None)
    }

    /// Parses the given rows with an explicit parallel list of line
    /// numbers, used for diagnostics when the rows do not start at line 1
    /// (e.g. a slice of a larger document). Only consulted at
    /// `WithLines` verbosity and above.
    pub fn parse_with_line_numbers<S: AsRef<str>>(
        &self,
        rows: &[S],
        line_numbers: &[usize],
    ) -> ParseOutput {
        self.parse_inner(rows, Some(line_numbers))
    }

    fn parse_inner<S: AsRef<str>>(
        &self,
        rows: &[S],
        line_numbers: Option<&[usize]>,
    ) -> ParseOutput {
        let resolved = match self.options.resolve_parse() {
            Ok(resolved) => resolved,
            Err(errors) => {
                return ParseOutput {
                    errors,
                    records: Vec::new(),
                }
            }
        };

        let scanner = Scanner::new(resolved.delimiter, resolved.quote, resolved.escape);
        let mut header = ParseHeaderState::resolve(&resolved.header, resolved.skip_header);
        let stages = parse_stages(&resolved);

        let mut errors = Vec::new();
        let mut records = Vec::new();

        let start = usize::from(header.ignore_first_row());

        for (i, row) in rows.iter().enumerate().skip(start) {
            let fields: Vec<Value> = scanner
                .scan(row.as_ref())
                .into_iter()
                .map(Value::String)
                .collect();

            header.fix_list_len(fields.len());

            let line = match line_numbers {
                Some(numbers) => numbers.get(i).copied(),
                None => Some(i + 1),
            };
            let (stage_errors, fields) =
                run_parse_stages(&stages, fields, &header, line, &resolved);
            errors.extend(stage_errors);

            if fields.is_empty() {
                continue;
            }

            if !header.is_set() {
                header.adopt(fields);
            } else if header.object_records() {
                records.push(assemble(fields, &header, &resolved.header_prefix));
            } else {
                records.push(Record::List(fields));
            }
        }

        ParseOutput { errors, records }
    }
}

/// Builds an object-shaped record from a row and the resolved header.
///
/// Iterates to the *longer* of header and row: missing values fill in as
/// null, surplus values get synthesized `prefix + position` keys (1-based).
fn assemble(fields: Vec<Value>, header: &ParseHeaderState, prefix: &str) -> Record {
    let keys = header.keys();
    let until = keys.len().max(fields.len());
    let mut map = RecordMap::with_capacity(until);

    let mut fields = fields.into_iter();
    for j in 0..until {
        let key = match keys.get(j) {
            Some(key) => key.clone(),
            None => format!("{}{}", prefix, j + 1),
        };
        let value = fields.next().unwrap_or(Value::Null);
        map.insert(key, value);
    }

    Record::Object(map)
}
