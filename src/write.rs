//! Writing VSV markup: bracket and delimiter allocation.
//!
//! This is the inverse direction of [`tokenize`](crate::tokenize) and is
//! independent of the builders; it shares only the fixed symbol tables with
//! the tokenizer. Given field strings, the writer picks a bracket pair or a
//! delimiter that is guaranteed absent from the content, so the produced
//! line tokenizes back to exactly the original fields.
//!
//! Allocation can fail: when every candidate symbol occurs somewhere in the
//! content there is no unambiguous way to write it. [`write_field`] and
//! [`find_delimiter`] surface that as an error; the line-level helpers
//! [`write_header`] and [`write_data`] skip the offending field or row with
//! a `log` warning and keep going, so one hostile field never aborts a
//! larger serialization.
//!
//! ## Examples
//!
//! ```rust
//! use vsv::{write_header, write_data, WriteOptions};
//!
//! let opts = WriteOptions::new();
//! assert_eq!(write_header(&["Name", "Age"], &opts), "[[Name]] [[Age]] \n");
//! assert_eq!(write_data(&["Alice", "30"], &opts), ",Alice,30\n");
//! ```

use crate::options::WriteOptions;
use crate::{Error, Result};
use log::warn;

/// The fixed bracket alphabet, as ordered open/close pairs.
///
/// Header rows are recognized by a doubled opening character and fields are
/// recovered by stripping a doubled open/close pair; the writer scans this
/// table for a pair absent from the content.
pub const BRACKET_PAIRS: [(char, char); 4] = [('[', ']'), ('(', ')'), ('{', '}'), ('<', '>')];

/// Default delimiter candidates for data rows, scanned in order.
///
/// At parse time any character works as a delimiter; this set only
/// constrains what the writer will pick on its own.
pub const DEFAULT_DELIMITERS: &str = ",.-=:`|;\"";

/// Index of the pair a preferred bracket character belongs to.
/// A close bracket selects its own pair; unknown characters select pair 0.
fn pair_index(preferred: Option<char>) -> usize {
    match preferred {
        Some(ch) => BRACKET_PAIRS
            .iter()
            .position(|&(open, close)| open == ch || close == ch)
            .unwrap_or(0),
        None => 0,
    }
}

/// Selects a bracket pair whose characters both appear nowhere in `text`.
///
/// The scan starts at the pair containing `preferred` (if given) and wraps
/// around the table.
///
/// # Examples
///
/// ```rust
/// use vsv::choose_bracket;
///
/// assert_eq!(choose_bracket("plain", None).unwrap(), ('[', ']'));
/// // `[` occurs in the text, so the scan moves on to the next pair
/// assert_eq!(choose_bracket("a[b", None).unwrap(), ('(', ')'));
/// // a preferred character starts the scan at its pair
/// assert_eq!(choose_bracket("plain", Some('{')).unwrap(), ('{', '}'));
/// ```
///
/// # Errors
///
/// Returns [`Error::NoUsableBracket`] if all four pairs are contaminated.
pub fn choose_bracket(text: &str, preferred: Option<char>) -> Result<(char, char)> {
    let start = pair_index(preferred);
    for i in 0..BRACKET_PAIRS.len() {
        let (open, close) = BRACKET_PAIRS[(start + i) % BRACKET_PAIRS.len()];
        if !text.contains(open) && !text.contains(close) {
            return Ok((open, close));
        }
    }
    Err(Error::no_usable_bracket(text))
}

/// Wraps one field as a doubled-bracket header span.
///
/// # Examples
///
/// ```rust
/// use vsv::write_field;
///
/// assert_eq!(write_field("Name", None).unwrap(), "[[Name]]");
/// assert_eq!(write_field("a[0]", None).unwrap(), "((a[0]))");
/// ```
///
/// # Errors
///
/// Returns [`Error::NoUsableBracket`] if all four pairs occur in the text.
pub fn write_field(text: &str, preferred: Option<char>) -> Result<String> {
    let (open, close) = choose_bracket(text, preferred)?;
    Ok(format!("{open}{open}{text}{close}{close}"))
}

/// Selects the first candidate delimiter absent from `text`.
///
/// # Examples
///
/// ```rust
/// use vsv::{find_delimiter, DEFAULT_DELIMITERS};
///
/// assert_eq!(find_delimiter("abc", DEFAULT_DELIMITERS).unwrap(), ',');
/// assert_eq!(find_delimiter("a,c", DEFAULT_DELIMITERS).unwrap(), '.');
/// ```
///
/// # Errors
///
/// Returns [`Error::NoUsableDelimiter`] if every candidate occurs in `text`.
pub fn find_delimiter(text: &str, candidates: &str) -> Result<char> {
    candidates
        .chars()
        .find(|&d| !text.contains(d))
        .ok_or_else(|| Error::no_usable_delimiter(text))
}

/// Writes one header line from a list of field labels.
///
/// Fields are wrapped with [`write_field`] and joined with spacing derived
/// from the configured indent. A field that contaminates all four bracket
/// pairs is skipped with a warning; the rest of the line is still written.
///
/// # Examples
///
/// ```rust
/// use vsv::{write_header, WriteOptions};
///
/// let line = write_header(&["A", "B"], &WriteOptions::new());
/// assert_eq!(line, "[[A]] [[B]] \n");
///
/// let line = write_header(&["nested"], &WriteOptions::new().with_indent(2));
/// assert_eq!(line, "  [[nested]]  \n");
/// ```
pub fn write_header<S: AsRef<str>>(fields: &[S], options: &WriteOptions) -> String {
    let mut line = " ".repeat(options.indent);
    let spacing = " ".repeat(options.indent.max(1));

    for field in fields {
        match write_field(field.as_ref(), options.bracket) {
            Ok(wrapped) => {
                line.push_str(&wrapped);
                line.push_str(&spacing);
            }
            Err(err) => warn!("skipping header field: {err}"),
        }
    }

    line.push('\n');
    line
}

/// Writes one data line from a list of field values.
///
/// The delimiter is chosen from the caller's extra candidates followed by
/// [`DEFAULT_DELIMITERS`], scanning the concatenation of all fields. If
/// every candidate is contaminated the row is dropped with a warning and an
/// empty string is returned, so surrounding output still completes.
///
/// # Examples
///
/// ```rust
/// use vsv::{write_data, WriteOptions};
///
/// assert_eq!(write_data(&["a", "b"], &WriteOptions::new()), ",a,b\n");
/// // a comma in the content forces the next candidate
/// assert_eq!(write_data(&["a,b", "c"], &WriteOptions::new()), ".a,b.c\n");
/// ```
pub fn write_data<S: AsRef<str>>(fields: &[S], options: &WriteOptions) -> String {
    let mut candidates = options.extra_delimiters.clone();
    candidates.push_str(DEFAULT_DELIMITERS);

    let joined: String = fields.iter().map(|f| f.as_ref()).collect();
    let delimiter = match find_delimiter(&joined, &candidates) {
        Ok(d) => d,
        Err(err) => {
            warn!("skipping data row: {err}");
            return String::new();
        }
    };

    let mut line = " ".repeat(options.indent);
    for field in fields {
        line.push(delimiter);
        line.push_str(field.as_ref());
    }
    line.push('\n');
    line
}
