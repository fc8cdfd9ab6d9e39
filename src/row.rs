//! Row tokenization: raw VSV text to a sequence of typed rows.
//!
//! This module implements the first stage of every conversion. Input text is
//! split into lines, each non-blank line is classified as either a header
//! row or a data row, and its fields are recovered:
//!
//! - **Header rows** start with one of the four doubled open brackets
//!   (`[[`, `((`, `{{`, `<<`). Every doubled-bracket span on the line
//!   becomes one field, with the bracket characters stripped but remembered
//!   (the JSON-text builder needs the original brackets).
//! - **Data rows** are everything else. The first character of the line is
//!   the delimiter for that row; the remainder is split on it. A trailing
//!   delimiter is stripped before splitting, so `,a,b,` and `,a,b` tokenize
//!   identically.
//!
//! Classification happens once per line and a row never mixes kinds. Field
//! order is preserved and fields are never deduplicated.
//!
//! ## Examples
//!
//! ```rust
//! use vsv::{tokenize, Row};
//!
//! let rows = tokenize("[[Name]][[Age]]\n,Alice,30\n");
//! assert_eq!(rows.len(), 2);
//! assert!(rows[0].is_header());
//! assert!(rows[1].is_data());
//! ```

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a line that opens with a doubled bracket, marking a header row.
static FIELD_OPENER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\[\[|\(\(|\{\{|<<)").expect("field opener pattern"));

/// Matches one doubled-bracket field span. The opener and closer need not
/// come from the same pair; the original format accepts `{{x]]`.
static FIELD_BRACKETS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\[({<]{2}(.*?)[\])}>]{2}").expect("field brackets pattern"));

/// One field of a header row: the content between a doubled bracket pair,
/// plus the bracket characters that delimited it.
///
/// An empty `text` is a valid field; the list builder reads it as a dedent
/// signal, and the JSON-text builder as an unnamed container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderField {
    /// Content between the brackets, brackets stripped.
    pub text: String,
    /// The opening bracket character of the span.
    pub open: char,
    /// The closing bracket character of the span.
    pub close: char,
}

impl HeaderField {
    /// Builds a field from bare text with the default `[`/`]` brackets.
    /// Handy for constructing expected rows in tests.
    #[must_use]
    pub fn new(text: &str) -> Self {
        HeaderField {
            text: text.to_string(),
            open: '[',
            close: ']',
        }
    }
}

/// One tokenized line of VSV input.
///
/// Data rows always record the delimiter character that started the line.
/// Most builders only look at the fields, but the delimiter-tag and object
/// builders read the delimiter as the row's operation code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Row {
    /// A line of bracket-delimited field labels.
    Header { fields: Vec<HeaderField> },
    /// A line of delimiter-separated values.
    Data { delimiter: char, fields: Vec<String> },
}

impl Row {
    /// Returns `true` if this is a header row.
    #[inline]
    #[must_use]
    pub const fn is_header(&self) -> bool {
        matches!(self, Row::Header { .. })
    }

    /// Returns `true` if this is a data row.
    #[inline]
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(self, Row::Data { .. })
    }

    /// Number of fields carried by this row.
    #[must_use]
    pub fn field_count(&self) -> usize {
        match self {
            Row::Header { fields } => fields.len(),
            Row::Data { fields, .. } => fields.len(),
        }
    }
}

/// Decodes the four HTML entities the markup may arrive escaped with.
///
/// The replacement order matches the reference decoders: `&amp;` first,
/// so `&amp;lt;` decodes all the way to `<`.
fn decode_entities(text: &str) -> String {
    text.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
}

/// Tokenizes VSV text into an ordered sequence of rows.
///
/// Lines are separated by `\n`. Leading and trailing space characters are
/// stripped from each line (only spaces; a leading tab is a legitimate
/// delimiter choice). Lines that are empty after stripping produce no row.
///
/// A header line whose bracket scan finds no complete span still yields a
/// header row with zero fields, so downstream builders can treat it as a
/// dedent signal. A data line with no content after its delimiter yields a
/// data row with zero fields rather than failing.
///
/// # Examples
///
/// ```rust
/// use vsv::{tokenize, Row};
///
/// let rows = tokenize("[[A]][[B]]\n,1,2\n,3,4,\n");
/// match &rows[2] {
///     Row::Data { delimiter, fields } => {
///         assert_eq!(*delimiter, ',');
///         // trailing delimiter is stripped, not an empty field
///         assert_eq!(fields, &["3", "4"]);
///     }
///     _ => panic!("expected data row"),
/// }
/// ```
#[must_use]
pub fn tokenize(text: &str) -> Vec<Row> {
    let decoded = decode_entities(text);
    let mut rows = Vec::new();

    for line in decoded.split('\n') {
        let line = line.trim_matches(' ');
        if line.is_empty() {
            continue;
        }

        if FIELD_OPENER.is_match(line) {
            let fields = FIELD_BRACKETS
                .captures_iter(line)
                .map(|caps| {
                    let span = caps.get(0).map_or("", |m| m.as_str());
                    HeaderField {
                        text: caps[1].to_string(),
                        open: span.chars().next().unwrap_or('['),
                        close: span.chars().next_back().unwrap_or(']'),
                    }
                })
                .collect();
            rows.push(Row::Header { fields });
        } else {
            let mut chars = line.chars();
            let Some(delimiter) = chars.next() else {
                continue;
            };
            let mut rest = chars.as_str();
            if let Some(stripped) = rest.strip_suffix(delimiter) {
                rest = stripped;
            }
            let fields = if rest.is_empty() {
                Vec::new()
            } else {
                rest.split(delimiter).map(str::to_string).collect()
            };
            rows.push(Row::Data { delimiter, fields });
        }
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_fields(row: &Row) -> &[String] {
        match row {
            Row::Data { fields, .. } => fields,
            _ => panic!("expected data row"),
        }
    }

    fn header_texts(row: &Row) -> Vec<&str> {
        match row {
            Row::Header { fields } => fields.iter().map(|f| f.text.as_str()).collect(),
            _ => panic!("expected header row"),
        }
    }

    #[test]
    fn test_classifies_header_and_data() {
        let rows = tokenize("[[A]][[B]]\n,1,2");
        assert!(rows[0].is_header());
        assert!(rows[1].is_data());
        assert_eq!(
            rows[0],
            Row::Header {
                fields: vec![HeaderField::new("A"), HeaderField::new("B")],
            }
        );
        assert_eq!(data_fields(&rows[1]), &["1", "2"]);
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let rows = tokenize("\n   \n,1\n\n");
        assert_eq!(rows.len(), 1);
    }

    #[test]
    fn test_trailing_delimiter_is_optional() {
        let with = tokenize(",a,b,");
        let without = tokenize(",a,b");
        assert_eq!(with, without);
    }

    #[test]
    fn test_empty_data_row_yields_no_fields() {
        let rows = tokenize(",");
        assert_eq!(data_fields(&rows[0]), &[] as &[String]);

        // one delimiter repeated: trailing strip first, then empty
        let rows = tokenize(",,");
        assert_eq!(data_fields(&rows[0]), &[] as &[String]);
    }

    #[test]
    fn test_empty_fields_are_preserved_inside_rows() {
        let rows = tokenize(",a,,b");
        assert_eq!(data_fields(&rows[0]), &["a", "", "b"]);
    }

    #[test]
    fn test_any_first_character_is_a_delimiter() {
        let rows = tokenize("|x|y");
        assert_eq!(data_fields(&rows[0]), &["x", "y"]);

        let rows = tokenize("\t1\t2");
        assert_eq!(data_fields(&rows[0]), &["1", "2"]);
    }

    #[test]
    fn test_header_detection_is_anchored() {
        // doubled bracket later in the line does not make a header row
        let rows = tokenize("x[[A]]");
        assert!(rows[0].is_data());
    }

    #[test]
    fn test_header_with_no_spans_yields_zero_fields() {
        let rows = tokenize("[[unterminated");
        assert!(rows[0].is_header());
        assert_eq!(rows[0].field_count(), 0);
    }

    #[test]
    fn test_empty_header_field() {
        let rows = tokenize("[[]][[x]]");
        assert_eq!(header_texts(&rows[0]), vec!["", "x"]);
    }

    #[test]
    fn test_header_fields_remember_brackets() {
        let rows = tokenize("{{obj}}[[arr]]");
        match &rows[0] {
            Row::Header { fields } => {
                assert_eq!((fields[0].open, fields[0].close), ('{', '}'));
                assert_eq!((fields[1].open, fields[1].close), ('[', ']'));
            }
            _ => panic!("expected header row"),
        }
    }

    #[test]
    fn test_mixed_bracket_pairs_are_tolerated() {
        let rows = tokenize("{{x]]");
        assert_eq!(header_texts(&rows[0]), vec!["x"]);
    }

    #[test]
    fn test_spaces_trimmed_but_not_tabs() {
        let rows = tokenize("   ,a,b  ");
        assert_eq!(data_fields(&rows[0]), &["a", "b"]);

        // a leading tab is the delimiter, not padding
        let rows = tokenize("\t,a");
        match &rows[0] {
            Row::Data { delimiter, fields } => {
                assert_eq!(*delimiter, '\t');
                assert_eq!(fields, &[",a"]);
            }
            _ => panic!("expected data row"),
        }
    }

    #[test]
    fn test_html_entities_decode_before_tokenizing() {
        let rows = tokenize("&lt;&lt;tag&gt;&gt;");
        assert!(rows[0].is_header());
        assert_eq!(header_texts(&rows[0]), vec!["tag"]);

        let rows = tokenize(",a &amp; b");
        assert_eq!(data_fields(&rows[0]), &["a & b"]);
    }

    #[test]
    fn test_delimiter_recorded_on_data_rows() {
        let rows = tokenize("{div");
        match &rows[0] {
            Row::Data { delimiter, fields } => {
                assert_eq!(*delimiter, '{');
                assert_eq!(fields, &["div"]);
            }
            _ => panic!("expected data row"),
        }
    }
}
