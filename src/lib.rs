//! # vsv
//!
//! A parser and writer for VSV (Versatile Separated Values), a
//! line-oriented markup for spreadsheet- and outline-style plain text.
//!
//! ## What is VSV?
//!
//! VSV is a superset of comma-separated values in which every data line
//! declares its own delimiter and header lines carry bracket-wrapped
//! labels. Those two row kinds compose into surprisingly rich structures:
//! nested outlines, tables, attributed tag trees, and JSON-like objects,
//! all from plain text that stays pleasant to author by hand.
//!
//! ## Key Features
//!
//! - **Self-delimiting rows**: the first character of a data line is its
//!   delimiter, so any content can be escaped by picking another symbol
//! - **Six output formats**: nested lists, tables, two tag-tree dialects,
//!   dynamic object values, and JSON-like text
//! - **Graceful degradation**: malformed markup never aborts a conversion;
//!   builders always return a best-effort structure
//! - **Writing direction**: bracket and delimiter allocation that
//!   guarantees written lines tokenize back to the original fields
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! vsv = "0.1"
//! ```
//!
//! ### Parsing a table
//!
//! ```rust
//! use vsv::to_table;
//!
//! let table = to_table("[[Name]][[Age]]\n,Alice,30\n,Bob,25");
//! assert_eq!(table.child_nodes().count(), 3); // header + two data rows
//! ```
//!
//! ### Parsing objects
//!
//! ```rust
//! use vsv::to_object;
//!
//! let value = to_object("{user\n,name,Alice\n}");
//! let user = value.get("user").unwrap();
//! assert_eq!(user.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```
//!
//! ### Dispatching on a format name
//!
//! ```rust
//! use vsv::{convert, Format, Output};
//!
//! let format = Format::from_name("list").unwrap();
//! match convert(",a\n,b", format) {
//!     Output::Tree(list) => assert_eq!(list.child_nodes().count(), 2),
//!     _ => unreachable!("list conversions produce trees"),
//! }
//! ```
//!
//! ### Writing markup
//!
//! ```rust
//! use vsv::{write_header, write_data, WriteOptions};
//!
//! let opts = WriteOptions::new();
//! let mut out = write_header(&["Name", "Age"], &opts);
//! out.push_str(&write_data(&["Alice", "30"], &opts));
//! assert_eq!(out, "[[Name]] [[Age]] \n,Alice,30\n");
//! ```
//!
//! ## Conversion Pipeline
//!
//! Every conversion flows one way: raw text through [`tokenize`] into a
//! sequence of typed [`Row`]s, then through exactly one builder into its
//! output. Builders are selected by the closed [`Format`] enum; each is a
//! pure function of the row sequence with no shared state, so concurrent
//! conversions need no synchronization.
//!
//! ## Format Description
//!
//! See the [`spec`] module for the complete markup description, and the
//! builder modules ([`list`], [`table`], [`tag`], [`object`],
//! [`json_text`]) for each format's construction rules.

pub mod error;
pub mod json_text;
pub mod list;
pub mod macros;
pub mod map;
pub mod node;
pub mod object;
pub mod options;
pub mod row;
pub mod spec;
pub mod table;
pub mod tag;
pub mod value;
pub mod write;

pub use error::{Error, Result};
pub use map::VsvMap;
pub use node::{Child, Node};
pub use options::{Format, WriteOptions};
pub use row::{tokenize, HeaderField, Row};
pub use value::Value;
pub use write::{
    choose_bracket, find_delimiter, write_data, write_field, write_header, BRACKET_PAIRS,
    DEFAULT_DELIMITERS,
};

use std::io;

/// The result of a conversion: a tree, a dynamic value, or plain text,
/// depending on the requested [`Format`].
#[derive(Debug, Clone, PartialEq)]
pub enum Output {
    /// List, table, and tag-tree conversions produce a node tree.
    Tree(Node),
    /// Object conversions produce a dynamic value.
    Value(Value),
    /// JSON-text conversions produce a string.
    Text(String),
}

impl Output {
    /// Returns the node tree, if this output is one.
    #[must_use]
    pub fn into_tree(self) -> Option<Node> {
        match self {
            Output::Tree(node) => Some(node),
            _ => None,
        }
    }

    /// Returns the dynamic value, if this output is one.
    #[must_use]
    pub fn into_value(self) -> Option<Value> {
        match self {
            Output::Value(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the text, if this output is one.
    #[must_use]
    pub fn into_text(self) -> Option<String> {
        match self {
            Output::Text(text) => Some(text),
            _ => None,
        }
    }
}

/// Converts VSV text into the requested output format.
///
/// Tokenizes once and runs the matching builder. Malformed markup never
/// fails; the output is a best-effort, possibly partial structure.
///
/// # Examples
///
/// ```rust
/// use vsv::{convert, Format, Output};
///
/// let output = convert("[[A]][[B]]\n,1,2", Format::Table);
/// assert!(matches!(output, Output::Tree(_)));
///
/// let output = convert(",key,value", Format::JsonText);
/// assert_eq!(output.into_text().unwrap(), r#""key": "value""#);
/// ```
#[must_use]
pub fn convert(text: &str, format: Format) -> Output {
    let rows = tokenize(text);
    match format {
        Format::List => Output::Tree(list::build(&rows)),
        Format::Table => Output::Tree(table::build(&rows)),
        Format::TagTree => Output::Tree(tag::build(&rows)),
        Format::DelimTagTree => Output::Tree(tag::build_delim(&rows)),
        Format::Object => Output::Value(object::build(&rows)),
        Format::JsonText => Output::Text(json_text::build(&rows)),
    }
}

/// Converts VSV read from an I/O source.
///
/// # Examples
///
/// ```rust
/// use std::io::Cursor;
/// use vsv::{convert_reader, Format};
///
/// let reader = Cursor::new(b",a\n,b");
/// let output = convert_reader(reader, Format::List).unwrap();
/// assert_eq!(output.into_tree().unwrap().child_nodes().count(), 2);
/// ```
///
/// # Errors
///
/// Returns an error if reading fails or the input is not valid UTF-8.
pub fn convert_reader<R: io::Read>(mut reader: R, format: Format) -> Result<Output> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(convert(&text, format))
}

/// Converts VSV text into a nested outline list.
///
/// The nesting mode is inferred from the input: header-tiered when the
/// text starts with a labeled header row, delimiter-tiered otherwise. See
/// [`list`] for the full rules.
///
/// # Examples
///
/// ```rust
/// use vsv::to_list;
///
/// let list = to_list("[[Fruits]]\n,apple,banana");
/// let fruits = list.child_nodes().next().unwrap();
/// assert_eq!(fruits.text(), "Fruits");
/// assert_eq!(fruits.child_nodes().count(), 2);
/// ```
#[must_use]
pub fn to_list(text: &str) -> Node {
    list::build(&tokenize(text))
}

/// Converts VSV text into a table tree: one `row` node per input row, one
/// cell per field.
///
/// # Examples
///
/// ```rust
/// use vsv::to_table;
///
/// let table = to_table("[[A]]\n,1");
/// assert_eq!(table.child_nodes().count(), 2);
/// ```
#[must_use]
pub fn to_table(text: &str) -> Node {
    table::build(&tokenize(text))
}

/// Converts bracket-dialect VSV text into an attributed tag tree.
///
/// # Examples
///
/// ```rust
/// use vsv::to_tag_tree;
///
/// let tree = to_tag_tree("[[item]]\n,id,7");
/// assert_eq!(tree.child_nodes().next().unwrap().attr("id"), Some("7"));
/// ```
#[must_use]
pub fn to_tag_tree(text: &str) -> Node {
    tag::build(&tokenize(text))
}

/// Converts delimiter-dialect VSV text into an attributed tag tree.
///
/// # Examples
///
/// ```rust
/// use vsv::to_delim_tag_tree;
///
/// let tree = to_delim_tag_tree("{note\n,remember\n}");
/// assert_eq!(tree.child_nodes().next().unwrap().text(), "remember");
/// ```
#[must_use]
pub fn to_delim_tag_tree(text: &str) -> Node {
    tag::build_delim(&tokenize(text))
}

/// Converts VSV text into a nested object [`Value`].
///
/// # Examples
///
/// ```rust
/// use vsv::to_object;
///
/// let value = to_object(",greeting,hello");
/// assert_eq!(value.get("greeting").and_then(|v| v.as_str()), Some("hello"));
/// ```
#[must_use]
pub fn to_object(text: &str) -> Value {
    object::build(&tokenize(text))
}

/// Converts VSV text into JSON-like source text.
///
/// Best-effort output; see [`json_text`] for the caveats.
///
/// # Examples
///
/// ```rust
/// use vsv::to_json_text;
///
/// assert_eq!(to_json_text(",a,1"), r#""a": "1""#);
/// ```
#[must_use]
pub fn to_json_text(text: &str) -> String {
    json_text::build(&tokenize(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_dispatch() {
        assert!(matches!(convert(",x", Format::List), Output::Tree(_)));
        assert!(matches!(convert(",x", Format::Table), Output::Tree(_)));
        assert!(matches!(convert(",x", Format::TagTree), Output::Tree(_)));
        assert!(matches!(
            convert(",x", Format::DelimTagTree),
            Output::Tree(_)
        ));
        assert!(matches!(convert(",x", Format::Object), Output::Value(_)));
        assert!(matches!(convert(",x", Format::JsonText), Output::Text(_)));
    }

    #[test]
    fn test_empty_input_converts_everywhere() {
        for format in [
            Format::List,
            Format::Table,
            Format::TagTree,
            Format::DelimTagTree,
            Format::Object,
            Format::JsonText,
        ] {
            // must not panic, and must produce an empty-ish output
            let _ = convert("", format);
        }
    }

    #[test]
    fn test_output_accessors() {
        assert!(convert(",x", Format::List).into_tree().is_some());
        assert!(convert(",x", Format::List).into_value().is_none());
        assert!(convert(",x", Format::JsonText).into_text().is_some());
    }

    #[test]
    fn test_convert_reader() {
        let output = convert_reader(std::io::Cursor::new(",a,b"), Format::Table).unwrap();
        let table = output.into_tree().expect("tree");
        let row = table.child_nodes().next().expect("row");
        assert_eq!(row.child_nodes().count(), 2);
    }
}
