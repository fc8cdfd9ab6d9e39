//! Configuration surface: output format selection and writer options.
//!
//! The format set is fixed and finite, so builder dispatch is a closed enum
//! rather than an open string-keyed registry. Host documents that tag
//! markup regions with a format suffix can map the suffix through
//! [`Format::from_name`].
//!
//! ## Examples
//!
//! ```rust
//! use vsv::{Format, WriteOptions};
//!
//! assert_eq!(Format::from_name("list"), Some(Format::List));
//! assert_eq!(Format::from_name("von"), Some(Format::Object));
//!
//! let opts = WriteOptions::new().with_bracket('{').with_indent(2);
//! ```

/// The six output formats a conversion can produce.
///
/// Selecting a format selects the builder that consumes the tokenized rows;
/// nothing else about a conversion is configurable (the list builder infers
/// its nesting mode from the input itself).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Format {
    /// Nested outline list.
    List,
    /// Rows of header/data cells.
    Table,
    /// Attributed tag tree, bracket-tag dialect.
    TagTree,
    /// Attributed tag tree, delimiter-tag dialect.
    DelimTagTree,
    /// Nested object/array/function value.
    Object,
    /// Flat JSON-like source text.
    JsonText,
}

impl Format {
    /// Resolves the short format name a host document uses to tag a markup
    /// region (the suffix after its `vsv2` class prefix).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use vsv::Format;
    ///
    /// assert_eq!(Format::from_name("table"), Some(Format::Table));
    /// assert_eq!(Format::from_name("xml"), Some(Format::TagTree));
    /// assert_eq!(Format::from_name("bogus"), None);
    /// ```
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "list" => Some(Format::List),
            "table" => Some(Format::Table),
            "xml" => Some(Format::TagTree),
            "vml" => Some(Format::DelimTagTree),
            "von" => Some(Format::Object),
            "json" => Some(Format::JsonText),
            _ => None,
        }
    }

    /// The short name of this format.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Format::List => "list",
            Format::Table => "table",
            Format::TagTree => "xml",
            Format::DelimTagTree => "vml",
            Format::Object => "von",
            Format::JsonText => "json",
        }
    }
}

/// Options for the writing direction.
///
/// Controls the preferred bracket pair, extra delimiter candidates, and the
/// indent prefix of written lines. Parsing has no options; these only shape
/// the markup the writer emits.
///
/// # Examples
///
/// ```rust
/// use vsv::{write_header, WriteOptions};
///
/// let opts = WriteOptions::new().with_bracket('(');
/// assert_eq!(write_header(&["x"], &opts), "((x)) \n");
/// ```
#[derive(Clone, Debug, Default)]
pub struct WriteOptions {
    /// Preferred bracket character; the pair scan starts at its pair.
    pub bracket: Option<char>,
    /// Delimiter candidates tried before the default set.
    pub extra_delimiters: String,
    /// Number of leading spaces on written lines.
    pub indent: usize,
}

impl WriteOptions {
    /// Creates default options: `[`/`]` preferred, default delimiters, no
    /// indent.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the preferred bracket. Either character of a pair selects that
    /// pair.
    #[must_use]
    pub fn with_bracket(mut self, bracket: char) -> Self {
        self.bracket = Some(bracket);
        self
    }

    /// Adds delimiter candidates scanned before the default set.
    #[must_use]
    pub fn with_extra_delimiters(mut self, delimiters: &str) -> Self {
        self.extra_delimiters = delimiters.to_string();
        self
    }

    /// Sets the number of leading spaces on written lines.
    ///
    /// Header fields are also joined with this many spaces (minimum one).
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }
}
