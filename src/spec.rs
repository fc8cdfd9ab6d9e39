//! VSV Format Description
//!
//! This module documents the VSV (Versatile Separated Values) markup as
//! implemented by this library.
//!
//! # Overview
//!
//! VSV is a superset of comma-separated and tab-separated values. Any
//! character can serve as a delimiter except space and newline, header
//! rows carry labeled fields like table headers do, and the same few
//! symbols compose into nested outlines, tables, attributed tag trees,
//! and JSON-like objects. The format is deliberately simple to decode,
//! encode, and manipulate in any language.
//!
//! # Rows
//!
//! Input is processed line by line. Leading and trailing spaces are
//! stripped (only spaces — a tab can be a delimiter), and blank lines are
//! skipped. Every remaining line is one of two row kinds:
//!
//! ## Header rows
//!
//! A line starting with a doubled open bracket: `[[`, `((`, `{{`, or `<<`.
//! Every doubled-bracket span on the line is one field:
//!
//! ```text
//! [[Name]] [[Email]] [[Role]]
//! ```
//!
//! The bracket characters are not part of the field content. A span with
//! nothing between the brackets is an *empty field*, which is meaningful:
//! outline input uses empty fields to push the next label one tier deeper,
//! and a header row of only empty fields dedents.
//!
//! Choosing brackets is a form of escaping: content containing `[` or `]`
//! can be wrapped in `((...))` instead, and so on through the four pairs.
//!
//! ## Data rows
//!
//! Any other line. The first character declares the delimiter for that row
//! and the rest of the line splits on it:
//!
//! ```text
//! ,Alice,alice@example.com,admin
//! |pipe delimited|second field
//! ```
//!
//! A delimiter repeated as the last character of the line is ignored, so
//! `,a,b,` equals `,a,b`. Choosing the delimiter per row is likewise a
//! form of escaping: a value containing commas can ride on a `|` row.
//!
//! # Output formats
//!
//! ## Lists (`list`)
//!
//! Nested outlines. With headers, labels open containers and data rows
//! fill them:
//!
//! ```text
//! [[Fruits]]
//! ,apple
//! ,banana
//! [[]] [[Citrus]]
//! ,lemon
//! ```
//!
//! Without headers, repeated delimiters indent:
//!
//! ```text
//! ,fruits
//! ,,apple
//! ,,banana
//! ,veggies
//! ```
//!
//! ## Tables (`table`)
//!
//! One output row per input row, one cell per field. Header fields become
//! header cells:
//!
//! ```text
//! [[Name]] [[Age]]
//! ,Alice,30
//! ,Bob,25
//! ```
//!
//! ## Tag trees, bracket dialect (`xml`)
//!
//! Header fields are tag names; `/` closes the current tag. Data rows set
//! attributes (key and value) or append text (key only):
//!
//! ```text
//! [[article]] [[title]]
//! ,Hello
//! [[/]] [[body]]
//! ,class,wide
//! ,Some text.
//! ```
//!
//! ## Tag trees, delimiter dialect (`vml`)
//!
//! The row delimiter is the operation: `{` opens a tag, `}` closes it,
//! `<` and `>` bracket attribute assignments:
//!
//! ```text
//! {img
//! <
//! ,src,photo.png
//! >
//! }
//! ```
//!
//! ## Objects (`von`)
//!
//! JSON-like containers. `{`/`[`/`(` open an object, array, or function
//! literal; `}`/`]`/`)` close; other rows assign `key,value` pairs:
//!
//! ```text
//! {user
//! ,name,Alice
//! [roles
//! ,admin
//! ]
//! }
//! ```
//!
//! ## JSON text (`json`)
//!
//! Flat JSON-looking source text. Header fields open containers with their
//! literal bracket characters, the `;` field closes one, data rows append
//! `"key": "value"` pairs:
//!
//! ```text
//! {{}}
//! ,name,Alice
//! {{;}}
//! ```
//!
//! The result is best-effort text, not validated JSON.
//!
//! # Escaping summary
//!
//! There are no escape sequences. Authors escape by *choice of symbol*:
//! pick a bracket pair absent from header content, pick a delimiter absent
//! from row content. The writer half of this crate automates exactly that
//! selection and refuses (per field or row) when all candidates are
//! exhausted.

// This module contains only documentation; no implementation code
