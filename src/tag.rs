//! The tag-tree builder: attributed hierarchies in two dialects.
//!
//! Both dialects maintain an explicit ownership stack of ancestor tags, so
//! a close always returns control to the true parent even across deep
//! nesting. Closing past the root is a tolerated no-op: the current tag
//! just stays at the root.
//!
//! **Bracket dialect** ([`build`]): header row fields are tag names. The
//! literal field `/` closes the current tag; any other field opens a child
//! tag and descends. Data rows attach to whichever tag is current once the
//! preceding header fields have all been processed: a row with a non-empty
//! second field sets an attribute, otherwise the first field appends as
//! text.
//!
//! **Delimiter dialect** ([`build_delim`]): header rows are ignored and the
//! delimiter of each data row is its operation code. `{` opens a child tag
//! named by the first field, `}` closes, `<` and `>` enter and leave
//! attribute mode. Any other delimiter appends the first field as text, or
//! in attribute mode sets an attribute (valueless when only a key is
//! given).
//!
//! ## Examples
//!
//! ```rust
//! use vsv::{to_tag_tree, to_delim_tag_tree};
//!
//! let tree = to_tag_tree("[[item]]\n,id,7\n,caption");
//! let item = tree.child_nodes().next().unwrap();
//! assert_eq!(item.attr("id"), Some("7"));
//! assert_eq!(item.text(), "caption");
//!
//! let tree = to_delim_tag_tree("{item\n,hello\n}");
//! assert_eq!(tree.child_nodes().next().unwrap().text(), "hello");
//! ```

use crate::node::{Node, TreeBuilder};
use crate::row::Row;

/// Builds a tag tree from bracket-dialect rows.
///
/// The returned root is named `root`; authored tags hang beneath it.
#[must_use]
pub fn build(rows: &[Row]) -> Node {
    let mut tree = TreeBuilder::new("root");
    let mut stack: Vec<usize> = Vec::new();
    let mut current = tree.root();

    for row in rows {
        match row {
            Row::Header { fields } => {
                for field in fields {
                    if field.text == "/" {
                        current = stack.pop().unwrap_or(tree.root());
                    } else {
                        let tag = tree.alloc(&field.text);
                        tree.append_child(current, tag);
                        stack.push(current);
                        current = tag;
                    }
                }
            }
            Row::Data { fields, .. } => {
                let key = fields.first().map(String::as_str).unwrap_or("");
                let value = fields.get(1).map(String::as_str).unwrap_or("");
                if !value.is_empty() {
                    tree.set_attr(current, key, Some(value.to_string()));
                } else if !key.is_empty() {
                    tree.append_text(current, key);
                }
            }
        }
    }

    tree.finish()
}

/// Builds a tag tree from delimiter-dialect rows.
#[must_use]
pub fn build_delim(rows: &[Row]) -> Node {
    let mut tree = TreeBuilder::new("root");
    let mut stack: Vec<usize> = Vec::new();
    let mut current = tree.root();
    let mut attr_mode = false;

    for row in rows {
        let Row::Data { delimiter, fields } = row else {
            continue;
        };

        match delimiter {
            '}' => current = stack.pop().unwrap_or(tree.root()),
            '{' => {
                let name = fields.first().map(String::as_str).unwrap_or("");
                let tag = tree.alloc(name);
                tree.append_child(current, tag);
                stack.push(current);
                current = tag;
            }
            '<' => attr_mode = true,
            '>' => attr_mode = false,
            _ => {
                if attr_mode {
                    let key = fields.first().map(|k| k.trim()).unwrap_or("");
                    if !key.is_empty() {
                        let value = fields.get(1).filter(|v| !v.is_empty()).cloned();
                        tree.set_attr(current, key, value);
                    }
                } else if let Some(text) = fields.first() {
                    tree.append_text(current, text);
                }
            }
        }
    }

    tree.finish()
}
