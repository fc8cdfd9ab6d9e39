//! The table builder.
//!
//! A pure row-to-row mapping: each header row becomes a `row` node of
//! `header` cells, each data row a `row` node of `cell` cells. There is no
//! cross-row state and no column-count reconciliation; ragged rows come out
//! ragged, exactly as authored.
//!
//! ## Examples
//!
//! ```rust
//! use vsv::to_table;
//!
//! let table = to_table("[[A]][[B]]\n,1,2\n,3,4");
//! assert_eq!(table.child_nodes().count(), 3);
//! ```

use crate::node::Node;
use crate::row::Row;

/// Builds the table tree for a tokenized row sequence.
///
/// Produces exactly one output row per input row, with one cell per field.
#[must_use]
pub fn build(rows: &[Row]) -> Node {
    let mut table = Node::new("table");

    for row in rows {
        let mut out = Node::new("row");
        match row {
            Row::Header { fields } => {
                for field in fields {
                    let mut cell = Node::new("header");
                    cell.append_text(&field.text);
                    out.append_node(cell);
                }
            }
            Row::Data { fields, .. } => {
                for field in fields {
                    let mut cell = Node::new("cell");
                    cell.append_text(field);
                    out.append_node(cell);
                }
            }
        }
        table.append_node(out);
    }

    table
}
