//! The nested-outline list builder.
//!
//! Consumes a row sequence and produces a `list` node whose descendants are
//! `item` nodes mirroring the declared nesting. Two nesting modes exist,
//! inferred from the input itself:
//!
//! - **Header-tiered**: the sequence starts with a header row carrying at
//!   least one field. Header labels open containers; empty header fields
//!   raise the tier of the next label; a header row of only empty fields
//!   dedents by that many levels. Every data field becomes an item under
//!   the most recently opened container.
//! - **Delimiter-tiered**: anything else. Empty fields inside a data row
//!   raise the tier of the following value, so `,a`, `,,b` reads as `b`
//!   nested under `a`. Descending into a plain item promotes it to a
//!   container in place.
//!
//! Nesting state is an explicit stack of open containers indexed by tier.
//! Descent is clamped to one level per step: skipping tiers nests one level
//! deep, and an indent with nothing to indent under stays at the current
//! tier. Dedents never pop past the root.
//!
//! ## Examples
//!
//! ```rust
//! use vsv::to_list;
//!
//! let list = to_list("[[Fruits]]\n,apple,banana\n[[Veggies]]\n,carrot");
//! let names: Vec<String> = list.child_nodes().map(|n| n.text()).collect();
//! assert_eq!(names, vec!["Fruits", "Veggies"]);
//! ```

use crate::node::{Node, TreeBuilder};
use crate::row::Row;

/// Builds the outline tree for a tokenized row sequence.
#[must_use]
pub fn build(rows: &[Row]) -> Node {
    let mut tree = TreeBuilder::new("list");
    let header_tiered = matches!(rows.first(), Some(Row::Header { fields }) if !fields.is_empty());

    // stack[i] is the open container at tier i; stack.len() == last_tier + 1
    let mut stack: Vec<usize> = vec![tree.root()];
    let mut last_tier: usize = 0;
    // most recent plain item, the promotion target when data indents
    let mut last_item: Option<usize> = None;

    for row in rows {
        match row {
            Row::Header { fields } => {
                let mut tier = 1;
                let mut labeled = false;

                for field in fields {
                    if field.text.is_empty() {
                        tier += 1;
                        continue;
                    }
                    labeled = true;

                    if tier <= last_tier {
                        // sibling or dedent: reopen at the label's level
                        stack.truncate(tier);
                        last_tier = tier - 1;
                    }
                    let item = tree.alloc("item");
                    tree.append_text(item, &field.text);
                    tree.append_child(stack[last_tier], item);
                    stack.push(item);
                    last_tier += 1;
                }

                if !labeled {
                    // only empty fields: dedent one level per field
                    let mut dedent = tier - 1;
                    while dedent > 0 && last_tier > 0 {
                        stack.pop();
                        last_tier -= 1;
                        dedent -= 1;
                    }
                }
            }
            Row::Data { fields, .. } => {
                if header_tiered {
                    for field in fields {
                        let item = tree.alloc("item");
                        tree.append_text(item, field);
                        tree.append_child(stack[last_tier], item);
                    }
                    continue;
                }

                let mut tier = 0;
                for field in fields {
                    if field.is_empty() {
                        tier += 1;
                        continue;
                    }

                    if tier > last_tier {
                        // descend one level by promoting the last item
                        if let Some(parent) = last_item {
                            stack.push(parent);
                            last_tier += 1;
                        }
                    } else if tier < last_tier {
                        stack.truncate(tier + 1);
                        last_tier = tier;
                    }

                    let item = tree.alloc("item");
                    tree.append_text(item, field);
                    tree.append_child(stack[last_tier], item);
                    last_item = Some(item);
                }
            }
        }
    }

    tree.finish()
}
