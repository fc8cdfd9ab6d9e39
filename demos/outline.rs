//! Nested outlines from plain text.
//!
//! Run with: cargo run --example outline

use vsv::{to_list, to_table};

fn main() {
    let outline = "\
[[Groceries]]
,milk
,eggs
[[]][[Produce]]
,apples
,carrots
[[]]
,bread";

    println!("Outline tree:\n{}", to_list(outline));

    // the same tokenizer feeds every format; here as a table instead
    let table = "\
[[Name]] [[Age]] [[Role]]
,Alice,30,admin
,Bob,25,user";

    println!("Table tree:\n{}", to_table(table));
}
