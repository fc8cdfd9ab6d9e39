//! JSON-like objects and function literals from delimiter-coded rows.
//!
//! Run with: cargo run --example objects

use std::error::Error;
use vsv::to_object;

fn main() -> Result<(), Box<dyn Error>> {
    let markup = "\
{account
,name,Ada
[permissions
,read
,write
]
(on_login
<
,session
>
,session.touch()
)
}";

    let value = to_object(markup);

    // JSON-like display form
    println!("{value}");

    // strict JSON via serde
    let json = serde_json::to_string_pretty(&value)?;
    println!("{json}");

    Ok(())
}
