//! The JSON-text builder: flat string assembly.
//!
//! Unlike the object builder, this produces *text* that resembles JSON
//! source, not a container value. Header fields open containers using their
//! original bracket characters literally: `{{name}}` emits `"name": { `,
//! `[[]]` emits `[ `. The sentinel field `;` closes the most recently
//! opened container — it trims one trailing comma-and-space run and emits
//! the field's closing bracket. Data rows append `"key": "value", ` pairs.
//!
//! The output is best-effort: keys and values are not escaped and nothing
//! validates the result against a JSON grammar. Callers needing strict
//! JSON must validate or re-serialize independently (the object builder's
//! `serde` path is the checked alternative).
//!
//! ## Examples
//!
//! ```rust
//! use vsv::to_json_text;
//!
//! let json = to_json_text("{{user}}\n,name,Alice\n{{;}}");
//! assert_eq!(json, r#""user": { "name": "Alice"}"#);
//! ```

use crate::row::Row;

/// Removes one trailing comma-and-spaces run, if present.
fn trim_trailing_comma(json: &mut String) {
    let without_spaces = json.trim_end_matches(' ').len();
    if json[..without_spaces].ends_with(',') {
        json.truncate(without_spaces - 1);
    }
}

/// Assembles JSON-like text from a tokenized row sequence.
#[must_use]
pub fn build(rows: &[Row]) -> String {
    let mut json = String::new();

    for row in rows {
        match row {
            Row::Header { fields } => {
                for field in fields {
                    match field.text.as_str() {
                        "" => {
                            // unnamed object/array
                            json.push(field.open);
                            json.push(' ');
                        }
                        ";" => {
                            trim_trailing_comma(&mut json);
                            json.push(field.close);
                            json.push_str(", ");
                        }
                        name => {
                            // named object/array
                            json.push('"');
                            json.push_str(name);
                            json.push_str("\": ");
                            json.push(field.open);
                            json.push(' ');
                        }
                    }
                }
            }
            Row::Data { fields, .. } => {
                let key = fields.first().map(String::as_str).unwrap_or("");
                let value = fields.get(1).map(String::as_str).unwrap_or("");
                json.push('"');
                json.push_str(key);
                json.push_str("\": \"");
                json.push_str(value);
                json.push_str("\", ");
            }
        }
    }

    trim_trailing_comma(&mut json);
    json
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::tokenize;

    #[test]
    fn test_named_object_with_pairs() {
        let json = build(&tokenize("{{config}}\n,debug,true\n,level,3\n{{;}}"));
        assert_eq!(json, r#""config": { "debug": "true", "level": "3"}"#);
    }

    #[test]
    fn test_unnamed_array_closes_and_trims_comma() {
        let json = build(&tokenize("[[]]\n,a,1\n,b,2\n[[;]]"));
        assert_eq!(json, r#"[ "a": "1", "b": "2"]"#);
    }

    #[test]
    fn test_close_uses_field_bracket() {
        // object opened with braces, closed by a brace-bracketed sentinel
        let json = build(&tokenize("{{}}\n,k,v\n{{;}}"));
        assert_eq!(json, r#"{ "k": "v"}"#);
    }

    #[test]
    fn test_nested_containers() {
        let input = "{{outer}}\n,a,1\n[[items]]\n,x,1\n[[;]]\n{{;}}";
        let json = build(&tokenize(input));
        assert_eq!(json, r#""outer": { "a": "1", "items": [ "x": "1"]}"#);
    }

    #[test]
    fn test_trailing_comma_trimmed_at_end() {
        let json = build(&tokenize(",a,1\n,b,2"));
        assert_eq!(json, r#""a": "1", "b": "2""#);
    }

    #[test]
    fn test_missing_value_is_empty() {
        let json = build(&tokenize(",key"));
        assert_eq!(json, r#""key": """#);
    }

    #[test]
    fn test_no_escaping_is_performed() {
        let json = build(&tokenize(",he said \"hi\",ok"));
        assert!(json.contains(r#""he said "hi"": "ok""#));
    }

    #[test]
    fn test_produces_parseable_json_for_well_formed_input() {
        let json = build(&tokenize("{{}}\n,name,Alice\n,age,30\n{{;}}"));
        assert_eq!(json, r#"{ "name": "Alice", "age": "30"}"#);
        let parsed: serde_json::Value = serde_json::from_str(&json).expect("valid JSON");
        assert_eq!(parsed["name"], "Alice");
    }
}
