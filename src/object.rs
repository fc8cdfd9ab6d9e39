//! The object/array/function builder.
//!
//! Consumes delimiter-coded rows and produces a nested [`Value`]: maps,
//! sequences, and "function literal" strings with JSON-like semantics. The
//! root is always an object.
//!
//! The delimiter of each data row is its operation code:
//!
//! - `{` opens a map, `[` opens a sequence, `(` opens a function literal
//!   (an accumulating string starting with a `function` marker). When the
//!   enclosing container is a map, the first field names the key the new
//!   container will sit under; in a sequence it is appended positionally.
//! - `}`, `]`, `)` close the innermost open container and hand it to its
//!   parent. `)` first appends the literal's closing marker and leaves
//!   function mode. A close with nothing open is a tolerated no-op —
//!   permissive by design, like the rest of the builders.
//! - `<` and `>` append the argument-list markers to the current function
//!   literal, and do nothing outside function mode.
//! - Any other delimiter: inside a function literal the row's fields are
//!   appended verbatim (joined with commas). In a map the first field is
//!   the key and the remaining fields, joined with `", "`, the value — a
//!   missing value yields an empty string, never an omitted key. In a
//!   sequence the joined fields append as one string element.
//!
//! Containers still open when the input ends are handed to their parents
//! during a final unwind, so truncated markup yields the partial structure
//! rather than dropping it. Header rows are ignored entirely.
//!
//! ## Examples
//!
//! ```rust
//! use vsv::to_object;
//!
//! let value = to_object("{user\n,name,Alice\n[roles\n,admin\n]\n}");
//! let user = value.get("user").expect("user");
//! assert_eq!(user.get("name").and_then(|v| v.as_str()), Some("Alice"));
//! ```

use crate::row::Row;
use crate::value::Value;
use crate::VsvMap;

/// An open container plus the key it will occupy in its parent once closed.
/// The key is `None` when the parent is a sequence (or for the root).
struct Open {
    value: Value,
    key: Option<String>,
}

/// Hands a finished container to its parent.
///
/// A string parent means a container was opened inside a function literal;
/// there is nowhere meaningful to put it, so it is dropped.
fn insert(parent: &mut Value, key: Option<String>, child: Value) {
    match parent {
        Value::Array(arr) => arr.push(child),
        Value::Object(map) => {
            map.insert(key.unwrap_or_default(), child);
        }
        Value::String(_) => {}
    }
}

/// Builds the nested object value for a tokenized row sequence.
#[must_use]
pub fn build(rows: &[Row]) -> Value {
    let mut stack: Vec<Open> = vec![Open {
        value: Value::Object(VsvMap::new()),
        key: None,
    }];
    let mut func_mode = false;

    for row in rows {
        let Row::Data { delimiter, fields } = row else {
            continue;
        };

        match delimiter {
            '{' | '[' | '(' => {
                let key = fields.first().cloned();
                let value = match delimiter {
                    '{' => Value::Object(VsvMap::new()),
                    '[' => Value::Array(Vec::new()),
                    _ => {
                        func_mode = true;
                        Value::String("function".to_string())
                    }
                };
                stack.push(Open { value, key });
            }
            '}' | ']' | ')' => {
                if *delimiter == ')' {
                    func_mode = false;
                    if let Some(Open {
                        value: Value::String(literal),
                        ..
                    }) = stack.last_mut()
                    {
                        literal.push_str(" }");
                    }
                }
                if stack.len() > 1 {
                    if let Some(open) = stack.pop() {
                        if let Some(parent) = stack.last_mut() {
                            insert(&mut parent.value, open.key, open.value);
                        }
                    }
                }
            }
            '<' | '>' => {
                if func_mode {
                    if let Some(Open {
                        value: Value::String(literal),
                        ..
                    }) = stack.last_mut()
                    {
                        literal.push_str(if *delimiter == '<' { "( " } else { " ) {" });
                    }
                }
            }
            _ => {
                let Some(top) = stack.last_mut() else {
                    continue;
                };
                if func_mode {
                    if let Value::String(literal) = &mut top.value {
                        literal.push_str(&fields.join(","));
                    }
                    continue;
                }
                match &mut top.value {
                    Value::Object(map) => {
                        let key = fields.first().cloned().unwrap_or_default();
                        let value = if fields.len() > 1 {
                            fields[1..].join(", ")
                        } else {
                            String::new()
                        };
                        map.insert(key, Value::String(value));
                    }
                    Value::Array(arr) => {
                        arr.push(Value::String(fields.join(", ")));
                    }
                    Value::String(_) => {}
                }
            }
        }
    }

    // unwind containers left open at end of input into their parents
    while stack.len() > 1 {
        if let Some(open) = stack.pop() {
            if let Some(parent) = stack.last_mut() {
                insert(&mut parent.value, open.key, open.value);
            }
        }
    }

    stack.pop().map(|open| open.value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::row::tokenize;
    use crate::vsv;

    #[test]
    fn test_nested_objects() {
        let value = build(&tokenize("{user\n,name,Alice\n{prefs\n,theme,dark\n}\n,age,30\n}"));
        assert_eq!(
            value,
            vsv!({
                "user": {
                    "name": "Alice",
                    "prefs": {"theme": "dark"},
                    "age": "30"
                }
            })
        );
    }

    #[test]
    fn test_arrays_collect_elements() {
        let value = build(&tokenize("[colors\n,red\n,green\n{\n,deep,1\n}\n]"));
        let colors = value.get("colors").expect("colors").as_array().expect("array");
        assert_eq!(colors.len(), 3);
        assert_eq!(colors[0], Value::from("red"));
        assert_eq!(colors[1], Value::from("green"));
        assert!(colors[2].is_object());
    }

    #[test]
    fn test_function_literal_accumulates() {
        let input = "(greet\n<\n,name\n>\n,return name\n)";
        let value = build(&tokenize(input));
        assert_eq!(
            value.get("greet").and_then(|v| v.as_str()),
            Some("function( name ) {return name }")
        );
    }

    #[test]
    fn test_missing_value_yields_empty_string() {
        let value = build(&tokenize("{o\n,key\n}"));
        assert_eq!(
            value.get("o").and_then(|o| o.get("key")),
            Some(&Value::from(""))
        );
    }

    #[test]
    fn test_multi_field_value_joins() {
        let value = build(&tokenize("{o\n,key,a,b,c\n}"));
        assert_eq!(
            value.get("o").and_then(|o| o.get("key")),
            Some(&Value::from("a, b, c"))
        );
    }

    #[test]
    fn test_underflow_is_tolerated() {
        let value = build(&tokenize("}\n]\n)\n,key,v"));
        assert_eq!(value, vsv!({"key": "v"}));
    }

    #[test]
    fn test_unclosed_containers_survive_eof() {
        let value = build(&tokenize("{outer\n{inner\n,k,v"));
        let outer = value.get("outer").expect("outer");
        let inner = outer.get("inner").expect("inner");
        assert_eq!(inner.get("k"), Some(&Value::from("v")));
    }

    #[test]
    fn test_assignments_at_root() {
        let value = build(&tokenize(",a,1\n,b,2"));
        assert_eq!(value, vsv!({"a": "1", "b": "2"}));
    }

    #[test]
    fn test_header_rows_are_ignored() {
        let value = build(&tokenize("[[noise]]\n,k,v"));
        assert_eq!(value, vsv!({"k": "v"}));
    }

    #[test]
    fn test_array_parent_keys_are_positional() {
        let value = build(&tokenize("[seq\n{\n,a,1\n}\n{\n,b,2\n}\n]"));
        let seq = value.get("seq").expect("seq").as_array().expect("array");
        assert_eq!(seq.len(), 2);
        assert_eq!(seq[0].get("a"), Some(&Value::from("1")));
        assert_eq!(seq[1].get("b"), Some(&Value::from("2")));
    }
}
