//! JSON rendering for values and location records.
//!
//! Objects print their keys in insertion order, the same order the
//! traversal visits them. Compact output has no whitespace; pretty output
//! uses 2-space indentation.
//!
//! # Examples
//!
//! ```
//! use juery::Value;
//! use juery::output::{to_json, to_json_pretty};
//!
//! let value = Value::Integer(42);
//!
//! assert_eq!(to_json(&value), "42");
//! assert_eq!(to_json_pretty(&value), "42");
//! ```

use indexmap::IndexMap;

use crate::{record::LocationRecord, value::Value};

pub struct JsonPrinter {
    pretty: bool,
}

impl JsonPrinter {
    pub fn new(pretty: bool) -> Self {
        JsonPrinter { pretty }
    }

    pub fn print(&self, value: &Value) -> String {
        self.print_value(value, 0)
    }

    /// Prints `{"path": [...], "key": "...", "value": ...}`.
    pub fn print_record(&self, record: &LocationRecord<'_>) -> String {
        let path: Vec<String> = record
            .path
            .iter()
            .map(|segment| format!("\"{}\"", self.escape_string(segment)))
            .collect();
        let key = format!("\"{}\"", self.escape_string(&record.key));

        if self.pretty {
            let value = self.print_value(record.value, 1);
            format!(
                "{{\n{ind}\"path\": [{}],\n{ind}\"key\": {},\n{ind}\"value\": {}\n}}",
                path.join(", "),
                key,
                value,
                ind = self.indent(1),
            )
        } else {
            let value = self.print_value(record.value, 0);
            format!(
                "{{\"path\":[{}],\"key\":{},\"value\":{}}}",
                path.join(","),
                key,
                value
            )
        }
    }

    fn print_value(&self, value: &Value, indent: usize) -> String {
        match value {
            Value::Null => "null".to_string(),
            Value::Boolean(b) => b.to_string(),
            Value::Integer(n) => n.to_string(),
            Value::Float(n) if n.is_finite() => n.to_string(),
            // JSON has no NaN or infinity
            Value::Float(_) => "null".to_string(),
            Value::String(s) => format!("\"{}\"", self.escape_string(s)),
            Value::Array(arr) => self.print_array(arr, indent),
            Value::Object(obj) => self.print_object(obj, indent),
        }
    }

    fn print_array(&self, arr: &[Value], indent: usize) -> String {
        if arr.is_empty() {
            return "[]".to_string();
        }

        if self.pretty {
            let items: Vec<String> = arr
                .iter()
                .map(|v| {
                    format!(
                        "{}{}",
                        self.indent(indent + 1),
                        self.print_value(v, indent + 1)
                    )
                })
                .collect();
            format!("[\n{}\n{}]", items.join(",\n"), self.indent(indent))
        } else {
            let items: Vec<String> = arr.iter().map(|v| self.print_value(v, indent)).collect();
            format!("[{}]", items.join(","))
        }
    }

    fn print_object(&self, obj: &IndexMap<String, Value>, indent: usize) -> String {
        if obj.is_empty() {
            return "{}".to_string();
        }

        if self.pretty {
            let items: Vec<String> = obj
                .iter()
                .map(|(k, v)| {
                    format!(
                        "{}\"{}\": {}",
                        self.indent(indent + 1),
                        self.escape_string(k),
                        self.print_value(v, indent + 1)
                    )
                })
                .collect();
            format!("{{\n{}\n{}}}", items.join(",\n"), self.indent(indent))
        } else {
            let items: Vec<String> = obj
                .iter()
                .map(|(k, v)| format!("\"{}\":{}", self.escape_string(k), self.print_value(v, indent)))
                .collect();
            format!("{{{}}}", items.join(","))
        }
    }

    fn indent(&self, level: usize) -> String {
        "  ".repeat(level)
    }

    fn escape_string(&self, s: &str) -> String {
        s.chars()
            .flat_map(|c| match c {
                '"' => vec!['\\', '"'],
                '\\' => vec!['\\', '\\'],
                '\n' => vec!['\\', 'n'],
                '\r' => vec!['\\', 'r'],
                '\t' => vec!['\\', 't'],
                c if c.is_control() => format!("\\u{:04x}", c as u32).chars().collect(),
                c => vec![c],
            })
            .collect()
    }
}

/// Converts a Value to compact JSON.
///
/// ```
/// use juery::Value;
/// use juery::output::to_json;
///
/// let value: Value = serde_json::json!({"name": "Alice", "age": 30}).into();
/// assert_eq!(to_json(&value), r#"{"name":"Alice","age":30}"#);
/// ```
pub fn to_json(value: &Value) -> String {
    JsonPrinter::new(false).print(value)
}

/// Converts a Value to JSON with 2-space indentation.
pub fn to_json_pretty(value: &Value) -> String {
    JsonPrinter::new(true).print(value)
}

/// Renders a location record as a JSON object.
///
/// ```
/// use juery::{juery_one, Pattern, Value};
/// use juery::output::record_to_json;
///
/// let doc: Value = serde_json::json!({"a": {"b": true}}).into();
/// let record = juery_one(Some(&doc), &Pattern::new(["b"])).unwrap();
/// assert_eq!(
///     record_to_json(&record, false),
///     r#"{"path":["a","b"],"key":"b","value":true}"#
/// );
/// ```
pub fn record_to_json(record: &LocationRecord<'_>, pretty: bool) -> String {
    JsonPrinter::new(pretty).print_record(record)
}
