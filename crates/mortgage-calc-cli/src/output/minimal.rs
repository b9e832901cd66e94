use serde_json::Value;

use super::{format_scalar, result_section};

/// Fields tried in order when printing a single answer.
const PRIORITY_KEYS: [&str; 2] = ["display", "monthly_payment"];

/// Print just the key answer: the display text the form would show.
pub fn print_minimal(value: &Value) {
    println!("{}", minimal_line(value));
}

fn minimal_line(value: &Value) -> String {
    let result_obj = result_section(value);

    if let Value::Object(map) = result_obj {
        for key in PRIORITY_KEYS {
            if let Some(val) = map.get(key).filter(|v| !v.is_null()) {
                return format_scalar(val);
            }
        }
        if let Some((key, val)) = map.iter().next() {
            return format!("{}: {}", key, format_scalar(val));
        }
    }

    format_scalar(result_obj)
}
