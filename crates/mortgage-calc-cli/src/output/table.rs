use serde_json::Value;
use tabled::{builder::Builder, Table};

use super::{format_scalar, result_section};

/// Format output as a Field/Value table using the tabled crate,
/// followed by any warnings and the methodology.
pub fn print_table(value: &Value) {
    println!("{}", build_table(result_section(value)));

    if let Some(Value::Array(warnings)) = value.get("warnings") {
        if !warnings.is_empty() {
            println!("\nWarnings:");
            for w in warnings.iter().filter_map(Value::as_str) {
                println!("  - {}", w);
            }
        }
    }

    if let Some(Value::String(meth)) = value.get("methodology") {
        println!("\nMethodology: {}", meth);
    }
}

fn build_table(result: &Value) -> Table {
    let mut builder = Builder::default();
    builder.push_record(["Field", "Value"]);
    match result {
        Value::Object(map) => {
            for (key, val) in map {
                builder.push_record([label(key), format_scalar(val)]);
            }
        }
        other => builder.push_record(["value".to_string(), format_scalar(other)]),
    }
    Table::from(builder)
}

/// `total_repayment` -> `Total repayment`
fn label(key: &str) -> String {
    let spaced = key.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
