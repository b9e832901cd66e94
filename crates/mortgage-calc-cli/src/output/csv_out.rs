use serde_json::Value;
use std::io;

use super::{format_scalar, result_section};

/// Write the result as two-column `field,value` CSV to stdout.
pub fn print_csv(value: &Value) {
    let stdout = io::stdout();
    let mut wtr = csv::Writer::from_writer(stdout.lock());

    if let Err(e) = write_rows(&mut wtr, result_section(value)) {
        eprintln!("CSV output error: {}", e);
    }
}

fn write_rows<W: io::Write>(wtr: &mut csv::Writer<W>, result: &Value) -> csv::Result<()> {
    wtr.write_record(["field", "value"])?;
    match result {
        Value::Object(map) => {
            for (key, val) in map {
                wtr.write_record([key.as_str(), format_scalar(val).as_str()])?;
            }
        }
        other => wtr.write_record(["value", format_scalar(other).as_str()])?,
    }
    wtr.flush()?;
    Ok(())
}
