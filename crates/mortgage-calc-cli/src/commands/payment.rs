use clap::Args;
use serde_json::{json, Value};

use mortgage_calc_core::calculator;
use mortgage_calc_core::form::{self, DisplayValue, RawLoanFields};

use crate::input;

/// Raw loan fields, passed to the calculator exactly as typed
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct PaymentArgs {
    /// Amount borrowed (e.g. 200000)
    #[arg(long)]
    pub amount: Option<String>,

    /// Mortgage term in years (e.g. 25)
    #[arg(long)]
    pub term: Option<String>,

    /// Annual interest rate in percent (e.g. 5.25)
    #[arg(long)]
    pub rate: Option<String>,

    /// Mortgage type: repayment or interest-only
    #[arg(long = "type", value_name = "TYPE")]
    pub mortgage_type: Option<String>,

    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,
}

impl PaymentArgs {
    fn has_flags(&self) -> bool {
        self.amount.is_some()
            || self.term.is_some()
            || self.rate.is_some()
            || self.mortgage_type.is_some()
    }

    /// Missing flags become empty fields, the same as an untouched form input.
    fn into_fields(self) -> RawLoanFields {
        RawLoanFields::new(
            self.amount.unwrap_or_default(),
            self.term.unwrap_or_default(),
            self.rate.unwrap_or_default(),
            self.mortgage_type.unwrap_or_default(),
        )
    }
}

fn load_fields(args: PaymentArgs) -> Result<RawLoanFields, Box<dyn std::error::Error>> {
    if let Some(ref path) = args.input {
        return input::file::read_json(path);
    }
    if args.has_flags() {
        return Ok(args.into_fields());
    }
    input::stdin::read_stdin()?.ok_or_else(|| {
        "--amount, --term, --rate and --type are required (or provide --input)".into()
    })
}

pub fn run_payment(args: PaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let fields = load_fields(args)?;
    let result = calculator::calculate_mortgage(&fields)?;
    tracing::debug!(
        monthly_payment = %result.result.monthly_payment,
        elapsed_us = result.metadata.computation_time_us,
        "payment calculated"
    );
    Ok(serde_json::to_value(result)?)
}

/// Only the text the form would show. Invalid input is a result here, not an error.
pub fn run_display(args: PaymentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let fields = load_fields(args)?;
    let shown = form::submit(&fields);
    let status = match shown {
        DisplayValue::Amount(_) => "amount",
        DisplayValue::Invalid => "invalid",
        DisplayValue::Pending => "pending",
    };
    Ok(json!({
        "display": shown.to_string(),
        "status": status,
    }))
}
