use mortgage_calc_core::calculator;
use mortgage_calc_core::form::{self, RawLoanFields};
use napi::Result as NapiResult;
use napi_derive::napi;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

fn parse_fields(input_json: &str) -> NapiResult<RawLoanFields> {
    serde_json::from_str(input_json).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Form
// ---------------------------------------------------------------------------

/// Text for the results panel. Invalid input yields the invalid-input
/// message rather than an exception.
#[napi]
pub fn display_payment(
    amount: String,
    term_years: String,
    annual_rate_percent: String,
    mortgage_type: String,
) -> String {
    let fields = RawLoanFields::new(amount, term_years, annual_rate_percent, mortgage_type);
    form::submit(&fields).to_string()
}

/// `{"status":"amount","monthly_payment":"875.00"}` or `{"status":"invalid"}`.
#[napi]
pub fn compute_payment(input_json: String) -> NapiResult<String> {
    let fields = parse_fields(&input_json)?;
    serde_json::to_string(&calculator::compute(&fields)).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Envelope
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_payment(input_json: String) -> NapiResult<String> {
    let fields = parse_fields(&input_json)?;
    let output = calculator::calculate_mortgage(&fields).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
