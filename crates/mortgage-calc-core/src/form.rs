//! The form side of the calculator: an immutable snapshot of what the user
//! typed, and the text shown back once they submit.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calculator::{self, PaymentResult, DISPLAY_DECIMALS};
use crate::types::Money;

/// The one currency the calculator shows.
pub const CURRENCY_SYMBOL: &str = "£";

/// Shown before the first submission.
pub const PENDING_TEXT: &str = "Results shown here";

/// Shown when any field fails validation.
pub const INVALID_TEXT: &str = "Please enter valid values";

/// Raw text of the four form fields at submission time.
///
/// `Default` is the cleared form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawLoanFields {
    pub amount: String,
    pub term_years: String,
    pub annual_rate_percent: String,
    /// `"repayment"` or `"interest-only"`; empty when nothing is selected.
    pub mortgage_type: String,
}

impl RawLoanFields {
    pub fn new(
        amount: impl Into<String>,
        term_years: impl Into<String>,
        annual_rate_percent: impl Into<String>,
        mortgage_type: impl Into<String>,
    ) -> Self {
        RawLoanFields {
            amount: amount.into(),
            term_years: term_years.into(),
            annual_rate_percent: annual_rate_percent.into(),
            mortgage_type: mortgage_type.into(),
        }
    }

    /// "Clear All": every field back to empty.
    pub fn cleared() -> Self {
        Self::default()
    }
}

/// What the results panel renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisplayValue {
    #[default]
    Pending,
    Invalid,
    Amount(Money),
}

impl From<PaymentResult> for DisplayValue {
    fn from(result: PaymentResult) -> Self {
        match result {
            PaymentResult::Amount(m) => DisplayValue::Amount(m),
            PaymentResult::Invalid => DisplayValue::Invalid,
        }
    }
}

impl fmt::Display for DisplayValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayValue::Pending => f.write_str(PENDING_TEXT),
            DisplayValue::Invalid => f.write_str(INVALID_TEXT),
            DisplayValue::Amount(m) => f.write_str(&format_money(*m)),
        }
    }
}

/// Currency symbol followed by the amount at exactly two decimal places.
pub fn format_money(amount: Money) -> String {
    let mut shown = amount.round_dp(DISPLAY_DECIMALS);
    shown.rescale(DISPLAY_DECIMALS);
    format!("{CURRENCY_SYMBOL}{shown}")
}

/// Handle a form submission.
pub fn submit(fields: &RawLoanFields) -> DisplayValue {
    calculator::compute(fields).into()
}
