//! Monthly mortgage payment calculation.
//!
//! Turns the four raw form values into a payment: fixed-rate annuity for
//! repayment mortgages, a flat interest charge for interest-only ones. All
//! math in `rust_decimal::Decimal`; every failure collapses into a single
//! invalid-input outcome for the caller that only wants a display value.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Instant;

use crate::error::MortgageError;
use crate::form::RawLoanFields;
use crate::time_value;
use crate::types::{with_metadata, ComputationOutput, Money, MortgageType, Percent, Rate, Years};
use crate::MortgageResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

const MONTHS_PER_YEAR: Decimal = dec!(12);

const PERCENT: Decimal = dec!(100);

/// Fractional digits shown for money.
pub const DISPLAY_DECIMALS: u32 = 2;

/// Annual rates above this are accepted but flagged.
const HIGH_RATE_WARNING: Percent = dec!(100);

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Parsed, validated loan terms for a single calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoanInputs {
    /// Principal borrowed.
    pub amount: Money,
    /// Term in years; may be fractional.
    pub term_years: Years,
    /// Nominal annual rate as typed (5.25 = 5.25%).
    pub annual_rate_percent: Percent,
    pub mortgage_type: MortgageType,
}

/// Outcome handed back to the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "monthly_payment", rename_all = "snake_case")]
pub enum PaymentResult {
    /// Monthly payment rounded to two decimal places.
    Amount(Money),
    Invalid,
}

impl PaymentResult {
    pub fn amount(&self) -> Option<Money> {
        match self {
            PaymentResult::Amount(m) => Some(*m),
            PaymentResult::Invalid => None,
        }
    }

    pub fn is_invalid(&self) -> bool {
        matches!(self, PaymentResult::Invalid)
    }
}

/// Full result of a calculation, for callers that want more than the payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentBreakdown {
    pub mortgage_type: MortgageType,
    /// Monthly payment rounded to two decimal places.
    pub monthly_payment: Money,
    /// Number of monthly periods (term in years x 12).
    pub number_of_payments: Decimal,
    /// Monthly rate as a fraction.
    pub monthly_rate: Rate,
    /// Everything paid over the term, principal included.
    pub total_repayment: Money,
    pub total_interest: Money,
    /// Text the form shows for this result.
    pub display: String,
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

impl LoanInputs {
    /// Parse and validate a raw form snapshot.
    ///
    /// Fields are checked in form order and the first failure is reported.
    pub fn parse(fields: &RawLoanFields) -> MortgageResult<Self> {
        let amount = parse_decimal("amount", &fields.amount)?;
        if amount <= Decimal::ZERO {
            return Err(MortgageError::invalid("amount", "must be greater than zero"));
        }

        let term_years = parse_decimal("term_years", &fields.term_years)?;
        // Zero passes here: only the repayment path divides by the term, and
        // `monthly_payment` rejects it there.
        if term_years < Decimal::ZERO {
            return Err(MortgageError::invalid("term_years", "must not be negative"));
        }

        let annual_rate_percent = parse_decimal("annual_rate_percent", &fields.annual_rate_percent)?;
        if annual_rate_percent < Decimal::ZERO {
            return Err(MortgageError::invalid(
                "annual_rate_percent",
                "must not be negative",
            ));
        }

        let mortgage_type = MortgageType::from_str(&fields.mortgage_type)?;

        Ok(LoanInputs {
            amount,
            term_years,
            annual_rate_percent,
            mortgage_type,
        })
    }

    /// Number of monthly periods.
    pub fn number_of_payments(&self) -> MortgageResult<Decimal> {
        self.term_years
            .checked_mul(MONTHS_PER_YEAR)
            .ok_or_else(|| MortgageError::overflow("number of payments"))
    }

    /// Nominal annual percentage converted to a monthly fraction.
    pub fn monthly_rate(&self) -> Rate {
        self.annual_rate_percent / PERCENT / MONTHS_PER_YEAR
    }
}

/// Parse one text field as a decimal.
///
/// Accepts plain and scientific notation after trimming whitespace. Empty
/// text is treated as a missing value. Digits beyond 28 decimal places round
/// away the same way in both notations.
pub fn parse_decimal(field: &str, raw: &str) -> MortgageResult<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(MortgageError::invalid(field, "value is required"));
    }
    let not_a_number = || MortgageError::invalid(field, format!("'{trimmed}' is not a number"));

    // `Decimal::from_str` also takes `_` separators, which a number input never produces
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
    {
        return Err(not_a_number());
    }

    match trimmed.split_once(|c: char| c == 'e' || c == 'E') {
        None => Decimal::from_str(trimmed).map_err(|_| not_a_number()),
        Some((mantissa, exponent)) => {
            let mantissa = Decimal::from_str(mantissa).map_err(|_| not_a_number())?;
            let exponent: i64 = exponent.parse().map_err(|_| not_a_number())?;
            scale_by_power_of_ten(mantissa, exponent).ok_or_else(|| {
                MortgageError::invalid(field, format!("'{trimmed}' is out of range"))
            })
        }
    }
}

/// `mantissa * 10^exponent`; `None` on overflow. Tiny results round to zero.
fn scale_by_power_of_ten(mantissa: Decimal, exponent: i64) -> Option<Decimal> {
    let ten = dec!(10);
    let mut value = mantissa;
    for _ in 0..exponent.unsigned_abs() {
        if value.is_zero() {
            break;
        }
        value = if exponent > 0 {
            value.checked_mul(ten)?
        } else {
            value.checked_div(ten)?
        };
    }
    Some(value)
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Monthly payment for validated inputs, rounded for display.
pub fn monthly_payment(inputs: &LoanInputs) -> MortgageResult<Money> {
    let rate = inputs.monthly_rate();
    let nper = inputs.number_of_payments()?;

    let payment = match inputs.mortgage_type {
        MortgageType::InterestOnly => time_value::interest_only_payment(inputs.amount, rate)?,
        MortgageType::Repayment => {
            if nper <= Decimal::ZERO {
                return Err(MortgageError::invalid(
                    "term_years",
                    "must be greater than zero for a repayment mortgage",
                ));
            }
            time_value::annuity_payment(inputs.amount, rate, nper)?
        }
    };

    let rounded = round_money(payment);
    if rounded < Decimal::ZERO {
        return Err(MortgageError::invalid(
            "monthly_payment",
            format!("negative payment {rounded}"),
        ));
    }
    Ok(rounded)
}

/// The form's calculation: four raw values in, a payment or `Invalid` out.
///
/// Never fails; the reason for an invalid result is logged at debug level.
pub fn compute(fields: &RawLoanFields) -> PaymentResult {
    match LoanInputs::parse(fields).and_then(|inputs| monthly_payment(&inputs)) {
        Ok(payment) => PaymentResult::Amount(payment),
        Err(e) => {
            tracing::debug!(error = %e, "loan inputs rejected");
            PaymentResult::Invalid
        }
    }
}

/// Payment plus term totals, wrapped in the standard output envelope.
pub fn calculate_mortgage(
    fields: &RawLoanFields,
) -> MortgageResult<ComputationOutput<PaymentBreakdown>> {
    let start = Instant::now();

    let inputs = LoanInputs::parse(fields)?;
    let payment = monthly_payment(&inputs)?;
    let nper = inputs.number_of_payments()?;
    let rate = inputs.monthly_rate();

    let paid_over_term = payment
        .checked_mul(nper)
        .ok_or_else(|| MortgageError::overflow("total repayment"))?;
    let total_repayment = match inputs.mortgage_type {
        MortgageType::Repayment => paid_over_term,
        MortgageType::InterestOnly => paid_over_term
            .checked_add(inputs.amount)
            .ok_or_else(|| MortgageError::overflow("total repayment"))?,
    };
    let total_repayment = round_money(total_repayment);
    let total_interest = total_repayment - inputs.amount;

    let mut warnings = Vec::new();
    if inputs.mortgage_type == MortgageType::InterestOnly && rate.is_zero() {
        warnings.push("Interest rate is zero: interest-only payment is zero".to_string());
    }
    if !nper.fract().is_zero() {
        warnings.push(format!(
            "Term of {} years is not a whole number of months ({} payments)",
            inputs.term_years,
            nper.normalize()
        ));
    }
    if inputs.annual_rate_percent > HIGH_RATE_WARNING {
        warnings.push(format!(
            "Annual rate of {}% exceeds {}%",
            inputs.annual_rate_percent, HIGH_RATE_WARNING
        ));
    }

    let methodology = match inputs.mortgage_type {
        MortgageType::Repayment => "Fixed-rate annuity",
        MortgageType::InterestOnly => "Interest-only",
    };

    let breakdown = PaymentBreakdown {
        mortgage_type: inputs.mortgage_type,
        monthly_payment: payment,
        number_of_payments: nper.normalize(),
        monthly_rate: rate,
        total_repayment,
        total_interest,
        display: crate::form::format_money(payment),
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(methodology, &inputs, warnings, elapsed, breakdown))
}

/// Two decimal places, always carried at scale 2 so serialised amounts read `400.00`.
fn round_money(value: Money) -> Money {
    let mut rounded =
        value.round_dp_with_strategy(DISPLAY_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(DISPLAY_DECIMALS);
    rounded
}
