use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;

use crate::error::MortgageError;
use crate::types::{Money, Rate};
use crate::MortgageResult;

/// Compound growth factor (1 + r)^n.
///
/// Whole period counts use exact repeated multiplication; fractional counts
/// go through `ln`/`exp`.
pub fn compound_factor(rate: Rate, nper: Decimal) -> MortgageResult<Decimal> {
    let base = Decimal::ONE
        .checked_add(rate)
        .ok_or_else(|| MortgageError::overflow("compound factor base"))?;

    let factor = if nper.fract().is_zero() {
        nper.to_u64().and_then(|n| base.checked_powu(n))
    } else {
        base.checked_powd(nper)
    };

    factor.ok_or_else(|| MortgageError::overflow("compound factor (1 + r)^n"))
}

/// Level payment that fully amortises `principal` over `nper` periods.
///
/// A zero rate, or one so small that the annuity factor collapses to zero
/// at 28 digits, falls back to straight-line repayment.
pub fn annuity_payment(principal: Money, rate: Rate, nper: Decimal) -> MortgageResult<Money> {
    if nper <= Decimal::ZERO {
        return Err(MortgageError::invalid(
            "nper",
            "Number of periods must be > 0",
        ));
    }
    if rate < Decimal::ZERO {
        return Err(MortgageError::invalid("rate", "Rate must be >= 0"));
    }

    if rate.is_zero() {
        return straight_line(principal, nper);
    }

    let factor = compound_factor(rate, nper)?;
    let growth = factor - Decimal::ONE;
    if growth.is_zero() {
        return straight_line(principal, nper);
    }

    principal
        .checked_mul(rate)
        .and_then(|v| v.checked_mul(factor))
        .and_then(|v| v.checked_div(growth))
        .ok_or_else(|| MortgageError::overflow("annuity payment"))
}

/// Periodic interest charge on an unchanging balance.
pub fn interest_only_payment(principal: Money, rate: Rate) -> MortgageResult<Money> {
    if rate < Decimal::ZERO {
        return Err(MortgageError::invalid("rate", "Rate must be >= 0"));
    }
    principal
        .checked_mul(rate)
        .ok_or_else(|| MortgageError::overflow("interest-only payment"))
}

fn straight_line(principal: Money, nper: Decimal) -> MortgageResult<Money> {
    principal
        .checked_div(nper)
        .ok_or_else(|| MortgageError::overflow("straight-line payment"))
}
