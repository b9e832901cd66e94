use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MortgageError;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.05 = 5%). Never as percentages.
pub type Rate = Decimal;

/// Percentages as typed into the form (5.25 = 5.25%).
pub type Percent = Decimal;

/// Year fractions or counts
pub type Years = Decimal;

/// How the principal is dealt with over the term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MortgageType {
    /// Each payment retires interest and principal together.
    #[serde(rename = "repayment")]
    Repayment,
    /// Each payment covers accrued interest only.
    #[serde(rename = "interest-only")]
    InterestOnly,
}

impl MortgageType {
    /// Options in the order the form presents them.
    pub const ALL: [MortgageType; 2] = [MortgageType::Repayment, MortgageType::InterestOnly];

    /// Value carried by the form control.
    pub fn as_str(&self) -> &'static str {
        match self {
            MortgageType::Repayment => "repayment",
            MortgageType::InterestOnly => "interest-only",
        }
    }

    /// Human-readable option label.
    pub fn label(&self) -> &'static str {
        match self {
            MortgageType::Repayment => "Repayment",
            MortgageType::InterestOnly => "Interest Only",
        }
    }
}

impl fmt::Display for MortgageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MortgageType {
    type Err = MortgageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "repayment" => Ok(MortgageType::Repayment),
            "interest-only" | "interest_only" | "interestonly" => Ok(MortgageType::InterestOnly),
            "" => Err(MortgageError::invalid("mortgage_type", "no mortgage type selected")),
            other => Err(MortgageError::invalid(
                "mortgage_type",
                format!("unknown mortgage type '{other}'"),
            )),
        }
    }
}

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}
