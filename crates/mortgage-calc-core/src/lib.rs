pub mod calculator;
pub mod error;
pub mod form;
pub mod time_value;
pub mod types;

pub use error::MortgageError;
pub use types::*;

/// Standard result type for all mortgage-calc operations
pub type MortgageResult<T> = Result<T, MortgageError>;
