use thiserror::Error;

#[derive(Debug, Error)]
pub enum MortgageError {
    #[error("Invalid input: {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Arithmetic overflow in {context}")]
    Overflow { context: String },
}

impl MortgageError {
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        MortgageError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn overflow(context: &str) -> Self {
        MortgageError::Overflow {
            context: context.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_problem() {
        let e = MortgageError::invalid("amount", "must be greater than zero");
        assert_eq!(
            e.to_string(),
            "Invalid input: amount: must be greater than zero"
        );
        let e = MortgageError::overflow("annuity payment");
        assert_eq!(e.to_string(), "Arithmetic overflow in annuity payment");
    }
}
