use marina_model::{Decimal, ParseError, format_amount};
use thiserror::Error;

/// Errors returned by registry operations.
///
/// None of these are fatal; the caller reports them and carries on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("marina is full ({capacity} boats)")]
    CapacityExceeded { capacity: usize },

    #[error("invalid boat data: {0}")]
    Parse(#[from] ParseError),

    #[error("no boat named '{name}'")]
    NotFound { name: String },

    /// Payment larger than the balance; nothing was applied.
    #[error("payment of ${} exceeds the ${} owed", dollars(.amount), dollars(.owed))]
    Overpayment { amount: Decimal, owed: Decimal },

    #[error("payment of ${} is negative", dollars(.amount))]
    NegativePayment { amount: Decimal },
}

fn dollars(amount: &Decimal) -> String {
    format_amount(*amount)
}

pub type Result<T> = std::result::Result<T, RegistryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overpayment_message_shows_both_amounts() {
        let err = RegistryError::Overpayment {
            amount: Decimal::new(2000, 0),
            owed: Decimal::new(15005, 1),
        };
        assert_eq!(
            err.to_string(),
            "payment of $2000.00 exceeds the $1500.50 owed"
        );
    }

    #[test]
    fn parse_errors_convert() {
        let err: RegistryError = ParseError::MissingField { field: "name" }.into();
        assert_eq!(err.to_string(), "invalid boat data: missing name field");
    }
}
