use thiserror::Error;

use crate::placement::PlacementKind;

/// Reasons a delimited boat line cannot become a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line ended before the named field, or the field was blank.
    #[error("missing {field} field")]
    MissingField { field: &'static str },

    #[error("length '{value}' is not a whole number")]
    InvalidLength { value: String },

    #[error("amount owed '{value}' is not a decimal number")]
    InvalidAmount { value: String },

    /// Slip and storage numbers must be whole numbers.
    #[error("{kind} number '{value}' is not a whole number")]
    InvalidDetail { kind: PlacementKind, value: String },

    /// Text that the data file cannot hold without splitting or trimming it.
    #[error("{field} '{value}' has surrounding spaces, a comma or a line break")]
    UnsavableText { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, ParseError>;
