use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DebtPayoffError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("No debts supplied: at least one debt is required")]
    EmptyDebtList,

    #[error(
        "Minimum payment for '{name}' does not cover monthly interest: \
         {minimum_payment} paid vs {monthly_interest} accrued — \
         needs at least {suggested_minimum} to make progress"
    )]
    InsufficientMinimumPayment {
        name: String,
        minimum_payment: Decimal,
        monthly_interest: Decimal,
        suggested_minimum: Decimal,
    },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for DebtPayoffError {
    fn from(e: serde_json::Error) -> Self {
        DebtPayoffError::SerializationError(e.to_string())
    }
}
