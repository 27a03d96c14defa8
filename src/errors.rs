use thiserror::Error;

/// Error type for the checked account operations.
///
/// The baseline `deposit`/`withdraw`/`transfer` operations are total and never
/// fail; only the `try_*` wrappers produce these.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum AccountError {
    #[error("invalid amount: {0}")]
    InvalidAmount(f64),
    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: f64, available: f64 },
}
