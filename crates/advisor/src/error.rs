//! The module contains the errors the advisor library can throw.
//!
//! Validation failures (`InvalidIncome`, `InvalidAmount`) surface at the call
//! boundary; everything else the arithmetic tolerates is reported in-band in
//! the plan's `warnings` list instead of failing.

use thiserror::Error;

/// Advisor custom errors.
#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Invalid income: {0}")]
    InvalidIncome(String),
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Insufficient funds: {0}")]
    InsufficientFunds(String),
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("\"{0}\" already present!")]
    ExistingKey(String),
    #[error("Category in use: {0}")]
    CategoryInUse(String),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl PartialEq for AdvisorError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidIncome(a), Self::InvalidIncome(b)) => a == b,
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InsufficientFunds(a), Self::InsufficientFunds(b)) => a == b,
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::ExistingKey(a), Self::ExistingKey(b)) => a == b,
            (Self::CategoryInUse(a), Self::CategoryInUse(b)) => a == b,
            (Self::Csv(a), Self::Csv(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
