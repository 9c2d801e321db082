//! Domain errors surfaced to the command handlers.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors reported by ledger mutations and currency conversion.
///
/// A missing transaction is not an error: `edit` and `remove` report it as
/// `Ok(false)` and leave the ledger untouched.
#[derive(Error, Debug)]
pub enum TrackerError {
    /// Amount was zero or negative.
    #[error("Amount must be greater than zero, got {0}")]
    InvalidAmount(Decimal),

    /// Amount is valid on its own but would overflow a total or a conversion.
    #[error("Amount is too large: {0}")]
    AmountTooLarge(Decimal),

    /// Description was blank after trimming.
    #[error("Description must not be empty")]
    EmptyDescription,

    /// Quote fetch failed or returned partial data.
    #[error("Exchange rates unavailable: {0}")]
    RatesUnavailable(String),

    /// The transaction snapshot could not be written.
    #[error("Failed to persist transactions: {0}")]
    Persistence(#[source] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
