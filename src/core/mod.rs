//! Core business logic: ledger, quotes and conversion

pub mod config;
pub mod conversion;
pub mod error;
pub mod ledger;
pub mod log;
pub mod persistence;
pub mod quote;
pub mod transaction;

// Re-export main types for cleaner imports
pub use conversion::{Conversion, TargetCurrency};
pub use error::TrackerError;
pub use ledger::{Ledger, Totals};
pub use persistence::TransactionStore;
pub use quote::{CryptoQuoteSource, FiatQuoteSource, FiatQuotes, QuoteProvider, RateSnapshot};
pub use transaction::{Transaction, TransactionKind};
