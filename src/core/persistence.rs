//! Storage abstraction for the transaction snapshot

use super::transaction::Transaction;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tracing::warn;

/// Key under which the full transaction list is stored.
pub const TRANSACTIONS_KEY: &str = "transactions";

/// Durable storage for a single serialized transaction snapshot.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Reads the stored snapshot. Missing or unreadable data yields an empty list.
    async fn load(&self) -> Vec<Transaction>;

    /// Overwrites the stored snapshot with `transactions`.
    async fn save(&self, transactions: &[Transaction]) -> Result<()>;
}

#[async_trait]
impl<T: TransactionStore + ?Sized> TransactionStore for Arc<T> {
    async fn load(&self) -> Vec<Transaction> {
        (**self).load().await
    }

    async fn save(&self, transactions: &[Transaction]) -> Result<()> {
        (**self).save(transactions).await
    }
}

pub(crate) fn encode(transactions: &[Transaction]) -> Result<Vec<u8>> {
    Ok(serde_json::to_vec(transactions)?)
}

pub(crate) fn decode(bytes: Option<&[u8]>) -> Vec<Transaction> {
    let Some(bytes) = bytes else {
        return Vec::new();
    };
    match serde_json::from_slice(bytes) {
        Ok(transactions) => transactions,
        Err(e) => {
            warn!(error = %e, "Stored transactions are unreadable, starting empty");
            Vec::new()
        }
    }
}
