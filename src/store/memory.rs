use crate::core::persistence::{TransactionStore, decode, encode};
use crate::core::transaction::Transaction;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

/// Keeps the serialized snapshot in memory. Nothing survives the process.
pub struct MemoryStore {
    inner: Arc<Mutex<Option<Vec<u8>>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(None)),
        }
    }

    /// Starts from raw stored bytes, as if written by an earlier run.
    pub fn from_raw(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Some(bytes.into()))),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TransactionStore for MemoryStore {
    async fn load(&self) -> Vec<Transaction> {
        let snapshot = self.inner.lock().await;
        debug!("Memory store LOAD");
        decode(snapshot.as_deref())
    }

    async fn save(&self, transactions: &[Transaction]) -> Result<()> {
        let bytes = encode(transactions)?;
        let mut snapshot = self.inner.lock().await;
        debug!(count = transactions.len(), "Memory store SAVE");
        *snapshot = Some(bytes);
        Ok(())
    }
}
