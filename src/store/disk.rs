use crate::core::persistence::{TRANSACTIONS_KEY, TransactionStore, decode, encode};
use crate::core::transaction::Transaction;
use anyhow::{Context, Result};
use async_trait::async_trait;
use fjall::{Config, Keyspace, PartitionCreateOptions, PartitionHandle, PersistMode};
use std::path::Path;
use tracing::{debug, warn};

const PARTITION: &str = "ledger";

/// Durable store backed by a fjall keyspace.
///
/// The whole transaction list lives under a single key, so each save is one
/// insert followed by a journal sync.
pub struct DiskStore {
    keyspace: Keyspace,
    partition: PartitionHandle,
}

impl DiskStore {
    pub fn open(path: &Path) -> Result<Self> {
        std::fs::create_dir_all(path)
            .with_context(|| format!("Failed to create data directory: {}", path.display()))?;

        let keyspace = Config::new(path)
            .open()
            .with_context(|| format!("Failed to open keyspace at {}", path.display()))?;
        let partition = keyspace
            .open_partition(PARTITION, PartitionCreateOptions::default())
            .context("Failed to open ledger partition")?;
        debug!("Opened disk store at {}", path.display());

        Ok(Self {
            keyspace,
            partition,
        })
    }
}

#[async_trait]
impl TransactionStore for DiskStore {
    async fn load(&self) -> Vec<Transaction> {
        match self.partition.get(TRANSACTIONS_KEY) {
            Ok(value) => {
                debug!(found = value.is_some(), "Disk store LOAD");
                decode(value.as_deref())
            }
            Err(e) => {
                warn!(error = %e, "Failed to read stored transactions, starting empty");
                Vec::new()
            }
        }
    }

    async fn save(&self, transactions: &[Transaction]) -> Result<()> {
        let bytes = encode(transactions)?;
        self.partition
            .insert(TRANSACTIONS_KEY, bytes)
            .context("Failed to write transactions")?;
        self.keyspace
            .persist(PersistMode::SyncAll)
            .context("Failed to sync transactions to disk")?;
        debug!(count = transactions.len(), "Disk store SAVE");
        Ok(())
    }
}
