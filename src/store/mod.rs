//! `TransactionStore` implementations

pub mod disk;
pub mod memory;

use crate::core::config::AppConfig;
use anyhow::Result;
use disk::DiskStore;

/// Opens the durable store under the configured data directory.
pub fn open_disk_store(config: &AppConfig) -> Result<DiskStore> {
    let path = config.default_data_path()?.join("ledger");
    DiskStore::open(&path)
}
