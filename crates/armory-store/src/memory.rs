//! In-memory store for tests and local development.
//!
//! Holds the same JSON documents the Redis adapter would, in a
//! [`tokio::sync::RwLock`]-guarded map, so serialization round-trips are
//! exercised identically. Production runs against [`crate::RedisStore`];
//! this store exists so the engines and service can be driven end to end
//! without infrastructure.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use armory_types::{SaveState, Wallet};

use crate::error::StoreError;
use crate::repository::{
    BalanceRepository, LEGACY_BALANCES_KEY, SaveRepository, balance_key, save_key,
};

/// In-memory key-value store holding JSON strings.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<BTreeMap<String, String>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the legacy aggregate balance record (test setup helper).
    pub async fn seed_legacy_balances(
        &self,
        balances: &BTreeMap<String, u64>,
    ) -> Result<(), StoreError> {
        let json = serde_json::to_string(balances)?;
        self.entries
            .write()
            .await
            .insert(String::from(LEGACY_BALANCES_KEY), json);
        Ok(())
    }

    /// Raw read of a key (test assertion helper).
    pub async fn raw_get(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }
}

impl SaveRepository for MemoryStore {
    async fn load_save(&self, wallet: &Wallet) -> Result<Option<SaveState>, StoreError> {
        let entries = self.entries.read().await;
        match entries.get(&save_key(wallet)) {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }

    async fn store_save(&self, save: &SaveState) -> Result<(), StoreError> {
        let json = serde_json::to_string(save)?;
        self.entries
            .write()
            .await
            .insert(save_key(&save.wallet), json);
        Ok(())
    }
}

impl BalanceRepository for MemoryStore {
    async fn read_balance(&self, wallet: &Wallet) -> Result<Option<u64>, StoreError> {
        let entries = self.entries.read().await;
        match entries.get(&balance_key(wallet)) {
            Some(raw) => {
                let parsed = raw.parse::<u64>().map_err(|e| {
                    StoreError::Config(format!("balance for {wallet} is not a valid u64: {e}"))
                })?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }

    async fn write_balance(&self, wallet: &Wallet, balance: u64) -> Result<(), StoreError> {
        self.entries
            .write()
            .await
            .insert(balance_key(wallet), balance.to_string());
        Ok(())
    }

    async fn read_legacy_balances(
        &self,
    ) -> Result<Option<BTreeMap<String, u64>>, StoreError> {
        let entries = self.entries.read().await;
        match entries.get(LEGACY_BALANCES_KEY) {
            Some(json) => Ok(Some(serde_json::from_str(json)?)),
            None => Ok(None),
        }
    }
}
