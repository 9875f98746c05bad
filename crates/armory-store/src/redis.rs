//! Redis-compatible store adapter.
//!
//! Wraps a [`fred::prelude::Client`] and implements the repository traits
//! with typed JSON get/set over the key patterns in [`crate::repository`].
//! Every operation is a single bounded round trip; there are no
//! transactions and no retries at this layer.

use std::collections::BTreeMap;

use fred::prelude::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

use armory_types::{SaveState, Wallet};

use crate::error::StoreError;
use crate::repository::{
    BalanceRepository, LEGACY_BALANCES_KEY, SaveRepository, balance_key, save_key,
};

/// Connection handle to a Redis-compatible instance.
#[derive(Clone)]
pub struct RedisStore {
    client: Client,
}

impl RedisStore {
    /// Connect to the store at the given URL.
    ///
    /// The URL follows the Redis URL scheme: `redis://host:port` or
    /// `redis://host:port/db`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Config`] if the URL cannot be parsed and
    /// [`StoreError::Redis`] if the connection fails.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let config = Config::from_url(url)
            .map_err(|e| StoreError::Config(format!("Invalid Redis URL: {e}")))?;

        let client = Builder::from_config(config).build()?;
        client.init().await?;

        tracing::info!("Connected to Redis");
        Ok(Self { client })
    }

    /// Serialize `value` as JSON and store it at `key`.
    async fn set_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string(value)?;
        let _: () = self.client.set(key, json.as_str(), None, None, false).await?;
        Ok(())
    }

    /// Read the value at `key` and deserialize from JSON.
    ///
    /// Returns `Ok(None)` when the key does not exist.
    async fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let value: Option<String> = self.client.get(key).await?;
        match value {
            Some(s) => Ok(Some(serde_json::from_str(&s)?)),
            None => Ok(None),
        }
    }

    /// Return a reference to the underlying [`Client`].
    pub const fn client(&self) -> &Client {
        &self.client
    }
}

impl SaveRepository for RedisStore {
    async fn load_save(&self, wallet: &Wallet) -> Result<Option<SaveState>, StoreError> {
        self.get_json(&save_key(wallet)).await
    }

    async fn store_save(&self, save: &SaveState) -> Result<(), StoreError> {
        self.set_json(&save_key(&save.wallet), save).await
    }
}

impl BalanceRepository for RedisStore {
    async fn read_balance(&self, wallet: &Wallet) -> Result<Option<u64>, StoreError> {
        let value: Option<String> = self.client.get(balance_key(wallet).as_str()).await?;
        match value {
            Some(s) => {
                let parsed = s.parse::<u64>().map_err(|e| {
                    StoreError::Config(format!("balance for {wallet} is not a valid u64: {e}"))
                })?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }

    async fn write_balance(&self, wallet: &Wallet, balance: u64) -> Result<(), StoreError> {
        let _: () = self
            .client
            .set(
                balance_key(wallet).as_str(),
                balance.to_string().as_str(),
                None,
                None,
                false,
            )
            .await?;
        Ok(())
    }

    async fn read_legacy_balances(
        &self,
    ) -> Result<Option<BTreeMap<String, u64>>, StoreError> {
        self.get_json(LEGACY_BALANCES_KEY).await
    }
}
