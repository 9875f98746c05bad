//! Repository traits over the durable key-value store.
//!
//! The engines are pure; all I/O flows through these two traits so the
//! service can run against a real Redis-compatible store in production
//! and the in-memory store in tests. The store contract is deliberately
//! thin: get/set by key, last-write-wins, single-key atomicity only.
//!
//! # Key Patterns
//!
//! | Pattern | Type | Description |
//! |---------|------|-------------|
//! | `armory:save:{wallet}` | JSON | Full per-wallet save document |
//! | `points:balance:{wallet}` | Integer | Per-wallet AP balance |
//! | `points:balances` | JSON | Legacy aggregate wallet-to-balance map |

use std::collections::BTreeMap;

use armory_types::{SaveState, Wallet};

use crate::error::StoreError;

/// Key prefix for per-wallet save documents.
pub const SAVE_KEY_PREFIX: &str = "armory:save:";

/// Key prefix for per-wallet AP balance records.
pub const BALANCE_KEY_PREFIX: &str = "points:balance:";

/// Key of the legacy aggregate balance record (wallet -> balance map).
pub const LEGACY_BALANCES_KEY: &str = "points:balances";

/// Storage key for a wallet's save document.
pub fn save_key(wallet: &Wallet) -> String {
    format!("{SAVE_KEY_PREFIX}{wallet}")
}

/// Storage key for a wallet's AP balance record.
pub fn balance_key(wallet: &Wallet) -> String {
    format!("{BALANCE_KEY_PREFIX}{wallet}")
}

/// Persistence of per-wallet save documents.
#[allow(async_fn_in_trait)]
pub trait SaveRepository {
    /// Load a wallet's save document; `None` if it has never been created.
    async fn load_save(&self, wallet: &Wallet) -> Result<Option<SaveState>, StoreError>;

    /// Persist a wallet's save document (whole-document replace).
    async fn store_save(&self, save: &SaveState) -> Result<(), StoreError>;
}

/// Persistence of AP balance records.
///
/// Balance *semantics* (starting balance, legacy migration, insufficient
/// funds) live in the service's points module; this trait only moves raw
/// values.
#[allow(async_fn_in_trait)]
pub trait BalanceRepository {
    /// Read a wallet's per-wallet balance record; `None` if absent.
    async fn read_balance(&self, wallet: &Wallet) -> Result<Option<u64>, StoreError>;

    /// Write a wallet's per-wallet balance record.
    async fn write_balance(&self, wallet: &Wallet, balance: u64) -> Result<(), StoreError>;

    /// Read the legacy aggregate balance map; `None` if absent.
    async fn read_legacy_balances(&self)
    -> Result<Option<BTreeMap<String, u64>>, StoreError>;
}
