//! Data layer for the Armory crafting backend.
//!
//! The durable store is an external key-value dictionary: get/set by key,
//! last-write-wins, no transactions, single-key atomicity. This crate
//! defines the repository traits the service depends on and two
//! implementations -- the production Redis adapter and an in-memory store
//! for tests and local development.
//!
//! # Modules
//!
//! - [`repository`] -- `SaveRepository` / `BalanceRepository` traits and key schemes
//! - [`redis`] -- Redis-compatible adapter built on [`fred`]
//! - [`memory`] -- In-memory implementation backed by [`tokio::sync::RwLock`]
//! - [`error`] -- Shared error types

pub mod error;
pub mod memory;
pub mod redis;
pub mod repository;

// Re-export primary types for convenience.
pub use error::StoreError;
pub use memory::MemoryStore;
pub use redis::RedisStore;
pub use repository::{BalanceRepository, SaveRepository, balance_key, save_key};
