//! Shared type definitions for the Armory crafting backend.
//!
//! This crate is the single source of truth for all types used across the
//! Armory workspace. Types defined here flow downstream to `TypeScript`
//! via `ts-rs` for the portal frontend.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrapper for crafting job identifiers
//! - [`wallet`] -- Normalized lowercase wallet address newtype
//! - [`enums`] -- Enumeration types (resources, stations, rarity, modes)
//! - [`state`] -- The persisted per-wallet save document
//! - [`actions`] -- Receipt records returned by service operations

pub mod actions;
pub mod enums;
pub mod ids;
pub mod state;
pub mod wallet;

// Re-export all public types at crate root for convenience.
pub use actions::{
    CollectReceipt, CollectedKind, CollectedOutput, CraftReceipt, EquipReceipt, LoadReceipt,
    MergeReceipt, PurchaseReceipt, SellReceipt, SpeedUpReceipt, UpgradeReceipt,
};
pub use enums::{EquipSlot, ItemKind, Rarity, RecipeCategory, ResourceKey, SpeedUpMode, StationId};
pub use ids::JobId;
pub use state::{CraftingJob, Equipment, InventorySlot, Progress, SaveState};
pub use wallet::{Wallet, WalletError};
