//! Pure game logic for the Armory crafting backend.
//!
//! This crate contains the logic layer -- everything that operates on a
//! wallet's [`SaveState`](armory_types::SaveState) without touching I/O.
//! It sits between `armory-types` (which defines the data structures) and
//! the service crate (which handles persistence and orchestration). Every
//! function takes the save, the inputs, and the caller's clock, and either
//! mutates the save and returns a receipt or rejects with a [`GameError`]
//! before the first mutation.
//!
//! # Modules
//!
//! - [`craft`] -- Craft starts (validation pipeline, atomic debit,
//!   sequential queue scheduling) and paid speed-ups
//! - [`collect`] -- Draining completed jobs into resources/inventory/XP
//! - [`equipment`] -- Equip/unequip slot exclusivity and rarity merging
//! - [`error`] -- The game-rule rejection taxonomy ([`GameError`])
//! - [`inventory`] -- (item, rarity) stack operations
//! - [`market`] -- AP-priced selling and the raw-material shop
//! - [`progression`] -- XP grants and the level-up cascade
//! - [`save`] -- Save creation defaults and daily-login accounting
//! - [`station`] -- Station unlocks and paid upgrades

pub mod collect;
pub mod craft;
pub mod equipment;
pub mod error;
pub mod inventory;
pub mod market;
pub mod progression;
pub mod save;
pub mod station;

// Re-export primary entry points at crate root for convenience.
pub use collect::collect;
pub use craft::{apply_speed_up, start_craft};
pub use equipment::{equip, merge, unequip};
pub use error::GameError;
pub use market::{buy_material, sell};
pub use progression::{LevelUpOutcome, award_xp};
pub use save::{new_save, touch_daily_login};
pub use station::upgrade_station;
