//! Error types for the armory-engine crate.
//!
//! Every [`GameError`] is an expected, user-facing rule violation, not a
//! fault: the display strings are surfaced verbatim to the caller as the
//! rejection reason. Engine functions check every precondition before the
//! first mutation, so a returned error always leaves the save untouched.

use armory_types::{EquipSlot, ItemKind, JobId, Rarity, ResourceKey, StationId};

/// A game-rule violation rejected by the engine.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GameError {
    /// The recipe ID is not in the catalog.
    #[error("Invalid recipe")]
    UnknownRecipe(String),

    /// The recipe exists but belongs to a different station.
    #[error("Recipe cannot be crafted at this station")]
    WrongStation {
        /// The recipe that was requested.
        recipe_id: String,
        /// The station it was requested at.
        station: StationId,
    },

    /// The station has not been unlocked for this wallet.
    #[error("Station is locked")]
    StationLocked(StationId),

    /// The player's level is below the recipe requirement.
    #[error("Requires level {required}")]
    LevelTooLow {
        /// The required player level.
        required: u32,
    },

    /// The station's level is below the recipe requirement.
    #[error("Requires station level {required}")]
    StationLevelTooLow {
        /// The required station level.
        required: u32,
    },

    /// The station queue is at capacity.
    #[error("Queue full. Max {capacity} items.")]
    QueueFull {
        /// The queue capacity at the station's current level.
        capacity: u64,
    },

    /// At least one recipe input is not covered by the resource map.
    #[error("Insufficient resources")]
    InsufficientResources,

    /// No queue holds a job with this ID.
    #[error("Job not found")]
    JobNotFound(JobId),

    /// The job has already finished; there is nothing to speed up.
    #[error("Job already complete")]
    JobAlreadyComplete(JobId),

    /// The wallet's AP balance does not cover the charge.
    #[error("Insufficient AP. Need {needed} AP, have {available} AP")]
    InsufficientAp {
        /// AP required by the operation.
        needed: u64,
        /// AP the wallet actually holds.
        available: u64,
    },

    /// The item ID is not in the catalog.
    #[error("Item not found")]
    UnknownItem(String),

    /// The item's kind does not match the requested equipment slot.
    #[error("Cannot equip {kind:?} in {slot:?} slot")]
    WrongSlot {
        /// The item's kind.
        kind: ItemKind,
        /// The slot it was aimed at.
        slot: EquipSlot,
    },

    /// The (item, rarity) pair is not in inventory.
    #[error("Item not in inventory")]
    NotInInventory,

    /// Fewer than two units of the (item, rarity) pair are held.
    #[error("Need at least 2x {item_name} at {rarity:?} rarity to merge. Have {have}")]
    NeedTwoToMerge {
        /// Display name of the item.
        item_name: String,
        /// The rarity tier requested.
        rarity: Rarity,
        /// Units actually held at that rarity.
        have: u64,
    },

    /// Epic items have no upgrade path.
    #[error("Cannot merge Epic items - already max rarity")]
    MaxRarity,

    /// The inventory does not cover the requested sale quantity.
    #[error("Insufficient items. Have {have}, need {need}")]
    InsufficientItems {
        /// Units actually held.
        have: u64,
        /// Units requested.
        need: u64,
    },

    /// The station cannot be upgraded further.
    #[error("Station is already max level")]
    AlreadyMaxLevel(StationId),

    /// The player has not reached the station's unlock level.
    #[error("Station unlocks at level {level}")]
    UnlocksAtLevel {
        /// The required player level.
        level: u32,
    },

    /// The resource is not a shop-purchasable raw material.
    #[error("Invalid resource type")]
    NotPurchasable(ResourceKey),

    /// A quantity of zero was requested.
    #[error("Quantity must be at least 1")]
    ZeroQuantity,

    /// An arithmetic bound was hit while applying an effect.
    #[error("Arithmetic overflow: {context}")]
    ArithmeticOverflow {
        /// Description of what was being computed.
        context: String,
    },
}
