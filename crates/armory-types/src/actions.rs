//! Receipt records returned by the service, one per action.
//!
//! Each mutating action answers with a receipt describing what changed,
//! mirroring the response payloads the portal frontend already consumes.
//! Receipts are plain data: the service fills them in from engine results
//! and the authoritative balance returned by the points service.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{Rarity, ResourceKey, StationId};
use crate::state::{CraftingJob, Equipment, InventorySlot, SaveState};

// ---------------------------------------------------------------------------
// Load / reset
// ---------------------------------------------------------------------------

/// Result of loading (and lazily creating) a wallet's save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct LoadReceipt {
    /// The full save document after daily-login accounting.
    pub save: SaveState,
    /// Number of completed jobs waiting to be collected.
    pub completed_jobs_ready: usize,
    /// Whether this load created the save for the first time.
    pub created: bool,
}

// ---------------------------------------------------------------------------
// Crafting
// ---------------------------------------------------------------------------

/// Result of starting a crafting job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct CraftReceipt {
    /// The job appended to the station queue.
    pub job: CraftingJob,
    /// Resource counts after the input debit.
    pub resources: BTreeMap<ResourceKey, u64>,
    /// Station-adjusted craft duration in seconds.
    pub craft_time_seconds: u64,
}

/// Result of a paid speed-up on a queued job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct SpeedUpReceipt {
    /// The job after its end time was pulled forward.
    pub job: CraftingJob,
    /// AP charged for this speed-up.
    pub ap_spent: u64,
    /// AP balance after the charge.
    pub new_balance: u64,
}

/// What one completed job produced at collection time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct CollectedOutput {
    /// The recipe that produced this output.
    pub recipe_id: String,
    /// Display name of the recipe.
    pub recipe_name: String,
    /// What was produced and how much.
    pub output: CollectedKind,
    /// XP granted for this job, first-craft bonus included.
    pub xp_gained: u64,
    /// Whether the first-craft bonus applied to this job.
    pub first_craft: bool,
}

/// The concrete output of a collected job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", rename_all_fields = "camelCase", tag = "type")]
#[ts(export, export_to = "bindings/")]
pub enum CollectedKind {
    /// A processed material credited to the resource map.
    Resource {
        /// The resource produced.
        key: ResourceKey,
        /// Units produced.
        quantity: u64,
    },
    /// An item credited to inventory at common rarity.
    Item {
        /// Catalog item ID.
        item_id: String,
        /// Units produced.
        quantity: u64,
    },
}

/// Result of collecting all completed jobs across every station.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct CollectReceipt {
    /// Everything collected, in station order.
    pub collected: Vec<CollectedOutput>,
    /// Total XP granted by this collection.
    pub total_xp: u64,
    /// Whether the XP pushed the player over at least one threshold.
    pub leveled_up: bool,
    /// Player level after the cascade.
    pub new_level: u32,
    /// Lifetime XP after the grant.
    pub new_xp: u64,
    /// Absolute threshold for the next level; 0 at max level.
    pub xp_to_next_level: u64,
    /// Resource counts after crediting material outputs.
    pub resources: BTreeMap<ResourceKey, u64>,
    /// Inventory after crediting item outputs.
    pub inventory: Vec<InventorySlot>,
    /// Station levels after any cascade unlocks.
    pub station_levels: BTreeMap<StationId, u32>,
}

// ---------------------------------------------------------------------------
// Stations
// ---------------------------------------------------------------------------

/// Result of a station unlock or paid upgrade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct UpgradeReceipt {
    /// The station acted on.
    pub station_id: StationId,
    /// Station level after the operation.
    pub new_level: u32,
    /// AP charged; 0 for the free unlock path.
    pub ap_spent: u64,
    /// AP balance after the charge; absent on the free unlock path.
    pub new_balance: Option<u64>,
    /// All station levels after the operation.
    pub station_levels: BTreeMap<StationId, u32>,
}

// ---------------------------------------------------------------------------
// Inventory and equipment
// ---------------------------------------------------------------------------

/// Result of an equip or unequip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct EquipReceipt {
    /// Equipment slots after the operation.
    pub equipped: Equipment,
    /// Inventory after the exchange with the slot.
    pub inventory: Vec<InventorySlot>,
}

/// Result of a two-for-one rarity merge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct MergeReceipt {
    /// The merged item.
    pub item_id: String,
    /// Rarity consumed (two units).
    pub from_rarity: Rarity,
    /// Rarity produced (one unit).
    pub to_rarity: Rarity,
    /// AP charged for the merge.
    pub ap_spent: u64,
    /// XP granted for the merge.
    pub xp_gained: u64,
    /// AP balance after the charge.
    pub new_balance: u64,
    /// Whether the merge XP triggered a level-up.
    pub leveled_up: bool,
    /// Player level after the cascade.
    pub new_level: u32,
    /// Inventory after the merge.
    pub inventory: Vec<InventorySlot>,
}

/// Result of selling items for AP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct SellReceipt {
    /// The item sold.
    pub item_id: String,
    /// Display name of the item.
    pub item_name: String,
    /// Units sold.
    pub quantity: u64,
    /// AP credited for the sale.
    pub ap_earned: u64,
    /// AP balance after the credit.
    pub new_balance: u64,
    /// Inventory after the sale.
    pub inventory: Vec<InventorySlot>,
}

// ---------------------------------------------------------------------------
// Shop
// ---------------------------------------------------------------------------

/// Result of a raw-material purchase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct PurchaseReceipt {
    /// The material purchased.
    pub resource: ResourceKey,
    /// Units purchased.
    pub quantity: u64,
    /// AP charged for the purchase.
    pub ap_spent: u64,
    /// AP balance after the charge.
    pub new_balance: u64,
    /// Resource counts after the credit.
    pub resources: BTreeMap<ResourceKey, u64>,
}
