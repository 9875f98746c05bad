//! The persisted per-wallet save document and its sub-records.
//!
//! One [`SaveState`] is stored per wallet under `armory:save:<wallet>` as a
//! single JSON document. Field names serialize in camelCase so documents
//! written by earlier revisions of the service load unchanged; fields added
//! after launch ([`SaveState::equipped`], [`InventorySlot::rarity`]) carry
//! `#[serde(default)]` and back-fill lazily on first load.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::enums::{EquipSlot, Rarity, ResourceKey, StationId};
use crate::ids::JobId;
use crate::wallet::Wallet;

// ---------------------------------------------------------------------------
// CraftingJob
// ---------------------------------------------------------------------------

/// A queued (or running) unit of work at one station.
///
/// Jobs are created by a craft start, shrunk by paid speed-ups, and removed
/// only at collection time. Completion is a derived property of the stored
/// end timestamp against the caller's `now` -- there is no scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct CraftingJob {
    /// Unique job identifier.
    pub id: JobId,
    /// The recipe being crafted.
    pub recipe_id: String,
    /// The station whose queue holds this job.
    pub station_id: StationId,
    /// When the station began (or will begin) this job, epoch millis.
    pub start_time: u64,
    /// When the job completes, epoch millis. Only speed-ups shrink this.
    pub end_time: u64,
    /// Cumulative AP spent speeding this job up.
    pub speed_up_applied: u64,
}

impl CraftingJob {
    /// Whether the job has finished relative to the given wall-clock time.
    pub const fn is_complete(&self, now_ms: u64) -> bool {
        self.end_time <= now_ms
    }

    /// Remaining run time in whole seconds (rounded up), 0 if complete.
    pub const fn remaining_seconds(&self, now_ms: u64) -> u64 {
        let remaining_ms = self.end_time.saturating_sub(now_ms);
        remaining_ms.div_ceil(1000)
    }
}

// ---------------------------------------------------------------------------
// InventorySlot
// ---------------------------------------------------------------------------

/// One inventory stack, uniquely keyed by (item, rarity) within a save.
///
/// Slots saved before rarity existed deserialize at [`Rarity::Common`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct InventorySlot {
    /// Catalog item ID.
    pub item_id: String,
    /// Rarity tier of this stack.
    #[serde(default)]
    pub rarity: Rarity,
    /// Units held. Slots at zero are pruned, never persisted.
    pub quantity: u64,
}

// ---------------------------------------------------------------------------
// Equipment
// ---------------------------------------------------------------------------

/// The two independent equipment slots of a save.
///
/// Saves written before equipment existed deserialize with both slots
/// empty (`#[serde(default)]` at the [`SaveState`] field).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Equipment {
    /// Equipped weapon item ID, if any.
    pub weapon: Option<String>,
    /// Rarity of the equipped weapon; absent on pre-rarity saves.
    pub weapon_rarity: Option<Rarity>,
    /// Equipped armor item ID, if any.
    pub armor: Option<String>,
    /// Rarity of the equipped armor; absent on pre-rarity saves.
    pub armor_rarity: Option<Rarity>,
}

impl Equipment {
    /// The (item, rarity) pair currently in `slot`, if anything is equipped.
    ///
    /// A missing rarity (pre-rarity save) reads as [`Rarity::Common`].
    pub fn get(&self, slot: EquipSlot) -> Option<(&str, Rarity)> {
        match slot {
            EquipSlot::Weapon => self
                .weapon
                .as_deref()
                .map(|id| (id, self.weapon_rarity.unwrap_or_default())),
            EquipSlot::Armor => self
                .armor
                .as_deref()
                .map(|id| (id, self.armor_rarity.unwrap_or_default())),
        }
    }

    /// Place an (item, rarity) pair into `slot`, replacing any occupant.
    pub fn set(&mut self, slot: EquipSlot, item_id: String, rarity: Rarity) {
        match slot {
            EquipSlot::Weapon => {
                self.weapon = Some(item_id);
                self.weapon_rarity = Some(rarity);
            }
            EquipSlot::Armor => {
                self.armor = Some(item_id);
                self.armor_rarity = Some(rarity);
            }
        }
    }

    /// Empty `slot`, clearing both the item and its rarity.
    pub fn clear(&mut self, slot: EquipSlot) {
        match slot {
            EquipSlot::Weapon => {
                self.weapon = None;
                self.weapon_rarity = None;
            }
            EquipSlot::Armor => {
                self.armor = None;
                self.armor_rarity = None;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

/// Lifetime progression counters for a wallet.
///
/// `xp` is a monotone running total and `xp_to_next_level` is the absolute
/// threshold for the next level -- not a per-level delta. The displayed XP
/// bar therefore never resets; this is the established display contract
/// and must not be "fixed" here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct Progress {
    /// Player level, 1 through 10.
    pub level: u32,
    /// Lifetime XP; never reset or rolled over.
    pub xp: u64,
    /// Absolute XP threshold for the next level; 0 at max level.
    pub xp_to_next_level: u64,
    /// Total output units collected from crafting.
    pub total_items_crafted: u64,
    /// Lifetime AP spent (shop, upgrades, speed-ups). The stored field
    /// keeps the original document spelling.
    #[serde(rename = "totalAPSpent")]
    pub total_ap_spent: u64,
    /// Lifetime AP earned from selling items.
    #[serde(rename = "totalAPEarned")]
    pub total_ap_earned: u64,
    /// Output IDs that have already received the one-time first-craft
    /// bonus. Grows monotonically; never cleared.
    pub first_crafts: BTreeSet<String>,
    /// Consecutive-day login streak.
    pub daily_login_streak: u32,
    /// Calendar day (YYYY-MM-DD) of the most recent load; empty until the
    /// first load.
    pub last_login_date: String,
}

// ---------------------------------------------------------------------------
// SaveState
// ---------------------------------------------------------------------------

/// The complete per-wallet save document.
///
/// Created lazily on first load, mutated by every action, persisted as a
/// single JSON value (the unit of store atomicity).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub struct SaveState {
    /// Owning wallet, normalized lowercase.
    pub wallet: Wallet,
    /// Material counts, keyed by resource. Absent keys read as zero.
    pub resources: BTreeMap<ResourceKey, u64>,
    /// Per-station FIFO job queues; insertion order is execution order.
    pub crafting_queues: BTreeMap<StationId, Vec<CraftingJob>>,
    /// Station levels; 0 means locked.
    pub station_levels: BTreeMap<StationId, u32>,
    /// Item stacks, at most one per (item, rarity) pair.
    pub inventory: Vec<InventorySlot>,
    /// Equipped weapon/armor; empty on saves predating equipment.
    #[serde(default)]
    pub equipped: Equipment,
    /// Lifetime progression counters.
    pub progress: Progress,
    /// Timestamp of the last mutation, epoch millis.
    pub last_updated: u64,
    /// Timestamp of save creation, epoch millis.
    pub created_at: u64,
}

impl SaveState {
    /// Current count of a resource (0 when the key is absent).
    pub fn resource(&self, key: ResourceKey) -> u64 {
        self.resources.get(&key).copied().unwrap_or(0)
    }

    /// Current level of a station (0 when locked or unknown).
    pub fn station_level(&self, station: StationId) -> u32 {
        self.station_levels.get(&station).copied().unwrap_or(0)
    }

    /// The queue for a station, empty when none has been created yet.
    pub fn queue(&self, station: StationId) -> &[CraftingJob] {
        self.crafting_queues
            .get(&station)
            .map_or(&[], Vec::as_slice)
    }

    /// Number of jobs across all queues that are complete at `now_ms`.
    pub fn completed_jobs_ready(&self, now_ms: u64) -> usize {
        self.crafting_queues
            .values()
            .flatten()
            .filter(|job| job.is_complete(now_ms))
            .count()
    }

    /// Find the inventory slot for an exact (item, rarity) pair.
    pub fn find_slot(&self, item_id: &str, rarity: Rarity) -> Option<&InventorySlot> {
        self.inventory
            .iter()
            .find(|slot| slot.item_id == item_id && slot.rarity == rarity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn job(end_time: u64) -> CraftingJob {
        CraftingJob {
            id: JobId::new(),
            recipe_id: String::from("refined-plasma"),
            station_id: StationId::PlasmaRefinery,
            start_time: 0,
            end_time,
            speed_up_applied: 0,
        }
    }

    #[test]
    fn job_completion_is_inclusive() {
        let j = job(5_000);
        assert!(!j.is_complete(4_999));
        assert!(j.is_complete(5_000));
        assert!(j.is_complete(5_001));
    }

    #[test]
    fn remaining_seconds_rounds_up() {
        let j = job(5_500);
        assert_eq!(j.remaining_seconds(5_000), 1);
        assert_eq!(j.remaining_seconds(4_499), 2);
        assert_eq!(j.remaining_seconds(5_500), 0);
        assert_eq!(j.remaining_seconds(9_000), 0);
    }

    #[test]
    fn legacy_slot_without_rarity_reads_common() {
        let json = r#"{"itemId":"plasma-pistol","quantity":2}"#;
        let slot: Result<InventorySlot, _> = serde_json::from_str(json);
        let slot = slot.ok();
        assert_eq!(slot.as_ref().map(|s| s.rarity), Some(Rarity::Common));
        assert_eq!(slot.as_ref().map(|s| s.quantity), Some(2));
    }

    #[test]
    fn equipment_slot_accessors() {
        let mut eq = Equipment::default();
        assert_eq!(eq.get(EquipSlot::Weapon), None);

        eq.set(EquipSlot::Weapon, String::from("plasma-pistol"), Rarity::Rare);
        assert_eq!(eq.get(EquipSlot::Weapon), Some(("plasma-pistol", Rarity::Rare)));
        assert_eq!(eq.get(EquipSlot::Armor), None);

        eq.clear(EquipSlot::Weapon);
        assert_eq!(eq.get(EquipSlot::Weapon), None);
    }

    #[test]
    fn legacy_equipment_without_rarity_reads_common() {
        let json = r#"{"weapon":"bio-blade","armor":null}"#;
        let eq: Result<Equipment, _> = serde_json::from_str(json);
        let eq = eq.ok();
        assert_eq!(
            eq.as_ref().and_then(|e| e.get(EquipSlot::Weapon)),
            Some(("bio-blade", Rarity::Common)),
        );
    }

    #[test]
    fn save_without_equipped_field_deserializes() {
        // Shape of a save written before equipment shipped.
        let json = r#"{
            "wallet": "0xabc",
            "resources": {"plasmaOre": 5},
            "craftingQueues": {"plasmaRefinery": []},
            "stationLevels": {"plasmaRefinery": 1},
            "inventory": [],
            "progress": {
                "level": 1, "xp": 0, "xpToNextLevel": 500,
                "totalItemsCrafted": 0, "totalAPSpent": 0, "totalAPEarned": 0,
                "firstCrafts": [], "dailyLoginStreak": 0, "lastLoginDate": ""
            },
            "lastUpdated": 1, "createdAt": 1
        }"#;
        let save: Result<SaveState, _> = serde_json::from_str(json);
        let save = save.ok();
        assert_eq!(
            save.as_ref().map(|s| s.equipped.clone()),
            Some(Equipment::default()),
        );
        assert_eq!(
            save.as_ref().map(|s| s.resource(ResourceKey::PlasmaOre)),
            Some(5),
        );
        assert_eq!(
            save.as_ref().map(|s| s.resource(ResourceKey::VoidShard)),
            Some(0),
        );
    }

    #[test]
    fn completed_ready_counts_across_stations() {
        let json = r#"{
            "wallet": "0xabc",
            "resources": {},
            "craftingQueues": {},
            "stationLevels": {},
            "inventory": [],
            "progress": {
                "level": 1, "xp": 0, "xpToNextLevel": 500,
                "totalItemsCrafted": 0, "totalAPSpent": 0, "totalAPEarned": 0,
                "firstCrafts": [], "dailyLoginStreak": 0, "lastLoginDate": ""
            },
            "lastUpdated": 0, "createdAt": 0
        }"#;
        let parsed: Option<SaveState> = serde_json::from_str(json).ok();
        assert!(parsed.is_some(), "fixture save must deserialize");
        let Some(mut save) = parsed else { return };
        save.crafting_queues
            .insert(StationId::PlasmaRefinery, vec![job(10), job(2_000)]);
        save.crafting_queues
            .insert(StationId::AssemblyBay, vec![job(50)]);
        assert_eq!(save.completed_jobs_ready(100), 2);
        assert_eq!(save.completed_jobs_ready(1), 0);
    }
}
