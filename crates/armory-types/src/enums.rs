//! Enumeration types for the Armory crafting backend.
//!
//! All variants serialize with the camelCase / lowercase spellings used by
//! the persisted save documents and the portal frontend, so documents
//! written by earlier revisions of the service deserialize unchanged.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

// ---------------------------------------------------------------------------
// Resources
// ---------------------------------------------------------------------------

/// A stackable material tracked in a save document's resource map.
///
/// Raw materials are purchased from the shop with AP; processed materials
/// only ever come out of crafting stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub enum ResourceKey {
    // --- Raw materials (shop-purchasable) ---
    /// Raw plasma ore, the entry-level material.
    PlasmaOre,
    /// Void crystal, input to dimensional gear.
    VoidCrystal,
    /// Bio-metal, input to organic gear.
    BioMetal,
    /// Quantum dust, input to late-game cores.
    QuantumDust,
    /// Nebula essence, the rarest raw material.
    NebulaEssence,

    // --- Processed materials (crafted) ---
    /// Refined plasma, processed at the plasma refinery.
    RefinedPlasma,
    /// Void shard, processed at the void forge.
    VoidShard,
    /// Bio-alloy, processed at the bio-lab.
    BioAlloy,
    /// Quantum core, processed at the quantum chamber.
    QuantumCore,
}

impl ResourceKey {
    /// All resource keys, raw first, in display order.
    pub const ALL: [Self; 9] = [
        Self::PlasmaOre,
        Self::VoidCrystal,
        Self::BioMetal,
        Self::QuantumDust,
        Self::NebulaEssence,
        Self::RefinedPlasma,
        Self::VoidShard,
        Self::BioAlloy,
        Self::QuantumCore,
    ];

    /// The camelCase key used in persisted documents and first-craft sets.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PlasmaOre => "plasmaOre",
            Self::VoidCrystal => "voidCrystal",
            Self::BioMetal => "bioMetal",
            Self::QuantumDust => "quantumDust",
            Self::NebulaEssence => "nebulaEssence",
            Self::RefinedPlasma => "refinedPlasma",
            Self::VoidShard => "voidShard",
            Self::BioAlloy => "bioAlloy",
            Self::QuantumCore => "quantumCore",
        }
    }

    /// Whether this is a raw (shop-purchasable) material.
    pub const fn is_raw(self) -> bool {
        matches!(
            self,
            Self::PlasmaOre
                | Self::VoidCrystal
                | Self::BioMetal
                | Self::QuantumDust
                | Self::NebulaEssence
        )
    }
}

// ---------------------------------------------------------------------------
// Stations
// ---------------------------------------------------------------------------

/// A crafting station owned (or not yet unlocked) by a wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "bindings/")]
pub enum StationId {
    /// Processes plasma ore into refined plasma. Unlocked from the start.
    PlasmaRefinery,
    /// Compresses void crystals into shards. Unlocks at player level 2.
    VoidForge,
    /// Synthesizes bio-alloy. Unlocks at player level 3.
    BioLab,
    /// Stabilizes quantum cores. Unlocks at player level 5.
    QuantumChamber,
    /// Final assembly of weapons and armor. Unlocked from the start.
    AssemblyBay,
}

impl StationId {
    /// All stations in canonical (display and processing) order.
    pub const ALL: [Self; 5] = [
        Self::PlasmaRefinery,
        Self::VoidForge,
        Self::BioLab,
        Self::QuantumChamber,
        Self::AssemblyBay,
    ];
}

// ---------------------------------------------------------------------------
// Rarity
// ---------------------------------------------------------------------------

/// Rarity tier of an inventory item.
///
/// Crafted items always enter inventory at [`Rarity::Common`]; higher
/// tiers exist only through two-for-one merging. Rarity multiplies an
/// item's stats and sell value; the multiplier tables live in the catalog.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum Rarity {
    /// Baseline rarity; the default for slots saved before rarity existed.
    #[default]
    Common,
    /// First merge tier.
    Uncommon,
    /// Second merge tier.
    Rare,
    /// Final tier; has no upgrade path.
    Epic,
}

// ---------------------------------------------------------------------------
// Items and recipes
// ---------------------------------------------------------------------------

/// The equipment category of a catalog item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum ItemKind {
    /// Occupies the weapon slot.
    Weapon,
    /// Occupies the armor slot.
    Armor,
}

/// The category of a recipe's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum RecipeCategory {
    /// Produces a processed material.
    Material,
    /// Produces a weapon item.
    Weapon,
    /// Produces an armor item.
    Armor,
}

// ---------------------------------------------------------------------------
// Equipment slots
// ---------------------------------------------------------------------------

/// One of the two independent equipment slots on a save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum EquipSlot {
    /// The weapon slot; accepts [`ItemKind::Weapon`] items only.
    Weapon,
    /// The armor slot; accepts [`ItemKind::Armor`] items only.
    Armor,
}

impl EquipSlot {
    /// The item kind this slot accepts.
    pub const fn accepts(self) -> ItemKind {
        match self {
            Self::Weapon => ItemKind::Weapon,
            Self::Armor => ItemKind::Armor,
        }
    }
}

// ---------------------------------------------------------------------------
// Speed-up
// ---------------------------------------------------------------------------

/// Paid time-reduction modes for a queued crafting job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "bindings/")]
pub enum SpeedUpMode {
    /// Halve the remaining craft time.
    Half,
    /// Finish the job immediately.
    Instant,
}
