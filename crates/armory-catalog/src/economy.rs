//! Economy constants: shop prices, rarity tables, speed-up cost curve.
//!
//! Everything here prices something in AP or scales something by rarity.
//! The AP balance itself lives in the external points store; these tables
//! only decide how much moves.

use armory_types::{Rarity, ResourceKey, SpeedUpMode};
use rust_decimal::Decimal;

// ---------------------------------------------------------------------------
// Balances and fixed fees
// ---------------------------------------------------------------------------

/// AP seeded to a wallet on its first balance read.
pub const STARTING_BALANCE: u64 = 5000;

/// AP charged per two-for-one rarity merge.
pub const MERGE_COST: u64 = 50;

/// XP granted per successful merge.
pub const MERGE_XP_REWARD: u64 = 25;

// ---------------------------------------------------------------------------
// Shop prices
// ---------------------------------------------------------------------------

/// AP price per unit of a raw material, `None` for processed materials
/// (which cannot be bought, only crafted).
pub const fn material_cost(resource: ResourceKey) -> Option<u64> {
    match resource {
        ResourceKey::PlasmaOre => Some(50),
        ResourceKey::VoidCrystal => Some(100),
        ResourceKey::BioMetal => Some(75),
        ResourceKey::QuantumDust => Some(150),
        ResourceKey::NebulaEssence => Some(200),
        ResourceKey::RefinedPlasma
        | ResourceKey::VoidShard
        | ResourceKey::BioAlloy
        | ResourceKey::QuantumCore => None,
    }
}

/// Display name of a material.
pub const fn material_name(resource: ResourceKey) -> &'static str {
    match resource {
        ResourceKey::PlasmaOre => "Plasma Ore",
        ResourceKey::VoidCrystal => "Void Crystal",
        ResourceKey::BioMetal => "Bio-Metal",
        ResourceKey::QuantumDust => "Quantum Dust",
        ResourceKey::NebulaEssence => "Nebula Essence",
        ResourceKey::RefinedPlasma => "Refined Plasma",
        ResourceKey::VoidShard => "Void Shard",
        ResourceKey::BioAlloy => "Bio-Alloy",
        ResourceKey::QuantumCore => "Quantum Core",
    }
}

// ---------------------------------------------------------------------------
// Rarity tables
// ---------------------------------------------------------------------------

/// Display name of a rarity tier.
pub const fn rarity_name(rarity: Rarity) -> &'static str {
    match rarity {
        Rarity::Common => "Common",
        Rarity::Uncommon => "Uncommon",
        Rarity::Rare => "Rare",
        Rarity::Epic => "Epic",
    }
}

/// Stat multiplier applied to an item's attack/defense at a rarity.
///
/// Common x1, uncommon x1.5, rare x2, epic x3. Fixed-point so stat
/// derivation never touches floats.
pub fn stat_multiplier(rarity: Rarity) -> Decimal {
    match rarity {
        Rarity::Common => Decimal::ONE,
        Rarity::Uncommon => Decimal::new(15, 1),
        Rarity::Rare => Decimal::from(2),
        Rarity::Epic => Decimal::from(3),
    }
}

/// Sell-value multiplier at a rarity (all integral: x1, x2, x4, x8).
pub const fn sell_multiplier(rarity: Rarity) -> u64 {
    match rarity {
        Rarity::Common => 1,
        Rarity::Uncommon => 2,
        Rarity::Rare => 4,
        Rarity::Epic => 8,
    }
}

/// The rarity produced by merging two items of `rarity`.
///
/// Epic is the ceiling; merging it is rejected upstream.
pub const fn next_rarity(rarity: Rarity) -> Option<Rarity> {
    match rarity {
        Rarity::Common => Some(Rarity::Uncommon),
        Rarity::Uncommon => Some(Rarity::Rare),
        Rarity::Rare => Some(Rarity::Epic),
        Rarity::Epic => None,
    }
}

// ---------------------------------------------------------------------------
// Speed-up cost curve
// ---------------------------------------------------------------------------

/// AP divisor per remaining second for each speed-up mode.
const fn speed_up_divisor(mode: SpeedUpMode) -> u64 {
    match mode {
        SpeedUpMode::Half => 4,
        SpeedUpMode::Instant => 2,
    }
}

/// Minimum AP charge for each speed-up mode.
const fn speed_up_minimum(mode: SpeedUpMode) -> u64 {
    match mode {
        SpeedUpMode::Half => 5,
        SpeedUpMode::Instant => 10,
    }
}

/// AP cost to speed up a job with `remaining_seconds` left on it.
///
/// `ceil(remaining / divisor)` with a per-mode floor. The curve is
/// non-decreasing in remaining time, and instant always costs at least as
/// much as half for the same remainder.
pub const fn speed_up_cost(remaining_seconds: u64, mode: SpeedUpMode) -> u64 {
    let cost = remaining_seconds.div_ceil(speed_up_divisor(mode));
    let minimum = speed_up_minimum(mode);
    if cost > minimum { cost } else { minimum }
}
