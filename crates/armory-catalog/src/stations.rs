//! Station definitions: unlock gates, queue capacity, speed bonuses.
//!
//! Five stations, all maxing at level 5. Queue capacity and craft speed
//! both grow with station level; the level-indexed upgrade costs are paid
//! in AP (the 0-to-1 unlock is free and gated by player level instead).

use armory_types::StationId;
use rust_decimal::Decimal;

use crate::decimal_to_u64;

// ---------------------------------------------------------------------------
// StationDefinition
// ---------------------------------------------------------------------------

/// A single station definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StationDefinition {
    /// The station this defines.
    pub id: StationId,
    /// Display name.
    pub name: &'static str,
    /// Flavor description.
    pub description: &'static str,
    /// Player level at which the station auto-unlocks.
    pub unlock_level: u32,
    /// Maximum station level.
    pub max_level: u32,
    /// Queue capacity at level 0 (capacity is base + level).
    pub base_queue_size: u64,
    /// AP cost to reach each next level, indexed by current level.
    /// Index 0 is the free unlock and is never charged.
    pub upgrade_costs: [u64; 5],
    /// Percent craft-time reduction per level above 1.
    pub speed_bonus_per_level: u32,
}

// ---------------------------------------------------------------------------
// Station table
// ---------------------------------------------------------------------------

/// The plasma refinery definition.
const PLASMA_REFINERY: StationDefinition = StationDefinition {
    id: StationId::PlasmaRefinery,
    name: "Plasma Refinery",
    description: "Processes raw plasma ore into refined plasma for weapon cores",
    unlock_level: 1,
    max_level: 5,
    base_queue_size: 1,
    upgrade_costs: [0, 500, 1000, 2000, 4000],
    speed_bonus_per_level: 10,
};

/// The void forge definition.
const VOID_FORGE: StationDefinition = StationDefinition {
    id: StationId::VoidForge,
    name: "Void Forge",
    description: "Harnesses void energy to create dimensional weapons",
    unlock_level: 2,
    max_level: 5,
    base_queue_size: 1,
    upgrade_costs: [0, 750, 1500, 3000, 6000],
    speed_bonus_per_level: 10,
};

/// The bio-lab definition.
const BIO_LAB: StationDefinition = StationDefinition {
    id: StationId::BioLab,
    name: "Bio-Lab",
    description: "Synthesizes organic alien compounds for living armor",
    unlock_level: 3,
    max_level: 5,
    base_queue_size: 1,
    upgrade_costs: [0, 1000, 2000, 4000, 8000],
    speed_bonus_per_level: 10,
};

/// The quantum chamber definition.
const QUANTUM_CHAMBER: StationDefinition = StationDefinition {
    id: StationId::QuantumChamber,
    name: "Quantum Chamber",
    description: "Manipulates quantum particles for legendary gear",
    unlock_level: 5,
    max_level: 5,
    base_queue_size: 1,
    upgrade_costs: [0, 2000, 4000, 8000, 16000],
    speed_bonus_per_level: 10,
};

/// The assembly bay definition.
const ASSEMBLY_BAY: StationDefinition = StationDefinition {
    id: StationId::AssemblyBay,
    name: "Assembly Bay",
    description: "Final assembly station for weapons and armor",
    unlock_level: 1,
    max_level: 5,
    base_queue_size: 1,
    upgrade_costs: [0, 300, 600, 1200, 2400],
    speed_bonus_per_level: 10,
};

/// Look up a station definition.
pub const fn station_for(station: StationId) -> &'static StationDefinition {
    match station {
        StationId::PlasmaRefinery => &PLASMA_REFINERY,
        StationId::VoidForge => &VOID_FORGE,
        StationId::BioLab => &BIO_LAB,
        StationId::QuantumChamber => &QUANTUM_CHAMBER,
        StationId::AssemblyBay => &ASSEMBLY_BAY,
    }
}

// ---------------------------------------------------------------------------
// Derived values
// ---------------------------------------------------------------------------

/// Maximum queue length for a station at a given level.
pub fn queue_capacity(station: StationId, level: u32) -> u64 {
    station_for(station)
        .base_queue_size
        .saturating_add(u64::from(level))
}

/// Craft-time multiplier for a station at a given level.
///
/// `1 - bonus_pct * (level - 1) / 100`; level 1 runs at full duration.
/// The data tables keep the cumulative bonus well under 100%, so the
/// multiplier stays positive for every legal level.
pub fn speed_multiplier(station: StationId, level: u32) -> Decimal {
    let definition = station_for(station);
    let steps = level.saturating_sub(1);
    let reduction_pct = definition.speed_bonus_per_level.saturating_mul(steps);
    let reduction = Decimal::from(reduction_pct)
        .checked_div(Decimal::ONE_HUNDRED)
        .unwrap_or(Decimal::ZERO);
    Decimal::ONE.saturating_sub(reduction)
}

/// Station-adjusted craft duration in whole seconds (rounded up).
///
/// Falls back to the unadjusted base on arithmetic failure, which cannot
/// happen for catalog-sized inputs.
pub fn adjusted_craft_seconds(station: StationId, level: u32, base_seconds: u64) -> u64 {
    Decimal::from(base_seconds)
        .checked_mul(speed_multiplier(station, level))
        .map(|d| d.ceil())
        .and_then(decimal_to_u64)
        .unwrap_or(base_seconds)
}

/// AP cost to advance a station from `current_level` to the next.
///
/// `None` when the station is at (or beyond) max level. Index 0 -- the
/// free unlock -- is handled by the upgrade path before this is consulted.
pub fn upgrade_cost(station: StationId, current_level: u32) -> Option<u64> {
    let definition = station_for(station);
    if current_level >= definition.max_level {
        return None;
    }
    let index = usize::try_from(current_level).ok()?;
    definition.upgrade_costs.get(index).copied()
}

/// Whether a player level satisfies a station's unlock gate.
pub const fn is_unlocked(station: StationId, player_level: u32) -> bool {
    player_level >= station_for(station).unlock_level
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_grows_with_level() {
        assert_eq!(queue_capacity(StationId::PlasmaRefinery, 1), 2);
        assert_eq!(queue_capacity(StationId::PlasmaRefinery, 5), 6);
        assert_eq!(queue_capacity(StationId::AssemblyBay, 0), 1);
    }

    #[test]
    fn level_one_runs_at_full_speed() {
        assert_eq!(speed_multiplier(StationId::VoidForge, 1), Decimal::ONE);
        assert_eq!(adjusted_craft_seconds(StationId::VoidForge, 1, 60), 60);
    }

    #[test]
    fn each_level_shaves_ten_percent() {
        // Level 3: 1 - 10*2/100 = 0.8.
        assert_eq!(
            speed_multiplier(StationId::PlasmaRefinery, 3),
            Decimal::new(8, 1),
        );
        assert_eq!(adjusted_craft_seconds(StationId::PlasmaRefinery, 3, 30), 24);
    }

    #[test]
    fn adjusted_time_rounds_up() {
        // 45 * 0.9 = 40.5 -> 41.
        assert_eq!(adjusted_craft_seconds(StationId::BioLab, 2, 45), 41);
    }

    #[test]
    fn max_level_keeps_multiplier_positive() {
        for station in StationId::ALL {
            let m = speed_multiplier(station, station_for(station).max_level);
            assert!(m > Decimal::ZERO, "{station:?} multiplier hit zero");
        }
    }

    #[test]
    fn upgrade_costs_indexed_by_current_level() {
        assert_eq!(upgrade_cost(StationId::PlasmaRefinery, 1), Some(500));
        assert_eq!(upgrade_cost(StationId::PlasmaRefinery, 4), Some(4000));
        assert_eq!(upgrade_cost(StationId::PlasmaRefinery, 5), None);
        assert_eq!(upgrade_cost(StationId::QuantumChamber, 1), Some(2000));
    }

    #[test]
    fn unlock_gates_match_definitions() {
        assert!(is_unlocked(StationId::PlasmaRefinery, 1));
        assert!(!is_unlocked(StationId::VoidForge, 1));
        assert!(is_unlocked(StationId::VoidForge, 2));
        assert!(!is_unlocked(StationId::QuantumChamber, 4));
        assert!(is_unlocked(StationId::QuantumChamber, 5));
    }
}
