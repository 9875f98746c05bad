//! Static catalog data for the Armory crafting backend.
//!
//! Items, recipes, stations, rarity tables, progression thresholds, and
//! shop prices are immutable data compiled into the binary. This crate
//! exposes them as read-only tables with pure lookup functions; no
//! mutation paths exist.
//!
//! # Modules
//!
//! - [`items`] -- Weapon and armor definitions, rarity-adjusted views
//! - [`recipes`] -- Recipe table (inputs, outputs, times, gates, rewards)
//! - [`stations`] -- Station definitions, queue capacity, speed bonuses
//! - [`progression`] -- XP thresholds, level titles, craft bonuses
//! - [`economy`] -- Shop prices, rarity multipliers, speed-up cost curve

pub mod economy;
pub mod items;
pub mod progression;
pub mod recipes;
pub mod stations;

// Re-export primary types at crate root for convenience.
pub use economy::{MERGE_COST, MERGE_XP_REWARD, STARTING_BALANCE};
pub use items::{ArmoryItem, ItemStats, RarityItemView};
pub use recipes::{Recipe, RecipeInput, RecipeOutput};
pub use stations::StationDefinition;

use rust_decimal::Decimal;

/// Convert a non-negative [`Decimal`] to `u64`, truncating any fraction.
///
/// Returns `None` for negative values or values beyond `u64::MAX`. Used by
/// the fractional-multiplier paths (stat scaling, craft-time scaling) after
/// the appropriate floor/ceil has already been applied.
pub(crate) fn decimal_to_u64(value: Decimal) -> Option<u64> {
    let truncated = value.trunc();
    if truncated < Decimal::ZERO {
        return None;
    }
    truncated.normalize().to_string().parse::<u64>().ok()
}
