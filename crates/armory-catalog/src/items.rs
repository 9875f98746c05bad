//! Weapon and armor definitions.
//!
//! Twelve base items across four tiers. Rarity is never baked into the
//! table; [`with_rarity`] derives the effective stats and sell value for
//! an (item, rarity) pair on demand.

use armory_types::{ItemKind, Rarity};
use rust_decimal::Decimal;

use crate::decimal_to_u64;
use crate::economy::{rarity_name, sell_multiplier, stat_multiplier};

// ---------------------------------------------------------------------------
// ArmoryItem
// ---------------------------------------------------------------------------

/// Base combat stats of a catalog item, before rarity scaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemStats {
    /// Attack contribution, if any.
    pub attack: Option<u64>,
    /// Defense contribution, if any.
    pub defense: Option<u64>,
    /// Flavor effect text, if any. Not scaled by rarity.
    pub special: Option<&'static str>,
}

/// A single catalog item definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArmoryItem {
    /// Stable catalog ID (kebab-case).
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Flavor description.
    pub description: &'static str,
    /// Weapon or armor.
    pub kind: ItemKind,
    /// Tier, 1 through 4.
    pub tier: u8,
    /// Base AP earned when sold at common rarity.
    pub sell_value: u64,
    /// Base stats at common rarity.
    pub stats: ItemStats,
}

// ---------------------------------------------------------------------------
// Item table
// ---------------------------------------------------------------------------

/// All catalog items, in tier order.
pub static ITEMS: [ArmoryItem; 12] = [
    // --- Tier 1 weapons ---
    ArmoryItem {
        id: "plasma-pistol",
        name: "Plasma Pistol",
        description: "Standard issue alien sidearm. Reliable and deadly.",
        kind: ItemKind::Weapon,
        tier: 1,
        sell_value: 100,
        stats: ItemStats {
            attack: Some(15),
            defense: None,
            special: None,
        },
    },
    ArmoryItem {
        id: "bio-blade",
        name: "Bio-Blade",
        description: "Living organic blade that adapts to combat.",
        kind: ItemKind::Weapon,
        tier: 1,
        sell_value: 80,
        stats: ItemStats {
            attack: Some(12),
            defense: None,
            special: Some("Regenerates 1 HP per hit"),
        },
    },
    // --- Tier 1 armor ---
    ArmoryItem {
        id: "plasma-shield",
        name: "Plasma Shield",
        description: "Energy barrier that absorbs incoming damage.",
        kind: ItemKind::Armor,
        tier: 1,
        sell_value: 120,
        stats: ItemStats {
            attack: None,
            defense: Some(10),
            special: None,
        },
    },
    ArmoryItem {
        id: "bio-vest",
        name: "Bio-Vest",
        description: "Living armor that heals minor wounds.",
        kind: ItemKind::Armor,
        tier: 1,
        sell_value: 150,
        stats: ItemStats {
            attack: None,
            defense: Some(8),
            special: Some("Slow health regen"),
        },
    },
    // --- Tier 2 weapons ---
    ArmoryItem {
        id: "void-rifle",
        name: "Void Rifle",
        description: "Fires bolts of compressed void energy.",
        kind: ItemKind::Weapon,
        tier: 2,
        sell_value: 250,
        stats: ItemStats {
            attack: Some(35),
            defense: None,
            special: Some("Pierces armor"),
        },
    },
    ArmoryItem {
        id: "quantum-dagger",
        name: "Quantum Dagger",
        description: "Phases through reality to strike true.",
        kind: ItemKind::Weapon,
        tier: 2,
        sell_value: 200,
        stats: ItemStats {
            attack: Some(25),
            defense: None,
            special: Some("Ignores dodge"),
        },
    },
    // --- Tier 2 armor ---
    ArmoryItem {
        id: "void-helm",
        name: "Void Helm",
        description: "Helmet infused with dimensional energy.",
        kind: ItemKind::Armor,
        tier: 2,
        sell_value: 300,
        stats: ItemStats {
            attack: None,
            defense: Some(20),
            special: Some("Void sight"),
        },
    },
    // --- Tier 3 weapons ---
    ArmoryItem {
        id: "plasma-cannon",
        name: "Plasma Cannon",
        description: "Heavy weapon capable of devastating attacks.",
        kind: ItemKind::Weapon,
        tier: 3,
        sell_value: 500,
        stats: ItemStats {
            attack: Some(65),
            defense: None,
            special: Some("AOE damage"),
        },
    },
    ArmoryItem {
        id: "nebula-blade",
        name: "Nebula Blade",
        description: "Sword forged from stellar remnants.",
        kind: ItemKind::Weapon,
        tier: 3,
        sell_value: 750,
        stats: ItemStats {
            attack: Some(55),
            defense: None,
            special: Some("Critical hit +25%"),
        },
    },
    // --- Tier 3 armor ---
    ArmoryItem {
        id: "quantum-armor",
        name: "Quantum Armor",
        description: "Full body armor existing in multiple states.",
        kind: ItemKind::Armor,
        tier: 3,
        sell_value: 800,
        stats: ItemStats {
            attack: None,
            defense: Some(45),
            special: Some("10% phase shift"),
        },
    },
    // --- Tier 4 weapons ---
    ArmoryItem {
        id: "void-annihilator",
        name: "Void Annihilator",
        description: "The ultimate weapon. Erases matter from existence.",
        kind: ItemKind::Weapon,
        tier: 4,
        sell_value: 1500,
        stats: ItemStats {
            attack: Some(120),
            defense: None,
            special: Some("Instant kill chance"),
        },
    },
    // --- Tier 4 armor ---
    ArmoryItem {
        id: "nebula-exosuit",
        name: "Nebula Exosuit",
        description: "Legendary powered armor from beyond the stars.",
        kind: ItemKind::Armor,
        tier: 4,
        sell_value: 2000,
        stats: ItemStats {
            attack: Some(30),
            defense: Some(80),
            special: Some("Flight capable"),
        },
    },
];

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

/// Look up a catalog item by ID.
pub fn item_for(item_id: &str) -> Option<&'static ArmoryItem> {
    ITEMS.iter().find(|item| item.id == item_id)
}

/// All items of a given tier, in table order.
pub fn items_by_tier(tier: u8) -> impl Iterator<Item = &'static ArmoryItem> {
    ITEMS.iter().filter(move |item| item.tier == tier)
}

/// All items of a given kind, in table order.
pub fn items_by_kind(kind: ItemKind) -> impl Iterator<Item = &'static ArmoryItem> {
    ITEMS.iter().filter(move |item| item.kind == kind)
}

// ---------------------------------------------------------------------------
// Rarity-adjusted view
// ---------------------------------------------------------------------------

/// An item's effective stats and sell value at a given rarity.
///
/// Derived on demand by [`with_rarity`]; never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RarityItemView {
    /// Catalog item ID.
    pub id: &'static str,
    /// Display name, prefixed with the rarity above common.
    pub name: String,
    /// Weapon or armor.
    pub kind: ItemKind,
    /// Tier, 1 through 4.
    pub tier: u8,
    /// The rarity this view was derived for.
    pub rarity: Rarity,
    /// Sell value after the rarity multiplier.
    pub sell_value: u64,
    /// Attack after the rarity multiplier (floored).
    pub attack: Option<u64>,
    /// Defense after the rarity multiplier (floored).
    pub defense: Option<u64>,
    /// Flavor effect text, unscaled.
    pub special: Option<&'static str>,
}

/// Scale a base stat by the rarity multiplier, flooring the result.
fn scaled_stat(base: Option<u64>, multiplier: Decimal) -> Option<u64> {
    let base = base?;
    let scaled = Decimal::from(base).checked_mul(multiplier)?;
    decimal_to_u64(scaled.floor())
}

/// Derive the effective item for an (item, rarity) pair.
///
/// Returns `None` if the item ID is unknown. Stats use the fixed-point
/// rarity multipliers (x1.5 etc.) with floor rounding; sell values use the
/// integral sell multipliers.
pub fn with_rarity(item_id: &str, rarity: Rarity) -> Option<RarityItemView> {
    let base = item_for(item_id)?;
    let multiplier = stat_multiplier(rarity);

    let name = if rarity == Rarity::Common {
        String::from(base.name)
    } else {
        format!("{} {}", rarity_name(rarity), base.name)
    };

    Some(RarityItemView {
        id: base.id,
        name,
        kind: base.kind,
        tier: base.tier,
        rarity,
        sell_value: base.sell_value.saturating_mul(sell_multiplier(rarity)),
        attack: scaled_stat(base.stats.attack, multiplier),
        defense: scaled_stat(base.stats.defense, multiplier),
        special: base.stats.special,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_lookup_hits_and_misses() {
        assert!(item_for("plasma-pistol").is_some());
        assert!(item_for("void-annihilator").is_some());
        assert!(item_for("rubber-chicken").is_none());
    }

    #[test]
    fn tier_partition_covers_table() {
        let total: usize = (1..=4).map(|t| items_by_tier(t).count()).sum();
        assert_eq!(total, ITEMS.len());
        assert_eq!(items_by_tier(1).count(), 4);
    }

    #[test]
    fn kind_partition_covers_table() {
        let weapons = items_by_kind(ItemKind::Weapon).count();
        let armor = items_by_kind(ItemKind::Armor).count();
        assert_eq!(weapons.saturating_add(armor), ITEMS.len());
    }

    #[test]
    fn common_view_is_the_base_item() {
        let view = with_rarity("plasma-pistol", Rarity::Common);
        assert!(view.is_some());
        let Some(view) = view else { return };
        assert_eq!(view.name, "Plasma Pistol");
        assert_eq!(view.sell_value, 100);
        assert_eq!(view.attack, Some(15));
    }

    #[test]
    fn uncommon_view_scales_and_renames() {
        let view = with_rarity("plasma-pistol", Rarity::Uncommon);
        assert!(view.is_some());
        let Some(view) = view else { return };
        assert_eq!(view.name, "Uncommon Plasma Pistol");
        // 15 * 1.5 = 22.5, floored.
        assert_eq!(view.attack, Some(22));
        // 100 * 2.
        assert_eq!(view.sell_value, 200);
    }

    #[test]
    fn epic_view_triples_stats() {
        let view = with_rarity("nebula-exosuit", Rarity::Epic);
        assert!(view.is_some());
        let Some(view) = view else { return };
        assert_eq!(view.defense, Some(240));
        assert_eq!(view.attack, Some(90));
        assert_eq!(view.sell_value, 16000);
    }

    #[test]
    fn unknown_item_has_no_view() {
        assert!(with_rarity("rubber-chicken", Rarity::Epic).is_none());
    }
}
