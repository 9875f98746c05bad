//! Recipe definitions: inputs, outputs, craft times, gates, and rewards.
//!
//! Four material recipes (one per processing station) and twelve item
//! recipes (all at the assembly bay). Recipes are gated twice: by player
//! level and by the level of their station.

use std::collections::BTreeMap;

use armory_types::{RecipeCategory, ResourceKey, StationId};

// ---------------------------------------------------------------------------
// Recipe
// ---------------------------------------------------------------------------

/// One required input of a recipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecipeInput {
    /// The material consumed.
    pub resource: ResourceKey,
    /// Units consumed per craft.
    pub quantity: u64,
}

/// What a recipe produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecipeOutput {
    /// A processed material credited to the resource map.
    Resource {
        /// The material produced.
        key: ResourceKey,
        /// Units produced per craft.
        quantity: u64,
    },
    /// An item credited to inventory (at common rarity).
    Item {
        /// Catalog item ID produced.
        item_id: &'static str,
        /// Units produced per craft.
        quantity: u64,
    },
}

impl RecipeOutput {
    /// The output identifier used by the first-craft bonus bookkeeping
    /// (resource key string or item ID).
    pub const fn output_id(&self) -> &'static str {
        match self {
            Self::Resource { key, .. } => key.as_str(),
            Self::Item { item_id, .. } => item_id,
        }
    }

    /// Units produced per craft.
    pub const fn quantity(&self) -> u64 {
        match self {
            Self::Resource { quantity, .. } | Self::Item { quantity, .. } => *quantity,
        }
    }
}

/// A single recipe definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recipe {
    /// Stable recipe ID (kebab-case).
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// Flavor description.
    pub description: &'static str,
    /// The only station that can run this recipe.
    pub station: StationId,
    /// Materials consumed, all-or-nothing.
    pub inputs: &'static [RecipeInput],
    /// What the recipe produces.
    pub output: RecipeOutput,
    /// Base craft duration before the station speed bonus.
    pub craft_time_seconds: u64,
    /// Minimum player level.
    pub required_level: u32,
    /// Minimum station level.
    pub required_station_level: u32,
    /// XP granted at collection.
    pub xp_reward: u64,
    /// Output category.
    pub category: RecipeCategory,
}

// ---------------------------------------------------------------------------
// Recipe table
// ---------------------------------------------------------------------------

/// All recipes: materials first, then items by tier.
pub static RECIPES: [Recipe; 16] = [
    // --- Material recipes ---
    Recipe {
        id: "refined-plasma",
        name: "Refined Plasma",
        description: "Process raw plasma ore into refined form",
        station: StationId::PlasmaRefinery,
        inputs: &[RecipeInput {
            resource: ResourceKey::PlasmaOre,
            quantity: 3,
        }],
        output: RecipeOutput::Resource {
            key: ResourceKey::RefinedPlasma,
            quantity: 1,
        },
        craft_time_seconds: 30,
        required_level: 1,
        required_station_level: 1,
        xp_reward: 10,
        category: RecipeCategory::Material,
    },
    Recipe {
        id: "void-shard",
        name: "Void Shard",
        description: "Compress void crystals into concentrated shards",
        station: StationId::VoidForge,
        inputs: &[RecipeInput {
            resource: ResourceKey::VoidCrystal,
            quantity: 2,
        }],
        output: RecipeOutput::Resource {
            key: ResourceKey::VoidShard,
            quantity: 1,
        },
        craft_time_seconds: 60,
        required_level: 2,
        required_station_level: 1,
        xp_reward: 20,
        category: RecipeCategory::Material,
    },
    Recipe {
        id: "bio-alloy",
        name: "Bio-Alloy",
        description: "Synthesize organic metal from bio compounds",
        station: StationId::BioLab,
        inputs: &[
            RecipeInput {
                resource: ResourceKey::BioMetal,
                quantity: 2,
            },
            RecipeInput {
                resource: ResourceKey::PlasmaOre,
                quantity: 1,
            },
        ],
        output: RecipeOutput::Resource {
            key: ResourceKey::BioAlloy,
            quantity: 1,
        },
        craft_time_seconds: 45,
        required_level: 3,
        required_station_level: 1,
        xp_reward: 25,
        category: RecipeCategory::Material,
    },
    Recipe {
        id: "quantum-core",
        name: "Quantum Core",
        description: "Stabilize quantum particles into a power core",
        station: StationId::QuantumChamber,
        inputs: &[
            RecipeInput {
                resource: ResourceKey::QuantumDust,
                quantity: 3,
            },
            RecipeInput {
                resource: ResourceKey::VoidCrystal,
                quantity: 1,
            },
        ],
        output: RecipeOutput::Resource {
            key: ResourceKey::QuantumCore,
            quantity: 1,
        },
        craft_time_seconds: 120,
        required_level: 5,
        required_station_level: 1,
        xp_reward: 50,
        category: RecipeCategory::Material,
    },
    // --- Tier 1 weapon recipes ---
    Recipe {
        id: "craft-plasma-pistol",
        name: "Plasma Pistol",
        description: "Assemble a standard plasma sidearm",
        station: StationId::AssemblyBay,
        inputs: &[RecipeInput {
            resource: ResourceKey::RefinedPlasma,
            quantity: 2,
        }],
        output: RecipeOutput::Item {
            item_id: "plasma-pistol",
            quantity: 1,
        },
        craft_time_seconds: 60,
        required_level: 1,
        required_station_level: 1,
        xp_reward: 15,
        category: RecipeCategory::Weapon,
    },
    Recipe {
        id: "craft-bio-blade",
        name: "Bio-Blade",
        description: "Grow a living blade from organic matter",
        station: StationId::AssemblyBay,
        inputs: &[RecipeInput {
            resource: ResourceKey::BioAlloy,
            quantity: 1,
        }],
        output: RecipeOutput::Item {
            item_id: "bio-blade",
            quantity: 1,
        },
        craft_time_seconds: 45,
        required_level: 3,
        required_station_level: 1,
        xp_reward: 12,
        category: RecipeCategory::Weapon,
    },
    // --- Tier 1 armor recipes ---
    Recipe {
        id: "craft-plasma-shield",
        name: "Plasma Shield",
        description: "Construct an energy barrier device",
        station: StationId::AssemblyBay,
        inputs: &[RecipeInput {
            resource: ResourceKey::RefinedPlasma,
            quantity: 3,
        }],
        output: RecipeOutput::Item {
            item_id: "plasma-shield",
            quantity: 1,
        },
        craft_time_seconds: 60,
        required_level: 1,
        required_station_level: 1,
        xp_reward: 18,
        category: RecipeCategory::Armor,
    },
    Recipe {
        id: "craft-bio-vest",
        name: "Bio-Vest",
        description: "Cultivate a living armor vest",
        station: StationId::AssemblyBay,
        inputs: &[RecipeInput {
            resource: ResourceKey::BioAlloy,
            quantity: 2,
        }],
        output: RecipeOutput::Item {
            item_id: "bio-vest",
            quantity: 1,
        },
        craft_time_seconds: 75,
        required_level: 3,
        required_station_level: 1,
        xp_reward: 22,
        category: RecipeCategory::Armor,
    },
    // --- Tier 2 weapon recipes ---
    Recipe {
        id: "craft-void-rifle",
        name: "Void Rifle",
        description: "Engineer a dimensional energy weapon",
        station: StationId::AssemblyBay,
        inputs: &[
            RecipeInput {
                resource: ResourceKey::VoidShard,
                quantity: 2,
            },
            RecipeInput {
                resource: ResourceKey::RefinedPlasma,
                quantity: 1,
            },
        ],
        output: RecipeOutput::Item {
            item_id: "void-rifle",
            quantity: 1,
        },
        craft_time_seconds: 120,
        required_level: 4,
        required_station_level: 2,
        xp_reward: 35,
        category: RecipeCategory::Weapon,
    },
    Recipe {
        id: "craft-quantum-dagger",
        name: "Quantum Dagger",
        description: "Forge a phase-shifting blade",
        station: StationId::AssemblyBay,
        inputs: &[RecipeInput {
            resource: ResourceKey::QuantumCore,
            quantity: 1,
        }],
        output: RecipeOutput::Item {
            item_id: "quantum-dagger",
            quantity: 1,
        },
        craft_time_seconds: 90,
        required_level: 5,
        required_station_level: 2,
        xp_reward: 30,
        category: RecipeCategory::Weapon,
    },
    // --- Tier 2 armor recipes ---
    Recipe {
        id: "craft-void-helm",
        name: "Void Helm",
        description: "Craft a helmet infused with void energy",
        station: StationId::AssemblyBay,
        inputs: &[
            RecipeInput {
                resource: ResourceKey::VoidShard,
                quantity: 2,
            },
            RecipeInput {
                resource: ResourceKey::BioAlloy,
                quantity: 1,
            },
        ],
        output: RecipeOutput::Item {
            item_id: "void-helm",
            quantity: 1,
        },
        craft_time_seconds: 120,
        required_level: 4,
        required_station_level: 2,
        xp_reward: 40,
        category: RecipeCategory::Armor,
    },
    // --- Tier 3 weapon recipes ---
    Recipe {
        id: "craft-plasma-cannon",
        name: "Plasma Cannon",
        description: "Build a devastating heavy weapon",
        station: StationId::AssemblyBay,
        inputs: &[
            RecipeInput {
                resource: ResourceKey::RefinedPlasma,
                quantity: 5,
            },
            RecipeInput {
                resource: ResourceKey::VoidShard,
                quantity: 2,
            },
        ],
        output: RecipeOutput::Item {
            item_id: "plasma-cannon",
            quantity: 1,
        },
        craft_time_seconds: 180,
        required_level: 6,
        required_station_level: 3,
        xp_reward: 60,
        category: RecipeCategory::Weapon,
    },
    Recipe {
        id: "craft-nebula-blade",
        name: "Nebula Blade",
        description: "Forge a legendary stellar sword",
        station: StationId::AssemblyBay,
        inputs: &[
            RecipeInput {
                resource: ResourceKey::QuantumCore,
                quantity: 1,
            },
            RecipeInput {
                resource: ResourceKey::NebulaEssence,
                quantity: 1,
            },
        ],
        output: RecipeOutput::Item {
            item_id: "nebula-blade",
            quantity: 1,
        },
        craft_time_seconds: 240,
        required_level: 6,
        required_station_level: 3,
        xp_reward: 85,
        category: RecipeCategory::Weapon,
    },
    // --- Tier 3 armor recipes ---
    Recipe {
        id: "craft-quantum-armor",
        name: "Quantum Armor",
        description: "Construct phase-shifting full body armor",
        station: StationId::AssemblyBay,
        inputs: &[
            RecipeInput {
                resource: ResourceKey::QuantumCore,
                quantity: 2,
            },
            RecipeInput {
                resource: ResourceKey::BioAlloy,
                quantity: 3,
            },
        ],
        output: RecipeOutput::Item {
            item_id: "quantum-armor",
            quantity: 1,
        },
        craft_time_seconds: 240,
        required_level: 6,
        required_station_level: 3,
        xp_reward: 95,
        category: RecipeCategory::Armor,
    },
    // --- Tier 4 recipes ---
    Recipe {
        id: "craft-void-annihilator",
        name: "Void Annihilator",
        description: "Create the ultimate weapon of destruction",
        station: StationId::AssemblyBay,
        inputs: &[
            RecipeInput {
                resource: ResourceKey::VoidShard,
                quantity: 3,
            },
            RecipeInput {
                resource: ResourceKey::QuantumCore,
                quantity: 2,
            },
            RecipeInput {
                resource: ResourceKey::NebulaEssence,
                quantity: 1,
            },
        ],
        output: RecipeOutput::Item {
            item_id: "void-annihilator",
            quantity: 1,
        },
        craft_time_seconds: 360,
        required_level: 7,
        required_station_level: 4,
        xp_reward: 180,
        category: RecipeCategory::Weapon,
    },
    Recipe {
        id: "craft-nebula-exosuit",
        name: "Nebula Exosuit",
        description: "Build legendary powered armor",
        station: StationId::AssemblyBay,
        inputs: &[
            RecipeInput {
                resource: ResourceKey::QuantumCore,
                quantity: 2,
            },
            RecipeInput {
                resource: ResourceKey::NebulaEssence,
                quantity: 2,
            },
            RecipeInput {
                resource: ResourceKey::BioAlloy,
                quantity: 5,
            },
        ],
        output: RecipeOutput::Item {
            item_id: "nebula-exosuit",
            quantity: 1,
        },
        craft_time_seconds: 480,
        required_level: 7,
        required_station_level: 4,
        xp_reward: 240,
        category: RecipeCategory::Armor,
    },
];

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

/// Look up a recipe by ID.
pub fn recipe_for(recipe_id: &str) -> Option<&'static Recipe> {
    RECIPES.iter().find(|recipe| recipe.id == recipe_id)
}

/// All recipes runnable at a station, in table order.
pub fn recipes_for_station(station: StationId) -> impl Iterator<Item = &'static Recipe> {
    RECIPES.iter().filter(move |recipe| recipe.station == station)
}

/// Recipes at a station that the given player/station levels can run.
pub fn available_recipes(
    station: StationId,
    player_level: u32,
    station_level: u32,
) -> impl Iterator<Item = &'static Recipe> {
    recipes_for_station(station).filter(move |recipe| {
        recipe.required_level <= player_level && recipe.required_station_level <= station_level
    })
}

/// Whether a resource map covers every input of a recipe.
///
/// All-or-nothing: this is the check half of the atomic debit performed
/// by the crafting engine.
pub fn can_craft(recipe: &Recipe, resources: &BTreeMap<ResourceKey, u64>) -> bool {
    recipe.inputs.iter().all(|input| {
        resources.get(&input.resource).copied().unwrap_or(0) >= input.quantity
    })
}
