//! XP accumulation and the level-up cascade.
//!
//! XP only ever goes up. A single grant can cross several thresholds; each
//! new level auto-unlocks (to level 1) every station whose unlock gate it
//! satisfies. `xp_to_next_level` is refreshed to the absolute threshold of
//! the new level after every grant -- it is a display value derived from
//! the table, never an independent counter.

use armory_catalog::{progression, stations};
use armory_types::{SaveState, StationId};

/// Result of an XP grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUpOutcome {
    /// Whether at least one threshold was crossed.
    pub leveled_up: bool,
    /// Player level after the cascade.
    pub new_level: u32,
}

/// Grant XP and run the level-up cascade.
///
/// Deterministic in the lifetime total: the resulting level, threshold,
/// and unlocked stations depend only on `progress.xp` after the grant,
/// not on how it was split across calls.
pub fn award_xp(save: &mut SaveState, amount: u64) -> LevelUpOutcome {
    save.progress.xp = save.progress.xp.saturating_add(amount);

    let mut leveled_up = false;
    while let Some(threshold) = progression::xp_threshold(save.progress.level) {
        if save.progress.xp < threshold {
            break;
        }
        save.progress.level = save.progress.level.saturating_add(1);
        leveled_up = true;
        unlock_stations_for_level(save);
    }

    save.progress.xp_to_next_level =
        progression::xp_threshold(save.progress.level).unwrap_or(0);

    LevelUpOutcome {
        leveled_up,
        new_level: save.progress.level,
    }
}

/// Unlock (to level 1) every still-locked station whose gate the current
/// player level satisfies.
fn unlock_stations_for_level(save: &mut SaveState) {
    for station in StationId::ALL {
        if save.station_level(station) == 0
            && stations::is_unlocked(station, save.progress.level)
        {
            save.station_levels.insert(station, 1);
        }
    }
}
