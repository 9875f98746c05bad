//! Craft starts and paid speed-ups.
//!
//! A station processes one job at a time, back to back: a new job starts
//! at `max(now, end of the last queued job)`. Nothing here runs on a
//! timer -- completion is evaluated lazily against the caller's clock, and
//! jobs sit inert until collected.

use armory_catalog::{economy, recipes, stations};
use armory_types::{
    CraftReceipt, CraftingJob, JobId, SaveState, SpeedUpMode, SpeedUpReceipt, StationId,
};

use crate::error::GameError;

/// Start a crafting job at a station.
///
/// Preconditions are checked in a fixed order, each with its own
/// rejection; the input debit is all-or-nothing and happens only after
/// every check has passed.
pub fn start_craft(
    save: &mut SaveState,
    recipe_id: &str,
    station: StationId,
    now_ms: u64,
) -> Result<CraftReceipt, GameError> {
    let recipe = recipes::recipe_for(recipe_id)
        .ok_or_else(|| GameError::UnknownRecipe(String::from(recipe_id)))?;

    if recipe.station != station {
        return Err(GameError::WrongStation {
            recipe_id: String::from(recipe_id),
            station,
        });
    }

    let station_level = save.station_level(station);
    if station_level == 0 {
        return Err(GameError::StationLocked(station));
    }

    if save.progress.level < recipe.required_level {
        return Err(GameError::LevelTooLow {
            required: recipe.required_level,
        });
    }

    if station_level < recipe.required_station_level {
        return Err(GameError::StationLevelTooLow {
            required: recipe.required_station_level,
        });
    }

    let capacity = stations::queue_capacity(station, station_level);
    let queue_len = u64::try_from(save.queue(station).len()).unwrap_or(u64::MAX);
    if queue_len >= capacity {
        return Err(GameError::QueueFull { capacity });
    }

    if !recipes::can_craft(recipe, &save.resources) {
        return Err(GameError::InsufficientResources);
    }

    // All checks passed; the debit below cannot underflow.
    for input in recipe.inputs {
        let entry = save.resources.entry(input.resource).or_insert(0);
        *entry = entry.saturating_sub(input.quantity);
    }

    let craft_seconds =
        stations::adjusted_craft_seconds(station, station_level, recipe.craft_time_seconds);
    let start_time = save
        .queue(station)
        .last()
        .map_or(now_ms, |last| last.end_time.max(now_ms));
    let end_time = start_time.saturating_add(craft_seconds.saturating_mul(1000));

    let job = CraftingJob {
        id: JobId::new(),
        recipe_id: String::from(recipe_id),
        station_id: station,
        start_time,
        end_time,
        speed_up_applied: 0,
    };

    save.crafting_queues
        .entry(station)
        .or_default()
        .push(job.clone());
    save.last_updated = now_ms;

    Ok(CraftReceipt {
        job,
        resources: save.resources.clone(),
        craft_time_seconds: craft_seconds,
    })
}

/// Apply a paid speed-up to a queued job.
///
/// The caller supplies the wallet's current AP balance; the returned
/// receipt carries the charge for the caller to settle with the points
/// service. Later jobs in the queue keep their original schedule -- a
/// speed-up opens a gap, it does not re-plan the queue.
pub fn apply_speed_up(
    save: &mut SaveState,
    job_id: JobId,
    mode: SpeedUpMode,
    now_ms: u64,
    balance: u64,
) -> Result<SpeedUpReceipt, GameError> {
    let job = save
        .crafting_queues
        .values_mut()
        .flat_map(|queue| queue.iter_mut())
        .find(|job| job.id == job_id)
        .ok_or(GameError::JobNotFound(job_id))?;

    let remaining_ms = job.end_time.saturating_sub(now_ms);
    let remaining_seconds = remaining_ms.div_ceil(1000);
    if remaining_seconds == 0 {
        return Err(GameError::JobAlreadyComplete(job_id));
    }

    let cost = economy::speed_up_cost(remaining_seconds, mode);
    if balance < cost {
        return Err(GameError::InsufficientAp {
            needed: cost,
            available: balance,
        });
    }

    match mode {
        SpeedUpMode::Instant => job.end_time = now_ms,
        SpeedUpMode::Half => {
            job.end_time = now_ms.saturating_add(remaining_ms / 2);
        }
    }
    job.speed_up_applied = job.speed_up_applied.saturating_add(cost);
    let job = job.clone();

    save.progress.total_ap_spent = save.progress.total_ap_spent.saturating_add(cost);
    save.last_updated = now_ms;

    Ok(SpeedUpReceipt {
        job,
        ap_spent: cost,
        new_balance: balance.saturating_sub(cost),
    })
}
