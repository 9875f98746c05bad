//! Collection of completed crafting jobs.
//!
//! One pass over every station queue: completed jobs (end time at or
//! before `now`) are drained, their outputs credited, XP totaled, and the
//! level-up cascade run once at the end. Pending jobs stay queued
//! untouched. Collection never fails -- a job whose recipe has vanished
//! from the catalog is logged and skipped so the rest of the batch still
//! lands.

use armory_catalog::{progression, recipes};
use armory_types::{
    CollectReceipt, CollectedKind, CollectedOutput, Rarity, SaveState, StationId,
};

use crate::inventory;
use crate::progression::award_xp;

/// Collect every completed job across all stations.
pub fn collect(save: &mut SaveState, now_ms: u64) -> CollectReceipt {
    let mut collected = Vec::new();
    let mut total_xp: u64 = 0;

    for station in StationId::ALL {
        let Some(queue) = save.crafting_queues.get_mut(&station) else {
            continue;
        };
        let jobs = core::mem::take(queue);
        let mut pending = Vec::with_capacity(jobs.len());

        for job in jobs {
            if !job.is_complete(now_ms) {
                pending.push(job);
                continue;
            }

            let Some(recipe) = recipes::recipe_for(&job.recipe_id) else {
                // Catalog drift: drop the job rather than abort the batch.
                tracing::warn!(recipe_id = %job.recipe_id, "skipping job with unknown recipe");
                continue;
            };

            let mut xp_gained = recipe.xp_reward;
            let output_id = recipe.output.output_id();
            let first_craft = !save.progress.first_crafts.contains(output_id);
            if first_craft {
                xp_gained = xp_gained.saturating_add(progression::FIRST_CRAFT_BONUS_XP);
                save.progress.first_crafts.insert(String::from(output_id));
            }

            let output = match recipe.output {
                armory_catalog::RecipeOutput::Resource { key, quantity } => {
                    let entry = save.resources.entry(key).or_insert(0);
                    *entry = entry.saturating_add(quantity);
                    CollectedKind::Resource { key, quantity }
                }
                armory_catalog::RecipeOutput::Item { item_id, quantity } => {
                    // Crafted items always land at common rarity.
                    inventory::add_item(&mut save.inventory, item_id, Rarity::Common, quantity);
                    CollectedKind::Item {
                        item_id: String::from(item_id),
                        quantity,
                    }
                }
            };

            collected.push(CollectedOutput {
                recipe_id: String::from(recipe.id),
                recipe_name: String::from(recipe.name),
                output,
                xp_gained,
                first_craft,
            });

            total_xp = total_xp.saturating_add(xp_gained);
            save.progress.total_items_crafted = save
                .progress
                .total_items_crafted
                .saturating_add(recipe.output.quantity());
        }

        save.crafting_queues.insert(station, pending);
    }

    let outcome = award_xp(save, total_xp);
    save.last_updated = now_ms;

    CollectReceipt {
        collected,
        total_xp,
        leveled_up: outcome.leveled_up,
        new_level: outcome.new_level,
        new_xp: save.progress.xp,
        xp_to_next_level: save.progress.xp_to_next_level,
        resources: save.resources.clone(),
        inventory: save.inventory.clone(),
        station_levels: save.station_levels.clone(),
    }
}
