//! Equip, unequip, and two-for-one rarity merging.
//!
//! Each slot holds at most one (item, rarity) pair. Equipping moves one
//! unit out of inventory and returns any previous occupant to it first, so
//! no unit is ever lost to a swap. Merging consumes two units of a rarity
//! and produces one of the next, shrinking the collection by one each time.

use armory_catalog::{economy, items};
use armory_types::{EquipReceipt, EquipSlot, MergeReceipt, Rarity, SaveState};

use crate::error::GameError;
use crate::inventory;
use crate::progression::award_xp;

/// Equip an (item, rarity) pair into a slot.
///
/// The item must exist, match the slot's kind, and be held at the exact
/// rarity. A previous occupant is returned to inventory before the new
/// unit is withdrawn.
pub fn equip(
    save: &mut SaveState,
    slot: EquipSlot,
    item_id: &str,
    rarity: Rarity,
    now_ms: u64,
) -> Result<EquipReceipt, GameError> {
    let item = items::item_for(item_id)
        .ok_or_else(|| GameError::UnknownItem(String::from(item_id)))?;

    if item.kind != slot.accepts() {
        return Err(GameError::WrongSlot {
            kind: item.kind,
            slot,
        });
    }

    if inventory::quantity_of(&save.inventory, item_id, rarity) == 0 {
        return Err(GameError::NotInInventory);
    }

    // Return the current occupant first so a same-item swap still balances.
    if let Some((old_id, old_rarity)) = save.equipped.get(slot) {
        let old_id = String::from(old_id);
        inventory::add_item(&mut save.inventory, &old_id, old_rarity, 1);
    }

    inventory::remove_item(&mut save.inventory, item_id, rarity, 1)?;
    save.equipped.set(slot, String::from(item_id), rarity);
    save.last_updated = now_ms;

    Ok(EquipReceipt {
        equipped: save.equipped.clone(),
        inventory: save.inventory.clone(),
    })
}

/// Clear a slot, returning its occupant (if any) to inventory.
///
/// Unequipping an empty slot is a no-op, not an error.
pub fn unequip(save: &mut SaveState, slot: EquipSlot, now_ms: u64) -> EquipReceipt {
    if let Some((item_id, rarity)) = save.equipped.get(slot) {
        let item_id = String::from(item_id);
        inventory::add_item(&mut save.inventory, &item_id, rarity, 1);
        save.equipped.clear(slot);
        save.last_updated = now_ms;
    }

    EquipReceipt {
        equipped: save.equipped.clone(),
        inventory: save.inventory.clone(),
    }
}

/// Merge two units of an (item, rarity) pair into one of the next rarity.
///
/// The caller supplies the wallet's AP balance; the returned receipt
/// carries the merge fee for the caller to settle. Merge XP feeds the
/// same level-up cascade as collection.
pub fn merge(
    save: &mut SaveState,
    item_id: &str,
    rarity: Rarity,
    now_ms: u64,
    balance: u64,
) -> Result<MergeReceipt, GameError> {
    let next = economy::next_rarity(rarity).ok_or(GameError::MaxRarity)?;

    let item = items::item_for(item_id)
        .ok_or_else(|| GameError::UnknownItem(String::from(item_id)))?;

    let held = inventory::quantity_of(&save.inventory, item_id, rarity);
    if held < 2 {
        return Err(GameError::NeedTwoToMerge {
            item_name: String::from(item.name),
            rarity,
            have: held,
        });
    }

    if balance < economy::MERGE_COST {
        return Err(GameError::InsufficientAp {
            needed: economy::MERGE_COST,
            available: balance,
        });
    }

    inventory::remove_item(&mut save.inventory, item_id, rarity, 2)?;
    inventory::add_item(&mut save.inventory, item_id, next, 1);

    let outcome = award_xp(save, economy::MERGE_XP_REWARD);
    save.last_updated = now_ms;

    Ok(MergeReceipt {
        item_id: String::from(item_id),
        from_rarity: rarity,
        to_rarity: next,
        ap_spent: economy::MERGE_COST,
        xp_gained: economy::MERGE_XP_REWARD,
        new_balance: balance.saturating_sub(economy::MERGE_COST),
        leveled_up: outcome.leveled_up,
        new_level: outcome.new_level,
        inventory: save.inventory.clone(),
    })
}
