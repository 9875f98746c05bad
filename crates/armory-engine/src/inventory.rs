//! Inventory stack operations.
//!
//! Inventory is a list of (item, rarity) stacks with at most one stack per
//! pair. These helpers keep that invariant: adds find-or-create the stack,
//! removals fail before mutating, and stacks are pruned the moment they
//! reach zero.

use armory_types::{InventorySlot, Rarity};

use crate::error::GameError;

/// Units of an exact (item, rarity) pair currently held.
pub fn quantity_of(inventory: &[InventorySlot], item_id: &str, rarity: Rarity) -> u64 {
    inventory
        .iter()
        .find(|slot| slot.item_id == item_id && slot.rarity == rarity)
        .map_or(0, |slot| slot.quantity)
}

/// Add `amount` units of an (item, rarity) pair, stacking onto the
/// existing slot or creating one.
pub fn add_item(inventory: &mut Vec<InventorySlot>, item_id: &str, rarity: Rarity, amount: u64) {
    if amount == 0 {
        return;
    }
    if let Some(slot) = inventory
        .iter_mut()
        .find(|slot| slot.item_id == item_id && slot.rarity == rarity)
    {
        slot.quantity = slot.quantity.saturating_add(amount);
    } else {
        inventory.push(InventorySlot {
            item_id: String::from(item_id),
            rarity,
            quantity: amount,
        });
    }
}

/// Remove `amount` units of an exact (item, rarity) pair.
///
/// Fails without mutating if the stack does not cover the amount; prunes
/// the stack when it reaches zero.
pub fn remove_item(
    inventory: &mut Vec<InventorySlot>,
    item_id: &str,
    rarity: Rarity,
    amount: u64,
) -> Result<(), GameError> {
    let index = inventory
        .iter()
        .position(|slot| slot.item_id == item_id && slot.rarity == rarity)
        .ok_or(GameError::NotInInventory)?;

    let Some(slot) = inventory.get_mut(index) else {
        return Err(GameError::NotInInventory);
    };
    if slot.quantity < amount {
        return Err(GameError::InsufficientItems {
            have: slot.quantity,
            need: amount,
        });
    }

    slot.quantity = slot.quantity.saturating_sub(amount);
    if slot.quantity == 0 {
        inventory.remove(index);
    }
    Ok(())
}

/// Remove `amount` units matching `item_id` at any rarity.
///
/// Draws from the first matching stack only -- the sell path deliberately
/// ignores rarity (see DESIGN.md). Fails without mutating if that stack
/// does not cover the amount.
pub fn remove_item_any_rarity(
    inventory: &mut Vec<InventorySlot>,
    item_id: &str,
    amount: u64,
) -> Result<Rarity, GameError> {
    let index = inventory
        .iter()
        .position(|slot| slot.item_id == item_id)
        .ok_or(GameError::InsufficientItems {
            have: 0,
            need: amount,
        })?;

    let Some(slot) = inventory.get_mut(index) else {
        return Err(GameError::NotInInventory);
    };
    if slot.quantity < amount {
        return Err(GameError::InsufficientItems {
            have: slot.quantity,
            need: amount,
        });
    }

    let rarity = slot.rarity;
    slot.quantity = slot.quantity.saturating_sub(amount);
    if slot.quantity == 0 {
        inventory.remove(index);
    }
    Ok(rarity)
}
