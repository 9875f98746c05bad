//! Selling items and buying raw materials.
//!
//! Selling matches inventory by item ID only and pays the base (common)
//! sell value -- rarity is deliberately ignored on this path, unlike equip
//! and merge (see DESIGN.md). The shop sells the five raw materials at
//! fixed unit prices; processed materials can only be crafted.

use armory_catalog::{economy, items};
use armory_types::{PurchaseReceipt, ResourceKey, SaveState, SellReceipt};

use crate::error::GameError;
use crate::inventory;

/// Sell `quantity` units of an item for AP.
///
/// Draws from the first inventory stack matching the item ID, whatever
/// its rarity, and credits `sell_value * quantity` at the base value. The
/// caller settles the credit with the points service.
pub fn sell(
    save: &mut SaveState,
    item_id: &str,
    quantity: u64,
    now_ms: u64,
    balance: u64,
) -> Result<SellReceipt, GameError> {
    if quantity == 0 {
        return Err(GameError::ZeroQuantity);
    }

    let held = save
        .inventory
        .iter()
        .find(|slot| slot.item_id == item_id)
        .map_or(0, |slot| slot.quantity);
    if held < quantity {
        return Err(GameError::InsufficientItems {
            have: held,
            need: quantity,
        });
    }

    let item = items::item_for(item_id)
        .ok_or_else(|| GameError::UnknownItem(String::from(item_id)))?;

    let ap_earned = item.sell_value.saturating_mul(quantity);
    let _ = inventory::remove_item_any_rarity(&mut save.inventory, item_id, quantity)?;

    save.progress.total_ap_earned = save.progress.total_ap_earned.saturating_add(ap_earned);
    save.last_updated = now_ms;

    Ok(SellReceipt {
        item_id: String::from(item_id),
        item_name: String::from(item.name),
        quantity,
        ap_earned,
        new_balance: balance.saturating_add(ap_earned),
        inventory: save.inventory.clone(),
    })
}

/// Buy `quantity` units of a raw material with AP.
pub fn buy_material(
    save: &mut SaveState,
    resource: ResourceKey,
    quantity: u64,
    now_ms: u64,
    balance: u64,
) -> Result<PurchaseReceipt, GameError> {
    if quantity == 0 {
        return Err(GameError::ZeroQuantity);
    }

    let unit_cost = economy::material_cost(resource).ok_or(GameError::NotPurchasable(resource))?;
    let total_cost = unit_cost.saturating_mul(quantity);
    if balance < total_cost {
        return Err(GameError::InsufficientAp {
            needed: total_cost,
            available: balance,
        });
    }

    let entry = save.resources.entry(resource).or_insert(0);
    *entry = entry.saturating_add(quantity);
    save.progress.total_ap_spent = save.progress.total_ap_spent.saturating_add(total_cost);
    save.last_updated = now_ms;

    Ok(PurchaseReceipt {
        resource,
        quantity,
        ap_spent: total_cost,
        new_balance: balance.saturating_sub(total_cost),
        resources: save.resources.clone(),
    })
}
