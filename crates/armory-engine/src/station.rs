//! Station unlocks and paid upgrades.
//!
//! The 0-to-1 transition is an unlock: free, gated only by player level.
//! Every later level costs AP from the level-indexed table and carries no
//! player-level gate. The asymmetry is deliberate and mirrors how the
//! level-up cascade hands out the same unlock for free.

use armory_catalog::stations;
use armory_types::{SaveState, StationId, UpgradeReceipt};

use crate::error::GameError;

/// Unlock or upgrade a station.
///
/// The caller supplies the wallet's AP balance; the free unlock path
/// ignores it (and the receipt carries no balance).
pub fn upgrade_station(
    save: &mut SaveState,
    station: StationId,
    now_ms: u64,
    balance: u64,
) -> Result<UpgradeReceipt, GameError> {
    let definition = stations::station_for(station);
    let current_level = save.station_level(station);

    if current_level == 0 {
        if !stations::is_unlocked(station, save.progress.level) {
            return Err(GameError::UnlocksAtLevel {
                level: definition.unlock_level,
            });
        }
        save.station_levels.insert(station, 1);
        save.last_updated = now_ms;
        return Ok(UpgradeReceipt {
            station_id: station,
            new_level: 1,
            ap_spent: 0,
            new_balance: None,
            station_levels: save.station_levels.clone(),
        });
    }

    if current_level >= definition.max_level {
        return Err(GameError::AlreadyMaxLevel(station));
    }

    let cost = stations::upgrade_cost(station, current_level)
        .ok_or(GameError::AlreadyMaxLevel(station))?;
    if balance < cost {
        return Err(GameError::InsufficientAp {
            needed: cost,
            available: balance,
        });
    }

    let new_level = current_level.saturating_add(1);
    save.station_levels.insert(station, new_level);
    save.progress.total_ap_spent = save.progress.total_ap_spent.saturating_add(cost);
    save.last_updated = now_ms;

    Ok(UpgradeReceipt {
        station_id: station,
        new_level,
        ap_spent: cost,
        new_balance: Some(balance.saturating_sub(cost)),
        station_levels: save.station_levels.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::save::new_save;
    use armory_types::Wallet;

    fn fresh_save() -> Option<SaveState> {
        Some(new_save(Wallet::parse("0xabc").ok()?, 0))
    }

    #[test]
    fn locked_station_below_gate_rejected() {
        let Some(mut save) = fresh_save() else { return };
        let result = upgrade_station(&mut save, StationId::VoidForge, 0, 100_000);
        assert_eq!(result, Err(GameError::UnlocksAtLevel { level: 2 }));
        assert_eq!(save.station_level(StationId::VoidForge), 0);
    }

    #[test]
    fn unlock_is_free_once_gate_is_met() {
        let Some(mut save) = fresh_save() else { return };
        save.progress.level = 2;
        // Zero balance: the unlock path must not consult it.
        let receipt = upgrade_station(&mut save, StationId::VoidForge, 0, 0);
        assert!(receipt.is_ok());
        let Ok(receipt) = receipt else { return };
        assert_eq!(receipt.new_level, 1);
        assert_eq!(receipt.ap_spent, 0);
        assert_eq!(receipt.new_balance, None);
        assert_eq!(save.station_level(StationId::VoidForge), 1);
        assert_eq!(save.progress.total_ap_spent, 0);
    }

    #[test]
    fn paid_upgrade_charges_the_level_indexed_cost() {
        let Some(mut save) = fresh_save() else { return };
        let receipt = upgrade_station(&mut save, StationId::PlasmaRefinery, 0, 2_000);
        assert!(receipt.is_ok());
        let Ok(receipt) = receipt else { return };
        assert_eq!(receipt.new_level, 2);
        assert_eq!(receipt.ap_spent, 500);
        assert_eq!(receipt.new_balance, Some(1_500));
        assert_eq!(save.progress.total_ap_spent, 500);
    }

    #[test]
    fn paid_upgrade_has_no_player_level_gate() {
        let Some(mut save) = fresh_save() else { return };
        save.progress.level = 2;
        let unlocked = upgrade_station(&mut save, StationId::VoidForge, 0, 0);
        assert!(unlocked.is_ok());
        // Still level 2; the 1->2 station upgrade only needs AP.
        let receipt = upgrade_station(&mut save, StationId::VoidForge, 0, 1_000);
        assert!(receipt.is_ok());
        let Ok(receipt) = receipt else { return };
        assert_eq!(receipt.new_level, 2);
        assert_eq!(receipt.ap_spent, 750);
    }

    #[test]
    fn insufficient_ap_rejected() {
        let Some(mut save) = fresh_save() else { return };
        let result = upgrade_station(&mut save, StationId::PlasmaRefinery, 0, 499);
        assert_eq!(
            result,
            Err(GameError::InsufficientAp {
                needed: 500,
                available: 499,
            }),
        );
        assert_eq!(save.station_level(StationId::PlasmaRefinery), 1);
    }

    #[test]
    fn max_level_rejected() {
        let Some(mut save) = fresh_save() else { return };
        save.station_levels.insert(StationId::AssemblyBay, 5);
        let result = upgrade_station(&mut save, StationId::AssemblyBay, 0, 1_000_000);
        assert_eq!(
            result,
            Err(GameError::AlreadyMaxLevel(StationId::AssemblyBay)),
        );
    }

    #[test]
    fn costs_climb_level_by_level() {
        let Some(mut save) = fresh_save() else { return };
        let mut spent = Vec::new();
        for _ in 1..5 {
            let receipt = upgrade_station(&mut save, StationId::PlasmaRefinery, 0, 1_000_000);
            let Ok(receipt) = receipt else { return };
            spent.push(receipt.ap_spent);
        }
        assert_eq!(spent, vec![500, 1000, 2000, 4000]);
        assert_eq!(save.station_level(StationId::PlasmaRefinery), 5);
    }
}
