//! End-to-end scenarios over the in-memory store and a manual clock.
//!
//! These drive the full service path -- wallet parsing, per-wallet locks,
//! engine logic, points settlement, persistence -- with no infrastructure.
//! Time is advanced by hand; nothing here sleeps.

// Integration tests use expect/unwrap extensively for clarity -- panicking
// on failure is the correct behavior in test code.
#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::items_after_statements,
    clippy::missing_panics_doc,
    clippy::too_many_lines,
    clippy::indexing_slicing
)]

use armory_service::{ArmoryService, ErrorKind, ManualClock, ServiceError};
use armory_store::{MemoryStore, SaveRepository};
use armory_types::{
    CollectedKind, EquipSlot, JobId, Rarity, ResourceKey, SpeedUpMode, StationId, Wallet,
};

/// 2026-08-07T00:00:00Z.
const EPOCH: u64 = 1_786_060_800_000;

/// AP seeded to new wallets in these scenarios.
const STARTING: u64 = 5000;

const WALLET: &str = "0xA11CE";

fn harness() -> (ArmoryService<MemoryStore, ManualClock>, MemoryStore, ManualClock) {
    let store = MemoryStore::new();
    let clock = ManualClock::at(EPOCH);
    let service = ArmoryService::new(store.clone(), clock.clone(), STARTING);
    (service, store, clock)
}

/// Write a mutated copy of a wallet's save straight into the store.
async fn edit_save<F: FnOnce(&mut armory_types::SaveState)>(store: &MemoryStore, wallet: &str, f: F) {
    let wallet = Wallet::parse(wallet).expect("test wallet parses");
    let mut save = store
        .load_save(&wallet)
        .await
        .expect("store read")
        .expect("save exists");
    f(&mut save);
    store.store_save(&save).await.expect("store write");
}

// =============================================================================
// Fresh wallet: create, craft, lazy completion, collect
// =============================================================================

#[tokio::test]
async fn fresh_wallet_crafts_and_collects() {
    let (service, _store, clock) = harness();

    // First load creates the save with the documented defaults.
    let loaded = service.load_or_create(WALLET).await.expect("load");
    assert!(loaded.created);
    assert_eq!(loaded.completed_jobs_ready, 0);
    assert_eq!(loaded.save.progress.level, 1);
    assert_eq!(loaded.save.resource(ResourceKey::PlasmaOre), 5);
    assert_eq!(loaded.save.station_level(StationId::PlasmaRefinery), 1);
    assert_eq!(loaded.save.station_level(StationId::VoidForge), 0);
    assert_eq!(loaded.save.progress.daily_login_streak, 1);

    // Start the starter recipe: consumes 3 of the 5 plasma ore.
    let receipt = service
        .start_craft(WALLET, "refined-plasma", StationId::PlasmaRefinery)
        .await
        .expect("craft");
    assert_eq!(receipt.resources.get(&ResourceKey::PlasmaOre), Some(&2));
    assert_eq!(receipt.craft_time_seconds, 30);

    // Immediately collecting yields nothing; the job is not due.
    let collected = service.collect(WALLET).await.expect("collect");
    assert!(collected.collected.is_empty());

    // 31 simulated seconds later the job is due.
    clock.advance_ms(31_000);
    let loaded = service.load_or_create(WALLET).await.expect("reload");
    assert_eq!(loaded.completed_jobs_ready, 1);

    let collected = service.collect(WALLET).await.expect("collect");
    assert_eq!(collected.collected.len(), 1);
    assert_eq!(
        collected.collected[0].output,
        CollectedKind::Resource {
            key: ResourceKey::RefinedPlasma,
            quantity: 1,
        },
    );
    // 10 recipe XP + 50 first-craft bonus.
    assert_eq!(collected.collected[0].xp_gained, 60);
    assert!(collected.collected[0].first_craft);
    assert_eq!(collected.new_xp, 60);
    assert_eq!(collected.resources.get(&ResourceKey::RefinedPlasma), Some(&1));
}

// =============================================================================
// Station unlock at level 2 is free
// =============================================================================

#[tokio::test]
async fn level_two_unlocks_void_forge_for_free() {
    let (service, store, _clock) = harness();
    service.load_or_create(WALLET).await.expect("load");
    edit_save(&store, WALLET, |save| {
        save.progress.level = 2;
    })
    .await;

    let receipt = service
        .upgrade_station(WALLET, StationId::VoidForge)
        .await
        .expect("unlock");
    assert_eq!(receipt.new_level, 1);
    assert_eq!(receipt.ap_spent, 0);
    assert_eq!(receipt.new_balance, None);

    // No AP left the wallet.
    assert_eq!(service.balance(WALLET).await.expect("balance"), STARTING);
}

#[tokio::test]
async fn locked_station_below_gate_reports_unlock_level() {
    let (service, _store, _clock) = harness();
    service.load_or_create(WALLET).await.expect("load");

    let err = service
        .upgrade_station(WALLET, StationId::QuantumChamber)
        .await
        .expect_err("gated");
    assert_eq!(err.to_string(), "Station unlocks at level 5");
    assert_eq!(err.kind(), ErrorKind::Rejected);
}

// =============================================================================
// Selling matches by item ID only and pays the base value
// =============================================================================

#[tokio::test]
async fn selling_ignores_rarity_and_credits_base_value() {
    let (service, store, _clock) = harness();
    service.load_or_create(WALLET).await.expect("load");
    edit_save(&store, WALLET, |save| {
        save.inventory.push(armory_types::InventorySlot {
            item_id: String::from("plasma-pistol"),
            rarity: Rarity::Rare,
            quantity: 1,
        });
    })
    .await;

    let receipt = service.sell(WALLET, "plasma-pistol", 1).await.expect("sell");
    // Base sell value (100), regardless of the rare copy being consumed.
    assert_eq!(receipt.ap_earned, 100);
    assert_eq!(receipt.new_balance, STARTING + 100);
    assert!(receipt.inventory.is_empty());

    let save = store
        .load_save(&Wallet::parse(WALLET).unwrap())
        .await
        .expect("read")
        .expect("exists");
    assert_eq!(save.progress.total_ap_earned, 100);
}

// =============================================================================
// Paid speed-up settles AP and completes the job
// =============================================================================

#[tokio::test]
async fn instant_speed_up_charges_and_completes() {
    let (service, _store, _clock) = harness();
    service.load_or_create(WALLET).await.expect("load");

    let started = service
        .start_craft(WALLET, "refined-plasma", StationId::PlasmaRefinery)
        .await
        .expect("craft");

    // 30s remain: instant costs ceil(30/2) = 15 AP.
    let receipt = service
        .speed_up(WALLET, started.job.id, SpeedUpMode::Instant)
        .await
        .expect("speed up");
    assert_eq!(receipt.ap_spent, 15);
    assert_eq!(receipt.new_balance, STARTING - 15);
    assert_eq!(service.balance(WALLET).await.expect("balance"), STARTING - 15);

    // The job is now collectable without advancing the clock.
    let collected = service.collect(WALLET).await.expect("collect");
    assert_eq!(collected.collected.len(), 1);

    let save = service.load_or_create(WALLET).await.expect("reload").save;
    assert_eq!(save.progress.total_ap_spent, 15);
}

// =============================================================================
// Daily login streaks
// =============================================================================

#[tokio::test]
async fn daily_streak_grows_and_resets() {
    let (service, _store, clock) = harness();

    let day1 = service.load_or_create(WALLET).await.expect("day 1");
    assert_eq!(day1.save.progress.daily_login_streak, 1);

    // Same-day reload changes nothing.
    let again = service.load_or_create(WALLET).await.expect("same day");
    assert_eq!(again.save.progress.daily_login_streak, 1);

    clock.advance_days(1);
    let day2 = service.load_or_create(WALLET).await.expect("day 2");
    assert_eq!(day2.save.progress.daily_login_streak, 2);

    clock.advance_days(1);
    let day3 = service.load_or_create(WALLET).await.expect("day 3");
    assert_eq!(day3.save.progress.daily_login_streak, 3);

    // Two silent days: the streak restarts.
    clock.advance_days(2);
    let later = service.load_or_create(WALLET).await.expect("after gap");
    assert_eq!(later.save.progress.daily_login_streak, 1);
}

// =============================================================================
// Shop, merge, equip round trip
// =============================================================================

#[tokio::test]
async fn buy_merge_equip_round_trip() {
    let (service, store, _clock) = harness();
    service.load_or_create(WALLET).await.expect("load");

    // Buy two void crystals: 2 x 100 AP.
    let receipt = service
        .buy_material(WALLET, ResourceKey::VoidCrystal, 2)
        .await
        .expect("buy");
    assert_eq!(receipt.ap_spent, 200);
    assert_eq!(receipt.new_balance, STARTING - 200);
    assert_eq!(receipt.resources.get(&ResourceKey::VoidCrystal), Some(&2));

    // Seed two common pistols and climb one rarity tier.
    edit_save(&store, WALLET, |save| {
        save.inventory.push(armory_types::InventorySlot {
            item_id: String::from("plasma-pistol"),
            rarity: Rarity::Common,
            quantity: 2,
        });
    })
    .await;

    let merged = service
        .merge(WALLET, "plasma-pistol", Rarity::Common)
        .await
        .expect("merge");
    assert_eq!(merged.to_rarity, Rarity::Uncommon);
    assert_eq!(merged.ap_spent, 50);
    assert_eq!(merged.new_balance, STARTING - 250);
    assert_eq!(merged.xp_gained, 25);

    // Equip the uncommon result, then put it back.
    let equipped = service
        .equip(WALLET, EquipSlot::Weapon, "plasma-pistol", Rarity::Uncommon)
        .await
        .expect("equip");
    assert_eq!(
        equipped.equipped.get(EquipSlot::Weapon),
        Some(("plasma-pistol", Rarity::Uncommon)),
    );
    assert!(equipped.inventory.is_empty());

    let cleared = service.unequip(WALLET, EquipSlot::Weapon).await.expect("unequip");
    assert_eq!(cleared.equipped.get(EquipSlot::Weapon), None);
    assert_eq!(cleared.inventory.len(), 1);
    assert_eq!(cleared.inventory[0].rarity, Rarity::Uncommon);
}

// =============================================================================
// Merging epic is a dead end
// =============================================================================

#[tokio::test]
async fn epic_merge_is_rejected() {
    let (service, store, _clock) = harness();
    service.load_or_create(WALLET).await.expect("load");
    edit_save(&store, WALLET, |save| {
        save.inventory.push(armory_types::InventorySlot {
            item_id: String::from("plasma-pistol"),
            rarity: Rarity::Epic,
            quantity: 2,
        });
    })
    .await;

    let err = service
        .merge(WALLET, "plasma-pistol", Rarity::Epic)
        .await
        .expect_err("epic");
    assert_eq!(
        err.to_string(),
        "Cannot merge Epic items - already max rarity",
    );
}

// =============================================================================
// Error taxonomy through the boundary
// =============================================================================

#[tokio::test]
async fn boundary_errors_classify_correctly() {
    let (service, _store, _clock) = harness();

    // Malformed wallet: validation, nothing read.
    let err = service.collect("  ").await.expect_err("empty wallet");
    assert_eq!(err.kind(), ErrorKind::Validation);

    // Never-initialized wallet: not found.
    let err = service.collect("0xfeed").await.expect_err("no save");
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert!(matches!(err, ServiceError::SaveNotFound));

    // Unknown job on an initialized wallet: not found.
    service.load_or_create(WALLET).await.expect("load");
    let err = service
        .speed_up(WALLET, JobId::new(), SpeedUpMode::Half)
        .await
        .expect_err("no job");
    assert_eq!(err.kind(), ErrorKind::NotFound);

    // Queue overflow: a rejection with the documented message.
    for _ in 0..2 {
        service
            .buy_material(WALLET, ResourceKey::PlasmaOre, 3)
            .await
            .expect("restock");
        service
            .start_craft(WALLET, "refined-plasma", StationId::PlasmaRefinery)
            .await
            .expect("fill queue");
    }
    let err = service
        .start_craft(WALLET, "refined-plasma", StationId::PlasmaRefinery)
        .await
        .expect_err("queue full");
    assert_eq!(err.kind(), ErrorKind::Rejected);
    assert_eq!(err.to_string(), "Queue full. Max 2 items.");
}

// =============================================================================
// Wallet normalization and reset
// =============================================================================

#[tokio::test]
async fn mixed_case_wallets_share_one_save() {
    let (service, _store, _clock) = harness();

    let created = service.load_or_create("0xAbCd").await.expect("create");
    assert!(created.created);

    // A different casing lands on the same document.
    let reloaded = service.load_or_create("0xABCD").await.expect("reload");
    assert!(!reloaded.created);
    assert_eq!(reloaded.save.wallet.as_str(), "0xabcd");
}

#[tokio::test]
async fn reset_overwrites_progress() {
    let (service, store, _clock) = harness();
    service.load_or_create(WALLET).await.expect("load");
    edit_save(&store, WALLET, |save| {
        save.progress.level = 7;
        save.progress.xp = 20_000;
    })
    .await;

    // Without the reset flag the existing save is returned untouched.
    let kept = service.create_or_reset(WALLET, false).await.expect("keep");
    assert_eq!(kept.progress.level, 7);

    let fresh = service.create_or_reset(WALLET, true).await.expect("reset");
    assert_eq!(fresh.progress.level, 1);
    assert_eq!(fresh.progress.xp, 0);
}
