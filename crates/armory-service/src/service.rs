//! Request/response orchestration, one method per player action.
//!
//! Every method follows the same shape: parse and normalize the wallet,
//! take that wallet's lock, load the save document, run the pure engine,
//! settle any AP movement with the points service, persist the document,
//! and return a receipt. The per-wallet lock serializes the
//! read-modify-write cycle inside this process; across processes the
//! store remains last-write-wins at the document level.
//!
//! AP settlement and the save write are two separate store round trips
//! and are not atomic with each other. A crash between them can leave the
//! balance and the save's AP counters out of step -- a known property of
//! the store contract, inherited deliberately.

use std::collections::BTreeMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};

use armory_engine as engine;
use armory_store::{BalanceRepository, SaveRepository};
use armory_types::{
    CollectReceipt, CraftReceipt, EquipReceipt, EquipSlot, JobId, LoadReceipt, MergeReceipt,
    PurchaseReceipt, Rarity, ResourceKey, SaveState, SellReceipt, SpeedUpMode, SpeedUpReceipt,
    StationId, UpgradeReceipt, Wallet,
};

use crate::clock::GameClock;
use crate::error::ServiceError;
use crate::points;

/// The Armory service: typed async actions over a wallet-keyed store.
pub struct ArmoryService<S, C> {
    store: S,
    clock: C,
    starting_balance: u64,
    wallet_locks: Mutex<BTreeMap<String, Arc<Mutex<()>>>>,
}

impl<S, C> ArmoryService<S, C>
where
    S: SaveRepository + BalanceRepository,
    C: GameClock,
{
    /// Create a service over a store and a clock.
    pub fn new(store: S, clock: C, starting_balance: u64) -> Self {
        Self {
            store,
            clock,
            starting_balance,
            wallet_locks: Mutex::new(BTreeMap::new()),
        }
    }

    /// Acquire the per-wallet operation lock.
    ///
    /// All mutating actions for one wallet serialize on this lock, closing
    /// the in-process read-modify-write race on the save document.
    async fn lock_wallet(&self, wallet: &Wallet) -> OwnedMutexGuard<()> {
        let mutex = {
            let mut locks = self.wallet_locks.lock().await;
            Arc::clone(
                locks
                    .entry(String::from(wallet.as_str()))
                    .or_insert_with(|| Arc::new(Mutex::new(()))),
            )
        };
        mutex.lock_owned().await
    }

    /// Load a wallet's save, failing if it was never created.
    async fn load_required(&self, wallet: &Wallet) -> Result<SaveState, ServiceError> {
        self.store
            .load_save(wallet)
            .await?
            .ok_or(ServiceError::SaveNotFound)
    }

    /// Current AP balance for a wallet (seeding/migrating on first read).
    pub async fn balance(&self, wallet: &str) -> Result<u64, ServiceError> {
        let wallet = Wallet::parse(wallet)?;
        points::get_balance(&self.store, &wallet, self.starting_balance).await
    }

    /// Load a wallet's save, creating it on first access, and apply the
    /// daily-login rule.
    pub async fn load_or_create(&self, wallet: &str) -> Result<LoadReceipt, ServiceError> {
        let wallet = Wallet::parse(wallet)?;
        let _guard = self.lock_wallet(&wallet).await;
        let now = self.clock.now_ms();

        let (mut save, created) = match self.store.load_save(&wallet).await? {
            Some(save) => (save, false),
            None => {
                tracing::info!(%wallet, "creating new armory save");
                (engine::new_save(wallet.clone(), now), true)
            }
        };

        let touched =
            engine::touch_daily_login(&mut save, &self.clock.today(), &self.clock.yesterday());
        if touched {
            save.last_updated = now;
        }
        if created || touched {
            self.store.store_save(&save).await?;
        }

        let completed_jobs_ready = save.completed_jobs_ready(now);
        Ok(LoadReceipt {
            save,
            completed_jobs_ready,
            created,
        })
    }

    /// Create a wallet's save, or overwrite it when `reset` is set.
    ///
    /// Without `reset`, an existing save is returned untouched.
    pub async fn create_or_reset(
        &self,
        wallet: &str,
        reset: bool,
    ) -> Result<SaveState, ServiceError> {
        let wallet = Wallet::parse(wallet)?;
        let _guard = self.lock_wallet(&wallet).await;

        if !reset {
            if let Some(existing) = self.store.load_save(&wallet).await? {
                return Ok(existing);
            }
        }

        let save = engine::new_save(wallet.clone(), self.clock.now_ms());
        self.store.store_save(&save).await?;
        tracing::info!(%wallet, reset, "armory save written");
        Ok(save)
    }

    /// Start a crafting job.
    pub async fn start_craft(
        &self,
        wallet: &str,
        recipe_id: &str,
        station: StationId,
    ) -> Result<CraftReceipt, ServiceError> {
        let wallet = Wallet::parse(wallet)?;
        let _guard = self.lock_wallet(&wallet).await;

        let mut save = self.load_required(&wallet).await?;
        let receipt = engine::start_craft(&mut save, recipe_id, station, self.clock.now_ms())?;
        self.store.store_save(&save).await?;

        tracing::debug!(%wallet, recipe_id, ?station, job = %receipt.job.id, "craft started");
        Ok(receipt)
    }

    /// Apply a paid speed-up to a queued job.
    pub async fn speed_up(
        &self,
        wallet: &str,
        job_id: JobId,
        mode: SpeedUpMode,
    ) -> Result<SpeedUpReceipt, ServiceError> {
        let wallet = Wallet::parse(wallet)?;
        let _guard = self.lock_wallet(&wallet).await;

        let mut save = self.load_required(&wallet).await?;
        let balance = points::get_balance(&self.store, &wallet, self.starting_balance).await?;
        let mut receipt =
            engine::apply_speed_up(&mut save, job_id, mode, self.clock.now_ms(), balance)?;

        receipt.new_balance =
            points::deduct_points(&self.store, &wallet, receipt.ap_spent, self.starting_balance)
                .await?;
        self.store.store_save(&save).await?;

        tracing::debug!(%wallet, %job_id, ?mode, ap = receipt.ap_spent, "job sped up");
        Ok(receipt)
    }

    /// Collect every completed job across all stations.
    pub async fn collect(&self, wallet: &str) -> Result<CollectReceipt, ServiceError> {
        let wallet = Wallet::parse(wallet)?;
        let _guard = self.lock_wallet(&wallet).await;

        let mut save = self.load_required(&wallet).await?;
        let receipt = engine::collect(&mut save, self.clock.now_ms());
        self.store.store_save(&save).await?;

        tracing::debug!(
            %wallet,
            collected = receipt.collected.len(),
            xp = receipt.total_xp,
            "collection complete"
        );
        Ok(receipt)
    }

    /// Unlock a station (free, player-level gated) or buy its next level.
    pub async fn upgrade_station(
        &self,
        wallet: &str,
        station: StationId,
    ) -> Result<UpgradeReceipt, ServiceError> {
        let wallet = Wallet::parse(wallet)?;
        let _guard = self.lock_wallet(&wallet).await;

        let mut save = self.load_required(&wallet).await?;
        let balance = points::get_balance(&self.store, &wallet, self.starting_balance).await?;
        let mut receipt =
            engine::upgrade_station(&mut save, station, self.clock.now_ms(), balance)?;

        if receipt.ap_spent > 0 {
            let new_balance = points::deduct_points(
                &self.store,
                &wallet,
                receipt.ap_spent,
                self.starting_balance,
            )
            .await?;
            receipt.new_balance = Some(new_balance);
        }
        self.store.store_save(&save).await?;

        tracing::debug!(%wallet, ?station, level = receipt.new_level, "station upgraded");
        Ok(receipt)
    }

    /// Equip an (item, rarity) pair into a slot.
    pub async fn equip(
        &self,
        wallet: &str,
        slot: EquipSlot,
        item_id: &str,
        rarity: Rarity,
    ) -> Result<EquipReceipt, ServiceError> {
        let wallet = Wallet::parse(wallet)?;
        let _guard = self.lock_wallet(&wallet).await;

        let mut save = self.load_required(&wallet).await?;
        let receipt = engine::equip(&mut save, slot, item_id, rarity, self.clock.now_ms())?;
        self.store.store_save(&save).await?;

        tracing::debug!(%wallet, ?slot, item_id, ?rarity, "item equipped");
        Ok(receipt)
    }

    /// Clear a slot, returning its occupant to inventory.
    pub async fn unequip(
        &self,
        wallet: &str,
        slot: EquipSlot,
    ) -> Result<EquipReceipt, ServiceError> {
        let wallet = Wallet::parse(wallet)?;
        let _guard = self.lock_wallet(&wallet).await;

        let mut save = self.load_required(&wallet).await?;
        let receipt = engine::unequip(&mut save, slot, self.clock.now_ms());
        self.store.store_save(&save).await?;

        tracing::debug!(%wallet, ?slot, "slot cleared");
        Ok(receipt)
    }

    /// Merge two units of an (item, rarity) pair into the next rarity.
    pub async fn merge(
        &self,
        wallet: &str,
        item_id: &str,
        rarity: Rarity,
    ) -> Result<MergeReceipt, ServiceError> {
        let wallet = Wallet::parse(wallet)?;
        let _guard = self.lock_wallet(&wallet).await;

        let mut save = self.load_required(&wallet).await?;
        let balance = points::get_balance(&self.store, &wallet, self.starting_balance).await?;
        let mut receipt =
            engine::merge(&mut save, item_id, rarity, self.clock.now_ms(), balance)?;

        receipt.new_balance =
            points::deduct_points(&self.store, &wallet, receipt.ap_spent, self.starting_balance)
                .await?;
        self.store.store_save(&save).await?;

        tracing::debug!(%wallet, item_id, ?rarity, "items merged");
        Ok(receipt)
    }

    /// Sell items for AP (item-ID match, base sell value).
    pub async fn sell(
        &self,
        wallet: &str,
        item_id: &str,
        quantity: u64,
    ) -> Result<SellReceipt, ServiceError> {
        let wallet = Wallet::parse(wallet)?;
        let _guard = self.lock_wallet(&wallet).await;

        let mut save = self.load_required(&wallet).await?;
        let balance = points::get_balance(&self.store, &wallet, self.starting_balance).await?;
        let mut receipt =
            engine::sell(&mut save, item_id, quantity, self.clock.now_ms(), balance)?;

        receipt.new_balance =
            points::add_points(&self.store, &wallet, receipt.ap_earned, self.starting_balance)
                .await?;
        self.store.store_save(&save).await?;

        tracing::debug!(%wallet, item_id, quantity, ap = receipt.ap_earned, "items sold");
        Ok(receipt)
    }

    /// Buy raw materials with AP.
    pub async fn buy_material(
        &self,
        wallet: &str,
        resource: ResourceKey,
        quantity: u64,
    ) -> Result<PurchaseReceipt, ServiceError> {
        let wallet = Wallet::parse(wallet)?;
        let _guard = self.lock_wallet(&wallet).await;

        let mut save = self.load_required(&wallet).await?;
        let balance = points::get_balance(&self.store, &wallet, self.starting_balance).await?;
        let mut receipt =
            engine::buy_material(&mut save, resource, quantity, self.clock.now_ms(), balance)?;

        receipt.new_balance =
            points::deduct_points(&self.store, &wallet, receipt.ap_spent, self.starting_balance)
                .await?;
        self.store.store_save(&save).await?;

        tracing::debug!(%wallet, ?resource, quantity, ap = receipt.ap_spent, "materials bought");
        Ok(receipt)
    }
}
