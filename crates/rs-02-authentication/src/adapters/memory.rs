//! In-memory key store.
//!
//! Epoch keys are held per UTC day, as deployed: every epoch of a day shares
//! the day's server key.

use crate::ports::outbound::KeyProvider;
use parking_lot::RwLock;
use rs_01_epoch_clock::EPOCHS_PER_DAY;
use shared_crypto::{EpochKey, MacKey};
use shared_types::IdA;
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct InMemoryKeyStore {
    day_keys: RwLock<HashMap<i64, EpochKey>>,
    mac_keys: RwLock<HashMap<IdA, MacKey>>,
}

impl InMemoryKeyStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Day index of an epoch, counted from the service start.
    pub fn day_of_epoch(epoch_id: i32) -> i64 {
        i64::from(epoch_id).div_euclid(EPOCHS_PER_DAY)
    }

    /// Install the server key for a service day.
    pub fn insert_day_key(&self, day: i64, key: EpochKey) {
        self.day_keys.write().insert(day, key);
    }

    /// Generate random keys for days `first..=last`.
    pub fn generate_day_keys(&self, first: i64, last: i64) {
        let mut keys = self.day_keys.write();
        for day in first..=last {
            keys.insert(day, EpochKey::generate());
        }
    }

    /// Register the MAC key of an identity.
    pub fn insert_mac_key(&self, id_a: IdA, key: MacKey) {
        self.mac_keys.write().insert(id_a, key);
    }

    /// Forget an identity's MAC key (unregister).
    pub fn remove_mac_key(&self, id_a: &IdA) -> bool {
        self.mac_keys.write().remove(id_a).is_some()
    }
}

impl KeyProvider for InMemoryKeyStore {
    fn epoch_key(&self, epoch_id: i32) -> Option<EpochKey> {
        self.day_keys
            .read()
            .get(&Self::day_of_epoch(epoch_id))
            .cloned()
    }

    fn mac_key(&self, id_a: &IdA) -> Option<MacKey> {
        self.mac_keys.read().get(id_a).cloned()
    }
}
