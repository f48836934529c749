//! # Registration Store Port
//!
//! Persistence is an external collaborator. The batch orchestrator and the
//! status endpoints only need keyed access and ordered paging over the 40-bit
//! primary-key space.

use crate::entities::{IdA, Registration, MAX_ID};
use crate::errors::StoreError;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Inclusive primary-key range `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdRange {
    pub min: u64,
    pub max: u64,
}

impl IdRange {
    /// Create a range; `min > max` yields an empty range.
    pub fn new(min: u64, max: u64) -> Self {
        Self { min, max }
    }

    /// The whole identifier space.
    pub fn full() -> Self {
        Self { min: 0, max: MAX_ID }
    }

    /// Whether `id` falls inside the range.
    pub fn contains(&self, id: u64) -> bool {
        self.min <= id && id <= self.max
    }

    /// Number of keys in the range.
    pub fn len(&self) -> u64 {
        if self.min > self.max {
            0
        } else {
            (self.max - self.min).saturating_add(1)
        }
    }

    /// Whether the range holds no keys.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Registration persistence.
///
/// Implementations must be safe to call from several batch workers at once.
/// Workers never share a registration, so per-record atomicity is enough.
pub trait RegistrationStore: Send + Sync {
    /// Insert a new registration.
    fn insert(&self, registration: Registration) -> Result<(), StoreError>;

    /// Find a registration by identity.
    fn find(&self, id_a: &IdA) -> Result<Option<Registration>, StoreError>;

    /// Replace a registration atomically.
    fn save(&self, registration: &Registration) -> Result<(), StoreError>;

    /// Delete a registration, returning whether it existed.
    fn delete(&self, id_a: &IdA) -> Result<bool, StoreError>;

    /// Count registrations whose key lies in `range`.
    fn count_in_range(&self, range: IdRange) -> Result<u64, StoreError>;

    /// Up to `limit` registrations in key order, within `range`, with key
    /// strictly greater than `after` when given.
    fn page(
        &self,
        range: IdRange,
        after: Option<u64>,
        limit: usize,
    ) -> Result<Vec<Registration>, StoreError>;
}

impl<T: RegistrationStore + ?Sized> RegistrationStore for Arc<T> {
    fn insert(&self, registration: Registration) -> Result<(), StoreError> {
        (**self).insert(registration)
    }

    fn find(&self, id_a: &IdA) -> Result<Option<Registration>, StoreError> {
        (**self).find(id_a)
    }

    fn save(&self, registration: &Registration) -> Result<(), StoreError> {
        (**self).save(registration)
    }

    fn delete(&self, id_a: &IdA) -> Result<bool, StoreError> {
        (**self).delete(id_a)
    }

    fn count_in_range(&self, range: IdRange) -> Result<u64, StoreError> {
        (**self).count_in_range(range)
    }

    fn page(
        &self,
        range: IdRange,
        after: Option<u64>,
        limit: usize,
    ) -> Result<Vec<Registration>, StoreError> {
        (**self).page(range, after, limit)
    }
}

/// In-memory store keyed by primary key.
#[derive(Debug, Default)]
pub struct InMemoryRegistrationStore {
    records: RwLock<BTreeMap<u64, Registration>>,
}

impl InMemoryRegistrationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of registrations.
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }
}

impl RegistrationStore for InMemoryRegistrationStore {
    fn insert(&self, registration: Registration) -> Result<(), StoreError> {
        let key = registration.id_a.as_u64();
        let mut records = self.records.write();
        if records.contains_key(&key) {
            return Err(StoreError::AlreadyExists(registration.id_a.to_string()));
        }
        records.insert(key, registration);
        Ok(())
    }

    fn find(&self, id_a: &IdA) -> Result<Option<Registration>, StoreError> {
        Ok(self.records.read().get(&id_a.as_u64()).cloned())
    }

    fn save(&self, registration: &Registration) -> Result<(), StoreError> {
        let key = registration.id_a.as_u64();
        let mut records = self.records.write();
        match records.get_mut(&key) {
            Some(existing) => {
                *existing = registration.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound(registration.id_a.to_string())),
        }
    }

    fn delete(&self, id_a: &IdA) -> Result<bool, StoreError> {
        Ok(self.records.write().remove(&id_a.as_u64()).is_some())
    }

    fn count_in_range(&self, range: IdRange) -> Result<u64, StoreError> {
        if range.is_empty() {
            return Ok(0);
        }
        Ok(self.records.read().range(range.min..=range.max).count() as u64)
    }

    fn page(
        &self,
        range: IdRange,
        after: Option<u64>,
        limit: usize,
    ) -> Result<Vec<Registration>, StoreError> {
        let start = match after {
            Some(last) if last >= range.max => return Ok(Vec::new()),
            Some(last) => range.min.max(last + 1),
            None => range.min,
        };
        if start > range.max {
            return Ok(Vec::new());
        }
        Ok(self
            .records
            .read()
            .range(start..=range.max)
            .take(limit)
            .map(|(_, r)| r.clone())
            .collect())
    }
}
