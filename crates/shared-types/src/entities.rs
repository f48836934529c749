//! # Core Domain Entities
//!
//! Registration state owned by the risk engine and the status endpoints.
//!
//! ## Clusters
//!
//! - **Identity**: `IdA`
//! - **Exposure**: `EpochExposition`, `Registration`

use serde::{Deserialize, Serialize};

/// Length of a permanent identifier in bytes.
pub const ID_A_LEN: usize = 5;

/// Largest value of the 40-bit identifier space.
pub const MAX_ID: u64 = (1 << (8 * ID_A_LEN)) - 1;

/// Permanent, never-transmitted-in-clear identity of a registration.
///
/// The 5 bytes read as a big-endian integer give the registration's primary
/// key, so the whole id space is `[0, 2^40)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct IdA(pub [u8; ID_A_LEN]);

impl IdA {
    /// Primary key of this identity.
    pub fn as_u64(&self) -> u64 {
        self.0.iter().fold(0u64, |acc, b| (acc << 8) | u64::from(*b))
    }

    /// Identity for a primary key; only the low 40 bits are kept.
    pub fn from_u64(id: u64) -> Self {
        let bytes = id.to_be_bytes();
        let mut out = [0u8; ID_A_LEN];
        out.copy_from_slice(&bytes[8 - ID_A_LEN..]);
        Self(out)
    }

    /// Random identity, as allocated at enrollment.
    pub fn random() -> Self {
        let mut bytes = [0u8; ID_A_LEN];
        rand::RngCore::fill_bytes(&mut rand::thread_rng(), &mut bytes);
        Self(bytes)
    }

    /// Raw bytes.
    pub fn as_bytes(&self) -> &[u8; ID_A_LEN] {
        &self.0
    }
}

impl std::fmt::Display for IdA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for b in self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

/// Exposure scores recorded for one registration in one epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct EpochExposition {
    /// Epoch in which the contacts happened.
    pub epoch_id: i32,
    /// One score per scored contact, in ingestion order.
    pub scores: Vec<f64>,
}

impl EpochExposition {
    /// Create an exposition for a single epoch.
    pub fn new(epoch_id: i32, scores: Vec<f64>) -> Self {
        Self { epoch_id, scores }
    }
}

/// One enrolled device.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    /// Permanent identity (primary key).
    pub id_a: IdA,
    /// Whether the registration is currently considered at risk.
    pub at_risk: bool,
    /// Whether the client has been told about its current risk.
    pub notified: bool,
    /// Epoch of the last accepted status request (0 when none).
    pub last_status_request_epoch: i32,
    /// Most recent epoch that contributed to a risk decision (0 when none).
    pub latest_risk_epoch: i32,
    /// NTP seconds, truncated to the day (0 when unknown).
    pub last_contact_timestamp: i64,
    /// Exposure scores per epoch.
    pub exposed_epochs: Vec<EpochExposition>,
    /// New scores were appended since the last batch pass.
    pub outdated_risk: bool,
}

impl Registration {
    /// Fresh registration with no exposure.
    pub fn new(id_a: IdA) -> Self {
        Self {
            id_a,
            at_risk: false,
            notified: false,
            last_status_request_epoch: 0,
            latest_risk_epoch: 0,
            last_contact_timestamp: 0,
            exposed_epochs: Vec::new(),
            outdated_risk: false,
        }
    }

    /// Append a score to the exposition of `epoch_id`, creating it if absent.
    pub fn add_exposure_score(&mut self, epoch_id: i32, score: f64) {
        match self
            .exposed_epochs
            .iter_mut()
            .find(|e| e.epoch_id == epoch_id)
        {
            Some(existing) => existing.scores.push(score),
            None => self
                .exposed_epochs
                .push(EpochExposition::new(epoch_id, vec![score])),
        }
        self.outdated_risk = true;
    }

    /// Merge expositions sharing an epoch id, keeping first-seen order.
    pub fn merge_duplicate_epochs(&mut self) {
        let mut merged: Vec<EpochExposition> = Vec::with_capacity(self.exposed_epochs.len());
        for exposition in self.exposed_epochs.drain(..) {
            match merged.iter_mut().find(|e| e.epoch_id == exposition.epoch_id) {
                Some(existing) => existing.scores.extend(exposition.scores),
                None => merged.push(exposition),
            }
        }
        self.exposed_epochs = merged;
    }
}
