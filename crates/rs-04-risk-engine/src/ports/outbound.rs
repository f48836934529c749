//! # Outbound Ports (Driven Ports / SPI)

use rs_01_epoch_clock::EpochInstant;

/// Blurs the stored last-contact date.
pub trait ContactDateRandomizer: Send + Sync {
    /// Candidate contact date for a contact at `contact`, seen from `reference`.
    fn randomize(&self, contact: EpochInstant, reference: EpochInstant) -> EpochInstant;
}
