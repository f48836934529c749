//! Uploaded contact records

use rs_02_authentication::{EBID_LEN, HELLO_MAC_LEN};
use serde::{Deserialize, Serialize};

/// One HELLO beacon as recorded by the receiving device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HelloMessage {
    /// Low 16 bits of the emitter's NTP seconds, carried in the beacon.
    pub time16: u16,
    pub mac: [u8; HELLO_MAC_LEN],
    /// Calibrated RSSI in dBm.
    pub rssi_calibrated: i32,
    /// Reception time on the receiving device, NTP seconds.
    pub time_collected_on_device: i64,
}

impl HelloMessage {
    /// Low 16 bits of the reception time.
    pub fn received_time16(&self) -> u16 {
        (self.time_collected_on_device & 0xFFFF) as u16
    }
}

/// All HELLO messages received from one EBID.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub ebid: [u8; EBID_LEN],
    pub ecc: u8,
    pub hellos: Vec<HelloMessage>,
}

/// Score of one contact.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScoringResult {
    /// Exposure score added to the emitter's exposition.
    pub rssi_score: f64,
    /// Last minute of the epoch with messages in its window.
    pub duration_minutes: u32,
    /// Minutes with a strictly positive risk.
    pub nb_contacts: u32,
}

/// Result of a processed contact.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactOutcome {
    /// Primary key of the exposed registration.
    pub id: u64,
    /// Epoch the exposure is recorded under.
    pub epoch_id: i32,
    pub score: ScoringResult,
    pub accepted_messages: usize,
    pub dropped_messages: usize,
}
