//! # rs-02-authentication
//!
//! Authentication codec for every message a device sends: EBID encryption
//! under the per-epoch server key, per-request MACs, HELLO MACs and the
//! clock-drift window.
//!
//! ## Byte Layouts
//!
//! ```text
//! EBID plaintext (8 B):    epoch_id (3 B, BE, low 24 bits) ‖ id_a (5 B)
//! Request MAC input (17 B): salt (1 B) ‖ ebid (8 B) ‖ epoch_id (4 B, BE) ‖ time32 (4 B)
//! HELLO MAC input (12 B):   0x01 ‖ ecc (1 B) ‖ ebid (8 B) ‖ time16 (2 B, BE)
//! ```
//!
//! | Request         | Salt | MAC length |
//! |-----------------|------|------------|
//! | HELLO           | 0x01 | 5          |
//! | STATUS          | 0x02 | 32         |
//! | UNREGISTER      | 0x03 | 32         |
//! | DELETE_HISTORY  | 0x04 | 32         |
//!
//! ## Verification Order
//!
//! 1. Buffer lengths and non-negative epoch id
//! 2. Drift window (`DriftPolicy`), stale checked before future
//! 3. EBID decryption and epoch consistency
//! 4. MAC, compared in constant time
//!
//! ## Architecture
//!
//! Hexagonal: the block cipher and the key lookup are outbound ports so the
//! key store can live behind an HSM in production.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::{InMemoryKeyStore, Skinny64EbidCipher};
pub use domain::{
    AuthBundle, AuthError, AuthResult, BluetoothIdentifier, DriftPolicy, RequestType,
    VerifiedRequest, EBID_LEN, HELLO_MAC_LEN, REQUEST_MAC_LEN, TIME_LEN,
};
pub use ports::inbound::AuthenticationApi;
pub use ports::outbound::{EbidCipher, KeyProvider};
pub use service::AuthenticationService;
