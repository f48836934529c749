//! # Outbound Ports (Driven Ports / SPI)
//!
//! Cipher strategy and key lookup. Key generation, rotation and storage
//! happen outside the core; keys arrive as opaque byte strings.

use shared_crypto::{CryptoError, EpochKey, MacKey};
use shared_types::IdA;
use std::sync::Arc;

/// 8-byte block cipher used for EBIDs.
pub trait EbidCipher: Send + Sync {
    fn encrypt(&self, key: &EpochKey, block: &[u8; 8]) -> Result<[u8; 8], CryptoError>;

    fn decrypt(&self, key: &EpochKey, block: &[u8; 8]) -> Result<[u8; 8], CryptoError>;
}

/// Key material lookup.
pub trait KeyProvider: Send + Sync {
    /// Server key used to encrypt EBIDs of `epoch_id`.
    fn epoch_key(&self, epoch_id: i32) -> Option<EpochKey>;

    /// MAC key of a registration.
    fn mac_key(&self, id_a: &IdA) -> Option<MacKey>;
}

impl<T: KeyProvider + ?Sized> KeyProvider for Arc<T> {
    fn epoch_key(&self, epoch_id: i32) -> Option<EpochKey> {
        (**self).epoch_key(epoch_id)
    }

    fn mac_key(&self, id_a: &IdA) -> Option<MacKey> {
        (**self).mac_key(id_a)
    }
}
