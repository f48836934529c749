//! Skinny-64-192 EBID cipher, the deployed choice.

use crate::ports::outbound::EbidCipher;
use shared_crypto::{CryptoError, EpochKey, Skinny64};

/// EBID cipher backed by Skinny-64-192 with a 24-byte epoch key.
#[derive(Debug, Clone, Copy, Default)]
pub struct Skinny64EbidCipher;

impl EbidCipher for Skinny64EbidCipher {
    fn encrypt(&self, key: &EpochKey, block: &[u8; 8]) -> Result<[u8; 8], CryptoError> {
        Ok(Skinny64::new(key.as_bytes())?.encrypt_block(block))
    }

    fn decrypt(&self, key: &EpochKey, block: &[u8; 8]) -> Result<[u8; 8], CryptoError> {
        Ok(Skinny64::new(key.as_bytes())?.decrypt_block(block))
    }
}
