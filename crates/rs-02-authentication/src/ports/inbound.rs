//! # Inbound Ports (Driving Ports / API)
//!
//! Implementations must be thread-safe (`Send + Sync`).

use crate::domain::{
    AuthBundle, AuthResult, BluetoothIdentifier, VerifiedRequest, EBID_LEN, HELLO_MAC_LEN,
};
use shared_types::IdA;
use std::sync::Arc;

/// Authentication codec API.
pub trait AuthenticationApi: Send + Sync {
    /// Build the EBID of `id_a` for `epoch_id`.
    fn generate_ebid(&self, epoch_id: i32, id_a: &IdA) -> AuthResult<[u8; EBID_LEN]>;

    /// Decrypt an EBID with the key of `epoch_id`.
    fn decrypt_ebid(&self, epoch_id: i32, ebid: &[u8]) -> AuthResult<BluetoothIdentifier>;

    /// Verify an authenticated request bundle.
    ///
    /// Checks, in order: buffer lengths, drift window, EBID decryption and
    /// epoch consistency, MAC.
    fn verify(&self, bundle: &AuthBundle) -> AuthResult<VerifiedRequest>;

    /// Verify a HELLO MAC with the MAC key of its emitter.
    fn verify_hello_mac(
        &self,
        emitter: &IdA,
        ecc: u8,
        ebid: &[u8; EBID_LEN],
        time16: u16,
        mac: &[u8; HELLO_MAC_LEN],
    ) -> AuthResult<()>;
}

impl<T: AuthenticationApi + ?Sized> AuthenticationApi for Arc<T> {
    fn generate_ebid(&self, epoch_id: i32, id_a: &IdA) -> AuthResult<[u8; EBID_LEN]> {
        (**self).generate_ebid(epoch_id, id_a)
    }

    fn decrypt_ebid(&self, epoch_id: i32, ebid: &[u8]) -> AuthResult<BluetoothIdentifier> {
        (**self).decrypt_ebid(epoch_id, ebid)
    }

    fn verify(&self, bundle: &AuthBundle) -> AuthResult<VerifiedRequest> {
        (**self).verify(bundle)
    }

    fn verify_hello_mac(
        &self,
        emitter: &IdA,
        ecc: u8,
        ebid: &[u8; EBID_LEN],
        time16: u16,
        mac: &[u8; HELLO_MAC_LEN],
    ) -> AuthResult<()> {
        (**self).verify_hello_mac(emitter, ecc, ebid, time16, mac)
    }
}
