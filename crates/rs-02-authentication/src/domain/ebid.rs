//! # EBID
//!
//! Ephemeral Bluetooth Identifier: one 8-byte cipher block.
//!
//! ```text
//! plaintext:  [ e2 e1 e0 | a0 a1 a2 a3 a4 ]
//!               epoch id   idA
//!             (low 24 bits, big-endian)
//! ```

use super::entities::{BluetoothIdentifier, EBID_LEN};
use super::errors::{AuthError, AuthResult};
use crate::ports::outbound::EbidCipher;
use shared_crypto::EpochKey;
use shared_types::{IdA, ID_A_LEN};

/// Pack an epoch id and identity into the EBID plaintext block.
///
/// Only the low 24 bits of the epoch id are kept.
pub fn pack(epoch_id: i32, id_a: &IdA) -> AuthResult<[u8; EBID_LEN]> {
    if epoch_id < 0 {
        return Err(AuthError::MalformedInput {
            field: "epoch_id",
            reason: format!("negative epoch id {}", epoch_id),
        });
    }
    let epoch = epoch_id.to_be_bytes();
    let mut block = [0u8; EBID_LEN];
    block[..3].copy_from_slice(&epoch[1..]);
    block[3..].copy_from_slice(id_a.as_bytes());
    Ok(block)
}

/// Inverse of `pack`. The epoch bytes are read as an unsigned 24-bit value.
pub fn unpack(block: &[u8; EBID_LEN]) -> BluetoothIdentifier {
    let epoch_id = i32::from_be_bytes([0, block[0], block[1], block[2]]);
    let mut id = [0u8; ID_A_LEN];
    id.copy_from_slice(&block[3..]);
    BluetoothIdentifier {
        epoch_id,
        id_a: IdA(id),
    }
}

/// Build the EBID for `id_a` at `epoch_id` under the epoch key.
pub fn encrypt_ebid<C: EbidCipher + ?Sized>(
    cipher: &C,
    key: &EpochKey,
    epoch_id: i32,
    id_a: &IdA,
) -> AuthResult<[u8; EBID_LEN]> {
    let block = pack(epoch_id, id_a)?;
    Ok(cipher.encrypt(key, &block)?)
}

/// Recover the identifier from an EBID.
///
/// A wrong key is not detected here: it yields an unrelated identifier that
/// the MAC check rejects afterwards.
pub fn decrypt_ebid<C: EbidCipher + ?Sized>(
    cipher: &C,
    key: &EpochKey,
    ebid: &[u8],
) -> AuthResult<BluetoothIdentifier> {
    let block: [u8; EBID_LEN] = ebid.try_into().map_err(|_| AuthError::MalformedInput {
        field: "ebid",
        reason: format!("expected {} bytes, got {}", EBID_LEN, ebid.len()),
    })?;
    let plaintext = cipher.decrypt(key, &block)?;
    Ok(unpack(&plaintext))
}
