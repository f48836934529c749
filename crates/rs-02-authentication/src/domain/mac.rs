//! # Request and HELLO MACs
//!
//! ```text
//! STATUS / UNREGISTER / DELETE_HISTORY (17 bytes in, 32 bytes out)
//!   salt(1) ‖ ebid(8) ‖ epoch_id BE(4) ‖ time32(4)
//!
//! HELLO (12 bytes in, 5 bytes out)
//!   0x01(1) ‖ ecc(1) ‖ ebid(8) ‖ time16 BE(2)
//! ```
//!
//! All comparisons go through `shared_crypto::verify_hmac_sha256`, which is
//! constant-time over the MAC bytes.

use super::entities::{AuthBundle, RequestType, EBID_LEN, HELLO_MAC_LEN, TIME_LEN};
use super::errors::{AuthError, AuthResult};
use shared_crypto::{truncated_hmac_sha256, verify_hmac_sha256, CryptoError, MacKey};

/// Request MAC input length.
pub const REQUEST_MAC_INPUT_LEN: usize = 1 + EBID_LEN + 4 + TIME_LEN;

/// HELLO MAC input length.
pub const HELLO_MAC_INPUT_LEN: usize = 1 + 1 + EBID_LEN + 2;

fn key_error(err: CryptoError) -> AuthError {
    AuthError::MalformedInput {
        field: "mac_key",
        reason: err.to_string(),
    }
}

/// Assemble the 17-byte request MAC input.
pub fn request_mac_input(
    request_type: RequestType,
    ebid: &[u8; EBID_LEN],
    epoch_id: i32,
    time: &[u8; TIME_LEN],
) -> AuthResult<[u8; REQUEST_MAC_INPUT_LEN]> {
    if request_type == RequestType::Hello {
        return Err(AuthError::MalformedInput {
            field: "request_type",
            reason: "HELLO messages use the HELLO MAC layout".to_string(),
        });
    }
    let mut input = [0u8; REQUEST_MAC_INPUT_LEN];
    input[0] = request_type.salt();
    input[1..9].copy_from_slice(ebid);
    input[9..13].copy_from_slice(&epoch_id.to_be_bytes());
    input[13..].copy_from_slice(time);
    Ok(input)
}

/// Assemble the 12-byte HELLO MAC input.
pub fn hello_mac_input(ecc: u8, ebid: &[u8; EBID_LEN], time16: u16) -> [u8; HELLO_MAC_INPUT_LEN] {
    let mut input = [0u8; HELLO_MAC_INPUT_LEN];
    input[0] = RequestType::Hello.salt();
    input[1] = ecc;
    input[2..10].copy_from_slice(ebid);
    input[10..].copy_from_slice(&time16.to_be_bytes());
    input
}

pub fn compute_request_mac(
    key: &MacKey,
    request_type: RequestType,
    ebid: &[u8; EBID_LEN],
    epoch_id: i32,
    time: &[u8; TIME_LEN],
) -> AuthResult<Vec<u8>> {
    let input = request_mac_input(request_type, ebid, epoch_id, time)?;
    truncated_hmac_sha256(key.as_bytes(), &[&input], request_type.mac_len()).map_err(key_error)
}

/// Recompute and compare the request MAC.
///
/// # Errors
///
/// `InvalidMac` on any mismatch, including a MAC of the wrong length.
pub fn verify_request_mac(
    key: &MacKey,
    request_type: RequestType,
    ebid: &[u8; EBID_LEN],
    epoch_id: i32,
    time: &[u8; TIME_LEN],
    mac: &[u8],
) -> AuthResult<()> {
    if mac.len() != request_type.mac_len() {
        return Err(AuthError::InvalidMac);
    }
    let input = request_mac_input(request_type, ebid, epoch_id, time)?;
    match verify_hmac_sha256(key.as_bytes(), &[&input], mac).map_err(key_error)? {
        true => Ok(()),
        false => Err(AuthError::InvalidMac),
    }
}

pub fn compute_hello_mac(
    key: &MacKey,
    ecc: u8,
    ebid: &[u8; EBID_LEN],
    time16: u16,
) -> AuthResult<[u8; HELLO_MAC_LEN]> {
    let input = hello_mac_input(ecc, ebid, time16);
    let mac = truncated_hmac_sha256(key.as_bytes(), &[&input], HELLO_MAC_LEN).map_err(key_error)?;
    let mut out = [0u8; HELLO_MAC_LEN];
    out.copy_from_slice(&mac);
    Ok(out)
}

pub fn verify_hello_mac(
    key: &MacKey,
    ecc: u8,
    ebid: &[u8; EBID_LEN],
    time16: u16,
    mac: &[u8; HELLO_MAC_LEN],
) -> AuthResult<()> {
    let input = hello_mac_input(ecc, ebid, time16);
    match verify_hmac_sha256(key.as_bytes(), &[&input], mac).map_err(key_error)? {
        true => Ok(()),
        false => Err(AuthError::InvalidMac),
    }
}

/// Client-side construction of a signed bundle.
pub fn sign_bundle(
    key: &MacKey,
    request_type: RequestType,
    ebid: [u8; EBID_LEN],
    epoch_id: i32,
    time: [u8; TIME_LEN],
) -> AuthResult<AuthBundle> {
    let mac = compute_request_mac(key, request_type, &ebid, epoch_id, &time)?;
    Ok(AuthBundle {
        request_type,
        ebid: ebid.to_vec(),
        epoch_id,
        time: time.to_vec(),
        mac,
    })
}
