//! # HMAC-SHA256 Message Authentication
//!
//! MACs are computed over a sequence of byte slices (salt, EBID, epoch, time)
//! and may be truncated to a wire-specific prefix. Verification always compares
//! the full truncated prefix in constant time.

use crate::CryptoError;
use hmac::{Hmac, Mac};
use sha2::Sha256;
use subtle::ConstantTimeEq;

type HmacSha256 = Hmac<Sha256>;

/// Full HMAC-SHA256 output length in bytes.
pub const HMAC_SHA256_LEN: usize = 32;

/// Compute HMAC-SHA256 over the concatenation of `parts`.
///
/// # Errors
///
/// Returns `CryptoError::InvalidKeyLength` for an empty key.
pub fn hmac_sha256(key: &[u8], parts: &[&[u8]]) -> Result<[u8; HMAC_SHA256_LEN], CryptoError> {
    if key.is_empty() {
        return Err(CryptoError::InvalidKeyLength {
            expected: HMAC_SHA256_LEN,
            actual: 0,
        });
    }
    let mut mac = HmacSha256::new_from_slice(key)
        .map_err(|e| CryptoError::InvalidInput(e.to_string()))?;
    for part in parts {
        mac.update(part);
    }
    Ok(mac.finalize().into_bytes().into())
}

/// Compute HMAC-SHA256 and keep the first `len` bytes.
///
/// # Errors
///
/// Returns `CryptoError::InvalidMacLength` if `len` is 0 or above 32.
pub fn truncated_hmac_sha256(
    key: &[u8],
    parts: &[&[u8]],
    len: usize,
) -> Result<Vec<u8>, CryptoError> {
    if len == 0 || len > HMAC_SHA256_LEN {
        return Err(CryptoError::InvalidMacLength(len));
    }
    let full = hmac_sha256(key, parts)?;
    Ok(full[..len].to_vec())
}

/// Recompute the MAC and compare it to `expected` in constant time.
///
/// The truncation length is taken from `expected`. A length outside `1..=32`
/// is an error, not a mismatch.
pub fn verify_hmac_sha256(
    key: &[u8],
    parts: &[&[u8]],
    expected: &[u8],
) -> Result<bool, CryptoError> {
    let computed = truncated_hmac_sha256(key, parts, expected.len())?;
    Ok(constant_time_eq(&computed, expected))
}

/// Constant-time equality. Lengths are compared first; they are public.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && bool::from(a.ct_eq(b))
}
