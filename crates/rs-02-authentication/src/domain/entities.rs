//! # Authentication Entities
//!
//! Wire-level structures for authenticated requests.

use shared_types::IdA;

/// EBID length in bytes.
pub const EBID_LEN: usize = 8;

/// Time32 length in bytes.
pub const TIME_LEN: usize = 4;

/// Truncated HELLO MAC length in bytes.
pub const HELLO_MAC_LEN: usize = 5;

/// Full request MAC length in bytes.
pub const REQUEST_MAC_LEN: usize = 32;

/// Request types, each bound to a one-byte MAC salt.
///
/// Salt values are protocol constants shared with deployed clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestType {
    Hello,
    Status,
    Unregister,
    DeleteHistory,
}

impl RequestType {
    /// MAC salt byte.
    pub const fn salt(self) -> u8 {
        match self {
            RequestType::Hello => 0x01,
            RequestType::Status => 0x02,
            RequestType::Unregister => 0x03,
            RequestType::DeleteHistory => 0x04,
        }
    }

    /// Reverse lookup of `salt`.
    pub const fn from_salt(salt: u8) -> Option<Self> {
        match salt {
            0x01 => Some(RequestType::Hello),
            0x02 => Some(RequestType::Status),
            0x03 => Some(RequestType::Unregister),
            0x04 => Some(RequestType::DeleteHistory),
            _ => None,
        }
    }

    /// MAC length carried on the wire for this request type.
    pub const fn mac_len(self) -> usize {
        match self {
            RequestType::Hello => HELLO_MAC_LEN,
            RequestType::Status | RequestType::Unregister | RequestType::DeleteHistory => {
                REQUEST_MAC_LEN
            }
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            RequestType::Hello => "hello",
            RequestType::Status => "status",
            RequestType::Unregister => "unregister",
            RequestType::DeleteHistory => "delete_history",
        }
    }
}

/// Authentication fields of one request, as received. Never persisted.
///
/// Buffers are kept as raw bytes so length validation happens in one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthBundle {
    pub request_type: RequestType,
    pub ebid: Vec<u8>,
    pub epoch_id: i32,
    pub time: Vec<u8>,
    pub mac: Vec<u8>,
}

/// Plaintext content of an EBID.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BluetoothIdentifier {
    /// Epoch id, 24 bits on the wire.
    pub epoch_id: i32,
    pub id_a: IdA,
}

/// Outcome of a successful verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerifiedRequest {
    pub request_type: RequestType,
    pub id_a: IdA,
    pub epoch_id: i32,
}
