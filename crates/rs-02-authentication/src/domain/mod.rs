//! Domain layer for the authentication codec

pub mod drift;
pub mod ebid;
pub mod entities;
pub mod errors;
pub mod mac;

pub use drift::DriftPolicy;
pub use entities::{
    AuthBundle, BluetoothIdentifier, RequestType, VerifiedRequest, EBID_LEN, HELLO_MAC_LEN,
    REQUEST_MAC_LEN, TIME_LEN,
};
pub use errors::{AuthError, AuthResult};
