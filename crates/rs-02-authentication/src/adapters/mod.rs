//! Adapters for the authentication codec

pub mod memory;
pub mod skinny;

pub use memory::InMemoryKeyStore;
pub use skinny::Skinny64EbidCipher;
