//! # Inbound Ports (Driving Ports / API)

use crate::domain::{Contact, ContactOutcome, ContactResult};
use std::sync::Arc;

/// Ingestion of one uploaded contact.
pub trait ContactProcessingApi: Send + Sync {
    /// Validate the HELLO messages of `contact`, score the survivors and
    /// append the score to the emitter's registration.
    fn process(&self, contact: &Contact) -> ContactResult<ContactOutcome>;
}

impl<T: ContactProcessingApi + ?Sized> ContactProcessingApi for Arc<T> {
    fn process(&self, contact: &Contact) -> ContactResult<ContactOutcome> {
        (**self).process(contact)
    }
}
