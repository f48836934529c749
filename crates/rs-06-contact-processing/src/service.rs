//! # Contact Processing Service
//!
//! Per uploaded contact:
//!
//! 1. Reception epoch from the first HELLO's collection time
//! 2. EBID decryption with the keys of the reception epoch and its neighbours
//! 3. Per-HELLO MAC, time16 and epoch checks; failing messages are dropped
//! 4. Scoring of the surviving messages
//! 5. Score appended to the emitter's exposition for the EBID epoch
//!
//! A contact either adds exactly one score or leaves the store untouched.

use crate::config::ContactConfig;
use crate::domain::{
    epoch_matches, time16_within_tolerance, Contact, ContactError, ContactOutcome, ContactResult,
    HelloMessage, RssiScoringV2, ScoringStrategy,
};
use crate::ports::inbound::ContactProcessingApi;
use rs_01_epoch_clock::EpochClock;
use rs_02_authentication::{AuthError, AuthenticationApi, BluetoothIdentifier};
use shared_types::RegistrationStore;
use tracing::{debug, info, warn};

/// Contact processing service.
pub struct ContactProcessingService<A, S, G = RssiScoringV2>
where
    A: AuthenticationApi,
    S: RegistrationStore,
    G: ScoringStrategy,
{
    clock: EpochClock,
    auth: A,
    store: S,
    scoring: G,
    config: ContactConfig,
}

impl<A, S> ContactProcessingService<A, S, RssiScoringV2>
where
    A: AuthenticationApi,
    S: RegistrationStore,
{
    /// Service scoring with [`RssiScoringV2`] built from `config.scoring`.
    pub fn new(
        clock: EpochClock,
        auth: A,
        store: S,
        config: ContactConfig,
    ) -> ContactResult<Self> {
        let scoring = RssiScoringV2::new(config.scoring.clone())?;
        Ok(Self::with_scoring(clock, auth, store, scoring, config))
    }
}

impl<A, S, G> ContactProcessingService<A, S, G>
where
    A: AuthenticationApi,
    S: RegistrationStore,
    G: ScoringStrategy,
{
    pub fn with_scoring(
        clock: EpochClock,
        auth: A,
        store: S,
        scoring: G,
        config: ContactConfig,
    ) -> Self {
        Self {
            clock,
            auth,
            store,
            scoring,
            config,
        }
    }

    pub fn config(&self) -> &ContactConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Try the key of the reception epoch, then the previous and next ones.
    fn decrypt(
        &self,
        contact: &Contact,
        reception_epoch: i32,
    ) -> ContactResult<BluetoothIdentifier> {
        let mut last_error = None;
        let candidates = [
            Some(reception_epoch),
            reception_epoch.checked_sub(1),
            reception_epoch.checked_add(1),
        ];
        for candidate in candidates.into_iter().flatten() {
            match self.auth.decrypt_ebid(candidate, &contact.ebid) {
                Ok(bid) if epoch_matches(reception_epoch, bid.epoch_id) => return Ok(bid),
                Ok(bid) => {
                    last_error = Some(format!(
                        "decrypted epoch {} too far from reception epoch {}",
                        bid.epoch_id, reception_epoch
                    ));
                }
                Err(err) => last_error = Some(err.to_string()),
            }
        }
        Err(ContactError::UndecryptableEbid(
            last_error.unwrap_or_else(|| "no candidate key".to_string()),
        ))
    }

    /// Whether `hello` passes MAC, time16 and epoch checks. Only an unknown
    /// emitter is an error; every other failure drops the message.
    fn accept(
        &self,
        contact: &Contact,
        bid: &BluetoothIdentifier,
        hello: &HelloMessage,
    ) -> ContactResult<bool> {
        match self.auth.verify_hello_mac(
            &bid.id_a,
            contact.ecc,
            &contact.ebid,
            hello.time16,
            &hello.mac,
        ) {
            Ok(()) => {}
            Err(AuthError::UnknownRegistration(id)) => {
                return Err(ContactError::UnknownRegistration(id))
            }
            Err(err) => {
                debug!(id = %bid.id_a, "[rs-06] Dropping HELLO: {}", err);
                return Ok(false);
            }
        }

        let received_time16 = hello.received_time16();
        if !time16_within_tolerance(
            hello.time16,
            received_time16,
            self.config.hello_time_tolerance_secs,
        ) {
            debug!(
                id = %bid.id_a,
                time16 = hello.time16,
                received = received_time16,
                "[rs-06] Dropping HELLO outside time tolerance"
            );
            return Ok(false);
        }

        let received_epoch = match self.clock.at_ntp_timestamp(hello.time_collected_on_device) {
            Ok(received) => received.as_epoch_id(),
            Err(err) => {
                debug!(id = %bid.id_a, "[rs-06] Dropping HELLO: {}", err);
                return Ok(false);
            }
        };
        if !epoch_matches(received_epoch, bid.epoch_id) {
            debug!(
                id = %bid.id_a,
                received_epoch,
                ebid_epoch = bid.epoch_id,
                "[rs-06] Dropping HELLO received outside the EBID epoch"
            );
            return Ok(false);
        }
        Ok(true)
    }
}

impl<A, S, G> ContactProcessingApi for ContactProcessingService<A, S, G>
where
    A: AuthenticationApi,
    S: RegistrationStore,
    G: ScoringStrategy,
{
    fn process(&self, contact: &Contact) -> ContactResult<ContactOutcome> {
        let first = contact.hellos.first().ok_or(ContactError::NoMessages)?;
        let reception_epoch = self
            .clock
            .at_ntp_timestamp(first.time_collected_on_device)?
            .as_epoch_id();

        let bid = self.decrypt(contact, reception_epoch).map_err(|err| {
            warn!(reception_epoch, "[rs-06] Discarding contact: {}", err);
            err
        })?;

        let mut registration = self
            .store
            .find(&bid.id_a)?
            .ok_or_else(|| ContactError::UnknownRegistration(bid.id_a.to_string()))?;

        let mut accepted = Vec::with_capacity(contact.hellos.len());
        for hello in &contact.hellos {
            if self.accept(contact, &bid, hello)? {
                accepted.push(*hello);
            }
        }
        let dropped = contact.hellos.len() - accepted.len();
        if accepted.is_empty() {
            warn!(
                id = %bid.id_a,
                dropped,
                "[rs-06] Discarding contact, every HELLO was rejected"
            );
            return Err(ContactError::NoValidMessages);
        }

        let score = self.scoring.score(&accepted)?;
        registration.add_exposure_score(bid.epoch_id, score.rssi_score);
        self.store.save(&registration)?;

        info!(
            id = %bid.id_a,
            epoch = bid.epoch_id,
            score = score.rssi_score,
            accepted = accepted.len(),
            dropped,
            "[rs-06] Contact scored"
        );

        Ok(ContactOutcome {
            id: bid.id_a.as_u64(),
            epoch_id: bid.epoch_id,
            score,
            accepted_messages: accepted.len(),
            dropped_messages: dropped,
        })
    }
}
