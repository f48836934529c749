//! # Status Service
//!
//! Every request is authenticated for its own endpoint before the
//! registration is loaded, so a bundle signed for one endpoint never acts on
//! another.

use crate::config::StatusConfig;
use crate::domain::{check_throttling, RiskStatus};
use crate::error::{StatusError, StatusResult};
use crate::metrics;
use crate::ports::inbound::StatusApi;
use rs_01_epoch_clock::EpochClock;
use rs_02_authentication::{AuthBundle, AuthenticationApi, RequestType};
use shared_types::{Registration, RegistrationStore};
use tracing::{debug, info};

/// Status, delete-history and unregister handling.
pub struct StatusService<A: AuthenticationApi, S: RegistrationStore> {
    clock: EpochClock,
    auth: A,
    store: S,
    config: StatusConfig,
}

impl<A: AuthenticationApi, S: RegistrationStore> StatusService<A, S> {
    pub fn new(clock: EpochClock, auth: A, store: S, config: StatusConfig) -> Self {
        Self {
            clock,
            auth,
            store,
            config,
        }
    }

    pub fn config(&self) -> &StatusConfig {
        &self.config
    }

    /// Verify `bundle` for `expected` and load its registration.
    fn authenticate(
        &self,
        bundle: &AuthBundle,
        expected: RequestType,
    ) -> StatusResult<Registration> {
        if bundle.request_type != expected {
            return Err(StatusError::wrong_request_type(expected, bundle.request_type));
        }
        let verified = self.auth.verify(bundle)?;
        self.store
            .find(&verified.id_a)?
            .ok_or_else(|| StatusError::UnknownRegistration(verified.id_a.to_string()))
    }
}

impl<A: AuthenticationApi, S: RegistrationStore> StatusApi for StatusService<A, S> {
    fn status(&self, bundle: &AuthBundle) -> StatusResult<RiskStatus> {
        let registration = self.authenticate(bundle, RequestType::Status)?;

        let now = self.clock.now();
        let previous = self.clock.at_epoch(registration.last_status_request_epoch);
        if let Err(err) = check_throttling(
            &previous,
            &now,
            self.config.min_epochs_between_status_requests,
        ) {
            info!(
                id = %registration.id_a,
                previous_epoch = registration.last_status_request_epoch,
                current_epoch = now.as_epoch_id(),
                "[rs-07] Discarding status request: {}",
                err
            );
            metrics::record_status_request("throttled");
            return Err(err);
        }

        let mut updated = registration.clone();
        updated.last_status_request_epoch = now.as_epoch_id();
        updated.notified = registration.notified || registration.at_risk;
        self.store.save(&updated)?;

        if !registration.at_risk {
            metrics::record_status_request("none");
            return Ok(RiskStatus::None);
        }

        if !registration.notified {
            info!(id = %registration.id_a, "[rs-07] Notifying at-risk user");
            metrics::record_alerted_user();
        }
        metrics::record_status_request("high");
        Ok(RiskStatus::High {
            last_contact_date: self
                .clock
                .at_ntp_timestamp(updated.last_contact_timestamp)?,
            last_risk_scoring_date: self.clock.at_epoch(updated.latest_risk_epoch),
            last_status_request: self.clock.at_epoch(updated.last_status_request_epoch),
        })
    }

    fn delete_history(&self, bundle: &AuthBundle) -> StatusResult<()> {
        let mut registration = self.authenticate(bundle, RequestType::DeleteHistory)?;
        let cleared = registration.exposed_epochs.len();
        registration.exposed_epochs.clear();
        self.store.save(&registration)?;
        debug!(id = %registration.id_a, cleared, "[rs-07] Exposure history deleted");
        Ok(())
    }

    fn unregister(&self, bundle: &AuthBundle) -> StatusResult<()> {
        let registration = self.authenticate(bundle, RequestType::Unregister)?;
        self.store.delete(&registration.id_a)?;
        info!(id = %registration.id_a, "[rs-07] Registration deleted");
        Ok(())
    }
}
