//! # Risk Engine Service
//!
//! One ordered pass per registration:
//!
//! 1. Purge expositions older than the contagious period
//! 2. Aggregate uncounted scores and raise the risk at the threshold
//! 3. Reset a risk the user has carried for the retention period
//! 4. Compare with the state before the pass to decide `Updated`/`Unchanged`
//!
//! The pass works on an owned copy of the state, so a registration is either
//! fully processed or untouched.

use crate::adapters::NoJitter;
use crate::config::RiskConfig;
use crate::domain::{
    evaluate_risk, purge_expired, retention_reset, RetentionReset, RiskOutcome, RiskUpdate,
};
use crate::metrics;
use crate::ports::inbound::RiskEngineApi;
use crate::ports::outbound::ContactDateRandomizer;
use rs_01_epoch_clock::EpochClock;
use shared_types::Registration;
use tracing::{debug, info, warn};

/// Risk engine.
pub struct RiskEngine<R: ContactDateRandomizer = NoJitter> {
    clock: EpochClock,
    config: RiskConfig,
    randomizer: R,
}

impl RiskEngine<NoJitter> {
    pub fn new(clock: EpochClock, config: RiskConfig) -> Self {
        Self::with_randomizer(clock, config, NoJitter)
    }
}

impl<R: ContactDateRandomizer> RiskEngine<R> {
    pub fn with_randomizer(clock: EpochClock, config: RiskConfig, randomizer: R) -> Self {
        Self {
            clock,
            config,
            randomizer,
        }
    }

    pub fn config(&self) -> &RiskConfig {
        &self.config
    }

    /// Store the day of the contact at `contact_epoch`, never regressing.
    fn update_last_contact(
        &self,
        registration: &mut Registration,
        contact_epoch: i32,
        current_epoch: i32,
    ) {
        let reference = self.clock.at_epoch(current_epoch);
        let candidate = self
            .randomizer
            .randomize(self.clock.at_epoch(contact_epoch), reference);
        let candidate = if candidate.is_after(&reference) {
            warn!(
                id = %registration.id_a,
                "[rs-04] Last contact date in the future, using the processing day"
            );
            reference
        } else {
            candidate
        };

        let day = candidate.as_day_truncated_ntp();
        if day >= registration.last_contact_timestamp {
            registration.last_contact_timestamp = day;
        } else {
            debug!(
                id = %registration.id_a,
                stored = registration.last_contact_timestamp,
                candidate = day,
                "[rs-04] Keeping later stored contact date"
            );
        }
    }
}

impl<R: ContactDateRandomizer> RiskEngineApi for RiskEngine<R> {
    fn process(&self, registration: &mut Registration, current_epoch: i32) -> RiskOutcome {
        let mut next = registration.clone();

        let purged = purge_expired(&mut next, current_epoch, self.config.contagious_period_epochs());

        let raised = evaluate_risk(
            &mut next,
            &self.config.aggregation,
            self.config.risk_threshold,
        );
        if let Some(contact_epoch) = raised {
            self.update_last_contact(&mut next, contact_epoch, current_epoch);
            info!(
                id = %next.id_a,
                latest_risk_epoch = contact_epoch,
                "[rs-04] Risk detected"
            );
        }

        let reset = retention_reset(&mut next, self.config.retention_period_epochs());
        next.outdated_risk = false;

        if next == *registration {
            return RiskOutcome::Unchanged;
        }

        if purged > 0 {
            metrics::record_expositions_purged(purged);
        }
        if raised.is_some() {
            metrics::record_risk_raised();
        }
        let missed_notification = match reset {
            Some(RetentionReset::MissedNotification) => {
                warn!(
                    id = %next.id_a,
                    latest_risk_epoch = next.latest_risk_epoch,
                    "[rs-04] Risk expired before the user was notified"
                );
                metrics::record_risk_reset(false);
                metrics::record_missed_notification();
                true
            }
            Some(RetentionReset::AlreadyNotified) => {
                debug!(id = %next.id_a, "[rs-04] Risk expired");
                metrics::record_risk_reset(true);
                false
            }
            None => false,
        };

        *registration = next;
        RiskOutcome::Updated(RiskUpdate {
            raised: raised.is_some(),
            reset: reset.is_some(),
            missed_notification,
            purged,
        })
    }
}
