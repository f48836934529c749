//! # Risk Lifecycle
//!
//! ```text
//! exposed ──batch──► at risk ──status──► notified ──7 days + batch──► reset
//!                                                                      │
//!                          expositions purged after 14 days ◄──────────┘
//! ```

#[cfg(test)]
mod tests {
    use crate::fixtures::Harness;
    use rs_01_epoch_clock::EPOCHS_PER_DAY;
    use rs_02_authentication::RequestType;
    use rs_06_contact_processing::ContactProcessingApi;
    use rs_07_status::{RiskStatus, StatusApi};

    const RETENTION_EPOCHS: i64 = 7 * EPOCHS_PER_DAY;

    #[test]
    fn test_notified_risk_expires_then_history_is_purged() -> anyhow::Result<()> {
        let h = Harness::reference()?;
        let emitter = h.register()?;
        let exposure_epoch = h.current_epoch();

        h.contacts
            .process(&h.contact(&emitter, exposure_epoch, -30)?)?;
        h.run_batch()?;
        assert!(h
            .status
            .status(&h.bundle(&emitter, RequestType::Status)?)?
            .is_high());

        // A week later the user checks again, still at risk until the batch.
        h.advance_epochs(RETENTION_EPOCHS);
        assert!(h
            .status
            .status(&h.bundle(&emitter, RequestType::Status)?)?
            .is_high());

        let report = h.run_batch()?;
        assert_eq!(report.updated, 1);
        assert_eq!(report.missed_notifications, 0);
        let registration = h.registration(&emitter)?;
        assert!(!registration.at_risk);
        assert!(registration.notified);
        assert_eq!(registration.exposed_epochs.len(), 1);

        h.advance_epochs(2);
        assert_eq!(
            h.status.status(&h.bundle(&emitter, RequestType::Status)?)?,
            RiskStatus::None
        );

        // Already counted: the old exposition never raises the risk again.
        assert_eq!(h.run_batch()?.updated, 0);
        assert!(!h.registration(&emitter)?.at_risk);

        h.advance_epochs(RETENTION_EPOCHS);
        assert_eq!(h.run_batch()?.updated, 1);
        let registration = h.registration(&emitter)?;
        assert!(registration.exposed_epochs.is_empty());
        assert!(!registration.at_risk);
        Ok(())
    }

    #[test]
    fn test_late_upload_expires_before_notification() -> anyhow::Result<()> {
        let h = Harness::reference()?;
        let emitter = h.register()?;
        let now = h.current_epoch();

        assert_eq!(
            h.status.status(&h.bundle(&emitter, RequestType::Status)?)?,
            RiskStatus::None
        );

        // Contact from more than a week before the last status request.
        let contact_epoch = now - 700;
        h.contacts
            .process(&h.contact(&emitter, contact_epoch, -30)?)?;

        let report = h.run_batch()?;
        assert_eq!(report.updated, 1);
        assert_eq!(report.missed_notifications, 1);

        let registration = h.registration(&emitter)?;
        assert!(!registration.at_risk);
        assert!(!registration.notified);
        assert_eq!(registration.latest_risk_epoch, contact_epoch);
        Ok(())
    }

    #[test]
    fn test_new_exposure_after_reset_raises_again() -> anyhow::Result<()> {
        let h = Harness::reference()?;
        let emitter = h.register()?;

        h.contacts
            .process(&h.contact(&emitter, h.current_epoch(), -30)?)?;
        h.run_batch()?;
        h.status.status(&h.bundle(&emitter, RequestType::Status)?)?;
        h.advance_epochs(RETENTION_EPOCHS);
        h.status.status(&h.bundle(&emitter, RequestType::Status)?)?;
        h.run_batch()?;
        assert!(!h.registration(&emitter)?.at_risk);

        let second_exposure = h.current_epoch();
        h.contacts
            .process(&h.contact(&emitter, second_exposure, -30)?)?;
        h.run_batch()?;

        let registration = h.registration(&emitter)?;
        assert!(registration.at_risk);
        assert_eq!(registration.latest_risk_epoch, second_exposure);
        Ok(())
    }
}
