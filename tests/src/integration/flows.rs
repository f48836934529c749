//! # Request Flows
//!
//! Contacts uploaded by receivers, batch passes and the requests emitters
//! send about themselves, wired on the in-memory stack.

#[cfg(test)]
mod tests {
    use crate::fixtures::{reference_config, Harness};
    use rs_02_authentication::{AuthError, RequestType};
    use rs_06_contact_processing::{ContactError, ContactProcessingApi};
    use rs_07_status::{RiskStatus, StatusApi, StatusError};
    use shared_types::ServerConfig;

    /// 2022-04-23T00:00:00Z in NTP seconds.
    const REFERENCE_DAY_NTP: i64 = 3_859_660_800;

    #[test]
    fn test_contact_batch_status() -> anyhow::Result<()> {
        let h = Harness::reference()?;
        let emitter = h.register()?;
        let bystander = h.register()?;
        let epoch = h.current_epoch();

        let outcome = h.contacts.process(&h.contact(&emitter, epoch, -30)?)?;
        assert_eq!(outcome.score.rssi_score, 1.0);
        assert_eq!(outcome.epoch_id, epoch);
        assert!(h.registration(&emitter)?.outdated_risk);

        let report = h.run_batch()?;
        assert_eq!(report.total, 2);
        assert_eq!(report.processed, 2);
        assert_eq!(report.updated, 1);
        assert!(report.is_balanced());

        let registration = h.registration(&emitter)?;
        assert!(registration.at_risk);
        assert!(!registration.outdated_risk);
        assert_eq!(registration.latest_risk_epoch, epoch);
        assert_eq!(registration.last_contact_timestamp, REFERENCE_DAY_NTP);

        match h.status.status(&h.bundle(&emitter, RequestType::Status)?)? {
            RiskStatus::High {
                last_contact_date,
                last_risk_scoring_date,
                last_status_request,
            } => {
                assert_eq!(last_contact_date.as_ntp_timestamp(), REFERENCE_DAY_NTP);
                assert_eq!(last_risk_scoring_date.as_epoch_id(), epoch);
                assert_eq!(last_status_request.as_epoch_id(), epoch);
            }
            RiskStatus::None => anyhow::bail!("emitter should be at risk"),
        }
        assert!(h.registration(&emitter)?.notified);

        assert_eq!(
            h.status.status(&h.bundle(&bystander, RequestType::Status)?)?,
            RiskStatus::None
        );
        Ok(())
    }

    #[test]
    fn test_second_batch_is_idempotent() -> anyhow::Result<()> {
        let h = Harness::reference()?;
        let emitter = h.register()?;
        h.contacts
            .process(&h.contact(&emitter, h.current_epoch(), -30)?)?;

        assert_eq!(h.run_batch()?.updated, 1);
        let after_first = h.registration(&emitter)?;

        let report = h.run_batch()?;
        assert_eq!(report.updated, 0);
        assert_eq!(h.registration(&emitter)?, after_first);
        Ok(())
    }

    #[test]
    fn test_weak_contacts_accumulate_with_sum() -> anyhow::Result<()> {
        let h = Harness::reference()?;
        let emitter = h.register()?;
        let epoch = h.current_epoch();

        for offset in 0..4 {
            let outcome = h.contacts.process(&h.contact(&emitter, epoch - offset, -60)?)?;
            assert!((outcome.score.rssi_score - 0.290_973_546_746_164_3).abs() < 1e-9);
        }
        h.run_batch()?;

        let registration = h.registration(&emitter)?;
        assert!(registration.at_risk);
        assert_eq!(registration.latest_risk_epoch, epoch);
        Ok(())
    }

    #[test]
    fn test_weak_contacts_stay_below_threshold_with_max() -> anyhow::Result<()> {
        let config = ServerConfig {
            aggregation: "max".to_string(),
            ..reference_config()
        };
        let h = Harness::new(&config, crate::fixtures::reference_now())?;
        let emitter = h.register()?;
        let epoch = h.current_epoch();

        for offset in 0..4 {
            h.contacts.process(&h.contact(&emitter, epoch - offset, -60)?)?;
        }
        h.run_batch()?;

        assert!(!h.registration(&emitter)?.at_risk);
        Ok(())
    }

    #[test]
    fn test_status_throttling() -> anyhow::Result<()> {
        let h = Harness::reference()?;
        let device = h.register()?;

        h.status.status(&h.bundle(&device, RequestType::Status)?)?;
        h.advance_epochs(1);
        assert!(matches!(
            h.status.status(&h.bundle(&device, RequestType::Status)?),
            Err(StatusError::RequestRateExceeded { .. })
        ));

        h.advance_epochs(1);
        assert_eq!(
            h.status.status(&h.bundle(&device, RequestType::Status)?)?,
            RiskStatus::None
        );
        Ok(())
    }

    #[test]
    fn test_stale_bundle_is_rejected() -> anyhow::Result<()> {
        let h = Harness::reference()?;
        let device = h.register()?;
        let bundle = h.bundle(&device, RequestType::Status)?;

        h.advance_epochs(2);
        assert!(matches!(
            h.status.status(&bundle),
            Err(StatusError::Auth(AuthError::StaleRequest { .. }))
        ));
        Ok(())
    }

    #[test]
    fn test_delete_history_before_batch() -> anyhow::Result<()> {
        let h = Harness::reference()?;
        let emitter = h.register()?;
        h.contacts
            .process(&h.contact(&emitter, h.current_epoch(), -30)?)?;

        h.status
            .delete_history(&h.bundle(&emitter, RequestType::DeleteHistory)?)?;
        assert!(h.registration(&emitter)?.exposed_epochs.is_empty());

        h.run_batch()?;
        assert!(!h.registration(&emitter)?.at_risk);
        Ok(())
    }

    #[test]
    fn test_unregister_stops_contact_ingestion() -> anyhow::Result<()> {
        let h = Harness::reference()?;
        let emitter = h.register()?;
        let contact = h.contact(&emitter, h.current_epoch(), -30)?;

        h.status
            .unregister(&h.bundle(&emitter, RequestType::Unregister)?)?;

        assert!(matches!(
            h.contacts.process(&contact),
            Err(ContactError::UnknownRegistration(_))
        ));
        assert_eq!(h.run_batch()?.total, 0);
        Ok(())
    }

    #[test]
    fn test_forged_hellos_never_reach_the_store() -> anyhow::Result<()> {
        let h = Harness::reference()?;
        let emitter = h.register()?;
        let impostor = h.register()?;

        // HELLOs carrying the emitter's EBID but MACed with another key.
        let mut contact = h.contact(&emitter, h.current_epoch(), -30)?;
        let signed_by_impostor = h.contact(&impostor, h.current_epoch(), -30)?;
        for (hello, forged) in contact.hellos.iter_mut().zip(&signed_by_impostor.hellos) {
            hello.mac = forged.mac;
        }

        assert_eq!(
            h.contacts.process(&contact),
            Err(ContactError::NoValidMessages)
        );
        assert!(h.registration(&emitter)?.exposed_epochs.is_empty());
        Ok(())
    }

    #[test]
    fn test_parallel_batch_over_many_registrations() -> anyhow::Result<()> {
        let config = ServerConfig {
            batch_page_size: 7,
            batch_workers: 4,
            ..reference_config()
        };
        let h = Harness::new(&config, crate::fixtures::reference_now())?;
        let epoch = h.current_epoch();

        let devices = (0..200)
            .map(|_| h.register())
            .collect::<anyhow::Result<Vec<_>>>()?;
        for device in devices.iter().step_by(5) {
            h.contacts.process(&h.contact(device, epoch, -30)?)?;
        }

        let report = h.run_batch()?;
        assert_eq!(report.total, 200);
        assert_eq!(report.processed, 200);
        assert_eq!(report.updated, 40);
        assert_eq!(report.skipped, 0);

        for (index, device) in devices.iter().enumerate() {
            assert_eq!(h.registration(device)?.at_risk, index % 5 == 0);
        }
        Ok(())
    }

    #[test]
    fn test_metrics_exposition_renders() -> anyhow::Result<()> {
        let h = Harness::reference()?;
        h.run_batch()?;
        robert_telemetry::render_metrics()?;
        Ok(())
    }
}
