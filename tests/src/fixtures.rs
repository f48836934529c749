//! # Test Fixtures
//!
//! The whole server core wired on in-memory adapters, with a clock the test
//! moves forward by hand.

use anyhow::Context;
use chrono::{DateTime, Duration, NaiveDate, TimeZone, Utc};
use rs_01_epoch_clock::{EpochClock, FixedTimeSource, EPOCH_DURATION_SECS};
use rs_02_authentication::domain::mac::compute_hello_mac;
use rs_02_authentication::{
    AuthBundle, AuthenticationApi, AuthenticationService, DriftPolicy, InMemoryKeyStore,
    RequestType, Skinny64EbidCipher,
};
use rs_04_risk_engine::{RiskConfig, RiskEngine};
use rs_05_batch_orchestrator::{BatchConfig, BatchOrchestrator, BatchReport};
use rs_06_contact_processing::{Contact, ContactConfig, ContactProcessingService, HelloMessage};
use rs_07_status::{StatusConfig, StatusService};
use shared_crypto::MacKey;
use shared_types::{IdA, InMemoryRegistrationStore, Registration, RegistrationStore, ServerConfig};
use std::sync::Arc;

pub type Auth = AuthenticationService<Skinny64EbidCipher, Arc<InMemoryKeyStore>>;
pub type Store = Arc<InMemoryRegistrationStore>;

/// ECC byte carried by every test contact.
pub const TEST_ECC: u8 = 0x33;

/// 2022-04-23T08:35:12Z, epoch 10786 of a service started 2022-01-01.
pub fn reference_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2022, 4, 23, 8, 35, 12)
        .single()
        .expect("valid reference instant")
}

pub fn reference_config() -> ServerConfig {
    ServerConfig {
        service_start_date: NaiveDate::from_ymd_opt(2022, 1, 1).expect("valid start date"),
        ..Default::default()
    }
}

/// A registered application.
pub struct Device {
    pub id_a: IdA,
    pub mac_key: MacKey,
}

pub struct Harness {
    pub time: Arc<FixedTimeSource>,
    pub clock: EpochClock,
    pub keys: Arc<InMemoryKeyStore>,
    pub auth: Arc<Auth>,
    pub store: Store,
    pub contacts: ContactProcessingService<Arc<Auth>, Store>,
    pub status: StatusService<Arc<Auth>, Store>,
    pub batch: BatchOrchestrator<Store, RiskEngine>,
}

impl Harness {
    pub fn new(config: &ServerConfig, now: DateTime<Utc>) -> anyhow::Result<Self> {
        config.validate()?;
        let time = Arc::new(FixedTimeSource::new(now));
        let clock = EpochClock::with_time_source(config.service_start_date, time.clone());

        let keys = Arc::new(InMemoryKeyStore::new());
        let today = InMemoryKeyStore::day_of_epoch(clock.current_epoch());
        keys.generate_day_keys(0, today + 60);

        let auth = Arc::new(AuthenticationService::new(
            clock.clone(),
            Skinny64EbidCipher,
            keys.clone(),
            DriftPolicy::from(config),
        ));
        let store: Store = Arc::new(InMemoryRegistrationStore::new());

        let contacts = ContactProcessingService::new(
            clock.clone(),
            auth.clone(),
            store.clone(),
            ContactConfig::from(config),
        )?;
        let status = StatusService::new(
            clock.clone(),
            auth.clone(),
            store.clone(),
            StatusConfig::from(config),
        );
        let engine = RiskEngine::new(clock.clone(), RiskConfig::try_from(config)?);
        let batch = BatchOrchestrator::new(store.clone(), engine, BatchConfig::from(config))?;

        Ok(Self {
            time,
            clock,
            keys,
            auth,
            store,
            contacts,
            status,
            batch,
        })
    }

    /// Harness at [`reference_now`] with [`reference_config`].
    pub fn reference() -> anyhow::Result<Self> {
        Self::new(&reference_config(), reference_now())
    }

    pub fn current_epoch(&self) -> i32 {
        self.clock.current_epoch()
    }

    pub fn advance_epochs(&self, epochs: i64) {
        self.time.advance(Duration::seconds(epochs * EPOCH_DURATION_SECS));
    }

    pub fn register(&self) -> anyhow::Result<Device> {
        let device = Device {
            id_a: IdA::random(),
            mac_key: MacKey::generate(),
        };
        self.keys.insert_mac_key(device.id_a, device.mac_key.clone());
        self.store.insert(Registration::new(device.id_a))?;
        Ok(device)
    }

    pub fn registration(&self, device: &Device) -> anyhow::Result<Registration> {
        self.store
            .find(&device.id_a)?
            .with_context(|| format!("no registration for {}", device.id_a))
    }

    /// Two HELLOs one minute apart, received during `epoch`.
    pub fn contact(&self, emitter: &Device, epoch: i32, rssi: i32) -> anyhow::Result<Contact> {
        let ebid = self.auth.generate_ebid(epoch, &emitter.id_a)?;
        let start = self.clock.at_epoch(epoch).as_ntp_timestamp();
        let hellos = [10, 70]
            .into_iter()
            .map(|offset| {
                let collected = start + offset;
                let time16 = (collected & 0xFFFF) as u16;
                Ok(HelloMessage {
                    time16,
                    mac: compute_hello_mac(&emitter.mac_key, TEST_ECC, &ebid, time16)?,
                    rssi_calibrated: rssi,
                    time_collected_on_device: collected,
                })
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        Ok(Contact {
            ebid,
            ecc: TEST_ECC,
            hellos,
        })
    }

    /// Request bundle signed by `device` now.
    pub fn bundle(
        &self,
        device: &Device,
        request_type: RequestType,
    ) -> anyhow::Result<AuthBundle> {
        let now = self.clock.now();
        Ok(self
            .auth
            .build_bundle(&device.mac_key, request_type, &device.id_a, &now)?)
    }

    pub fn run_batch(&self) -> anyhow::Result<BatchReport> {
        Ok(self.batch.run(self.current_epoch())?)
    }
}
