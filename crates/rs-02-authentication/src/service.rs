//! # Authentication Service
//!
//! Application service implementing `AuthenticationApi`.
//!
//! ## Architecture
//!
//! - Implements the inbound port (`AuthenticationApi`)
//! - Uses the outbound ports (`EbidCipher`, `KeyProvider`) for the block
//!   cipher and key lookup
//! - Delegates byte layouts and MAC computation to the domain layer

use crate::domain::{
    drift::DriftPolicy,
    ebid,
    entities::{
        AuthBundle, BluetoothIdentifier, RequestType, VerifiedRequest, EBID_LEN, HELLO_MAC_LEN,
        TIME_LEN,
    },
    errors::{AuthError, AuthResult},
    mac,
};
use crate::ports::inbound::AuthenticationApi;
use crate::ports::outbound::{EbidCipher, KeyProvider};
use rs_01_epoch_clock::{EpochClock, EpochInstant};
use shared_crypto::{EpochKey, MacKey};
use shared_types::IdA;
use tracing::{debug, warn};

/// Authentication codec service.
pub struct AuthenticationService<C: EbidCipher, K: KeyProvider> {
    clock: EpochClock,
    cipher: C,
    keys: K,
    drift: DriftPolicy,
}

impl<C: EbidCipher, K: KeyProvider> AuthenticationService<C, K> {
    pub fn new(clock: EpochClock, cipher: C, keys: K, drift: DriftPolicy) -> Self {
        Self {
            clock,
            cipher,
            keys,
            drift,
        }
    }

    pub fn clock(&self) -> &EpochClock {
        &self.clock
    }

    pub fn drift_policy(&self) -> &DriftPolicy {
        &self.drift
    }

    pub fn keys(&self) -> &K {
        &self.keys
    }

    /// Client-side construction of a signed bundle for `id_a` at `at`.
    pub fn build_bundle(
        &self,
        mac_key: &MacKey,
        request_type: RequestType,
        id_a: &IdA,
        at: &EpochInstant,
    ) -> AuthResult<AuthBundle> {
        let ebid = self.generate_ebid(at.as_epoch_id(), id_a)?;
        mac::sign_bundle(mac_key, request_type, ebid, at.as_epoch_id(), at.as_time32())
    }

    fn epoch_key(&self, epoch_id: i32) -> AuthResult<EpochKey> {
        self.keys.epoch_key(epoch_id).ok_or_else(|| {
            AuthError::DecryptionFailure(format!("no server key for epoch {}", epoch_id))
        })
    }

    fn fixed<const N: usize>(field: &'static str, bytes: &[u8]) -> AuthResult<[u8; N]> {
        bytes.try_into().map_err(|_| AuthError::MalformedInput {
            field,
            reason: format!("expected {} bytes, got {}", N, bytes.len()),
        })
    }
}

impl<C: EbidCipher, K: KeyProvider> AuthenticationApi for AuthenticationService<C, K> {
    fn generate_ebid(&self, epoch_id: i32, id_a: &IdA) -> AuthResult<[u8; EBID_LEN]> {
        let key = self.epoch_key(epoch_id)?;
        ebid::encrypt_ebid(&self.cipher, &key, epoch_id, id_a)
    }

    fn decrypt_ebid(&self, epoch_id: i32, ebid: &[u8]) -> AuthResult<BluetoothIdentifier> {
        let key = self.epoch_key(epoch_id)?;
        ebid::decrypt_ebid(&self.cipher, &key, ebid)
    }

    fn verify(&self, bundle: &AuthBundle) -> AuthResult<VerifiedRequest> {
        if bundle.request_type == RequestType::Hello {
            return Err(AuthError::MalformedInput {
                field: "request_type",
                reason: "HELLO is not an authenticated request".to_string(),
            });
        }
        let ebid: [u8; EBID_LEN] = Self::fixed("ebid", &bundle.ebid)?;
        let time: [u8; TIME_LEN] = Self::fixed("time", &bundle.time)?;
        if bundle.mac.len() != bundle.request_type.mac_len() {
            return Err(AuthError::MalformedInput {
                field: "mac",
                reason: format!(
                    "expected {} bytes, got {}",
                    bundle.request_type.mac_len(),
                    bundle.mac.len()
                ),
            });
        }
        if bundle.epoch_id < 0 {
            return Err(AuthError::MalformedInput {
                field: "epoch_id",
                reason: format!("negative epoch id {}", bundle.epoch_id),
            });
        }

        let now = self.clock.now();
        let request_time = self.clock.at_time32(time)?;
        if let Err(err) = self.drift.check(&now, bundle.epoch_id, &request_time) {
            debug!(
                request_type = bundle.request_type.name(),
                server_epoch = now.as_epoch_id(),
                request_epoch = bundle.epoch_id,
                "[rs-02] Request outside drift window: {}",
                err
            );
            return Err(err);
        }

        let bid = self.decrypt_ebid(bundle.epoch_id, &ebid)?;
        if bid.epoch_id != bundle.epoch_id {
            return Err(AuthError::EpochMismatch {
                claimed: bundle.epoch_id,
                decrypted: bid.epoch_id,
            });
        }

        let mac_key = self
            .keys
            .mac_key(&bid.id_a)
            .ok_or_else(|| AuthError::UnknownRegistration(bid.id_a.to_string()))?;

        if let Err(err) = mac::verify_request_mac(
            &mac_key,
            bundle.request_type,
            &ebid,
            bundle.epoch_id,
            &time,
            &bundle.mac,
        ) {
            warn!(
                request_type = bundle.request_type.name(),
                epoch = bundle.epoch_id,
                "[rs-02] MAC verification failed"
            );
            return Err(err);
        }

        Ok(VerifiedRequest {
            request_type: bundle.request_type,
            id_a: bid.id_a,
            epoch_id: bundle.epoch_id,
        })
    }

    fn verify_hello_mac(
        &self,
        emitter: &IdA,
        ecc: u8,
        ebid: &[u8; EBID_LEN],
        time16: u16,
        hello_mac: &[u8; HELLO_MAC_LEN],
    ) -> AuthResult<()> {
        let key = self
            .keys
            .mac_key(emitter)
            .ok_or_else(|| AuthError::UnknownRegistration(emitter.to_string()))?;
        mac::verify_hello_mac(&key, ecc, ebid, time16, hello_mac)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryKeyStore, Skinny64EbidCipher};
    use chrono::{Duration, NaiveDate, TimeZone, Utc};
    use rs_01_epoch_clock::FixedTimeSource;
    use std::sync::Arc;

    // =========================================================================
    // TEST FIXTURES
    // =========================================================================

    struct Fixture {
        service: AuthenticationService<Skinny64EbidCipher, Arc<InMemoryKeyStore>>,
        keys: Arc<InMemoryKeyStore>,
        time: Arc<FixedTimeSource>,
        id_a: IdA,
        mac_key: MacKey,
    }

    fn fixture() -> Fixture {
        let time = Arc::new(FixedTimeSource::new(
            Utc.with_ymd_and_hms(2022, 4, 23, 8, 35, 12).unwrap(),
        ));
        let clock = EpochClock::with_time_source(
            NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
            time.clone(),
        );
        let keys = Arc::new(InMemoryKeyStore::new());
        keys.generate_day_keys(0, 200);

        let id_a = IdA::random();
        let mac_key = MacKey::generate();
        keys.insert_mac_key(id_a, mac_key.clone());

        let service = AuthenticationService::new(
            clock,
            Skinny64EbidCipher,
            keys.clone(),
            DriftPolicy::default(),
        );
        Fixture {
            service,
            keys,
            time,
            id_a,
            mac_key,
        }
    }

    fn signed_bundle(f: &Fixture, request_type: RequestType) -> AuthBundle {
        let now = f.service.clock().now();
        f.service
            .build_bundle(&f.mac_key, request_type, &f.id_a, &now)
            .unwrap()
    }

    // =========================================================================
    // VERIFICATION
    // =========================================================================

    #[test]
    fn test_valid_status_request() {
        let f = fixture();
        let bundle = signed_bundle(&f, RequestType::Status);

        let verified = f.service.verify(&bundle).unwrap();
        assert_eq!(verified.id_a, f.id_a);
        assert_eq!(verified.request_type, RequestType::Status);
        assert_eq!(verified.epoch_id, 10786);
    }

    #[test]
    fn test_each_request_type_verifies() {
        let f = fixture();
        for t in [
            RequestType::Status,
            RequestType::Unregister,
            RequestType::DeleteHistory,
        ] {
            assert!(f.service.verify(&signed_bundle(&f, t)).is_ok());
        }
    }

    #[test]
    fn test_replay_across_endpoints_rejected() {
        let f = fixture();
        let mut bundle = signed_bundle(&f, RequestType::Status);
        bundle.request_type = RequestType::Unregister;
        assert_eq!(f.service.verify(&bundle), Err(AuthError::InvalidMac));
    }

    #[test]
    fn test_malformed_lengths() {
        let f = fixture();
        let good = signed_bundle(&f, RequestType::Status);

        let mut short_ebid = good.clone();
        short_ebid.ebid.pop();
        assert!(matches!(
            f.service.verify(&short_ebid),
            Err(AuthError::MalformedInput { field: "ebid", .. })
        ));

        let mut long_time = good.clone();
        long_time.time.push(0);
        assert!(matches!(
            f.service.verify(&long_time),
            Err(AuthError::MalformedInput { field: "time", .. })
        ));

        let mut short_mac = good.clone();
        short_mac.mac.truncate(5);
        assert!(matches!(
            f.service.verify(&short_mac),
            Err(AuthError::MalformedInput { field: "mac", .. })
        ));

        let mut negative = good;
        negative.epoch_id = -3;
        assert!(matches!(
            f.service.verify(&negative),
            Err(AuthError::MalformedInput { field: "epoch_id", .. })
        ));
    }

    #[test]
    fn test_server_clock_drift() {
        let f = fixture();
        let bundle = signed_bundle(&f, RequestType::Status);

        f.time.advance(Duration::seconds(59));
        assert!(f.service.verify(&bundle).is_ok());

        f.time.advance(Duration::seconds(2));
        assert!(matches!(
            f.service.verify(&bundle),
            Err(AuthError::StaleRequest { .. })
        ));

        f.time.advance(Duration::seconds(-122));
        assert!(matches!(
            f.service.verify(&bundle),
            Err(AuthError::FutureRequest { .. })
        ));
    }

    #[test]
    fn test_epoch_mismatch_detected() {
        let f = fixture();
        let now = f.service.clock().now();
        let ebid = f
            .service
            .generate_ebid(now.as_epoch_id() - 1, &f.id_a)
            .unwrap();
        let bundle = mac::sign_bundle(
            &f.mac_key,
            RequestType::Status,
            ebid,
            now.as_epoch_id(),
            now.as_time32(),
        )
        .unwrap();

        assert_eq!(
            f.service.verify(&bundle),
            Err(AuthError::EpochMismatch {
                claimed: now.as_epoch_id(),
                decrypted: now.as_epoch_id() - 1
            })
        );
    }

    #[test]
    fn test_missing_epoch_key() {
        let f = fixture();
        let bundle = signed_bundle(&f, RequestType::Status);
        f.keys
            .insert_day_key(InMemoryKeyStore::day_of_epoch(bundle.epoch_id), EpochKey::generate());
        // Key rotated under the request: EBID now decrypts to garbage.
        assert!(f.service.verify(&bundle).is_err());

        assert!(matches!(
            f.service.decrypt_ebid(1_000_000, &bundle.ebid),
            Err(AuthError::DecryptionFailure(_))
        ));
    }

    #[test]
    fn test_unknown_registration() {
        let f = fixture();
        let bundle = signed_bundle(&f, RequestType::Status);
        f.keys.remove_mac_key(&f.id_a);
        assert!(matches!(
            f.service.verify(&bundle),
            Err(AuthError::UnknownRegistration(_))
        ));
    }

    #[test]
    fn test_wrong_mac_key_rejected() {
        let f = fixture();
        let bundle = signed_bundle(&f, RequestType::Status);
        f.keys.insert_mac_key(f.id_a, MacKey::generate());
        assert_eq!(f.service.verify(&bundle), Err(AuthError::InvalidMac));
    }

    #[test]
    fn test_hello_mac_via_service() {
        let f = fixture();
        let ebid = f.service.generate_ebid(10786, &f.id_a).unwrap();
        let hello_mac = mac::compute_hello_mac(&f.mac_key, 0x21, &ebid, 14528).unwrap();

        assert!(f
            .service
            .verify_hello_mac(&f.id_a, 0x21, &ebid, 14528, &hello_mac)
            .is_ok());
        assert_eq!(
            f.service
                .verify_hello_mac(&IdA::default(), 0x21, &ebid, 14528, &hello_mac),
            Err(AuthError::UnknownRegistration(IdA::default().to_string()))
        );
    }
}
