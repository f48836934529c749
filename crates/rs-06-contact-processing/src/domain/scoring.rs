//! # RSSI Exposure Scoring
//!
//! 1. **Fading compensation**: samples are bucketed per minute from the
//!    first reception; RSSI above -5 dBm is discarded, the rest clamped to
//!    `rssi_max`.
//! 2. **Averaging**: each minute's window holds its own samples and the next
//!    minute's, reduced with `softmax_a`.
//! 3. **Risk**: `gamma = (window - p0) / deltas[count]`, clamped to `[0, 1]`;
//!    the per-minute risks are reduced with `softmax_b`, boosted by 1.2,
//!    capped at 1 and multiplied by the duration.
//!
//! `softmax_c(v) = c · ln(mean(exp(vᵢ / c)))`, `0` for an empty `v`.
//!
//! A contact spanning more than one epoch plus `epoch_tolerance_secs`
//! scores 0.

use super::entities::{HelloMessage, ScoringResult};
use super::errors::{ContactError, ContactResult};
use crate::config::ScoringConfig;
use rs_01_epoch_clock::EPOCH_DURATION_SECS;
use tracing::warn;

/// RSSI strongest-signal threshold; louder samples are considered bogus.
const RSSI_CEILING: i32 = -5;

const BOOST: f64 = 1.2;

/// Turns the HELLO messages of one contact into an exposure score.
pub trait ScoringStrategy: Send + Sync {
    fn score(&self, hellos: &[HelloMessage]) -> ContactResult<ScoringResult>;
}

/// Second version of the deployed RSSI model.
#[derive(Debug, Clone, Default)]
pub struct RssiScoringV2 {
    config: ScoringConfig,
}

impl RssiScoringV2 {
    pub fn new(config: ScoringConfig) -> ContactResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    fn delta(&self, count: usize) -> f64 {
        let last = self.config.deltas.len().saturating_sub(1);
        self.config.deltas.get(count.min(last)).copied().unwrap_or(1.0)
    }
}

fn soft_max(values: &[f64], coefficient: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sum: f64 = values.iter().map(|v| (v / coefficient).exp()).sum();
    let mean = sum / values.len() as f64;
    coefficient * mean.ln()
}

impl ScoringStrategy for RssiScoringV2 {
    fn score(&self, hellos: &[HelloMessage]) -> ContactResult<ScoringResult> {
        let first = hellos
            .iter()
            .map(|h| h.time_collected_on_device)
            .min()
            .ok_or(ContactError::NoMessages)?;
        let last = hellos
            .iter()
            .map(|h| h.time_collected_on_device)
            .max()
            .unwrap_or(first);

        let span_secs = last.saturating_sub(first);
        if span_secs > EPOCH_DURATION_SECS + self.config.epoch_tolerance_secs {
            warn!(
                span_secs,
                "[rs-06] HELLO messages span more than one epoch, scoring 0"
            );
            return Ok(ScoringResult::default());
        }

        let minutes = (EPOCH_DURATION_SECS / 60) as usize;
        let mut by_minute: Vec<Vec<f64>> = vec![Vec::new(); minutes];
        for hello in hellos {
            if hello.rssi_calibrated > RSSI_CEILING {
                continue;
            }
            let offset = hello.time_collected_on_device - first;
            let minute = ((offset / 60) as usize).min(minutes - 1);
            let rssi = hello.rssi_calibrated.min(self.config.rssi_max);
            by_minute[minute].push(f64::from(rssi));
        }

        let mut risks = Vec::with_capacity(minutes);
        let mut duration_minutes = 0u32;
        let mut nb_contacts = 0u32;
        for minute in 0..minutes {
            let mut window = by_minute[minute].clone();
            if let Some(next) = by_minute.get(minute + 1) {
                window.extend_from_slice(next);
            }
            if window.is_empty() {
                continue;
            }
            duration_minutes = minute as u32;

            let gamma = (soft_max(&window, self.config.soft_max_a) - self.config.p0)
                / self.delta(window.len());
            let risk = gamma.clamp(0.0, 1.0);
            if risk > 0.0 {
                nb_contacts += 1;
            }
            risks.push(risk);
        }

        let peak = (soft_max(&risks, self.config.soft_max_b) * BOOST).min(1.0);
        Ok(ScoringResult {
            rssi_score: peak * f64::from(duration_minutes),
            duration_minutes,
            nb_contacts,
        })
    }
}
