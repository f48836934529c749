//! Prometheus text exposition.
//!
//! Subsystems built with their `metrics` feature register counters in the
//! default registry; this module renders whatever is registered.

use prometheus::{Encoder, TextEncoder};

use crate::TelemetryError;

/// Render every registered metric in the Prometheus text format.
pub fn render_metrics() -> Result<String, TelemetryError> {
    let encoder = TextEncoder::new();
    let families = prometheus::gather();
    let mut buffer = Vec::new();
    encoder
        .encode(&families, &mut buffer)
        .map_err(|e| TelemetryError::Metrics(e.to_string()))?;
    String::from_utf8(buffer).map_err(|e| TelemetryError::Metrics(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lazy_static::lazy_static;
    use prometheus::{register_int_counter, IntCounter};

    lazy_static! {
        static ref TEST_COUNTER: IntCounter = register_int_counter!(
            "telemetry_render_test_total",
            "Counter used by the exposition test"
        )
        .expect("Failed to create TEST_COUNTER metric");
    }

    #[test]
    fn test_render_includes_registered_counter() {
        TEST_COUNTER.inc_by(3);
        let text = render_metrics().unwrap();
        assert!(text.contains("# TYPE telemetry_render_test_total counter"));
        assert!(text.contains("telemetry_render_test_total 3"));
    }
}
