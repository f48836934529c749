//! Batch orchestrator configuration

use serde::{Deserialize, Serialize};
use shared_types::{ConfigError, IdRange, ServerConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Registrations read per store round-trip.
    pub page_size: usize,
    /// Parallel workers, one id sub-range each.
    pub worker_count: usize,
    /// Primary-key range covered by a run.
    pub id_range: IdRange,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            page_size: 1000,
            worker_count: 4,
            id_range: IdRange::full(),
        }
    }
}

impl BatchConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::NotPositive { name: "page_size" });
        }
        if self.worker_count == 0 {
            return Err(ConfigError::NotPositive {
                name: "worker_count",
            });
        }
        Ok(())
    }
}

impl From<&ServerConfig> for BatchConfig {
    fn from(server: &ServerConfig) -> Self {
        Self {
            page_size: server.batch_page_size,
            worker_count: server.batch_workers,
            id_range: IdRange::full(),
        }
    }
}
