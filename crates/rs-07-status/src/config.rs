//! Status handling configuration

use serde::{Deserialize, Serialize};
use shared_types::ServerConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusConfig {
    /// Epochs that must separate two accepted status requests.
    pub min_epochs_between_status_requests: u32,
}

impl Default for StatusConfig {
    fn default() -> Self {
        Self {
            min_epochs_between_status_requests: 2,
        }
    }
}

impl From<&ServerConfig> for StatusConfig {
    fn from(server: &ServerConfig) -> Self {
        Self {
            min_epochs_between_status_requests: server.min_epochs_between_status_requests,
        }
    }
}
