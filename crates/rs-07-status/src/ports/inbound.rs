//! # Inbound Ports (Driving Ports / API)

use crate::domain::RiskStatus;
use crate::error::StatusResult;
use rs_02_authentication::AuthBundle;

/// Authenticated requests a registered client sends about itself.
pub trait StatusApi: Send + Sync {
    /// Report the risk status and acknowledge a risk notification.
    fn status(&self, bundle: &AuthBundle) -> StatusResult<RiskStatus>;

    /// Forget every recorded exposure.
    fn delete_history(&self, bundle: &AuthBundle) -> StatusResult<()>;

    /// Remove the registration.
    fn unregister(&self, bundle: &AuthBundle) -> StatusResult<()>;
}
