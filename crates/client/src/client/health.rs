//! Backend health check.

use tracing::{debug, warn};

use crate::client::DocgenClient;
use crate::endpoints;
use crate::error::{ClientError, Result};
use crate::models::HealthStatus;

impl DocgenClient {
    /// Check whether the backend is reachable.
    ///
    /// Every failure collapses to [`ClientError::BackendUnreachable`]; the
    /// underlying cause is logged.
    pub async fn check_health(&self) -> Result<HealthStatus> {
        match endpoints::get_health(&self.http, &self.base_url).await {
            Ok(status) => {
                debug!(
                    status = status.status.as_deref().unwrap_or("unknown"),
                    "Backend health check passed"
                );
                Ok(status)
            }
            Err(e) => {
                warn!(base_url = %self.base_url, error = %e, "Backend health check failed");
                Err(ClientError::BackendUnreachable)
            }
        }
    }
}
