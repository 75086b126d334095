use std::time::Instant;

use relay_core_health_contracts::{HealthService, HealthStatus};

#[derive(Debug, Clone)]
pub struct HealthServiceImpl {
    started_at: Instant,
}

impl HealthServiceImpl {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
        }
    }
}

impl Default for HealthServiceImpl {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthService for HealthServiceImpl {
    async fn status(&self) -> HealthStatus {
        HealthStatus {
            uptime: self.started_at.elapsed(),
        }
    }
}
