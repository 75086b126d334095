use std::{future::Future, time::Duration};

#[cfg_attr(feature = "mock", mockall::automock)]
pub trait HealthService: Send + Sync + 'static {
    /// Liveness probe data. Always succeeds; delivery problems surface on
    /// the submit path, not here.
    fn status(&self) -> impl Future<Output = HealthStatus> + Send;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthStatus {
    pub uptime: Duration,
}

#[cfg(feature = "mock")]
impl MockHealthService {
    pub fn with_status(mut self, status: HealthStatus) -> Self {
        self.expect_status()
            .once()
            .return_once(move || Box::pin(std::future::ready(status)));
        self
    }
}
