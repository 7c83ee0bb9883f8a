//! Dependency reachability probes.
//!
//! A dependency exposes exactly one operation: check reachability within a
//! deadline. The subsystem never learns the dependency's internal
//! protocol, only whether the probe came back in time.

use std::time::Duration;

use futures_util::future::BoxFuture;
use thiserror::Error;
use tokio::time;

/// Fixed ceiling on any single health or readiness probe.
pub const PROBE_TIMEOUT: Duration = Duration::from_secs(5);

/// Why a probe did not succeed. Both variants surface identically to
/// callers: `unhealthy` on the health endpoint, 503 on readiness.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("dependency unreachable: {0}")]
    Unreachable(String),

    #[error("probe deadline exceeded")]
    DeadlineExceeded,
}

/// A downstream dependency that can be probed for reachability.
pub trait Probe: Send + Sync {
    /// Name reported in the health endpoint's `services` map.
    fn name(&self) -> &str;

    /// Check reachability. The caller enforces the deadline.
    fn check(&self) -> BoxFuture<'_, Result<(), ProbeError>>;
}

/// Race a probe against the deadline.
///
/// The dependency call may have no native timeout, so the timer is
/// authoritative: timer-first is a probe failure.
pub async fn run_probe(probe: &dyn Probe, deadline: Duration) -> Result<(), ProbeError> {
    match time::timeout(deadline, probe.check()).await {
        Ok(result) => result,
        Err(_) => Err(ProbeError::DeadlineExceeded),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct HangingProbe;

    impl Probe for HangingProbe {
        fn name(&self) -> &str {
            "database"
        }

        fn check(&self) -> BoxFuture<'_, Result<(), ProbeError>> {
            Box::pin(std::future::pending())
        }
    }

    struct InstantProbe(Result<(), ()>);

    impl Probe for InstantProbe {
        fn name(&self) -> &str {
            "database"
        }

        fn check(&self) -> BoxFuture<'_, Result<(), ProbeError>> {
            let outcome = self
                .0
                .map_err(|_| ProbeError::Unreachable("connection refused".to_string()));
            Box::pin(async move { outcome })
        }
    }

    #[tokio::test]
    async fn test_hanging_probe_hits_deadline() {
        let result = run_probe(&HangingProbe, Duration::from_millis(20)).await;
        assert!(matches!(result, Err(ProbeError::DeadlineExceeded)));
    }

    #[tokio::test]
    async fn test_successful_probe_within_deadline() {
        let result = run_probe(&InstantProbe(Ok(())), Duration::from_secs(1)).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_failed_probe_reports_unreachable() {
        let result = run_probe(&InstantProbe(Err(())), Duration::from_secs(1)).await;
        assert!(matches!(result, Err(ProbeError::Unreachable(_))));
    }
}
