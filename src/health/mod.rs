//! Health checking subsystem.
//!
//! # Data Flow
//! ```text
//! GET /health (liveness):
//!     probe each configured dependency under a 5s ceiling
//!     → per-dependency verdict: healthy | unhealthy | not_configured
//!     → aggregate status, always HTTP 200
//!
//! GET /ready (readiness):
//!     probe each configured dependency under the same ceiling
//!     → any failure aborts with 503 NOT_READY
//!     → otherwise 200 {ready: true}
//! ```
//!
//! # Design Decisions
//! - Status is computed fresh per request, never cached
//! - `not_configured` does not downgrade the aggregate: the service
//!   degrades gracefully without a database
//! - No retries here; orchestration layers re-poll

pub mod handlers;
pub mod probe;

pub use handlers::HealthStatus;
pub use probe::{run_probe, Probe, ProbeError, PROBE_TIMEOUT};
