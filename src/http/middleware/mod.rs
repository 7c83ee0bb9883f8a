//! Request interceptors applied to every route.
//!
//! # Data Flow
//! ```text
//! Inbound request
//!     → recovery.rs (protected scope, outermost)
//!     → logger.rs   (correlation id, latency log)
//!     → cors.rs     (cross-origin headers, preflight short-circuit)
//!     → route handler
//! ```
//!
//! # Design Decisions
//! - Order is load-bearing: recovery wraps everything, so a fault inside
//!   the logger or CORS layer still yields one structured error response
//! - The correlation id is generated by the logger, but recovery holds a
//!   shared cell so a panicking request still reports its id

pub mod cors;
pub mod logger;
pub mod recovery;

pub use cors::cors;
pub use logger::{logger, CorrelationId, RequestId, RequestIdCell, X_REQUEST_ID};
pub use recovery::recovery;
