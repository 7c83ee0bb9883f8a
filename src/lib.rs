//! Society service API core.
//!
//! Request-handling core of the society service backend: a fixed-order
//! middleware pipeline (recovery → logging → CORS), a uniform response
//! envelope, a health/readiness subsystem over probe-able dependencies,
//! and a graceful server lifecycle.
//!
//! ```text
//! Inbound request
//!     → http::middleware (correlation id, protected scope, CORS)
//!     → route handler (health, ready, future business logic)
//!     → http::response (success / error / paginated envelope)
//!
//! Cross-cutting:
//!     config (immutable env snapshot)   db (optional datastore probe)
//!     lifecycle (signals, bounded-drain shutdown)
//! ```

// Core subsystems
pub mod config;
pub mod http;

// Dependencies and their probes
pub mod db;
pub mod health;

// Cross-cutting concerns
pub mod lifecycle;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
