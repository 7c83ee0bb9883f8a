//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Starting:
//!     Load config → optional datastore connect → bind listener
//!
//! Listening → ShuttingDown (signals.rs):
//!     SIGTERM/SIGINT → Shutdown::trigger
//!
//! ShuttingDown → Terminated (shutdown.rs + http server):
//!     Stop accepting → drain in-flight (bounded) → close datastore → exit
//! ```
//!
//! # Design Decisions
//! - Teardown is one-shot and non-reentrant
//! - Draining has a deadline; past it, remaining requests are aborted
//! - Only a failed listener bind is fatal at startup

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
