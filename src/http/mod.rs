//! HTTP request-handling subsystem.
//!
//! # Data Flow
//! ```text
//! Inbound request
//!     → server.rs (router, shared state)
//!     → middleware/ (recovery → logger → cors, fixed order)
//!     → route handler
//!     → response.rs (uniform envelope, terminal write)
//! ```

pub mod middleware;
pub mod response;
pub mod server;

pub use server::{AppState, HttpServer};
