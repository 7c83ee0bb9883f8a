//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! process environment (+ optional .env file)
//!     → loader.rs (read each key, substitute documented default)
//!     → AppConfig (immutable snapshot)
//!     → passed explicitly to the components that need it
//! ```
//!
//! # Design Decisions
//! - Config is built exactly once at startup and never mutated
//! - A missing or malformed value is never an error; the default wins
//! - No ambient global lookup: the loader accepts an injectable key
//!   resolver so tests never touch the process environment

pub mod loader;
pub mod schema;

pub use schema::AppConfig;
