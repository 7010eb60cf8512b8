//! # pathway-observability
//!
//! Structured logging for Pathway: subscriber setup and span macros shared
//! by the planning and storage crates.

pub mod tracing_setup;

pub use tracing_setup::{init_tracing, init_tracing_with_filter, spans};
