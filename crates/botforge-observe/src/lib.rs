//! Observability helpers for Botforge.

pub mod tracing_setup;
