//! Shared domain types for Botforge.
//!
//! This crate contains the types used across the Botforge backend:
//! bot configurations, generated-bot records, template metadata, and their
//! associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod bot;
pub mod config;
pub mod error;
pub mod template;
