//! Infrastructure layer for Botforge.
//!
//! Contains implementations of the repository trait defined in
//! `botforge-core` (SQLite storage via sqlx), plus data-directory resolution
//! and the `config.toml` loader.

pub mod config;
pub mod filesystem;
pub mod sqlite;
