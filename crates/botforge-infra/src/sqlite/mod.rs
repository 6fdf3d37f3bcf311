//! SQLite storage implementations.

pub mod bot;
pub mod pool;
