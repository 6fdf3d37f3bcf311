//! Services orchestrating generation and persistence.

pub mod bot;
