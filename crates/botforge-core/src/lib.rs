//! Business logic and repository trait definitions for Botforge.
//!
//! This crate defines the "ports" (repository traits) that the infrastructure
//! layer implements. It depends only on `botforge-types` -- never on
//! `botforge-infra` or any database/IO crate.

pub mod catalog;
pub mod generator;
pub mod repository;
pub mod service;
