//! ectf-secrets — secret header generators for the car and key fob
//! firmware builds (library crate).
//!
//! Backs the `gen-car-secret` and `gen-fob-secret` binaries and re-exports
//! their modules for integration tests.

pub mod atomic;
pub mod cli;
pub mod config;
pub mod constants;
pub mod env;
pub mod generate;
pub mod header;
pub mod models;
pub mod store;
