//! ACE Core - backend logic for Atmos Channel Extract
//!
//! This crate contains all business logic with zero terminal dependencies.
//! It can be used by the interactive CLI or embedded in other tools.

pub mod config;
pub mod extraction;
pub mod logging;
pub mod models;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
