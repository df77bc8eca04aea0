//! Configuration and shared constants for lb-probe.
//!
//! This crate contains the types every other crate depends on.

mod config;
mod constants;

pub use config::Config;
pub use constants::*;
