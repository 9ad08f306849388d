//! # Company Shared
//!
//! Configuration, telemetry and constants shared by the company master crates.

pub mod config;
pub mod constants;
pub mod error;
pub mod telemetry;

pub use config::Settings;
pub use error::AppError;
