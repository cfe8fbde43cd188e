//! doctriage-cli - Batch driver for the triage pipeline.

pub mod config;
pub mod driver;

pub use config::TriageConfig;
pub use driver::BatchDriver;
