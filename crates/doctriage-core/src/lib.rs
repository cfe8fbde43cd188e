//! doctriage-core - Core types for the doctriage pipeline.
//!
//! This crate provides the error hierarchy, the `Llm` trait with its
//! request/response types, and the per-document output record shared by
//! the extraction, classification, and driver crates.

pub mod error;
pub mod record;
pub mod traits;

// Re-export commonly used types
pub use error::{CoreError, CoreResult};
pub use record::OutputRecord;
pub use traits::{ChatMessage, ChatRole, GenerationOptions, Llm, LlmConfig, LlmResponse};
