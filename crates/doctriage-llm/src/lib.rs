//! doctriage-llm - LLM provider and document classifier.
//!
//! Provides the OpenAI chat-completions provider implementing the core
//! [`Llm`](doctriage_core::traits::Llm) trait, and the [`Classifier`]
//! that sends extracted document text to the model with the fixed
//! classification instruction.
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use doctriage_core::traits::{Llm, LlmConfig};
//! use doctriage_llm::{Classifier, OpenAiProvider};
//!
//! let llm: Arc<dyn Llm> = Arc::new(OpenAiProvider::new(LlmConfig::default())?);
//! let classifier = Classifier::new(llm);
//! let resultado = classifier.classify("Invoice #123, Total: $50").await?;
//! ```

mod classifier;
mod openai;

pub use classifier::Classifier;
pub use openai::OpenAiProvider;

// Re-export core types for convenience
pub use doctriage_core::traits::{Llm, LlmConfig};
