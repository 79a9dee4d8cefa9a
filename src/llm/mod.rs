//! LLM integration.
//!
//! A narrow capability trait (`invoke(prompt) -> text`) plus the
//! provider adapters behind it and the per-artifact prompt templates.

mod client;
mod openai;
pub mod prompts;

pub use client::{build_client, ModelClient};
pub use openai::OpenAiClient;
