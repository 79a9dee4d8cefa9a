use std::sync::Arc;

use async_trait::async_trait;

use crate::config::Settings;
use crate::llm::openai::OpenAiClient;
use crate::{LectioError, Result};

/// The single capability the engine needs from a model provider.
///
/// Injected as a trait object so tests can substitute a deterministic fake
/// without touching environment state.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Send one prompt, get the raw response text back.
    async fn invoke(&self, prompt: &str) -> Result<String>;
}

/// Build a model client from runtime settings.
pub fn build_client(settings: &Settings) -> Result<Arc<dyn ModelClient>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "openai" => Ok(Arc::new(OpenAiClient::from_settings(settings)?)),
        other => Err(LectioError::Config(format!(
            "Unsupported llm.provider '{other}'. Supported providers: openai"
        ))),
    }
}
