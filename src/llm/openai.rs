use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::llm::client::ModelClient;
use crate::{LectioError, Result};

const DEFAULT_OPENAI_ENDPOINT: &str = "https://api.openai.com/v1";
const DEFAULT_OPENAI_MODEL: &str = "gpt-3.5-turbo";

/// Fixed sampling temperature for all artifact generations.
const TEMPERATURE: f32 = 0.7;

#[derive(Debug)]
pub struct OpenAiClient {
    http: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl OpenAiClient {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let api_key = settings.llm.api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(LectioError::MissingCredential {
                provider: "OpenAI".to_string(),
            });
        }

        let model = if settings.llm.model.trim().is_empty() {
            DEFAULT_OPENAI_MODEL.to_string()
        } else {
            settings.llm.model.trim().to_string()
        };

        let endpoint = if settings.llm.endpoint.trim().is_empty() {
            DEFAULT_OPENAI_ENDPOINT.to_string()
        } else {
            settings
                .llm
                .endpoint
                .trim()
                .trim_end_matches('/')
                .to_string()
        };

        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(settings.llm.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_key,
            model,
            endpoint,
        })
    }

    fn request_url(&self) -> String {
        format!("{}/chat/completions", self.endpoint)
    }
}

#[async_trait]
impl ModelClient for OpenAiClient {
    async fn invoke(&self, prompt: &str) -> Result<String> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: TEMPERATURE,
        };

        let response = self
            .http
            .post(self.request_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let payload: ChatCompletionResponse = response.json().await?;

        payload
            .choices
            .iter()
            .filter_map(|c| c.message.content.as_deref())
            .map(str::trim)
            .find(|t| !t.is_empty())
            .map(str::to_string)
            .ok_or_else(|| {
                LectioError::ModelResponse("response contained no completion text".to_string())
            })
    }
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ChatResponseMessage {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    fn settings_with_key() -> Settings {
        let mut settings = Settings::default();
        settings.llm.api_key = "test-key".to_string();
        settings
    }

    #[test]
    fn defaults_apply_when_settings_are_blank() {
        let client = OpenAiClient::from_settings(&settings_with_key()).unwrap();
        assert_eq!(client.model, DEFAULT_OPENAI_MODEL);
        assert_eq!(
            client.request_url(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn endpoint_trailing_slash_is_trimmed() {
        let mut settings = settings_with_key();
        settings.llm.endpoint = "http://localhost:8080/v1/".to_string();

        let client = OpenAiClient::from_settings(&settings).unwrap();
        assert_eq!(client.request_url(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn blank_api_key_is_rejected() {
        let mut settings = Settings::default();
        settings.llm.api_key = "   ".to_string();

        let err = OpenAiClient::from_settings(&settings).unwrap_err();
        assert!(matches!(err, LectioError::MissingCredential { .. }));
    }
}
