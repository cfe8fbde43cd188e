//! OpenAI chat-completions provider.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use doctriage_core::error::{CoreError, CoreResult};
use doctriage_core::traits::{
    ChatMessage, ChatRole, GenerationOptions, Llm, LlmConfig, LlmResponse,
};

const OPENAI_API_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o";

/// OpenAI LLM provider.
pub struct OpenAiProvider {
    client: Client,
    config: LlmConfig,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<WireMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct WireMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl OpenAiProvider {
    /// Create a new OpenAI LLM provider.
    pub fn new(config: LlmConfig) -> CoreResult<Self> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("OPENAI_API_KEY").ok())
            .ok_or_else(|| {
                CoreError::configuration("OpenAI API key not found. Set OPENAI_API_KEY environment variable or provide api_key in config.")
            })?;

        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::AUTHORIZATION,
            format!("Bearer {}", api_key)
                .parse()
                .map_err(|_| CoreError::configuration("Invalid API key format"))?,
        );

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| CoreError::configuration(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| OPENAI_API_URL.to_string());

        let mut config = config;
        if config.model.is_empty() {
            config.model = DEFAULT_MODEL.to_string();
        }

        Ok(Self {
            client,
            config,
            base_url,
        })
    }

    fn role_str(role: ChatRole) -> &'static str {
        match role {
            ChatRole::System => "system",
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

#[async_trait]
impl Llm for OpenAiProvider {
    async fn generate(
        &self,
        messages: &[ChatMessage],
        options: Option<GenerationOptions>,
    ) -> CoreResult<LlmResponse> {
        let options = options.unwrap_or_default();

        let wire_messages: Vec<WireMessage> = messages
            .iter()
            .map(|m| WireMessage {
                role: Self::role_str(m.role).to_string(),
                content: m.content.clone(),
            })
            .collect();

        let request = ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: wire_messages,
            temperature: Some(options.temperature.unwrap_or(self.config.temperature)),
            max_tokens: options.max_tokens,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| CoreError::llm(format!("OpenAI API request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CoreError::llm(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            let error: Result<ApiError, _> = serde_json::from_str(&body);
            let message = error
                .map(|e| e.error.message)
                .unwrap_or_else(|_| body.clone());
            return Err(CoreError::llm(format!(
                "OpenAI API error ({}): {}",
                status, message
            )));
        }

        let response: ChatCompletionResponse = serde_json::from_str(&body)
            .map_err(|e| CoreError::llm(format!("Failed to parse response: {}", e)))?;

        let content = response
            .choices
            .first()
            .and_then(|c| c.message.content.clone());

        Ok(LlmResponse { content })
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_str() {
        assert_eq!(OpenAiProvider::role_str(ChatRole::System), "system");
        assert_eq!(OpenAiProvider::role_str(ChatRole::User), "user");
        assert_eq!(OpenAiProvider::role_str(ChatRole::Assistant), "assistant");
    }

    #[test]
    fn test_parse_completion_response() {
        let body = r#"{
            "id": "chatcmpl-abc",
            "object": "chat.completion",
            "choices": [
                {
                    "index": 0,
                    "message": {"role": "assistant", "content": "{\"clasificacion\": \"Factura\"}"},
                    "finish_reason": "stop"
                }
            ]
        }"#;
        let response: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(
            response.choices[0].message.content.as_deref(),
            Some("{\"clasificacion\": \"Factura\"}")
        );
    }

    #[test]
    fn test_parse_api_error_body() {
        let body = r#"{"error": {"message": "Incorrect API key provided", "type": "invalid_request_error"}}"#;
        let error: ApiError = serde_json::from_str(body).unwrap();
        assert_eq!(error.error.message, "Incorrect API key provided");
    }

    #[test]
    fn test_request_omits_unset_max_tokens() {
        let request = ChatCompletionRequest {
            model: "gpt-4o".to_string(),
            messages: vec![],
            temperature: Some(0.0),
            max_tokens: None,
        };
        let json = serde_json::to_string(&request).unwrap();
        assert!(!json.contains("max_tokens"));
        assert!(json.contains("\"temperature\":0.0"));
    }

    #[test]
    fn test_explicit_key_fills_default_model() {
        let provider = OpenAiProvider::new(LlmConfig {
            api_key: Some("sk-test".to_string()),
            ..LlmConfig::default()
        })
        .unwrap();
        assert_eq!(provider.model_name(), DEFAULT_MODEL);
    }
}
