//! OpenAI completions client.
//!
//! Calls the legacy `POST {base_url}/completions` endpoint with fixed sampling
//! parameters and returns the first choice's text.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use quill_core::ports::{CompletionClient, CompletionError};

/// Upper bound on generated tokens per request.
const MAX_TOKENS: u32 = 100;
/// Sampling temperature sent with every request.
const TEMPERATURE: f64 = 0.6;

/// OpenAI connection configuration.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    pub api_key: String,
    /// API root, e.g. `https://api.openai.com/v1`
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl OpenAiConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-3.5-turbo-instruct".to_string(),
            timeout: Duration::from_secs(60),
        }
    }
}

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    max_tokens: u32,
    temperature: f64,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    text: String,
}

/// [`CompletionClient`] backed by the OpenAI HTTP API.
pub struct OpenAiCompletionClient {
    client: reqwest::Client,
    config: OpenAiConfig,
}

impl OpenAiCompletionClient {
    /// Fails only when the TLS backend cannot be initialised.
    pub fn new(config: OpenAiConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}/completions", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    async fn generate_text(&self, prompt: &str) -> Result<String, CompletionError> {
        if self.config.api_key.trim().is_empty() {
            return Err(CompletionError::NotConfigured);
        }

        let request = CompletionRequest {
            model: &self.config.model,
            prompt,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
        };

        tracing::debug!(model = %self.config.model, prompt_len = prompt.len(), "Requesting completion");

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = %status, "Completion provider rejected request");
            return Err(CompletionError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        let parsed: CompletionResponse = response
            .json()
            .await
            .map_err(|e| CompletionError::InvalidResponse(e.to_string()))?;

        parsed
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.text)
            .ok_or_else(|| CompletionError::InvalidResponse("response has no choices".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer, api_key: &str) -> OpenAiCompletionClient {
        let mut config = OpenAiConfig::new(api_key);
        config.base_url = server.uri();
        config.timeout = Duration::from_secs(5);
        OpenAiCompletionClient::new(config).unwrap()
    }

    #[tokio::test]
    async fn test_returns_first_choice_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({
                "prompt": "Once upon a time",
                "max_tokens": 100,
                "temperature": 0.6
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{ "text": " there was a crab." }, { "text": "ignored" }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server, "sk-test");
        let text = client.generate_text("Once upon a time").await.unwrap();
        assert_eq!(text, " there was a crab.");
    }

    #[tokio::test]
    async fn test_rejected_key_is_an_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/completions"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api key"))
            .mount(&server)
            .await;

        let client = client_for(&server, "sk-wrong");
        let err = client.generate_text("hello").await.unwrap_err();
        match err {
            CompletionError::Upstream { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "invalid api key");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_key_never_calls_provider() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let client = client_for(&server, "  ");
        let err = client.generate_text("hello").await.unwrap_err();
        assert!(matches!(err, CompletionError::NotConfigured));
    }

    #[tokio::test]
    async fn test_no_choices_is_invalid() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
            .mount(&server)
            .await;

        let client = client_for(&server, "sk-test");
        let err = client.generate_text("hello").await.unwrap_err();
        assert!(matches!(err, CompletionError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_transport_error() {
        let mut config = OpenAiConfig::new("sk-test");
        config.base_url = "http://127.0.0.1:1".to_string();
        config.timeout = Duration::from_secs(2);
        let client = OpenAiCompletionClient::new(config).unwrap();

        let err = client.generate_text("hello").await.unwrap_err();
        assert!(matches!(err, CompletionError::Transport(_)));
    }

    #[tokio::test]
    async fn test_configured_timeout_applies() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "choices": [{ "text": "late" }] }))
                    .set_delay(Duration::from_secs(3)),
            )
            .mount(&server)
            .await;

        let mut config = OpenAiConfig::new("sk-test");
        config.base_url = server.uri();
        config.timeout = Duration::from_millis(200);
        let client = OpenAiCompletionClient::new(config).unwrap();

        let err = client.generate_text("hello").await.unwrap_err();
        assert!(matches!(err, CompletionError::Transport(_)));
    }
}
