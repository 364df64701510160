//! Completion client: send one prompt, get one answer.
//!
//! The request is a plain OpenAI-style chat completion with a single user
//! message. There is no retry: a failed call fails the request that made it.
//!
//! ## Lenient response handling
//!
//! A non-2xx status is an error whose message is the response body, verbatim.
//! A 2xx body that parses as JSON but does not have the expected shape
//! (no `choices`, empty array, `content: null`, wrong types…) yields an empty
//! answer rather than an error. Only a body that is not JSON at all fails.

use crate::config::ServiceConfig;
use crate::error::ComplianceError;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 1],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// The subset of a chat-completion response we read. Every level is optional.
#[derive(Debug, Default, Deserialize)]
pub struct ChatResponse {
    #[serde(default)]
    pub choices: Option<Vec<Choice>>,
}

#[derive(Debug, Default, Deserialize)]
pub struct Choice {
    #[serde(default)]
    pub message: Option<ResponseMessage>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatResponse {
    /// `choices[0].message.content`, trimmed, or `""`.
    pub fn first_content(&self) -> String {
        self.choices
            .as_deref()
            .and_then(|c| c.first())
            .and_then(|c| c.message.as_ref())
            .and_then(|m| m.content.as_deref())
            .map(|s| s.trim().to_string())
            .unwrap_or_default()
    }

    /// Read a response body, degrading mis-shaped JSON to an empty response.
    pub fn from_body(body: &str) -> Result<Self, ComplianceError> {
        let value: serde_json::Value = serde_json::from_str(body)
            .map_err(|e| ComplianceError::CompletionDecode(e.to_string()))?;
        Ok(serde_json::from_value(value).unwrap_or_else(|e| {
            warn!("Unexpected completion response shape: {}", e);
            ChatResponse::default()
        }))
    }
}

/// Client for the chat-completions endpoint.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    url: String,
    api_key: Option<String>,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl CompletionClient {
    pub fn new(config: &ServiceConfig) -> Result<Self, ComplianceError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.completion_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder
            .build()
            .map_err(|e| ComplianceError::Internal(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            url: config.completions_url(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    /// Send `prompt` and return the model's answer (possibly empty).
    pub async fn complete(&self, prompt: &str) -> Result<String, ComplianceError> {
        let api_key = self.api_key.as_deref().ok_or(ComplianceError::MissingApiKey)?;
        let start = Instant::now();

        let request = ChatRequest {
            model: &self.model,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        debug!(
            "POST {} model={} prompt={} chars",
            self.url,
            self.model,
            prompt.chars().count()
        );
        let response = self
            .http
            .post(&self.url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            warn!("Completion endpoint returned HTTP {}", status);
            return Err(ComplianceError::CompletionStatus {
                status: status.as_u16(),
                body,
            });
        }

        let answer = ChatResponse::from_body(&body)?.first_content();
        info!(
            "Completion received: {} chars in {}ms",
            answer.len(),
            start.elapsed().as_millis()
        );
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_shape() {
        let req = ChatRequest {
            model: "deepseek-reasoner",
            messages: [ChatMessage {
                role: "user",
                content: "hola",
            }],
            temperature: 0.2,
            max_tokens: 1000,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["model"], "deepseek-reasoner");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hola");
        assert_eq!(json["max_tokens"], 1000);
        assert!((json["temperature"].as_f64().unwrap() - 0.2).abs() < 1e-6);
    }

    #[test]
    fn first_content_is_trimmed() {
        let r = ChatResponse::from_body(
            r#"{"choices":[{"message":{"role":"assistant","content":"  | a | b |\n "}}]}"#,
        )
        .unwrap();
        assert_eq!(r.first_content(), "| a | b |");
    }

    #[test]
    fn missing_or_odd_shapes_degrade_to_empty() {
        for body in [
            r#"{}"#,
            r#"{"choices":[]}"#,
            r#"{"choices":null}"#,
            r#"{"choices":[{}]}"#,
            r#"{"choices":[{"message":{"content":null}}]}"#,
            r#"{"choices":"nope"}"#,
            r#"{"choices":[{"message":{"content":42}}]}"#,
            r#"[1,2,3]"#,
        ] {
            let r = ChatResponse::from_body(body).unwrap();
            assert_eq!(r.first_content(), "", "body: {body}");
        }
    }

    #[test]
    fn non_json_body_is_an_error() {
        assert!(matches!(
            ChatResponse::from_body("<html>oops</html>"),
            Err(ComplianceError::CompletionDecode(_))
        ));
    }

    #[tokio::test]
    async fn missing_api_key_fails_at_call_time() {
        let client = CompletionClient::new(&ServiceConfig::default()).unwrap();
        let err = client.complete("x").await.unwrap_err();
        assert!(matches!(err, ComplianceError::MissingApiKey));
    }
}
