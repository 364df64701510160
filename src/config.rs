//! Configuration types for document review.
//!
//! Everything the service needs to reach its collaborators lives in
//! [`ServiceConfig`], built via [`ServiceConfigBuilder`]. Secrets are optional
//! on purpose: a missing API key or database URL is only reported when the
//! call that needs it is made, so the server can start (and serve the form)
//! with neither configured.

use crate::error::ComplianceError;
use std::fmt;

/// Default completion endpoint host.
pub const DEFAULT_BASE_URL: &str = "https://api.deepseek.com";

/// Default model identifier sent with every completion request.
pub const DEFAULT_MODEL: &str = "deepseek-reasoner";

/// Configuration for the review service.
///
/// Built via [`ServiceConfig::builder()`] or using
/// [`ServiceConfig::default()`].
///
/// # Example
/// ```rust
/// use docx_compliance::ServiceConfig;
///
/// let config = ServiceConfig::builder()
///     .api_key("sk-test")
///     .model("deepseek-chat")
///     .build()
///     .unwrap();
/// assert_eq!(config.model, "deepseek-chat");
/// ```
#[derive(Clone)]
pub struct ServiceConfig {
    /// Bearer token for the completion endpoint. Default: None.
    pub api_key: Option<String>,

    /// Postgres connection string for the health probe. Default: None.
    pub database_url: Option<String>,

    /// Scheme and host of the completion API, without the `/v1/...` path.
    /// Default: [`DEFAULT_BASE_URL`].
    pub completion_base_url: String,

    /// Model identifier. Default: [`DEFAULT_MODEL`].
    pub model: String,

    /// Sampling temperature. Default: 0.2.
    ///
    /// Low values keep the table stable between runs on the same document.
    pub temperature: f32,

    /// Maximum tokens the model may generate. Default: 1000.
    pub max_tokens: u32,

    /// Timeout for the completion call in seconds. Default: None (wait forever).
    pub completion_timeout_secs: Option<u64>,

    /// Largest accepted request body in bytes. Default: 50 MiB.
    pub max_upload_bytes: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            database_url: None,
            completion_base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: 0.2,
            max_tokens: 1000,
            completion_timeout_secs: None,
            max_upload_bytes: 50 * 1024 * 1024,
        }
    }
}

impl fmt::Debug for ServiceConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field(
                "database_url",
                &self.database_url.as_ref().map(|_| "<redacted>"),
            )
            .field("completion_base_url", &self.completion_base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("max_tokens", &self.max_tokens)
            .field("completion_timeout_secs", &self.completion_timeout_secs)
            .field("max_upload_bytes", &self.max_upload_bytes)
            .finish()
    }
}

impl ServiceConfig {
    /// Create a new builder for `ServiceConfig`.
    pub fn builder() -> ServiceConfigBuilder {
        ServiceConfigBuilder {
            config: Self::default(),
        }
    }

    /// Full URL of the chat-completions endpoint.
    pub fn completions_url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.completion_base_url.trim_end_matches('/')
        )
    }
}

/// Builder for [`ServiceConfig`].
#[derive(Debug)]
pub struct ServiceConfigBuilder {
    config: ServiceConfig,
}

impl ServiceConfigBuilder {
    /// Empty strings are treated as "not set", matching how an unset
    /// environment variable usually reaches us through clap.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = non_empty(key.into());
        self
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.config.database_url = non_empty(url.into());
        self
    }

    pub fn completion_base_url(mut self, url: impl Into<String>) -> Self {
        self.config.completion_base_url = url.into();
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = model.into();
        self
    }

    pub fn temperature(mut self, t: f32) -> Self {
        self.config.temperature = t;
        self
    }

    pub fn max_tokens(mut self, n: u32) -> Self {
        self.config.max_tokens = n;
        self
    }

    pub fn completion_timeout_secs(mut self, secs: Option<u64>) -> Self {
        self.config.completion_timeout_secs = secs.filter(|s| *s > 0);
        self
    }

    pub fn max_upload_bytes(mut self, n: usize) -> Self {
        self.config.max_upload_bytes = n;
        self
    }

    /// Build the configuration, validating constraints.
    ///
    /// Secrets are not checked here.
    pub fn build(self) -> Result<ServiceConfig, ComplianceError> {
        let c = &self.config;
        if c.model.trim().is_empty() {
            return Err(ComplianceError::InvalidConfig(
                "model must not be empty".into(),
            ));
        }
        if !(c.completion_base_url.starts_with("http://")
            || c.completion_base_url.starts_with("https://"))
        {
            return Err(ComplianceError::InvalidConfig(format!(
                "completion base URL must be http(s), got '{}'",
                c.completion_base_url
            )));
        }
        if !(0.0..=2.0).contains(&c.temperature) {
            return Err(ComplianceError::InvalidConfig(format!(
                "temperature must be 0.0–2.0, got {}",
                c.temperature
            )));
        }
        if c.max_tokens == 0 {
            return Err(ComplianceError::InvalidConfig(
                "max_tokens must be ≥ 1".into(),
            ));
        }
        if c.max_upload_bytes == 0 {
            return Err(ComplianceError::InvalidConfig(
                "max_upload_bytes must be ≥ 1".into(),
            ));
        }
        Ok(self.config)
    }
}

fn non_empty(s: String) -> Option<String> {
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}
