//! Translation provider HTTP client
//!
//! Issues a single GET per translation with the source text and a
//! `langpair=<source>|<target>` parameter, and extracts the translated text
//! from the provider's JSON payload. The response shape is trusted; anything
//! that fails to decode is reported as a provider response error.

use crate::{PolyglotError, Result};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Default provider endpoint (MyMemory translation API)
pub const DEFAULT_ENDPOINT: &str = "https://api.mymemory.translated.net/get";

/// Configuration for the translation provider client
#[derive(Clone, Debug)]
pub struct ProviderConfig {
    /// Endpoint URL for translation requests
    pub endpoint: String,

    /// Request timeout
    pub timeout: Duration,

    /// User agent sent with each request
    pub user_agent: String,

    /// Maximum queue size for pending translate commands
    pub queue_size: usize,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("polyglot/{}", env!("CARGO_PKG_VERSION")),
            queue_size: 32,
        }
    }
}

impl ProviderConfig {
    /// Override the endpoint URL
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Override the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Deserialize, Debug)]
struct ProviderResponse {
    #[serde(rename = "responseData")]
    response_data: ResponseData,
}

#[derive(Deserialize, Debug)]
struct ResponseData {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

/// HTTP client for the translation provider
#[derive(Clone)]
pub struct TranslationClient {
    client: Client,
    config: ProviderConfig,
}

impl TranslationClient {
    /// Create a client with pooled connections and the configured timeout
    pub fn new(config: ProviderConfig) -> Result<Self> {
        let client = Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(30))
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client, config })
    }

    /// Format a language pair the way the provider expects it
    pub fn language_pair(source: &str, target: &str) -> String {
        format!("{}|{}", source, target)
    }

    /// Translate `text` from `source` to `target`
    ///
    /// Returns the translated text, or an error covering network failure,
    /// a non-success status, or an unexpected response body.
    pub async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
        let langpair = Self::language_pair(source, target);
        debug!("Requesting translation ({})", langpair);

        let response = self
            .client
            .get(&self.config.endpoint)
            .query(&[("q", text), ("langpair", langpair.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PolyglotError::RequestError(format!(
                "provider returned {}",
                status
            )));
        }

        let body: ProviderResponse = response
            .json()
            .await
            .map_err(|e| PolyglotError::ResponseError(e.to_string()))?;

        Ok(body.response_data.translated_text)
    }
}
