//! Summarizer: provider abstraction over the external abstractive model.
//!
//! The model backend is an injected capability behind [`SummaryProvider`], so
//! the pipeline never knows whether it is talking to the Hugging Face
//! Inference API, a mock, or nothing at all. Failures never escape this
//! module: the pipeline receives either a summary or a descriptive
//! placeholder string.

use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Texts shorter than this (in chars) are passed through unchanged —
/// abstractive summarization of a one-liner is not worth a model call.
pub const SHORT_TEXT_THRESHOLD: usize = 50;

/// Fixed decode bounds for the abstractive model.
const MIN_SUMMARY_TOKENS: u32 = 20;
const MAX_SUMMARY_TOKENS: u32 = 100;

// ------------------------------------------------------------
// Provider abstraction + concrete providers
// ------------------------------------------------------------

/// Low-level provider: does the *real* remote inference call. Separated from
/// [`Summarizer`] so tests can swap in a deterministic backend.
#[async_trait::async_trait]
pub trait SummaryProvider: Send + Sync {
    async fn fetch(&self, text: &str) -> Result<String>;
    /// Provider name for diagnostics.
    fn name(&self) -> &'static str;
}

/// Trait-object alias used by the pipeline and app state.
pub type DynSummaryProvider = Arc<dyn SummaryProvider>;

/// Config loaded from `config/summarizer.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummarizerConfig {
    pub enabled: bool,
    /// "huggingface" is the only real backend for now.
    pub provider: Option<String>,
    /// Model id override; defaults to facebook/bart-large-cnn.
    pub model: Option<String>,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            provider: None,
            model: None,
        }
    }
}

/// Load config from `config/summarizer.json`. Reading/parsing failures fall
/// back to `SummarizerConfig::default()` (summarization off).
pub fn load_summarizer_config() -> SummarizerConfig {
    let path = Path::new("config/summarizer.json");
    match fs::read_to_string(path) {
        Ok(s) => serde_json::from_str(&s).unwrap_or_default(),
        Err(_) => SummarizerConfig::default(),
    }
}

/// Factory: build a provider according to config and environment.
///
/// * If `SUMMARIZER_TEST_MODE=mock`, returns a deterministic mock provider.
/// * Else if `config.enabled == false`, returns a disabled provider.
/// * Else builds the real Hugging Face backend.
pub fn build_provider_from_config(config: &SummarizerConfig) -> DynSummaryProvider {
    if std::env::var("SUMMARIZER_TEST_MODE")
        .map(|v| v == "mock")
        .unwrap_or(false)
    {
        return Arc::new(MockProvider {
            fixed: "Mock summary of the emergency report.".to_string(),
        });
    }

    if !config.enabled {
        return Arc::new(DisabledProvider);
    }

    match config.provider.as_deref() {
        Some("huggingface") => Arc::new(HfBartProvider::new(config.model.as_deref())),
        _ => Arc::new(DisabledProvider),
    }
}

/// Hugging Face Inference API provider. Requires `HF_API_TOKEN`.
pub struct HfBartProvider {
    http: reqwest::Client,
    api_token: String,
    model: String,
}

impl HfBartProvider {
    /// `model_override`: pass Some("facebook/bart-large-cnn") to override;
    /// that is also the default.
    pub fn new(model_override: Option<&str>) -> Self {
        let api_token = std::env::var("HF_API_TOKEN").unwrap_or_default();
        let http = reqwest::Client::builder()
            .user_agent("emergency-triage/0.1")
            .connect_timeout(Duration::from_secs(4))
            .timeout(Duration::from_secs(60))
            .build()
            .expect("reqwest client");
        let model = model_override
            .unwrap_or("facebook/bart-large-cnn")
            .to_string();
        Self {
            http,
            api_token,
            model,
        }
    }
}

#[async_trait::async_trait]
impl SummaryProvider for HfBartProvider {
    async fn fetch(&self, text: &str) -> Result<String> {
        if self.api_token.is_empty() {
            return Err(anyhow!("HF_API_TOKEN is not set"));
        }

        #[derive(Serialize)]
        struct Params {
            min_length: u32,
            max_length: u32,
            do_sample: bool,
        }
        #[derive(Serialize)]
        struct Req<'a> {
            inputs: &'a str,
            parameters: Params,
        }
        #[derive(Deserialize)]
        struct RespItem {
            summary_text: String,
        }

        let req = Req {
            inputs: text,
            parameters: Params {
                min_length: MIN_SUMMARY_TOKENS,
                max_length: MAX_SUMMARY_TOKENS,
                // Deterministic decoding: the same report summarizes the same way.
                do_sample: false,
            },
        };

        let url = format!("https://api-inference.huggingface.co/models/{}", self.model);
        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_token)
            .json(&req)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(anyhow!("inference API returned {status}"));
        }

        let body: Vec<RespItem> = resp.json().await?;
        body.into_iter()
            .next()
            .map(|it| it.summary_text)
            .ok_or_else(|| anyhow!("inference API returned an empty result"))
    }

    fn name(&self) -> &'static str {
        "huggingface"
    }
}

/// Always errors; used when summarization is configured off. Short texts
/// still pass through the [`Summarizer`] untouched.
pub struct DisabledProvider;

#[async_trait::async_trait]
impl SummaryProvider for DisabledProvider {
    async fn fetch(&self, _text: &str) -> Result<String> {
        Err(anyhow!("summarization is disabled"))
    }

    fn name(&self) -> &'static str {
        "disabled"
    }
}

/// Fixed-output provider for tests/local runs.
#[derive(Clone)]
pub struct MockProvider {
    pub fixed: String,
}

#[async_trait::async_trait]
impl SummaryProvider for MockProvider {
    async fn fetch(&self, _text: &str) -> Result<String> {
        Ok(self.fixed.clone())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

// ------------------------------------------------------------
// Pipeline-facing wrapper
// ------------------------------------------------------------

/// Wraps a provider with the short-text bypass and failure degradation.
#[derive(Clone)]
pub struct Summarizer {
    provider: DynSummaryProvider,
}

impl Summarizer {
    pub fn new(provider: DynSummaryProvider) -> Self {
        Self { provider }
    }

    /// Build from `config/summarizer.json` + environment.
    pub fn from_config() -> Self {
        let cfg = load_summarizer_config();
        Self::new(build_provider_from_config(&cfg))
    }

    /// Summarize `text`. Never fails:
    /// - inputs under [`SHORT_TEXT_THRESHOLD`] chars are returned unchanged;
    /// - provider errors degrade to a placeholder embedding the reason.
    pub async fn summarize(&self, text: &str) -> String {
        if text.chars().count() < SHORT_TEXT_THRESHOLD {
            return text.to_string();
        }

        match self.provider.fetch(text).await {
            Ok(summary) => summary,
            Err(e) => {
                warn!(provider = self.provider.name(), error = %e, "summary generation failed");
                format!("Summary generation failed: {e}")
            }
        }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }
}
