use std::{path::PathBuf, sync::Arc, time::Duration};

use serde::Deserialize;

use crate::{
    assets::fetch::{DEFAULT_HTTP_TIMEOUT, DEFAULT_MAX_FETCH_BYTES, HttpFetcher},
    foundation::error::{CardError, CardResult},
    generate::hf::{DEFAULT_INFERENCE_URL, HfInferenceClient},
    render::text::FontOptions,
};

/// Runtime configuration shared by both renderers.
#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct CardConfig {
    /// Bearer token for the inference service.
    pub hf_token: Option<String>,
    /// Inference endpoint base URL.
    pub inference_url: String,
    /// Timeout for every HTTP request, in seconds.
    pub http_timeout_secs: u64,
    /// Response size cap in bytes.
    pub max_fetch_bytes: usize,
    /// Font file registered for captions.
    pub font_path: Option<PathBuf>,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            hf_token: None,
            inference_url: DEFAULT_INFERENCE_URL.to_string(),
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT.as_secs(),
            max_fetch_bytes: DEFAULT_MAX_FETCH_BYTES,
            font_path: None,
        }
    }
}

impl CardConfig {
    /// Defaults overridden by `GREETCARD_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by values from `lookup`; unparsable numbers keep their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut cfg = Self::default();
        cfg.hf_token = lookup("GREETCARD_HF_TOKEN")
            .or_else(|| lookup("HF_TOKEN"))
            .filter(|t| !t.trim().is_empty());
        if let Some(url) = lookup("GREETCARD_INFERENCE_URL").filter(|u| !u.trim().is_empty()) {
            cfg.inference_url = url;
        }
        if let Some(secs) = parse_positive::<u64>(&lookup, "GREETCARD_HTTP_TIMEOUT_SECS") {
            cfg.http_timeout_secs = secs;
        }
        if let Some(bytes) = parse_positive::<usize>(&lookup, "GREETCARD_MAX_FETCH_BYTES") {
            cfg.max_fetch_bytes = bytes;
        }
        cfg.font_path = lookup("GREETCARD_FONT_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        cfg
    }

    /// HTTP timeout as a [`Duration`].
    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Fetcher honoring the timeout and size cap.
    pub fn fetcher(&self) -> HttpFetcher {
        HttpFetcher::new()
            .with_timeout(self.http_timeout())
            .with_max_size(self.max_fetch_bytes)
    }

    /// Inference client for the configured endpoint and token.
    pub fn inference_client(&self) -> HfInferenceClient {
        HfInferenceClient::new()
            .with_base_url(self.inference_url.clone())
            .with_token(self.hf_token.clone())
            .with_timeout(self.http_timeout())
    }

    /// Font options, reading the configured font file if any.
    pub fn font_options(&self) -> CardResult<FontOptions> {
        let Some(path) = &self.font_path else {
            return Ok(FontOptions::default());
        };
        let bytes = std::fs::read(path).map_err(|e| {
            CardError::validation(format!("read font '{}': {e}", path.display()))
        })?;
        Ok(FontOptions::default().with_font_bytes(Arc::new(bytes)))
    }
}

fn parse_positive<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T>
where
    T: std::str::FromStr + PartialOrd + Default,
{
    let raw = lookup(key)?;
    match raw.trim().parse::<T>() {
        Ok(v) if v > T::default() => Some(v),
        _ => {
            tracing::warn!(key, value = %raw, "ignoring invalid configuration value");
            None
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
