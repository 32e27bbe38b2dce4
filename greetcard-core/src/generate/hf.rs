use std::time::Duration;

use crate::{
    assets::fetch::{DEFAULT_HTTP_TIMEOUT, DEFAULT_MAX_FETCH_BYTES, USER_AGENT},
    generate::{BackgroundGenerator, GenerationError, TextToImageRequest},
};

/// Default inference endpoint base; the model id is appended as a path segment.
pub const DEFAULT_INFERENCE_URL: &str = "https://router.huggingface.co/hf-inference/models";

/// Model used for backgrounds.
pub const DEFAULT_MODEL: &str = "stabilityai/stable-diffusion-xl-base-1.0";

/// Blocking client for a Hugging Face style text-to-image endpoint.
#[derive(Clone)]
pub struct HfInferenceClient {
    base_url: String,
    model: String,
    token: Option<String>,
    timeout: Duration,
    max_size: usize,
}

impl std::fmt::Debug for HfInferenceClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HfInferenceClient")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for HfInferenceClient {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_INFERENCE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            token: None,
            timeout: DEFAULT_HTTP_TIMEOUT,
            max_size: DEFAULT_MAX_FETCH_BYTES,
        }
    }
}

impl HfInferenceClient {
    /// Client for the default endpoint and model, without credentials.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the endpoint base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Override the model id.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Bearer token sent with each request.
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.trim().is_empty());
        self
    }

    /// Request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Full URL requests are posted to.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.model.trim_start_matches('/')
        )
    }

    /// JSON body for `request`.
    pub fn payload(request: &TextToImageRequest) -> serde_json::Value {
        serde_json::json!({
            "inputs": request.prompt,
            "parameters": {
                "negative_prompt": request.negative_prompt,
                "num_inference_steps": request.num_inference_steps,
                "guidance_scale": request.guidance_scale,
            },
        })
    }
}

impl BackgroundGenerator for HfInferenceClient {
    #[tracing::instrument(skip_all, fields(model = %self.model))]
    fn generate(&self, request: &TextToImageRequest) -> Result<Vec<u8>, GenerationError> {
        let body = serde_json::to_string(&Self::payload(request))
            .map_err(|e| GenerationError::Transport(format!("encode request: {e}")))?;

        let config = ureq::Agent::config_builder()
            .timeout_global(Some(self.timeout))
            .build();
        let agent: ureq::Agent = config.into();

        let mut req = agent
            .post(&self.endpoint())
            .header("User-Agent", USER_AGENT)
            .header("Content-Type", "application/json")
            .header("Accept", "image/png");
        if let Some(token) = &self.token {
            req = req.header("Authorization", &format!("Bearer {token}"));
        }

        let mut response = req.send(body.as_bytes()).map_err(|e| match e {
            ureq::Error::StatusCode(code) => GenerationError::Status(code),
            other => GenerationError::Transport(other.to_string()),
        })?;

        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string());
        let bytes = response
            .body_mut()
            .with_config()
            .limit(self.max_size as u64)
            .read_to_vec()
            .map_err(|e| GenerationError::Transport(format!("read body: {e}")))?;

        tracing::debug!(len = bytes.len(), ?content_type, "inference response");
        check_image_response(content_type.as_deref(), bytes)
    }
}

/// Accept `bytes` only when they look like a raster image.
///
/// JSON bodies (error payloads, queued-model notices) and empty bodies are rejected.
pub fn check_image_response(
    content_type: Option<&str>,
    bytes: Vec<u8>,
) -> Result<Vec<u8>, GenerationError> {
    if bytes.is_empty() {
        return Err(GenerationError::MalformedResponse("empty body".to_string()));
    }
    match content_type {
        Some(ct) if ct.starts_with("image/") => Ok(bytes),
        Some(ct) if ct.contains("json") => {
            let detail = serde_json::from_slice::<serde_json::Value>(&bytes)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
                .unwrap_or_else(|| "json body".to_string());
            Err(GenerationError::MalformedResponse(detail))
        }
        _ if image::guess_format(&bytes).is_ok() => Ok(bytes),
        other => Err(GenerationError::MalformedResponse(format!(
            "unexpected content type {other:?}"
        ))),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generate/hf.rs"]
mod tests;
