//! Text-to-image background generation.
//!
//! The AI composite renderer treats generation as best effort: any [`GenerationError`] makes it
//! fall back to a local gradient, so errors here never reach callers.

use std::sync::Arc;

use serde::Serialize;

/// Hugging Face inference client.
pub mod hf;

/// Prompt used for every New Year background.
pub const NEW_YEAR_PROMPT: &str = "Beautiful New Year 2026 greeting card background with festive colors, fireworks, elegant design, celebration theme, high quality, professional, 1024x1024";

/// Negative prompt used for every New Year background.
pub const NEW_YEAR_NEGATIVE_PROMPT: &str = "blurry, low quality, distorted, text, words";

/// Fixed generation parameters sent to the collaborator.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TextToImageRequest {
    /// Positive prompt.
    pub prompt: String,
    /// Negative prompt.
    pub negative_prompt: String,
    /// Diffusion step count.
    pub num_inference_steps: u32,
    /// Classifier-free guidance scale.
    pub guidance_scale: f32,
}

impl TextToImageRequest {
    /// The festive background request. Nothing in it is user-configurable.
    pub fn new_year() -> Self {
        Self {
            prompt: NEW_YEAR_PROMPT.to_string(),
            negative_prompt: NEW_YEAR_NEGATIVE_PROMPT.to_string(),
            num_inference_steps: 25,
            guidance_scale: 7.5,
        }
    }
}

/// Why a background could not be generated.
#[derive(thiserror::Error, Debug)]
pub enum GenerationError {
    /// Network or IO failure, including timeouts.
    #[error("transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("service returned status {0}")]
    Status(u16),

    /// The response was not an image.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Generation is switched off.
    #[error("generation disabled")]
    Disabled,
}

/// Produces an encoded background raster for a request.
pub trait BackgroundGenerator: Send + Sync {
    /// Run one request/response exchange. Implementations must not retry.
    fn generate(&self, request: &TextToImageRequest) -> Result<Vec<u8>, GenerationError>;
}

impl<T: BackgroundGenerator + ?Sized> BackgroundGenerator for Arc<T> {
    fn generate(&self, request: &TextToImageRequest) -> Result<Vec<u8>, GenerationError> {
        (**self).generate(request)
    }
}

/// Generator that always fails, forcing the local fallback background.
#[derive(Clone, Copy, Debug, Default)]
pub struct DisabledGenerator;

impl BackgroundGenerator for DisabledGenerator {
    fn generate(&self, _request: &TextToImageRequest) -> Result<Vec<u8>, GenerationError> {
        Err(GenerationError::Disabled)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generate/mod.rs"]
mod tests;
