/// Convenience result type used across the card engine.
pub type CardResult<T> = Result<T, CardError>;

/// Top-level error taxonomy used by renderer APIs.
///
/// Only [`CardError::Photo`] is produced by a render once its inputs are valid: overlay and
/// background failures are recovered inside the renderers.
#[derive(thiserror::Error, Debug)]
pub enum CardError {
    /// Invalid caller-provided data (empty name, unknown template id, bad config).
    #[error("validation error: {0}")]
    Validation(String),

    /// The user photo could not be loaded or decoded.
    #[error("photo error: {0}")]
    Photo(String),

    /// A resource could not be fetched.
    #[error("fetch error: {0}")]
    Fetch(String),

    /// Raster bytes could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// Errors while rasterizing a card plan.
    #[error("render error: {0}")]
    Render(String),

    /// Errors while encoding the final raster.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CardError {
    /// Build a [`CardError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`CardError::Photo`] value.
    pub fn photo(msg: impl Into<String>) -> Self {
        Self::Photo(msg.into())
    }

    /// Build a [`CardError::Fetch`] value.
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    /// Build a [`CardError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`CardError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`CardError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Whether this error means the subject photo was unusable.
    pub fn is_photo(&self) -> bool {
        matches!(self, Self::Photo(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
