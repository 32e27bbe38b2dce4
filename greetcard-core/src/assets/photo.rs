use crate::{
    assets::decode::{DecodedImage, decode_image},
    assets::fetch::ResourceFetcher,
    foundation::error::{CardError, CardResult},
};

/// Where the subject photo comes from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PhotoSource {
    /// Raw encoded image bytes.
    Bytes(Vec<u8>),
    /// A `data:` URL, file path, `file://` URL or `http(s)://` URL.
    Reference(String),
}

impl PhotoSource {
    /// Short description for logs; never includes inline data.
    pub fn describe(&self) -> String {
        match self {
            Self::Bytes(b) => format!("{} inline bytes", b.len()),
            Self::Reference(r) if r.starts_with("data:") => "data URL".to_string(),
            Self::Reference(r) => r.clone(),
        }
    }
}

impl From<Vec<u8>> for PhotoSource {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&str> for PhotoSource {
    fn from(reference: &str) -> Self {
        Self::Reference(reference.to_string())
    }
}

impl From<String> for PhotoSource {
    fn from(reference: String) -> Self {
        Self::Reference(reference)
    }
}

/// Load and decode the subject photo.
///
/// Every failure here maps to [`CardError::Photo`]: without the subject photo there is no card.
pub fn load_photo(source: &PhotoSource, fetcher: &dyn ResourceFetcher) -> CardResult<DecodedImage> {
    let fetched;
    let bytes = match source {
        PhotoSource::Bytes(b) => b.as_slice(),
        PhotoSource::Reference(r) => {
            fetched = fetcher
                .fetch(r)
                .map_err(|e| CardError::photo(format!("load {}: {e}", source.describe())))?;
            fetched.bytes.as_slice()
        }
    };

    decode_image(bytes).map_err(|e| CardError::photo(format!("{}: {e}", source.describe())))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/photo.rs"]
mod tests;
