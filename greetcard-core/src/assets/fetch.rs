//! Resource fetching for overlays and referenced photos.
//!
//! Renderers never talk to the network directly: they go through a [`ResourceFetcher`], which
//! lets tests inject fakes and lets callers add caching or offline policies.

use std::sync::Arc;
use std::time::Duration;

use base64::Engine as _;

use crate::foundation::error::{CardError, CardResult};

/// Default timeout for HTTP requests.
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Default cap on response body size.
pub const DEFAULT_MAX_FETCH_BYTES: usize = 50 * 1024 * 1024;

/// User-Agent sent with HTTP requests.
pub const USER_AGENT: &str = concat!("greetcard/", env!("CARGO_PKG_VERSION"));

/// Bytes of a fetched resource.
#[derive(Debug, Clone)]
pub struct FetchedResource {
    /// Raw body bytes.
    pub bytes: Vec<u8>,
    /// Content-Type, if known (e.g. `image/png`).
    pub content_type: Option<String>,
}

impl FetchedResource {
    /// Create a new fetched resource.
    pub fn new(bytes: Vec<u8>, content_type: Option<String>) -> Self {
        Self {
            bytes,
            content_type,
        }
    }

    /// Whether the content type says this is an image.
    pub fn is_image(&self) -> bool {
        self.content_type
            .as_ref()
            .map(|ct| ct.starts_with("image/"))
            .unwrap_or(false)
    }
}

/// Fetches resources by URL.
///
/// URLs can be `http://`/`https://`, `file://`, `data:`, or a plain filesystem path.
/// Implementations must be `Send + Sync` so renderers can be shared across threads.
pub trait ResourceFetcher: Send + Sync {
    /// Fetch the resource at `url`.
    fn fetch(&self, url: &str) -> CardResult<FetchedResource>;
}

impl<T: ResourceFetcher + ?Sized> ResourceFetcher for Arc<T> {
    fn fetch(&self, url: &str) -> CardResult<FetchedResource> {
        (**self).fetch(url)
    }
}

/// Default fetcher: HTTP(S) through `ureq`, plus local files and `data:` URLs.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    timeout: Duration,
    max_size: usize,
}

impl HttpFetcher {
    /// Fetcher with default timeout and size limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum response size in bytes.
    pub fn with_max_size(mut self, max_size: usize) -> Self {
        self.max_size = max_size;
        self
    }

    fn fetch_http(&self, url: &str) -> CardResult<FetchedResource> {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(self.timeout))
            .build();
        let agent: ureq::Agent = config.into();

        let mut response = agent
            .get(url)
            .header("User-Agent", USER_AGENT)
            .call()
            .map_err(|e| CardError::fetch(format!("GET {url}: {e}")))?;

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
            .map_err(|e| CardError::fetch(format!("read body of {url}: {e}")))?;
        if bytes.is_empty() {
            return Err(CardError::fetch(format!("empty response body from {url}")));
        }

        tracing::debug!(url, len = bytes.len(), "fetched http resource");
        Ok(FetchedResource::new(bytes, content_type))
    }

    fn fetch_file(&self, url: &str) -> CardResult<FetchedResource> {
        let path = url.strip_prefix("file://").unwrap_or(url);
        let bytes = std::fs::read(path)
            .map_err(|e| CardError::fetch(format!("read '{path}': {e}")))?;
        if bytes.len() > self.max_size {
            return Err(CardError::fetch(format!(
                "'{path}' exceeds {} bytes",
                self.max_size
            )));
        }
        Ok(FetchedResource::new(bytes, guess_content_type_from_path(path)))
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_HTTP_TIMEOUT,
            max_size: DEFAULT_MAX_FETCH_BYTES,
        }
    }
}

impl ResourceFetcher for HttpFetcher {
    fn fetch(&self, url: &str) -> CardResult<FetchedResource> {
        if url.starts_with("data:") {
            decode_data_url(url)
        } else if url.starts_with("http://") || url.starts_with("https://") {
            self.fetch_http(url)
        } else {
            self.fetch_file(url)
        }
    }
}

/// Decode a `data:` URL (`data:[mediatype][;base64],payload`).
pub fn decode_data_url(url: &str) -> CardResult<FetchedResource> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| CardError::decode("URL does not start with 'data:'"))?;
    let (header, data) = rest
        .split_once(',')
        .ok_or_else(|| CardError::decode("missing comma in data URL"))?;

    let is_base64 = header.ends_with(";base64") || header.contains(";base64;");
    let media_type = header
        .split(';')
        .next()
        .filter(|s| !s.is_empty() && s.contains('/'))
        .map(|s| s.to_string());

    let bytes = if is_base64 {
        base64::engine::general_purpose::STANDARD
            .decode(data.trim())
            .map_err(|e| CardError::decode(format!("invalid base64 in data URL: {e}")))?
    } else {
        percent_decode(data)?
    };

    Ok(FetchedResource::new(bytes, media_type))
}

fn percent_decode(input: &str) -> CardResult<Vec<u8>> {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            let hex = bytes
                .get(i + 1..i + 3)
                .and_then(|h| std::str::from_utf8(h).ok())
                .and_then(|h| u8::from_str_radix(h, 16).ok())
                .ok_or_else(|| CardError::decode("invalid percent-escape in data URL"))?;
            out.push(hex);
            i += 3;
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    Ok(out)
}

fn guess_content_type_from_path(path: &str) -> Option<String> {
    let ext = std::path::Path::new(path)
        .extension()?
        .to_str()?
        .to_ascii_lowercase();
    let mime = match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        _ => return None,
    };
    Some(mime.to_string())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fetch.rs"]
mod tests;
