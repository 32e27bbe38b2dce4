use std::io::Cursor;

use anyhow::Context;
use base64::Engine as _;

use crate::{
    assets::decode::unpremultiply_rgba8_in_place,
    compose::plan::CardOrigin,
    foundation::error::{CardError, CardResult},
    render::cpu::FrameRGBA,
};

/// A finished card: PNG bytes plus where its pixels came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedCard {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Encoded PNG file.
    pub png: Vec<u8>,
    /// Pipeline and background that produced the card.
    pub origin: CardOrigin,
}

impl RenderedCard {
    /// `data:image/png;base64,...` form suitable for embedding or download links.
    pub fn to_data_url(&self) -> String {
        format!(
            "data:image/png;base64,{}",
            base64::engine::general_purpose::STANDARD.encode(&self.png)
        )
    }

    /// Write the PNG to `path`, creating parent directories.
    pub fn save(&self, path: &std::path::Path) -> CardResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        std::fs::write(path, &self.png)
            .with_context(|| format!("write png '{}'", path.display()))?;
        Ok(())
    }
}

/// Encode a rasterized frame as PNG, un-premultiplying first when needed.
pub fn encode_png(frame: &FrameRGBA) -> CardResult<Vec<u8>> {
    let expected = (frame.width as usize)
        .saturating_mul(frame.height as usize)
        .saturating_mul(4);
    if frame.data.len() != expected {
        return Err(CardError::encode("frame byte len mismatch"));
    }

    let mut rgba = frame.data.clone();
    if frame.premultiplied {
        unpremultiply_rgba8_in_place(&mut rgba);
    }
    let img = image::RgbaImage::from_raw(frame.width, frame.height, rgba)
        .ok_or_else(|| CardError::encode("frame does not fit an RGBA buffer"))?;

    let mut png = Vec::new();
    img.write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .map_err(|e| CardError::encode(format!("png encode failed: {e}")))?;
    Ok(png)
}

/// Encode `frame` and tag it with `origin`.
pub fn finish(frame: &FrameRGBA, origin: CardOrigin) -> CardResult<RenderedCard> {
    Ok(RenderedCard {
        width: frame.width,
        height: frame.height,
        png: encode_png(frame)?,
        origin,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/encode.rs"]
mod tests;
