use std::sync::Arc;

use anyhow::Context;

use crate::foundation::error::{CardError, CardResult};

/// Longest side kept for decoded rasters; larger images are downscaled on decode.
pub const MAX_DECODED_SIDE: u32 = 4096;

/// Decoded raster in premultiplied RGBA8 form.
#[derive(Clone, Debug, PartialEq)]
pub struct DecodedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub rgba8_premul: Arc<Vec<u8>>,
}

impl DecodedImage {
    /// Width over height.
    pub fn aspect(&self) -> f64 {
        f64::from(self.width) / f64::from(self.height.max(1))
    }
}

/// Decode any raster format supported by `image` into premultiplied RGBA8.
pub fn decode_image(bytes: &[u8]) -> CardResult<DecodedImage> {
    if bytes.is_empty() {
        return Err(CardError::decode("image bytes are empty"));
    }
    let mut dyn_img = image::load_from_memory(bytes)
        .context("decode image from memory")
        .map_err(|e| CardError::decode(format!("{e:#}")))?;

    if dyn_img.width() == 0 || dyn_img.height() == 0 {
        return Err(CardError::decode("image has zero size"));
    }
    if dyn_img.width() > MAX_DECODED_SIDE || dyn_img.height() > MAX_DECODED_SIDE {
        tracing::debug!(
            width = dyn_img.width(),
            height = dyn_img.height(),
            "downscaling oversized image"
        );
        dyn_img = dyn_img.resize(
            MAX_DECODED_SIDE,
            MAX_DECODED_SIDE,
            image::imageops::FilterType::Triangle,
        );
    }

    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(DecodedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        px[0] = ((px[0] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[1] = ((px[1] as u16 * 255 + a / 2) / a).min(255) as u8;
        px[2] = ((px[2] as u16 * 255 + a / 2) / a).min(255) as u8;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
