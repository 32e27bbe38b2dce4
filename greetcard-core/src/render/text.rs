use std::sync::Arc;

use crate::{
    compose::plan::Caption,
    foundation::color::Rgba8,
    foundation::error::{CardError, CardResult},
};

/// Font stack used when no font file is configured.
pub const DEFAULT_FONT_STACK: &str = "Arial, Helvetica, Liberation Sans, DejaVu Sans, sans-serif";

/// Where caption fonts come from.
#[derive(Clone, Debug, Default)]
pub struct FontOptions {
    font_bytes: Option<Arc<Vec<u8>>>,
}

impl FontOptions {
    /// Register `bytes` and prefer its first family for captions.
    pub fn with_font_bytes(mut self, bytes: Arc<Vec<u8>>) -> Self {
        self.font_bytes = Some(bytes);
        self
    }

    /// Configured font file bytes, if any.
    pub fn font_bytes(&self) -> Option<&Arc<Vec<u8>>> {
        self.font_bytes.as_ref()
    }
}

/// RGBA8 brush color carried through Parley layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TextBrushRgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl From<Rgba8> for TextBrushRgba8 {
    fn from(c: Rgba8) -> Self {
        Self {
            r: c.r,
            g: c.g,
            b: c.b,
            a: c.a,
        }
    }
}

/// Shapes caption lines with Parley.
///
/// Holds system fonts plus an optional registered font file. Built once per render.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
    font_stack: String,
    has_fonts: bool,
}

impl TextLayoutEngine {
    /// Engine over system fonts and the font file in `options`.
    pub fn new(options: &FontOptions) -> CardResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let mut font_stack = DEFAULT_FONT_STACK.to_string();

        if let Some(bytes) = options.font_bytes() {
            let families = font_ctx
                .collection
                .register_fonts(parley::fontique::Blob::from(bytes.as_ref().clone()), None);
            let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
                CardError::validation("no font families registered from font bytes")
            })?;
            let family_name = font_ctx
                .collection
                .family_name(family_id)
                .ok_or_else(|| CardError::validation("registered font family has no name"))?
                .to_string();
            font_stack = format!("\"{family_name}\", {DEFAULT_FONT_STACK}");
        }

        let has_fonts = font_ctx.collection.family_names().next().is_some();
        if !has_fonts {
            tracing::debug!("no fonts available, captions will not be drawn");
        }

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            font_stack,
            has_fonts,
        })
    }

    /// Whether any font family is available for shaping.
    pub fn has_fonts(&self) -> bool {
        self.has_fonts
    }

    /// Shape `caption` as a single line. Returns `None` when there is nothing to draw.
    pub fn layout_caption(
        &mut self,
        caption: &Caption,
    ) -> CardResult<Option<parley::Layout<TextBrushRgba8>>> {
        if !caption.size_px.is_finite() || caption.size_px <= 0.0 {
            return Err(CardError::render("caption size_px must be finite and > 0"));
        }
        if !self.has_fonts || caption.text.is_empty() {
            return Ok(None);
        }

        let mut builder =
            self.layout_ctx
                .ranged_builder(&mut self.font_ctx, &caption.text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.font_stack.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(caption.size_px));
        if caption.bold {
            builder.push_default(parley::style::StyleProperty::FontWeight(
                parley::style::FontWeight::BOLD,
            ));
        }
        builder.push_default(parley::style::StyleProperty::Brush(TextBrushRgba8::from(
            caption.color,
        )));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(&caption.text);
        layout.break_all_lines(None);
        Ok(Some(layout))
    }
}

/// Top-left translation that centres `layout` on `caption.anchor`'s x and puts its first
/// baseline on the anchor's y.
pub fn caption_origin(layout: &parley::Layout<TextBrushRgba8>, caption: &Caption) -> (f64, f64) {
    let width = f64::from(layout.width());
    let baseline = layout
        .lines()
        .next()
        .map(|line| f64::from(line.metrics().baseline))
        .unwrap_or(0.0);
    (caption.anchor.x - width / 2.0, caption.anchor.y - baseline)
}

#[cfg(test)]
#[path = "../../tests/unit/render/text.rs"]
mod tests;
