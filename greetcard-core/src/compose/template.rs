use std::sync::Arc;

use crate::{
    assets::{
        decode::{DecodedImage, decode_image},
        fetch::ResourceFetcher,
        photo::{PhotoSource, load_photo},
    },
    catalog::{
        registry::template_by_id,
        template::{Decoration, Template},
    },
    compose::{
        photo::circle_photo,
        plan::{Caption, CardOrigin, CardPlan, DrawOp},
        request::DisplayName,
    },
    config::CardConfig,
    foundation::{
        color::Rgba8,
        error::CardResult,
        geom::{Border, Canvas, CircleFrame, Point, Rect},
    },
    render::{cpu::RasterizerPool, encode::RenderedCard, encode::finish, text::FontOptions},
};

/// Template cards are 1080x1080.
pub const TEMPLATE_CANVAS: Canvas = Canvas::square(1080);

/// Opacity of a template's decorative overlay image.
pub const OVERLAY_OPACITY: f32 = 0.4;

const PHOTO_DIAMETER: f64 = 400.0;
const PHOTO_TOP: f64 = 200.0;
const PHOTO_BORDER_WIDTH: f64 = 8.0;

/// Size of the sparkle glyphs flanking the captions.
pub const SPARKLE_SIZE_PX: f32 = 40.0;

/// Bounds of the glassmorphism panel behind the captions.
pub const GLASS_PANEL_RECT: Rect = Rect::new(100.0, 700.0, 980.0, 950.0);
const GLASS_PANEL_RADIUS: f64 = 24.0;
const GLASS_PANEL_FILL: Rgba8 = Rgba8::WHITE.with_alpha(0x1A);
const GLASS_PANEL_STROKE: Border = Border {
    color: Rgba8::WHITE.with_alpha(0x4D),
    width: 2.0,
};

/// Renders catalog templates around a user photo.
#[derive(Clone)]
pub struct TemplateRenderer {
    fetcher: Arc<dyn ResourceFetcher>,
    raster: Arc<RasterizerPool>,
}

impl TemplateRenderer {
    /// Renderer loading photos and overlays through `fetcher`.
    pub fn new(fetcher: Arc<dyn ResourceFetcher>) -> Self {
        Self {
            fetcher,
            raster: Arc::new(RasterizerPool::default()),
        }
    }

    /// Renderer wired from configuration (HTTP fetcher and caption font).
    pub fn from_config(config: &CardConfig) -> CardResult<Self> {
        Ok(Self::new(Arc::new(config.fetcher())).with_fonts(config.font_options()?))
    }

    /// Use `fonts` for captions.
    pub fn with_fonts(mut self, fonts: FontOptions) -> Self {
        self.raster = Arc::new(RasterizerPool::new(fonts));
        self
    }

    /// Load every input and build the paint plan.
    ///
    /// The photo is loaded before the overlay so a bad photo fails without network traffic.
    #[tracing::instrument(skip(self, template, photo), fields(template_id = template.id))]
    pub fn compose(
        &self,
        template: &Template,
        photo: &PhotoSource,
        name: &DisplayName,
    ) -> CardResult<CardPlan> {
        let photo = load_photo(photo, self.fetcher.as_ref())?;
        tracing::debug!(
            width = photo.width,
            height = photo.height,
            aspect = photo.aspect(),
            "photo decoded"
        );

        let overlay = template.overlay_url.and_then(|url| self.load_overlay(url));
        let plan = template_plan(template, photo, overlay, name);
        tracing::debug!(
            ops = plan.ops.len(),
            image_layers = plan.image_layer_count(),
            "template plan built"
        );
        Ok(plan)
    }

    /// Compose, rasterize and encode one card.
    pub fn render(
        &self,
        template: &Template,
        photo: &PhotoSource,
        name: &DisplayName,
    ) -> CardResult<RenderedCard> {
        let plan = self.compose(template, photo, name)?;
        let frame = self.raster.rasterize(&plan)?;
        finish(&frame, plan.origin)
    }

    /// [`render`](Self::render) for a catalog id; unknown ids fail before any IO.
    pub fn render_by_id(
        &self,
        id: u32,
        photo: &PhotoSource,
        name: &DisplayName,
    ) -> CardResult<RenderedCard> {
        let template = template_by_id(id)?;
        self.render(template, photo, name)
    }

    fn load_overlay(&self, url: &str) -> Option<DecodedImage> {
        let loaded = self
            .fetcher
            .fetch(url)
            .and_then(|res| decode_image(&res.bytes));
        match loaded {
            Ok(img) => Some(img),
            Err(err) => {
                tracing::warn!(url, error = %err, "overlay unavailable, drawing without it");
                None
            }
        }
    }
}

impl std::fmt::Debug for TemplateRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TemplateRenderer")
            .field("fonts", self.raster.fonts())
            .finish_non_exhaustive()
    }
}

/// Paint plan for `template` from already-decoded inputs.
pub fn template_plan(
    template: &Template,
    photo: DecodedImage,
    overlay: Option<DecodedImage>,
    name: &DisplayName,
) -> CardPlan {
    let canvas = TEMPLATE_CANVAS;
    let full = canvas.rect();
    let mut ops = vec![DrawOp::LinearGradient {
        rect: full,
        from: Point::new(0.0, 0.0),
        to: Point::new(full.x1, full.y1),
        stops: template.background_stops,
    }];

    if let Some(image) = overlay {
        ops.push(DrawOp::Image {
            image,
            dest: full,
            opacity: OVERLAY_OPACITY,
        });
    }

    ops.push(circle_photo(
        photo,
        CircleFrame::centered(canvas, PHOTO_DIAMETER, PHOTO_TOP),
        Some(Border {
            color: template.accent_color,
            width: PHOTO_BORDER_WIDTH,
        }),
    ));

    match template.decoration {
        Decoration::None => {}
        Decoration::GlassPanel => ops.push(DrawOp::Panel {
            rect: GLASS_PANEL_RECT,
            radius: GLASS_PANEL_RADIUS,
            fill: GLASS_PANEL_FILL,
            stroke: Some(GLASS_PANEL_STROKE),
        }),
    }

    let cx = canvas.center_x();
    for (text, size_px, baseline) in [
        ("Happy New Year", 80.0, 750.0),
        ("2026", 100.0, 860.0),
        (name.as_str(), 60.0, 960.0),
    ] {
        ops.push(DrawOp::Caption(Caption {
            text: text.to_string(),
            size_px,
            bold: true,
            color: template.accent_color,
            anchor: Point::new(cx, baseline),
            outline: None,
        }));
    }

    let width = f64::from(canvas.width);
    for (text, x, baseline) in [
        ("✨", 200.0, 750.0),
        ("✨", width - 200.0, 750.0),
        ("🎉", 150.0, 900.0),
        ("🎆", width - 150.0, 900.0),
    ] {
        ops.push(DrawOp::Caption(Caption {
            text: text.to_string(),
            size_px: SPARKLE_SIZE_PX,
            bold: false,
            color: template.accent_color,
            anchor: Point::new(x, baseline),
            outline: None,
        }));
    }

    CardPlan {
        canvas,
        ops,
        origin: CardOrigin::Template { id: template.id },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/template.rs"]
mod tests;
