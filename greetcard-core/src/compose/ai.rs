use std::sync::Arc;

use crate::{
    assets::{
        decode::{DecodedImage, decode_image},
        fetch::ResourceFetcher,
        photo::{PhotoSource, load_photo},
    },
    compose::{
        photo::circle_photo,
        plan::{BackgroundOrigin, Caption, CardOrigin, CardPlan, DrawOp},
        request::DisplayName,
    },
    config::CardConfig,
    foundation::{
        color::Rgba8,
        error::CardResult,
        geom::{Border, Canvas, CircleFrame, Point},
    },
    generate::{BackgroundGenerator, GenerationError, TextToImageRequest},
    render::{cpu::RasterizerPool, encode::RenderedCard, encode::finish, text::FontOptions},
};

/// AI composites are 1024x1024.
pub const AI_CANVAS: Canvas = Canvas::square(1024);

/// Gradient used when no generated background is available.
pub const FALLBACK_STOPS: [Rgba8; 3] = [
    Rgba8::hex(0x581C87),
    Rgba8::hex(0x831843),
    Rgba8::hex(0x7C2D12),
];

const PHOTO_DIAMETER: f64 = 300.0;
const PHOTO_TOP: f64 = 100.0;
const PHOTO_BORDER: Border = Border {
    color: Rgba8::GOLD,
    width: 6.0,
};
const CAPTION_OUTLINE: Border = Border {
    color: Rgba8::BLACK,
    width: 4.0,
};

/// Renders a user photo over a generated (or fallback) festive background.
#[derive(Clone)]
pub struct AiCompositeRenderer {
    fetcher: Arc<dyn ResourceFetcher>,
    generator: Arc<dyn BackgroundGenerator>,
    raster: Arc<RasterizerPool>,
}

impl AiCompositeRenderer {
    /// Renderer loading photos through `fetcher` and backgrounds from `generator`.
    pub fn new(fetcher: Arc<dyn ResourceFetcher>, generator: Arc<dyn BackgroundGenerator>) -> Self {
        Self {
            fetcher,
            generator,
            raster: Arc::new(RasterizerPool::default()),
        }
    }

    /// Renderer wired from configuration (HTTP fetcher, inference client and caption font).
    pub fn from_config(config: &CardConfig) -> CardResult<Self> {
        Ok(Self::new(
            Arc::new(config.fetcher()),
            Arc::new(config.inference_client()),
        )
        .with_fonts(config.font_options()?))
    }

    /// Use `fonts` for captions.
    pub fn with_fonts(mut self, fonts: FontOptions) -> Self {
        self.raster = Arc::new(RasterizerPool::new(fonts));
        self
    }

    /// Replace the background generator.
    pub fn with_generator(mut self, generator: Arc<dyn BackgroundGenerator>) -> Self {
        self.generator = generator;
        self
    }

    /// Load the photo, request a background and build the paint plan.
    ///
    /// Only a photo failure is returned; any generation problem falls back to the gradient.
    #[tracing::instrument(skip(self, photo, wish))]
    pub fn compose(
        &self,
        photo: &PhotoSource,
        wish: &str,
        name: &DisplayName,
    ) -> CardResult<CardPlan> {
        let photo = load_photo(photo, self.fetcher.as_ref())?;
        tracing::debug!(
            width = photo.width,
            height = photo.height,
            aspect = photo.aspect(),
            "photo decoded"
        );

        let background = match self.generate_background() {
            Ok(img) => {
                tracing::debug!(width = img.width, height = img.height, "using generated background");
                Some(img)
            }
            Err(err) => {
                tracing::warn!(error = %err, "background generation failed, using fallback gradient");
                None
            }
        };
        let plan = ai_plan(photo, background, wish, name);
        tracing::debug!(
            ops = plan.ops.len(),
            image_layers = plan.image_layer_count(),
            "ai plan built"
        );
        Ok(plan)
    }

    /// Compose, rasterize and encode one card.
    pub fn render(
        &self,
        photo: &PhotoSource,
        wish: &str,
        name: &DisplayName,
    ) -> CardResult<RenderedCard> {
        let plan = self.compose(photo, wish, name)?;
        let frame = self.raster.rasterize(&plan)?;
        finish(&frame, plan.origin)
    }

    fn generate_background(&self) -> Result<DecodedImage, GenerationError> {
        let bytes = self.generator.generate(&TextToImageRequest::new_year())?;
        decode_image(&bytes).map_err(|e| GenerationError::MalformedResponse(e.to_string()))
    }
}

impl std::fmt::Debug for AiCompositeRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AiCompositeRenderer")
            .field("fonts", self.raster.fonts())
            .finish_non_exhaustive()
    }
}

/// Paint plan from a decoded photo and, if generation succeeded, its background.
///
/// The wish line is skipped when blank; the other captions keep fixed baselines.
pub fn ai_plan(
    photo: DecodedImage,
    background: Option<DecodedImage>,
    wish: &str,
    name: &DisplayName,
) -> CardPlan {
    let canvas = AI_CANVAS;
    let full = canvas.rect();

    let (first, origin) = match background {
        Some(image) => (
            DrawOp::Image {
                image,
                dest: full,
                opacity: 1.0,
            },
            BackgroundOrigin::Generated,
        ),
        None => (
            DrawOp::LinearGradient {
                rect: full,
                from: Point::new(0.0, 0.0),
                to: Point::new(full.x1, full.y1),
                stops: FALLBACK_STOPS,
            },
            BackgroundOrigin::Fallback,
        ),
    };

    let mut ops = vec![
        first,
        circle_photo(
            photo,
            CircleFrame::centered(canvas, PHOTO_DIAMETER, PHOTO_TOP),
            Some(PHOTO_BORDER),
        ),
    ];

    let cx = canvas.center_x();
    let wish = wish.trim();
    let lines = [
        Some(("Happy New Year 2026".to_string(), 60.0, 550.0)),
        (!wish.is_empty()).then(|| (wish.to_string(), 40.0, 620.0)),
        Some((format!("From {name}"), 50.0, 700.0)),
    ];
    for (text, size_px, baseline) in lines.into_iter().flatten() {
        ops.push(DrawOp::Caption(Caption {
            text,
            size_px,
            bold: true,
            color: Rgba8::GOLD,
            anchor: Point::new(cx, baseline),
            outline: Some(CAPTION_OUTLINE),
        }));
    }

    CardPlan {
        canvas,
        ops,
        origin: CardOrigin::AiComposite { background: origin },
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/ai.rs"]
mod tests;
