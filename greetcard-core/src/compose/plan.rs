use crate::{
    assets::decode::DecodedImage,
    foundation::color::Rgba8,
    foundation::geom::{Border, Canvas, CircleFrame, Point, Rect},
};

/// Which pipeline produced a plan, and with what background.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardOrigin {
    /// Template renderer output.
    Template {
        /// Catalog id of the template.
        id: u32,
    },
    /// AI composite renderer output.
    AiComposite {
        /// Where the background came from.
        background: BackgroundOrigin,
    },
}

/// Background source of an AI composite.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BackgroundOrigin {
    /// Returned by the text-to-image collaborator.
    Generated,
    /// Local gradient substituted after a generation failure.
    Fallback,
}

/// Backend-agnostic description of one card: a canvas plus ordered draw operations.
///
/// Ops are painted in order onto a single surface; later ops cover earlier ones. Plans are
/// built only after every input has been loaded, so executing one performs no IO.
#[derive(Clone, Debug)]
pub struct CardPlan {
    /// Output dimensions.
    pub canvas: Canvas,
    /// Draw operations in paint order.
    pub ops: Vec<DrawOp>,
    /// Pipeline that produced the plan.
    pub origin: CardOrigin,
}

impl CardPlan {
    /// Captions in paint order.
    pub fn captions(&self) -> impl Iterator<Item = &Caption> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Caption(c) => Some(c),
            _ => None,
        })
    }

    /// Number of full-frame or placed raster layers, excluding the subject photo.
    pub fn image_layer_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Image { .. }))
            .count()
    }
}

/// A single paint operation.
#[derive(Clone, Debug)]
pub enum DrawOp {
    /// Fill `rect` with a three-stop linear gradient running from `from` to `to`.
    LinearGradient {
        /// Filled area.
        rect: Rect,
        /// Gradient start point (offset 0).
        from: Point,
        /// Gradient end point (offset 1).
        to: Point,
        /// Colors at offsets 0, 0.5 and 1.
        stops: [Rgba8; 3],
    },
    /// Draw a raster scaled into `dest`.
    Image {
        /// Decoded raster.
        image: DecodedImage,
        /// Destination rectangle.
        dest: Rect,
        /// Layer opacity in `[0, 1]`.
        opacity: f32,
    },
    /// Draw a photo clipped to a circle, optionally stroking the circle edge.
    CirclePhoto {
        /// Decoded photo.
        image: DecodedImage,
        /// Clip circle.
        frame: CircleFrame,
        /// Cover-fit destination of the whole photo (extends past the circle).
        dest: Rect,
        /// Edge stroke.
        border: Option<Border>,
    },
    /// Rounded translucent panel.
    Panel {
        /// Panel bounds.
        rect: Rect,
        /// Corner radius.
        radius: f64,
        /// Fill color (alpha included).
        fill: Rgba8,
        /// Outline stroke.
        stroke: Option<Border>,
    },
    /// Single-line text centred on an anchor.
    Caption(Caption),
}

/// A centred line of caption text.
#[derive(Clone, Debug, PartialEq)]
pub struct Caption {
    /// Text to draw.
    pub text: String,
    /// Font size in pixels.
    pub size_px: f32,
    /// Bold weight instead of regular.
    pub bold: bool,
    /// Fill color.
    pub color: Rgba8,
    /// `x` is the horizontal centre, `y` the alphabetic baseline.
    pub anchor: Point,
    /// Outline stroked beneath the fill.
    pub outline: Option<Border>,
}
