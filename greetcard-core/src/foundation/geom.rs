use crate::foundation::color::Rgba8;

pub use kurbo::{Point, Rect};

/// Square pixel canvas dimensions of a rendered card.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Square canvas of `side` pixels.
    pub const fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// Full-frame rectangle.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }

    /// Horizontal centre line.
    pub fn center_x(self) -> f64 {
        f64::from(self.width) / 2.0
    }
}

/// A circle that a photo is clipped into.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CircleFrame {
    /// Circle centre.
    pub center: Point,
    /// Circle radius in pixels.
    pub radius: f64,
}

impl CircleFrame {
    /// Circle of `diameter`, horizontally centred on `canvas`, whose top edge sits at `top`.
    pub fn centered(canvas: Canvas, diameter: f64, top: f64) -> Self {
        let radius = diameter / 2.0;
        Self {
            center: Point::new(canvas.center_x(), top + radius),
            radius,
        }
    }

    /// Bounding square of the circle.
    pub fn bounds(self) -> Rect {
        Rect::from_center_size(self.center, (self.radius * 2.0, self.radius * 2.0))
    }

    pub(crate) fn to_circle(self) -> kurbo::Circle {
        kurbo::Circle::new(self.center, self.radius)
    }
}

/// Stroke drawn along a [`CircleFrame`] edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    /// Stroke color.
    pub color: Rgba8,
    /// Stroke width in pixels.
    pub width: f64,
}

/// Destination rect that covers `frame`'s bounding square with a `src_w`×`src_h` image.
///
/// The image keeps its aspect ratio. Landscape sources take the square's height and overflow
/// horizontally; portrait and square sources take its width and overflow vertically. The
/// overflowing dimension is centred on the frame.
pub fn cover_fit(src_w: u32, src_h: u32, frame: CircleFrame) -> Rect {
    let bounds = frame.bounds();
    let size = bounds.width();
    if src_w == 0 || src_h == 0 {
        return bounds;
    }

    let aspect = f64::from(src_w) / f64::from(src_h);
    if aspect > 1.0 {
        let draw_w = size * aspect;
        let x0 = bounds.x0 - (draw_w - size) / 2.0;
        Rect::new(x0, bounds.y0, x0 + draw_w, bounds.y1)
    } else {
        let draw_h = size / aspect;
        let y0 = bounds.y0 - (draw_h - size) / 2.0;
        Rect::new(bounds.x0, y0, bounds.x1, y0 + draw_h)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/geom.rs"]
mod tests;
