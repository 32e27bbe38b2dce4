use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use kurbo::Shape as _;

use crate::{
    assets::decode::DecodedImage,
    compose::plan::{Caption, CardPlan, DrawOp},
    foundation::error::{CardError, CardResult},
    foundation::geom::{Border, Rect},
    render::text::{FontOptions, TextBrushRgba8, TextLayoutEngine, caption_origin},
};

const PATH_TOLERANCE: f64 = 0.1;

/// A rasterized card as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Pixel at `(x, y)` as stored.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y * self.width + x) * 4) as usize;
        self.data.get(i..i + 4).map(|p| [p[0], p[1], p[2], p[3]])
    }
}

/// Executes a [`CardPlan`] on the CPU with `vello_cpu`.
pub struct CpuRasterizer {
    text: TextLayoutEngine,
    font_cache: HashMap<(u64, u32), vello_cpu::peniko::FontData>,
}

impl CpuRasterizer {
    /// Rasterizer with the given caption fonts.
    pub fn new(fonts: &FontOptions) -> CardResult<Self> {
        Ok(Self {
            text: TextLayoutEngine::new(fonts)?,
            font_cache: HashMap::new(),
        })
    }

    /// Paint every op of `plan` in order and read back premultiplied RGBA8.
    pub fn rasterize(&mut self, plan: &CardPlan) -> CardResult<FrameRGBA> {
        let width: u16 = plan
            .canvas
            .width
            .try_into()
            .map_err(|_| CardError::render("canvas width exceeds u16"))?;
        let height: u16 = plan
            .canvas
            .height
            .try_into()
            .map_err(|_| CardError::render("canvas height exceeds u16"))?;

        let mut ctx = vello_cpu::RenderContext::new(width, height);
        for op in &plan.ops {
            self.draw_op(&mut ctx, op)?;
        }

        let mut pixmap = vello_cpu::Pixmap::new(width, height);
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);

        Ok(FrameRGBA {
            width: plan.canvas.width,
            height: plan.canvas.height,
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        })
    }

    fn draw_op(&mut self, ctx: &mut vello_cpu::RenderContext, op: &DrawOp) -> CardResult<()> {
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

        match op {
            DrawOp::LinearGradient {
                rect,
                from,
                to,
                stops,
            } => {
                let stops = [(0.0f32, stops[0]), (0.5, stops[1]), (1.0, stops[2])]
                    .map(|(offset, c)| vello_cpu::peniko::ColorStop::from((offset, c.to_cpu())));
                let gradient = vello_cpu::peniko::Gradient::new_linear((from.x, from.y), (to.x, to.y))
                    .with_stops(stops.as_slice());
                ctx.set_paint(gradient);
                ctx.fill_rect(&rect_to_cpu(*rect));
                Ok(())
            }
            DrawOp::Image {
                image,
                dest,
                opacity,
            } => {
                let paint = image_paint(image)?;
                if *opacity < 1.0 {
                    ctx.push_opacity_layer(*opacity);
                }
                fill_image(ctx, paint, image, *dest);
                if *opacity < 1.0 {
                    ctx.pop_layer();
                }
                Ok(())
            }
            DrawOp::CirclePhoto {
                image,
                frame,
                dest,
                border,
            } => {
                let paint = image_paint(image)?;
                let circle = bezpath_to_cpu(&frame.to_circle().to_path(PATH_TOLERANCE));

                ctx.push_clip_layer(&circle);
                fill_image(ctx, paint, image, *dest);
                ctx.pop_layer();

                if let Some(border) = border {
                    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
                    stroke_path(ctx, &circle, *border);
                }
                Ok(())
            }
            DrawOp::Panel {
                rect,
                radius,
                fill,
                stroke,
            } => {
                let shape = kurbo::RoundedRect::from_rect(*rect, *radius);
                let path = bezpath_to_cpu(&shape.to_path(PATH_TOLERANCE));
                ctx.set_paint(fill.to_cpu());
                ctx.fill_path(&path);
                if let Some(border) = stroke {
                    stroke_path(ctx, &path, *border);
                }
                Ok(())
            }
            DrawOp::Caption(caption) => self.draw_caption(ctx, caption),
        }
    }

    fn draw_caption(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        caption: &Caption,
    ) -> CardResult<()> {
        let Some(layout) = self.text.layout_caption(caption)? else {
            return Ok(());
        };
        let (x, y) = caption_origin(&layout, caption);
        ctx.set_transform(vello_cpu::kurbo::Affine::translate((x, y)));

        // Outline pass goes first so the fill covers the inner half of the stroke.
        if let Some(outline) = caption.outline {
            ctx.set_stroke(vello_cpu::kurbo::Stroke::new(outline.width));
            ctx.set_paint(outline.color.to_cpu());
            self.draw_glyphs(ctx, &layout, GlyphPass::Stroke);
        }
        self.draw_glyphs(ctx, &layout, GlyphPass::Fill);
        Ok(())
    }

    fn draw_glyphs(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        layout: &parley::Layout<TextBrushRgba8>,
        pass: GlyphPass,
    ) {
        for line in layout.lines() {
            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let run_font = run.run().font();
                let font = self.font_for((run_font.data.id(), run_font.index), || {
                    run_font.data.data().to_vec()
                });
                if pass == GlyphPass::Fill {
                    let brush = run.style().brush;
                    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                        brush.r, brush.g, brush.b, brush.a,
                    ));
                }
                let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                    id: g.id,
                    x: g.x,
                    y: g.y,
                });
                let builder = ctx.glyph_run(&font).font_size(run.run().font_size());
                match pass {
                    GlyphPass::Stroke => builder.stroke_glyphs(glyphs),
                    GlyphPass::Fill => builder.fill_glyphs(glyphs),
                }
            }
        }
    }

    fn font_for(
        &mut self,
        key: (u64, u32),
        bytes: impl FnOnce() -> Vec<u8>,
    ) -> vello_cpu::peniko::FontData {
        self.font_cache
            .entry(key)
            .or_insert_with(|| {
                vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes()), key.1)
            })
            .clone()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GlyphPass {
    Stroke,
    Fill,
}

fn image_paint(image: &DecodedImage) -> CardResult<vello_cpu::Image> {
    let pixmap = pixmap_from_premul_bytes(&image.rgba8_premul, image.width, image.height)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

/// Fills `dest` with `image` scaled to fit it exactly.
fn fill_image(
    ctx: &mut vello_cpu::RenderContext,
    paint: vello_cpu::Image,
    image: &DecodedImage,
    dest: Rect,
) {
    let sx = dest.width() / f64::from(image.width.max(1));
    let sy = dest.height() / f64::from(image.height.max(1));
    let tr = kurbo::Affine::translate((dest.x0, dest.y0)) * kurbo::Affine::scale_non_uniform(sx, sy);
    ctx.set_transform(affine_to_cpu(tr));
    ctx.set_paint(paint);
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(image.width),
        f64::from(image.height),
    ));
    ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
}

fn stroke_path(ctx: &mut vello_cpu::RenderContext, path: &vello_cpu::kurbo::BezPath, border: Border) {
    if border.width <= 0.0 || border.color.a == 0 {
        return;
    }
    ctx.set_stroke(vello_cpu::kurbo::Stroke::new(border.width));
    ctx.set_paint(border.color.to_cpu());
    ctx.stroke_path(path);
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

fn affine_to_cpu(a: kurbo::Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &kurbo::BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn pixmap_from_premul_bytes(
    bytes: &[u8],
    width: u32,
    height: u32,
) -> CardResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| CardError::render("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| CardError::render("pixmap height exceeds u16"))?;
    if bytes.len()
        != (width as usize)
            .saturating_mul(height as usize)
            .saturating_mul(4)
    {
        return Err(CardError::render("pixmap byte len mismatch"));
    }
    let pixels = bytes
        .chunks_exact(4)
        .map(|px| vello_cpu::peniko::color::PremulRgba8::from_u8_array([px[0], px[1], px[2], px[3]]))
        .collect::<Vec<_>>();
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true))
}

/// Idle [`CpuRasterizer`]s shared by one renderer.
///
/// Building a rasterizer scans system fonts, so each one is reused across renders. A render
/// takes an idle rasterizer (or builds one when none is free) and returns it afterwards, so
/// concurrent renders never wait on each other.
pub struct RasterizerPool {
    fonts: FontOptions,
    idle: Mutex<Vec<CpuRasterizer>>,
}

impl RasterizerPool {
    /// Empty pool whose rasterizers use `fonts`.
    pub fn new(fonts: FontOptions) -> Self {
        Self {
            fonts,
            idle: Mutex::new(Vec::new()),
        }
    }

    /// Caption fonts used by every rasterizer in the pool.
    pub fn fonts(&self) -> &FontOptions {
        &self.fonts
    }

    /// Rasterize `plan` on a pooled rasterizer.
    pub fn rasterize(&self, plan: &CardPlan) -> CardResult<FrameRGBA> {
        let pooled = self.idle.lock().ok().and_then(|mut idle| idle.pop());
        let mut rasterizer = match pooled {
            Some(r) => r,
            None => {
                tracing::debug!("building caption rasterizer");
                CpuRasterizer::new(&self.fonts)?
            }
        };
        let frame = rasterizer.rasterize(plan);
        if let Ok(mut idle) = self.idle.lock() {
            idle.push(rasterizer);
        }
        frame
    }

    #[cfg(test)]
    pub(crate) fn idle_len(&self) -> usize {
        self.idle.lock().map(|idle| idle.len()).unwrap_or(0)
    }
}

impl Default for RasterizerPool {
    fn default() -> Self {
        Self::new(FontOptions::default())
    }
}

impl std::fmt::Debug for RasterizerPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterizerPool")
            .field("fonts", &self.fonts)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
