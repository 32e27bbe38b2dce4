use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;
use crate::{
    assets::fetch::{FetchedResource, HttpFetcher},
    foundation::error::CardError,
    generate::DisabledGenerator,
};

fn png(width: u32, height: u32, rgb: [u8; 3]) -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(width, height, image::Rgba([rgb[0], rgb[1], rgb[2], 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

enum Reply {
    Image(Vec<u8>),
    Garbage,
    Fail,
}

struct FakeGenerator {
    reply: Reply,
    calls: AtomicUsize,
}

impl FakeGenerator {
    fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: AtomicUsize::new(0),
        })
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl BackgroundGenerator for FakeGenerator {
    fn generate(&self, request: &TextToImageRequest) -> Result<Vec<u8>, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        assert_eq!(request, &TextToImageRequest::new_year());
        match &self.reply {
            Reply::Image(bytes) => Ok(bytes.clone()),
            Reply::Garbage => Ok(br#"{"error":"Model is loading"}"#.to_vec()),
            Reply::Fail => Err(GenerationError::Status(503)),
        }
    }
}

struct NoFetch;

impl ResourceFetcher for NoFetch {
    fn fetch(&self, url: &str) -> CardResult<FetchedResource> {
        panic!("unexpected fetch of {url}");
    }
}

fn renderer(generator: Arc<FakeGenerator>) -> AiCompositeRenderer {
    AiCompositeRenderer::new(Arc::new(NoFetch), generator)
}

fn photo() -> PhotoSource {
    PhotoSource::Bytes(png(120, 120, [30, 200, 60]))
}

fn name() -> DisplayName {
    DisplayName::parse("Ravi").unwrap()
}

fn near(px: &image::Rgba<u8>, rgb: [u8; 3], tol: u8) -> bool {
    px.0[..3].iter().zip(rgb).all(|(&a, b)| a.abs_diff(b) <= tol)
}

fn caption_lines(plan: &CardPlan) -> Vec<(String, f32, f64)> {
    plan.captions()
        .map(|c| (c.text.clone(), c.size_px, c.anchor.y))
        .collect()
}

#[test]
fn generated_background_fills_the_frame() {
    let generator = FakeGenerator::new(Reply::Image(png(64, 64, [0, 0, 255])));
    let r = renderer(generator.clone());

    let plan = r.compose(&photo(), "Peace and joy", &name()).unwrap();
    assert_eq!(
        plan.origin,
        CardOrigin::AiComposite {
            background: BackgroundOrigin::Generated
        }
    );
    assert_eq!(plan.image_layer_count(), 1);

    let card = r.render(&photo(), "Peace and joy", &name()).unwrap();
    let img = image::load_from_memory(&card.png).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (1024, 1024));
    assert!(near(img.get_pixel(5, 5), [0, 0, 255], 2));
    assert!(near(img.get_pixel(1018, 1018), [0, 0, 255], 2));
    assert!(near(img.get_pixel(512, 250), [30, 200, 60], 2));
    assert_eq!(generator.calls(), 2);
}

#[test]
fn generation_failure_uses_fallback_gradient() {
    for reply in [Reply::Fail, Reply::Garbage] {
        let generator = FakeGenerator::new(reply);
        let card = renderer(generator.clone())
            .render(&photo(), "Peace and joy", &name())
            .unwrap();
        assert_eq!(generator.calls(), 1, "no retry");
        assert_eq!(
            card.origin,
            CardOrigin::AiComposite {
                background: BackgroundOrigin::Fallback
            }
        );

        let img = image::load_from_memory(&card.png).unwrap().to_rgba8();
        assert!(near(img.get_pixel(0, 0), [0x58, 0x1C, 0x87], 6));
        assert!(near(img.get_pixel(1023, 1023), [0x7C, 0x2D, 0x12], 6));
        assert!(near(img.get_pixel(512, 250), [30, 200, 60], 2));
        assert!(near(img.get_pixel(512, 100), [0xFF, 0xD7, 0x00], 24));
    }
}

#[test]
fn disabled_generator_always_falls_back() {
    let r = AiCompositeRenderer::new(Arc::new(HttpFetcher::new()), Arc::new(DisabledGenerator));
    let plan = r.compose(&photo(), "", &name()).unwrap();
    assert_eq!(
        plan.origin,
        CardOrigin::AiComposite {
            background: BackgroundOrigin::Fallback
        }
    );
    assert!(matches!(
        plan.ops.first(),
        Some(DrawOp::LinearGradient { stops, .. }) if *stops == FALLBACK_STOPS
    ));
}

#[test]
fn captions_are_gold_with_black_outline() {
    let plan = renderer(FakeGenerator::new(Reply::Fail))
        .compose(&photo(), "  Peace and joy  ", &name())
        .unwrap();
    assert_eq!(
        caption_lines(&plan),
        [
            ("Happy New Year 2026".to_string(), 60.0, 550.0),
            ("Peace and joy".to_string(), 40.0, 620.0),
            ("From Ravi".to_string(), 50.0, 700.0),
        ]
    );
    for c in plan.captions() {
        assert_eq!(c.color, Rgba8::GOLD);
        assert!(c.bold);
        assert_eq!(c.anchor.x, 512.0);
        assert_eq!(c.outline, Some(CAPTION_OUTLINE));
    }
}

#[test]
fn blank_wish_is_omitted_without_shifting_lines() {
    let plan = renderer(FakeGenerator::new(Reply::Fail))
        .compose(&photo(), "   ", &name())
        .unwrap();
    assert_eq!(
        caption_lines(&plan),
        [
            ("Happy New Year 2026".to_string(), 60.0, 550.0),
            ("From Ravi".to_string(), 50.0, 700.0),
        ]
    );
}

#[test]
fn bad_photo_fails_without_generation() {
    let generator = FakeGenerator::new(Reply::Image(png(8, 8, [0, 0, 0])));
    let err = renderer(generator.clone())
        .render(&PhotoSource::Bytes(vec![0, 1, 2, 3]), "hi", &name())
        .unwrap_err();
    assert!(err.is_photo());
    assert!(matches!(err, CardError::Photo(_)));
    assert_eq!(generator.calls(), 0);
}

#[test]
fn photo_is_cover_fit_into_the_circle() {
    let wide = DecodedImage {
        width: 40,
        height: 20,
        rgba8_premul: Arc::new(vec![255; 40 * 20 * 4]),
    };
    let plan = ai_plan(wide, None, "", &name());
    let Some(DrawOp::CirclePhoto { frame, dest, border, .. }) = plan.ops.get(1) else {
        panic!("expected the photo as the second op");
    };
    assert_eq!(frame.center, Point::new(512.0, 250.0));
    assert_eq!(frame.radius, 150.0);
    assert_eq!(*dest, crate::foundation::geom::Rect::new(212.0, 100.0, 812.0, 400.0));
    assert_eq!(*border, Some(PHOTO_BORDER));
}
