use super::*;
use crate::foundation::geom::Point;

fn caption(text: &str, size_px: f32) -> Caption {
    Caption {
        text: text.to_string(),
        size_px,
        bold: true,
        color: Rgba8::WHITE,
        anchor: Point::new(540.0, 750.0),
        outline: None,
    }
}

#[test]
fn brush_keeps_channels() {
    let b = TextBrushRgba8::from(Rgba8 {
        r: 0x12,
        g: 0x34,
        b: 0x56,
        a: 0x78,
    });
    assert_eq!((b.r, b.g, b.b, b.a), (0x12, 0x34, 0x56, 0x78));
}

#[test]
fn invalid_font_bytes_are_rejected() {
    let opts = FontOptions::default().with_font_bytes(Arc::new(b"not a font".to_vec()));
    let err = TextLayoutEngine::new(&opts).err().expect("garbage font must fail");
    assert!(matches!(err, CardError::Validation(_)));
}

#[test]
fn non_positive_size_is_a_render_error() {
    let mut engine = TextLayoutEngine::new(&FontOptions::default()).unwrap();
    let err = engine
        .layout_caption(&caption("2026", 0.0))
        .err()
        .expect("zero size must fail");
    assert!(matches!(err, CardError::Render(_)));
}

#[test]
fn empty_caption_has_no_layout() {
    let mut engine = TextLayoutEngine::new(&FontOptions::default()).unwrap();
    assert!(engine.layout_caption(&caption("", 40.0)).unwrap().is_none());
}

#[test]
fn caption_is_centred_on_anchor_when_fonts_exist() {
    let mut engine = TextLayoutEngine::new(&FontOptions::default()).unwrap();
    let c = caption("Happy New Year", 80.0);
    let Some(layout) = engine.layout_caption(&c).unwrap() else {
        // Hosts without any installed font shape nothing.
        assert!(!engine.has_fonts());
        return;
    };
    let (x, y) = caption_origin(&layout, &c);
    let width = f64::from(layout.width());
    assert!(width > 0.0);
    assert!((x + width / 2.0 - 540.0).abs() < 1e-6);
    assert!(y < 750.0);
}
