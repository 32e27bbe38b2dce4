use std::sync::Arc;

use super::*;
use crate::foundation::{
    color::Rgba8,
    geom::{Canvas, Rect},
};

fn solid(width: u32, height: u32) -> DecodedImage {
    DecodedImage {
        width,
        height,
        rgba8_premul: Arc::new(vec![255; (width * height * 4) as usize]),
    }
}

#[test]
fn circle_photo_uses_cover_fit_destination() {
    let frame = CircleFrame::centered(Canvas::square(1024), 300.0, 100.0);
    let border = Border {
        color: Rgba8::GOLD,
        width: 6.0,
    };

    let DrawOp::CirclePhoto {
        dest,
        frame: f,
        border: b,
        ..
    } = circle_photo(solid(600, 300), frame, Some(border))
    else {
        panic!("expected a circle photo op");
    };
    assert_eq!(f, frame);
    assert_eq!(b, Some(border));
    assert_eq!(dest, Rect::new(212.0, 100.0, 812.0, 400.0));
}

#[test]
fn portrait_photo_overflows_vertically() {
    let frame = CircleFrame::centered(Canvas::square(1080), 400.0, 200.0);
    let DrawOp::CirclePhoto { dest, .. } = circle_photo(solid(100, 200), frame, None) else {
        panic!("expected a circle photo op");
    };
    assert_eq!(dest, Rect::new(340.0, 0.0, 740.0, 800.0));
}
