use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

fn covers(outer: Rect, inner: Rect) -> bool {
    outer.x0 <= inner.x0 + 1e-9
        && outer.y0 <= inner.y0 + 1e-9
        && outer.x1 >= inner.x1 - 1e-9
        && outer.y1 >= inner.y1 - 1e-9
}

#[test]
fn centered_frame_matches_card_layouts() {
    let tpl = CircleFrame::centered(Canvas::square(1080), 400.0, 200.0);
    assert_eq!(tpl.center, Point::new(540.0, 400.0));
    assert!(approx(tpl.radius, 200.0));

    let ai = CircleFrame::centered(Canvas::square(1024), 300.0, 100.0);
    assert_eq!(ai.center, Point::new(512.0, 250.0));
    assert_eq!(ai.bounds(), Rect::new(362.0, 100.0, 662.0, 400.0));
}

#[test]
fn cover_fit_landscape_crops_width_centered() {
    let frame = CircleFrame::centered(Canvas::square(1080), 400.0, 200.0);
    let r = cover_fit(800, 400, frame);

    assert!(approx(r.height(), 400.0));
    assert!(approx(r.width(), 800.0));
    assert!(approx(r.y0, 200.0));
    assert!(approx(r.center().x, 540.0));
    assert!(covers(r, frame.bounds()));
    // No distortion.
    assert!(approx(r.width() / r.height(), 2.0));
}

#[test]
fn cover_fit_portrait_crops_height_centered() {
    let frame = CircleFrame::centered(Canvas::square(1080), 400.0, 200.0);
    let r = cover_fit(300, 600, frame);

    assert!(approx(r.width(), 400.0));
    assert!(approx(r.height(), 800.0));
    assert!(approx(r.x0, 340.0));
    assert!(approx(r.center().y, 400.0));
    assert!(covers(r, frame.bounds()));
    assert!(approx(r.width() / r.height(), 0.5));
}

#[test]
fn cover_fit_square_is_exact() {
    let frame = CircleFrame::centered(Canvas::square(1024), 300.0, 100.0);
    assert_eq!(cover_fit(200, 200, frame), frame.bounds());
}

#[test]
fn cover_fit_degenerate_source_uses_bounds() {
    let frame = CircleFrame::centered(Canvas::square(1024), 300.0, 100.0);
    assert_eq!(cover_fit(0, 10, frame), frame.bounds());
}
