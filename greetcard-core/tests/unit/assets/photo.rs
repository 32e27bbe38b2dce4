use std::io::Cursor;
use std::sync::atomic::{AtomicUsize, Ordering};

use base64::Engine as _;

use super::*;
use crate::assets::fetch::{FetchedResource, HttpFetcher};

fn png_2x1() -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(2, 1, image::Rgba([10, 20, 30, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[derive(Default)]
struct CountingFetcher {
    calls: AtomicUsize,
}

impl ResourceFetcher for CountingFetcher {
    fn fetch(&self, url: &str) -> CardResult<FetchedResource> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(CardError::fetch(format!("404 for {url}")))
    }
}

#[test]
fn inline_bytes_never_touch_the_fetcher() {
    let fetcher = CountingFetcher::default();
    let img = load_photo(&PhotoSource::Bytes(png_2x1()), &fetcher).unwrap();
    assert_eq!((img.width, img.height), (2, 1));
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 0);
}

#[test]
fn data_url_reference_decodes() {
    let url = format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(png_2x1())
    );
    let img = load_photo(&PhotoSource::from(url), &HttpFetcher::new()).unwrap();
    assert_eq!((img.width, img.height), (2, 1));
}

#[test]
fn fetch_and_decode_failures_are_photo_errors() {
    let fetcher = CountingFetcher::default();
    let err = load_photo(&PhotoSource::from("https://example.invalid/me.png"), &fetcher)
        .unwrap_err();
    assert!(err.is_photo());
    assert_eq!(fetcher.calls.load(Ordering::SeqCst), 1);

    let err = load_photo(&PhotoSource::Bytes(b"nope".to_vec()), &fetcher).unwrap_err();
    assert!(err.is_photo());
}

#[test]
fn describe_hides_inline_data() {
    assert_eq!(PhotoSource::Bytes(vec![0; 3]).describe(), "3 inline bytes");
    assert_eq!(PhotoSource::from("data:image/png;base64,AAAA").describe(), "data URL");
    assert_eq!(PhotoSource::from("me.png").describe(), "me.png");
}
