/// Raster decoding into premultiplied RGBA8.
pub mod decode;
/// Resource fetching by URL.
pub mod fetch;
/// Subject photo sources and loading.
pub mod photo;
