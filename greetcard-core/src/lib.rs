//! Greetcard composes personalised New Year greeting cards into PNG images.
//!
//! Two pipelines share one CPU rendering path:
//!
//! - [`TemplateRenderer`]: a 1080x1080 card from a catalog [`Template`] (gradient, optional
//!   overlay, circular photo, optional decoration, captions).
//! - [`AiCompositeRenderer`]: a 1024x1024 card over a background from a
//!   [`BackgroundGenerator`], falling back to a local gradient when generation fails.
//!
//! # Pipeline overview
//!
//! 1. **Load**: subject photo, then overlay or generated background. Only the photo is fatal.
//! 2. **Compose**: decoded inputs become a backend-agnostic [`CardPlan`].
//! 3. **Rasterize**: the plan is painted with `vello_cpu` into premultiplied RGBA8.
//! 4. **Encode**: pixels are un-premultiplied and written as PNG ([`RenderedCard`]).
//!
//! Rendering is synchronous. Renderers hold only immutable configuration and `Send + Sync`
//! collaborators, so one instance can serve many threads.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod catalog;
mod compose;
mod config;
mod foundation;
mod generate;
mod render;
mod share;

pub use assets::decode::{DecodedImage, MAX_DECODED_SIDE, decode_image};
pub use assets::fetch::{
    DEFAULT_HTTP_TIMEOUT, DEFAULT_MAX_FETCH_BYTES, FetchedResource, HttpFetcher, ResourceFetcher,
    USER_AGENT, decode_data_url,
};
pub use assets::photo::{PhotoSource, load_photo};
pub use catalog::registry::{catalog, template_by_id};
pub use catalog::template::{Decoration, Template};
pub use compose::ai::{AI_CANVAS, AiCompositeRenderer, FALLBACK_STOPS, ai_plan};
pub use compose::photo::circle_photo;
pub use compose::plan::{BackgroundOrigin, Caption, CardOrigin, CardPlan, DrawOp};
pub use compose::request::DisplayName;
pub use compose::template::{
    GLASS_PANEL_RECT, OVERLAY_OPACITY, TEMPLATE_CANVAS, TemplateRenderer, template_plan,
};
pub use config::CardConfig;
pub use foundation::color::Rgba8;
pub use foundation::error::{CardError, CardResult};
pub use foundation::geom::{Border, Canvas, CircleFrame, Point, Rect, cover_fit};
pub use generate::hf::{DEFAULT_INFERENCE_URL, DEFAULT_MODEL, HfInferenceClient, check_image_response};
pub use generate::{
    BackgroundGenerator, DisabledGenerator, GenerationError, NEW_YEAR_NEGATIVE_PROMPT,
    NEW_YEAR_PROMPT, TextToImageRequest,
};
pub use render::cpu::{CpuRasterizer, FrameRGBA, RasterizerPool};
pub use render::encode::{RenderedCard, encode_png, finish};
pub use render::text::{DEFAULT_FONT_STACK, FontOptions, TextBrushRgba8, TextLayoutEngine, caption_origin};
pub use share::{
    SHARE_TEXT, SHARE_TITLE, SITE_URL, ShareMessage, download_filename, whatsapp_message,
    whatsapp_share_url,
};
