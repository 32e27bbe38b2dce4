/// RGBA8 color values and hex parsing.
pub mod color;
/// Error taxonomy and result alias.
pub mod error;
/// Canvas, circle frames and the cover-fit rule.
pub mod geom;
