use crate::{
    assets::decode::DecodedImage,
    compose::plan::DrawOp,
    foundation::geom::{Border, CircleFrame, cover_fit},
};

/// Circular photo layer: clip to `frame`, cover-fit `image` inside it, stroke with `border`.
///
/// Both renderers place the subject photo through this function.
pub fn circle_photo(image: DecodedImage, frame: CircleFrame, border: Option<Border>) -> DrawOp {
    let dest = cover_fit(image.width, image.height, frame);
    DrawOp::CirclePhoto {
        image,
        frame,
        dest,
        border,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/photo.rs"]
mod tests;
