use crate::foundation::color::Rgba8;

/// Extra decoration drawn between the photo and the captions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Decoration {
    /// Nothing beyond the standard layers.
    #[default]
    None,
    /// Translucent rounded "glass" slab behind the lower captions.
    GlassPanel,
}

/// A static visual preset used by the template renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Template {
    /// Stable identifier, unique within the catalog.
    pub id: u32,
    /// Display label.
    pub name: &'static str,
    /// Diagonal gradient stops at offsets 0, 0.5 and 1.
    pub background_stops: [Rgba8; 3],
    /// Remote raster drawn full-frame at reduced opacity, if any.
    pub overlay_url: Option<&'static str>,
    /// Color of the photo border and captions.
    pub accent_color: Rgba8,
    /// Template-specific decoration.
    pub decoration: Decoration,
}

impl Template {
    /// Whether rendering this template needs an overlay fetch.
    pub fn has_overlay(&self) -> bool {
        self.overlay_url.is_some()
    }
}
