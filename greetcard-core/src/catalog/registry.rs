//! Built-in template catalog.
//!
//! Colors are literal values, so every template always carries exactly three valid gradient
//! stops and an accent color.

use crate::{
    catalog::template::{Decoration, Template},
    foundation::color::Rgba8,
    foundation::error::{CardError, CardResult},
};

static TEMPLATES: [Template; 34] = [
    Template {
        id: 1,
        name: "Fireworks Celebration",
        background_stops: [
            Rgba8::hex(0x581C87),
            Rgba8::hex(0x831843),
            Rgba8::hex(0x7C2D12),
        ],
        overlay_url: Some(
            "https://images.unsplash.com/photo-1657032178129-fedec8a0947a?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxmaXJld29ya3MlMjBjZWxlYnJhdGlvbiUyMG5pZ2h0fGVufDF8fHx8MTc2NzAwODk0MHww&ixlib=rb-4.1.0&q=80&w=1080",
        ),
        accent_color: Rgba8::hex(0xFFD700),
        decoration: Decoration::None,
    },
    Template {
        id: 2,
        name: "Golden Luxury",
        background_stops: [
            Rgba8::hex(0x713F12),
            Rgba8::hex(0x78350F),
            Rgba8::hex(0x7C2D12),
        ],
        overlay_url: Some(
            "https://images.unsplash.com/photo-1761437856311-3ba13025f161?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxnb2xkJTIwbHV4dXJ5JTIwZWxlZ2FudHxlbnwxfHx8fDE3NjcxMTkyNTF8MA&ixlib=rb-4.1.0&q=80&w=1080",
        ),
        accent_color: Rgba8::hex(0xFFFFFF),
        decoration: Decoration::None,
    },
    Template {
        id: 3,
        name: "Minimal Pastel",
        background_stops: [
            Rgba8::hex(0xFBCFE8),
            Rgba8::hex(0xE9D5FF),
            Rgba8::hex(0xBFDBFE),
        ],
        overlay_url: None,
        accent_color: Rgba8::hex(0x8B5CF6),
        decoration: Decoration::None,
    },
    Template {
        id: 4,
        name: "Neon Cyber",
        background_stops: [
            Rgba8::hex(0x164E63),
            Rgba8::hex(0x581C87),
            Rgba8::hex(0x831843),
        ],
        overlay_url: Some(
            "https://images.unsplash.com/photo-1626972309141-bee9f36a0499?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxuZW9uJTIwbGlnaHRzJTIwY2l0eXxlbnwxfHx8fDE3NjcwMjgxOTl8MA&ixlib=rb-4.1.0&q=80&w=1080",
        ),
        accent_color: Rgba8::hex(0x00FFFF),
        decoration: Decoration::None,
    },
    Template {
        id: 5,
        name: "Floral Festive",
        background_stops: [
            Rgba8::hex(0xFDA4AF),
            Rgba8::hex(0xF9A8D4),
            Rgba8::hex(0xF0ABFC),
        ],
        overlay_url: None,
        accent_color: Rgba8::hex(0xBE185D),
        decoration: Decoration::None,
    },
    Template {
        id: 6,
        name: "Night Sky Stars",
        background_stops: [
            Rgba8::hex(0x1E1B4B),
            Rgba8::hex(0x3B0764),
            Rgba8::hex(0x172554),
        ],
        overlay_url: Some(
            "https://images.unsplash.com/photo-1502957291543-d85480254bf8?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&ixid=M3w3Nzg4Nzd8MHwxfHNlYXJjaHwxfHxuaWdodCUyMHNreSUyMHN0YXJzfGVufDF8fHx8MTc2NzA5MTcyN3ww&ixlib=rb-4.1.0&q=80&w=1080",
        ),
        accent_color: Rgba8::hex(0xFBBF24),
        decoration: Decoration::None,
    },
    Template {
        id: 7,
        name: "Celebration Party",
        background_stops: [
            Rgba8::hex(0xFB923C),
            Rgba8::hex(0xF87171),
            Rgba8::hex(0xF472B6),
        ],
        overlay_url: None,
        accent_color: Rgba8::hex(0xFFFFFF),
        decoration: Decoration::None,
    },
    Template {
        id: 8,
        name: "Elegant Typography",
        background_stops: [
            Rgba8::hex(0x0F172A),
            Rgba8::hex(0x111827),
            Rgba8::hex(0x18181B),
        ],
        overlay_url: None,
        accent_color: Rgba8::hex(0xF4F4F5),
        decoration: Decoration::None,
    },
    Template {
        id: 9,
        name: "Creative Collage",
        background_stops: [
            Rgba8::hex(0x2DD4BF),
            Rgba8::hex(0x22D3EE),
            Rgba8::hex(0x60A5FA),
        ],
        overlay_url: None,
        accent_color: Rgba8::hex(0xFFFFFF),
        decoration: Decoration::None,
    },
    Template {
        id: 10,
        name: "Glassmorphism",
        background_stops: [
            Rgba8::hex(0x8B5CF6),
            Rgba8::hex(0xA855F7),
            Rgba8::hex(0xD946EF),
        ],
        overlay_url: None,
        accent_color: Rgba8::hex(0xFFFFFF),
        decoration: Decoration::GlassPanel,
    },
    Template {
        id: 11,
        name: "Midnight Noir",
        background_stops: [
            Rgba8::hex(0x000000),
            Rgba8::hex(0x111827),
            Rgba8::hex(0x0F172A),
        ],
        overlay_url: Some(
            "https://images.unsplash.com/photo-1467810563316-b5476525c0f9?q=80&w=1080&auto=format&fit=crop",
        ),
        accent_color: Rgba8::hex(0xE2E8F0),
        decoration: Decoration::None,
    },
    Template {
        id: 12,
        name: "Retro Disco",
        background_stops: [
            Rgba8::hex(0xC026D3),
            Rgba8::hex(0x9333EA),
            Rgba8::hex(0x4F46E5),
        ],
        overlay_url: Some(
            "https://images.unsplash.com/photo-1533219057257-4bb9ed5d2cc6?q=80&w=1080&auto=format&fit=crop",
        ),
        accent_color: Rgba8::hex(0xFF00FF),
        decoration: Decoration::None,
    },
    Template {
        id: 13,
        name: "Glitter Blast",
        background_stops: [
            Rgba8::hex(0xEC4899),
            Rgba8::hex(0xEF4444),
            Rgba8::hex(0xEAB308),
        ],
        overlay_url: Some("https://images.unsplash.com/photo-1513151233558-d860c5398176?q=80&w=1080"),
        accent_color: Rgba8::hex(0xFFFFFF),
        decoration: Decoration::None,
    },
    Template {
        id: 14,
        name: "Silver Sparkle",
        background_stops: [
            Rgba8::hex(0x94A3B8),
            Rgba8::hex(0x6B7280),
            Rgba8::hex(0x475569),
        ],
        overlay_url: Some("https://images.unsplash.com/photo-1528459801416-a9e53bbf4e17?q=80&w=1080"),
        accent_color: Rgba8::hex(0xF8FAFC),
        decoration: Decoration::None,
    },
    Template {
        id: 15,
        name: "Golden Hour",
        background_stops: [
            Rgba8::hex(0xF97316),
            Rgba8::hex(0xF59E0B),
            Rgba8::hex(0xEAB308),
        ],
        overlay_url: None,
        accent_color: Rgba8::hex(0x451A03),
        decoration: Decoration::None,
    },
    Template {
        id: 16,
        name: "Confetti Rain",
        background_stops: [
            Rgba8::hex(0x60A5FA),
            Rgba8::hex(0xD946EF),
            Rgba8::hex(0xA855F7),
        ],
        overlay_url: Some("https://images.unsplash.com/photo-1492684223066-81342ee5ff30?q=80&w=1080"),
        accent_color: Rgba8::hex(0xFFFFFF),
        decoration: Decoration::None,
    },
    Template {
        id: 17,
        name: "Rose Gold",
        background_stops: [
            Rgba8::hex(0xFECDD3),
            Rgba8::hex(0xF9A8D4),
            Rgba8::hex(0xFB7185),
        ],
        overlay_url: None,
        accent_color: Rgba8::hex(0x881337),
        decoration: Decoration::None,
    },
    Template {
        id: 18,
        name: "Cyberpunk Red",
        background_stops: [
            Rgba8::hex(0xDC2626),
            Rgba8::hex(0x7F1D1D),
            Rgba8::hex(0x000000),
        ],
        overlay_url: Some("https://images.unsplash.com/photo-1550745165-9bc0b252726f?q=80&w=1080"),
        accent_color: Rgba8::hex(0xFF0000),
        decoration: Decoration::None,
    },
    Template {
        id: 19,
        name: "Vaporwave",
        background_stops: [
            Rgba8::hex(0x67E8F9),
            Rgba8::hex(0xF9A8D4),
            Rgba8::hex(0xC084FC),
        ],
        overlay_url: None,
        accent_color: Rgba8::hex(0xFFFFFF),
        decoration: Decoration::None,
    },
    Template {
        id: 20,
        name: "Toxic Glow",
        background_stops: [
            Rgba8::hex(0x000000),
            Rgba8::hex(0x111827),
            Rgba8::hex(0x14532D),
        ],
        overlay_url: None,
        accent_color: Rgba8::hex(0x4ADE80),
        decoration: Decoration::None,
    },
    Template {
        id: 21,
        name: "Ultraviolet",
        background_stops: [
            Rgba8::hex(0x4C1D95),
            Rgba8::hex(0x581C87),
            Rgba8::hex(0x000000),
        ],
        overlay_url: None,
        accent_color: Rgba8::hex(0xE879F9),
        decoration: Decoration::None,
    },
    Template {
        id: 22,
        name: "Ocean Deep",
        background_stops: [
            Rgba8::hex(0x1E3A8A),
            Rgba8::hex(0x164E63),
            Rgba8::hex(0x000000),
        ],
        overlay_url: Some("https://images.unsplash.com/photo-1551244072-5d12893278ab?q=80&w=1080"),
        accent_color: Rgba8::hex(0xA5F3FC),
        decoration: Decoration::None,
    },
    Template {
        id: 23,
        name: "Winter Frost",
        background_stops: [
            Rgba8::hex(0xEFF6FF),
            Rgba8::hex(0xEEF2FF),
            Rgba8::hex(0xDBEAFE),
        ],
        overlay_url: Some("https://images.unsplash.com/photo-1418985991508-e47386d96a71?q=80&w=1080"),
        accent_color: Rgba8::hex(0x1E40AF),
        decoration: Decoration::None,
    },
    Template {
        id: 24,
        name: "Lavender Fields",
        background_stops: [
            Rgba8::hex(0xC7D2FE),
            Rgba8::hex(0xE9D5FF),
            Rgba8::hex(0xFBCFE8),
        ],
        overlay_url: None,
        accent_color: Rgba8::hex(0x4C1D95),
        decoration: Decoration::None,
    },
    Template {
        id: 25,
        name: "Arctic Whisper",
        background_stops: [
            Rgba8::hex(0xF1F5F9),
            Rgba8::hex(0xECFEFF),
            Rgba8::hex(0xDBEAFE),
        ],
        overlay_url: Some("https://images.unsplash.com/photo-1517299321609-52687d1bc55a?q=80&w=1080"),
        accent_color: Rgba8::hex(0x0891B2),
        decoration: Decoration::None,
    },
    Template {
        id: 26,
        name: "Frosted Ember",
        background_stops: [
            Rgba8::hex(0x1E3A8A),
            Rgba8::hex(0x1E293B),
            Rgba8::hex(0x7F1D1D),
        ],
        overlay_url: Some("https://images.unsplash.com/photo-1482192505345-5655af888cc4?q=80&w=1080"),
        accent_color: Rgba8::hex(0xFECACA),
        decoration: Decoration::None,
    },
    Template {
        id: 27,
        name: "Frozen Palace",
        background_stops: [
            Rgba8::hex(0xBFDBFE),
            Rgba8::hex(0x7DD3FC),
            Rgba8::hex(0x818CF8),
        ],
        overlay_url: Some("https://images.unsplash.com/photo-1478720568477-152d9b164e26?q=80&w=1080"),
        accent_color: Rgba8::hex(0xFFFFFF),
        decoration: Decoration::None,
    },
    Template {
        id: 28,
        name: "Silver Blizzard",
        background_stops: [
            Rgba8::hex(0xD1D5DB),
            Rgba8::hex(0x94A3B8),
            Rgba8::hex(0x6B7280),
        ],
        overlay_url: Some("https://images.unsplash.com/photo-1418985991508-e47386d96a71?q=80&w=1080"),
        accent_color: Rgba8::hex(0xF8FAFC),
        decoration: Decoration::None,
    },
    Template {
        id: 29,
        name: "Snowy Peak",
        background_stops: [
            Rgba8::hex(0xEFF6FF),
            Rgba8::hex(0xF7FBFF),
            Rgba8::hex(0xFFFFFF),
        ],
        overlay_url: Some("https://images.unsplash.com/photo-1464822759023-fed622ff2c3b?q=80&w=1080"),
        accent_color: Rgba8::hex(0x334155),
        decoration: Decoration::None,
    },
    Template {
        id: 30,
        name: "Deep Borealis",
        background_stops: [
            Rgba8::hex(0x14532D),
            Rgba8::hex(0x022C22),
            Rgba8::hex(0x000000),
        ],
        overlay_url: Some("https://images.unsplash.com/photo-1483347756197-71ef80e95f73?q=80&w=1080"),
        accent_color: Rgba8::hex(0xA7F3D0),
        decoration: Decoration::None,
    },
    Template {
        id: 31,
        name: "Midnight Frost",
        background_stops: [
            Rgba8::hex(0x000000),
            Rgba8::hex(0x0F172A),
            Rgba8::hex(0x172554),
        ],
        overlay_url: Some("https://images.unsplash.com/photo-1498623116890-37e912163d5d?q=80&w=1080"),
        accent_color: Rgba8::hex(0xBAE6FD),
        decoration: Decoration::None,
    },
    Template {
        id: 32,
        name: "Alpine Glow",
        background_stops: [
            Rgba8::hex(0xFFE4E6),
            Rgba8::hex(0xF3E8FF),
            Rgba8::hex(0xBFDBFE),
        ],
        overlay_url: None,
        accent_color: Rgba8::hex(0xBE185D),
        decoration: Decoration::None,
    },
    Template {
        id: 33,
        name: "Ice Cave",
        background_stops: [
            Rgba8::hex(0x0E7490),
            Rgba8::hex(0x1E40AF),
            Rgba8::hex(0x312E81),
        ],
        overlay_url: Some("https://images.unsplash.com/photo-1520113412646-04fc68c0bc21?q=80&w=1080"),
        accent_color: Rgba8::hex(0xE0F2FE),
        decoration: Decoration::None,
    },
    Template {
        id: 34,
        name: "Polar Light",
        background_stops: [
            Rgba8::hex(0x7DD3FC),
            Rgba8::hex(0x60A5FA),
            Rgba8::hex(0x6366F1),
        ],
        overlay_url: Some("https://images.unsplash.com/photo-1489674267075-cee793167910?q=80&w=1080"),
        accent_color: Rgba8::hex(0x1E3A8A),
        decoration: Decoration::None,
    },
];

/// All built-in templates, in display order.
pub fn catalog() -> &'static [Template] {
    &TEMPLATES
}

/// Look up a template by its stable id.
pub fn template_by_id(id: u32) -> CardResult<&'static Template> {
    TEMPLATES
        .iter()
        .find(|t| t.id == id)
        .ok_or_else(|| CardError::validation(format!("unknown template id {id}")))
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/registry.rs"]
mod tests;
