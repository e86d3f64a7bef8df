//! Font description and face selection

use fontdb::{Database, ID};
use ttf_parser as ttf;

/// A font request: a CSS like list of families, a weight and an italic flag.
///
/// The family list is resolved against a [`fontdb::Database`] when text is shaped.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Font {
    families: String,
    weight: u16,
    italic: bool,
}

impl Font {
    /// Build a regular font for a family list such as `"Times New Roman, serif"`
    pub fn new(families: impl Into<String>) -> Self {
        Font {
            families: families.into(),
            weight: 400,
            italic: false,
        }
    }

    pub fn with_weight(self, weight: u16) -> Self {
        Font { weight, ..self }
    }

    pub fn with_italic(self, italic: bool) -> Self {
        Font { italic, ..self }
    }

    pub fn families(&self) -> &str {
        &self.families
    }

    pub fn weight(&self) -> u16 {
        self.weight
    }

    pub fn italic(&self) -> bool {
        self.italic
    }
}

/// Parse a comma separated family list.
/// Generic names map to the generic fontdb families, quotes are removed.
pub fn parse_font_families(input: &str) -> Vec<fontdb::Family<'_>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| match part {
            "serif" => fontdb::Family::Serif,
            "sans-serif" => fontdb::Family::SansSerif,
            "cursive" => fontdb::Family::Cursive,
            "fantasy" => fontdb::Family::Fantasy,
            "monospace" => fontdb::Family::Monospace,
            _ => fontdb::Family::Name(part.trim_matches('\'').trim_matches('"')),
        })
        .collect()
}

pub(crate) fn select_face(db: &Database, font: &Font) -> Option<ID> {
    let mut families = parse_font_families(font.families());
    // last resort so that an unknown family still renders
    families.push(fontdb::Family::SansSerif);
    let style = if font.italic() {
        fontdb::Style::Italic
    } else {
        fontdb::Style::Normal
    };
    let query = fontdb::Query {
        families: &families,
        weight: fontdb::Weight(font.weight()),
        stretch: fontdb::Stretch::Normal,
        style,
    };
    db.query(&query)
}

/// Face metrics scaled to a font size, in pixels.
///
/// `ascent` is positive and `descent` negative, as in the font tables.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledMetrics {
    pub scale: f32,
    pub ascent: f32,
    pub descent: f32,
    pub x_height: f32,
    pub cap_height: f32,
}

impl ScaledMetrics {
    pub const fn null() -> Self {
        ScaledMetrics {
            scale: 1.0,
            ascent: 0.0,
            descent: 0.0,
            x_height: 0.0,
            cap_height: 0.0,
        }
    }

    pub fn height(&self) -> f32 {
        self.ascent - self.descent
    }
}

pub(crate) fn face_metrics(face: &ttf::Face, font_size: f32) -> ScaledMetrics {
    let scale = font_size / face.units_per_em() as f32;
    let ascent = face.ascender() as f32;
    let descent = face.descender() as f32;
    let x_height = face
        .x_height()
        .map_or((ascent - descent) * 0.45, |h| h as f32);
    let cap_height = face
        .capital_height()
        .map_or((ascent - descent) * 0.8, |h| h as f32);

    ScaledMetrics {
        scale,
        ascent: ascent * scale,
        descent: descent * scale,
        x_height: x_height * scale,
        cap_height: cap_height * scale,
    }
}

pub(crate) fn apply_variations(face: &mut ttf::Face, font: &Font) {
    if face.is_variable() && face.weight().to_number() != font.weight() {
        let _ = face.set_variation(ttf::Tag::from_bytes(b"wght"), font.weight() as f32);
    }
}
