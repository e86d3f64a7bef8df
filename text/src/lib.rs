//! Text shaping for ticplot.
//!
//! Labels are short single lines. They are shaped with rustybuzz and the glyphs
//! are outlined into [`geom::Path`]s, so that rendering surfaces never deal with
//! fonts themselves.

use std::fmt;

use ticplot_base::geom;
use ttf_parser as ttf;

pub mod font;
pub mod line;

pub use font::{Font, ScaledMetrics, parse_font_families};
pub use line::{Align, LineText, VerAlign, render_line_text_with};

/// Re-export of the font database crate
pub use fontdb;

/// Build a font database with the fonts installed on the system.
///
/// An empty database is not an error: text drawing is then skipped with a warning.
pub fn system_font_db() -> fontdb::Database {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();
    if db.is_empty() {
        log::warn!("No system font found, labels will not be rendered");
    } else {
        log::debug!("Loaded {} system font faces", db.len());
    }
    db
}

#[derive(Debug, Clone)]
pub enum Error {
    NoSuchFont(Font),
    FaceParsingError(ttf::FaceParsingError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoSuchFont(font) => write!(f, "Could not find a face for {:?}", font),
            Error::FaceParsingError(err) => err.fmt(f),
        }
    }
}

impl From<ttf::FaceParsingError> for Error {
    fn from(err: ttf::FaceParsingError) -> Self {
        Error::FaceParsingError(err)
    }
}

impl std::error::Error for Error {}

struct Outliner<'a>(&'a mut geom::PathBuilder);

impl ttf::OutlineBuilder for Outliner<'_> {
    fn move_to(&mut self, x: f32, y: f32) {
        self.0.move_to(x, y);
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.0.line_to(x, y);
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.0.quad_to(x1, y1, x, y);
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.0.cubic_to(x1, y1, x2, y2, x, y);
    }

    fn close(&mut self) {
        self.0.close();
    }
}
