//! Single line text layout and outlining

use ticplot_base::geom;
use ttf_parser as ttf;

use crate::font::{self, ScaledMetrics};
use crate::{Error, Font, fontdb};

/// Horizontal alignment, relative to the anchor point
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Align {
    /// The text starts at the anchor
    #[default]
    Left,
    /// The text is centered on the anchor
    Center,
    /// The text ends at the anchor
    Right,
}

/// Vertical alignment for a single line of text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VerAlign {
    /// Align the bottom of the descender
    Bottom,
    /// Align the baseline
    #[default]
    Baseline,
    /// Align at middle of the x-height
    Middle,
    /// Align at capital height
    Hanging,
    /// Align at the top of the ascender
    Top,
}

/// A shaped single line of text.
///
/// The glyphs are laid out so that the origin (0, 0) is the anchor point
/// described by the alignment. The final position is given by the transform
/// applied to the outlined paths.
#[derive(Debug, Clone)]
pub struct LineText {
    text: String,
    font: Font,
    bbox: Option<geom::Rect>,
    metrics: ScaledMetrics,
    face_id: Option<fontdb::ID>,
    glyphs: Vec<Glyph>,
}

#[derive(Debug, Clone, Copy)]
struct Glyph {
    id: ttf::GlyphId,
    ts: geom::Transform,
}

impl LineText {
    /// Shape `text` with the given alignment, size and font.
    ///
    /// Fails with [`Error::NoSuchFont`] when the database has no face for the font.
    pub fn new(
        text: &str,
        align: (Align, VerAlign),
        font_size: f32,
        font: &Font,
        db: &fontdb::Database,
    ) -> Result<Self, Error> {
        if text.is_empty() {
            return Ok(LineText {
                text: String::new(),
                font: font.clone(),
                bbox: None,
                metrics: ScaledMetrics::null(),
                face_id: None,
                glyphs: Vec::new(),
            });
        }

        let face_id = font::select_face(db, font).ok_or_else(|| Error::NoSuchFont(font.clone()))?;

        let mut buffer = rustybuzz::UnicodeBuffer::new();
        buffer.push_str(text);
        buffer.guess_segment_properties();

        let shaped = db
            .with_face_data(face_id, |data, index| -> Result<_, Error> {
                let mut face = ttf::Face::parse(data, index)?;
                font::apply_variations(&mut face, font);
                let metrics = font::face_metrics(&face, font_size);
                let hbface = rustybuzz::Face::from_face(face);
                Ok((rustybuzz::shape(&hbface, &[], buffer), metrics))
            })
            .ok_or_else(|| Error::NoSuchFont(font.clone()))?;
        let (shape, metrics) = shaped?;

        let (align, ver_align) = align;

        let width: f32 = shape
            .glyph_positions()
            .iter()
            .map(|p| p.x_advance as f32 * metrics.scale)
            .sum();

        let x_start = match align {
            Align::Left => 0.0,
            Align::Center => -width / 2.0,
            Align::Right => -width,
        };
        let y_base = match ver_align {
            VerAlign::Bottom => metrics.descent,
            VerAlign::Baseline => 0.0,
            VerAlign::Middle => metrics.x_height / 2.0,
            VerAlign::Hanging => metrics.cap_height,
            VerAlign::Top => metrics.ascent,
        };

        let y_flip = geom::Transform::from_scale(1.0, -1.0);
        let scale_ts = geom::Transform::from_scale(metrics.scale, metrics.scale);

        let mut x_cursor = x_start;
        let mut y_cursor = y_base;
        let mut glyphs = Vec::with_capacity(shape.len());
        for (info, pos) in shape.glyph_infos().iter().zip(shape.glyph_positions()) {
            let x = x_cursor + pos.x_offset as f32 * metrics.scale;
            let y = y_cursor - pos.y_offset as f32 * metrics.scale;
            let pos_ts = geom::Transform::from_translate(x, y);
            glyphs.push(Glyph {
                id: ttf::GlyphId(info.glyph_id as u16),
                ts: y_flip.post_concat(scale_ts).post_concat(pos_ts),
            });
            x_cursor += pos.x_advance as f32 * metrics.scale;
            y_cursor -= pos.y_advance as f32 * metrics.scale;
        }

        let top = y_base - metrics.ascent;
        let bottom = y_base - metrics.descent;

        Ok(LineText {
            text: text.to_string(),
            font: font.clone(),
            bbox: Some(geom::Rect::from_trbl(top, x_start + width, bottom, x_start)),
            metrics,
            face_id: Some(face_id),
            glyphs,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn font(&self) -> &Font {
        &self.font
    }

    /// Layout box relative to the anchor, `None` for empty text
    pub fn bbox(&self) -> Option<&geom::Rect> {
        self.bbox.as_ref()
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.bbox.map_or(0.0, |bbox| bbox.width())
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.bbox.map_or(0.0, |bbox| bbox.height())
    }

    pub fn metrics(&self) -> ScaledMetrics {
        self.metrics
    }
}

/// Outline the glyphs of `line` and hand the resulting path to `render_fn`.
///
/// The path is expressed relatively to the anchor of the line.
pub fn render_line_text_with<R>(line: &LineText, db: &fontdb::Database, mut render_fn: R)
where
    R: FnMut(&geom::Path),
{
    let Some(face_id) = line.face_id else {
        return;
    };
    db.with_face_data(face_id, |data, index| {
        let mut face = match ttf::Face::parse(data, index) {
            Ok(face) => face,
            Err(err) => {
                log::warn!("Could not parse face for {:?}: {}", line.text(), err);
                return;
            }
        };
        font::apply_variations(&mut face, line.font());

        // the path builder for the entire string
        let mut str_pb = geom::PathBuilder::new();
        // the path builder for each glyph
        let mut gl_pb = geom::PathBuilder::new();

        for gl in &line.glyphs {
            face.outline_glyph(gl.id, &mut crate::Outliner(&mut gl_pb));

            if let Some(path) = gl_pb.finish() {
                if let Some(path) = path.transform(gl.ts) {
                    str_pb.push_path(&path);
                }
            }
            gl_pb = geom::PathBuilder::new();
        }

        if let Some(path) = str_pb.finish() {
            render_fn(&path);
        }
    });
}
