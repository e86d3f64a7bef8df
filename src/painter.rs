//! Rendering context handed to frames and drawables

use crate::config::{baseline_skip, pt_to_px};
use crate::geom::{self, PixelRect, Point};
use crate::label::{self, LabelRasterizer};
use crate::render::{self, LinePattern, Paint, Surface};
use crate::text::{self, Align, LineText, VerAlign};
use crate::{ColorU8, Style, fontdb};

/// Color, width and dash pattern used to stroke lines and fill points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    /// Stroke and fill color
    pub color: ColorU8,
    /// Line width, in pixels
    pub width: f32,
    /// Dash and gap lengths, in pixels. `None` draws solid lines.
    pub dash: Option<[f32; 2]>,
}

impl Pen {
    /// A solid pen
    pub fn new(color: ColorU8, width: f32) -> Self {
        Pen {
            color,
            width,
            dash: None,
        }
    }

    /// Copy of the pen with a dash pattern, in pixels
    pub fn with_dash(self, dash: [f32; 2]) -> Self {
        Pen {
            dash: Some(dash),
            ..self
        }
    }

    // render::LinePattern::Dash is relative to the line width
    fn relative_dash(&self) -> Option<[f32; 2]> {
        self.dash.map(|[on, off]| [on / self.width, off / self.width])
    }
}

/// Font and size of a text
#[derive(Debug, Clone, Copy)]
pub struct TextStyle<'a> {
    /// Font
    pub font: &'a text::Font,
    /// Size in points
    pub size: f32,
}

/// Draws on a surface with a current pen.
///
/// Coordinates are canvas pixels, with Y growing downwards.
/// A painter is built by the canvas for each draw pass.
pub struct Painter<'a> {
    surface: &'a mut dyn Surface,
    fontdb: &'a fontdb::Database,
    rasterizer: Option<&'a dyn LabelRasterizer>,
    style: &'a Style,
    pen: Pen,
    font_warned: bool,
}

impl std::fmt::Debug for Painter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Painter")
            .field("pen", &self.pen)
            .field("rasterizer", &self.rasterizer.is_some())
            .finish_non_exhaustive()
    }
}

impl<'a> Painter<'a> {
    /// Build a painter over `surface`, with a pen initialized from `style`
    pub fn new(surface: &'a mut dyn Surface, fontdb: &'a fontdb::Database, style: &'a Style) -> Self {
        Painter {
            surface,
            fontdb,
            rasterizer: None,
            style,
            pen: default_pen(style),
            font_warned: false,
        }
    }

    /// Copy of the painter that renders math labels with `rasterizer`
    pub fn with_rasterizer(self, rasterizer: Option<&'a dyn LabelRasterizer>) -> Self {
        Painter { rasterizer, ..self }
    }

    /// The style of the canvas
    pub fn style(&self) -> &Style {
        self.style
    }

    /// The font database used to shape text
    pub fn fontdb(&self) -> &fontdb::Database {
        self.fontdb
    }

    /// Direct access to the underlying surface
    pub fn surface(&mut self) -> &mut dyn Surface {
        self.surface
    }

    /// The current pen
    pub fn pen(&self) -> Pen {
        self.pen
    }

    /// Replace the current pen
    pub fn set_pen(&mut self, pen: Pen) {
        self.pen = pen;
    }

    /// Change the color of the current pen
    pub fn set_color(&mut self, color: ColorU8) {
        self.pen.color = color;
    }

    /// Change the width of the current pen
    pub fn set_line_width(&mut self, width: f32) {
        self.pen.width = width;
    }

    /// Change the dash pattern of the current pen
    pub fn set_dash(&mut self, dash: Option<[f32; 2]>) {
        self.pen.dash = dash;
    }

    /// Restore the pen given to drawables: foreground color, style line width, solid
    pub fn reset_pen(&mut self) {
        self.pen = default_pen(self.style);
    }

    /// Fill the whole surface
    pub fn fill(&mut self, color: ColorU8) {
        self.surface.fill(Paint::Solid(color));
    }

    /// Fill a rectangle with the pen color
    pub fn fill_rect(&mut self, rect: PixelRect) {
        if rect.is_empty() {
            return;
        }
        self.surface.draw_rect(&render::Rect {
            rect: rect.to_rect(),
            fill: Some(Paint::Solid(self.pen.color)),
            stroke: None,
            transform: None,
        });
    }

    /// Stroke the outline of a rectangle
    pub fn rect_outline(&mut self, rect: PixelRect) {
        let (l, t) = (rect.left() as f32, rect.top() as f32);
        let (r, b) = (rect.right() as f32, rect.bottom() as f32);
        let mut pb = geom::PathBuilder::new();
        pb.move_to(l, t);
        pb.line_to(r, t);
        pb.line_to(r, b);
        pb.line_to(l, b);
        pb.close();
        if let Some(path) = pb.finish() {
            self.stroke_path(&path);
        }
    }

    /// Stroke a segment
    pub fn line(&mut self, p0: Point, p1: Point) {
        if !p0.is_finite() || !p1.is_finite() {
            return;
        }
        let mut pb = geom::PathBuilder::new();
        pb.move_to(p0.x, p0.y);
        pb.line_to(p1.x, p1.y);
        if let Some(path) = pb.finish() {
            self.stroke_path(&path);
        }
    }

    /// Stroke a polyline joining `points` in order.
    /// Nothing is drawn for less than 2 points.
    pub fn polyline(&mut self, points: &[Point]) {
        if points.len() < 2 {
            return;
        }
        let mut pb = geom::PathBuilder::new();
        pb.move_to(points[0].x, points[0].y);
        for p in &points[1..] {
            pb.line_to(p.x, p.y);
        }
        if let Some(path) = pb.finish() {
            self.stroke_path(&path);
        }
    }

    /// Fill a circle with the pen color
    pub fn circle(&mut self, center: Point, radius: f32) {
        let Some(path) = geom::PathBuilder::from_circle(center.x, center.y, radius) else {
            return;
        };
        self.surface.draw_path(&render::Path {
            path: &path,
            fill: Some(Paint::Solid(self.pen.color)),
            stroke: None,
            transform: None,
        });
    }

    /// Clip subsequent drawing to `rect`, until [`Painter::pop_clip`]
    pub fn push_clip(&mut self, rect: PixelRect) {
        let rect = rect.to_rect();
        self.surface.push_clip(&render::Clip {
            rect: &rect,
            transform: None,
        });
    }

    /// Remove the last clip pushed by [`Painter::push_clip`]
    pub fn pop_clip(&mut self) {
        self.surface.pop_clip();
    }

    /// Draw a single line of text with the pen color.
    ///
    /// `anchor` is the point of the text designated by `align`.
    /// The text is rotated by `angle` degrees around the anchor, clockwise
    /// on screen. Texts containing [`label::MATH_DELIMITER`] are handed to the
    /// label rasterizer if one is installed.
    ///
    /// Failures are logged and the text is skipped.
    pub fn draw_text(
        &mut self,
        text: &str,
        anchor: Point,
        align: (Align, VerAlign),
        angle: f32,
        style: TextStyle<'_>,
    ) {
        if text.is_empty() || !anchor.is_finite() {
            return;
        }
        let transform = geom::Transform::from_rotate(angle).post_translate(anchor.x, anchor.y);

        if label::is_math(text) {
            if let Some(rasterizer) = self.rasterizer {
                match rasterizer.rasterize(text) {
                    Ok(image) => {
                        let height = baseline_skip(style.size) as f32;
                        self.draw_label_image(&image, height, align, &transform);
                    }
                    Err(err) => log::warn!("Could not rasterize label {:?}: {}", text, err),
                }
                return;
            }
        }

        let line = match LineText::new(text, align, pt_to_px(style.size), style.font, self.fontdb) {
            Ok(line) => line,
            Err(err) => {
                if !self.font_warned {
                    log::warn!("Skipping text {:?}: {}", text, err);
                    self.font_warned = true;
                }
                return;
            }
        };

        let color = self.pen.color;
        let surface = &mut *self.surface;
        text::render_line_text_with(&line, self.fontdb, |path| {
            surface.draw_path(&render::Path {
                path,
                fill: Some(Paint::Solid(color)),
                stroke: None,
                transform: Some(&transform),
            });
        });
    }

    fn draw_label_image(
        &mut self,
        image: &render::ImageData,
        height: f32,
        align: (Align, VerAlign),
        transform: &geom::Transform,
    ) {
        let width = image.width() as f32 * height / image.height() as f32;
        let x = match align.0 {
            Align::Left => 0.0,
            Align::Center => -width / 2.0,
            Align::Right => -width,
        };
        let y = match align.1 {
            VerAlign::Top | VerAlign::Hanging => 0.0,
            VerAlign::Middle => -height / 2.0,
            VerAlign::Baseline | VerAlign::Bottom => -height,
        };
        let rect = geom::Rect::from_xywh(x, y, width, height);
        self.surface.draw_image(&render::Image {
            image,
            rect: &rect,
            transform: Some(transform),
        });
    }

    fn stroke_path(&mut self, path: &geom::Path) {
        if !(self.pen.width > 0.0) {
            return;
        }
        let dash = self.pen.relative_dash();
        let pattern = match &dash {
            Some(dash) => LinePattern::Dash(&dash[..]),
            None => LinePattern::Solid,
        };
        self.surface.draw_path(&render::Path {
            path,
            fill: None,
            stroke: Some(render::Stroke {
                color: self.pen.color,
                width: self.pen.width,
                pattern,
            }),
            transform: None,
        });
    }
}

fn default_pen(style: &Style) -> Pen {
    Pen::new(style.foreground, style.line_width)
}
