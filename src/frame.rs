//! Plot frames: three axes mapped onto a plot rectangle.
//!
//! A frame owns an outer rectangle assigned by the canvas layout, and derives
//! the plot rectangle from it by leaving room for tic labels, axis labels
//! and title. Data coordinates are mapped to pixels within the plot rectangle.
mod decor;
mod series;

use std::fmt;

use crate::axis::{self, Axis};
use crate::config::{self, Config, check_font_size};
use crate::geom::{PixelRect, Point};
use crate::painter::TextStyle;
use crate::{Drawable, Error, Painter, scale, text};

/// Identifies one of the three axes of a frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AxisId {
    /// Horizontal axis
    X,
    /// Primary vertical axis, with tics on the left
    Y,
    /// Secondary vertical axis, with tics on the right
    Y2,
}

impl AxisId {
    /// Whether pixel coordinates grow against data values on this axis
    pub const fn is_vertical(self) -> bool {
        !matches!(self, AxisId::X)
    }
}

/// A rectangular plot area with its axes and decorations
pub struct Frame {
    outer: PixelRect,
    plot: PixelRect,
    baseline_skip: i32,
    x: Axis,
    y: Axis,
    y2: Axis,
    title: Option<String>,
    font: text::Font,
    font_size: f32,
    border: bool,
    zero_lines: bool,
    drawable: Option<Box<dyn Drawable>>,
}

impl fmt::Debug for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Frame")
            .field("outer", &self.outer)
            .field("plot", &self.plot)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("y2", &self.y2)
            .field("title", &self.title)
            .field("font", &self.font)
            .field("font_size", &self.font_size)
            .field("border", &self.border)
            .field("zero_lines", &self.zero_lines)
            .field("drawable", &self.drawable.is_some())
            .finish()
    }
}

impl Frame {
    /// Build a frame initialized from `config`, with an empty outer rectangle.
    ///
    /// The three axes get the configured range and tic count.
    /// Tics are enabled on X and Y, disabled on Y2. Grids are disabled.
    /// Border and zero lines are enabled.
    pub fn new(config: &Config) -> Result<Self, Error> {
        config.validate()?;
        let axis = config.axis()?;
        let mut frame = Frame {
            outer: PixelRect::default(),
            plot: PixelRect::default(),
            baseline_skip: config::baseline_skip(config.font_size),
            x: axis.clone(),
            y: axis.clone(),
            y2: axis.with_tics(false),
            title: None,
            font: config.font.clone(),
            font_size: config.font_size,
            border: true,
            zero_lines: true,
            drawable: None,
        };
        frame.update_plot_rect();
        Ok(frame)
    }

    /// The rectangle assigned to the frame
    pub fn outer_rect(&self) -> PixelRect {
        self.outer
    }

    /// The rectangle where data is drawn
    pub fn plot_rect(&self) -> PixelRect {
        self.plot
    }

    /// Distance between two text lines, in pixels
    pub fn baseline_skip(&self) -> i32 {
        self.baseline_skip
    }

    /// The axis designated by `id`
    pub fn axis(&self, id: AxisId) -> &Axis {
        match id {
            AxisId::X => &self.x,
            AxisId::Y => &self.y,
            AxisId::Y2 => &self.y2,
        }
    }

    fn axis_mut(&mut self, id: AxisId) -> &mut Axis {
        match id {
            AxisId::X => &mut self.x,
            AxisId::Y => &mut self.y,
            AxisId::Y2 => &mut self.y2,
        }
    }

    /// The horizontal axis
    pub fn x_axis(&self) -> &Axis {
        &self.x
    }

    /// The primary vertical axis
    pub fn y_axis(&self) -> &Axis {
        &self.y
    }

    /// The secondary vertical axis
    pub fn y2_axis(&self) -> &Axis {
        &self.y2
    }

    /// The title, if one is set
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The label font
    pub fn font(&self) -> &text::Font {
        &self.font
    }

    /// The label font size, in points
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Whether the plot border is drawn
    pub fn has_border(&self) -> bool {
        self.border
    }

    /// Whether lines are drawn at zero when a range straddles it
    pub fn has_zero_lines(&self) -> bool {
        self.zero_lines
    }

    /// Whether a drawable is set
    pub fn has_drawable(&self) -> bool {
        self.drawable.is_some()
    }

    pub(crate) fn text_style(&self) -> TextStyle<'_> {
        TextStyle {
            font: &self.font,
            size: self.font_size,
        }
    }

    /// Assign the outer rectangle and recompute the plot rectangle
    pub fn resize(&mut self, ox: i32, oy: i32, width: i32, height: i32) {
        self.outer = PixelRect::new(ox, oy, width, height);
        self.update_plot_rect();
    }

    /// Set the range of the axis `id`.
    /// Fails unless `min < max` and both are finite, leaving the axis unchanged.
    pub fn set_range(&mut self, id: AxisId, min: f64, max: f64) -> Result<(), Error> {
        self.axis_mut(id).set_range(min, max)
    }

    /// Set the range of the horizontal axis
    pub fn set_x_range(&mut self, min: f64, max: f64) -> Result<(), Error> {
        self.set_range(AxisId::X, min, max)
    }

    /// Set the range of the primary vertical axis
    pub fn set_y_range(&mut self, min: f64, max: f64) -> Result<(), Error> {
        self.set_range(AxisId::Y, min, max)
    }

    /// Set the range of the secondary vertical axis
    pub fn set_y2_range(&mut self, min: f64, max: f64) -> Result<(), Error> {
        self.set_range(AxisId::Y2, min, max)
    }

    /// Set the desired number of tic intervals of the axis `id`
    pub fn set_tics_num(&mut self, id: AxisId, tics_num: u32) -> Result<(), Error> {
        self.axis_mut(id).set_tics_num(tics_num)
    }

    /// Set the label of the axis `id`. An empty text removes it.
    pub fn set_label(&mut self, id: AxisId, label: &str) {
        self.axis_mut(id).set_label(label);
        self.update_plot_rect();
    }

    /// Set the label of the horizontal axis
    pub fn set_x_label(&mut self, label: &str) {
        self.set_label(AxisId::X, label);
    }

    /// Set the label of the primary vertical axis
    pub fn set_y_label(&mut self, label: &str) {
        self.set_label(AxisId::Y, label);
    }

    /// Set the label of the secondary vertical axis
    pub fn set_y2_label(&mut self, label: &str) {
        self.set_label(AxisId::Y2, label);
    }

    /// Enable or disable the tics of the axis `id`
    pub fn set_tics(&mut self, id: AxisId, tics: bool) {
        self.axis_mut(id).set_tics(tics);
        self.update_plot_rect();
    }

    /// Enable or disable the horizontal axis tics
    pub fn set_x_tics(&mut self, tics: bool) {
        self.set_tics(AxisId::X, tics);
    }

    /// Enable or disable the primary vertical axis tics
    pub fn set_y_tics(&mut self, tics: bool) {
        self.set_tics(AxisId::Y, tics);
    }

    /// Enable or disable the secondary vertical axis tics
    pub fn set_y2_tics(&mut self, tics: bool) {
        self.set_tics(AxisId::Y2, tics);
    }

    /// Enable or disable the grid lines of the axis `id`
    pub fn set_grid(&mut self, id: AxisId, grid: bool) {
        self.axis_mut(id).set_grid(grid);
    }

    /// Enable or disable vertical grid lines at the X tics
    pub fn set_x_grid(&mut self, grid: bool) {
        self.set_grid(AxisId::X, grid);
    }

    /// Enable or disable horizontal grid lines at the Y tics
    pub fn set_y_grid(&mut self, grid: bool) {
        self.set_grid(AxisId::Y, grid);
    }

    /// Enable or disable horizontal grid lines at the Y2 tics
    pub fn set_y2_grid(&mut self, grid: bool) {
        self.set_grid(AxisId::Y2, grid);
    }

    /// Set the title. An empty text removes it.
    pub fn set_title(&mut self, title: &str) {
        self.title = axis::truncate_label(title);
        self.update_plot_rect();
    }

    /// Set the label font family list and size in points
    pub fn set_font(&mut self, families: &str, font_size: f32) -> Result<(), Error> {
        check_font_size(font_size)?;
        self.font = text::Font::new(families);
        self.set_font_size(font_size)
    }

    /// Set the label font size in points
    pub fn set_font_size(&mut self, font_size: f32) -> Result<(), Error> {
        check_font_size(font_size)?;
        self.font_size = font_size;
        self.baseline_skip = config::baseline_skip(font_size);
        self.update_plot_rect();
        Ok(())
    }

    /// Enable or disable the plot border
    pub fn set_border(&mut self, border: bool) {
        self.border = border;
    }

    /// Enable or disable the zero lines
    pub fn set_zero_lines(&mut self, zero_lines: bool) {
        self.zero_lines = zero_lines;
    }

    /// Set the drawable, replacing the previous one
    pub fn set_drawable<D>(&mut self, drawable: D)
    where
        D: Drawable + 'static,
    {
        self.drawable = Some(Box::new(drawable));
    }

    /// Remove the drawable
    pub fn clear_drawable(&mut self) {
        self.drawable = None;
    }

    /// Map `value` on the axis `id` to a pixel coordinate.
    /// Y axes are inverted: their maximum is at the top of the plot rectangle.
    pub fn coord(&self, id: AxisId, value: f64) -> Option<i32> {
        let axis = self.axis(id);
        if id.is_vertical() {
            scale::value_to_pixel(axis, value, self.plot.y(), self.plot.height(), true)
        } else {
            scale::value_to_pixel(axis, value, self.plot.x(), self.plot.width(), false)
        }
    }

    /// Map an X value to a pixel column
    pub fn x_coord(&self, value: f64) -> Option<i32> {
        self.coord(AxisId::X, value)
    }

    /// Map a Y value to a pixel row
    pub fn y_coord(&self, value: f64) -> Option<i32> {
        self.coord(AxisId::Y, value)
    }

    /// Map a Y2 value to a pixel row
    pub fn y2_coord(&self, value: f64) -> Option<i32> {
        self.coord(AxisId::Y2, value)
    }

    /// Map a data point to a canvas point, using `y_axis` for the vertical coordinate
    pub fn point(&self, x: f64, y: f64, y_axis: AxisId) -> Option<Point> {
        let px = self.x_coord(x)?;
        let py = self.coord(y_axis, y)?;
        Some(Point::from_xy(px as f32, py as f32))
    }

    /// Draw the frame: grids, tics and labels of the three axes, then border,
    /// zero lines and title, then the drawable, clipped to the plot rectangle.
    ///
    /// A failing drawable is logged and does not interrupt the drawing.
    pub fn draw(&self, painter: &mut Painter<'_>) {
        log::trace!("Drawing frame {:?}", self.outer);

        for id in [AxisId::X, AxisId::Y, AxisId::Y2] {
            let axis = self.axis(id);
            if axis.has_grid() {
                self.draw_grid(painter, id);
            }
            if axis.has_tics() {
                self.draw_tics(painter, id);
            }
            if axis.has_label() {
                self.draw_label(painter, id);
            }
        }
        if self.border {
            self.draw_border(painter);
        } else if self.zero_lines {
            self.draw_zero_lines(painter);
        }
        if self.title.is_some() {
            self.draw_title(painter);
        }

        if let Some(drawable) = &self.drawable {
            painter.reset_pen();
            painter.push_clip(self.plot);
            if let Err(err) = drawable.draw(self, painter) {
                log::warn!("Drawable failed in frame {:?}: {}", self.outer, err);
            }
            painter.pop_clip();
        }
    }

    fn update_plot_rect(&mut self) {
        let bs = self.baseline_skip;
        let half = bs / 2;
        let tics_band = bs + half;

        let mut left = half;
        if self.y.has_tics() {
            left += tics_band;
        }
        if self.y.has_label() {
            left += bs;
        }

        let mut right = half;
        if self.y2.has_tics() {
            right += tics_band;
        }
        if self.y2.has_label() {
            right += bs;
        }

        let mut top = half;
        if self.title.is_some() {
            top += bs;
        }

        let mut bottom = half;
        if self.x.has_tics() {
            bottom += bs;
        }
        if self.x.has_label() {
            bottom += bs;
        }

        self.plot = self.outer.pad(top, right, bottom, left);
    }
}
