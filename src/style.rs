//! Colors and line widths used to draw frames.
pub mod defaults;

use crate::ColorU8;
use crate::color;

/// Colors and line widths of the frame decorations.
///
/// Data drawn by a [`crate::Drawable`] starts with the foreground color and
/// [`Style::line_width`], and is free to change them through the [`crate::Painter`].
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    /// Color filling the canvas on clear
    pub background: ColorU8,
    /// Color of the border, tics, labels and title
    pub foreground: ColorU8,
    /// Color of the grid lines
    pub grid_color: ColorU8,
    /// Width of the plot border
    pub border_width: f32,
    /// Width of the zero axis lines
    pub axis_width: f32,
    /// Width of the tic marks
    pub tics_width: f32,
    /// Width of the grid lines
    pub grid_width: f32,
    /// Dash pattern of the grid lines, in pixels
    pub grid_dash: [f32; 2],
    /// Initial pen width handed to drawables
    pub line_width: f32,
}

impl Style {
    /// Black on white
    pub fn light() -> Self {
        Style {
            background: color::WHITE,
            foreground: color::BLACK,
            grid_color: color::BLACK,
            border_width: defaults::BORDER_LINE_WIDTH,
            axis_width: defaults::AXIS_LINE_WIDTH,
            tics_width: defaults::TICS_LINE_WIDTH,
            grid_width: defaults::GRID_LINE_WIDTH,
            grid_dash: defaults::GRID_DASH,
            line_width: defaults::DATA_LINE_WIDTH,
        }
    }

    /// Light gray on a dark background
    pub fn dark() -> Self {
        Style {
            background: ColorU8::from_html(b"#1e1e2e"),
            foreground: ColorU8::from_html(b"#cdd6f4"),
            grid_color: ColorU8::from_html(b"#6c7086"),
            ..Style::light()
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Style::light()
    }
}
