//! Defaults applied to newly created frames and to the canvas layout

use crate::style::{Style, defaults};
use crate::{Axis, Error, text};

/// Values used to initialize frames and to lay them out.
///
/// Each canvas owns its configuration, so canvases with different
/// defaults can coexist.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Label font
    pub font: text::Font,
    /// Label font size, in points
    pub font_size: f32,
    /// Initial range of the three axes
    pub range: (f64, f64),
    /// Initial number of tic intervals
    pub tics_num: u32,
    /// Space between the canvas edges and the frame grid, in pixels
    pub padding: i32,
    /// Decoration colors and line widths
    pub style: Style,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            font: text::Font::new(defaults::FONT_FAMILY),
            font_size: defaults::FONT_SIZE,
            range: defaults::RANGE,
            tics_num: defaults::TICS_NUM,
            padding: defaults::CANVAS_PADDING,
            style: Style::default(),
        }
    }
}

impl Config {
    /// Copy of the config with another font family list
    pub fn with_font_family(self, families: &str) -> Self {
        Config {
            font: text::Font::new(families),
            ..self
        }
    }

    /// Copy of the config with another font size, in points
    pub fn with_font_size(self, font_size: f32) -> Self {
        Config { font_size, ..self }
    }

    /// Copy of the config with another initial range
    pub fn with_range(self, min: f64, max: f64) -> Self {
        Config {
            range: (min, max),
            ..self
        }
    }

    /// Copy of the config with another canvas padding
    pub fn with_padding(self, padding: i32) -> Self {
        Config { padding, ..self }
    }

    /// Copy of the config with another style
    pub fn with_style(self, style: Style) -> Self {
        Config { style, ..self }
    }

    /// Check that frames can be built from this config
    pub fn validate(&self) -> Result<(), Error> {
        check_font_size(self.font_size)?;
        if self.padding < 0 {
            return Err(Error::InvalidPadding(self.padding));
        }
        self.axis()?;
        Ok(())
    }

    pub(crate) fn axis(&self) -> Result<Axis, Error> {
        Axis::new(self.range.0, self.range.1, self.tics_num)
    }
}

pub(crate) fn check_font_size(font_size: f32) -> Result<(), Error> {
    if font_size.is_finite() && font_size > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidFontSize(font_size))
    }
}

/// Distance between two text lines for a font size in points:
/// the pixel size rounded up, plus [`defaults::BASELINE_MARGIN`].
pub fn baseline_skip(font_size: f32) -> i32 {
    pt_to_px(font_size).ceil() as i32 + defaults::BASELINE_MARGIN
}

/// Convert a font size from points to pixels at [`defaults::DPI`]
pub fn pt_to_px(font_size: f32) -> f32 {
    font_size * defaults::DPI / 72.0
}
