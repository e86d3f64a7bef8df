#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
/*!
 * # ticplot
 * _frames, tics and grids_. A small plotting library written in Rust
 *
 * A [`Canvas`] holds a grid of [`Frame`]s. Each frame owns three axes
 * (X, Y and secondary Y), maps data coordinates to pixels, and draws
 * its own tics, grids, labels, border and title, before handing the plot
 * area to a user supplied [`Drawable`].
 *
 * ## Get started
 *
 * ```no_run
 * use ticplot::{Canvas, Frame, Painter};
 * use ticplot_svg::SvgFile;
 *
 * let target = SvgFile::create("sine.svg", 640, 480).unwrap();
 * let mut canvas = Canvas::open(target).unwrap();
 *
 * let frame = canvas.last_frame_mut();
 * frame.set_title("sine");
 * frame.set_x_range(-std::f64::consts::PI, std::f64::consts::PI).unwrap();
 * frame.set_y_range(-1.2, 1.2).unwrap();
 * frame.set_x_grid(true);
 * frame.set_y_grid(true);
 * frame.set_drawable(|frame: &Frame, painter: &mut Painter<'_>| {
 *     frame.plot_function(painter, f64::sin, 200)
 * });
 *
 * canvas.draw().unwrap();
 * canvas.close().unwrap();
 * ```
 *
 * ## Crates
 *
 * Rendering surfaces implement [`render::Surface`] and live in separate crates,
 * together with the matching [`canvas::Target`]s:
 *  - `ticplot-svg`: SVG files
 *  - `ticplot-pxl`: PNG files and in-memory pixmaps, as well as a TeX label rasterizer
 *  - `ticplot-window`: an interactive window
 *
 * Text reaches the surfaces as paths, shaped by `ticplot-text`.
 * Labels containing a `$` are handed to the [`label::LabelRasterizer`] installed
 * on the canvas, if any.
 */
// ticplot is released under the MIT License with the following copyright:
// Copyright (c) 2025-2026 Rémi Thebault

use std::{collections, fmt};

pub mod axis;
pub mod canvas;
pub mod config;
pub mod drawable;
pub mod frame;
pub mod label;
pub mod layout;
pub mod painter;
pub mod render;
pub mod scale;
pub mod style;
pub mod ticks;

pub use axis::Axis;
pub use canvas::{Canvas, Target};
pub use config::Config;
pub use drawable::Drawable;
pub use frame::{AxisId, Frame};
pub use layout::{FrameId, Layout};
pub use painter::Painter;
pub use style::Style;

/// Re-exports of [`ticplot_base::color`] items
pub mod color {
    pub use ticplot_base::color::*;
}
pub use color::ColorU8;

/// Re-exports of [`ticplot_base::geom`] items
pub mod geom {
    pub use ticplot_base::geom::*;
}

/// Re-exports of [`ticplot_text`] items
pub mod text {
    pub use ticplot_text::*;
}
pub use text::fontdb;

/// Errors reported by frames, layouts and canvases
#[derive(Debug)]
pub enum Error {
    /// An axis range that is not finite or where `min >= max`
    InvalidRange {
        /// Requested lower bound
        min: f64,
        /// Requested upper bound
        max: f64,
    },
    /// A tic count of zero or above [`style::defaults::MAX_TICS_NUM`]
    InvalidTicsNum(u32),
    /// A font size that is not strictly positive
    InvalidFontSize(f32),
    /// A negative canvas padding
    InvalidPadding(i32),
    /// No data sample was provided
    EmptyData,
    /// X and Y data have different lengths
    LengthMismatch {
        /// Length of the X data
        x: usize,
        /// Length of the Y data
        y: usize,
    },
    /// Less than 2 samples requested for a function plot
    InvalidSampleCount(usize),
    /// Memory for a frame or for sampling buffers could not be reserved
    Alloc(collections::TryReserveError),
    /// Error raised by the output target
    Target(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidRange { min, max } => write!(f, "Invalid axis range: [{}, {}]", min, max),
            Error::InvalidTicsNum(n) => write!(
                f,
                "Invalid number of tics: {} (must be in 1..={})",
                n,
                style::defaults::MAX_TICS_NUM
            ),
            Error::InvalidFontSize(size) => write!(f, "Invalid font size: {}", size),
            Error::InvalidPadding(padding) => write!(f, "Invalid canvas padding: {}", padding),
            Error::EmptyData => write!(f, "No data sample provided"),
            Error::LengthMismatch { x, y } => {
                write!(f, "Data length mismatch: {} X samples, {} Y samples", x, y)
            }
            Error::InvalidSampleCount(n) => {
                write!(f, "At least 2 samples are needed to plot a function, got {}", n)
            }
            Error::Alloc(err) => write!(f, "Allocation failure: {}", err),
            Error::Target(err) => write!(f, "Target error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Alloc(err) => Some(err),
            Error::Target(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<collections::TryReserveError> for Error {
    fn from(err: collections::TryReserveError) -> Self {
        Error::Alloc(err)
    }
}

impl Error {
    /// Wrap an error raised by an output target
    pub fn target<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Target(Box::new(err))
    }
}
