//! Labels typeset outside of the library.
//!
//! Labels and titles containing [`MATH_DELIMITER`] are considered mathematical
//! notation. When a [`LabelRasterizer`] is installed on the canvas, such labels
//! are rasterized by it and drawn as images. Otherwise they are drawn as plain text.

use std::{fmt, io};

use crate::render::ImageData;

/// Character delimiting mathematical notation in labels
pub const MATH_DELIMITER: char = '$';

/// Check whether a label contains mathematical notation
pub fn is_math(text: &str) -> bool {
    text.contains(MATH_DELIMITER)
}

/// Turns a label into an image.
///
/// The image is scaled by the frame so that its height matches the
/// baseline skip of the frame font. Its transparent pixels let the
/// background show through.
pub trait LabelRasterizer {
    /// Rasterize `text`
    fn rasterize(&self, text: &str) -> Result<ImageData, RasterizeError>;
}

impl<F> LabelRasterizer for F
where
    F: Fn(&str) -> Result<ImageData, RasterizeError>,
{
    fn rasterize(&self, text: &str) -> Result<ImageData, RasterizeError> {
        self(text)
    }
}

/// Failure to rasterize a label
#[derive(Debug)]
pub enum RasterizeError {
    /// I/O error, including failure to start an external tool
    Io(io::Error),
    /// An external tool exited with an error
    Tool {
        /// Name of the tool
        tool: String,
        /// Exit status, if the tool was not killed by a signal
        status: Option<i32>,
        /// What the tool printed on its error output
        stderr: String,
    },
    /// The produced image could not be decoded
    Decode(String),
}

impl fmt::Display for RasterizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterizeError::Io(err) => write!(f, "I/O error: {}", err),
            RasterizeError::Tool {
                tool,
                status: Some(status),
                stderr,
            } => write!(f, "{} exited with status {}: {}", tool, status, stderr.trim()),
            RasterizeError::Tool { tool, stderr, .. } => {
                write!(f, "{} was terminated: {}", tool, stderr.trim())
            }
            RasterizeError::Decode(msg) => write!(f, "Could not decode label image: {}", msg),
        }
    }
}

impl std::error::Error for RasterizeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RasterizeError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for RasterizeError {
    fn from(err: io::Error) -> Self {
        RasterizeError::Io(err)
    }
}
