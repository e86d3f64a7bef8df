//! Base primitives shared by the ticplot crates.
//!
//! [`geom`] holds sizes, float and pixel rectangles, as well as the path and
//! transform types re-exported from tiny-skia-path.
//! [`color`] holds the 8 bit RGBA color type.

pub mod color;
pub mod geom;

pub use color::ColorU8;
