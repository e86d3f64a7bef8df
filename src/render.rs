//! Abstraction over the rendering surfaces: vector files, pixmaps, or windows.
//!
//! All rendering surfaces implement the [`Surface`] trait.
//! See the `ticplot-pxl` and `ticplot-svg` crates for implementations.

use crate::{ColorU8, geom};

/// Rendering surface API
pub trait Surface {
    /// Prepare the surface for drawing, with the given size in pixels
    fn prepare(&mut self, size: geom::Size);

    /// Fill the entire surface with the given fill pattern
    fn fill(&mut self, fill: Paint);

    /// Draw a rectangle
    ///
    /// Default implementation converts the rectangle to a path and call [`draw_path`](Surface::draw_path)
    fn draw_rect(&mut self, rect: &Rect) {
        let Some(path) = rect.rect.to_path() else {
            return;
        };
        let rpath = self::Path {
            path: &path,
            fill: rect.fill,
            stroke: rect.stroke,
            transform: rect.transform,
        };
        self.draw_path(&rpath);
    }

    /// Draw a path
    fn draw_path(&mut self, path: &Path);

    /// Draw an RGBA image, scaled to fit its destination rectangle
    fn draw_image(&mut self, image: &Image);

    /// Push a clipping rect.
    /// Subsequent draw operations will be clipped to this rect,
    /// until a matching [`pop_clip`](Surface::pop_clip) is called
    fn push_clip(&mut self, clip: &Clip);

    /// Pop a clipping rect that was pushed previously with [`push_clip`](Surface::push_clip)
    fn pop_clip(&mut self);
}

/// Paint pattern, used for fill operations
#[derive(Debug, Clone, Copy)]
pub enum Paint {
    /// Solid color fill
    Solid(ColorU8),
}

impl From<ColorU8> for Paint {
    fn from(value: ColorU8) -> Self {
        Paint::Solid(value)
    }
}

/// Line pattern defines how the line is drawn
#[derive(Debug, Clone, Copy, Default)]
pub enum LinePattern<'a> {
    /// Solid line
    #[default]
    Solid,
    /// Dashed line. The pattern is relative to the line width.
    Dash(&'a [f32]),
}

/// Stroke style definition
#[derive(Debug, Clone, Copy)]
pub struct Stroke<'a> {
    /// Line color
    pub color: ColorU8,
    /// Line width in pixels
    pub width: f32,
    /// Line pattern
    pub pattern: LinePattern<'a>,
}

/// Rectangle to draw
#[derive(Debug, Clone)]
pub struct Rect<'a> {
    /// Rectangle geometry
    pub rect: geom::Rect,
    /// Fill style
    pub fill: Option<Paint>,
    /// Stroke style
    pub stroke: Option<Stroke<'a>>,
    /// Optional transform to apply to the rectangle
    pub transform: Option<&'a geom::Transform>,
}

/// Path to draw
#[derive(Debug, Clone)]
pub struct Path<'a> {
    /// Path geometry
    pub path: &'a geom::Path,
    /// Fill style
    pub fill: Option<Paint>,
    /// Stroke style
    pub stroke: Option<Stroke<'a>>,
    /// Optional transform to apply to the path
    pub transform: Option<&'a geom::Transform>,
}

/// Image to draw
#[derive(Debug, Clone)]
pub struct Image<'a> {
    /// Pixel data
    pub image: &'a ImageData,
    /// Destination rectangle, before the transform
    pub rect: &'a geom::Rect,
    /// Optional transform to apply to the destination rectangle
    pub transform: Option<&'a geom::Transform>,
}

/// Clipping rectangle
#[derive(Debug, Clone)]
pub struct Clip<'a> {
    /// Clipping rectangle
    pub rect: &'a geom::Rect,
    /// Optional transform to apply to the clipping rectangle
    pub transform: Option<&'a geom::Transform>,
}

/// An owned RGBA image, with straight (non-premultiplied) alpha
#[derive(Clone, PartialEq, Eq)]
pub struct ImageData {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl std::fmt::Debug for ImageData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageData")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}

impl ImageData {
    /// Build an image from its pixel rows.
    ///
    /// Returns `None` if the image is empty or if `rgba` does not hold
    /// exactly `width * height` pixels.
    pub fn new(width: u32, height: u32, rgba: Vec<u8>) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }
        let len = (width as usize)
            .checked_mul(height as usize)?
            .checked_mul(4)?;
        if rgba.len() != len {
            return None;
        }
        Some(ImageData {
            width,
            height,
            rgba,
        })
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel data, 4 bytes per pixel, row after row
    pub fn rgba(&self) -> &[u8] {
        &self.rgba
    }

    /// Color of the pixel at `(x, y)`
    pub fn pixel(&self, x: u32, y: u32) -> Option<ColorU8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = 4 * (y as usize * self.width as usize + x as usize);
        let p = &self.rgba[i..i + 4];
        Some(ColorU8::from_rgba(p[0], p[1], p[2], p[3]))
    }

    /// Consume the image and return its pixel data
    pub fn into_rgba(self) -> Vec<u8> {
        self.rgba
    }
}
