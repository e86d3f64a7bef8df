//! Raster rendering for ticplot, backed by tiny-skia.
//!
//! [`PxlSurface`] rasterizes into a pixmap. It backs the [`PngFile`] and
//! [`PixmapTarget`] canvas targets, as well as the window target of `ticplot-window`.
//! With the `tex` feature, [`TexRasterizer`] renders math labels with a TeX installation.
use std::path::{Path, PathBuf};
use std::{fmt, fs, io};

use ticplot::render::{self, ImageData, Surface};
use ticplot::{ColorU8, Target, geom, style};
use tiny_skia::{self, FillRule, Mask, Pixmap, PixmapMut};

#[cfg(feature = "tex")]
mod tex;

#[cfg(feature = "tex")]
pub use tex::TexRasterizer;

/// Errors raised by the raster targets
#[derive(Debug)]
pub enum Error {
    /// A pixmap of this size cannot be allocated
    InvalidSize {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },
    /// The PNG file could not be written
    Io(io::Error),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSize { width, height } => {
                write!(f, "Invalid pixmap size: {}x{}", width, height)
            }
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::InvalidSize { .. } => None,
        }
    }
}

/// A surface rasterizing into an owned pixmap
#[derive(Debug, Clone)]
pub struct PxlSurface {
    pixmap: Pixmap,
    state: State,
}

impl PxlSurface {
    /// Allocate a transparent surface of the given size
    pub fn new(width: u32, height: u32) -> Result<Self, Error> {
        let pixmap = Pixmap::new(width, height).ok_or(Error::InvalidSize { width, height })?;
        let state = State::new(width, height);
        Ok(Self { pixmap, state })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// The rendered pixels, with premultiplied alpha
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    pub fn into_pixmap(self) -> Pixmap {
        self.pixmap
    }

    /// Color of the pixel at `(x, y)`, with straight alpha
    pub fn pixel(&self, x: u32, y: u32) -> Option<ColorU8> {
        pixmap_pixel(&self.pixmap, x, y)
    }

    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        self.pixmap.save_png(path).map_err(io::Error::from)?;
        Ok(())
    }

    /// Clear to transparent and drop all clips
    fn reset(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
        self.state = State::new(self.width(), self.height());
    }
}

/// Color of the pixel at `(x, y)` of `pixmap`, with straight alpha
pub fn pixmap_pixel(pixmap: &Pixmap, x: u32, y: u32) -> Option<ColorU8> {
    let c = pixmap.pixel(x, y)?.demultiply();
    Some(ColorU8::from_rgba(c.red(), c.green(), c.blue(), c.alpha()))
}

#[derive(Debug, Clone)]
struct State {
    width: u32,
    height: u32,
    transform: geom::Transform,
    // one entry per pushed clip, `None` if the mask could not be allocated
    clips: Vec<Option<Mask>>,
}

impl State {
    fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            transform: geom::Transform::identity(),
            clips: Vec::new(),
        }
    }

    fn clip(&self) -> Option<&Mask> {
        self.clips.last().and_then(Option::as_ref)
    }

    fn prepare(&mut self, size: geom::Size) {
        let sx = self.width as f32 / size.width();
        let sy = self.height as f32 / size.height();
        self.transform = geom::Transform::from_scale(sx, sy);
        if !self.clips.is_empty() {
            log::warn!("{} clips still pushed at the start of a page", self.clips.len());
            self.clips.clear();
        }
    }

    fn fill(&mut self, px: &mut PixmapMut<'_>, fill: render::Paint) {
        match fill {
            render::Paint::Solid(color) => {
                let color = ts_color(color);
                px.fill(color);
            }
        }
    }

    fn full_transform(&self, transform: Option<&geom::Transform>) -> geom::Transform {
        transform
            .map(|t| t.post_concat(self.transform))
            .unwrap_or(self.transform)
    }

    fn draw_path(&mut self, px: &mut PixmapMut<'_>, path: &render::Path) {
        let transform = self.full_transform(path.transform);

        if let Some(fill) = path.fill {
            let mut paint = tiny_skia::Paint::default();
            ts_fill(fill, &mut paint);

            px.fill_path(path.path, &paint, FillRule::Winding, transform, self.clip());
        }
        if let Some(stroke) = path.stroke {
            let mut paint = tiny_skia::Paint::default();
            let stroke = ts_stroke(stroke, &mut paint);
            px.stroke_path(path.path, &paint, &stroke, transform, self.clip());
        }
    }

    fn draw_image(&mut self, px: &mut PixmapMut<'_>, image: &render::Image) {
        let data = image.image;
        let Some(src) = image_pixmap(data) else {
            log::warn!("Could not allocate a {}x{} image", data.width(), data.height());
            return;
        };
        let rect = image.rect;
        let placement = geom::Transform::from_row(
            rect.width() / data.width() as f32,
            0.0,
            0.0,
            rect.height() / data.height() as f32,
            rect.x(),
            rect.y(),
        );
        let transform = placement.post_concat(self.full_transform(image.transform));
        let paint = tiny_skia::PixmapPaint {
            quality: tiny_skia::FilterQuality::Bicubic,
            ..Default::default()
        };
        px.draw_pixmap(0, 0, src.as_ref(), &paint, transform, self.clip());
    }

    fn push_clip(&mut self, clip: &render::Clip) {
        let transform = self.full_transform(clip.transform);
        let path = clip.rect.to_path();
        let mask = match (self.clips.last(), path) {
            // nested clips intersect with the enclosing one
            (Some(Some(outer)), Some(path)) => {
                let mut mask = outer.clone();
                mask.intersect_path(&path, FillRule::Winding, true, transform);
                Some(mask)
            }
            (Some(Some(_)), None) | (None, None) => Mask::new(self.width, self.height),
            (Some(None), _) => None,
            (None, Some(path)) => Mask::new(self.width, self.height).map(|mut mask| {
                mask.fill_path(&path, FillRule::Winding, true, transform);
                mask
            }),
        };
        if mask.is_none() {
            log::warn!("Clip ignored: no mask of {}x{}", self.width, self.height);
        }
        self.clips.push(mask);
    }

    fn pop_clip(&mut self) {
        if self.clips.pop().is_none() {
            log::error!("pop_clip called without a matching push_clip");
        }
    }
}

impl Surface for PxlSurface {
    fn prepare(&mut self, size: geom::Size) {
        self.state.prepare(size)
    }

    fn fill(&mut self, fill: render::Paint) {
        let mut px = self.pixmap.as_mut();
        self.state.fill(&mut px, fill)
    }

    fn draw_path(&mut self, path: &render::Path) {
        let mut px = self.pixmap.as_mut();
        self.state.draw_path(&mut px, path)
    }

    fn draw_image(&mut self, image: &render::Image) {
        let mut px = self.pixmap.as_mut();
        self.state.draw_image(&mut px, image)
    }

    fn push_clip(&mut self, clip: &render::Clip) {
        self.state.push_clip(clip)
    }

    fn pop_clip(&mut self) {
        self.state.pop_clip()
    }
}

/// A canvas target writing a PNG file.
///
/// Each shown page overwrites the file.
/// Closing the target writes the file if no page was shown.
#[derive(Debug)]
pub struct PngFile {
    path: PathBuf,
    surface: PxlSurface,
    pages: usize,
}

impl PngFile {
    /// Create the file at `path` for a canvas of the given size
    pub fn create<P: AsRef<Path>>(path: P, width: u32, height: u32) -> Result<Self, Error> {
        let surface = PxlSurface::new(width, height)?;
        let path = path.as_ref().to_path_buf();
        fs::File::create(&path)?;
        Ok(PngFile {
            path,
            surface,
            pages: 0,
        })
    }

    /// Create the file at `path` with the default canvas size
    pub fn create_default<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        PngFile::create(
            path,
            style::defaults::CANVAS_WIDTH,
            style::defaults::CANVAS_HEIGHT,
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of pages written so far
    pub fn pages(&self) -> usize {
        self.pages
    }
}

impl Target for PngFile {
    type Surface = PxlSurface;
    type Error = Error;

    fn size(&self) -> (u32, u32) {
        (self.surface.width(), self.surface.height())
    }

    fn surface(&mut self) -> &mut PxlSurface {
        &mut self.surface
    }

    fn show_page(&mut self) -> Result<(), Error> {
        self.surface.save_png(&self.path)?;
        self.pages += 1;
        log::debug!("Wrote page {} to {}", self.pages, self.path.display());
        self.surface.reset();
        Ok(())
    }

    fn close(self) -> Result<(), Error> {
        if self.pages == 0 {
            self.surface.save_png(&self.path)?;
        }
        Ok(())
    }
}

/// A canvas target keeping the shown pages in memory
#[derive(Debug)]
pub struct PixmapTarget {
    surface: PxlSurface,
    pages: Vec<Pixmap>,
}

impl PixmapTarget {
    pub fn new(width: u32, height: u32) -> Result<Self, Error> {
        Ok(PixmapTarget {
            surface: PxlSurface::new(width, height)?,
            pages: Vec::new(),
        })
    }

    /// The pages shown so far, oldest first
    pub fn pages(&self) -> &[Pixmap] {
        &self.pages
    }

    /// The most recently shown page
    pub fn last_page(&self) -> Option<&Pixmap> {
        self.pages.last()
    }

    pub fn into_pages(self) -> Vec<Pixmap> {
        self.pages
    }
}

impl Target for PixmapTarget {
    type Surface = PxlSurface;
    type Error = Error;

    fn size(&self) -> (u32, u32) {
        (self.surface.width(), self.surface.height())
    }

    fn surface(&mut self) -> &mut PxlSurface {
        &mut self.surface
    }

    fn show_page(&mut self) -> Result<(), Error> {
        self.pages.push(self.surface.pixmap().clone());
        self.surface.reset();
        Ok(())
    }

    fn close(self) -> Result<(), Error> {
        Ok(())
    }
}

/// Premultiply `image` into a pixmap
fn image_pixmap(image: &ImageData) -> Option<Pixmap> {
    let mut pixmap = Pixmap::new(image.width(), image.height())?;
    for (dst, src) in pixmap
        .pixels_mut()
        .iter_mut()
        .zip(image.rgba().chunks_exact(4))
    {
        *dst = tiny_skia::ColorU8::from_rgba(src[0], src[1], src[2], src[3]).premultiply();
    }
    Some(pixmap)
}

fn ts_color(color: ColorU8) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.red(), color.green(), color.blue(), color.alpha())
}

fn ts_fill(fill: render::Paint, paint: &mut tiny_skia::Paint) {
    match fill {
        render::Paint::Solid(color) => {
            let color = ts_color(color);
            paint.set_color(color);
        }
    }
    paint.force_hq_pipeline = true;
}

fn ts_stroke(stroke: render::Stroke, paint: &mut tiny_skia::Paint) -> tiny_skia::Stroke {
    paint.force_hq_pipeline = true;

    let color = ts_color(stroke.color);
    paint.set_color(color);

    let mut ts = tiny_skia::Stroke {
        width: stroke.width,
        ..Default::default()
    };

    match stroke.pattern {
        render::LinePattern::Solid => (),
        render::LinePattern::Dash(dash) => {
            let array = dash.iter().map(|d| d * stroke.width).collect();
            ts.dash = tiny_skia::StrokeDash::new(array, 0.0);
        }
    }
    ts
}
