//! Canvas: a grid of frames drawn on an output target

use std::sync::{Arc, OnceLock};

use crate::geom::Size;
use crate::label::LabelRasterizer;
use crate::layout::{FrameId, Layout};
use crate::render::Surface;
use crate::{Config, Error, Frame, Painter, fontdb, text};

/// An output target: a window, a file, or a pixmap in memory.
///
/// The target owns the rendering surface. Each draw pass prepares the
/// surface, draws into it, then calls [`Target::show_page`].
pub trait Target {
    /// The surface drawn into
    type Surface: Surface;
    /// Error raised when a page is shown or when the target is closed
    type Error: std::error::Error + Send + Sync + 'static;

    /// Size of the target in pixels
    fn size(&self) -> (u32, u32);

    /// The surface to draw into
    fn surface(&mut self) -> &mut Self::Surface;

    /// Finalize the current page: present it in a window, write it to a file...
    fn show_page(&mut self) -> Result<(), Self::Error>;

    /// Release the target
    fn close(self) -> Result<(), Self::Error>
    where
        Self: Sized;
}

/// The font database loaded from the system fonts, shared by all canvases
pub fn shared_font_db() -> Arc<fontdb::Database> {
    static DB: OnceLock<Arc<fontdb::Database>> = OnceLock::new();
    DB.get_or_init(|| Arc::new(text::system_font_db())).clone()
}

/// Frames laid out on an output target.
///
/// A canvas starts with a single frame filling it. Frames are added with
/// [`Canvas::add_row_frame`] and [`Canvas::add_col_frame`], and the grid grows
/// to hold them.
pub struct Canvas<T: Target> {
    target: T,
    layout: Layout,
    fontdb: Arc<fontdb::Database>,
    rasterizer: Option<Box<dyn LabelRasterizer>>,
}

impl<T: Target> std::fmt::Debug for Canvas<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Canvas")
            .field("layout", &self.layout)
            .field("rasterizer", &self.rasterizer.is_some())
            .finish_non_exhaustive()
    }
}

impl<T: Target> Canvas<T> {
    /// Open a canvas on `target` with the default configuration and the system fonts
    pub fn open(target: T) -> Result<Self, Error> {
        Canvas::open_with(target, Config::default(), shared_font_db())
    }

    /// Open a canvas on `target` with the given configuration and font database
    pub fn open_with(target: T, config: Config, fontdb: Arc<fontdb::Database>) -> Result<Self, Error> {
        let (width, height) = target.size();
        let layout = Layout::new(width, height, config)?;
        log::debug!("Opened a {}x{} canvas", width, height);
        Ok(Canvas {
            target,
            layout,
            fontdb,
            rasterizer: None,
        })
    }

    /// The configuration frames are built from
    pub fn config(&self) -> &Config {
        self.layout.config()
    }

    /// The frame layout
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The frame layout
    pub fn layout_mut(&mut self) -> &mut Layout {
        &mut self.layout
    }

    /// The output target
    pub fn target(&self) -> &T {
        &self.target
    }

    /// The output target
    pub fn target_mut(&mut self) -> &mut T {
        &mut self.target
    }

    /// The font database used for labels
    pub fn fontdb(&self) -> &Arc<fontdb::Database> {
        &self.fontdb
    }

    /// Canvas size in pixels
    pub fn size(&self) -> (u32, u32) {
        self.layout.size()
    }

    /// Change the canvas size and lay the frames out again
    pub fn resize(&mut self, width: u32, height: u32) {
        self.layout.resize(width, height);
    }

    /// Number of grid rows
    pub fn row_size(&self) -> usize {
        self.layout.row_size()
    }

    /// Number of grid columns
    pub fn col_size(&self) -> usize {
        self.layout.col_size()
    }

    /// Number of frames
    pub fn frame_num(&self) -> usize {
        self.layout.frame_num()
    }

    /// The frames, in insertion order
    pub fn frames(&self) -> &[Frame] {
        self.layout.frames()
    }

    /// The frame `id`
    pub fn frame(&self, id: FrameId) -> Option<&Frame> {
        self.layout.frame(id)
    }

    /// The frame `id`
    pub fn frame_mut(&mut self, id: FrameId) -> Option<&mut Frame> {
        self.layout.frame_mut(id)
    }

    /// The most recently added frame
    pub fn last_frame_mut(&mut self) -> &mut Frame {
        self.layout.last_frame_mut()
    }

    /// Append a frame, adding a row to the grid if it is full
    pub fn add_row_frame(&mut self) -> Result<FrameId, Error> {
        self.layout.add_row_frame()
    }

    /// Append a frame, adding a column to the grid if it is full
    pub fn add_col_frame(&mut self) -> Result<FrameId, Error> {
        self.layout.add_col_frame()
    }

    /// Render labels containing `$` with `rasterizer`
    pub fn set_label_rasterizer<R>(&mut self, rasterizer: R)
    where
        R: LabelRasterizer + 'static,
    {
        self.rasterizer = Some(Box::new(rasterizer));
    }

    /// Render all labels as plain text
    pub fn clear_label_rasterizer(&mut self) {
        self.rasterizer = None;
    }

    /// Fill the surface with the background color
    pub fn clear(&mut self) {
        let color = self.layout.config().style.background;
        self.target.surface().fill(color.into());
    }

    /// Draw all frames and show the page
    pub fn draw(&mut self) -> Result<(), Error> {
        let (width, height) = self.layout.size();
        let style = &self.layout.config().style;
        let surface = self.target.surface();
        surface.prepare(Size::new(width as f32, height as f32));

        let mut painter =
            Painter::new(surface, &self.fontdb, style).with_rasterizer(self.rasterizer.as_deref());
        painter.fill(style.background);
        for frame in self.layout.frames() {
            frame.draw(&mut painter);
        }
        drop(painter);

        self.target.show_page().map_err(Error::target)
    }

    /// Drop the frames and close the target
    pub fn close(self) -> Result<(), Error> {
        let Canvas { target, layout, .. } = self;
        log::debug!("Closing canvas with {} frames", layout.frame_num());
        drop(layout);
        target.close().map_err(Error::target)
    }
}
