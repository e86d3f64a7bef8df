//! Arrangement of frames into a growing grid of rows and columns

use crate::{Config, Error, Frame};

/// Identifies a frame of a [`Layout`].
///
/// Frames are never removed, so ids stay valid for the lifetime of the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(usize);

impl FrameId {
    /// Position of the frame in insertion order
    pub fn index(self) -> usize {
        self.0
    }
}

/// Frames of a canvas, laid out in row-major order in a grid
/// that only ever grows.
///
/// The grid always has room for every frame: `row_size * col_size >= frame_num`.
#[derive(Debug)]
pub struct Layout {
    width: i32,
    height: i32,
    config: Config,
    row_size: usize,
    col_size: usize,
    frames: Vec<Frame>,
}

impl Layout {
    /// Build a 1x1 layout with one frame
    pub fn new(width: u32, height: u32, config: Config) -> Result<Self, Error> {
        config.validate()?;
        let mut layout = Layout {
            width: clamp_dim(width),
            height: clamp_dim(height),
            config,
            row_size: 1,
            col_size: 1,
            frames: Vec::new(),
        };
        layout.push_frame()?;
        layout.relayout();
        Ok(layout)
    }

    /// The configuration new frames are built from
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Canvas size in pixels
    pub fn size(&self) -> (u32, u32) {
        (self.width as u32, self.height as u32)
    }

    /// Number of grid rows
    pub fn row_size(&self) -> usize {
        self.row_size
    }

    /// Number of grid columns
    pub fn col_size(&self) -> usize {
        self.col_size
    }

    /// Number of frames
    pub fn frame_num(&self) -> usize {
        self.frames.len()
    }

    /// The frames, in insertion order
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Ids of the frames, in insertion order
    pub fn frame_ids(&self) -> impl Iterator<Item = FrameId> + use<> {
        (0..self.frames.len()).map(FrameId)
    }

    /// The frame `id`
    pub fn frame(&self, id: FrameId) -> Option<&Frame> {
        self.frames.get(id.0)
    }

    /// The frame `id`
    pub fn frame_mut(&mut self, id: FrameId) -> Option<&mut Frame> {
        self.frames.get_mut(id.0)
    }

    /// The most recently added frame
    pub fn last_frame_mut(&mut self) -> &mut Frame {
        let last = self.frames.len() - 1;
        &mut self.frames[last]
    }

    /// Append a frame, adding a row to the grid if it is full
    pub fn add_row_frame(&mut self) -> Result<FrameId, Error> {
        let id = self.push_frame()?;
        if self.row_size * self.col_size < self.frames.len() {
            self.row_size += 1;
            log::debug!("Layout grown to {}x{}", self.row_size, self.col_size);
        }
        self.relayout();
        Ok(id)
    }

    /// Append a frame, adding a column to the grid if it is full
    pub fn add_col_frame(&mut self) -> Result<FrameId, Error> {
        let id = self.push_frame()?;
        if self.row_size * self.col_size < self.frames.len() {
            self.col_size += 1;
            log::debug!("Layout grown to {}x{}", self.row_size, self.col_size);
        }
        self.relayout();
        Ok(id)
    }

    /// Change the canvas size and lay the frames out again.
    /// The grid shape is kept.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = clamp_dim(width);
        self.height = clamp_dim(height);
        self.relayout();
    }

    /// The rectangle of the grid cell at `row` and `col`, as `(x, y, width, height)`
    pub fn cell(&self, row: usize, col: usize) -> (i32, i32, i32, i32) {
        let (px, iw) = interior(self.width, self.config.padding);
        let (py, ih) = interior(self.height, self.config.padding);
        let (x, w) = partition(px, iw, col, self.col_size);
        let (y, h) = partition(py, ih, row, self.row_size);
        (x, y, w, h)
    }

    fn push_frame(&mut self) -> Result<FrameId, Error> {
        let frame = Frame::new(&self.config)?;
        self.frames.try_reserve(1)?;
        self.frames.push(frame);
        Ok(FrameId(self.frames.len() - 1))
    }

    fn relayout(&mut self) {
        for i in 0..self.frames.len() {
            let (row, col) = (i / self.col_size, i % self.col_size);
            let (x, y, w, h) = self.cell(row, col);
            self.frames[i].resize(x, y, w, h);
        }
    }
}

fn clamp_dim(dim: u32) -> i32 {
    dim.min(i32::MAX as u32) as i32
}

/// Offset and length of the space left inside `dim` once `padding` is removed on
/// both sides. The padding is limited to half of `dim`.
fn interior(dim: i32, padding: i32) -> (i32, i32) {
    let p = padding.clamp(0, dim / 2);
    (p, dim - 2 * p)
}

/// Offset and length of the cell `i` out of `n` in `[origin, origin + len]`.
/// The lengths of the `n` cells sum to `len` exactly.
fn partition(origin: i32, len: i32, i: usize, n: usize) -> (i32, i32) {
    let len = len.max(0) as i64;
    let n = n as i64;
    let i = i as i64;
    let start = len * i / n;
    let end = len * (i + 1) / n;
    (origin + start as i32, (end - start) as i32)
}
