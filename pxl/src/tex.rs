//! Math labels typeset by a local TeX installation.
//!
//! The label goes through `latex`, then `dvips -E` for a tight bounding box,
//! then ImageMagick `convert` to get a PNG.
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::{fs, io};

use ticplot::label::{LabelRasterizer, RasterizeError};
use ticplot::render::ImageData;
use tiny_skia::Pixmap;

const DEFAULT_DPI: u32 = 300;

/// A [`LabelRasterizer`] running `latex`, `dvips` and `convert`.
///
/// The tools must be found in `PATH`. Each label is typeset in its own
/// temporary directory, removed once the image is loaded.
#[derive(Debug, Clone)]
pub struct TexRasterizer {
    dpi: u32,
    preamble: String,
}

impl Default for TexRasterizer {
    fn default() -> Self {
        TexRasterizer::new()
    }
}

impl TexRasterizer {
    pub fn new() -> Self {
        TexRasterizer {
            dpi: DEFAULT_DPI,
            preamble: String::new(),
        }
    }

    /// Resolution of the rasterized labels.
    /// Labels are scaled to the font height when drawn, so this only sets their sharpness.
    pub fn with_dpi(self, dpi: u32) -> Self {
        TexRasterizer {
            dpi: dpi.max(1),
            ..self
        }
    }

    /// Extra lines inserted before `\begin{document}`, e.g. `\usepackage` commands
    pub fn with_preamble(self, preamble: impl Into<String>) -> Self {
        TexRasterizer {
            preamble: preamble.into(),
            ..self
        }
    }

    pub fn dpi(&self) -> u32 {
        self.dpi
    }

    fn document(&self, text: &str) -> String {
        let mut doc = String::from("\\documentclass{article}\n\\usepackage{amsmath}\n");
        if !self.preamble.is_empty() {
            doc.push_str(&self.preamble);
            doc.push('\n');
        }
        doc.push_str("\\pagestyle{empty}\n\\begin{document}\n");
        doc.push_str(text);
        doc.push_str("\n\\end{document}\n");
        doc
    }
}

impl LabelRasterizer for TexRasterizer {
    fn rasterize(&self, text: &str) -> Result<ImageData, RasterizeError> {
        let dir = TempDir::create()?;
        fs::write(dir.path().join("label.tex"), self.document(text))?;

        run(
            Command::new("latex")
                .args(["-interaction=nonstopmode", "-halt-on-error", "label.tex"])
                .current_dir(dir.path()),
            "latex",
        )?;
        run(
            Command::new("dvips")
                .args(["-E", "-q", "-o", "label.eps", "label.dvi"])
                .current_dir(dir.path()),
            "dvips",
        )?;
        let density = self.dpi.to_string();
        run(
            Command::new("convert")
                .args(["-density", &density, "label.eps", "png32:label.png"])
                .current_dir(dir.path()),
            "convert",
        )?;

        let png = fs::read(dir.path().join("label.png"))?;
        log::debug!("Rasterized label {:?} ({} bytes of PNG)", text, png.len());
        decode_png(&png)
    }
}

/// Run `cmd` to completion, turning a failure status into [`RasterizeError::Tool`]
fn run(cmd: &mut Command, tool: &str) -> Result<Output, RasterizeError> {
    let output = cmd.output()?;
    if output.status.success() {
        return Ok(output);
    }
    // latex reports its errors on stdout
    let msg = if output.stderr.is_empty() {
        &output.stdout
    } else {
        &output.stderr
    };
    Err(RasterizeError::Tool {
        tool: tool.to_string(),
        status: output.status.code(),
        stderr: String::from_utf8_lossy(msg).into_owned(),
    })
}

/// Decode a PNG into straight alpha RGBA
fn decode_png(data: &[u8]) -> Result<ImageData, RasterizeError> {
    let pixmap = Pixmap::decode_png(data).map_err(|err| RasterizeError::Decode(err.to_string()))?;
    let (width, height) = (pixmap.width(), pixmap.height());
    let rgba = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();
    ImageData::new(width, height, rgba)
        .ok_or_else(|| RasterizeError::Decode(format!("invalid image size {}x{}", width, height)))
}

/// A directory removed with its content when dropped
#[derive(Debug)]
struct TempDir {
    path: PathBuf,
}

impl TempDir {
    fn create() -> io::Result<Self> {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        let n = COUNTER.fetch_add(1, Ordering::Relaxed);
        let path = std::env::temp_dir().join(format!("ticplot-tex-{}-{}", std::process::id(), n));
        fs::create_dir(&path)?;
        Ok(TempDir { path })
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        if let Err(err) = fs::remove_dir_all(&self.path) {
            log::warn!("Could not remove {}: {}", self.path.display(), err);
        }
    }
}
