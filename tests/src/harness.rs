use std::path::{Path, PathBuf};

use ticplot::{Canvas, Layout, Target};
use ticplot_pxl::PixmapTarget;
use ticplot_svg::SvgSurface;

/// A target keeping each shown page as an SVG document
#[derive(Debug)]
pub struct SvgPages {
    surface: SvgSurface,
    pages: Vec<String>,
}

impl SvgPages {
    pub fn new(width: u32, height: u32) -> Self {
        SvgPages {
            surface: SvgSurface::new(width, height),
            pages: Vec::new(),
        }
    }

    pub fn pages(&self) -> &[String] {
        &self.pages
    }

    pub fn last_page(&self) -> &str {
        self.pages.last().map(String::as_str).unwrap()
    }
}

impl Target for SvgPages {
    type Surface = SvgSurface;
    type Error = ticplot_svg::Error;

    fn size(&self) -> (u32, u32) {
        (self.surface.width(), self.surface.height())
    }

    fn surface(&mut self) -> &mut SvgSurface {
        &mut self.surface
    }

    fn show_page(&mut self) -> Result<(), ticplot_svg::Error> {
        self.pages.push(self.surface.to_svg_string()?);
        self.surface = SvgSurface::new(self.surface.width(), self.surface.height());
        Ok(())
    }

    fn close(self) -> Result<(), ticplot_svg::Error> {
        Ok(())
    }
}

/// Draws scenes on one kind of target and compares the outputs
pub trait TestHarness {
    type Target: Target;
    type Drawn;

    fn id() -> &'static str;
    fn file_ext() -> &'static str;

    fn target(width: u32, height: u32) -> Self::Target;
    fn take_page(target: &Self::Target) -> Self::Drawn;

    /// Describe how `actual` differs from `expected`, if it does
    fn diff(actual: &Self::Drawn, expected: &Self::Drawn) -> Option<String>;

    fn serialize(file: &Path, drawn: &Self::Drawn);

    fn actual_file_path(name: &str) -> PathBuf {
        let file_name = format!("{}{}", name, Self::file_ext());
        let tests_dir = env!("CARGO_MANIFEST_DIR");
        Path::new(tests_dir).join("actual").join(file_name)
    }

    /// Build the frames with `scene` on a fresh canvas and draw one page
    fn draw<S>(width: u32, height: u32, scene: S) -> Self::Drawn
    where
        S: Fn(&mut Layout),
    {
        let mut canvas: Canvas<Self::Target> = crate::open(Self::target(width, height));
        scene(canvas.layout_mut());
        canvas.draw().unwrap();
        Self::take_page(canvas.target())
    }

    /// Check that `scene` renders identically on two canvases, and on two
    /// successive pages of the same canvas.
    fn check_reproducible<S>(name: &str, width: u32, height: u32, scene: S) -> Result<(), String>
    where
        S: Fn(&mut Layout),
    {
        let first = Self::draw(width, height, &scene);
        let second = Self::draw(width, height, &scene);

        let mut canvas: Canvas<Self::Target> = crate::open(Self::target(width, height));
        scene(canvas.layout_mut());
        canvas.draw().unwrap();
        canvas.draw().unwrap();
        let redrawn = Self::take_page(canvas.target());

        for (what, drawn) in [("second canvas", &second), ("second page", &redrawn)] {
            if let Some(diff) = Self::diff(drawn, &first) {
                let actual_file = Self::actual_file_path(name);
                std::fs::create_dir_all(actual_file.parent().unwrap()).unwrap();
                Self::serialize(&actual_file, drawn);
                return Err(format!(
                    "{} assertion failed: {} of \"{}\" differs\n  Actual figure written to {}\n{}",
                    Self::id(),
                    what,
                    name,
                    actual_file.display(),
                    diff
                ));
            }
        }
        Ok(())
    }
}

pub struct PxlHarness;

impl TestHarness for PxlHarness {
    type Target = PixmapTarget;
    type Drawn = tiny_skia::Pixmap;

    fn id() -> &'static str {
        "PXL"
    }

    fn file_ext() -> &'static str {
        ".png"
    }

    fn target(width: u32, height: u32) -> PixmapTarget {
        PixmapTarget::new(width, height).unwrap()
    }

    fn take_page(target: &PixmapTarget) -> tiny_skia::Pixmap {
        target.last_page().unwrap().clone()
    }

    fn diff(actual: &tiny_skia::Pixmap, expected: &tiny_skia::Pixmap) -> Option<String> {
        if (actual.width(), actual.height()) != (expected.width(), expected.height()) {
            return Some(format!(
                "size {}x{} instead of {}x{}",
                actual.width(),
                actual.height(),
                expected.width(),
                expected.height()
            ));
        }
        let count = actual
            .pixels()
            .iter()
            .zip(expected.pixels())
            .filter(|(a, e)| a != e)
            .count();
        (count > 0).then(|| format!("{} pixels differ", count))
    }

    fn serialize(file: &Path, drawn: &tiny_skia::Pixmap) {
        drawn.save_png(file).unwrap();
    }
}

pub struct SvgHarness;

impl TestHarness for SvgHarness {
    type Target = SvgPages;
    type Drawn = String;

    fn id() -> &'static str {
        "SVG"
    }

    fn file_ext() -> &'static str {
        ".svg"
    }

    fn target(width: u32, height: u32) -> SvgPages {
        SvgPages::new(width, height)
    }

    fn take_page(target: &SvgPages) -> String {
        target.last_page().to_string()
    }

    fn diff(actual: &String, expected: &String) -> Option<String> {
        if actual != expected {
            let diff = similar::TextDiff::from_lines(expected.as_str(), actual.as_str());
            Some(diff.unified_diff().to_string())
        } else {
            None
        }
    }

    fn serialize(file: &Path, drawn: &String) {
        std::fs::write(file, drawn).unwrap();
    }
}
