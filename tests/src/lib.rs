#![cfg(test)]

use std::sync::Arc;

use ticplot::{Canvas, ColorU8, Config, Target, fontdb};
use ticplot_pxl::PixmapTarget;

mod harness;
mod scenes;
mod tests;

use harness::SvgPages;

/// Canvases are drawn without any font, so that text never depends on the host.
/// Labels and tic labels are then skipped.
fn no_fonts() -> Arc<fontdb::Database> {
    Arc::new(fontdb::Database::new())
}

fn open<T: Target>(target: T) -> Canvas<T> {
    Canvas::open_with(target, Config::default(), no_fonts()).unwrap()
}

fn pxl_canvas(width: u32, height: u32) -> Canvas<PixmapTarget> {
    open(PixmapTarget::new(width, height).unwrap())
}

fn svg_canvas(width: u32, height: u32) -> Canvas<SvgPages> {
    open(SvgPages::new(width, height))
}

fn last_page(canvas: &Canvas<PixmapTarget>) -> &tiny_skia::Pixmap {
    canvas.target().last_page().unwrap()
}

fn pixel(pixmap: &tiny_skia::Pixmap, x: i32, y: i32) -> ColorU8 {
    ticplot_pxl::pixmap_pixel(pixmap, x as u32, y as u32).unwrap()
}

fn is_white(c: ColorU8) -> bool {
    c.red() == 255 && c.green() == 255 && c.blue() == 255
}

fn is_red(c: ColorU8) -> bool {
    c.red() > 200 && c.green() < 100 && c.blue() < 100
}

/// Whether something darker than the background was drawn on `(x, y)` or its left or top neighbor
fn is_inked(pixmap: &tiny_skia::Pixmap, x: i32, y: i32) -> bool {
    [(x, y), (x - 1, y), (x, y - 1)].into_iter().any(|(x, y)| {
        let c = pixel(pixmap, x, y);
        c.red().min(c.green()).min(c.blue()) < 240
    })
}

/// Whether any pixel in the square of half side `r` around `(x, y)` matches `pred`
fn any_near<F>(pixmap: &tiny_skia::Pixmap, x: i32, y: i32, r: i32, pred: F) -> bool
where
    F: Fn(ColorU8) -> bool,
{
    (y - r..=y + r).any(|y| (x - r..=x + r).any(|x| pred(pixel(pixmap, x, y))))
}
