use ticplot::label::RasterizeError;
use ticplot::render::ImageData;
use ticplot::style::defaults;

use crate::*;

fn is_blue(c: ColorU8) -> bool {
    c.blue() > 200 && c.red() < 60 && c.green() < 60
}

fn blue_image(_: &str) -> Result<ImageData, RasterizeError> {
    let rgba = [0, 0, 255, 255].repeat(16 * 8);
    Ok(ImageData::new(16, 8, rgba).unwrap())
}

fn broken(_: &str) -> Result<ImageData, RasterizeError> {
    Err(RasterizeError::Decode("broken".to_string()))
}

#[test]
fn math_title_is_drawn_above_plot() {
    let mut canvas = pxl_canvas(400, 300);
    canvas.set_label_rasterizer(blue_image);
    canvas.last_frame_mut().set_title("$x^2$");
    canvas.draw().unwrap();

    let frame = &canvas.frames()[0];
    let plot = frame.plot_rect();
    let bs = frame.baseline_skip();
    let px = last_page(&canvas);
    let cx = plot.left() + plot.width() / 2;
    let bottom = plot.top() - defaults::TIC_LABEL_MARGIN;

    // scaled to the baseline skip, twice as wide as high
    assert!(is_blue(pixel(px, cx, bottom - bs / 2)));
    assert!(is_blue(pixel(px, cx - bs + 2, bottom - bs / 2)));
    assert!(is_white(pixel(px, cx - bs - 2, bottom - bs / 2)));
    assert!(is_white(pixel(px, cx, bottom + 2)));
}

#[test]
fn math_y_label_is_rotated() {
    let mut canvas = pxl_canvas(400, 300);
    canvas.set_label_rasterizer(blue_image);
    canvas.last_frame_mut().set_y_label("$y$");
    canvas.draw().unwrap();

    let frame = &canvas.frames()[0];
    let plot = frame.plot_rect();
    let bs = frame.baseline_skip();
    let px = last_page(&canvas);
    let anchor_x = plot.left() - (bs + bs / 2);
    let cy = plot.top() + plot.height() / 2;

    // rotated by -90 degrees: bs wide, 2 * bs high, left of the anchor
    assert!(is_blue(pixel(px, anchor_x - bs / 2, cy)));
    assert!(is_blue(pixel(px, anchor_x - bs / 2, cy + bs - 2)));
    assert!(is_white(pixel(px, anchor_x - bs / 2, cy + bs + 2)));
    assert!(is_white(pixel(px, anchor_x + 2, cy)));
}

#[test]
fn failed_rasterization_skips_label() {
    let mut canvas = pxl_canvas(400, 300);
    canvas.set_label_rasterizer(broken);
    canvas.last_frame_mut().set_title("$x^2$");
    canvas.draw().unwrap();

    let frame = &canvas.frames()[0];
    let plot = frame.plot_rect();
    let px = last_page(&canvas);
    let cx = plot.left() + plot.width() / 2;
    assert!((frame.outer_rect().top()..plot.top() - 1).all(|y| is_white(pixel(px, cx, y))));
}

#[test]
fn plain_labels_skip_rasterizer() {
    let mut canvas = pxl_canvas(400, 300);
    canvas.set_label_rasterizer(blue_image);
    canvas.last_frame_mut().set_title("no math");
    canvas.draw().unwrap();

    let frame = &canvas.frames()[0];
    let plot = frame.plot_rect();
    let px = last_page(&canvas);
    let cx = plot.left() + plot.width() / 2;
    // no font is available either: nothing is drawn
    assert!((frame.outer_rect().top()..plot.top() - 1).all(|y| is_white(pixel(px, cx, y))));
}
