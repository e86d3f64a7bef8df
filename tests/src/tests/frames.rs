use std::f64::consts::PI;

use ticplot::drawable::{Data, Styled};
use ticplot::{AxisId, color};

use crate::*;

fn is_blue(c: ColorU8) -> bool {
    c.blue() > 200 && c.red() < 100 && c.green() < 100
}

#[test]
fn border_on_white_background() {
    let mut canvas = pxl_canvas(400, 300);
    canvas.last_frame_mut().set_zero_lines(false);
    canvas.draw().unwrap();

    let frame = &canvas.frames()[0];
    let plot = frame.plot_rect();
    let px = last_page(&canvas);
    let mid_x = plot.left() + plot.width() / 2;
    let mid_y = plot.top() + plot.height() / 2;

    assert!(is_white(pixel(px, 0, 0)));
    assert!(is_white(pixel(px, 399, 299)));
    assert!(is_inked(px, plot.left(), mid_y));
    assert!(is_inked(px, plot.right(), mid_y));
    assert!(is_inked(px, mid_x, plot.top()));
    assert!(is_inked(px, mid_x, plot.bottom()));

    let (x, y) = (frame.x_coord(2.5).unwrap(), frame.y_coord(2.5).unwrap());
    assert!(is_white(pixel(px, x, y)));
}

#[test]
fn zero_lines_cross_at_origin() {
    let mut canvas = pxl_canvas(400, 300);
    {
        let frame = canvas.last_frame_mut();
        frame.set_x_tics(false);
        frame.set_y_tics(false);
        frame.set_x_range(-2.0, 8.0).unwrap();
        frame.set_y_range(-1.0, 3.0).unwrap();
    }
    canvas.draw().unwrap();

    let frame = &canvas.frames()[0];
    let px = last_page(&canvas);
    let (x0, y0) = (frame.x_coord(0.0).unwrap(), frame.y_coord(0.0).unwrap());
    assert!(is_inked(px, x0, frame.y_coord(2.0).unwrap()));
    assert!(is_inked(px, frame.x_coord(5.0).unwrap(), y0));
    assert!(is_white(pixel(px, x0 + 10, y0 - 10)));
}

#[test]
fn drawable_is_clipped_to_plot() {
    let mut canvas = pxl_canvas(400, 300);
    scenes::flood(canvas.last_frame_mut());
    canvas.draw().unwrap();

    let frame = &canvas.frames()[0];
    let plot = frame.plot_rect();
    let outer = frame.outer_rect();
    let px = last_page(&canvas);
    let mid_x = plot.left() + plot.width() / 2;
    let mid_y = plot.top() + plot.height() / 2;

    assert!(is_red(pixel(px, frame.x_coord(2.5).unwrap(), frame.y_coord(2.5).unwrap())));
    assert!(is_red(pixel(px, plot.left() + 2, plot.top() + 2)));
    assert!(is_white(pixel(px, plot.left() - 2, mid_y)));
    assert!(is_white(pixel(px, mid_x, plot.top() - 2)));
    assert!(is_white(pixel(px, outer.left() + 1, outer.top() + 1)));
}

#[test]
fn sine_peaks_at_one() {
    let mut canvas = pxl_canvas(400, 300);
    scenes::sine(canvas.layout_mut());
    canvas.draw().unwrap();

    let frame = &canvas.frames()[0];
    let px = last_page(&canvas);
    let x = frame.x_coord(PI / 2.0).unwrap();
    assert!(any_near(px, x, frame.y_coord(1.0).unwrap(), 2, is_red));
    assert!(!any_near(px, x, frame.y_coord(-1.0).unwrap(), 2, is_red));

    let x = frame.x_coord(-PI / 2.0).unwrap();
    assert!(any_near(px, x, frame.y_coord(-1.0).unwrap(), 2, is_red));
}

#[test]
fn data_1d_series() {
    let data = vec![-5.0, -3.0, -1.0, 2.0, 0.0, -4.0];
    let mut canvas = pxl_canvas(400, 300);
    {
        let frame = canvas.last_frame_mut();
        frame.set_range_by_data_1d(&data).unwrap();
        frame.set_drawable(Styled::new(Data::D1(data), color::BLUE).with_width(3.0));
    }
    canvas.draw().unwrap();

    let frame = &canvas.frames()[0];
    assert_eq!((frame.x_axis().min(), frame.x_axis().max()), (0.0, 5.0));
    assert_eq!((frame.y_axis().min(), frame.y_axis().max()), (-5.0, 2.0));

    let px = last_page(&canvas);
    let (x, y) = (frame.x_coord(3.0).unwrap(), frame.y_coord(2.0).unwrap());
    assert!(any_near(px, x, y, 1, is_blue));
    let (x, y) = (frame.x_coord(1.0).unwrap(), frame.y_coord(-3.0).unwrap());
    assert!(any_near(px, x, y, 1, is_blue));
}

#[test]
fn series_on_secondary_axis() {
    let mut canvas = pxl_canvas(400, 300);
    {
        let frame = canvas.last_frame_mut();
        frame.set_y2_range(0.0, 100.0).unwrap();
        frame.set_y2_tics(true);
        let series = Data::D2 {
            x: vec![-10.0, 10.0],
            y: vec![50.0, 50.0],
            axis: AxisId::Y2,
        };
        frame.set_drawable(Styled::new(series, color::RED).with_width(3.0));
    }
    canvas.draw().unwrap();

    let frame = &canvas.frames()[0];
    let px = last_page(&canvas);
    let x = frame.x_coord(2.5).unwrap();
    assert!(is_red(pixel(px, x, frame.y2_coord(50.0).unwrap())));
    assert!(!any_near(px, x, frame.y2_coord(25.0).unwrap(), 2, is_red));
}

#[test]
fn grid_lines_are_dashed() {
    let mut canvas = pxl_canvas(400, 300);
    {
        let frame = canvas.last_frame_mut();
        frame.set_x_tics(false);
        frame.set_y_tics(false);
        frame.set_border(false);
        frame.set_zero_lines(false);
        frame.set_x_grid(true);
    }
    canvas.draw().unwrap();

    let frame = &canvas.frames()[0];
    let plot = frame.plot_rect();
    let px = last_page(&canvas);
    let x = frame.x_coord(5.0).unwrap();
    // the line straddles the columns x - 1 and x
    let inked = (plot.top()..plot.bottom())
        .filter(|&y| !is_white(pixel(px, x - 1, y)) || !is_white(pixel(px, x, y)))
        .count() as i32;
    // 6 pixels on, 10 pixels off
    assert!(inked > plot.height() / 5, "{} inked pixels", inked);
    assert!(inked < plot.height() * 7 / 10, "{} inked pixels", inked);

    // no grid between the tics
    let x = frame.x_coord(2.5).unwrap();
    assert!((plot.top()..plot.bottom()).all(|y| is_white(pixel(px, x, y))));
}
