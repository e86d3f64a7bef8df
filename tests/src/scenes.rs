//! Frame setups shared by the tests
use std::f64::consts::PI;

use ticplot::drawable::{Data, Function, Layers, Styled};
use ticplot::geom::PixelRect;
use ticplot::{AxisId, Frame, Layout, Painter, color};

/// Fill everything with red. The frame clip keeps it inside the plot rectangle.
pub fn flood(frame: &mut Frame) {
    frame.set_drawable(|_: &Frame, painter: &mut Painter<'_>| {
        painter.set_color(color::RED);
        painter.fill_rect(PixelRect::new(-10_000, -10_000, 20_000, 20_000));
        Ok(())
    });
}

/// A red sine over two periods, with grids
pub fn sine(layout: &mut Layout) {
    let frame = layout.last_frame_mut();
    frame.set_title("sine");
    frame.set_x_range(-2.0 * PI, 2.0 * PI).unwrap();
    frame.set_y_range(-1.2, 1.2).unwrap();
    frame.set_x_grid(true);
    frame.set_y_grid(true);
    frame.set_drawable(Styled::new(Function::new(f64::sin, 400), color::RED).with_width(2.0));
}

/// Four frames on a 2x2 grid: points and segments, a data series,
/// fine tics with a secondary axis, and trigonometric functions
pub fn four_frames(layout: &mut Layout) {
    {
        let frame = layout.last_frame_mut();
        frame.set_title("Points & Segments");
        frame.set_x_range(-5.0, 5.0).unwrap();
        frame.set_y_range(-5.0, 5.0).unwrap();
        frame.set_drawable(|frame: &Frame, painter: &mut Painter<'_>| {
            frame.draw_point(painter, -3.0, 2.0, 3.0);
            frame.draw_point(painter, 1.5, -1.0, 3.0);
            frame.draw_line(painter, -4.0, -4.0, 4.0, 3.0);
            frame.draw_line(painter, -4.0, 4.0, 2.0, -3.0);
            Ok(())
        });
    }

    layout.add_col_frame().unwrap();
    {
        let data = vec![-5.0, -3.0, -1.0, 2.0, 0.0, -4.0];
        let frame = layout.last_frame_mut();
        frame.set_title("Data");
        frame.set_range_by_data_1d(&data).unwrap();
        frame.set_y_grid(true);
        frame.set_drawable(Styled::new(Data::D1(data), color::BLUE));
    }

    layout.add_row_frame().unwrap();
    {
        let frame = layout.last_frame_mut();
        frame.set_title("Fine tics");
        frame.set_x_range(0.4667, 0.4682).unwrap();
        frame.set_y_range(-1.0, 1.0).unwrap();
        frame.set_y2_range(-30.0, 30.0).unwrap();
        frame.set_y2_tics(true);
        frame.set_y2_label("y2");
        let x: Vec<f64> = (0..=30).map(|i| 0.4667 + 0.0015 * i as f64 / 30.0).collect();
        let y2: Vec<f64> = (0..=30).map(|i| -30.0 + 2.0 * i as f64).collect();
        frame.set_drawable(Styled::new(
            Data::D2 {
                x,
                y: y2,
                axis: AxisId::Y2,
            },
            color::GREEN,
        ));
    }

    layout.add_col_frame().unwrap();
    {
        let frame = layout.last_frame_mut();
        frame.set_title("Functions (trigonometrics)");
        frame.set_x_range(-2.0 * PI, 2.0 * PI).unwrap();
        frame.set_y_range(-1.5, 1.5).unwrap();
        frame.set_x_grid(true);
        frame.set_drawable(
            Layers::new()
                .with(Styled::new(Function::new(f64::sin, 200), color::RED))
                .with(Styled::new(Function::new(f64::cos, 200), color::BLUE)),
        );
    }
}
