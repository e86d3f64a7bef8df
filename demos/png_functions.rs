use std::f64::consts::PI;

use ticplot::color;
use ticplot::drawable::{Function, Layers, Parametric, Styled};
use ticplot_pxl::PngFile;

mod common;

fn main() {
    let args = common::parse_args();
    let path = args.output_or("ticplot_functions.png");
    let target = PngFile::create(&path, 960, 480).unwrap();
    let mut canvas = common::open_canvas(target, &args);
    let (title, x_label) = if args.tex {
        ("$\\sin x$ and $\\cos x$", "$x$")
    } else {
        ("sin(x) and cos(x)", "x")
    };

    let frame = canvas.last_frame_mut();
    frame.set_title(title);
    frame.set_x_label(x_label);
    frame.set_x_range(-2.0 * PI, 2.0 * PI).unwrap();
    frame.set_y_range(-1.2, 1.2).unwrap();
    frame.set_x_grid(true);
    frame.set_y_grid(true);
    frame.set_drawable(
        Layers::new()
            .with(Styled::new(Function::new(f64::sin, 400), color::RED).with_width(1.5))
            .with(Styled::new(Function::new(f64::cos, 400), color::BLUE).with_width(1.5)),
    );

    canvas.add_col_frame().unwrap();
    let frame = canvas.last_frame_mut();
    frame.set_title("Lissajous");
    frame.set_x_range(-1.2, 1.2).unwrap();
    frame.set_y_range(-1.2, 1.2).unwrap();
    frame.set_zero_lines(false);
    frame.set_drawable(Styled::new(
        Parametric::new(|t| (3.0 * t).sin(), |t| (2.0 * t).sin(), 0.0, 2.0 * PI, 600),
        color::GREEN,
    ));

    canvas.draw().unwrap();
    canvas.close().unwrap();
    println!("Wrote {}", path.display());
}
