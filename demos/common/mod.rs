use std::env;
use std::f64::consts::PI;
use std::path::PathBuf;

use ticplot::drawable::{Data, Function, Layers, Styled};
use ticplot::{AxisId, Canvas, Config, Frame, Layout, Painter, Style, Target, color};

#[derive(Debug, Clone, Default)]
pub struct Args {
    pub dark: bool,
    pub tex: bool,
    pub output: Option<PathBuf>,
}

pub fn parse_args() -> Args {
    let mut args = Args::default();

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "light" => args.dark = false,
            "dark" => args.dark = true,
            "tex" => args.tex = true,
            _ if arg.starts_with("out=") => {
                let filename = arg.trim_start_matches("out=");
                args.output = Some(PathBuf::from(filename));
            }
            _ => {
                eprintln!("Unknown argument: {}", arg);
            }
        }
    }
    args
}

impl Args {
    #[allow(dead_code)]
    pub fn output_or(&self, default_name: &str) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(default_name))
    }

    pub fn config(&self) -> Config {
        let style = if self.dark { Style::dark() } else { Style::light() };
        Config::default().with_style(style)
    }
}

/// Open a canvas on `target` with the style chosen on the command line
pub fn open_canvas<T: Target>(target: T, args: &Args) -> Canvas<T> {
    let mut canvas =
        Canvas::open_with(target, args.config(), ticplot::canvas::shared_font_db()).unwrap();
    if args.tex {
        canvas.set_label_rasterizer(ticplot_pxl::TexRasterizer::new());
    }
    canvas
}

/// Four frames on a 2x2 grid
#[allow(dead_code)]
pub fn four_frames(layout: &mut Layout) {
    let frame = layout.last_frame_mut();
    frame.set_title("Points & Segments");
    frame.set_x_range(-5.0, 5.0).unwrap();
    frame.set_y_range(-5.0, 5.0).unwrap();
    frame.set_x_label("x");
    frame.set_y_label("y");
    frame.set_drawable(|frame: &Frame, painter: &mut Painter<'_>| {
        painter.set_color(color::RED);
        for (x, y) in [(-3.0, 2.0), (-1.0, -1.5), (1.5, 3.0), (3.5, -2.5)] {
            frame.draw_point(painter, x, y, 3.0);
        }
        painter.set_color(color::BLUE);
        painter.set_line_width(2.0);
        frame.draw_line(painter, -4.0, -4.0, 4.0, 3.0);
        frame.draw_line(painter, -4.0, 4.0, 2.0, -3.0);
        Ok(())
    });

    layout.add_col_frame().unwrap();
    let data = vec![-5.0, -3.0, -1.0, 2.0, 0.0, -4.0];
    let frame = layout.last_frame_mut();
    frame.set_title("Data");
    frame.set_range_by_data_1d(&data).unwrap();
    frame.set_x_grid(true);
    frame.set_y_grid(true);
    frame.set_drawable(Styled::new(Data::D1(data), color::BLUE).with_width(1.5));

    layout.add_row_frame().unwrap();
    let frame = layout.last_frame_mut();
    frame.set_title("Fine tics");
    frame.set_x_range(0.4667, 0.4682).unwrap();
    frame.set_y_range(-1.0, 1.0).unwrap();
    frame.set_y2_range(-30.0, 30.0).unwrap();
    frame.set_y2_tics(true);
    frame.set_y_label("y");
    frame.set_y2_label("y2");
    let x: Vec<f64> = (0..=60).map(|i| 0.4667 + 0.0015 * i as f64 / 60.0).collect();
    let y2: Vec<f64> = x.iter().map(|x| 25.0 * ((x - 0.4667) * 4000.0).sin()).collect();
    frame.set_drawable(Styled::new(
        Data::D2 {
            x,
            y: y2,
            axis: AxisId::Y2,
        },
        color::GREEN,
    ));

    layout.add_col_frame().unwrap();
    let frame = layout.last_frame_mut();
    frame.set_title("Functions (trigonometrics)");
    frame.set_x_range(-2.0 * PI, 2.0 * PI).unwrap();
    frame.set_y_range(-1.5, 1.5).unwrap();
    frame.set_x_grid(true);
    frame.set_y_grid(true);
    frame.set_drawable(
        Layers::new()
            .with(Styled::new(Function::new(f64::sin, 400), color::RED))
            .with(Styled::new(Function::new(f64::cos, 400), color::BLUE)),
    );
}
