use ticplot::label::RasterizeError;
use ticplot::render::ImageData;
use ticplot_svg::SvgFile;

use crate::*;

fn svg_page<S>(width: u32, height: u32, scene: S) -> String
where
    S: Fn(&mut Canvas<SvgPages>),
{
    let mut canvas = svg_canvas(width, height);
    scene(&mut canvas);
    canvas.draw().unwrap();
    canvas.target().last_page().to_string()
}

#[test]
fn one_clip_per_drawable() {
    let svg = svg_page(400, 300, |canvas| {
        canvas.add_col_frame().unwrap();
        canvas.add_col_frame().unwrap();
        scenes::flood(canvas.last_frame_mut());
        let first = canvas.layout().frame_ids().next().unwrap();
        scenes::flood(canvas.frame_mut(first).unwrap());
    });
    assert!(svg.contains("<svg"));
    assert_eq!(svg.matches("<clipPath").count(), 2);
    assert!(svg.contains("clip-path=\"url(#ticplot-clip1)\""));
    assert!(svg.contains("clip-path=\"url(#ticplot-clip2)\""));
}

#[test]
fn grid_lines_are_dashed() {
    let plain = svg_page(400, 300, |_| ());
    assert!(!plain.contains("stroke-dasharray"));

    let grid = svg_page(400, 300, |canvas| canvas.last_frame_mut().set_y_grid(true));
    assert!(grid.contains("stroke-dasharray"));
}

#[test]
fn math_labels_are_embedded_as_png() {
    let svg = svg_page(400, 300, |canvas| {
        canvas.set_label_rasterizer(|_: &str| -> Result<ImageData, RasterizeError> {
            Ok(ImageData::new(4, 2, vec![255; 4 * 2 * 4]).unwrap())
        });
        canvas.last_frame_mut().set_title("$\\alpha$");
        canvas.last_frame_mut().set_x_label("time");
    });
    assert_eq!(svg.matches("<image").count(), 1);
    assert!(svg.contains("href=\"data:image/png;base64,"));
}

#[test]
fn pages_start_afresh() {
    let mut canvas = svg_canvas(200, 100);
    canvas.draw().unwrap();
    canvas.draw().unwrap();
    let pages = canvas.target().pages();
    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0], pages[1]);
}

#[test]
fn svg_file_is_written() {
    let path = std::env::temp_dir().join(format!("ticplot-tests-{}.svg", std::process::id()));
    let target = SvgFile::create(&path, 320, 240).unwrap();
    let mut canvas = open(target);
    scenes::sine(canvas.layout_mut());
    canvas.draw().unwrap();
    assert_eq!(canvas.target().pages(), 1);
    canvas.close().unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("width=\"320\""));
    assert!(svg.contains("stroke-dasharray"));
}
