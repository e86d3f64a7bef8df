use ticplot_svg::SvgFile;

mod common;

fn main() {
    let args = common::parse_args();
    let path = args.output_or("ticplot_grid.svg");
    let target = SvgFile::create_default(&path).unwrap();
    let mut canvas = common::open_canvas(target, &args);
    common::four_frames(canvas.layout_mut());

    canvas.draw().unwrap();
    canvas.close().unwrap();
    println!("Wrote {}", path.display());
}
