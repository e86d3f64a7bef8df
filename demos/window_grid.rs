use ticplot_window::WindowTarget;

mod common;

fn main() {
    let args = common::parse_args();
    let target = WindowTarget::open_default("ticplot").unwrap();
    let mut canvas = common::open_canvas(target, &args);
    common::four_frames(canvas.layout_mut());

    canvas.draw().unwrap();
    canvas.target_mut().wait_close().unwrap();
    canvas.close().unwrap();
}
