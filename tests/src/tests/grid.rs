use crate::*;

fn plot_center(canvas: &Canvas<PixmapTarget>, index: usize) -> (i32, i32) {
    let plot = canvas.frames()[index].plot_rect();
    (plot.left() + plot.width() / 2, plot.top() + plot.height() / 2)
}

#[test]
fn cells_hold_their_frames() {
    let mut canvas = pxl_canvas(400, 300);
    canvas.add_col_frame().unwrap();
    canvas.add_row_frame().unwrap();
    assert_eq!((canvas.row_size(), canvas.col_size(), canvas.frame_num()), (2, 2, 3));
    for id in canvas.layout().frame_ids() {
        scenes::flood(canvas.frame_mut(id).unwrap());
    }
    canvas.draw().unwrap();

    let px = last_page(&canvas);
    for i in 0..3 {
        let (x, y) = plot_center(&canvas, i);
        assert!(is_red(pixel(px, x, y)), "frame {} is not drawn", i);
    }
    let (x, y, w, h) = canvas.layout().cell(1, 1);
    assert!(is_white(pixel(px, x + w / 2, y + h / 2)));

    let outers: Vec<_> = canvas.frames().iter().map(|f| f.outer_rect()).collect();
    assert!(outers[0].right() <= outers[1].left());
    assert!(outers[0].bottom() <= outers[2].top());
    assert_eq!(outers[0].left(), outers[2].left());
}

#[test]
fn grid_grows_row_major() {
    let mut canvas = pxl_canvas(400, 300);
    for _ in 0..4 {
        canvas.add_col_frame().unwrap();
    }
    assert_eq!((canvas.row_size(), canvas.col_size()), (1, 5));
    canvas.add_row_frame().unwrap();
    assert_eq!((canvas.row_size(), canvas.col_size(), canvas.frame_num()), (2, 5, 6));

    // the sixth frame opens the second row
    let outers: Vec<_> = canvas.frames().iter().map(|f| f.outer_rect()).collect();
    assert_eq!(outers[5].left(), outers[0].left());
    assert!(outers[5].top() >= outers[0].bottom());
    for pair in outers[..5].windows(2) {
        assert_eq!(pair[0].right(), pair[1].left());
    }
}

#[test]
fn resized_canvas_is_scaled_to_target() {
    let mut canvas = pxl_canvas(400, 300);
    scenes::flood(canvas.last_frame_mut());
    canvas.resize(200, 150);
    assert_eq!(canvas.size(), (200, 150));
    canvas.draw().unwrap();

    let (x, y) = plot_center(&canvas, 0);
    let px = last_page(&canvas);
    assert_eq!((px.width(), px.height()), (400, 300));
    assert!(is_red(pixel(px, 2 * x, 2 * y)));
    assert!(is_white(pixel(px, 2, 2)));
}

#[test]
fn each_draw_shows_a_page() {
    let mut canvas = pxl_canvas(200, 100);
    canvas.draw().unwrap();
    scenes::flood(canvas.last_frame_mut());
    canvas.draw().unwrap();

    let pages = canvas.target().pages();
    assert_eq!(pages.len(), 2);
    let (x, y) = plot_center(&canvas, 0);
    assert!(is_white(pixel(&pages[0], x + 3, y + 3)));
    assert!(is_red(pixel(&pages[1], x + 3, y + 3)));
    canvas.close().unwrap();
}
