use crate::frame::{AxisId, Frame};
use crate::geom::Point;
use crate::painter::Pen;
use crate::style::defaults;
use crate::text::{Align, VerAlign};
use crate::ticks::Tics;
use crate::Painter;

fn pt(x: i32, y: i32) -> Point {
    Point::from_xy(x as f32, y as f32)
}

/// Frame decorations: border, zero lines, tics, grids, labels and title.
///
/// Each operation sets its own pen from the canvas style.
impl Frame {
    /// Stroke the plot rectangle, and the zero lines if enabled
    pub fn draw_border(&self, painter: &mut Painter<'_>) {
        let style = painter.style();
        let pen = Pen::new(style.foreground, style.border_width);
        painter.set_pen(pen);
        painter.rect_outline(self.plot);
        if self.zero_lines {
            self.draw_zero_lines(painter);
        }
    }

    /// Draw the X = 0 and Y = 0 lines, for the ranges that straddle zero
    pub fn draw_zero_lines(&self, painter: &mut Painter<'_>) {
        let style = painter.style();
        let pen = Pen::new(style.foreground, style.axis_width);
        painter.set_pen(pen);
        let plot = self.plot;
        if self.x.straddles_zero() {
            if let Some(x) = self.x_coord(0.0) {
                painter.line(pt(x, plot.top()), pt(x, plot.bottom()));
            }
        }
        if self.y.straddles_zero() {
            if let Some(y) = self.y_coord(0.0) {
                painter.line(pt(plot.left(), y), pt(plot.right(), y));
            }
        }
    }

    /// Draw the tic marks and tic labels of the axis `id`
    pub fn draw_tics(&self, painter: &mut Painter<'_>, id: AxisId) {
        let tics = Tics::locate(self.axis(id));
        let style = painter.style();
        let (color, width) = (style.foreground, style.tics_width);
        let plot = self.plot;
        let len = defaults::TIC_LENGTH;
        let margin = defaults::TIC_LABEL_MARGIN;
        let text_style = self.text_style();

        for (value, label) in tics.labeled() {
            let Some(pos) = self.coord(id, value) else {
                continue;
            };
            painter.set_pen(Pen::new(color, width));
            let (anchor, align) = match id {
                AxisId::X => {
                    painter.line(pt(pos, plot.top()), pt(pos, plot.top() + len));
                    painter.line(pt(pos, plot.bottom()), pt(pos, plot.bottom() - len));
                    (pt(pos, plot.bottom() + margin), (Align::Center, VerAlign::Top))
                }
                AxisId::Y => {
                    painter.line(pt(plot.left(), pos), pt(plot.left() + len, pos));
                    painter.line(pt(plot.right(), pos), pt(plot.right() - len, pos));
                    (pt(plot.left() - margin, pos), (Align::Right, VerAlign::Middle))
                }
                AxisId::Y2 => {
                    painter.line(pt(plot.right(), pos), pt(plot.right() - len, pos));
                    (pt(plot.right() + margin, pos), (Align::Left, VerAlign::Middle))
                }
            };
            painter.draw_text(&label, anchor, align, 0.0, text_style);
        }
    }

    /// Draw the tics of the horizontal axis
    pub fn draw_x_tics(&self, painter: &mut Painter<'_>) {
        self.draw_tics(painter, AxisId::X);
    }

    /// Draw the tics of the primary vertical axis
    pub fn draw_y_tics(&self, painter: &mut Painter<'_>) {
        self.draw_tics(painter, AxisId::Y);
    }

    /// Draw the tics of the secondary vertical axis
    pub fn draw_y2_tics(&self, painter: &mut Painter<'_>) {
        self.draw_tics(painter, AxisId::Y2);
    }

    /// Draw dashed lines across the plot rectangle at the tics of the axis `id`
    pub fn draw_grid(&self, painter: &mut Painter<'_>, id: AxisId) {
        let tics = Tics::locate(self.axis(id));
        let style = painter.style();
        let pen = Pen::new(style.grid_color, style.grid_width).with_dash(style.grid_dash);
        painter.set_pen(pen);
        let plot = self.plot;
        for &value in &tics.values {
            let Some(pos) = self.coord(id, value) else {
                continue;
            };
            if id.is_vertical() {
                painter.line(pt(plot.left(), pos), pt(plot.right(), pos));
            } else {
                painter.line(pt(pos, plot.top()), pt(pos, plot.bottom()));
            }
        }
    }

    /// Draw vertical grid lines at the X tics
    pub fn draw_x_grid(&self, painter: &mut Painter<'_>) {
        self.draw_grid(painter, AxisId::X);
    }

    /// Draw horizontal grid lines at the Y tics
    pub fn draw_y_grid(&self, painter: &mut Painter<'_>) {
        self.draw_grid(painter, AxisId::Y);
    }

    /// Draw horizontal grid lines at the Y2 tics
    pub fn draw_y2_grid(&self, painter: &mut Painter<'_>) {
        self.draw_grid(painter, AxisId::Y2);
    }

    /// Draw the label of the axis `id`, if any.
    ///
    /// The X label is centered below the tic labels. The Y label is rotated by
    /// -90 degrees on the left side, the Y2 label by +90 degrees on the right side.
    pub fn draw_label(&self, painter: &mut Painter<'_>, id: AxisId) {
        let axis = self.axis(id);
        let Some(label) = axis.label() else {
            return;
        };
        let plot = self.plot;
        let bs = self.baseline_skip;
        let tics_band = if axis.has_tics() { bs + bs / 2 } else { 0 };
        let center_y = plot.top() + plot.height() / 2;

        let (anchor, angle) = match id {
            AxisId::X => {
                let tics = if axis.has_tics() { bs } else { 0 };
                let y = plot.bottom() + tics + defaults::TIC_LABEL_MARGIN;
                (pt(plot.left() + plot.width() / 2, y), 0.0)
            }
            AxisId::Y => (pt(plot.left() - tics_band, center_y), -90.0),
            AxisId::Y2 => (pt(plot.right() + tics_band, center_y), 90.0),
        };
        let align = match id {
            AxisId::X => (Align::Center, VerAlign::Top),
            AxisId::Y | AxisId::Y2 => (Align::Center, VerAlign::Bottom),
        };
        painter.set_pen(Pen::new(painter.style().foreground, 1.0));
        painter.draw_text(label, anchor, align, angle, self.text_style());
    }

    /// Draw the label of the horizontal axis
    pub fn draw_x_label(&self, painter: &mut Painter<'_>) {
        self.draw_label(painter, AxisId::X);
    }

    /// Draw the label of the primary vertical axis
    pub fn draw_y_label(&self, painter: &mut Painter<'_>) {
        self.draw_label(painter, AxisId::Y);
    }

    /// Draw the label of the secondary vertical axis
    pub fn draw_y2_label(&self, painter: &mut Painter<'_>) {
        self.draw_label(painter, AxisId::Y2);
    }

    /// Draw the title, centered above the plot rectangle
    pub fn draw_title(&self, painter: &mut Painter<'_>) {
        let Some(title) = self.title.as_deref() else {
            return;
        };
        let plot = self.plot;
        let anchor = pt(
            plot.left() + plot.width() / 2,
            plot.top() - defaults::TIC_LABEL_MARGIN,
        );
        painter.set_pen(Pen::new(painter.style().foreground, 1.0));
        painter.draw_text(
            title,
            anchor,
            (Align::Center, VerAlign::Bottom),
            0.0,
            self.text_style(),
        );
    }
}

#[cfg(test)]
mod tests {
    use crate::frame::tests::{frame_400x300, record};
    use crate::painter::tests::Op;

    fn vertical_strokes_at(ops: &[Op], x: f32) -> usize {
        ops.iter()
            .filter(|op| matches!(op, Op::Stroke { bounds, .. } if bounds[0] == x && bounds[2] == x))
            .count()
    }

    #[test]
    fn zero_lines_when_straddling() {
        let mut frame = frame_400x300();
        frame.set_x_tics(false);
        frame.set_y_tics(false);
        let plot = frame.plot_rect();
        let x0 = frame.x_coord(0.0).unwrap() as f32;

        let rec = record(&frame);
        // border, then the two zero lines
        assert_eq!(rec.strokes().count(), 3);
        assert_eq!(vertical_strokes_at(&rec.ops, x0), 1);

        frame.set_x_range(1.0, 5.0).unwrap();
        frame.set_y_range(-3.0, 0.0).unwrap();
        let rec = record(&frame);
        assert_eq!(rec.strokes().count(), 1);
        assert_eq!(frame.plot_rect(), plot);

        frame.set_border(false);
        frame.set_x_range(-1.0, 5.0).unwrap();
        let rec = record(&frame);
        assert_eq!(rec.strokes().count(), 1);

        frame.set_zero_lines(false);
        let rec = record(&frame);
        assert_eq!(rec.strokes().count(), 0);
    }

    #[test]
    fn x_tics_on_both_sides() {
        let mut frame = frame_400x300();
        frame.set_y_tics(false);
        frame.set_border(false);
        frame.set_zero_lines(false);
        frame.set_x_range(-2.0 * std::f64::consts::PI, 2.0 * std::f64::consts::PI).unwrap();

        let rec = record(&frame);
        // tics at -4, 0, 4, marked on top and bottom
        assert_eq!(rec.strokes().count(), 6);
        for v in [-4.0, 0.0, 4.0] {
            let x = frame.x_coord(v).unwrap() as f32;
            assert_eq!(vertical_strokes_at(&rec.ops, x), 2);
        }
    }

    #[test]
    fn y2_tics_on_the_right_only() {
        let mut frame = frame_400x300();
        frame.set_x_tics(false);
        frame.set_y_tics(false);
        frame.set_border(false);
        frame.set_zero_lines(false);
        frame.set_y2_tics(true);
        frame.set_y2_range(-30.0, 30.0).unwrap();

        let rec = record(&frame);
        let right = frame.plot_rect().right() as f32;
        // spacing 20: -20, 0, 20
        assert_eq!(rec.strokes().count(), 3);
        for op in rec.strokes() {
            let Op::Stroke { bounds, .. } = op else {
                unreachable!()
            };
            assert_eq!(bounds[2], right);
        }
    }

    #[test]
    fn grids_are_dashed_and_span_the_plot() {
        let mut frame = frame_400x300();
        frame.set_x_tics(false);
        frame.set_y_tics(false);
        frame.set_border(false);
        frame.set_zero_lines(false);
        frame.set_y_grid(true);
        let plot = frame.plot_rect();

        let rec = record(&frame);
        // -10, -5, 0, 5, 10
        assert_eq!(rec.strokes().count(), 5);
        for op in rec.strokes() {
            let Op::Stroke { bounds, dash, width, .. } = op else {
                unreachable!()
            };
            assert_eq!(bounds[0], plot.left() as f32);
            assert_eq!(bounds[2], plot.right() as f32);
            // 6 and 10 pixels for a 0.5 pixel wide line
            assert_eq!(dash.as_deref(), Some(&[12.0, 20.0][..]));
            assert_eq!(*width, 0.5);
        }
    }
}
