use crate::frame::{AxisId, Frame};
use crate::geom::Point;
use crate::{Error, Painter};

/// Data plotting and data driven ranges.
///
/// Plots use the current pen of the painter. Samples that do not map to a pixel
/// (NaN or infinite values) break polylines.
impl Frame {
    /// Fill a circle of radius `size` pixels at `(x, y)`.
    /// Nothing is drawn if a coordinate does not map to a pixel.
    pub fn draw_point(&self, painter: &mut Painter<'_>, x: f64, y: f64, size: f32) {
        if let Some(p) = self.point(x, y, AxisId::Y) {
            painter.circle(p, size);
        }
    }

    /// Stroke the segment from `(x0, y0)` to `(x1, y1)`.
    /// Nothing is drawn if a coordinate does not map to a pixel.
    pub fn draw_line(&self, painter: &mut Painter<'_>, x0: f64, y0: f64, x1: f64, y1: f64) {
        if let (Some(p0), Some(p1)) = (self.point(x0, y0, AxisId::Y), self.point(x1, y1, AxisId::Y)) {
            painter.line(p0, p1);
        }
    }

    /// Plot `data` against its indices
    pub fn plot_data_1d(&self, painter: &mut Painter<'_>, data: &[f64]) -> Result<(), Error> {
        let samples = data.iter().enumerate().map(|(i, &y)| (i as f64, y));
        self.stroke_series(painter, samples, AxisId::Y);
        Ok(())
    }

    /// Plot `y` against `x`, in input order
    pub fn plot_data_2d(&self, painter: &mut Painter<'_>, x: &[f64], y: &[f64]) -> Result<(), Error> {
        check_lengths(x, y)?;
        self.stroke_series(painter, x.iter().copied().zip(y.iter().copied()), AxisId::Y);
        Ok(())
    }

    /// Plot `y` against `x`, with `y` on the secondary vertical axis
    pub fn plot_data_2d_y2(&self, painter: &mut Painter<'_>, x: &[f64], y: &[f64]) -> Result<(), Error> {
        check_lengths(x, y)?;
        self.stroke_series(painter, x.iter().copied().zip(y.iter().copied()), AxisId::Y2);
        Ok(())
    }

    /// Plot `f` sampled at `samples` points of the X range.
    ///
    /// Sample `i` is at `x_min + (x_max - x_min) * i / samples`, so that
    /// `x_max` itself is not sampled.
    pub fn plot_function<F>(&self, painter: &mut Painter<'_>, f: F, samples: usize) -> Result<(), Error>
    where
        F: Fn(f64) -> f64,
    {
        let (min, max) = (self.x.min(), self.x.max());
        self.plot_parametric_function(painter, |t| t, f, min, max, samples)
    }

    /// Plot the curve `(fx(t), fy(t))` sampled at `samples` values of `t` in `[t_min, t_max)`
    pub fn plot_parametric_function<FX, FY>(
        &self,
        painter: &mut Painter<'_>,
        fx: FX,
        fy: FY,
        t_min: f64,
        t_max: f64,
        samples: usize,
    ) -> Result<(), Error>
    where
        FX: Fn(f64) -> f64,
        FY: Fn(f64) -> f64,
    {
        if samples < 2 {
            return Err(Error::InvalidSampleCount(samples));
        }
        let mut xs = Vec::new();
        let mut ys = Vec::new();
        xs.try_reserve_exact(samples)?;
        ys.try_reserve_exact(samples)?;
        for i in 0..samples {
            let t = t_min + (t_max - t_min) * i as f64 / samples as f64;
            xs.push(fx(t));
            ys.push(fy(t));
        }
        self.plot_data_2d(painter, &xs, &ys)
    }

    /// Set the X range to the indices of `data` and the Y range to its extent.
    ///
    /// NaN values are ignored. A range that would be empty leaves its axis unchanged.
    pub fn set_range_by_data_1d(&mut self, data: &[f64]) -> Result<(), Error> {
        if data.is_empty() {
            return Err(Error::EmptyData);
        }
        self.set_range_if_valid(AxisId::X, Some((0.0, (data.len() - 1) as f64)));
        self.set_range_if_valid(AxisId::Y, data_extent(data));
        Ok(())
    }

    /// Set the X and Y ranges to the extent of the data.
    ///
    /// NaN values are ignored. A range that would be empty leaves its axis unchanged.
    pub fn set_range_by_data_2d(&mut self, x: &[f64], y: &[f64]) -> Result<(), Error> {
        check_lengths(x, y)?;
        if x.is_empty() {
            return Err(Error::EmptyData);
        }
        self.set_range_if_valid(AxisId::X, data_extent(x));
        self.set_range_if_valid(AxisId::Y, data_extent(y));
        Ok(())
    }

    fn set_range_if_valid(&mut self, id: AxisId, extent: Option<(f64, f64)>) {
        match extent {
            Some((min, max)) if min < max => {
                if let Err(err) = self.set_range(id, min, max) {
                    log::debug!("{:?} range left unchanged: {}", id, err);
                }
            }
            _ => log::debug!("{:?} range left unchanged: degenerate data extent {:?}", id, extent),
        }
    }

    fn stroke_series<I>(&self, painter: &mut Painter<'_>, samples: I, y_axis: AxisId)
    where
        I: Iterator<Item = (f64, f64)>,
    {
        let mut run: Vec<Point> = Vec::new();
        for (x, y) in samples {
            match self.point(x, y, y_axis) {
                Some(p) => run.push(p),
                None => {
                    painter.polyline(&run);
                    run.clear();
                }
            }
        }
        painter.polyline(&run);
    }
}

fn check_lengths(x: &[f64], y: &[f64]) -> Result<(), Error> {
    if x.len() != y.len() {
        return Err(Error::LengthMismatch {
            x: x.len(),
            y: y.len(),
        });
    }
    Ok(())
}

/// Smallest and largest finite values of `data`
fn data_extent(data: &[f64]) -> Option<(f64, f64)> {
    data.iter()
        .copied()
        .filter(|v| v.is_finite())
        .fold(None, |ext, v| match ext {
            None => Some((v, v)),
            Some((min, max)) => Some((f64::min(min, v), f64::max(max, v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fontdb;
    use crate::frame::tests::frame_400x300;
    use crate::painter::tests::{Op, Recorder};

    fn record<F>(frame: &Frame, f: F) -> Recorder
    where
        F: FnOnce(&Frame, &mut Painter<'_>),
    {
        let mut rec = Recorder::default();
        let db = fontdb::Database::new();
        let style = crate::Style::default();
        {
            let mut painter = Painter::new(&mut rec, &db, &style);
            f(frame, &mut painter);
        }
        rec
    }

    #[test]
    fn range_by_data_1d() {
        let mut frame = frame_400x300();
        frame.set_range_by_data_1d(&[-5.0, -3.0, -1.0, 2.0, 0.0, -4.0]).unwrap();
        assert_eq!((frame.x_axis().min(), frame.x_axis().max()), (0.0, 5.0));
        assert_eq!((frame.y_axis().min(), frame.y_axis().max()), (-5.0, 2.0));
    }

    #[test]
    fn range_by_data_ignores_nan_and_degenerate() {
        let mut frame = frame_400x300();
        frame.set_range_by_data_1d(&[3.0, f64::NAN, 1.0]).unwrap();
        assert_eq!((frame.y_axis().min(), frame.y_axis().max()), (1.0, 3.0));

        // single sample: both extents are degenerate
        frame.set_range_by_data_1d(&[7.0]).unwrap();
        assert_eq!((frame.x_axis().min(), frame.x_axis().max()), (0.0, 2.0));
        assert_eq!((frame.y_axis().min(), frame.y_axis().max()), (1.0, 3.0));

        frame.set_range_by_data_2d(&[1.0, 1.0], &[f64::NAN, f64::NAN]).unwrap();
        assert_eq!((frame.x_axis().min(), frame.x_axis().max()), (0.0, 2.0));
        assert_eq!((frame.y_axis().min(), frame.y_axis().max()), (1.0, 3.0));
    }

    #[test]
    fn range_by_data_with_overflowing_span() {
        let mut frame = frame_400x300();
        frame.set_range_by_data_2d(&[-1e308, 0.0, 1e308], &[1.0, 2.0, 4.0]).unwrap();
        assert_eq!((frame.x_axis().min(), frame.x_axis().max()), (-10.0, 10.0));
        assert_eq!((frame.y_axis().min(), frame.y_axis().max()), (1.0, 4.0));
        assert!(frame.x_coord(10.0).is_some());
    }

    #[test]
    fn range_by_data_errors() {
        let mut frame = frame_400x300();
        assert!(matches!(frame.set_range_by_data_1d(&[]), Err(Error::EmptyData)));
        assert!(matches!(frame.set_range_by_data_2d(&[], &[]), Err(Error::EmptyData)));
        assert!(matches!(
            frame.set_range_by_data_2d(&[1.0, 2.0], &[1.0]),
            Err(Error::LengthMismatch { x: 2, y: 1 })
        ));
    }

    #[test]
    fn range_by_data_2d() {
        let mut frame = frame_400x300();
        frame
            .set_range_by_data_2d(&[0.4667, 0.4682, 0.47], &[-30.0, 12.0, 30.0])
            .unwrap();
        assert_eq!((frame.x_axis().min(), frame.x_axis().max()), (0.4667, 0.47));
        assert_eq!((frame.y_axis().min(), frame.y_axis().max()), (-30.0, 30.0));
    }

    #[test]
    fn polyline_breaks_on_nan() {
        let frame = frame_400x300();
        let rec = record(&frame, |frame, p| {
            frame.plot_data_1d(p, &[0.0, 1.0, f64::NAN, 3.0, 4.0, 5.0]).unwrap();
        });
        assert_eq!(rec.strokes().count(), 2);

        // an isolated sample between two gaps draws nothing
        let rec = record(&frame, |frame, p| {
            frame.plot_data_1d(p, &[f64::NAN, 1.0, f64::NAN]).unwrap();
        });
        assert_eq!(rec.strokes().count(), 0);
    }

    #[test]
    fn out_of_range_data_is_drawn_unclamped() {
        let frame = frame_400x300();
        let rec = record(&frame, |frame, p| {
            frame.plot_data_2d(p, &[0.0, 20.0], &[0.0, 0.0]).unwrap();
        });
        let Op::Stroke { bounds, .. } = &rec.ops[0] else {
            panic!("unexpected {:?}", rec.ops);
        };
        assert!(bounds[2] > frame.plot_rect().right() as f32);
    }

    #[test]
    fn y2_series_uses_secondary_axis() {
        let mut frame = frame_400x300();
        frame.set_y2_range(0.0, 100.0).unwrap();
        let rec = record(&frame, |frame, p| {
            frame.plot_data_2d_y2(p, &[-10.0, 10.0], &[100.0, 100.0]).unwrap();
        });
        let Op::Stroke { bounds, .. } = &rec.ops[0] else {
            panic!("unexpected {:?}", rec.ops);
        };
        assert_eq!(bounds[1], frame.plot_rect().top() as f32);
        assert_eq!(bounds[3], frame.plot_rect().top() as f32);
    }

    #[test]
    fn function_sampling() {
        let frame = frame_400x300();
        let rec = record(&frame, |frame, p| {
            assert!(matches!(
                frame.plot_function(p, f64::sin, 1),
                Err(Error::InvalidSampleCount(1))
            ));
            frame.plot_function(p, |x| x / 2.0, 20).unwrap();
        });
        let Op::Stroke { bounds, .. } = &rec.ops[0] else {
            panic!("unexpected {:?}", rec.ops);
        };
        // [-10, 10) with 20 samples: the last sample is at 9
        assert_eq!(bounds[0], frame.x_coord(-10.0).unwrap() as f32);
        assert_eq!(bounds[2], frame.x_coord(9.0).unwrap() as f32);
        assert_eq!(rec.ops.len(), 1);
    }

    #[test]
    fn points_and_lines() {
        let frame = frame_400x300();
        let rec = record(&frame, |frame, p| {
            frame.draw_point(p, 0.0, 0.0, 2.0);
            frame.draw_point(p, f64::NAN, 0.0, 2.0);
            frame.draw_line(p, -5.0, -5.0, 5.0, 5.0);
            frame.draw_line(p, -5.0, f64::INFINITY, 5.0, 5.0);
        });
        assert_eq!(rec.fills().count(), 1);
        assert_eq!(rec.strokes().count(), 1);
    }
}
