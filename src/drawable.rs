//! User supplied drawing operations, run inside the plot rectangle of a frame

use std::fmt;

use crate::frame::{AxisId, Frame};
use crate::{ColorU8, Error, Painter};

/// Something that draws data in a frame.
///
/// [`Frame::draw`] calls it last, with the painter clipped to the plot rectangle
/// and the pen reset to the foreground color and the style line width.
/// Closures with the matching signature are drawables.
pub trait Drawable {
    /// Draw in `frame` with `painter`
    fn draw(&self, frame: &Frame, painter: &mut Painter<'_>) -> Result<(), Error>;
}

impl<F> Drawable for F
where
    F: Fn(&Frame, &mut Painter<'_>) -> Result<(), Error>,
{
    fn draw(&self, frame: &Frame, painter: &mut Painter<'_>) -> Result<(), Error> {
        self(frame, painter)
    }
}

/// A function of X, sampled over the X range
pub struct Function<F> {
    f: F,
    samples: usize,
}

impl<F> Function<F>
where
    F: Fn(f64) -> f64,
{
    /// Plot `f` with `samples` points
    pub fn new(f: F, samples: usize) -> Self {
        Function { f, samples }
    }
}

impl<F> Drawable for Function<F>
where
    F: Fn(f64) -> f64,
{
    fn draw(&self, frame: &Frame, painter: &mut Painter<'_>) -> Result<(), Error> {
        frame.plot_function(painter, &self.f, self.samples)
    }
}

impl<F> fmt::Debug for Function<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("samples", &self.samples)
            .finish_non_exhaustive()
    }
}

/// A parametric curve `(fx(t), fy(t))`, sampled over `[t_min, t_max)`
pub struct Parametric<FX, FY> {
    fx: FX,
    fy: FY,
    t: (f64, f64),
    samples: usize,
}

impl<FX, FY> Parametric<FX, FY>
where
    FX: Fn(f64) -> f64,
    FY: Fn(f64) -> f64,
{
    /// Plot the curve with `samples` points of parameter in `[t_min, t_max)`
    pub fn new(fx: FX, fy: FY, t_min: f64, t_max: f64, samples: usize) -> Self {
        Parametric {
            fx,
            fy,
            t: (t_min, t_max),
            samples,
        }
    }
}

impl<FX, FY> Drawable for Parametric<FX, FY>
where
    FX: Fn(f64) -> f64,
    FY: Fn(f64) -> f64,
{
    fn draw(&self, frame: &Frame, painter: &mut Painter<'_>) -> Result<(), Error> {
        frame.plot_parametric_function(painter, &self.fx, &self.fy, self.t.0, self.t.1, self.samples)
    }
}

impl<FX, FY> fmt::Debug for Parametric<FX, FY> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parametric")
            .field("t", &self.t)
            .field("samples", &self.samples)
            .finish_non_exhaustive()
    }
}

/// Data series, owned by the drawable
#[derive(Debug, Clone, PartialEq)]
pub enum Data {
    /// Y values, plotted against their index
    D1(Vec<f64>),
    /// X and Y values
    D2 {
        /// X values
        x: Vec<f64>,
        /// Y values
        y: Vec<f64>,
        /// Vertical axis: [`AxisId::Y`] or [`AxisId::Y2`]
        axis: AxisId,
    },
    /// Isolated points, drawn as filled circles
    Points {
        /// X values
        x: Vec<f64>,
        /// Y values
        y: Vec<f64>,
        /// Radius of the points, in pixels
        size: f32,
    },
}

impl Drawable for Data {
    fn draw(&self, frame: &Frame, painter: &mut Painter<'_>) -> Result<(), Error> {
        match self {
            Data::D1(y) => frame.plot_data_1d(painter, y),
            Data::D2 { x, y, axis: AxisId::Y2 } => frame.plot_data_2d_y2(painter, x, y),
            Data::D2 { x, y, .. } => frame.plot_data_2d(painter, x, y),
            Data::Points { x, y, size } => {
                if x.len() != y.len() {
                    return Err(Error::LengthMismatch {
                        x: x.len(),
                        y: y.len(),
                    });
                }
                for (&x, &y) in x.iter().zip(y) {
                    frame.draw_point(painter, x, y, *size);
                }
                Ok(())
            }
        }
    }
}

/// A drawable with its own pen color and width
#[derive(Debug)]
pub struct Styled<D> {
    inner: D,
    color: ColorU8,
    width: Option<f32>,
}

impl<D: Drawable> Styled<D> {
    /// Draw `inner` with `color`
    pub fn new(inner: D, color: ColorU8) -> Self {
        Styled {
            inner,
            color,
            width: None,
        }
    }

    /// Also set the line width
    pub fn with_width(self, width: f32) -> Self {
        Styled {
            width: Some(width),
            ..self
        }
    }
}

impl<D: Drawable> Drawable for Styled<D> {
    fn draw(&self, frame: &Frame, painter: &mut Painter<'_>) -> Result<(), Error> {
        let pen = painter.pen();
        painter.set_color(self.color);
        if let Some(width) = self.width {
            painter.set_line_width(width);
        }
        let res = self.inner.draw(frame, painter);
        painter.set_pen(pen);
        res
    }
}

/// Several drawables, drawn in order, each with a fresh pen.
///
/// All layers are drawn even if one fails. The first error is returned.
#[derive(Default)]
pub struct Layers(Vec<Box<dyn Drawable>>);

impl Layers {
    /// No layer
    pub fn new() -> Self {
        Layers(Vec::new())
    }

    /// Add a layer on top of the others
    pub fn with(mut self, layer: impl Drawable + 'static) -> Self {
        self.0.push(Box::new(layer));
        self
    }

    /// Add a layer on top of the others
    pub fn push(&mut self, layer: impl Drawable + 'static) {
        self.0.push(Box::new(layer));
    }

    /// Number of layers
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check whether there is no layer
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Layers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Layers").field(&self.0.len()).finish()
    }
}

impl Drawable for Layers {
    fn draw(&self, frame: &Frame, painter: &mut Painter<'_>) -> Result<(), Error> {
        let mut res = Ok(());
        for layer in &self.0 {
            painter.reset_pen();
            if let Err(err) = layer.draw(frame, painter) {
                if res.is_ok() {
                    res = Err(err);
                }
            }
        }
        res
    }
}
