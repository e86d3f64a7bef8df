//! Coordinate mapping between data space and pixel space, and tic spacing.
//!
//! Mapping is linear and unclamped: values outside of the axis range land
//! outside of the pixel extent, and drawing relies on clipping.

use crate::Axis;

/// Quotients closer than this to an integer are considered integers
/// before rounding up, so that `0.3 / 0.1` does not become 4.
const SNAP_EPS: f64 = 1e-9;

/// Map `value` to a pixel of the extent `[origin, origin + extent]`.
///
/// The range minimum maps to `origin` (or to `origin + extent` when `invert` is set,
/// which is the case for vertical axes since pixel rows grow downwards).
/// The result is rounded to the nearest pixel.
/// Returns `None` if the value is NaN or maps beyond the `i32` range.
pub fn value_to_pixel(axis: &Axis, value: f64, origin: i32, extent: i32, invert: bool) -> Option<i32> {
    let mut ratio = (value - axis.min()) / axis.span();
    if invert {
        ratio = 1.0 - ratio;
    }
    let px = (origin as f64 + extent as f64 * ratio).round();
    if px.is_finite() && px >= i32::MIN as f64 && px <= i32::MAX as f64 {
        Some(px as i32)
    } else {
        None
    }
}

/// Inverse of [`value_to_pixel`], without rounding.
///
/// Returns NaN for an empty extent.
pub fn pixel_to_value(axis: &Axis, pixel: f64, origin: i32, extent: i32, invert: bool) -> f64 {
    if extent == 0 {
        return f64::NAN;
    }
    let mut ratio = (pixel - origin as f64) / extent as f64;
    if invert {
        ratio = 1.0 - ratio;
    }
    axis.min() + ratio * axis.span()
}

/// Tic spacing for the axis: the raw spacing `span / tics_num`
/// rounded up to the nearest `d × 10^n` with `d` in `1..=9`.
pub fn nice_tic_spacing(axis: &Axis) -> f64 {
    let raw = axis.span() / axis.tics_num() as f64;
    let mag = 10f64.powi(raw.log10().floor() as i32);
    snap_ceil(raw / mag) * mag
}

/// The `i`-th multiple of `spacing` at or above the range minimum
pub fn tic_value(axis: &Axis, spacing: f64, i: u32) -> f64 {
    snap_ceil(axis.min() / spacing + i as f64) * spacing
}

fn snap_ceil(q: f64) -> f64 {
    let r = q.round();
    if (q - r).abs() < SNAP_EPS { r } else { q.ceil() }
}
