//! Tic generation and tic label formatting

use crate::Axis;
use crate::scale::{nice_tic_spacing, tic_value};

/// Tolerance, relative to the spacing, for a tic to be accepted on the range bounds
const BOUND_EPS: f64 = 1e-9;

/// Tics of an axis, with the spacing they were generated from
#[derive(Debug, Clone, PartialEq)]
pub struct Tics {
    /// Distance between two consecutive tics
    pub spacing: f64,
    /// Tic values, in ascending order
    pub values: Vec<f64>,
}

impl Tics {
    /// Generate the tics of `axis` with [`nice_tic_spacing`]
    pub fn locate(axis: &Axis) -> Self {
        let spacing = nice_tic_spacing(axis);
        Tics {
            spacing,
            values: tic_values(axis, spacing),
        }
    }

    /// Iterate over the tic values and their labels
    pub fn labeled(&self) -> impl Iterator<Item = (f64, String)> + '_ {
        self.values
            .iter()
            .map(|&v| (v, format_tic_label(v, self.spacing)))
    }
}

/// All multiples of `spacing` within the axis range, ascending.
///
/// When the range straddles zero, tics are walked outward from zero in both
/// directions, so that zero is always a tic. Otherwise they are walked upward
/// from the first multiple above the range minimum. Each walk stops at the first
/// value out of range, and never takes more than `tics_num + 1` steps per
/// direction (`tics_num + 2` values for the upward walk).
pub fn tic_values(axis: &Axis, spacing: f64) -> Vec<f64> {
    let tol = BOUND_EPS * spacing;
    let lo = axis.min() - tol;
    let hi = axis.max() + tol;
    let steps = axis.tics_num().saturating_add(1);

    let mut values = Vec::new();
    if axis.straddles_zero() {
        for i in (1..=steps).rev() {
            let v = -(i as f64) * spacing;
            if v >= lo {
                values.push(v);
            }
        }
        values.push(0.0);
        for i in 1..=steps {
            let v = i as f64 * spacing;
            if v > hi {
                break;
            }
            values.push(v);
        }
    } else {
        for i in 0..=steps {
            let v = tic_value(axis, spacing, i);
            if v > hi {
                break;
            }
            if v >= lo {
                values.push(v);
            }
        }
    }
    values
}

/// Number of decimals needed to print multiples of `spacing`
pub fn tic_decimals(spacing: f64) -> usize {
    let exp = spacing.log10().floor();
    if exp.is_finite() && exp < 0.0 {
        (-exp) as usize
    } else {
        0
    }
}

/// Format a tic value, snapped to its multiple of `spacing`.
/// Negative zero is printed as `0`.
pub fn format_tic_label(value: f64, spacing: f64) -> String {
    let snapped = (value / spacing).round() * spacing;
    let label = format!("{:.*}", tic_decimals(spacing), snapped);
    match label.strip_prefix('-') {
        Some(abs) if abs.bytes().all(|b| b == b'0' || b == b'.') => abs.to_string(),
        _ => label,
    }
}
