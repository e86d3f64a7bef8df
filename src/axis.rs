//! Axis state: range, tic count, label and flags

use crate::Error;
use crate::style::defaults;

/// One dimension of a frame.
///
/// The range is always valid: `min < max`, and both bounds as well as the
/// span are finite.
/// Setters that would break this invariant fail and leave the axis unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    min: f64,
    max: f64,
    tics_num: u32,
    label: Option<String>,
    tics: bool,
    grid: bool,
}

impl Axis {
    /// Build an axis with the given range and tic count, without label.
    /// Tics are enabled, grid is disabled.
    pub fn new(min: f64, max: f64, tics_num: u32) -> Result<Self, Error> {
        check_range(min, max)?;
        check_tics_num(tics_num)?;
        Ok(Axis {
            min,
            max,
            tics_num,
            label: None,
            tics: true,
            grid: false,
        })
    }

    /// Lower bound of the range
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound of the range
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Length of the range, always strictly positive
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Check whether the range contains zero strictly inside
    pub fn straddles_zero(&self) -> bool {
        self.min < 0.0 && 0.0 < self.max
    }

    /// Desired number of tic intervals
    pub fn tics_num(&self) -> u32 {
        self.tics_num
    }

    /// The label, if one is set
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Whether tics are drawn
    pub fn has_tics(&self) -> bool {
        self.tics
    }

    /// Whether grid lines are drawn
    pub fn has_grid(&self) -> bool {
        self.grid
    }

    /// Whether the label is drawn
    pub fn has_label(&self) -> bool {
        self.label.is_some()
    }

    /// Set the range. Fails unless `min < max` and both are finite.
    pub fn set_range(&mut self, min: f64, max: f64) -> Result<(), Error> {
        check_range(min, max)?;
        self.min = min;
        self.max = max;
        Ok(())
    }

    /// Set the desired number of tic intervals.
    /// Zero and counts above [`defaults::MAX_TICS_NUM`] are rejected.
    pub fn set_tics_num(&mut self, tics_num: u32) -> Result<(), Error> {
        check_tics_num(tics_num)?;
        self.tics_num = tics_num;
        Ok(())
    }

    /// Set the label. An empty text removes it.
    /// Longer texts are truncated to [`defaults::LABEL_MAX_LEN`] characters.
    pub fn set_label(&mut self, label: &str) {
        self.label = truncate_label(label);
    }

    /// Enable or disable tics
    pub fn set_tics(&mut self, tics: bool) {
        self.tics = tics;
    }

    /// Enable or disable grid lines
    pub fn set_grid(&mut self, grid: bool) {
        self.grid = grid;
    }

    /// Copy of the axis with tics enabled or disabled
    pub fn with_tics(self, tics: bool) -> Self {
        Axis { tics, ..self }
    }

    /// Copy of the axis with grid enabled or disabled
    pub fn with_grid(self, grid: bool) -> Self {
        Axis { grid, ..self }
    }
}

fn check_range(min: f64, max: f64) -> Result<(), Error> {
    // the span must be finite too, [-1e308, 1e308] overflows
    if min.is_finite() && max.is_finite() && min < max && (max - min).is_finite() {
        Ok(())
    } else {
        Err(Error::InvalidRange { min, max })
    }
}

fn check_tics_num(tics_num: u32) -> Result<(), Error> {
    if (1..=defaults::MAX_TICS_NUM).contains(&tics_num) {
        Ok(())
    } else {
        Err(Error::InvalidTicsNum(tics_num))
    }
}

/// Truncate a label or title to the maximum stored length.
/// Returns `None` for an empty text.
pub(crate) fn truncate_label(text: &str) -> Option<String> {
    if text.is_empty() {
        return None;
    }
    Some(text.chars().take(defaults::LABEL_MAX_LEN).collect())
}
