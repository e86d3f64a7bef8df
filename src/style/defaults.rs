//! Default values used to build [`crate::Config`] and [`crate::Style`]

/// Family list of the label font
pub const FONT_FAMILY: &str = "Times New Roman, Liberation Serif, serif";
/// Label font size, in points
pub const FONT_SIZE: f32 = 12.0;
/// Resolution assumed to convert font sizes from points to pixels
pub const DPI: f32 = 96.0;
/// Space added to the font pixel size to get the baseline skip
pub const BASELINE_MARGIN: i32 = 4;

/// Initial axis range
pub const RANGE: (f64, f64) = (-10.0, 10.0);
/// Initial number of tic intervals
pub const TICS_NUM: u32 = 4;
/// Largest accepted number of tic intervals
pub const MAX_TICS_NUM: u32 = 1000;
/// Maximum number of characters kept in labels and titles
pub const LABEL_MAX_LEN: usize = 99;

/// Canvas size used by targets that are not given one
pub const CANVAS_WIDTH: u32 = 960;
/// Canvas size used by targets that are not given one
pub const CANVAS_HEIGHT: u32 = 640;
/// Space between the canvas edges and the frame grid
pub const CANVAS_PADDING: i32 = 4;

/// Length of the tic marks
pub const TIC_LENGTH: i32 = 6;
/// Space between the plot border and tic labels
pub const TIC_LABEL_MARGIN: i32 = 4;

/// Width of the plot border
pub const BORDER_LINE_WIDTH: f32 = 1.0;
/// Width of the zero axis lines
pub const AXIS_LINE_WIDTH: f32 = 1.0;
/// Width of tic marks
pub const TICS_LINE_WIDTH: f32 = 1.5;
/// Width of grid lines
pub const GRID_LINE_WIDTH: f32 = 0.5;
/// Initial pen width of drawables
pub const DATA_LINE_WIDTH: f32 = 1.0;
/// Dash and gap lengths of grid lines, in pixels
pub const GRID_DASH: [f32; 2] = [6.0, 10.0];
