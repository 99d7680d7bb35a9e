//! Error types shared by the containers and the plotting dispatcher.

use thiserror::Error;

/// Errors raised while mapping coordinates onto a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// A coordinate was not strictly less than the extent of its axis.
    #[error("index {index} out of range for axis {axis} with extent {extent}")]
    OutOfRange {
        axis: usize,
        index: usize,
        extent: usize,
    },
    /// `rows * cols` does not fit in `usize`.
    #[error("shape {rows}x{cols} exceeds usize elements")]
    TooLarge { rows: usize, cols: usize },
}

/// Errors raised by chart-type plot operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlotError {
    /// Fewer data values than `num_series * series_length`.
    #[error("{chart} chart needs {needed} values ({num_series} series x {series_length}), got {got}")]
    InsufficientData {
        chart: &'static str,
        needed: usize,
        got: usize,
        num_series: usize,
        series_length: usize,
    },
    /// `num_series * series_length` does not fit in `usize`.
    #[error("{chart} chart params overflow: {num_series} series x {series_length}")]
    ParamsOverflow {
        chart: &'static str,
        num_series: usize,
        series_length: usize,
    },
    /// The output image has no pixels.
    #[error("{chart} chart output image is empty ({rows}x{cols})")]
    EmptyOutput {
        chart: &'static str,
        rows: usize,
        cols: usize,
    },
}
