//! Chart kinds and their parameter shapes.

use crate::outcome::{Failure, Outcome, failure};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Chart types supported by this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// Multi-series line chart.
    Line,
    /// Bar chart (grouped or stacked per sample).
    Bar,
    /// Scatter (markers only).
    Scatter,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Line, ChartKind::Bar, ChartKind::Scatter];

    pub const fn name(self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Scatter => "scatter",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartKind {
    type Err = Failure;

    fn from_str(s: &str) -> Outcome<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "line" => Ok(ChartKind::Line),
            "bar" => Ok(ChartKind::Bar),
            "scatter" => Ok(ChartKind::Scatter),
            other => failure(format!("unknown chart kind: {other}")),
        }
    }
}

/// Layout of the input data: `num_series` consecutive runs of `series_length` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeriesParams {
    pub num_series: usize,
    pub series_length: usize,
}

impl SeriesParams {
    pub const fn new(num_series: usize, series_length: usize) -> Self {
        Self {
            num_series,
            series_length,
        }
    }
}

/// Parameter types that describe a series layout.
pub trait SeriesGeometry {
    fn series(&self) -> SeriesParams;
}

impl SeriesGeometry for SeriesParams {
    fn series(&self) -> SeriesParams {
        *self
    }
}

/// How bars of different series share a sample position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BarLayout {
    /// Side by side (default).
    #[default]
    Grouped,
    /// On top of each other.
    Stacked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BarParams {
    #[serde(flatten)]
    pub series: SeriesParams,
    #[serde(default)]
    pub layout: BarLayout,
}

impl BarParams {
    /// Grouped bars.
    pub const fn new(num_series: usize, series_length: usize) -> Self {
        Self {
            series: SeriesParams::new(num_series, series_length),
            layout: BarLayout::Grouped,
        }
    }

    pub const fn with_layout(mut self, layout: BarLayout) -> Self {
        self.layout = layout;
        self
    }
}

impl SeriesGeometry for BarParams {
    fn series(&self) -> SeriesParams {
        self.series
    }
}

pub const DEFAULT_MARKER_SIZE: u32 = 6;

fn default_marker_size() -> u32 {
    DEFAULT_MARKER_SIZE
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScatterParams {
    #[serde(flatten)]
    pub series: SeriesParams,
    /// Marker radius in pixels.
    #[serde(default = "default_marker_size")]
    pub marker_size: u32,
}

impl ScatterParams {
    pub const fn new(num_series: usize, series_length: usize) -> Self {
        Self {
            series: SeriesParams::new(num_series, series_length),
            marker_size: DEFAULT_MARKER_SIZE,
        }
    }

    pub const fn with_marker_size(mut self, marker_size: u32) -> Self {
        self.marker_size = marker_size;
        self
    }
}

impl SeriesGeometry for ScatterParams {
    fn series(&self) -> SeriesParams {
        self.series
    }
}

/// A chart kind together with its params, for choosing the chart at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PlotRequest {
    Line(SeriesParams),
    Bar(BarParams),
    Scatter(ScatterParams),
}

impl PlotRequest {
    pub fn kind(&self) -> ChartKind {
        match self {
            PlotRequest::Line(_) => ChartKind::Line,
            PlotRequest::Bar(_) => ChartKind::Bar,
            PlotRequest::Scatter(_) => ChartKind::Scatter,
        }
    }

    pub fn series(&self) -> SeriesParams {
        match self {
            PlotRequest::Line(p) => p.series(),
            PlotRequest::Bar(p) => p.series(),
            PlotRequest::Scatter(p) => p.series(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_round_trip_through_from_str() {
        for kind in ChartKind::ALL {
            assert_eq!(kind.name().parse::<ChartKind>().unwrap(), kind);
        }
        assert!("pie".parse::<ChartKind>().is_err());
    }

    #[test]
    fn request_reports_kind_and_series() {
        let req = PlotRequest::Scatter(ScatterParams::new(2, 10).with_marker_size(3));
        assert_eq!(req.kind(), ChartKind::Scatter);
        assert_eq!(req.series(), SeriesParams::new(2, 10));
    }

    #[test]
    fn request_from_json_applies_defaults() {
        let req: PlotRequest =
            serde_json::from_str(r#"{"kind":"bar","num_series":3,"series_length":4}"#).unwrap();
        assert_eq!(req, PlotRequest::Bar(BarParams::new(3, 4)));

        let req: PlotRequest =
            serde_json::from_str(r#"{"kind":"scatter","num_series":1,"series_length":2}"#)
                .unwrap();
        match req {
            PlotRequest::Scatter(p) => assert_eq!(p.marker_size, DEFAULT_MARKER_SIZE),
            other => panic!("unexpected request {other:?}"),
        }
    }
}
