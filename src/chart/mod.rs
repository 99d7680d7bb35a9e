//! Chart-type strategies.
//!
//! Each chart type is a zero-sized tag implementing [`ChartType`]. The trait
//! ties the tag to its parameter shape (`ChartType::Params`) and to the plot
//! operation that turns a data slice into an [`Image`]. The set of tags is
//! closed: [`Line`], [`Bar`] and [`Scatter`].
//!
//! Plot operations validate their inputs, then populate every pixel of the
//! output. Series drawing is not done here; pixels carry the background colour.

pub mod types;

pub use types::{
    BarLayout, BarParams, ChartKind, DEFAULT_MARKER_SIZE, PlotRequest, ScatterParams,
    SeriesGeometry, SeriesParams,
};

use crate::appearance::AppearanceOptions;
use crate::array::Image;
use crate::element::Element;
use crate::error::PlotError;
use crate::shape::Shape2;
use log::trace;
use std::fmt::Debug;

mod sealed {
    pub trait Sealed {}
}

/// A chart algorithm with its own parameter type.
pub trait ChartType: sealed::Sealed {
    const KIND: ChartKind;

    type Params: SeriesGeometry + Clone + Debug;

    /// Render into a caller-owned image without allocating.
    fn plot_into<T: Element, S: Shape2>(
        data: &[T],
        params: &Self::Params,
        appearance: &AppearanceOptions,
        out: &mut Image<S>,
    ) -> Result<(), PlotError>;

    /// Allocate an image of `shape` and render into it.
    fn plot<T: Element, S: Shape2>(
        data: &[T],
        params: &Self::Params,
        appearance: &AppearanceOptions,
        shape: S,
    ) -> Result<Image<S>, PlotError> {
        let mut image = Image::new(shape);
        Self::plot_into(data, params, appearance, &mut image)?;
        Ok(image)
    }
}

/// Parameter type of chart type `C`.
pub type ParamsOf<C> = <C as ChartType>::Params;

/// Line chart tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Line;

/// Bar chart tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bar;

/// Scatter chart tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scatter;

impl sealed::Sealed for Line {}
impl sealed::Sealed for Bar {}
impl sealed::Sealed for Scatter {}

impl ChartType for Line {
    const KIND: ChartKind = ChartKind::Line;
    type Params = SeriesParams;

    fn plot_into<T: Element, S: Shape2>(
        data: &[T],
        params: &SeriesParams,
        appearance: &AppearanceOptions,
        out: &mut Image<S>,
    ) -> Result<(), PlotError> {
        validate(Self::KIND, data.len(), params.series(), out)?;
        trace!("line: {} series of {}", params.num_series, params.series_length);
        paint_background(out, appearance);
        Ok(())
    }
}

impl ChartType for Bar {
    const KIND: ChartKind = ChartKind::Bar;
    type Params = BarParams;

    fn plot_into<T: Element, S: Shape2>(
        data: &[T],
        params: &BarParams,
        appearance: &AppearanceOptions,
        out: &mut Image<S>,
    ) -> Result<(), PlotError> {
        validate(Self::KIND, data.len(), params.series(), out)?;
        trace!("bar: {:?}, layout {:?}", params.series, params.layout);
        paint_background(out, appearance);
        Ok(())
    }
}

impl ChartType for Scatter {
    const KIND: ChartKind = ChartKind::Scatter;
    type Params = ScatterParams;

    fn plot_into<T: Element, S: Shape2>(
        data: &[T],
        params: &ScatterParams,
        appearance: &AppearanceOptions,
        out: &mut Image<S>,
    ) -> Result<(), PlotError> {
        validate(Self::KIND, data.len(), params.series(), out)?;
        trace!("scatter: {:?}, marker {}px", params.series, params.marker_size);
        paint_background(out, appearance);
        Ok(())
    }
}

/// Data must hold every series; the output must have at least one pixel.
fn validate<S: Shape2>(
    kind: ChartKind,
    got: usize,
    series: SeriesParams,
    out: &Image<S>,
) -> Result<(), PlotError> {
    let SeriesParams {
        num_series,
        series_length,
    } = series;
    let needed = num_series
        .checked_mul(series_length)
        .ok_or(PlotError::ParamsOverflow {
            chart: kind.name(),
            num_series,
            series_length,
        })?;
    if got < needed {
        return Err(PlotError::InsufficientData {
            chart: kind.name(),
            needed,
            got,
            num_series,
            series_length,
        });
    }
    if out.element_count() == 0 {
        return Err(PlotError::EmptyOutput {
            chart: kind.name(),
            rows: out.rows(),
            cols: out.cols(),
        });
    }
    Ok(())
}

fn paint_background<S: Shape2>(out: &mut Image<S>, appearance: &AppearanceOptions) {
    out.fill(appearance.get_background_colour().to_rgba());
}
