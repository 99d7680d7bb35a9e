//! Plot dispatcher holding the shared appearance options.

use crate::appearance::AppearanceOptions;
use crate::array::Image;
use crate::chart::{Bar, ChartType, Line, ParamsOf, PlotRequest, Scatter};
use crate::element::{Element, type_name};
use crate::error::PlotError;
use crate::shape::Shape2;
use log::debug;

/// Issues plot requests with one set of [`AppearanceOptions`].
///
/// ```
/// use pjplot::{Colour, Line, PlotFactory, SeriesParams, StaticShape2};
///
/// let mut factory = PlotFactory::default();
/// factory.appearance_options_mut().set_background_colour(Colour::Black);
/// let data = [0.0f64; 10];
/// let img = factory
///     .get_plot::<Line, _, _>(&data, &SeriesParams::new(2, 5), StaticShape2::<8, 8>)
///     .unwrap();
/// assert_eq!((img.rows(), img.cols()), (8, 8));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlotFactory {
    appearance: AppearanceOptions,
}

impl PlotFactory {
    pub fn new(appearance: AppearanceOptions) -> Self {
        Self { appearance }
    }

    pub fn appearance_options(&self) -> &AppearanceOptions {
        &self.appearance
    }

    /// Options used by subsequent plots; tune between calls.
    pub fn appearance_options_mut(&mut self) -> &mut AppearanceOptions {
        &mut self.appearance
    }

    /// Plot `data` as chart `C` into a new image of `shape`.
    pub fn get_plot<C: ChartType, T: Element, S: Shape2>(
        &self,
        data: &[T],
        params: &ParamsOf<C>,
        shape: S,
    ) -> Result<Image<S>, PlotError> {
        debug!(
            "plot {} of {} x {} into {}x{}",
            C::KIND,
            data.len(),
            type_name::<T>(),
            shape.rows(),
            shape.cols()
        );
        C::plot(data, params, &self.appearance, shape)
    }

    /// Plot `data` as chart `C` into an existing image.
    pub fn get_plot_into<C: ChartType, T: Element, S: Shape2>(
        &self,
        data: &[T],
        params: &ParamsOf<C>,
        out: &mut Image<S>,
    ) -> Result<(), PlotError> {
        debug!(
            "plot {} of {} x {} into existing {}x{}",
            C::KIND,
            data.len(),
            type_name::<T>(),
            out.rows(),
            out.cols()
        );
        C::plot_into(data, params, &self.appearance, out)
    }

    /// Plot a chart chosen at runtime.
    pub fn plot_request<T: Element, S: Shape2>(
        &self,
        data: &[T],
        request: &PlotRequest,
        shape: S,
    ) -> Result<Image<S>, PlotError> {
        match request {
            PlotRequest::Line(p) => self.get_plot::<Line, T, S>(data, p, shape),
            PlotRequest::Bar(p) => self.get_plot::<Bar, T, S>(data, p, shape),
            PlotRequest::Scatter(p) => self.get_plot::<Scatter, T, S>(data, p, shape),
        }
    }

    pub fn plot_request_into<T: Element, S: Shape2>(
        &self,
        data: &[T],
        request: &PlotRequest,
        out: &mut Image<S>,
    ) -> Result<(), PlotError> {
        match request {
            PlotRequest::Line(p) => self.get_plot_into::<Line, T, S>(data, p, out),
            PlotRequest::Bar(p) => self.get_plot_into::<Bar, T, S>(data, p, out),
            PlotRequest::Scatter(p) => self.get_plot_into::<Scatter, T, S>(data, p, out),
        }
    }
}
