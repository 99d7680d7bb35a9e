//! pjplot
//!
//! Data model for a small charting library: shape-generic arrays and images,
//! validated appearance options, and a typed dispatcher for chart algorithms.
//!
//! ### Features
//! - Static (`StaticShape2<R, C>`) or dynamic (`DynShape2`) shapes; static shapes keep
//!   their elements inline, dynamic shapes on the heap
//! - A closed set of element types (`i32`, `u8`, `u32`, `f32`, `f64`, `Rgba`)
//! - Line, bar and scatter chart types, each with its own params type
//! - Appearance options loadable from JSON
//!
//! ### Example
//! ```
//! use pjplot::{DynShape2, Line, Matrix, PlotFactory, SeriesParams};
//!
//! let mut m = Matrix::<f64, _>::new(DynShape2::new(600, 600));
//! m.iter_mut().for_each(|v| *v = 0.0);
//! assert_eq!(m[[300, 300]], 0.0);
//!
//! let factory = PlotFactory::default();
//! let params = SeriesParams::new(5, 1024);
//! let img = factory.get_plot::<Line, _, _>(m.data(), &params, DynShape2::new(60, 80))?;
//! assert_eq!(img.rows(), 60);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod appearance;
pub mod array;
pub mod chart;
pub mod element;
pub mod error;
pub mod factory;
pub mod outcome;
pub mod shape;
pub mod storage;

pub use appearance::{
    AppearanceOptions, Colour, ColourCode, INVALID_COLOUR_TYPE, colour_to_string,
    try_colour_to_string,
};
pub use array::{Image, Matrix, NdArray};
pub use chart::{
    Bar, BarLayout, BarParams, ChartKind, ChartType, Line, ParamsOf, PlotRequest, Scatter,
    ScatterParams, SeriesGeometry, SeriesParams,
};
pub use element::{Element, ElementKind, Rgba, type_name};
pub use error::{PlotError, ShapeError};
pub use factory::PlotFactory;
pub use outcome::{Failure, GetValue, Outcome, failure};
pub use shape::{DynShape1, DynShape2, Shape, Shape1, Shape2, StaticShape1, StaticShape2};
pub use storage::{HeapStorage, InlineStorage, Storage};
