//! loadchart-io: Browser I/O and Dioxus component library.
//!
//! Handles canvas rasterization of the chart display list, JPEG
//! encoding, Blob downloads, and provides the form components for the
//! load chart web application.

pub mod canvas;
pub mod components;
pub mod download;
pub mod export;
pub mod raster;

pub use components::{ActionBar, QuadrantPanel, RouteHeader, VanFigure};
pub use export::{ExportError, export_chart_jpeg};
