//! One-shot chart export: paint, encode, download.

use loadchart_chart::{ChartState, chart_draw_ops};

use crate::canvas::{self, CanvasError};
use crate::download::{self, DownloadError};
use crate::raster::{self, RasterError};

/// MIME type of the export artifact.
const JPEG_MIME: &str = "image/jpeg";

/// Errors from any stage of the export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Canvas creation or painting failed.
    #[error(transparent)]
    Canvas(#[from] CanvasError),

    /// JPEG encoding failed.
    #[error(transparent)]
    Raster(#[from] RasterError),

    /// Triggering the browser download failed.
    #[error(transparent)]
    Download(#[from] DownloadError),
}

/// Rasterize the chart for `state` and offer it as a JPEG download.
///
/// Renders the display list onto a detached canvas at the export pixel
/// density, encodes the pixels as a maximum-quality JPEG, and triggers
/// a download named [`ChartState::export_filename`].  Each call is
/// independent: concurrent exports each produce their own download.
///
/// # Errors
///
/// Returns [`ExportError`] when canvas access, encoding, or the
/// download trigger fails.  Callers decide whether to surface it; the
/// app only logs it to the console.
pub fn export_chart_jpeg(state: &ChartState) -> Result<(), ExportError> {
    let ops = chart_draw_ops(state);

    let (element, ctx) = canvas::create_export_canvas()?;
    canvas::paint(&ctx, &ops)?;
    let rgba = canvas::read_rgba(&element, &ctx)?;

    let jpeg = raster::rgba_to_jpeg(&rgba, element.width(), element.height())?;
    download::trigger_download(&jpeg, &state.export_filename(), JPEG_MIME)?;
    Ok(())
}
