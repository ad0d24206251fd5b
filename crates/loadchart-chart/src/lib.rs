//! loadchart-chart: Pure chart model and export layout (sans-IO).
//!
//! Owns the editable load chart state (route name, edit flag, four
//! quadrants of four location slots each), the shared color palette,
//! and the export layout expressed as a display list of draw
//! operations.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! state and returns structured data. All browser interaction
//! (rendering, rasterization, downloads) lives in `loadchart-io`.

pub mod layout;
pub mod state;
pub mod theme;

pub use layout::{DrawOp, EXPORT_HEIGHT, EXPORT_SCALE, EXPORT_WIDTH, chart_draw_ops};
pub use state::{ChartError, ChartState, Quadrant, SLOTS_PER_QUADRANT, slot_is_blank};
pub use theme::Color;
