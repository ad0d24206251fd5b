//! Dioxus UI components for the load chart form.
//!
//! Provides the route-name header, the quadrant input panels, the van
//! reference figure, and the Clear All / Export action bar.

mod actions;
mod header;
mod quadrant;
mod van;

pub use actions::ActionBar;
pub use header::RouteHeader;
pub use quadrant::QuadrantPanel;
pub use van::VanFigure;
