//! Load chart state: route name, edit flag, and quadrant location slots.
//!
//! The state is a plain value. Every mutation is expressed as a
//! `with_*` constructor that consumes the old state and returns a new
//! one, so previously rendered snapshots are never aliased.

use std::fmt;

/// Number of location slots in each quadrant.
pub const SLOTS_PER_QUADRANT: usize = 4;

/// Filename suffix appended to the route name on export.
pub const EXPORT_FILENAME_SUFFIX: &str = "_load_chart.jpg";

/// Fallback filename token when the route name is empty.
pub const DEFAULT_ROUTE_TOKEN: &str = "route";

/// One of the four fixed zones of the van's cargo area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// Front curb side.
    Q1,
    /// Front road side.
    Q2,
    /// Rear curb side.
    Q3,
    /// Rear road side, reserved for dangerous goods.
    Q4,
}

impl Quadrant {
    /// All quadrants in numbering order.
    pub const ALL: [Self; 4] = [Self::Q1, Self::Q2, Self::Q3, Self::Q4];

    /// Panel title shown in the form and in the exported chart.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Q1 => "Quadrant 1",
            Self::Q2 => "Quadrant 2",
            Self::Q3 => "Quadrant 3",
            Self::Q4 => "Quadrant 4 (Dangerous Goods Area)",
        }
    }

    /// Short label for the van figure zone markers.
    #[must_use]
    pub const fn short_label(self) -> &'static str {
        match self {
            Self::Q1 => "Q1",
            Self::Q2 => "Q2",
            Self::Q3 => "Q3",
            Self::Q4 => "Q4",
        }
    }

    /// Zero-based position in [`Quadrant::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Q1 => 0,
            Self::Q2 => 1,
            Self::Q3 => 2,
            Self::Q4 => 3,
        }
    }
}

impl fmt::Display for Quadrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Errors from chart state operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChartError {
    /// A slot index outside `0..SLOTS_PER_QUADRANT` was passed.
    #[error("slot index {index} out of range for {quadrant} (each quadrant has {SLOTS_PER_QUADRANT} slots)")]
    SlotOutOfRange {
        /// Quadrant the edit targeted.
        quadrant: Quadrant,
        /// Rejected slot index.
        index: usize,
    },
}

/// The four quadrants' location slots.
///
/// Fixed-size by construction: there are always exactly four quadrants
/// of exactly [`SLOTS_PER_QUADRANT`] slots, so no render-time padding
/// is ever needed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlotGrid([[String; SLOTS_PER_QUADRANT]; 4]);

impl SlotGrid {
    /// All slots for one quadrant, in slot order.
    #[must_use]
    pub const fn slots(&self, quadrant: Quadrant) -> &[String; SLOTS_PER_QUADRANT] {
        &self.0[quadrant.index()]
    }

    /// Text of one slot, or `None` when `index` is out of range.
    #[must_use]
    pub fn slot(&self, quadrant: Quadrant, index: usize) -> Option<&str> {
        self.0[quadrant.index()].get(index).map(String::as_str)
    }

    /// Replace one slot, leaving every other slot untouched.
    fn with_slot(
        mut self,
        quadrant: Quadrant,
        index: usize,
        text: String,
    ) -> Result<Self, ChartError> {
        let Some(slot) = self.0[quadrant.index()].get_mut(index) else {
            return Err(ChartError::SlotOutOfRange { quadrant, index });
        };
        *slot = text;
        Ok(self)
    }
}

/// Whether a slot should get the faint "empty" visual treatment.
///
/// A pure function of the text: blank means the trimmed text is empty.
/// This is computed on read and never stored, so it cannot drift from
/// the slot contents.
#[must_use]
pub fn slot_is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

/// The whole editable state of the load chart form.
///
/// Owned by the root UI component for its lifetime; created with
/// defaults at mount and dropped on navigation away. Nothing is
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartState {
    /// Driver-assigned identifier for the day's run. Free-form, kept
    /// verbatim (no trimming or validation).
    pub route_name: String,
    /// Whether the route name renders as an editable field (`true`)
    /// or as a clickable static label (`false`).
    pub editing_route: bool,
    locations: SlotGrid,
}

impl Default for ChartState {
    fn default() -> Self {
        Self {
            route_name: String::new(),
            editing_route: true,
            locations: SlotGrid::default(),
        }
    }
}

impl ChartState {
    /// The default state: empty route name, edit mode on, all sixteen
    /// slots empty. Alias of [`ChartState::default`] named for the
    /// "Clear All" action.
    #[must_use]
    pub fn reset() -> Self {
        Self::default()
    }

    /// Replace the route name verbatim.
    #[must_use]
    pub fn with_route_name(mut self, text: impl Into<String>) -> Self {
        self.route_name = text.into();
        self
    }

    /// Set the route-name field's edit/display mode.
    #[must_use]
    pub fn with_editing(mut self, editing: bool) -> Self {
        self.editing_route = editing;
        self
    }

    /// Replace the text of one location slot.
    ///
    /// Only slot `(quadrant, index)` changes; the other fifteen slots,
    /// the route name, and the edit flag are untouched.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::SlotOutOfRange`] when `index` is not in
    /// `0..SLOTS_PER_QUADRANT`.
    pub fn with_location(
        mut self,
        quadrant: Quadrant,
        index: usize,
        text: impl Into<String>,
    ) -> Result<Self, ChartError> {
        self.locations = self.locations.with_slot(quadrant, index, text.into())?;
        Ok(self)
    }

    /// All slots for one quadrant, in slot order.
    #[must_use]
    pub const fn slots(&self, quadrant: Quadrant) -> &[String; SLOTS_PER_QUADRANT] {
        self.locations.slots(quadrant)
    }

    /// Text of one slot, or `None` when `index` is out of range.
    #[must_use]
    pub fn location(&self, quadrant: Quadrant, index: usize) -> Option<&str> {
        self.locations.slot(quadrant, index)
    }

    /// Suggested filename for the exported JPEG.
    ///
    /// `<route_name>_load_chart.jpg`, falling back to the generic
    /// `route` token only when the route name is the empty string.
    /// The name is used verbatim -- no sanitization.
    #[must_use]
    pub fn export_filename(&self) -> String {
        let base = if self.route_name.is_empty() {
            DEFAULT_ROUTE_TOKEN
        } else {
            self.route_name.as_str()
        };
        format!("{base}{EXPORT_FILENAME_SUFFIX}")
    }
}
