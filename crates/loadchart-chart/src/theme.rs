//! Shared color palette for the form and the exported chart.
//!
//! The stylesheet and the canvas painter both derive from these
//! constants so the export matches what the driver sees on screen.

/// An opaque sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color(pub [u8; 3]);

/// Brand red: borders, titles, the route name.
pub const BRAND: Color = Color([0xD4, 0x05, 0x11]);

/// Brand yellow: the header band and blank-slot borders.
pub const ACCENT: Color = Color([0xFF, 0xD6, 0x00]);

/// Cream page/panel background, also the export background fill.
pub const CREAM: Color = Color([0xFF, 0xFD, 0xE7]);

/// White card and filled-slot background.
pub const CARD: Color = Color([0xFF, 0xFF, 0xFF]);

/// Dark text in filled slots.
pub const INK: Color = Color([0x22, 0x22, 0x22]);

/// Grey placeholder text for the empty route name.
pub const PLACEHOLDER: Color = Color([0xBB, 0xBB, 0xBB]);

/// Muted grey for captions and the footer.
pub const MUTED: Color = Color([0x99, 0x99, 0x99]);

impl Color {
    /// CSS hex notation, e.g. `#d40511`.
    #[must_use]
    pub fn css(self) -> String {
        let Self([r, g, b]) = self;
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Red, green, blue channels.
    #[must_use]
    pub const fn rgb(self) -> [u8; 3] {
        self.0
    }
}
