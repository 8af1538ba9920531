// File: crates/stockpile-core/src/types.rs
// Summary: Shared constants (column names, allow-list, canvas sizes).

/// CSV column holding the category label.
pub const ENTITY_COLUMN: &str = "Entity";
/// CSV column holding the x value.
pub const YEAR_COLUMN: &str = "Year";
/// CSV column holding the y value.
pub const WARHEADS_COLUMN: &str = "Number of nuclear warheads";

/// Entities kept for display, in legend order.
pub const MAJOR_POWERS: [&str; 6] = [
    "United States",
    "Russia",
    "China",
    "United Kingdom",
    "France",
    "World",
];

/// Canvas width requested when the figure is built.
pub const REQUESTED_WIDTH: u32 = 800;
/// Canvas height requested when the figure is built.
pub const REQUESTED_HEIGHT: u32 = 800;
/// Height applied by the layout pass; replaces `REQUESTED_HEIGHT`.
pub const LAYOUT_HEIGHT: u32 = 600;

/// Canvas size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Same width, different height.
    pub const fn with_height(self, height: u32) -> Self {
        Self { width: self.width, height }
    }
}

impl Default for CanvasSize {
    fn default() -> Self {
        Self::new(REQUESTED_WIDTH, REQUESTED_HEIGHT)
    }
}
