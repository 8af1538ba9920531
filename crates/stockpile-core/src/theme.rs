// File: crates/stockpile-core/src/theme.rs
// Summary: Dark theme colors and layout options applied after the figure is built.

use serde::Serialize;

use crate::types::{CanvasSize, LAYOUT_HEIGHT};

/// RGBA color as understood by CSS/plotly (`a` in 0.0..=1.0).
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Theme {
    /// Name of the renderer's built-in template this theme starts from.
    pub template: &'static str,
    pub plot_background: Rgba,
    pub paper_background: Rgba,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            template: "plotly_dark",
            plot_background: Rgba::new(15, 25, 35, 0.8),
            paper_background: Rgba::new(10, 15, 25, 1.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum HoverMode {
    /// One tooltip listing every trace at the hovered x.
    XUnified,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Orientation {
    Horizontal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Anchor {
    Right,
    Bottom,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LegendOptions {
    pub title: String,
    pub orientation: Orientation,
    pub x_anchor: Anchor,
    pub x: f64,
    pub y_anchor: Anchor,
    pub y: f64,
}

impl LegendOptions {
    /// Horizontal legend sitting just above the plot, flush right.
    pub fn top_right(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            orientation: Orientation::Horizontal,
            x_anchor: Anchor::Right,
            x: 1.0,
            y_anchor: Anchor::Bottom,
            y: 1.02,
        }
    }
}

/// Options of the layout pass. Values set here win over what the figure
/// requested (`height`, `y_title`).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LayoutOptions {
    pub theme: Theme,
    pub hover_mode: HoverMode,
    pub height: Option<u32>,
    pub y_title: Option<String>,
    pub legend: LegendOptions,
}

impl LayoutOptions {
    pub fn arsenal() -> Self {
        Self {
            theme: Theme::dark(),
            hover_mode: HoverMode::XUnified,
            height: Some(LAYOUT_HEIGHT),
            y_title: Some("Number of Warheads".to_string()),
            legend: LegendOptions::top_right("Entity"),
        }
    }

    /// Final canvas size once this layout is applied to `requested`.
    pub fn canvas(&self, requested: CanvasSize) -> CanvasSize {
        match self.height {
            Some(h) => requested.with_height(h),
            None => requested,
        }
    }
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self::arsenal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_overrides_height_only() {
        let c = LayoutOptions::arsenal().canvas(CanvasSize::default());
        assert_eq!(c, CanvasSize::new(800, 600));
    }

    #[test]
    fn css_rgba() {
        assert_eq!(Theme::dark().plot_background.to_css(), "rgba(15, 25, 35, 0.8)");
        assert_eq!(Theme::dark().paper_background.to_css(), "rgba(10, 15, 25, 1)");
    }
}
