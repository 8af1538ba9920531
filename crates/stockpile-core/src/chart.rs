// File: crates/stockpile-core/src/chart.rs
// Summary: Chart specification: filtered data, axis/color bindings, size, titles and layout.

use serde::Serialize;
use tracing::debug;

use crate::axis::Axis;
use crate::dataset::StockpileRow;
use crate::palette::Palette;
use crate::theme::LayoutOptions;
use crate::types::{CanvasSize, ENTITY_COLUMN};

pub const ARSENAL_TITLE: &str = "<b>The Rise & Fall of Nuclear Arsenals (1945-2024)</b><br>\
<sub>Tracking the accumulation of warheads across the Cold War and beyond</sub>";

/// Color bound to one entity of the data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EntityColor {
    pub entity: String,
    pub color: String,
}

/// One stacked area: all points of a single entity, in data order.
#[derive(Clone, Debug, PartialEq)]
pub struct AreaTrace<'a> {
    pub entity: &'a str,
    pub color: &'a str,
    pub years: Vec<i32>,
    pub warheads: Vec<f64>,
}

/// Everything the renderer needs to draw the area chart. Built once by
/// [`ChartSpec::compose`] and not mutated afterwards.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChartSpec {
    pub title: String,
    pub x_axis: Axis,
    pub y_axis: Axis,
    /// Column that splits the data into colored groups.
    pub color_field: String,
    /// Size requested when the figure is built; see [`ChartSpec::canvas`].
    pub size: CanvasSize,
    pub layout: LayoutOptions,
    /// One entry per entity, in order of first appearance in `data`.
    pub colors: Vec<EntityColor>,
    pub data: Vec<StockpileRow>,
}

impl ChartSpec {
    /// Bind `data` to the arsenal chart: x = Year, y = warheads, color = Entity.
    /// Empty data yields an empty but valid spec.
    pub fn compose(data: Vec<StockpileRow>, palette: &Palette) -> Self {
        let entities = entities_in_order(&data);
        let colors = palette
            .assign(entities.iter().copied())
            .into_iter()
            .zip(&entities)
            .map(|(color, entity)| EntityColor { entity: (*entity).to_string(), color })
            .collect::<Vec<_>>();
        debug!(rows = data.len(), groups = colors.len(), "composed chart spec");

        Self {
            title: ARSENAL_TITLE.to_string(),
            x_axis: Axis::default_x(),
            y_axis: Axis::default_y(),
            color_field: ENTITY_COLUMN.to_string(),
            size: CanvasSize::default(),
            layout: LayoutOptions::arsenal(),
            colors,
            data,
        }
    }

    /// Canvas size after the layout pass.
    pub fn canvas(&self) -> CanvasSize {
        self.layout.canvas(self.size)
    }

    /// Title shown on the y axis after the layout pass.
    pub fn y_title(&self) -> &str {
        self.layout.y_title.as_deref().unwrap_or(&self.y_axis.label)
    }

    pub fn color_of(&self, entity: &str) -> Option<&str> {
        self.colors
            .iter()
            .find(|c| c.entity == entity)
            .map(|c| c.color.as_str())
    }

    /// Split the data into one area per entity.
    pub fn traces(&self) -> Vec<AreaTrace<'_>> {
        self.colors
            .iter()
            .map(|c| {
                let (years, warheads) = self
                    .data
                    .iter()
                    .filter(|r| r.entity == c.entity)
                    .map(|r| (r.year, r.warheads))
                    .unzip();
                AreaTrace { entity: &c.entity, color: &c.color, years, warheads }
            })
            .collect()
    }

    /// Hover text for one entity's points.
    pub fn hover_template(&self, entity: &str) -> String {
        format!(
            "{}={}<br>{}=%{{x}}<br>{}=%{{y}}<extra></extra>",
            self.color_field, entity, self.x_axis.label, self.y_axis.label
        )
    }

    /// Canonical JSON encoding; identical input gives identical bytes.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn entities_in_order(data: &[StockpileRow]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for r in data {
        if !seen.contains(&r.entity.as_str()) {
            seen.push(&r.entity);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_follow_first_appearance() {
        let data = vec![
            StockpileRow::new("Russia", 1950, 5.0),
            StockpileRow::new("United States", 1950, 300.0),
            StockpileRow::new("Russia", 1951, 25.0),
        ];
        let spec = ChartSpec::compose(data, &Palette::arsenal());
        let traces = spec.traces();
        assert_eq!(traces.len(), 2);
        assert_eq!(traces[0].entity, "Russia");
        assert_eq!(traces[0].years, vec![1950, 1951]);
        assert_eq!(traces[0].warheads, vec![5.0, 25.0]);
        assert_eq!(traces[1].color, "#FF6B6B");
    }

    #[test]
    fn hover_template_names_entity() {
        let spec = ChartSpec::compose(Vec::new(), &Palette::arsenal());
        assert_eq!(
            spec.hover_template("France"),
            "Entity=France<br>Year=%{x}<br>Warheads=%{y}<extra></extra>"
        );
    }

    #[test]
    fn y_title_comes_from_layout() {
        let spec = ChartSpec::compose(Vec::new(), &Palette::arsenal());
        assert_eq!(spec.y_axis.label, "Warheads");
        assert_eq!(spec.y_title(), "Number of Warheads");
    }
}
