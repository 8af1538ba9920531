// File: crates/stockpile-core/src/axis.rs
// Summary: Axis bindings (data column + display label).

use serde::Serialize;

use crate::types::{WARHEADS_COLUMN, YEAR_COLUMN};

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Axis {
    /// Dataset column plotted on this axis.
    pub field: String,
    pub label: String,
}

impl Axis {
    pub fn new(field: impl Into<String>, label: impl Into<String>) -> Self {
        Self { field: field.into(), label: label.into() }
    }

    pub fn default_x() -> Self {
        Self::new(YEAR_COLUMN, "Year")
    }

    pub fn default_y() -> Self {
        Self::new(WARHEADS_COLUMN, "Warheads")
    }
}
