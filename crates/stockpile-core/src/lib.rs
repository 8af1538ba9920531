// File: crates/stockpile-core/src/lib.rs
// Summary: Core library entry point; dataset loading, entity filtering and chart specification.

pub mod axis;
pub mod chart;
pub mod config;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod palette;
pub mod theme;
pub mod types;

pub use axis::Axis;
pub use chart::{AreaTrace, ChartSpec, EntityColor};
pub use config::PathsConfig;
pub use dataset::{load_stockpiles, load_stockpiles_from_reader, StockpileRow};
pub use error::{StockpileError, StockpileResult};
pub use filter::{filter_entities, filter_major_powers};
pub use palette::Palette;
pub use theme::{LayoutOptions, Theme};
pub use types::MAJOR_POWERS;
