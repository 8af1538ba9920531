// File: crates/stockpile-core/src/error.rs
// Summary: Error kinds for the load and render steps.

use std::path::PathBuf;

use thiserror::Error;

pub type StockpileResult<T> = Result<T, StockpileError>;

/// The two ways a run can fail. Neither is recovered locally.
#[derive(Debug, Error)]
pub enum StockpileError {
    /// Input CSV missing, unreadable, or structurally invalid.
    #[error("failed to load dataset '{}': {source}", path.display())]
    DataLoad {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// Output document could not be written.
    #[error("failed to render chart to '{}': {source}", path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StockpileError {
    pub fn data_load(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::DataLoad { path: path.into(), source }
    }

    pub fn render(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Render { path: path.into(), source }
    }

    /// Path the failing step was reading or writing.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::DataLoad { path, .. } | Self::Render { path, .. } => path,
        }
    }
}
