// File: crates/stockpile-core/src/config.rs
// Summary: Directory layout of a project checkout and the input/output paths derived from it.

use std::path::{Path, PathBuf};

/// Dataset and page name shared by the input CSV and the output HTML.
pub const CHART_NAME: &str = "nuclear-warhead-stockpiles-lines";

/// Paths used by one run. Built once at startup and passed down.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathsConfig {
    pub root: PathBuf,
    pub data_dir: PathBuf,
    pub assets_dir: PathBuf,
    pub pages_dir: PathBuf,
    pub protocols_dir: PathBuf,
    pub visualizations_dir: PathBuf,
}

impl PathsConfig {
    pub fn from_root(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        let data_dir = root.join("data");
        let assets_dir = root.join("assets");
        let pages_dir = assets_dir.join("pages");
        let protocols_dir = pages_dir.join("protocols");
        let visualizations_dir = pages_dir.join("visualizations");
        Self { root, data_dir, assets_dir, pages_dir, protocols_dir, visualizations_dir }
    }

    /// `data/<name>/<name>.csv`
    pub fn input_csv(&self) -> PathBuf {
        self.data_dir.join(CHART_NAME).join(format!("{CHART_NAME}.csv"))
    }

    /// `assets/pages/visualizations/<name>.html`
    pub fn output_html(&self) -> PathBuf {
        self.visualizations_dir.join(format!("{CHART_NAME}.html"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self::from_root(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_paths() {
        let cfg = PathsConfig::from_root("/srv/site");
        assert_eq!(
            cfg.input_csv(),
            PathBuf::from("/srv/site/data/nuclear-warhead-stockpiles-lines/nuclear-warhead-stockpiles-lines.csv")
        );
        assert_eq!(
            cfg.output_html(),
            PathBuf::from("/srv/site/assets/pages/visualizations/nuclear-warhead-stockpiles-lines.html")
        );
        assert_eq!(cfg.protocols_dir, PathBuf::from("/srv/site/assets/pages/protocols"));
    }
}
