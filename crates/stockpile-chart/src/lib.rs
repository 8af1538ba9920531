// File: crates/stockpile-chart/src/lib.rs
// Summary: The load -> filter -> compose -> render pipeline behind the `stockpile-chart` binary.

pub mod telemetry;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::info;

use stockpile_core::{filter_major_powers, load_stockpiles, ChartSpec, Palette, PathsConfig};

/// Environment variable consulted when no root is given on the command line.
pub const ROOT_ENV: &str = "STOCKPILE_ROOT";

/// Pick the project root: first CLI argument, then `STOCKPILE_ROOT`, then `.`.
pub fn resolve_root(arg: Option<String>, env: Option<String>) -> PathBuf {
    let given = |v: Option<String>| v.filter(|s| !s.trim().is_empty());
    given(arg)
        .or_else(|| given(env))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Load and filter the dataset and bind it to the arsenal chart.
pub fn build_spec(input: &Path) -> Result<ChartSpec> {
    let rows = load_stockpiles(input)
        .with_context(|| format!("failed to load CSV '{}'", input.display()))?;
    info!(rows = rows.len(), "loaded stockpiles");

    let filtered = filter_major_powers(rows);
    info!(rows = filtered.len(), "kept major powers");

    Ok(ChartSpec::compose(filtered, &Palette::arsenal()))
}

/// Run the whole pipeline for `cfg`; returns the written document's path.
pub fn run(cfg: &PathsConfig) -> Result<PathBuf> {
    let input = cfg.input_csv();
    let output = cfg.output_html();

    let spec = build_spec(&input)?;
    stockpile_render::render_html(&spec, &output)
        .with_context(|| format!("failed to write chart '{}'", output.display()))?;
    Ok(output)
}
