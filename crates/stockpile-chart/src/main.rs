// File: crates/stockpile-chart/src/main.rs
// Summary: Renders the nuclear warhead stockpiles area chart to HTML.

use anyhow::Result;
use stockpile_chart::{resolve_root, run, telemetry, ROOT_ENV};
use stockpile_core::PathsConfig;
use tracing::info;

fn main() -> Result<()> {
    let _ = telemetry::init_default_tracing();

    // Project root from CLI, then env, then the working directory
    let root = resolve_root(std::env::args().nth(1), std::env::var(ROOT_ENV).ok());
    let cfg = PathsConfig::from_root(root);
    info!(root = %cfg.root().display(), "using project root");

    let out = run(&cfg)?;
    info!(path = %out.display(), "done");
    Ok(())
}
