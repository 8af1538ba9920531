// File: crates/stockpile-render/src/lib.rs
// Summary: plotly-backed renderer; writes a chart specification as one self-contained HTML document.

pub mod figure;

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use stockpile_core::{ChartSpec, StockpileError, StockpileResult};

pub use figure::build_plot;

/// Render `spec` to an HTML string (plotly.js inlined).
pub fn to_html(spec: &ChartSpec) -> String {
    build_plot(spec).to_html()
}

/// Render `spec` and write it to `output`, replacing any existing file.
///
/// The page is written to a sibling temp file first and renamed into place,
/// so a failed write never leaves a truncated document at `output`. The
/// parent directory must already exist.
pub fn render_html(spec: &ChartSpec, output: impl AsRef<Path>) -> StockpileResult<()> {
    let output = output.as_ref();
    let html = to_html(spec);
    write_atomic(output, html.as_bytes()).map_err(|e| StockpileError::render(output, e))?;
    info!(path = %output.display(), bytes = html.len(), "wrote chart");
    Ok(())
}

fn write_atomic(output: &Path, bytes: &[u8]) -> io::Result<()> {
    let tmp = temp_sibling(output)?;
    let result = fs::File::create(&tmp).and_then(|mut f| {
        f.write_all(bytes)?;
        f.sync_all()
    });
    let result = result.and_then(|()| fs::rename(&tmp, output));
    if result.is_err() {
        match fs::remove_file(&tmp) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => warn!(path = %tmp.display(), error = %e, "failed to remove temp file"),
        }
    }
    result
}

fn temp_sibling(output: &Path) -> io::Result<PathBuf> {
    let name = output.file_name().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "output path has no file name")
    })?;
    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(name);
    tmp_name.push(".tmp");
    Ok(output.with_file_name(tmp_name))
}
