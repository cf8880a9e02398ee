//! The load -> parse -> aggregate -> validate pipeline.
//!
//! Single-threaded and synchronous: the whole document is buffered,
//! parsed into sheets, reduced into matrices, and validated in one
//! pass. The core is stateless between runs.

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use sched_core::{aggregate, rollup, total_markers};
use sched_model::{CoverageMatrix, SheetGrid, ValidationReport};
use sched_validate::analyze;

/// Final output of one validation run. Presentation layers receive
/// these fully aggregated; nothing partial ever leaves the pipeline.
#[derive(Debug)]
pub struct PipelineOutput {
    pub sheets: Vec<SheetGrid>,
    pub matrix: CoverageMatrix,
    pub categories: CoverageMatrix,
    pub report: ValidationReport,
    pub category_report: ValidationReport,
}

/// Read and parse the coverage grid sheets out of an ODS file.
pub fn load_sheets(path: &Path) -> Result<Vec<SheetGrid>> {
    info!(path = %path.display(), "opening schedule");
    let content = sched_ingest::read_content(path)
        .with_context(|| format!("read schedule container: {}", path.display()))?;
    let sheets = sched_ingest::parse_grid(&content)
        .with_context(|| format!("parse schedule document: {}", path.display()))?;
    info!(sheets = sheets.len(), "parsed schedule");
    Ok(sheets)
}

/// Run the full pipeline against one file.
pub fn validate_file(path: &Path) -> Result<PipelineOutput> {
    let sheets = load_sheets(path)?;
    let markers = total_markers(&sheets);
    let matrix = aggregate(&sheets);
    let categories = rollup(&matrix);
    let report = analyze(&matrix, markers);
    let category_report = analyze(&categories, markers);
    Ok(PipelineOutput {
        sheets,
        matrix,
        categories,
        report,
        category_report,
    })
}
