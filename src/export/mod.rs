//! Writing reports to disk as CSV or JSON.
//!
//! The destination is always `<out_dir>/<report name>.<csv|json>`. The output
//! directory is created first, whatever the format. An empty report still
//! produces a JSON file (`[]`) but never a CSV file: callers must not assume
//! a CSV artifact exists after an export.

mod csv;
mod json;

#[cfg(test)]
mod tests;

use std::fs;
use std::path::{Path, PathBuf};

use crate::{cli::types::ExportFormat, report::Report, FflError, Result};

/// Where a report is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDestination {
    pub out_dir: PathBuf,
    pub base_name: String,
    pub format: ExportFormat,
}

impl ExportDestination {
    pub fn new(out_dir: impl Into<PathBuf>, base_name: impl Into<String>, format: ExportFormat) -> Self {
        Self {
            out_dir: out_dir.into(),
            base_name: base_name.into(),
            format,
        }
    }

    /// `out_dir/base_name.<ext>`
    pub fn path(&self) -> PathBuf {
        self.out_dir
            .join(format!("{}.{}", self.base_name, self.format.extension()))
    }
}

/// What an export did at its resolved path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exported {
    /// The file was created or overwritten.
    Written(PathBuf),
    /// Nothing was written (empty report as CSV).
    Skipped(PathBuf),
}

impl Exported {
    pub fn path(&self) -> &Path {
        match self {
            Exported::Written(p) | Exported::Skipped(p) => p,
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self, Exported::Written(_))
    }
}

/// Export `report` into `out_dir` in `format`.
pub fn export(report: &Report, format: ExportFormat, out_dir: &Path) -> Result<Exported> {
    let dest = ExportDestination::new(out_dir, report.name(), format);
    export_to(report, &dest)
}

/// Export `report` to an explicit destination.
pub fn export_to(report: &Report, dest: &ExportDestination) -> Result<Exported> {
    if dest.base_name.is_empty() {
        return Err(FflError::InvalidReport {
            message: "export base name is empty".to_string(),
        });
    }

    fs::create_dir_all(&dest.out_dir)
        .map_err(|e| FflError::write_failure(&dest.out_dir, e))?;

    let path = dest.path();
    match dest.format {
        ExportFormat::Csv => {
            if report.is_empty() {
                println!("No data to save for {}.", path.display());
                return Ok(Exported::Skipped(path));
            }
            csv::write_csv(report, &path)?;
        }
        ExportFormat::Json => json::write_json(report, &path)?,
    }

    log::debug!("wrote {} records to {}", report.len(), path.display());
    Ok(Exported::Written(path))
}
