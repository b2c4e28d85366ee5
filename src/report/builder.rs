//! Column tables that map source rows onto flat records.
//!
//! Each report kind declares a `&[Column<T>]` for its row type; the table is
//! both the schema (column names, in order) and the extraction logic.

use super::{FlatRecord, Report, ReportKind, Scalar};
use crate::Result;

/// One output field: its header name and how to read it from a row.
pub struct Column<T> {
    pub name: &'static str,
    pub extract: fn(&T) -> Scalar,
}

impl<T> Column<T> {
    pub const fn new(name: &'static str, extract: fn(&T) -> Scalar) -> Self {
        Self { name, extract }
    }
}

/// Build a report of `kind` with one record per row, fields in column order.
pub fn build_report<T>(kind: ReportKind, columns: &[Column<T>], rows: &[T]) -> Result<Report> {
    let mut report = Report::new(kind.base_name(), columns.iter().map(|c| c.name))?;

    for row in rows {
        let record = columns
            .iter()
            .fold(FlatRecord::new(), |rec, col| rec.with(col.name, (col.extract)(row)));
        report.push(record)?;
    }

    log::info!("built {} report with {} records", kind, report.len());
    Ok(report)
}
