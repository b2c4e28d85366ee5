//! CSV export: a header row from the declared fields, then one row per record.

use csv::Writer;
use std::path::Path;

use crate::{report::Report, FflError, Result};

pub(super) fn write_csv(report: &Report, path: &Path) -> Result<()> {
    let fail = |e: csv::Error| FflError::write_failure(path, e.into());

    let mut writer = Writer::from_path(path).map_err(fail)?;

    writer.write_record(report.fields()).map_err(fail)?;

    // Records were validated against the fields on insert, so value order
    // matches the header.
    for record in report.records() {
        writer
            .write_record(record.values().map(|v| v.to_string()))
            .map_err(fail)?;
    }

    writer
        .flush()
        .map_err(|e| FflError::write_failure(path, e))
}
