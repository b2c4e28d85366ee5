//! JSON export: an array of objects, indented by four spaces.

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::{report::Report, FflError, Result};

pub(super) fn write_json(report: &Report, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| FflError::write_failure(path, e))?;
    let mut out = BufWriter::new(file);

    let mut ser = Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(b"    "));
    report.records().serialize(&mut ser).map_err(|e| {
        if e.is_io() {
            FflError::write_failure(path, e.into())
        } else {
            FflError::Json(e)
        }
    })?;

    out.flush().map_err(|e| FflError::write_failure(path, e))
}
