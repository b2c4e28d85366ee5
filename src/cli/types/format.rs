//! Output format selection for exported reports.

use std::fmt;

/// File format an exported report is written in.
///
/// `csv` is the tabular-text format, `json` the structured-text one; both
/// generic names are accepted on the command line as aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values with a header row
    #[default]
    #[value(alias = "tabular-text")]
    Csv,
    /// Pretty-printed JSON array of objects
    #[value(alias = "structured-text")]
    Json,
}

impl ExportFormat {
    /// File extension, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::ValueEnum;

    #[test]
    fn test_extensions() {
        assert_eq!(ExportFormat::Csv.extension(), "csv");
        assert_eq!(ExportFormat::Json.extension(), "json");
        assert_eq!(ExportFormat::default(), ExportFormat::Csv);
    }

    #[test]
    fn test_generic_aliases_parse() {
        assert_eq!(
            ExportFormat::from_str("tabular-text", false).unwrap(),
            ExportFormat::Csv
        );
        assert_eq!(
            ExportFormat::from_str("structured-text", false).unwrap(),
            ExportFormat::Json
        );
        assert_eq!(ExportFormat::from_str("json", false).unwrap(), ExportFormat::Json);
        assert!(ExportFormat::from_str("xml", false).is_err());
    }
}
