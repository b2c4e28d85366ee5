//! Unit tests for CSV/JSON export

use super::*;
use crate::report::{FlatRecord, Scalar};
use tempfile::TempDir;

fn standings() -> Report {
    Report::with_records(
        "standings",
        ["Team Name", "Owners", "Wins", "Points For"],
        vec![
            FlatRecord::new()
                .with("Team Name", "Team Alpha")
                .with("Owners", "Pat Smith, Jo Lee")
                .with("Wins", 9)
                .with("Points For", 1402.22),
            FlatRecord::new()
                .with("Team Name", "Team \"Beta\"")
                .with("Owners", "Sam Park")
                .with("Wins", 5)
                .with("Points For", 1288.0),
        ],
    )
    .unwrap()
}

fn empty_report() -> Report {
    Report::new("transactions", ["Date", "Action"]).unwrap()
}

#[cfg(test)]
mod destination_tests {
    use super::*;

    #[test]
    fn test_destination_paths() {
        let csv = ExportDestination::new("out/", "standings", ExportFormat::Csv);
        assert_eq!(csv.path(), PathBuf::from("out/standings.csv"));

        let json = ExportDestination::new("out/", "standings", ExportFormat::Json);
        assert_eq!(json.path(), PathBuf::from("out/standings.json"));
    }

    #[test]
    fn test_exported_accessors() {
        let written = Exported::Written(PathBuf::from("dist/a.csv"));
        let skipped = Exported::Skipped(PathBuf::from("dist/b.csv"));
        assert!(written.is_written());
        assert!(!skipped.is_written());
        assert_eq!(skipped.path(), Path::new("dist/b.csv"));
    }
}

#[cfg(test)]
mod csv_tests {
    use super::*;

    #[test]
    fn test_csv_round_trip_with_header_schema() {
        let dir = TempDir::new().unwrap();
        let report = standings();

        let outcome = export(&report, ExportFormat::Csv, dir.path()).unwrap();
        assert_eq!(outcome, Exported::Written(dir.path().join("standings.csv")));

        let mut reader = ::csv::Reader::from_path(outcome.path()).unwrap();
        let headers: Vec<String> = reader
            .headers()
            .unwrap()
            .iter()
            .map(str::to_string)
            .collect();
        assert_eq!(headers, report.fields());

        let rows: Vec<Vec<String>> = reader
            .records()
            .map(|r| r.unwrap().iter().map(str::to_string).collect())
            .collect();
        let expected: Vec<Vec<String>> = report
            .records()
            .iter()
            .map(|rec| rec.values().map(Scalar::to_string).collect())
            .collect();
        assert_eq!(rows, expected);
        assert_eq!(rows[1][3], "1288.0");
    }

    #[test]
    fn test_csv_quotes_embedded_commas_and_quotes() {
        let dir = TempDir::new().unwrap();
        export(&standings(), ExportFormat::Csv, dir.path()).unwrap();

        let contents = std::fs::read_to_string(dir.path().join("standings.csv")).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("Team Name,Owners,Wins,Points For"));
        assert_eq!(lines.next(), Some("Team Alpha,\"Pat Smith, Jo Lee\",9,1402.22"));
        assert_eq!(lines.next(), Some("\"Team \"\"Beta\"\"\",Sam Park,5,1288.0"));
    }

    #[test]
    fn test_empty_report_writes_no_csv() {
        let dir = TempDir::new().unwrap();
        let outcome = export(&empty_report(), ExportFormat::Csv, dir.path()).unwrap();

        assert_eq!(outcome, Exported::Skipped(dir.path().join("transactions.csv")));
        assert!(!outcome.path().exists());
    }

    #[test]
    fn test_empty_report_leaves_previous_csv_untouched() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("transactions.csv");
        std::fs::write(&path, "Date,Action\nold,row\n").unwrap();

        export(&empty_report(), ExportFormat::Csv, dir.path()).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "Date,Action\nold,row\n"
        );
    }
}

#[cfg(test)]
mod json_tests {
    use super::*;

    #[test]
    fn test_json_round_trip_preserves_order() {
        let dir = TempDir::new().unwrap();
        let report = standings();

        let outcome = export(&report, ExportFormat::Json, dir.path()).unwrap();
        assert_eq!(outcome, Exported::Written(dir.path().join("standings.json")));

        let contents = std::fs::read_to_string(outcome.path()).unwrap();
        let parsed: Vec<FlatRecord> = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed, report.records());
    }

    #[test]
    fn test_json_uses_four_space_indent() {
        let dir = TempDir::new().unwrap();
        export(&standings(), ExportFormat::Json, dir.path()).unwrap();

        let contents = std::fs::read_to_string(dir.path().join("standings.json")).unwrap();
        assert!(contents.starts_with("[\n    {\n        \"Team Name\": \"Team Alpha\","));
        assert!(contents.contains("        \"Points For\": 1288.0\n    }"));
        assert!(contents.ends_with("]"));
    }

    #[test]
    fn test_empty_report_writes_empty_json_array() {
        let dir = TempDir::new().unwrap();
        let outcome = export(&empty_report(), ExportFormat::Json, dir.path()).unwrap();

        assert!(outcome.is_written());
        assert_eq!(std::fs::read_to_string(outcome.path()).unwrap(), "[]");
    }
}

#[cfg(test)]
mod filesystem_tests {
    use super::*;

    #[test]
    fn test_missing_output_directory_is_created() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("reports").join("2024");
        assert!(!nested.exists());

        let outcome = export(&standings(), ExportFormat::Csv, &nested).unwrap();
        assert!(nested.is_dir());
        assert!(outcome.path().is_file());
    }

    #[test]
    fn test_reexport_is_byte_identical() {
        let dir = TempDir::new().unwrap();
        for format in [ExportFormat::Csv, ExportFormat::Json] {
            let first = export(&standings(), format, dir.path()).unwrap();
            let before = std::fs::read(first.path()).unwrap();

            let second = export(&standings(), format, dir.path()).unwrap();
            let after = std::fs::read(second.path()).unwrap();

            assert_eq!(first, second);
            assert_eq!(before, after);
        }
    }

    #[test]
    fn test_unwritable_destination_is_write_failure() {
        let dir = TempDir::new().unwrap();
        // A regular file where the output directory should be.
        let blocker = dir.path().join("dist");
        std::fs::write(&blocker, "not a directory").unwrap();

        match export(&standings(), ExportFormat::Json, &blocker).unwrap_err() {
            FflError::WriteFailure { path, .. } => assert_eq!(path, blocker),
            other => panic!("Expected WriteFailure, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_base_name_is_rejected() {
        let dir = TempDir::new().unwrap();
        let dest = ExportDestination::new(dir.path(), "", ExportFormat::Json);
        assert!(matches!(
            export_to(&standings(), &dest),
            Err(FflError::InvalidReport { .. })
        ));
    }
}
