//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod ffl_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let ffl_error = FflError::from(json_error);

        match ffl_error {
            FflError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let ffl_error = FflError::from(header_error);

        match ffl_error {
            FflError::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u32>().unwrap_err();
        let ffl_error = FflError::from(parse_error);

        match ffl_error {
            FflError::InvalidLeagueId(_) => (),
            _ => panic!("Expected InvalidLeagueId error variant"),
        }
    }

    #[test]
    fn test_missing_config_error() {
        let error = FflError::MissingConfig {
            env_var: "ESPN_S2".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Configuration error"));
        assert!(error_string.contains("ESPN_S2"));
    }

    #[test]
    fn test_write_failure_carries_path_and_source() {
        let error = FflError::write_failure(
            "dist/standings.csv",
            io::Error::new(io::ErrorKind::PermissionDenied, "Access denied"),
        );

        let error_string = error.to_string();
        assert!(error_string.contains("dist/standings.csv"));
        assert!(error_string.contains("Access denied"));

        let error_trait: &dyn std::error::Error = &error;
        assert!(error_trait.source().is_some());

        match error {
            FflError::WriteFailure { path, source } => {
                assert_eq!(path, PathBuf::from("dist/standings.csv"));
                assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
            }
            _ => panic!("Expected WriteFailure error variant"),
        }
    }

    #[test]
    fn test_schema_mismatch_message() {
        let error = FflError::SchemaMismatch {
            report: "standings".to_string(),
            index: 3,
            expected: vec!["Team Name".to_string(), "Wins".to_string()],
            found: vec!["Team Name".to_string()],
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Record 3"));
        assert!(error_string.contains("standings"));
        assert!(error_string.contains("Wins"));
    }

    #[test]
    fn test_missing_data_message() {
        let error = FflError::MissingData {
            what: "league settings".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "ESPN API response is missing league settings"
        );
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(FflError::InvalidReport {
                message: "empty base name".to_string(),
            })
        }

        match test_function().unwrap_err() {
            FflError::InvalidReport { message } => assert_eq!(message, "empty base name"),
            _ => panic!("Expected InvalidReport error"),
        }
    }
}
