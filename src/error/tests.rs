//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod espn_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let espn_error = EspnError::from(json_error);

        match espn_error {
            EspnError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let espn_error = EspnError::from(io_error);

        match espn_error {
            EspnError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let espn_error = EspnError::from(header_error);

        match espn_error {
            EspnError::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u32>().unwrap_err();
        let espn_error = EspnError::from(parse_error);

        match espn_error {
            EspnError::InvalidId(_) => (),
            _ => panic!("Expected InvalidId error variant"),
        }
    }

    #[test]
    fn test_missing_league_id_error() {
        let error = EspnError::MissingLeagueId {
            env_var: "ESPN_FBA_LEAGUE_ID".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("League ID not provided"));
        assert!(error_string.contains("ESPN_FBA_LEAGUE_ID"));
    }

    #[test]
    fn test_no_data_error() {
        assert_eq!(EspnError::NoData.to_string(), "ESPN API returned no data");
    }

    #[test]
    fn test_unknown_window_error() {
        let error = EspnError::UnknownWindow {
            label: "90-day".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown stat window: 90-day");
    }

    #[test]
    fn test_unknown_stat_error() {
        let error = EspnError::UnknownStat {
            name: "PTZ".to_string(),
        };
        assert_eq!(error.to_string(), "Unknown stat: PTZ");
    }

    #[test]
    fn test_malformed_table_error() {
        let error = EspnError::MalformedTable {
            column: "Injury".to_string(),
            expected: 3,
            found: 2,
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Malformed table"));
        assert!(error_string.contains("\"Injury\""));
        assert!(error_string.contains("has 2 rows, expected 3"));
    }

    #[test]
    fn test_malformed_columns_error() {
        let error = EspnError::MalformedColumns {
            expected: 5,
            found: 4,
        };
        assert_eq!(error.to_string(), "Malformed table: 4 columns, expected 5");
    }

    #[test]
    fn test_invalid_entry_error() {
        let error = EspnError::InvalidEntry {
            input: "PTS".to_string(),
            reason: "expected NAME=VALUE".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid entry \"PTS\": expected NAME=VALUE"
        );
    }

    #[test]
    fn test_error_debug_format() {
        let error = EspnError::Cache {
            message: "Debug test".to_string(),
        };

        let debug_string = format!("{:?}", error);
        assert!(debug_string.contains("Cache"));
        assert!(debug_string.contains("Debug test"));
    }
}
