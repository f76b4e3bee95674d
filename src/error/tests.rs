//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod nhl_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let nhl_error = NhlError::from(json_error);

        match nhl_error {
            NhlError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let nhl_error = NhlError::from(io_error);

        match nhl_error {
            NhlError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_storage_error_keeps_context_chain() {
        let err = anyhow::anyhow!("no such table").context("Failed to load Stats");
        let nhl_error = NhlError::from(err);
        let text = nhl_error.to_string();
        assert!(text.contains("Failed to load Stats"));
        assert!(text.contains("no such table"));
    }

    #[test]
    fn test_display_messages() {
        let err = NhlError::MixedSeasonBounds {
            start: "2015".to_string(),
            end: "20182019".to_string(),
        };
        assert!(err.to_string().contains("2015 / 20182019"));

        let err = NhlError::PlayerNotFound { id: 8471214 };
        assert_eq!(err.to_string(), "Player not found: 8471214");

        let err = NhlError::RetriesExhausted {
            attempts: 3,
            last: Box::new(NhlError::Status {
                status: 503,
                url: "https://example.test/x".to_string(),
            }),
        };
        assert_eq!(
            err.to_string(),
            "Gave up after 3 attempts: HTTP 503 from https://example.test/x"
        );
    }
}

#[cfg(test)]
mod classification_tests {
    use super::*;

    fn status(code: u16) -> NhlError {
        NhlError::Status {
            status: code,
            url: "https://example.test".to_string(),
        }
    }

    #[test]
    fn test_throttling_and_server_errors_are_transient() {
        for code in [408, 425, 429, 500, 502, 503, 504] {
            assert!(status(code).is_transient(), "{code} should be transient");
        }
    }

    #[test]
    fn test_client_errors_are_not_transient() {
        for code in [400, 401, 403, 422] {
            assert!(!status(code).is_transient(), "{code} should not be transient");
        }
        assert!(!NhlError::NotFound {
            url: "x".to_string()
        }
        .is_transient());
        assert!(!NhlError::Interrupted.is_transient());
    }

    #[test]
    fn test_skippable() {
        assert!(NhlError::NotFound {
            url: "x".to_string()
        }
        .is_skippable());
        assert!(NhlError::PlayerNotFound { id: 1 }.is_skippable());
        assert!(status(400).is_skippable());
        assert!(NhlError::shape("player-home-away", "bad split").is_skippable());
        assert!(NhlError::RetriesExhausted {
            attempts: 3,
            last: Box::new(status(503)),
        }
        .is_skippable());
        let bad_body = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        assert!(NhlError::from(bad_body).is_skippable());

        assert!(!NhlError::Interrupted.is_skippable());
        assert!(!NhlError::Storage(anyhow::anyhow!("disk full")).is_skippable());
        assert!(!NhlError::from(io::Error::new(io::ErrorKind::Other, "denied")).is_skippable());
    }

    #[test]
    fn test_shape_helper() {
        match NhlError::shape("shift", "no data") {
            NhlError::UnexpectedShape { kind, detail } => {
                assert_eq!(kind, "shift");
                assert_eq!(detail, "no data");
            }
            other => panic!("Expected UnexpectedShape, got {other:?}"),
        }
    }
}
