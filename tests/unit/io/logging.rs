//! Tests for structured logging setup

#[cfg(test)]
mod tests {
    use mazecarve::AlgorithmError;
    use mazecarve::io::logging::{LogFormat, init_logging, parse_log_format};
    use rstest::rstest;

    // Tests accepted format spellings
    // Verified by removing the case folding
    #[rstest]
    #[case("human", LogFormat::Human)]
    #[case("JSON", LogFormat::Json)]
    #[case("  json\n", LogFormat::Json)]
    #[case("Human", LogFormat::Human)]
    fn test_parse_log_format(#[case] raw: &str, #[case] expected: LogFormat) {
        assert_eq!(parse_log_format(raw).ok(), Some(expected));
    }

    // Tests unknown formats are reported with the offending value
    // Verified by defaulting unknown values to human output
    #[test]
    fn test_parse_log_format_rejects_unknown() {
        match parse_log_format("yaml") {
            Err(AlgorithmError::Logging { reason }) => assert!(reason.contains("yaml")),
            other => unreachable!("expected Logging error, got {other:?}"),
        }
    }

    // Tests repeated initialisation is harmless
    // Verified by propagating the try_init failure
    #[test]
    fn test_init_logging_idempotent() {
        assert!(init_logging().is_ok());
        assert!(init_logging().is_ok());
    }
}
