use thiserror::Error;

/// Errors raised while loading monitoring metadata.
///
/// Report translation itself has no failure path; these only surface when a
/// caller explicitly loads a manifest or configuration.
#[derive(Error, Debug)]
pub enum MonitoringError {
    #[error("Manifest parse error at line {line}: {reason}")]
    ManifestParse { line: usize, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ::config::ConfigError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl MonitoringError {
    pub fn manifest_parse(line: usize, reason: impl Into<String>) -> Self {
        Self::ManifestParse {
            line,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MonitoringError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_parse_display_names_line() {
        let err = MonitoringError::manifest_parse(7, "missing ':' separator");
        assert_eq!(
            err.to_string(),
            "Manifest parse error at line 7: missing ':' separator"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: MonitoringError = io.into();
        assert!(matches!(err, MonitoringError::Io(_)));
        assert!(err.to_string().starts_with("I/O error"));
    }
}
