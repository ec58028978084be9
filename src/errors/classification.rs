use super::types::BrowseEaseError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorClassification {
    pub error_type: &'static str,
    pub exit_code: i32,
}

impl BrowseEaseError {
    /// Classify this error for process exit codes and structured logs.
    pub fn classify(&self) -> ErrorClassification {
        match self {
            BrowseEaseError::Config(_) | BrowseEaseError::Yaml(_) => ErrorClassification {
                error_type: "ConfigError",
                exit_code: 2,
            },
            BrowseEaseError::InvalidFixture(_) | BrowseEaseError::Json(_) => ErrorClassification {
                error_type: "FixtureError",
                exit_code: 3,
            },
            BrowseEaseError::Server(_) => ErrorClassification {
                error_type: "ServerError",
                exit_code: 4,
            },
            BrowseEaseError::Io(_) => ErrorClassification {
                error_type: "IoError",
                exit_code: 1,
            },
            BrowseEaseError::Internal(_) => ErrorClassification {
                error_type: "InternalError",
                exit_code: 1,
            },
        }
    }
}
