//! Error types for eventstats

use thiserror::Error;

/// Main error type for eventstats
#[derive(Debug, Error)]
pub enum EventStatsError {
    #[error("Invalid date: {0}")]
    InvalidInput(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl EventStatsError {
    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            EventStatsError::InvalidInput(input) => {
                format!(
                    "Invalid date: '{}'\n\n\
                    Expected a calendar date in ISO 8601 form:\n\
                    • YYYY-MM-DD (e.g., 2021-10-18)\n\
                    • A trailing time is accepted and ignored (e.g., 2021-10-18T09:00:00Z)",
                    input
                )
            }
            EventStatsError::InvalidArgument(arg) => {
                format!(
                    "Invalid argument: '{}'\n\n\
                    Valid directions: before, after",
                    arg
                )
            }
            EventStatsError::Catalog(msg) => {
                if msg.contains("EVENTSTATS_CATALOG") || msg.contains("not found") {
                    format!(
                        "{}\n\n\
                        Suggestions:\n\
                        • Create an events.toml with [[events]] and [[tags]] tables\n\
                        • Set EVENTSTATS_CATALOG to the path of your catalog file",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using EventStatsError
pub type Result<T> = std::result::Result<T, EventStatsError>;
