use thiserror::Error;

use crate::domain::model::BoxerId;

#[derive(Error, Debug)]
pub enum BoxingError {
    #[error("Ring is full, cannot add more boxers (capacity {capacity})")]
    RingFull { capacity: usize },

    #[error("There must be two boxers to start a fight ({present} in the ring)")]
    NotEnoughBoxers { present: usize },

    #[error("Invalid weight: {weight}. Weight must be at least 125.")]
    InvalidWeight { weight: u32 },

    #[error("Invalid reach: {reach}. Reach must be a finite number.")]
    InvalidReach { reach: f64 },

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Ring lock was poisoned by a panicking caller")]
    RingUnavailable,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Boxer with ID {id} not found")]
    NotFound { id: BoxerId },

    #[error("Boxer '{name}' not found")]
    NameNotFound { name: String },

    #[error("Boxer with name '{name}' already exists")]
    DuplicateName { name: String },

    #[error("Stored boxer {id} is unusable: {reason}")]
    CorruptRecord { id: BoxerId, reason: String },

    #[error("No boxer IDs left to assign")]
    IdsExhausted,

    #[error("Roster IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Roster serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BoxingError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            BoxingError::RingFull { .. } | BoxingError::NotEnoughBoxers { .. } => {
                ErrorSeverity::Low
            }
            BoxingError::InvalidWeight { .. }
            | BoxingError::InvalidReach { .. }
            | BoxingError::ConfigError { .. }
            | BoxingError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            BoxingError::Repository(err) => match err {
                RepositoryError::NotFound { .. }
                | RepositoryError::NameNotFound { .. }
                | RepositoryError::DuplicateName { .. } => ErrorSeverity::Medium,
                _ => ErrorSeverity::Critical,
            },
            BoxingError::RingUnavailable | BoxingError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BoxingError::RingFull { .. } => "Run the current fight or clear the ring first",
            BoxingError::NotEnoughBoxers { .. } => "Enter two boxers before starting a fight",
            BoxingError::InvalidWeight { .. } => "Boxers must weigh at least 125 pounds",
            BoxingError::InvalidReach { .. } => "Give the reach as a plain number of inches",
            BoxingError::Repository(RepositoryError::NotFound { .. })
            | BoxingError::Repository(RepositoryError::NameNotFound { .. }) => {
                "Check the boxer ID or name against the roster"
            }
            BoxingError::Repository(RepositoryError::DuplicateName { .. }) => {
                "Pick a name that is not already on the roster"
            }
            BoxingError::Repository(_) => "Check that the roster file is readable and valid JSON",
            BoxingError::RingUnavailable => "Restart the process to get a fresh ring",
            BoxingError::ConfigError { .. } | BoxingError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command-line flags"
            }
            BoxingError::IoError(_) => "Check file permissions and available disk space",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BoxingError::Repository(err) => format!("Roster problem: {}", err),
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BoxingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_errors_pass_through_unchanged() {
        let err: BoxingError = RepositoryError::NotFound { id: BoxerId(7) }.into();
        assert!(matches!(
            err,
            BoxingError::Repository(RepositoryError::NotFound { id: BoxerId(7) })
        ));
        assert_eq!(err.severity(), ErrorSeverity::Medium);
    }

    #[test]
    fn test_ring_errors_are_low_severity() {
        assert_eq!(
            BoxingError::RingFull { capacity: 2 }.severity(),
            ErrorSeverity::Low
        );
        assert_eq!(
            BoxingError::NotEnoughBoxers { present: 1 }.severity(),
            ErrorSeverity::Low
        );
    }
}
