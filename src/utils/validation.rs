use crate::utils::error::{BoxingError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(BoxingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(BoxingError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if allowed.contains(&value) {
        return Ok(());
    }
    Err(BoxingError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: format!("Expected one of: {}", allowed.join(", ")),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("roster.path", "boxers.json").is_ok());
        assert!(validate_path("roster.path", "data/boxers.json").is_ok());
        assert!(validate_path("roster.path", "").is_err());
        assert!(validate_path("roster.path", "   ").is_err());
        assert!(validate_path("roster.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("logging.level", "debug", LOG_LEVELS).is_ok());
        let err = validate_one_of("logging.level", "loud", LOG_LEVELS).unwrap_err();
        assert!(err.to_string().contains("logging.level"));
    }
}
