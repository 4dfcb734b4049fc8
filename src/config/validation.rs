//! Configuration validation

use super::Config;
use anyhow::Result;

/// Validation errors for configuration values
#[derive(Debug, PartialEq)]
pub enum ConfigValidationError {
    /// A required field is empty
    Empty { field: String },
    /// A field that is passed as a single token contains whitespace
    ContainsWhitespace { field: String, value: String },
}

impl std::fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigValidationError::Empty { field } => {
                write!(f, "Config field '{}' cannot be empty", field)
            }
            ConfigValidationError::ContainsWhitespace { field, value } => {
                write!(
                    f,
                    "Config field '{}' cannot contain whitespace: '{}'",
                    field, value
                )
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate every field, reporting all problems at once
    pub fn validate(config: &Config) -> Result<()> {
        let errors: Vec<ConfigValidationError> = [("git", &config.git), ("remote", &config.remote)]
            .into_iter()
            .filter_map(|(field, value)| Self::validate_token(field, value).err())
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
            Err(anyhow::anyhow!(
                "Configuration validation failed:\n{}",
                messages.join("\n")
            ))
        }
    }

    /// A value passed to git as one argument
    pub fn validate_token(field: &str, value: &str) -> Result<(), ConfigValidationError> {
        if value.trim().is_empty() {
            return Err(ConfigValidationError::Empty {
                field: field.to_string(),
            });
        }
        if value.chars().any(char::is_whitespace) {
            return Err(ConfigValidationError::ContainsWhitespace {
                field: field.to_string(),
                value: value.to_string(),
            });
        }
        Ok(())
    }
}
