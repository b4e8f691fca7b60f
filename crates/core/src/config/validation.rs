//! Configuration validation for ensuring configs are valid before use

use crate::{
    config::Config,
    error::{Error, Result},
};

/// Trait for validating configurations
pub trait ConfigValidator {
    fn validate(&self, config: &Config) -> Result<()>;
}

/// Main configuration validator
#[derive(Debug, Default)]
pub struct MainConfigValidator;

impl MainConfigValidator {
    pub fn new() -> Self {
        Self
    }

    fn validate_separator(&self, separator: char) -> Result<()> {
        if separator.is_alphanumeric() || separator.is_whitespace() || separator == ':' {
            return Err(Error::ConfigError(format!(
                "'{separator}' cannot be used as a path separator"
            )));
        }
        Ok(())
    }

    fn validate_ellipsis(&self, ellipsis: &str, separator: char) -> Result<()> {
        if ellipsis.is_empty() {
            return Err(Error::ConfigError("ellipsis must not be empty".to_string()));
        }
        if ellipsis.contains(separator) {
            return Err(Error::ConfigError(format!(
                "ellipsis '{ellipsis}' must not contain the separator '{separator}'"
            )));
        }
        Ok(())
    }
}

impl ConfigValidator for MainConfigValidator {
    fn validate(&self, config: &Config) -> Result<()> {
        let separator = config.separator();
        self.validate_separator(separator)?;
        self.validate_ellipsis(&config.ellipsis, separator)?;

        if config.user_home.as_deref().is_some_and(str::is_empty) {
            return Err(Error::ConfigError("user_home must not be empty".to_string()));
        }

        Ok(())
    }
}
