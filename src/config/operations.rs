//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::MAX_REQUIRED_PER_TYPE;
use crate::error::{Result, VdiagError};
use crate::vehicle::RequiredParts;
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(VdiagError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading config");

        let content = std::fs::read_to_string(path).map_err(|e| {
            VdiagError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from `path` when given, otherwise use defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| VdiagError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - every `required_parts` count must be at most `MAX_REQUIRED_PER_TYPE`
    pub fn validate(&self) -> Result<()> {
        for (part_type, count) in &self.required_parts {
            if *count > MAX_REQUIRED_PER_TYPE {
                return Err(VdiagError::UserError(format!(
                    "config validation failed: required_parts.{} is {} but must be at most {}",
                    part_type, count, MAX_REQUIRED_PER_TYPE
                )));
            }
        }

        Ok(())
    }

    /// The required-parts table diagnostics should run against.
    pub fn required_parts(&self) -> RequiredParts {
        let overrides = self.required_parts.iter().map(|(t, n)| (*t, *n));

        let merged: Vec<_> = if self.replace_required_parts {
            overrides.collect()
        } else {
            RequiredParts::default()
                .iter()
                .filter(|(t, _)| !self.required_parts.contains_key(t))
                .chain(overrides)
                .collect()
        };

        merged.into_iter().filter(|(_, n)| *n > 0).collect()
    }
}
