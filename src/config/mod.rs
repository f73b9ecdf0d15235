#[cfg(feature = "cli")]
pub mod cli;

use crate::utils::error::{DispatchError, Result};
use crate::utils::validation::{validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Where requests go. Injected into the dispatcher rather than read from a
/// global so tests can point it at a mock backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatcherConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    endpoint: DispatcherConfig,
}

impl DispatcherConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(DispatchError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses `[endpoint] base_url = "..."`, substituting `${VAR}` from the
    /// environment first.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;

        let file: ConfigFile =
            toml::from_str(&processed_content).map_err(|e| DispatchError::ConfigError {
                message: format!("TOML parsing error: {}", e),
            })?;
        Ok(file.endpoint)
    }
}

impl Validate for DispatcherConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint.base_url", &self.base_url)
    }
}

/// Replaces `${VAR}` with the variable's value; unset variables stay as-is.
fn substitute_env_vars(content: &str) -> Result<String> {
    use regex::Regex;
    let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| DispatchError::ConfigError {
        message: format!("invalid placeholder pattern: {}", e),
    })?;

    let result = re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    });

    Ok(result.to_string())
}
