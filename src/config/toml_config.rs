use crate::domain::model::EmployeeRecord;
use crate::utils::error::{RecordError, Result};
use crate::utils::validation::{validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    pub roster: RosterInfo,
    #[serde(default)]
    pub employees: Vec<EmployeeRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterInfo {
    pub name: String,
    pub description: Option<String>,
}

impl RosterConfig {
    /// Loads a roster from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::debug!("Reading roster file {}", path.as_ref().display());
        let content = std::fs::read_to_string(&path).map_err(RecordError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses a roster from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RecordError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RecordError::ConfigError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }
}

impl Validate for RosterConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("roster.name", &self.roster.name)
    }
}
