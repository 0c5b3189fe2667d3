use crate::core::SuccessCriterion;
use crate::utils::error::{FetchError, Result};
use crate::utils::validation::{validate_url, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub fetch: FetchSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FetchSection {
    pub base_url: Option<String>,
    pub success: Option<SuccessCriterion>,
    pub user_agent: Option<String>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| FetchError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` placeholders with environment values.
    ///
    /// Lines whose first non-blank character is `#` are left untouched.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| FetchError::ConfigError {
            message: e.to_string(),
        })?;

        let mut lines = Vec::new();
        for line in content.lines() {
            if line.trim_start().starts_with('#') {
                lines.push(line.to_string());
                continue;
            }

            if let Some(missing) = re
                .captures_iter(line)
                .map(|caps| caps[1].to_string())
                .find(|name| std::env::var(name).is_err())
            {
                return Err(FetchError::MissingEnvVar { name: missing });
            }

            let replaced = re.replace_all(line, |caps: &Captures| {
                std::env::var(&caps[1]).unwrap_or_default()
            });
            lines.push(replaced.into_owned());
        }

        Ok(lines.join("\n"))
    }
}

impl Validate for FileConfig {
    fn validate(&self) -> Result<()> {
        if let Some(base_url) = &self.fetch.base_url {
            validate_url("fetch.base_url", base_url)?;
        }
        Ok(())
    }
}
