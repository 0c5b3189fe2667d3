pub mod toml_config;

use crate::adapters::http::HttpTransport;
use crate::core::{fetch::Fetcher, SuccessCriterion};
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use toml_config::FileConfig;

#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "fetch-wrapper")]
#[command(about = "Fetch a resource with a plain HTTP GET and print its body")]
pub struct CliConfig {
    /// Path or absolute URL to fetch
    pub path: String,

    #[arg(long, help = "Base URL that relative paths are resolved against")]
    pub base_url: Option<String>,

    #[arg(long, help = "Optional TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Accept any 2xx status instead of exactly 200")]
    pub any_success: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn settings(&self) -> Result<FetchSettings> {
        let file = match &self.config {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };

        Ok(FetchSettings::merge(
            self.path.clone(),
            self.base_url.clone(),
            self.any_success,
            file,
        ))
    }
}

/// Effective settings after command-line values override the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchSettings {
    pub path: String,
    pub base_url: Option<String>,
    pub success: SuccessCriterion,
    pub user_agent: Option<String>,
}

impl FetchSettings {
    pub fn merge(
        path: String,
        base_url: Option<String>,
        any_success: bool,
        file: FileConfig,
    ) -> Self {
        let success = if any_success {
            SuccessCriterion::AnySuccess
        } else {
            file.fetch.success.unwrap_or_default()
        };

        Self {
            path,
            base_url: base_url.or(file.fetch.base_url),
            success,
            user_agent: file.fetch.user_agent,
        }
    }

    pub fn build_fetcher(&self) -> Result<Fetcher> {
        let transport =
            HttpTransport::from_parts(self.base_url.as_deref(), self.user_agent.as_deref())?;
        Ok(Fetcher::new(transport).with_success_criterion(self.success))
    }
}

impl Validate for FetchSettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("path", &self.path)?;
        if let Some(base_url) = &self.base_url {
            validate_url("base_url", base_url)?;
        }
        Ok(())
    }
}
