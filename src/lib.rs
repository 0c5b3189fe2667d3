pub mod adapters;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::http::HttpTransport;
pub use config::FetchSettings;
pub use core::{fetch::Fetcher, SuccessCriterion, Transport, TransportResponse};
pub use utils::error::{FetchError, Result};
