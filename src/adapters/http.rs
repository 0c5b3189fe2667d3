use crate::domain::model::TransportResponse;
use crate::domain::ports::Transport;
use crate::utils::error::{FetchError, Result};
use async_trait::async_trait;
use reqwest::Client;
use url::Url;

/// `Transport` backed by a shared `reqwest::Client`.
///
/// Relative paths are resolved against `base_url` the way a browser resolves
/// them against the page location; absolute URLs are used as-is.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: Option<Url>,
}

impl HttpTransport {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: None,
        }
    }

    pub fn with_base_url(base_url: &str) -> Result<Self> {
        Ok(Self {
            client: Client::new(),
            base_url: Some(parse_url(base_url)?),
        })
    }

    pub fn from_parts(base_url: Option<&str>, user_agent: Option<&str>) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(agent) = user_agent {
            builder = builder.user_agent(agent);
        }

        Ok(Self {
            client: builder.build()?,
            base_url: base_url.map(parse_url).transpose()?,
        })
    }

    pub fn resolve(&self, path: &str) -> Result<Url> {
        if let Ok(url) = Url::parse(path) {
            return Ok(url);
        }

        match &self.base_url {
            Some(base) => base.join(path).map_err(|e| FetchError::InvalidUrl {
                value: path.to_string(),
                reason: e.to_string(),
            }),
            None => Err(FetchError::InvalidUrl {
                value: path.to_string(),
                reason: "relative path given without a base URL".to_string(),
            }),
        }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_url(value: &str) -> Result<Url> {
    Url::parse(value).map_err(|e| FetchError::InvalidUrl {
        value: value.to_string(),
        reason: e.to_string(),
    })
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str) -> Result<TransportResponse> {
        let url = self.resolve(path)?;

        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;

        let status = response.status().as_u16();
        tracing::debug!("Response status: {}", status);

        let body = response.text().await?;
        Ok(TransportResponse { status, body })
    }
}
