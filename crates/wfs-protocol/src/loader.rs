//! Retrieval of capabilities XML.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client};
use tracing::{debug, info};

use crate::error::{WfsError, WfsResult};

/// Fetches the raw XML body of a capabilities document.
///
/// Failures are reported as [`WfsError::Transport`] and are not retried.
#[async_trait]
pub trait XmlLoader: Send + Sync {
    async fn load_xml(&self, url: &str) -> WfsResult<String>;
}

/// Configuration for the HTTP loader.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Whole-request timeout
    pub request_timeout: Duration,
    /// TCP connect timeout
    pub connect_timeout: Duration,
    /// User-Agent header sent with each request
    pub user_agent: String,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            user_agent: concat!("wfs-inspect/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl LoaderConfig {
    /// Build from environment, falling back to defaults for missing or
    /// unparsable values.
    ///
    /// Environment variables: WFS_REQUEST_TIMEOUT_SECS, WFS_CONNECT_TIMEOUT_SECS,
    /// WFS_USER_AGENT
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let secs = |key: &str| {
            lookup(key)
                .and_then(|v| v.trim().parse::<u64>().ok())
                .map(Duration::from_secs)
        };

        Self {
            request_timeout: secs("WFS_REQUEST_TIMEOUT_SECS").unwrap_or(defaults.request_timeout),
            connect_timeout: secs("WFS_CONNECT_TIMEOUT_SECS").unwrap_or(defaults.connect_timeout),
            user_agent: lookup("WFS_USER_AGENT")
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.user_agent),
        }
    }
}

/// [`XmlLoader`] backed by a reqwest client.
#[derive(Debug, Clone)]
pub struct HttpXmlLoader {
    client: Client,
}

impl HttpXmlLoader {
    /// Create a loader with the given configuration.
    pub fn new(config: &LoaderConfig) -> WfsResult<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| WfsError::HttpClient(e.to_string()))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl XmlLoader for HttpXmlLoader {
    async fn load_xml(&self, url: &str) -> WfsResult<String> {
        info!(url = %url, "Fetching WFS capabilities");

        let response = self
            .client
            .get(url)
            .header(header::ACCEPT, "application/xml, text/xml;q=0.9, */*;q=0.1")
            .send()
            .await
            .map_err(|e| WfsError::transport(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(WfsError::Transport {
                url: url.to_string(),
                message: format!("HTTP {}", status),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| WfsError::transport(url, e))?;
        debug!(url = %url, bytes = body.len(), "Capabilities body received");
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_config_defaults() {
        let config = LoaderConfig::from_lookup(|_| None);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert!(config.user_agent.starts_with("wfs-inspect/"));
    }

    #[test]
    fn test_config_overrides_and_bad_values() {
        let env: HashMap<&str, &str> = [
            ("WFS_REQUEST_TIMEOUT_SECS", "5"),
            ("WFS_CONNECT_TIMEOUT_SECS", "soon"),
            ("WFS_USER_AGENT", "catalog/1.0"),
        ]
        .into_iter()
        .collect();

        let config = LoaderConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.user_agent, "catalog/1.0");
    }

    #[test]
    fn test_http_loader_builds() {
        assert!(HttpXmlLoader::new(&LoaderConfig::default()).is_ok());
    }
}
