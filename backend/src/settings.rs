//! Storefront configuration loaded via OrthoConfig.
//!
//! Values come from `STOREFRONT_*` environment variables, command-line flags
//! or a configuration file. Only the backend base URL is mandatory.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Errors raised while interpreting loaded settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// No backend base URL was configured.
    #[error("STOREFRONT_API_BASE_URL is required")]
    MissingApiBaseUrl,
    /// The backend base URL does not parse.
    #[error("invalid backend base URL '{value}': {source}")]
    InvalidApiBaseUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
    /// The backend base URL uses a scheme other than HTTP(S).
    #[error("backend base URL '{value}' must use http or https")]
    UnsupportedScheme { value: String },
    /// The listen address does not parse as a socket address.
    #[error("invalid bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    /// The outbound timeout was set to zero seconds.
    #[error("request timeout must be at least one second")]
    ZeroTimeout,
}

/// Configuration values for the storefront service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "STOREFRONT")]
pub struct StorefrontSettings {
    /// Base URL of the storefront backend API, e.g. `https://api.example.com/`.
    pub api_base_url: Option<String>,
    /// Socket address the HTTP server listens on.
    pub bind_addr: Option<String>,
    /// Upper bound for every outbound backend call, in seconds.
    #[ortho_config(default = 10)]
    pub request_timeout_secs: u64,
}

impl StorefrontSettings {
    /// Parsed backend base URL.
    ///
    /// # Errors
    /// Fails when the URL is missing, malformed or not HTTP(S).
    pub fn api_base_url(&self) -> Result<Url, SettingsError> {
        let raw = self
            .api_base_url
            .as_deref()
            .ok_or(SettingsError::MissingApiBaseUrl)?;
        let url = Url::parse(raw).map_err(|source| SettingsError::InvalidApiBaseUrl {
            value: raw.to_owned(),
            source,
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            _ => Err(SettingsError::UnsupportedScheme {
                value: raw.to_owned(),
            }),
        }
    }

    /// Listen address, defaulting to `0.0.0.0:8080`.
    ///
    /// # Errors
    /// Fails when the configured address does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse()
            .map_err(|source| SettingsError::InvalidBindAddr {
                value: raw.to_owned(),
                source,
            })
    }

    /// Outbound request timeout, defaulting to ten seconds.
    ///
    /// # Errors
    /// Fails when the timeout is configured as zero.
    pub fn request_timeout(&self) -> Result<Duration, SettingsError> {
        match self.request_timeout_secs {
            0 => Err(SettingsError::ZeroTimeout),
            secs => Ok(Duration::from_secs(secs)),
        }
    }
}
