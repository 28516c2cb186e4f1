//! HTTP server configuration object and helpers.

use std::net::SocketAddr;
use std::time::Duration;

use storefront::inbound::http::session_config::SessionSettings;
use url::Url;

/// Everything `create_server` needs, resolved and validated up front.
pub struct ServerConfig {
    pub(crate) session: SessionSettings,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) api_base_url: Url,
    pub(crate) request_timeout: Duration,
}

impl ServerConfig {
    /// Construct a server configuration from validated settings.
    #[must_use]
    pub fn new(
        session: SessionSettings,
        bind_addr: SocketAddr,
        api_base_url: Url,
        request_timeout: Duration,
    ) -> Self {
        Self {
            session,
            bind_addr,
            api_base_url,
            request_timeout,
        }
    }
}
