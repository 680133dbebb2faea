//! Server configuration.

use crate::error::{ServerError, ServerResult};
use counterframe_protocol::{SigningKey, State};
use std::net::SocketAddr;
use std::time::Duration;
use url::Url;

/// Path of the frame endpoint, relative to the host.
pub const COUNT_PATH: &str = "api/count";

/// Path of the image renderer, relative to the host.
pub const IMAGE_PATH: &str = "api/images/count";

/// Configuration for the frame server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind to.
    pub bind_addr: SocketAddr,
    /// Request timeout.
    pub request_timeout: Duration,
    /// Maximum accepted request body size.
    pub max_body_bytes: usize,
    /// Secret used to sign and verify state tokens.
    pub signing_key: SigningKey,
    host: Url,
    post_url: Url,
    image_url: Url,
}

impl ServerConfig {
    /// Creates a new server configuration.
    ///
    /// `host` is the public base URL used to build absolute callback and
    /// image URLs.
    pub fn new(host: &str, signing_key: SigningKey) -> ServerResult<Self> {
        let mut host = Url::parse(host.trim())
            .map_err(|e| ServerError::Config(format!("invalid host {host:?}: {e}")))?;
        if host.cannot_be_a_base() || !matches!(host.scheme(), "http" | "https") {
            return Err(ServerError::Config(format!(
                "host must be an http(s) base URL, got {host}"
            )));
        }
        if !host.path().ends_with('/') {
            let path = format!("{}/", host.path());
            host.set_path(&path);
        }

        let post_url = join(&host, COUNT_PATH)?;
        let image_url = join(&host, IMAGE_PATH)?;

        Ok(Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            request_timeout: Duration::from_secs(30),
            max_body_bytes: 64 * 1024,
            signing_key,
            host,
            post_url,
            image_url,
        })
    }

    /// Sets the bind address.
    pub fn with_bind_addr(mut self, addr: SocketAddr) -> Self {
        self.bind_addr = addr;
        self
    }

    /// Sets the request timeout.
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Sets the maximum request body size.
    pub fn with_max_body_bytes(mut self, max: usize) -> Self {
        self.max_body_bytes = max;
        self
    }

    /// Returns the normalized host URL.
    pub fn host(&self) -> &Url {
        &self.host
    }

    /// Returns the callback URL for the next interaction.
    pub fn post_url(&self) -> &str {
        self.post_url.as_str()
    }

    /// Returns the image URL for `state`.
    ///
    /// The state is passed as URL-encoded JSON in the `state` query parameter.
    pub fn image_url(&self, state: &State) -> ServerResult<String> {
        let json = serde_json::to_string(state)
            .map_err(|e| ServerError::Internal(format!("failed to serialize state: {e}")))?;
        let mut url = self.image_url.clone();
        url.query_pairs_mut().append_pair("state", &json);
        Ok(url.into())
    }
}

fn join(host: &Url, path: &str) -> ServerResult<Url> {
    host.join(path)
        .map_err(|e| ServerError::Config(format!("cannot join {path} onto {host}: {e}")))
}
