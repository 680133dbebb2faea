//! Serve command implementation.

use counterframe_protocol::SigningKey;
use counterframe_server::{FrameServer, ServerConfig};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{info, warn};

/// Shortest secret accepted without a warning.
const RECOMMENDED_KEY_BYTES: usize = 32;

/// Runs the serve command.
pub fn run(
    host: &str,
    bind: SocketAddr,
    timeout_secs: u64,
    secret: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let key = SigningKey::from_hex(secret)?;
    if key.len() < RECOMMENDED_KEY_BYTES {
        warn!(
            key_bytes = key.len(),
            "signing secret is shorter than {RECOMMENDED_KEY_BYTES} bytes"
        );
    }

    let config = ServerConfig::new(host, key)?
        .with_bind_addr(bind)
        .with_request_timeout(Duration::from_secs(timeout_secs));

    info!(%bind, %host, "starting frame server");

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(FrameServer::new(config).serve())?;
    Ok(())
}
