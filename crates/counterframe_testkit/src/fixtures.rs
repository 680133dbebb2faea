//! Test fixtures and protocol helpers.
//!
//! Provides fixture keys and ready-made handlers so tests never depend
//! on process configuration.

use counterframe_protocol::{SigningKey, State, TokenSigner};
use counterframe_server::{FrameHandler, FrameRequest, FrameResponse, FrameServer, ServerConfig};
use std::sync::Arc;

/// Hex secret used by every fixture.
pub const FIXTURE_SECRET_HEX: &str =
    "7f3c1a9e5b2d4f6081a3c5e7092b4d6f8a1c3e5079b2d4f6a8c0e2143658709a";

/// Base URL used by every fixture.
pub const FIXTURE_HOST: &str = "https://frame.example";

/// Returns the fixture signing key.
pub fn fixture_key() -> SigningKey {
    SigningKey::from_hex(FIXTURE_SECRET_HEX).expect("fixture secret is valid hex")
}

/// Returns a signer bound to the fixture key.
pub fn fixture_signer() -> TokenSigner {
    TokenSigner::new(fixture_key())
}

/// Returns a server configuration using the fixture key and host.
pub fn fixture_config() -> ServerConfig {
    ServerConfig::new(FIXTURE_HOST, fixture_key()).expect("fixture host is valid")
}

/// Returns a handler using the fixture configuration.
pub fn fixture_handler() -> FrameHandler {
    FrameHandler::new(Arc::new(fixture_config()))
}

/// Returns a server using the fixture configuration.
pub fn fixture_server() -> FrameServer {
    FrameServer::new(fixture_config())
}

/// Signs `state` with the fixture key.
pub fn token_for(state: &State) -> String {
    fixture_signer()
        .sign_state(state)
        .expect("fixture signing succeeds")
}

/// Builds a JSON request body as sent by the embedding client.
pub fn frame_body(button_index: Option<u32>, token: Option<&str>) -> String {
    let mut untrusted = serde_json::Map::new();
    untrusted.insert("fid".into(), 1.into());
    untrusted.insert("url".into(), FIXTURE_HOST.into());
    if let Some(index) = button_index {
        untrusted.insert("buttonIndex".into(), index.into());
    }
    if let Some(token) = token {
        untrusted.insert("state".into(), token.into());
    }
    serde_json::json!({
        "untrustedData": untrusted,
        "trustedData": { "messageBytes": "" },
    })
    .to_string()
}

/// Extracts the `content` of the `<meta name="...">` tag called `name`.
pub fn meta_content(html: &str, name: &str) -> Option<String> {
    let marker = format!(r#"name="{name}" content=""#);
    let start = html.find(&marker)? + marker.len();
    let end = html[start..].find('"')?;
    Some(html[start..start + end].to_string())
}

/// Returns the labels of the rendered buttons, in index order.
pub fn button_labels(html: &str) -> Vec<String> {
    (1..)
        .map_while(|index| meta_content(html, &format!("fc:frame:button:{index}")))
        .collect()
}

/// A scripted embedding client.
///
/// Replays the token from the previous frame on every press, the way a
/// feed renderer would.
pub struct FrameSession {
    handler: FrameHandler,
    token: Option<String>,
    last: Option<FrameResponse>,
}

impl FrameSession {
    /// Creates a session against the fixture handler with no token yet.
    pub fn new() -> Self {
        Self {
            handler: fixture_handler(),
            token: None,
            last: None,
        }
    }

    /// Creates a session that resumes from `state`.
    pub fn resume(state: &State) -> Self {
        Self {
            token: Some(token_for(state)),
            ..Self::new()
        }
    }

    /// Presses the button at `index` and keeps the returned token.
    pub fn press(&mut self, index: u32) -> FrameResponse {
        let request = FrameRequest::new(Some(index), self.token.clone());
        let response = self.handler.handle(&request).expect("frame request succeeds");
        self.token = Some(response.token.clone());
        self.last = Some(response.clone());
        response
    }

    /// Returns the token the next press will present.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns the state carried by the current token.
    pub fn state(&self) -> State {
        self.token
            .as_deref()
            .map(|token| {
                self.handler
                    .signer()
                    .verify_state(token)
                    .expect("session token verifies")
            })
            .unwrap_or_else(State::initial)
    }

    /// Returns the last frame received.
    pub fn last(&self) -> Option<&FrameResponse> {
        self.last.as_ref()
    }
}

impl Default for FrameSession {
    fn default() -> Self {
        Self::new()
    }
}
