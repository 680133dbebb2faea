//! Request handler for the frame endpoint.

use crate::config::ServerConfig;
use crate::error::{ServerError, ServerResult};
use crate::response::FrameResponse;
use counterframe_protocol::{resolve_action, State, TokenError, TokenSigner};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

/// Inbound frame request.
///
/// Only `untrustedData` is read; other envelope fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameRequest {
    /// Client-reported interaction data. Not authenticated.
    pub untrusted_data: UntrustedData,
}

/// Client-reported interaction data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UntrustedData {
    /// 1-based index of the pressed button, as sent by the client.
    ///
    /// Any JSON number is accepted here; values that are not a valid
    /// button position resolve like a missing index.
    #[serde(default)]
    pub button_index: Option<serde_json::Number>,
    /// Token returned from the previous frame.
    #[serde(default)]
    pub state: Option<String>,
}

impl FrameRequest {
    /// Creates a request.
    pub fn new(button_index: Option<u32>, state: Option<String>) -> Self {
        Self {
            untrusted_data: UntrustedData {
                button_index: button_index.map(serde_json::Number::from),
                state,
            },
        }
    }

    /// Parses a request body.
    ///
    /// An empty body is a request with no button and no token.
    pub fn from_body(body: &[u8]) -> ServerResult<Self> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self::default());
        }
        serde_json::from_slice(body).map_err(|e| ServerError::InvalidRequest(e.to_string()))
    }

    /// Returns the pressed button, if it names a possible position.
    ///
    /// Negative, fractional and out-of-range indices read as `None`.
    pub fn button_index(&self) -> Option<u32> {
        self.untrusted_data
            .button_index
            .as_ref()
            .and_then(serde_json::Number::as_u64)
            .and_then(|index| u32::try_from(index).ok())
    }

    /// Returns the presented token. Empty strings count as absent.
    pub fn token(&self) -> Option<&str> {
        self.untrusted_data
            .state
            .as_deref()
            .filter(|token| !token.is_empty())
    }
}

/// Runs the signed-state pipeline for one request.
///
/// Holds only immutable data, so one handler serves any number of
/// concurrent requests.
#[derive(Debug)]
pub struct FrameHandler {
    config: Arc<ServerConfig>,
    signer: TokenSigner,
}

impl FrameHandler {
    /// Creates a new handler.
    pub fn new(config: Arc<ServerConfig>) -> Self {
        let signer = TokenSigner::new(config.signing_key.clone());
        Self { config, signer }
    }

    /// Returns the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Returns the token signer.
    pub fn signer(&self) -> &TokenSigner {
        &self.signer
    }

    /// Handles a frame request.
    pub fn handle(&self, request: &FrameRequest) -> ServerResult<FrameResponse> {
        let incoming = self.load_state(request.token())?;

        let action = resolve_action(&incoming, request.button_index());
        let next = incoming.transition(action);
        let token = self.signer.sign_state(&next)?;
        debug!(
            %action,
            button_index = ?request.button_index(),
            count = next.count,
            clicks = next.clicks,
            "derived next state"
        );

        Ok(FrameResponse::new(
            next,
            token,
            self.config.image_url(&next)?,
            self.config.post_url().to_string(),
        ))
    }

    fn load_state(&self, token: Option<&str>) -> ServerResult<State> {
        let Some(token) = token else {
            debug!("no state token, starting from zero");
            return Ok(State::initial());
        };

        match self.signer.verify_state(token) {
            Ok(state) => Ok(state),
            Err(TokenError::InvalidToken) => {
                warn!(token_len = token.len(), "rejected state token");
                Err(ServerError::MalformedToken)
            }
            Err(e) => Err(e.into()),
        }
    }
}
