//! Token payload codec.
//!
//! The payload is a JSON object holding the four state fields plus a
//! random `nonce`. The nonce only varies the encoded bytes, so two
//! encodings of the same state never produce the same token.
//!
//! ## Payload Format
//!
//! ```text
//! {"count":1,"incs":1,"decs":0,"clicks":1,"nonce":"<uuid v4>"}
//! ```
//!
//! Decoding ignores unknown fields (the nonce included) and rejects
//! missing or negative numeric fields.

use crate::error::{TokenError, TokenResult};
use crate::state::State;
use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize)]
struct Payload {
    #[serde(flatten)]
    state: State,
    nonce: Uuid,
}

/// Encodes a state into payload bytes with a fresh nonce.
pub fn encode_state(state: &State) -> TokenResult<Vec<u8>> {
    let payload = Payload {
        state: *state,
        nonce: Uuid::new_v4(),
    };
    serde_json::to_vec(&payload).map_err(|e| TokenError::encoding(e.to_string()))
}

/// Decodes payload bytes into a state, discarding the nonce.
pub fn decode_state(bytes: &[u8]) -> TokenResult<State> {
    serde_json::from_slice(bytes).map_err(|e| TokenError::payload(e.to_string()))
}
