//! Token signing and verification.
//!
//! Tokens are JWS compact serializations signed with HMAC-SHA256.
//!
//! ## Token Format
//!
//! ```text
//! BASE64URL(header) "." BASE64URL(payload) "." BASE64URL(tag)
//! ```
//!
//! - header: `{"alg":"HS256"}`
//! - payload: the codec output (see [`crate::encode_state`])
//! - tag: HMAC-SHA256 over the first two segments joined by `.`
//!
//! All segments use base64url without padding. Only `HS256` is accepted.

use crate::codec::{decode_state, encode_state};
use crate::error::{TokenError, TokenResult};
use crate::key::SigningKey;
use crate::state::State;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// The only algorithm this signer produces or accepts.
pub const JWS_ALGORITHM: &str = "HS256";

/// Protected header emitted on every token.
const PROTECTED_HEADER: &[u8] = br#"{"alg":"HS256"}"#;

#[derive(Deserialize)]
struct Header {
    alg: String,
    #[serde(default)]
    crit: Option<serde_json::Value>,
}

/// Signs and verifies tokens with a fixed shared secret.
#[derive(Debug, Clone)]
pub struct TokenSigner {
    key: SigningKey,
}

impl TokenSigner {
    /// Creates a signer bound to `key` for its whole lifetime.
    pub fn new(key: SigningKey) -> Self {
        Self { key }
    }

    /// Signs arbitrary payload bytes into a compact token.
    pub fn sign(&self, payload: &[u8]) -> TokenResult<String> {
        let mut token = URL_SAFE_NO_PAD.encode(PROTECTED_HEADER);
        token.push('.');
        URL_SAFE_NO_PAD.encode_string(payload, &mut token);

        let tag = self.mac(token.as_bytes())?.finalize().into_bytes();

        token.push('.');
        URL_SAFE_NO_PAD.encode_string(tag, &mut token);
        Ok(token)
    }

    /// Verifies a compact token and returns its payload bytes.
    ///
    /// Every kind of rejection is reported as [`TokenError::InvalidToken`].
    pub fn verify(&self, token: &str) -> TokenResult<Vec<u8>> {
        let (signing_input, encoded_tag) = token.rsplit_once('.').ok_or(TokenError::InvalidToken)?;
        let (encoded_header, encoded_payload) = signing_input
            .split_once('.')
            .ok_or(TokenError::InvalidToken)?;
        if encoded_payload.contains('.') {
            return Err(TokenError::InvalidToken);
        }

        let header_bytes = decode_segment(encoded_header)?;
        let header: Header =
            serde_json::from_slice(&header_bytes).map_err(|_| TokenError::InvalidToken)?;
        if header.alg != JWS_ALGORITHM || header.crit.is_some() {
            return Err(TokenError::InvalidToken);
        }

        let tag = decode_segment(encoded_tag)?;
        self.mac(signing_input.as_bytes())?
            .verify_slice(&tag)
            .map_err(|_| TokenError::InvalidToken)?;

        decode_segment(encoded_payload)
    }

    /// Encodes and signs a state.
    pub fn sign_state(&self, state: &State) -> TokenResult<String> {
        self.sign(&encode_state(state)?)
    }

    /// Verifies a token and decodes the state it carries.
    pub fn verify_state(&self, token: &str) -> TokenResult<State> {
        decode_state(&self.verify(token)?)
    }

    fn mac(&self, data: &[u8]) -> TokenResult<HmacSha256> {
        let mut mac = HmacSha256::new_from_slice(self.key.as_bytes())
            .map_err(|e| TokenError::invalid_key(e.to_string()))?;
        mac.update(data);
        Ok(mac)
    }
}

fn decode_segment(segment: &str) -> TokenResult<Vec<u8>> {
    URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|_| TokenError::InvalidToken)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signer() -> TokenSigner {
        TokenSigner::new(SigningKey::from_bytes(b"test-secret-key-32-bytes-long!!").unwrap())
    }

    /// Builds a token with an arbitrary header, correctly tagged.
    fn forge_with_header(signer: &TokenSigner, header: &str, payload: &[u8]) -> String {
        let mut token = URL_SAFE_NO_PAD.encode(header);
        token.push('.');
        token.push_str(&URL_SAFE_NO_PAD.encode(payload));
        let tag = signer.mac(token.as_bytes()).unwrap().finalize().into_bytes();
        token.push('.');
        token.push_str(&URL_SAFE_NO_PAD.encode(tag));
        token
    }

    #[test]
    fn sign_and_verify_bytes() {
        let signer = signer();
        let token = signer.sign(b"hello").unwrap();

        assert_eq!(token.split('.').count(), 3);
        assert_eq!(signer.verify(&token).unwrap(), b"hello");
    }

    #[test]
    fn header_declares_hs256() {
        let token = signer().sign(b"{}").unwrap();
        let header = token.split('.').next().unwrap();
        assert_eq!(URL_SAFE_NO_PAD.decode(header).unwrap(), PROTECTED_HEADER);
    }

    #[test]
    fn sign_and_verify_state() {
        let signer = signer();
        let state = State::new(4, 6, 2, 8);
        let token = signer.sign_state(&state).unwrap();
        assert_eq!(signer.verify_state(&token).unwrap(), state);
    }

    #[test]
    fn reject_wrong_key() {
        let token = signer().sign(b"hello").unwrap();
        let other = TokenSigner::new(SigningKey::from_bytes(b"another-key").unwrap());
        assert_eq!(other.verify(&token), Err(TokenError::InvalidToken));
    }

    #[test]
    fn reject_tampered_payload() {
        let signer = signer();
        let token = signer.sign_state(&State::new(1, 1, 0, 1)).unwrap();
        let mut parts: Vec<&str> = token.split('.').collect();
        let forged = URL_SAFE_NO_PAD.encode(br#"{"count":99,"incs":99,"decs":0,"clicks":99}"#);
        parts[1] = &forged;

        assert_eq!(signer.verify(&parts.join(".")), Err(TokenError::InvalidToken));
    }

    #[test]
    fn reject_other_algorithms() {
        let signer = signer();
        for header in [
            r#"{"alg":"none"}"#,
            r#"{"alg":"HS512"}"#,
            r#"{"alg":"hs256"}"#,
            r#"{"typ":"JWT"}"#,
        ] {
            let token = forge_with_header(&signer, header, b"{}");
            assert_eq!(signer.verify(&token), Err(TokenError::InvalidToken), "{header}");
        }
    }

    #[test]
    fn reject_critical_extensions() {
        let signer = signer();
        let token = forge_with_header(&signer, r#"{"alg":"HS256","b64":false,"crit":["b64"]}"#, b"{}");
        assert_eq!(signer.verify(&token), Err(TokenError::InvalidToken));
    }

    #[test]
    fn accept_extra_header_fields() {
        let signer = signer();
        let token = forge_with_header(&signer, r#"{"alg":"HS256","typ":"JWT"}"#, b"{}");
        assert_eq!(signer.verify(&token).unwrap(), b"{}");
    }

    #[test]
    fn reject_malformed_structure() {
        let signer = signer();
        let token = signer.sign(b"hello").unwrap();
        let (head, _) = token.rsplit_once('.').unwrap();
        let extra_segment = format!("{token}.extra");
        let padded = format!("{token}=");

        for bad in [
            "",
            ".",
            "..",
            "a.b",
            "not a token",
            head,
            extra_segment.as_str(),
            padded.as_str(),
        ] {
            assert_eq!(signer.verify(bad), Err(TokenError::InvalidToken), "{bad:?}");
        }
    }

    #[test]
    fn nonce_makes_tokens_unique() {
        let signer = signer();
        let state = State::new(2, 2, 0, 2);
        assert_ne!(
            signer.sign_state(&state).unwrap(),
            signer.sign_state(&state).unwrap()
        );
    }

    #[test]
    fn every_single_byte_flip_is_rejected() {
        let signer = signer();
        let token = signer.sign_state(&State::new(1, 1, 0, 1)).unwrap();

        for i in 0..token.len() {
            let mut bytes = token.clone().into_bytes();
            bytes[i] ^= 0x01;
            let tampered = String::from_utf8(bytes).unwrap();
            assert_eq!(
                signer.verify(&tampered),
                Err(TokenError::InvalidToken),
                "flip at {i}"
            );
        }
    }
}
