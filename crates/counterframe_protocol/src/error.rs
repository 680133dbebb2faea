//! Error types for the protocol crate.

use thiserror::Error;

/// Result type for token operations.
pub type TokenResult<T> = Result<T, TokenError>;

/// Errors that can occur while encoding, signing or verifying tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The token failed verification.
    ///
    /// Structural defects, bad base64, an unexpected algorithm and a tag
    /// mismatch all map here so callers cannot tell them apart.
    #[error("invalid token")]
    InvalidToken,

    /// The signature verified but the payload is not a valid state.
    #[error("invalid payload: {message}")]
    Payload {
        /// Description of the payload error.
        message: String,
    },

    /// Failed to serialize a payload.
    #[error("encoding failed: {message}")]
    Encoding {
        /// Description of the encoding error.
        message: String,
    },

    /// Key material was rejected.
    #[error("invalid signing key: {message}")]
    InvalidKey {
        /// Description of the key error.
        message: String,
    },
}

impl TokenError {
    /// Create an invalid payload error.
    pub fn payload(message: impl Into<String>) -> Self {
        Self::Payload {
            message: message.into(),
        }
    }

    /// Create an encoding failed error.
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding {
            message: message.into(),
        }
    }

    /// Create an invalid key error.
    pub fn invalid_key(message: impl Into<String>) -> Self {
        Self::InvalidKey {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_token_is_opaque() {
        let err = TokenError::InvalidToken;
        assert_eq!(err.to_string(), "invalid token");
    }

    #[test]
    fn payload_error_is_not_invalid_token() {
        let err = TokenError::payload("missing field `count`");
        assert_ne!(err, TokenError::InvalidToken);
        assert!(err.to_string().contains("count"));
    }
}
