//! Signing key material.

use crate::error::{TokenError, TokenResult};
use rand::RngCore;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Size of keys produced by [`SigningKey::generate`].
pub const GENERATED_KEY_SIZE: usize = 32;

/// Shared secret for HMAC-SHA256 token signing.
///
/// The key is automatically zeroized when dropped and is never printed.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SigningKey {
    bytes: Vec<u8>,
}

impl SigningKey {
    /// Generates a new random signing key.
    #[must_use]
    pub fn generate() -> Self {
        let mut bytes = vec![0u8; GENERATED_KEY_SIZE];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self { bytes }
    }

    /// Creates a key from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if `bytes` is empty.
    pub fn from_bytes(bytes: &[u8]) -> TokenResult<Self> {
        if bytes.is_empty() {
            return Err(TokenError::invalid_key("key must not be empty"));
        }
        Ok(Self {
            bytes: bytes.to_vec(),
        })
    }

    /// Creates a key from a hex string.
    ///
    /// Surrounding whitespace is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid hex or decodes to
    /// zero bytes.
    pub fn from_hex(encoded: &str) -> TokenResult<Self> {
        let mut bytes = hex::decode(encoded.trim())
            .map_err(|e| TokenError::invalid_key(format!("not valid hex: {e}")))?;
        let key = Self::from_bytes(&bytes);
        bytes.zeroize();
        key
    }

    /// Returns the key encoded as lowercase hex.
    ///
    /// # Security
    ///
    /// Only meant for handing a freshly generated key to an operator.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.bytes)
    }

    /// Returns the key as a byte slice.
    ///
    /// # Security
    ///
    /// Be careful with this method - don't log or serialize the result.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the key length in bytes.
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; empty keys are rejected at construction.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Debug for SigningKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SigningKey")
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}
