//! # Counterframe Protocol
//!
//! Signed-state counter protocol for Counterframe.
//!
//! This crate provides:
//! - `State` and the pure transition engine
//! - `Action` and the button-index resolver
//! - The token payload codec (JSON with a random nonce)
//! - `TokenSigner` for HS256 JWS compact tokens
//!
//! This is a pure protocol crate with no I/O operations.
//!
//! ## Round trip
//!
//! ```
//! use counterframe_protocol::{Action, SigningKey, State, TokenSigner};
//!
//! let signer = TokenSigner::new(SigningKey::from_bytes(b"fixture-key").unwrap());
//!
//! let next = State::initial().transition(Action::Increment);
//! let token = signer.sign_state(&next).unwrap();
//!
//! assert_eq!(signer.verify_state(&token).unwrap(), next);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
// Production code MUST NOT use panic!/unwrap()/expect()
#![warn(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod action;
mod codec;
mod error;
mod key;
mod signer;
mod state;

pub use action::{resolve_action, Action, DECREMENT_BUTTON_INDEX};
pub use codec::{decode_state, encode_state};
pub use error::{TokenError, TokenResult};
pub use key::{SigningKey, GENERATED_KEY_SIZE};
pub use signer::{TokenSigner, JWS_ALGORITHM};
pub use state::State;
