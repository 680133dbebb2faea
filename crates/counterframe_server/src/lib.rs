//! # Counterframe Server
//!
//! Stateless HTTP server for the Counterframe protocol.
//!
//! This crate provides:
//! - The per-request protocol pipeline (`FrameHandler`)
//! - Frame response documents (HTML meta tags)
//! - Server configuration and error classification
//! - An axum router serving `GET`/`POST /api/count`
//!
//! # Architecture
//!
//! The server keeps no session storage. Every request:
//! 1. Verifies the incoming token, or starts from the zero state
//! 2. Resolves the pressed button into an action
//! 3. Derives the next state
//! 4. Signs the next state into a fresh token
//! 5. Renders a frame document carrying the token and the next controls
//!
//! The only shared data is the immutable configuration and signing key.
//!
//! # Example
//!
//! ```rust,ignore
//! use counterframe_protocol::SigningKey;
//! use counterframe_server::{FrameServer, ServerConfig};
//!
//! let key = SigningKey::from_hex(&std::env::var("JWS_SECRET")?)?;
//! let config = ServerConfig::new("https://frame.example", key)?;
//! FrameServer::new(config).serve().await?;
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
// Production code MUST NOT use panic!/unwrap()/expect()
#![warn(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod config;
mod error;
mod handler;
mod response;
mod server;

pub use config::{ServerConfig, COUNT_PATH, IMAGE_PATH};
pub use error::{ServerError, ServerResult};
pub use handler::{FrameHandler, FrameRequest, UntrustedData};
pub use response::{buttons_for, FrameButton, FrameResponse, FRAME_TITLE, FRAME_VERSION};
pub use server::FrameServer;
