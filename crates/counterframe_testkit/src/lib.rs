//! # Counterframe Testkit
//!
//! Test utilities for Counterframe.
//!
//! This crate provides:
//! - Fixture keys, signers, handlers and servers
//! - A scripted embedding client (`FrameSession`)
//! - Property-based test generators using proptest
//! - Golden end-to-end scenarios
//!
//! ## Usage
//!
//! ```rust,ignore
//! use counterframe_testkit::prelude::*;
//!
//! #[test]
//! fn press_plus_twice() {
//!     let mut session = FrameSession::new();
//!     session.press(1);
//!     assert_eq!(session.press(1).state.count, 2);
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod golden;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::golden::*;
}

pub use fixtures::*;
pub use generators::*;
pub use golden::*;
