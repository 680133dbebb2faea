//! Keygen command implementation.

use counterframe_protocol::SigningKey;

/// Runs the keygen command.
///
/// Prints only the hex secret so the output can be piped into an
/// environment file.
pub fn run() {
    let key = SigningKey::generate();
    println!("{}", key.to_hex());
}
