//! Token commands (mint, inspect).

use counterframe_protocol::{SigningKey, State, TokenError, TokenSigner};
use tracing::warn;

/// Signs `state` and prints the token.
pub fn mint(state: &State, secret: &str) -> Result<(), Box<dyn std::error::Error>> {
    let signer = TokenSigner::new(SigningKey::from_hex(secret)?);
    if state.incs.checked_add(state.decs) != Some(state.clicks) {
        warn!(?state, "minting a state whose clicks differ from incs + decs");
    }
    println!("{}", signer.sign_state(state)?);
    Ok(())
}

/// Verifies `token` and prints the state it carries.
pub fn inspect(token: &str, format: &str, secret: &str) -> Result<(), Box<dyn std::error::Error>> {
    let signer = TokenSigner::new(SigningKey::from_hex(secret)?);

    let state = match signer.verify_state(token.trim()) {
        Ok(state) => state,
        Err(TokenError::InvalidToken) => {
            println!("✗ Token is invalid");
            return Err("Token verification failed".into());
        }
        Err(e) => return Err(e.into()),
    };

    match format {
        "text" => {
            println!("✓ Token is valid");
            println!();
            println!("Count:  {}", state.count);
            println!("Incs:   {}", state.incs);
            println!("Decs:   {}", state.decs);
            println!("Clicks: {}", state.clicks);
        }
        _ => println!("{}", serde_json::to_string_pretty(&state)?),
    }

    Ok(())
}
