//! Counterframe CLI
//!
//! Command-line tools for running and operating a Counterframe server.
//!
//! # Commands
//!
//! - `serve` - Run the frame server
//! - `keygen` - Generate a signing secret
//! - `mint` - Sign an arbitrary state into a token
//! - `inspect` - Verify a token and print its state

mod commands;

use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use tracing_subscriber::EnvFilter;

/// Counterframe command-line tools.
#[derive(Parser)]
#[command(name = "counterframe")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Signing secret shared by every command that touches tokens.
#[derive(clap::Args)]
struct SecretArgs {
    /// Hex-encoded signing secret
    #[arg(long, env = "JWS_SECRET", hide_env_values = true)]
    secret: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the frame server
    Serve {
        /// Public base URL used in callback and image URLs
        #[arg(long, env = "HOST", default_value = "http://127.0.0.1:8080")]
        host: String,

        /// Address to bind to
        #[arg(short, long, env = "BIND_ADDR", default_value = "127.0.0.1:8080")]
        bind: SocketAddr,

        /// Request timeout in seconds
        #[arg(long, default_value = "30")]
        timeout_secs: u64,

        #[command(flatten)]
        secret: SecretArgs,
    },

    /// Generate a random signing secret
    Keygen,

    /// Sign an arbitrary state into a token
    Mint {
        /// Counter value
        #[arg(long, default_value = "0")]
        count: u64,

        /// Total increments
        #[arg(long, default_value = "0")]
        incs: u64,

        /// Total decrements
        #[arg(long, default_value = "0")]
        decs: u64,

        /// Total clicks
        #[arg(long, default_value = "0")]
        clicks: u64,

        #[command(flatten)]
        secret: SecretArgs,
    },

    /// Verify a token and print the state it carries
    Inspect {
        /// The token to verify
        token: String,

        /// Output format (json, text)
        #[arg(short, long, default_value = "json")]
        format: String,

        #[command(flatten)]
        secret: SecretArgs,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Serve {
            host,
            bind,
            timeout_secs,
            secret,
        } => {
            commands::serve::run(&host, bind, timeout_secs, &secret.secret)?;
        }
        Commands::Keygen => {
            commands::keygen::run();
        }
        Commands::Mint {
            count,
            incs,
            decs,
            clicks,
            secret,
        } => {
            let state = counterframe_protocol::State::new(count, incs, decs, clicks);
            commands::token::mint(&state, &secret.secret)?;
        }
        Commands::Inspect {
            token,
            format,
            secret,
        } => {
            commands::token::inspect(&token, &format, &secret.secret)?;
        }
        Commands::Version => {
            println!("Counterframe CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("Signing algorithm: {}", counterframe_protocol::JWS_ALGORITHM);
        }
    }

    Ok(())
}
