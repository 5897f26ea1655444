// ABOUTME: KAPCHA CLI - command-line SMS panel and access check client for the KAPCHA server
// ABOUTME: Sends messages through the server's providers and previews number normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA
//!
//! Usage:
//! ```bash
//! # Send through Twilio (one request per number)
//! kapcha-cli send --to 0412345678 --to 0498765432 --message "Gate closes at 5"
//!
//! # Send through the cloud gateway with a signature
//! kapcha-cli send --provider cloud --to 0412345678 --message "Hello" \
//!     --sign-name "Pat Smith" --sign-email pat@flyonit.com.au
//!
//! # Preview how the cloud gateway will format numbers
//! kapcha-cli normalize "0412 345 678" 61412345678
//!
//! # Check whether an account passes the domain gate
//! kapcha-cli access --username pat@flyonit.com.au --host browser
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use kapcha_server::{constants::sms, identity::HostKind, logging::LoggingConfig};
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "kapcha-cli",
    about = "KAPCHA SMS panel client",
    long_about = "Command-line client for sending SMS through a running KAPCHA server and checking domain access."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// KAPCHA server base URL
    #[arg(long, global = true, env = "KAPCHA_SERVER_URL", default_value = "http://localhost:8080")]
    server: String,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Send a message to one or more numbers
    Send {
        /// Destination number; repeat for several
        #[arg(long = "to", required = true)]
        to: Vec<String>,

        /// Message body
        #[arg(long, short = 'm')]
        message: String,

        /// Provider: twilio, local, or cloud
        #[arg(long, default_value = sms::DEFAULT_PROVIDER)]
        provider: String,

        /// Signature name; a signature is appended when name and email are given
        #[arg(long, requires = "sign_email")]
        sign_name: Option<String>,

        /// Signature email
        #[arg(long, requires = "sign_name")]
        sign_email: Option<String>,
    },

    /// Show numbers in the format the cloud gateway receives
    Normalize {
        /// Numbers to format
        #[arg(required = true)]
        numbers: Vec<String>,
    },

    /// Check an account against the domain gate
    Access {
        /// Sign-in name
        #[arg(long)]
        username: String,

        /// Where the session runs
        #[arg(long, value_enum, default_value = "teams")]
        host: HostArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum HostArg {
    Teams,
    Browser,
}

impl From<HostArg> for HostKind {
    fn from(host: HostArg) -> Self {
        match host {
            HostArg::Teams => Self::Teams,
            HostArg::Browser => Self::Browser,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::for_cli();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging.init()?;
    debug!(server = %cli.server, "KAPCHA CLI");

    match cli.command {
        Command::Send {
            to,
            message,
            provider,
            sign_name,
            sign_email,
        } => {
            let signature = sign_name.zip(sign_email);
            commands::sms::send(&cli.server, &to, &message, &provider, signature).await?;
        }
        Command::Normalize { numbers } => commands::sms::normalize(&numbers),
        Command::Access { username, host } => {
            commands::access::check(&cli.server, &username, host.into()).await?;
        }
    }

    Ok(())
}
