// ABOUTME: KAPCHA server binary: loads configuration, initializes logging, and serves the HTTP API
// ABOUTME: Startup fails fast when the Azure AD sign-in settings are incomplete
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

//! # KAPCHA Server Binary
//!
//! Backend for the KAPCHA Teams tab: SMS dispatch, Graph profile retrieval via
//! On-Behalf-Of, and the organizational domain gate.

use anyhow::Result;
use clap::Parser;
use kapcha_server::{
    config::environment::ServerConfig, constants::endpoints, logging, resources::ServerResources,
    server::KapchaServer,
};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "kapcha-server")]
#[command(about = "KAPCHA Teams tab backend - SMS dispatch, Graph profile, domain-gated sign-in")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override listen address
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Configuration error: {e:#}");
            return Err(e);
        }
    };

    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }

    info!("Starting KAPCHA server");
    info!("{}", config.summary());
    display_available_endpoints(&config);

    let resources = Arc::new(ServerResources::new(config));
    let server = KapchaServer::new(resources);

    if let Err(e) = server.run().await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}

/// Display all available API endpoints
#[allow(clippy::cognitive_complexity)]
fn display_available_endpoints(config: &ServerConfig) {
    let base = format!("http://{}:{}", config.host, config.http_port);

    info!("=== Available API Endpoints ===");
    info!("   Health Check:      GET  {base}{}", endpoints::HEALTH);
    info!("   Readiness:         GET  {base}{}", endpoints::READY);
    info!("   Sign-in Settings:  GET  {base}{}", endpoints::AUTH_CONFIG);
    info!("   Session Check:     POST {base}{}", endpoints::SESSION);
    info!("   Profile:           POST {base}{}", endpoints::PROFILE);
    info!("   Graph via OBO:     POST {base}{}", endpoints::GRAPH_PROFILE_OBO);
    info!("   Send SMS:          POST {base}{}", endpoints::SEND_SMS);
    info!("=== End of Endpoint List ===");
}
