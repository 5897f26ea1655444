// ABOUTME: Main library entry point for the KAPCHA Teams tab backend
// ABOUTME: Provides SMS dispatch, Graph profile retrieval via On-Behalf-Of, and domain-gated sign-in
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

#![deny(unsafe_code)]

//! # KAPCHA Server
//!
//! Backend for the KAPCHA Microsoft Teams tab. Every request handler is
//! stateless and calls at most one kind of external API:
//!
//! - **SMS**: dispatch through Twilio, a local-network gateway, or a cloud gateway
//! - **Graph**: exchange the Teams SSO token On-Behalf-Of the user and relay `/me`
//! - **Access**: allow only principals of the organization's domain
//!
//! ## Architecture
//!
//! - **Config**: one immutable [`config::ServerConfig`] assembled at startup
//! - **Resources**: clients built once from the configuration and shared behind an `Arc`
//! - **Routes**: thin axum handlers that delegate to providers and clients
//! - **Client**: the SMS panel client used by the `kapcha-cli` binary
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use kapcha_server::config::environment::ServerConfig;
//! use kapcha_server::resources::ServerResources;
//! use kapcha_server::server::KapchaServer;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let server = KapchaServer::new(Arc::new(ServerResources::new(config)));
//!     server.run().await
//! }
//! ```

/// SMS panel client for the command-line tool
pub mod client;

/// Configuration management
pub mod config;

/// Application constants
pub mod constants;

/// Unified error handling
pub mod errors;

/// Microsoft Graph `/me` client and profile record
pub mod graph;

/// Identity context and domain gate
pub mod identity;

/// Logging configuration and structured event helpers
pub mod logging;

/// HTTP middleware
pub mod middleware;

/// Azure AD token acquisition
pub mod oauth2_client;

/// Shared server resources
pub mod resources;

/// HTTP route handlers
pub mod routes;

/// HTTP server lifecycle
pub mod server;

/// SMS providers
pub mod sms;

/// Shared utilities
pub mod utils;
