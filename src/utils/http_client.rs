// ABOUTME: Shared HTTP client with connection pooling for every outbound call
// ABOUTME: Uses reqwest's default timeouts; no per-call timeout configuration is applied
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;

/// User agent sent on outbound requests
const USER_AGENT: &str = concat!("kapcha-server/", env!("CARGO_PKG_VERSION"));

/// Global shared HTTP client with default configuration
static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Get or create the shared HTTP client
///
/// Cloning the returned client shares its connection pool.
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(create_client)
}

/// Create a new HTTP client with reqwest's default timeouts
///
/// Falls back to a default client if the builder fails.
#[must_use]
pub fn create_client() -> Client {
    ClientBuilder::new()
        .user_agent(USER_AGENT)
        .build()
        .unwrap_or_else(|_| Client::new())
}
