// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Endpoint paths, identity-provider values, SMS defaults, and environment keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

//! Constants module
//!
//! Constants are grouped by domain rather than collected in a single file.

/// Environment variable names read by the server configuration
pub mod env_keys;
/// User-facing error messages that clients match on
pub mod messages;
/// Azure AD and Microsoft Graph constants
pub mod oauth;
/// SMS provider constants
pub mod sms;

/// API endpoints
pub mod endpoints {
    /// Liveness endpoint
    pub const HEALTH: &str = "/health";
    /// Readiness endpoint
    pub const READY: &str = "/ready";
    /// OBO exchange and Graph `/me` relay
    pub const GRAPH_PROFILE_OBO: &str = "/api/graph/getGraphProfileOnBehalfOf";
    /// SMS dispatch
    pub const SEND_SMS: &str = "/api/send-sms";
    /// Public sign-in settings for the web client
    pub const AUTH_CONFIG: &str = "/api/auth/config";
    /// Domain-gated session check
    pub const SESSION: &str = "/api/session";
    /// Merged profile record
    pub const PROFILE: &str = "/api/profile";
}

/// Network ports
pub mod ports {
    /// Default HTTP port
    pub const DEFAULT_HTTP_PORT: u16 = 8080;
}

/// Defaults for the organizational access gate
pub mod access {
    /// Only principals under this domain may use the application
    pub const DEFAULT_ALLOWED_DOMAIN: &str = "flyonit.com.au";
}

/// Service identifiers used in logs
pub mod service_names {
    /// HTTP service name
    pub const KAPCHA_SERVER: &str = "kapcha-server";
    /// Command-line client name
    pub const KAPCHA_CLI: &str = "kapcha-cli";
}
