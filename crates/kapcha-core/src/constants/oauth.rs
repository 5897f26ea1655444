// ABOUTME: Azure AD and Microsoft Graph constants for the On-Behalf-Of exchange
// ABOUTME: Grant identifiers, default hosts, consent error codes, and login scopes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

/// Public-cloud login host
pub const DEFAULT_AUTHORITY_HOST: &str = "https://login.microsoftonline.com";
/// Graph v1.0 base URL
pub const DEFAULT_GRAPH_BASE_URL: &str = "https://graph.microsoft.com/v1.0";
/// Scope used when `AZURE_API_SCOPE` is unset
pub const DEFAULT_GRAPH_SCOPE: &str = "https://graph.microsoft.com/.default";
/// Scopes requested by the web client at interactive sign-in
pub const LOGIN_SCOPES: &[&str] = &["User.Read"];

/// RFC 7523 JWT bearer grant used for OBO
pub const OBO_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";
/// Marks the JWT bearer request as an OBO exchange
pub const OBO_REQUESTED_TOKEN_USE: &str = "on_behalf_of";

/// Identity-provider error codes that require an interactive consent round trip
pub const CONSENT_ERROR_CODES: &[&str] = &["invalid_grant", "interaction_required"];

/// Graph path for the signed-in user
pub const GRAPH_ME_PATH: &str = "/me";
