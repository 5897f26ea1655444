// ABOUTME: Identity context and organizational domain gate
// ABOUTME: Decides once per request whether a principal may use the app and whether to sign it out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

//! # Identity
//!
//! The web client runs either inside the Teams host or in a plain browser tab.
//! That fact and the signed-in principal are captured in an [`IdentityContext`]
//! and evaluated by an [`AccessPolicy`]. A denied browser session is also told to
//! sign out, because its MSAL session would otherwise stay usable; inside Teams
//! the host owns the session.

use crate::config::environment::AccessConfig;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where the web client is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostKind {
    /// Embedded in the Microsoft Teams host
    #[default]
    Teams,
    /// Stand-alone browser session
    Browser,
}

impl fmt::Display for HostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Teams => write!(f, "teams"),
            Self::Browser => write!(f, "browser"),
        }
    }
}

/// Signed-in user as reported by the host or identity provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Principal {
    /// Sign-in name, normally the UPN
    pub username: String,
    /// Display name
    #[serde(default)]
    pub display_name: Option<String>,
    /// Directory object ID
    #[serde(default)]
    pub id: Option<String>,
}

impl Principal {
    /// Principal known only by its sign-in name
    pub fn from_username(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            display_name: None,
            id: None,
        }
    }
}

/// Host and principal for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityContext {
    /// Where the client runs
    pub host: HostKind,
    /// Who is signed in
    pub principal: Principal,
}

impl IdentityContext {
    /// Build the context
    #[must_use]
    pub const fn new(host: HostKind, principal: Principal) -> Self {
        Self { host, principal }
    }
}

/// Outcome of the domain gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccessDecision {
    /// Principal belongs to the allowed domain
    Granted,
    /// Principal is outside the allowed domain
    Denied {
        /// User-facing explanation
        message: String,
        /// Whether the client must end its own session
        sign_out: bool,
    },
}

impl AccessDecision {
    /// Whether access was granted
    #[must_use]
    pub const fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Organizational access policy
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    allowed_domain: String,
}

impl AccessPolicy {
    /// Policy for one domain, given with or without a leading `@`
    pub fn new(allowed_domain: impl AsRef<str>) -> Self {
        Self {
            allowed_domain: allowed_domain
                .as_ref()
                .trim()
                .trim_start_matches('@')
                .to_owned(),
        }
    }

    /// Policy from configuration
    #[must_use]
    pub fn from_config(config: &AccessConfig) -> Self {
        Self::new(&config.allowed_domain)
    }

    /// Domain without `@`
    #[must_use]
    pub fn allowed_domain(&self) -> &str {
        &self.allowed_domain
    }

    /// Message shown to denied users
    #[must_use]
    pub fn denial_message(&self) -> String {
        format!("Access is limited to @{} users only.", self.allowed_domain)
    }

    /// Whether a username ends with `@<domain>`, case-sensitive
    #[must_use]
    pub fn permits(&self, username: &str) -> bool {
        username.ends_with(&format!("@{}", self.allowed_domain))
    }

    /// Evaluate an identity context
    #[must_use]
    pub fn evaluate(&self, identity: &IdentityContext) -> AccessDecision {
        if self.permits(&identity.principal.username) {
            AccessDecision::Granted
        } else {
            AccessDecision::Denied {
                message: self.denial_message(),
                sign_out: identity.host == HostKind::Browser,
            }
        }
    }
}
