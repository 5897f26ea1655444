// ABOUTME: OAuth 2.0 client side of the service: Azure AD token acquisition
// ABOUTME: The server exchanges Teams SSO assertions for downstream Graph tokens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

//! # OAuth 2.0 Client Module
//!
//! The backend acts as a confidential client of Azure AD. The only grant it
//! performs is On-Behalf-Of: the Teams SSO token a user already holds is traded
//! for a Graph token scoped to the configured API scope.

/// On-Behalf-Of token exchange
pub mod obo;

pub use obo::{OboError, OboToken, OnBehalfOfClient};
