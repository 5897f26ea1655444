// ABOUTME: Microsoft Graph integration: the /me call and the merged profile record
// ABOUTME: Only the signed-in user's own profile is ever requested
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

/// Graph HTTP client
pub mod client;
/// Profile record merging
pub mod profile;

pub use client::GraphClient;
pub use profile::{HostProfileContext, ProfileRecord};
