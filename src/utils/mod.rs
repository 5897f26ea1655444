// ABOUTME: Utility module aggregating shared helpers
// ABOUTME: Currently holds HTTP client construction shared by all outbound integrations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

/// Shared HTTP client utilities
pub mod http_client;
