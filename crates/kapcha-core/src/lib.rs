// ABOUTME: Core types and constants for the KAPCHA Teams backend
// ABOUTME: Foundation crate with the unified error system and domain-separated constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

#![deny(unsafe_code)]

//! # KAPCHA Core
//!
//! Shared foundation for the KAPCHA server and command-line client. This crate
//! changes rarely, which keeps incremental builds of the service crate fast.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and the `{error, message, details}` wire shape
//! - **constants**: endpoint paths, identity-provider values, SMS defaults, env keys

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;
