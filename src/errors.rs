// ABOUTME: Re-export of the unified error types from the kapcha-core crate
// ABOUTME: Keeps crate::errors paths stable for handlers, providers and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

//! # Unified Error Handling System
//!
//! Defined in `kapcha_core::errors` so the error types can be shared without
//! pulling in the whole server.

pub use kapcha_core::errors::*;
