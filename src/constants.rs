// ABOUTME: Re-export of the domain-separated constants from the kapcha-core crate
// ABOUTME: Endpoint paths, environment keys, messages, OAuth and SMS values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

pub use kapcha_core::constants::*;
