// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA
// ABOUTME: Re-exports command modules for kapcha-cli
// ABOUTME: Provides SMS sending and domain access commands

pub mod access;
pub mod sms;
