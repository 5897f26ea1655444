// ABOUTME: SMS provider constants: API hosts, gateway paths, and the number-normalization prefix
// ABOUTME: Shared by the server-side providers and the command-line client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

/// Twilio REST API host
pub const DEFAULT_TWILIO_API_BASE_URL: &str = "https://api.twilio.com";
/// Twilio API version segment
pub const TWILIO_API_VERSION: &str = "2010-04-01";
/// Path appended to the local gateway base URL
pub const LOCAL_GATEWAY_MESSAGE_PATH: &str = "/message";
/// Country prefix assumed for numbers without one
pub const AU_COUNTRY_PREFIX: &str = "+61";
/// Provider used when the request does not name one
pub const DEFAULT_PROVIDER: &str = "twilio";

/// Registry name of the Twilio provider
pub const PROVIDER_TWILIO: &str = "twilio";
/// Registry name of the local-network gateway provider
pub const PROVIDER_LOCAL: &str = "local";
/// Registry name of the cloud gateway provider
pub const PROVIDER_CLOUD: &str = "cloud";
