// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Exposes the environment-derived ServerConfig and its provider sub-configurations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

//! Configuration module for the KAPCHA server
//!
//! - **Environment**: Server, Azure AD, Graph, SMS provider and access settings
//!   read from environment variables once at startup

/// Environment and server configuration
pub mod environment;

pub use environment::{
    AccessConfig, AzureAdConfig, CorsConfig, Environment, GatewayConfig, GraphConfig, LogLevel,
    ServerConfig, SmsConfig, TwilioConfig,
};
