// ABOUTME: Centralized resource container shared by every HTTP handler
// ABOUTME: Holds the immutable configuration and the outbound clients built from it once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

//! # Server Resources
//!
//! Built once from [`ServerConfig`] and shared behind an `Arc`. Nothing in here
//! is mutated after construction; handlers are stateless.

use crate::config::environment::ServerConfig;
use crate::graph::GraphClient;
use crate::identity::AccessPolicy;
use crate::oauth2_client::OnBehalfOfClient;
use crate::sms::SmsProviderRegistry;
use crate::utils::http_client::shared_client;
use std::sync::Arc;

/// Shared server resources
#[derive(Clone)]
pub struct ServerResources {
    /// Process configuration
    pub config: Arc<ServerConfig>,
    /// On-Behalf-Of token exchange
    pub obo_client: OnBehalfOfClient,
    /// Graph `/me` client
    pub graph_client: GraphClient,
    /// SMS providers by name
    pub sms_providers: SmsProviderRegistry,
    /// Organizational domain gate
    pub access_policy: AccessPolicy,
}

impl ServerResources {
    /// Build every client from the configuration
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let client = shared_client();
        Self {
            obo_client: OnBehalfOfClient::with_client(&config.azure, client.clone()),
            graph_client: GraphClient::with_client(&config.graph, client.clone()),
            sms_providers: SmsProviderRegistry::with_client(&config.sms, client),
            access_policy: AccessPolicy::from_config(&config.access),
            config: Arc::new(config),
        }
    }
}
