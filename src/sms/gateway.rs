// ABOUTME: HTTP SMS gateway provider for the local-network and cloud-hosted gateways
// ABOUTME: Sends one JSON request carrying every destination, with optional basic auth
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

use super::phone::normalize_phone_number;
use super::{SmsError, SmsProvider, SmsReceipt};
use crate::config::environment::GatewayConfig;
use crate::constants::{messages, sms};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Request body accepted by both gateways
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GatewayMessage<'a> {
    message: &'a str,
    phone_numbers: Vec<String>,
}

/// Which gateway flavour a provider talks to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum GatewayKind {
    /// LAN gateway app, messages posted to `{url}/message`
    Local,
    /// Hosted gateway, messages posted to `{url}`, numbers normalized
    Cloud,
}

impl GatewayKind {
    const fn name(self) -> &'static str {
        match self {
            Self::Local => sms::PROVIDER_LOCAL,
            Self::Cloud => sms::PROVIDER_CLOUD,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Local => "Local",
            Self::Cloud => "Cloud",
        }
    }

    const fn not_configured(self) -> &'static str {
        match self {
            Self::Local => messages::LOCAL_GATEWAY_NOT_CONFIGURED,
            Self::Cloud => messages::CLOUD_GATEWAY_NOT_CONFIGURED,
        }
    }

    fn endpoint(self, url: &str) -> String {
        match self {
            Self::Local => format!(
                "{}{}",
                url.trim_end_matches('/'),
                sms::LOCAL_GATEWAY_MESSAGE_PATH
            ),
            Self::Cloud => url.to_owned(),
        }
    }

    fn format_destinations(self, destinations: &[String]) -> Vec<String> {
        match self {
            Self::Local => destinations.to_vec(),
            Self::Cloud => destinations
                .iter()
                .map(|destination| normalize_phone_number(destination))
                .collect(),
        }
    }
}

/// SMS gateway provider
pub struct GatewayProvider {
    kind: GatewayKind,
    config: GatewayConfig,
    client: Client,
}

impl GatewayProvider {
    /// Gateway app on the local network
    #[must_use]
    pub const fn local(config: GatewayConfig, client: Client) -> Self {
        Self {
            kind: GatewayKind::Local,
            config,
            client,
        }
    }

    /// Cloud-hosted gateway
    #[must_use]
    pub const fn cloud(config: GatewayConfig, client: Client) -> Self {
        Self {
            kind: GatewayKind::Cloud,
            config,
            client,
        }
    }
}

#[async_trait]
impl SmsProvider for GatewayProvider {
    fn name(&self) -> &'static str {
        self.kind.name()
    }

    fn is_configured(&self) -> bool {
        self.config.url.is_some()
    }

    async fn send(&self, destinations: &[String], message: &str) -> Result<SmsReceipt, SmsError> {
        let url = self
            .config
            .url
            .as_deref()
            .ok_or_else(|| SmsError::NotConfigured(self.kind.not_configured()))?;
        let endpoint = self.kind.endpoint(url);

        let body = GatewayMessage {
            message,
            phone_numbers: self.kind.format_destinations(destinations),
        };

        let mut request = self.client.post(&endpoint).json(&body);
        if let Some((username, password)) = self.config.basic_auth() {
            request = request.basic_auth(username, Some(password));
        }

        debug!(
            gateway = self.kind.name(),
            destinations = body.phone_numbers.len(),
            "Posting to SMS gateway"
        );

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(SmsError::Gateway {
                label: self.kind.label(),
                text: response.text().await.unwrap_or_default(),
            });
        }

        let result: Value = response.json().await?;
        Ok(SmsReceipt::Gateway(result))
    }
}
