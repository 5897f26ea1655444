// ABOUTME: Registry mapping provider names to SMS provider instances
// ABOUTME: Built once from configuration; new providers are added by registering them here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

use super::{GatewayProvider, SmsProvider, TwilioProvider};
use crate::config::environment::SmsConfig;
use crate::constants::{messages, sms};
use crate::errors::{AppError, AppResult};
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;

/// Named SMS providers
#[derive(Clone, Default)]
pub struct SmsProviderRegistry {
    providers: HashMap<&'static str, Arc<dyn SmsProvider>>,
}

impl SmsProviderRegistry {
    /// Registry with the built-in providers sharing one HTTP client
    #[must_use]
    pub fn with_client(config: &SmsConfig, client: &Client) -> Self {
        let mut registry = Self::default();
        registry.register(Arc::new(TwilioProvider::new(
            config.twilio.clone(),
            client.clone(),
        )));
        registry.register(Arc::new(GatewayProvider::local(
            config.local_gateway.clone(),
            client.clone(),
        )));
        registry.register(Arc::new(GatewayProvider::cloud(
            config.cloud_gateway.clone(),
            client.clone(),
        )));

        info!(
            providers = ?registry.configured_providers(),
            "SMS providers configured"
        );
        registry
    }

    /// Add or replace a provider under its own name
    pub fn register(&mut self, provider: Arc<dyn SmsProvider>) {
        self.providers.insert(provider.name(), provider);
    }

    /// Look up a provider, defaulting to Twilio when no name is given
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error for unknown names.
    pub fn resolve(&self, name: Option<&str>) -> AppResult<Arc<dyn SmsProvider>> {
        let name = name.unwrap_or(sms::DEFAULT_PROVIDER);
        self.providers
            .get(name)
            .cloned()
            .ok_or_else(|| AppError::invalid_input(messages::INVALID_SMS_PROVIDER))
    }

    /// Names of providers whose configuration is complete, sorted
    #[must_use]
    pub fn configured_providers(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = self
            .providers
            .values()
            .filter(|provider| provider.is_configured())
            .map(|provider| provider.name())
            .collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::environment::{GatewayConfig, TwilioConfig};
    use crate::errors::ErrorCode;

    fn empty_config() -> SmsConfig {
        SmsConfig {
            twilio: TwilioConfig {
                account_sid: None,
                auth_token: None,
                from_number: None,
                api_base_url: sms::DEFAULT_TWILIO_API_BASE_URL.to_owned(),
            },
            local_gateway: GatewayConfig::default(),
            cloud_gateway: GatewayConfig {
                url: Some("https://sms.example.com/send".to_owned()),
                ..GatewayConfig::default()
            },
        }
    }

    #[test]
    fn test_default_provider_is_twilio() {
        let registry = SmsProviderRegistry::with_client(&empty_config(), &Client::new());
        assert_eq!(registry.resolve(None).unwrap().name(), "twilio");
        assert_eq!(registry.resolve(Some("cloud")).unwrap().name(), "cloud");
    }

    #[test]
    fn test_unknown_provider_is_invalid_input() {
        let registry = SmsProviderRegistry::with_client(&empty_config(), &Client::new());
        let error = registry.resolve(Some("carrier-pigeon")).err().unwrap();
        assert_eq!(error.code, ErrorCode::InvalidInput);
        assert_eq!(error.message, messages::INVALID_SMS_PROVIDER);
    }

    #[test]
    fn test_unconfigured_providers_stay_registered() {
        let registry = SmsProviderRegistry::with_client(&empty_config(), &Client::new());
        for name in ["twilio", "local", "cloud"] {
            assert_eq!(registry.resolve(Some(name)).unwrap().name(), name);
        }
        assert_eq!(registry.configured_providers(), vec!["cloud"]);
    }
}
