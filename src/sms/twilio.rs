// ABOUTME: Twilio Messages API provider sending one request per destination
// ABOUTME: Authenticates with the account SID and auth token and returns the message SIDs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

use super::bulk::send_all;
use super::{SmsError, SmsProvider, SmsReceipt};
use crate::config::environment::TwilioConfig;
use crate::constants::{messages, sms};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

/// Created message resource (only the fields used here)
#[derive(Deserialize)]
struct TwilioMessage {
    sid: String,
}

/// Twilio error document
#[derive(Deserialize)]
struct TwilioErrorBody {
    message: String,
    #[serde(default)]
    code: Option<u32>,
}

/// Twilio provider
pub struct TwilioProvider {
    config: TwilioConfig,
    client: Client,
}

impl TwilioProvider {
    /// Create the provider; configuration is checked when sending
    #[must_use]
    pub const fn new(config: TwilioConfig, client: Client) -> Self {
        Self { config, client }
    }

    async fn send_one(
        &self,
        url: &str,
        credentials: (&str, &str),
        from: &str,
        to: &str,
        body: &str,
    ) -> Result<String, SmsError> {
        let (account_sid, auth_token) = credentials;
        let response = self
            .client
            .post(url)
            .basic_auth(account_sid, Some(auth_token))
            .form(&[("To", to), ("From", from), ("Body", body)])
            .send()
            .await?;
        let status = response.status();

        if status.is_success() {
            let message: TwilioMessage = response.json().await?;
            debug!(message.sid = %message.sid, "Twilio message queued");
            return Ok(message.sid);
        }

        let text = response.text().await.unwrap_or_default();
        let reason = match serde_json::from_str::<TwilioErrorBody>(&text) {
            Ok(TwilioErrorBody {
                message,
                code: Some(code),
            }) => format!("Twilio error {code}: {message}"),
            Ok(TwilioErrorBody { message, code: None }) => message,
            Err(_) => format!("Twilio error {}: {text}", status.as_u16()),
        };
        Err(SmsError::Twilio(reason))
    }
}

#[async_trait]
impl SmsProvider for TwilioProvider {
    fn name(&self) -> &'static str {
        sms::PROVIDER_TWILIO
    }

    fn is_configured(&self) -> bool {
        self.config.credentials().is_some() && self.config.from_number.is_some()
    }

    async fn send(&self, destinations: &[String], message: &str) -> Result<SmsReceipt, SmsError> {
        let credentials = self
            .config
            .credentials()
            .ok_or(SmsError::NotConfigured(messages::TWILIO_NOT_CONFIGURED))?;
        let from = self
            .config
            .from_number
            .as_deref()
            .ok_or(SmsError::NotConfigured(messages::TWILIO_SENDER_NOT_CONFIGURED))?;

        let url = format!(
            "{}/{}/Accounts/{}/Messages.json",
            self.config.api_base_url.trim_end_matches('/'),
            sms::TWILIO_API_VERSION,
            credentials.0
        );

        let sids = send_all(destinations.iter().cloned(), |to: String| {
            let url = &url;
            async move { self.send_one(url, credentials, from, &to, message).await }
        })
        .await?;

        Ok(SmsReceipt::Messages(sids))
    }
}
