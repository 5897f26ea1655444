// ABOUTME: SMS panel client that drives the server's send-sms endpoint on behalf of an operator
// ABOUTME: Deduplicates destinations, appends an optional signature, and aggregates per-request failures
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

//! # SMS Panel Client
//!
//! Twilio sends are issued as one request per destination, concurrently. The
//! gateway providers accept the whole list in a single request.

use crate::constants::{endpoints, messages, sms};
use crate::routes::sms::SendSmsResponse;
use crate::sms::bulk::{send_all, BulkSendError};
use crate::sms::phone::dedupe_destinations;
use crate::utils::http_client::shared_client;
use chrono::{DateTime, Local};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Operator signature appended below the message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    /// Sender display name
    pub name: String,
    /// Sender email
    pub email: String,
    /// Timestamp shown in the signature
    pub sent_at: String,
}

impl Signature {
    /// Signature stamped with the given local time
    pub fn new(name: impl Into<String>, email: impl Into<String>, at: DateTime<Local>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            sent_at: at.format("%d/%m/%Y, %-I:%M:%S %P").to_string(),
        }
    }

    /// Signature stamped now
    pub fn now(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self::new(name, email, Local::now())
    }

    /// Three-line signature block
    #[must_use]
    pub fn render(&self) -> String {
        format!("{}\n{}\nSent at: {}", self.name, self.email, self.sent_at)
    }

    /// Message followed by a blank line and the signature
    #[must_use]
    pub fn apply(&self, message: &str) -> String {
        format!("{message}\n\n{}", self.render())
    }
}

/// Client-side failures
#[derive(Debug, Error)]
pub enum SmsClientError {
    /// Nothing left to send to after cleanup
    #[error("{}", messages::NO_DESTINATIONS)]
    NoDestinations,
    /// Empty message body
    #[error("Please enter a message")]
    EmptyMessage,
    /// At least one request failed
    #[error(transparent)]
    Failed(#[from] BulkSendError),
}

#[derive(Serialize)]
#[serde(untagged)]
enum ToField<'a> {
    One(&'a str),
    Many(&'a [String]),
}

#[derive(Serialize)]
struct SendSmsBody<'a> {
    to: ToField<'a>,
    message: &'a str,
    provider: &'a str,
}

#[derive(Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<Value>,
    #[serde(default)]
    details: Option<Value>,
}

/// Non-empty string form of an error field
fn field_text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(text) if text.is_empty() => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

/// Client for the KAPCHA server
#[derive(Clone)]
pub struct SmsPanelClient {
    client: Client,
    base_url: String,
}

impl SmsPanelClient {
    /// Client using the shared HTTP client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, shared_client().clone())
    }

    /// Client using the given HTTP client
    pub fn with_client(base_url: impl Into<String>, client: Client) -> Self {
        let base_url = base_url.into();
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Send a message to every destination through the named provider
    ///
    /// # Errors
    ///
    /// Fails before any request when there is no destination or message, and
    /// with an aggregated error when any request is answered with a non-2xx status.
    pub async fn send(
        &self,
        destinations: &[String],
        message: &str,
        provider: &str,
        signature: Option<&Signature>,
    ) -> Result<Vec<SendSmsResponse>, SmsClientError> {
        let destinations = dedupe_destinations(destinations);
        if destinations.is_empty() {
            return Err(SmsClientError::NoDestinations);
        }
        if message.trim().is_empty() {
            return Err(SmsClientError::EmptyMessage);
        }

        let body = signature.map_or_else(|| message.to_owned(), |sig| sig.apply(message));
        let requests: Vec<ToField<'_>> = if provider == sms::PROVIDER_TWILIO {
            destinations.iter().map(|to| ToField::One(to.as_str())).collect()
        } else {
            vec![ToField::Many(&destinations)]
        };

        let responses = send_all(requests, |to| {
            let body = &body;
            async move {
                self.post_send(&SendSmsBody {
                    to,
                    message: body,
                    provider,
                })
                .await
            }
        })
        .await?;

        Ok(responses)
    }

    async fn post_send(&self, body: &SendSmsBody<'_>) -> Result<SendSmsResponse, String> {
        let url = format!("{}{}", self.base_url, endpoints::SEND_SMS);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| format!("Error: {e}"))?;
        let status = response.status();

        if status.is_success() {
            return response
                .json::<SendSmsResponse>()
                .await
                .map_err(|e| format!("Error: {e}"));
        }

        let text = response.text().await.unwrap_or_default();
        let error = serde_json::from_str::<ErrorBody>(&text).ok();
        Err(error
            .and_then(|error| field_text(error.error).or_else(|| field_text(error.details)))
            .unwrap_or_else(|| format!("Error {}", status.as_u16())))
    }
}
