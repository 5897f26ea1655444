// ABOUTME: SMS dispatch through interchangeable providers selected by name
// ABOUTME: Defines the provider trait, send outcome, and provider error mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

//! # SMS Providers
//!
//! Every provider implements [`SmsProvider`] and is registered by name in the
//! [`registry::SmsProviderRegistry`]. Providers check their own configuration on
//! every call, so an unconfigured provider can be registered and only fails once
//! it is selected.
//!
//! | Name | Transport | Destinations per request |
//! |---|---|---|
//! | `twilio` | Twilio Messages API | one, sent concurrently |
//! | `local` | `POST {url}/message` on a LAN gateway | all |
//! | `cloud` | `POST {url}` on a hosted gateway, numbers normalized | all |

/// Concurrent per-destination fan-out
pub mod bulk;
/// HTTP SMS gateways (local network and cloud)
pub mod gateway;
/// Phone number normalization
pub mod phone;
/// Provider lookup by name
pub mod registry;
/// Twilio Messages API provider
pub mod twilio;

pub use bulk::BulkSendError;
pub use gateway::GatewayProvider;
pub use registry::SmsProviderRegistry;
pub use twilio::TwilioProvider;

use crate::constants::messages;
use crate::errors::AppError;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Destination field accepting a single number or a list
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Destinations {
    /// `"to": "0412345678"`
    One(String),
    /// `"to": ["0412345678", "0498765432"]`
    Many(Vec<String>),
}

impl Destinations {
    /// Whether the caller sent a list
    #[must_use]
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::Many(_))
    }

    /// An empty string or an empty list
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::One(destination) => destination.is_empty(),
            Self::Many(destinations) => destinations.is_empty(),
        }
    }

    /// Destinations exactly as sent, in order
    #[must_use]
    pub fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(destination) => vec![destination],
            Self::Many(destinations) => destinations,
        }
    }
}

/// Successful provider outcome
#[derive(Debug, Clone, PartialEq)]
pub enum SmsReceipt {
    /// Provider-assigned message IDs, one per destination
    Messages(Vec<String>),
    /// Gateway response body, relayed as-is
    Gateway(Value),
}

/// Provider failures
#[derive(Debug, Error)]
pub enum SmsError {
    /// The selected provider lacks required configuration
    #[error("{0}")]
    NotConfigured(&'static str),
    /// Gateway answered with a non-success status
    #[error("{label} SMS Gateway error: {text}")]
    Gateway {
        /// `Local` or `Cloud`
        label: &'static str,
        /// Response text
        text: String,
    },
    /// Twilio rejected a message
    #[error("{0}")]
    Twilio(String),
    /// One or more destinations of a fan-out failed
    #[error(transparent)]
    Bulk(#[from] BulkSendError),
    /// Network or decoding failure
    #[error("{0}")]
    Transport(#[from] reqwest::Error),
}

impl From<SmsError> for AppError {
    fn from(error: SmsError) -> Self {
        match error {
            SmsError::NotConfigured(message) => Self::config_missing(message),
            other => Self::external_service(messages::SMS_SEND_FAILED)
                .with_details(other.to_string())
                .with_source(other),
        }
    }
}

/// An SMS transport
#[async_trait]
pub trait SmsProvider: Send + Sync {
    /// Registry name, also reported back to the caller
    fn name(&self) -> &'static str;

    /// Whether the provider has the configuration it needs
    fn is_configured(&self) -> bool;

    /// Send one message body to every destination
    ///
    /// # Errors
    ///
    /// Returns [`SmsError::NotConfigured`] before any network call when
    /// configuration is missing, and other variants for delivery failures.
    async fn send(&self, destinations: &[String], message: &str) -> Result<SmsReceipt, SmsError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::{ErrorCode, ErrorResponse};

    #[test]
    fn test_destinations_accept_string_or_list() {
        let one: Destinations = serde_json::from_str(r#""0412345678""#).unwrap();
        let many: Destinations = serde_json::from_str(r#"["0412345678","0412345678"]"#).unwrap();
        assert!(!one.is_list());
        assert!(many.is_list());
        assert_eq!(many.into_vec(), vec!["0412345678", "0412345678"]);
    }

    #[test]
    fn test_destinations_are_passed_through_unchanged() {
        let padded: Destinations = serde_json::from_str(r#"" 0412 345 678 ""#).unwrap();
        assert!(!padded.is_empty());
        assert_eq!(padded.into_vec(), vec![" 0412 345 678 "]);

        let blank: Destinations = serde_json::from_str(r#""""#).unwrap();
        let none: Destinations = serde_json::from_str("[]").unwrap();
        assert!(blank.is_empty());
        assert!(none.is_empty());
    }

    #[test]
    fn test_not_configured_maps_to_named_500() {
        let error = AppError::from(SmsError::NotConfigured(messages::TWILIO_NOT_CONFIGURED));
        assert_eq!(error.code, ErrorCode::ConfigMissing);
        assert_eq!(error.http_status(), 500);
        assert_eq!(ErrorResponse::from(error).error, messages::TWILIO_NOT_CONFIGURED);
    }

    #[test]
    fn test_gateway_failure_maps_to_failed_to_send() {
        let error = AppError::from(SmsError::Gateway {
            label: "Local",
            text: "queue full".to_owned(),
        });
        let body = serde_json::to_value(ErrorResponse::from(error)).unwrap();
        assert_eq!(body["error"], "Failed to send SMS");
        assert_eq!(body["details"], "Local SMS Gateway error: queue full");
    }
}
