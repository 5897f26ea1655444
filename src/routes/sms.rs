// ABOUTME: Route handler for SMS dispatch through the selected provider
// ABOUTME: Validates the request, resolves the provider by name, and shapes the provider receipt
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

use super::method_not_allowed;
use crate::constants::{endpoints, messages};
use crate::errors::{AppError, AppResult};
use crate::logging::AppLogger;
use crate::resources::ServerResources;
use crate::sms::{Destinations, SmsReceipt};
use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// SMS dispatch request
#[derive(Debug, Default, Deserialize)]
pub struct SendSmsRequest {
    /// One destination or a list
    #[serde(default)]
    pub to: Option<Destinations>,
    /// Message body
    #[serde(default)]
    pub message: Option<String>,
    /// Provider name: `None` when the field is absent, `Some(None)` for an explicit `null`
    #[serde(default, deserialize_with = "present_field")]
    pub provider: Option<Option<String>>,
}

/// Requested provider name; the Twilio default applies only when the field is absent
///
/// An explicit `null` is not a provider name and is rejected like an unknown one.
fn requested_provider(field: Option<Option<String>>) -> AppResult<Option<String>> {
    match field {
        None => Ok(None),
        Some(Some(name)) => Ok(Some(name)),
        Some(None) => Err(AppError::invalid_input(messages::INVALID_SMS_PROVIDER)),
    }
}

/// Mark a field as present so an explicit `null` differs from an absent key
fn present_field<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// SMS dispatch response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendSmsResponse {
    /// Always true; failures are returned as errors
    pub success: bool,
    /// Provider that handled the request
    pub provider: String,
    /// First provider message ID (Twilio)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_id: Option<String>,
    /// Every provider message ID when a list was sent (Twilio)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_ids: Option<Vec<String>>,
    /// Gateway response body (local and cloud)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
}

impl SendSmsResponse {
    fn from_receipt(provider: &str, receipt: SmsReceipt, list_input: bool) -> Self {
        match receipt {
            SmsReceipt::Messages(ids) => Self {
                success: true,
                provider: provider.to_owned(),
                message_id: ids.first().cloned(),
                message_ids: list_input.then_some(ids),
                result: None,
            },
            SmsReceipt::Gateway(result) => Self {
                success: true,
                provider: provider.to_owned(),
                message_id: None,
                message_ids: None,
                result: Some(result),
            },
        }
    }
}

/// SMS routes
pub struct SmsRoutes;

impl SmsRoutes {
    /// Create the SMS dispatch route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                endpoints::SEND_SMS,
                post(Self::handle_send_sms).fallback(method_not_allowed),
            )
            .with_state(resources)
    }

    /// Handle POST /api/send-sms
    async fn handle_send_sms(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<SendSmsRequest>, JsonRejection>,
    ) -> AppResult<Json<SendSmsResponse>> {
        let Json(SendSmsRequest {
            to,
            message,
            provider,
        }) = body?;

        let (Some(to), Some(message)) = (
            to.filter(|to| !to.is_empty()),
            message.filter(|message| !message.is_empty()),
        ) else {
            return Err(AppError::missing_field(messages::SMS_FIELDS_REQUIRED));
        };
        let list_input = to.is_list();
        let destinations = to.into_vec();

        let provider_name = requested_provider(provider)?;
        let provider = resources.sms_providers.resolve(provider_name.as_deref())?;

        let outcome = provider.send(&destinations, &message).await;
        AppLogger::log_sms_dispatch(provider.name(), destinations.len(), outcome.is_ok());

        let receipt = outcome?;
        Ok(Json(SendSmsResponse::from_receipt(
            provider.name(),
            receipt,
            list_input,
        )))
    }
}
