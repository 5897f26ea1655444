// ABOUTME: Microsoft Graph client limited to the signed-in user's /me resource
// ABOUTME: Relays Graph's JSON on success and its status plus response text on failure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

use crate::config::environment::GraphConfig;
use crate::constants::{messages, oauth};
use crate::errors::{AppError, AppResult};
use crate::oauth2_client::OboToken;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

/// Graph client bound to one base URL
#[derive(Clone)]
pub struct GraphClient {
    client: Client,
    base_url: String,
}

impl GraphClient {
    /// Create a client using the given HTTP client
    #[must_use]
    pub fn with_client(config: &GraphConfig, client: Client) -> Self {
        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// Fetch `/me` with the given delegated token
    ///
    /// # Errors
    ///
    /// A non-2xx answer becomes an error carrying Graph's status and response text.
    /// Transport failures and undecodable success bodies become internal errors.
    pub async fn get_me(&self, token: &OboToken) -> AppResult<Value> {
        let url = format!("{}{}", self.base_url, oauth::GRAPH_ME_PATH);
        debug!(url = %url, "Calling Microsoft Graph");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&token.access_token)
            .send()
            .await
            .map_err(|e| AppError::internal(e.to_string()).with_source(e))?;
        let status = response.status();

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            warn!(http.status = status.as_u16(), "Graph /me call failed");
            return Err(AppError::external_service(messages::GRAPH_CALL_FAILED)
                .with_status(status.as_u16())
                .with_details(text));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::internal(e.to_string()).with_source(e))
    }
}
