// ABOUTME: Route handler for the On-Behalf-Of exchange and Graph /me relay
// ABOUTME: Trades the caller's Teams SSO token for a Graph token and returns Graph's profile JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

use super::method_not_allowed;
use crate::constants::{endpoints, messages};
use crate::errors::{AppError, AppResult};
use crate::resources::ServerResources;
use axum::{extract::rejection::JsonRejection, extract::State, routing::post, Json, Router};
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;

/// Request carrying a Teams SSO assertion
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SsoTokenRequest {
    /// Assertion obtained from the Teams host
    #[serde(default)]
    pub sso_token: Option<String>,
}

impl SsoTokenRequest {
    /// The assertion, rejecting missing or blank values
    ///
    /// # Errors
    ///
    /// Returns a missing-field error when no usable token was sent.
    pub fn require_token(self) -> AppResult<String> {
        self.sso_token
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| AppError::missing_field(messages::SSO_TOKEN_REQUIRED))
    }
}

/// Graph profile routes
pub struct GraphRoutes;

impl GraphRoutes {
    /// Create the OBO relay route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                endpoints::GRAPH_PROFILE_OBO,
                post(Self::handle_profile_on_behalf_of).fallback(method_not_allowed),
            )
            .with_state(resources)
    }

    /// Handle POST /api/graph/getGraphProfileOnBehalfOf
    async fn handle_profile_on_behalf_of(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<SsoTokenRequest>, JsonRejection>,
    ) -> AppResult<Json<Value>> {
        let Json(request) = body?;
        let sso_token = request.require_token()?;

        let token = resources.obo_client.acquire_token(&sso_token).await?;
        let profile = resources.graph_client.get_me(&token).await?;

        Ok(Json(profile))
    }
}
