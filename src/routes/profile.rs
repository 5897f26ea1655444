// ABOUTME: Route handler returning the signed-in user's merged, domain-gated profile
// ABOUTME: Runs the OBO exchange and Graph /me, merges over the host context, then applies the gate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

use super::method_not_allowed;
use super::session::denied_response;
use crate::constants::{endpoints, messages};
use crate::errors::{AppError, AppResult};
use crate::graph::{HostProfileContext, ProfileRecord};
use crate::identity::{AccessDecision, HostKind, IdentityContext, Principal};
use crate::resources::ServerResources;
use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Profile request
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileRequest {
    /// Teams SSO assertion
    #[serde(default)]
    pub sso_token: Option<String>,
    /// Where the client runs; Teams when absent
    #[serde(default)]
    pub host: Option<HostKind>,
    /// Identity already known to the host
    #[serde(default)]
    pub context: Option<HostProfileContext>,
}

/// Profile routes
pub struct ProfileRoutes;

impl ProfileRoutes {
    /// Create the profile route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                endpoints::PROFILE,
                post(Self::handle_profile).fallback(method_not_allowed),
            )
            .with_state(resources)
    }

    /// Handle POST /api/profile
    async fn handle_profile(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<ProfileRequest>, JsonRejection>,
    ) -> AppResult<Response> {
        let Json(request) = body?;
        let sso_token = request
            .sso_token
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| AppError::missing_field(messages::SSO_TOKEN_REQUIRED))?;
        let context = request.context.unwrap_or_default();

        let token = resources.obo_client.acquire_token(&sso_token).await?;
        let graph = resources.graph_client.get_me(&token).await?;
        let record = ProfileRecord::merge(&context, &graph);

        let username = record
            .principal_name()
            .ok_or_else(|| AppError::auth_invalid("Unable to resolve the signed-in user"))?;
        let identity = IdentityContext::new(
            request.host.unwrap_or_default(),
            Principal {
                username: username.to_owned(),
                display_name: record.get_str("displayName").map(str::to_owned),
                id: record.get_str("id").map(str::to_owned),
            },
        );

        match resources.access_policy.evaluate(&identity) {
            AccessDecision::Granted => Ok(Json(record).into_response()),
            AccessDecision::Denied { message, sign_out } => {
                Ok(denied_response(&identity, message, sign_out))
            }
        }
    }
}
