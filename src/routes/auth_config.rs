// ABOUTME: Route handler publishing the public sign-in settings the web client needs for MSAL
// ABOUTME: Exposes identifiers and scopes only; the client secret never leaves the server
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

use crate::constants::{endpoints, oauth};
use crate::resources::ServerResources;
use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Public MSAL settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthConfigResponse {
    /// Application (client) ID
    pub client_id: String,
    /// Authority URL including tenant
    pub authority: String,
    /// Redirect URI
    pub redirect_uri: String,
    /// Application ID URI for Teams SSO, when configured
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_uri: Option<String>,
    /// Scopes requested at interactive login
    pub scopes: Vec<String>,
    /// Domain allowed to use the app
    pub allowed_domain: String,
}

/// Sign-in configuration routes
pub struct AuthConfigRoutes;

impl AuthConfigRoutes {
    /// Create the configuration route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(endpoints::AUTH_CONFIG, get(Self::handle_auth_config))
            .with_state(resources)
    }

    /// Handle GET /api/auth/config
    async fn handle_auth_config(
        State(resources): State<Arc<ServerResources>>,
    ) -> Json<AuthConfigResponse> {
        let azure = &resources.config.azure;
        Json(AuthConfigResponse {
            client_id: azure.client_id.clone(),
            authority: azure.authority(),
            redirect_uri: azure.redirect_uri.clone(),
            app_uri: azure.app_uri.clone(),
            scopes: oauth::LOGIN_SCOPES
                .iter()
                .map(|scope| (*scope).to_owned())
                .collect(),
            allowed_domain: resources.access_policy.allowed_domain().to_owned(),
        })
    }
}
