// ABOUTME: Route handler for the organizational domain gate
// ABOUTME: Grants or denies a signed-in principal and tells browser sessions when to sign out
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

use super::method_not_allowed;
use crate::constants::{endpoints, messages};
use crate::errors::{AppError, AppResult};
use crate::identity::{AccessDecision, HostKind, IdentityContext, Principal};
use crate::logging::AppLogger;
use crate::resources::ServerResources;
use axum::{
    extract::rejection::JsonRejection,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Session check request
#[derive(Debug, Default, Deserialize)]
pub struct SessionRequest {
    /// Sign-in name of the current account
    #[serde(default)]
    pub username: Option<String>,
    /// Where the client runs; Teams when absent
    #[serde(default)]
    pub host: Option<HostKind>,
}

/// Body returned when access is granted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionGranted {
    /// Always `granted`
    pub access: String,
    /// Domain the principal was checked against
    pub allowed_domain: String,
}

/// Body returned with 403 when access is denied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessDeniedResponse {
    /// Always `domain_restricted`
    pub error: String,
    /// User-facing explanation
    pub message: String,
    /// Whether the client must end its session
    pub sign_out: bool,
}

/// Turn a denial into the 403 response, logging it
pub(crate) fn denied_response(identity: &IdentityContext, message: String, sign_out: bool) -> Response {
    AppLogger::log_access_denied(
        &identity.principal.username,
        &identity.host.to_string(),
        sign_out,
    );
    (
        StatusCode::FORBIDDEN,
        Json(AccessDeniedResponse {
            error: messages::DOMAIN_RESTRICTED.to_owned(),
            message,
            sign_out,
        }),
    )
        .into_response()
}

/// Session routes
pub struct SessionRoutes;

impl SessionRoutes {
    /// Create the session check route
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                endpoints::SESSION,
                post(Self::handle_session).fallback(method_not_allowed),
            )
            .with_state(resources)
    }

    /// Handle POST /api/session
    async fn handle_session(
        State(resources): State<Arc<ServerResources>>,
        body: Result<Json<SessionRequest>, JsonRejection>,
    ) -> AppResult<Response> {
        let Json(request) = body?;
        let username = request
            .username
            .filter(|username| !username.trim().is_empty())
            .ok_or_else(|| AppError::missing_field("Username is required"))?;

        let identity = IdentityContext::new(
            request.host.unwrap_or_default(),
            Principal::from_username(username),
        );

        match resources.access_policy.evaluate(&identity) {
            AccessDecision::Granted => Ok(Json(SessionGranted {
                access: "granted".to_owned(),
                allowed_domain: resources.access_policy.allowed_domain().to_owned(),
            })
            .into_response()),
            AccessDecision::Denied { message, sign_out } => {
                Ok(denied_response(&identity, message, sign_out))
            }
        }
    }
}
