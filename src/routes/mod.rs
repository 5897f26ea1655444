// ABOUTME: Route module organization for the KAPCHA HTTP endpoints
// ABOUTME: Groups handlers by domain and assembles them into one router with shared middleware
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

//! Route module for the KAPCHA server
//!
//! Each domain module contains only route definitions and thin handlers that
//! delegate to the OBO client, Graph client, SMS registry, or access policy.

/// Public MSAL settings
pub mod auth_config;
/// OBO exchange and Graph `/me` relay
pub mod graph;
/// Health check routes
pub mod health;
/// Merged, domain-gated profile
pub mod profile;
/// Domain gate session check
pub mod session;
/// SMS dispatch
pub mod sms;

pub use auth_config::AuthConfigRoutes;
pub use graph::GraphRoutes;
pub use health::HealthRoutes;
pub use profile::ProfileRoutes;
pub use session::SessionRoutes;
pub use sms::SmsRoutes;

use crate::errors::AppError;
use crate::middleware::{request_id_middleware, setup_cors};
use crate::resources::ServerResources;
use axum::{middleware, Router};
use std::sync::Arc;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

/// Largest accepted request body
const MAX_BODY_BYTES: usize = 64 * 1024;

/// Fallback for POST-only routes hit with another method
pub(crate) async fn method_not_allowed() -> AppError {
    AppError::method_not_allowed()
}

/// Assemble every route with tracing, request IDs and CORS
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let cors = setup_cors(&resources.config.cors);

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(AuthConfigRoutes::routes(Arc::clone(&resources)))
        .merge(GraphRoutes::routes(Arc::clone(&resources)))
        .merge(ProfileRoutes::routes(Arc::clone(&resources)))
        .merge(SessionRoutes::routes(Arc::clone(&resources)))
        .merge(SmsRoutes::routes(resources))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(cors)
}
