// ABOUTME: Integration tests for the merged, domain-gated profile route
// ABOUTME: Runs OBO and Graph /me against in-process mocks and checks merge and gate outcomes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA
#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use axum::http::StatusCode;
use common::{
    config_with_identity_mock, post_json, request, test_config, test_router, CONSENT_SSO,
    GRAPH_FORBIDDEN_SSO, OUTSIDER_SSO, VALID_SSO,
};
use serde_json::json;

const PROFILE_PATH: &str = "/api/profile";

#[tokio::test]
async fn test_profile_merges_graph_over_host_context() {
    let router = test_router(config_with_identity_mock().await);

    let (status, body) = post_json(
        router,
        PROFILE_PATH,
        &json!({
            "ssoToken": VALID_SSO,
            "host": "teams",
            "context": {
                "displayName": "Pat (Teams)",
                "tenantName": "FlyOnIT"
            }
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["displayName"], "Pat Smith");
    assert_eq!(body["tenantName"], "FlyOnIT");
    assert_eq!(body["jobTitle"], "Dispatcher");
    assert_eq!(body["mobilePhone"], "0412345678");
    assert!(body.get("@odata.context").is_none());
}

#[tokio::test]
async fn test_profile_without_context() {
    let router = test_router(config_with_identity_mock().await);

    let (status, body) = post_json(router, PROFILE_PATH, &json!({"ssoToken": VALID_SSO})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["userPrincipalName"], "Pat.Smith@flyonit.com.au");
}

#[tokio::test]
async fn test_outsider_profile_is_denied() {
    let router = test_router(config_with_identity_mock().await);

    let (status, body) = post_json(
        router,
        PROFILE_PATH,
        &json!({"ssoToken": OUTSIDER_SSO, "host": "browser"}),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body,
        json!({
            "error": "domain_restricted",
            "message": "Access is limited to @flyonit.com.au users only.",
            "signOut": true
        })
    );
}

#[tokio::test]
async fn test_profile_consent_mapping() {
    let router = test_router(config_with_identity_mock().await);

    let (status, body) = post_json(router, PROFILE_PATH, &json!({"ssoToken": CONSENT_SSO})).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "consent_required");
}

#[tokio::test]
async fn test_profile_relays_graph_status() {
    let router = test_router(config_with_identity_mock().await);

    let (status, body) = post_json(
        router,
        PROFILE_PATH,
        &json!({"ssoToken": GRAPH_FORBIDDEN_SSO}),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "Error calling Graph API");
}

#[tokio::test]
async fn test_profile_requires_token() {
    let router = test_router(test_config());

    let (status, body) = post_json(router, PROFILE_PATH, &json!({"context": {}})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "SSO token is required"}));
}

#[tokio::test]
async fn test_profile_non_post_is_rejected() {
    let router = test_router(test_config());

    let (status, _) = request(router, "DELETE", PROFILE_PATH).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_profile_unreachable_graph_is_internal() {
    let mut config = config_with_identity_mock().await;
    config.graph.base_url = "http://127.0.0.1:9/v1.0".to_owned();
    let router = test_router(config);

    let (status, body) = post_json(router, PROFILE_PATH, &json!({"ssoToken": VALID_SSO})).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Internal server error");
}
