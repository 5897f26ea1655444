// ABOUTME: Integration tests for the domain gate, public sign-in settings, and health routes
// ABOUTME: Verifies grant and deny bodies, sign-out behaviour per host, and configuration exposure
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA
#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use axum::http::StatusCode;
use common::{post_json, request, test_config, test_router, TEST_TENANT};
use serde_json::json;

const SESSION_PATH: &str = "/api/session";

#[tokio::test]
async fn test_member_is_granted() {
    let router = test_router(test_config());

    let (status, body) = post_json(
        router,
        SESSION_PATH,
        &json!({"username": "Pat.Smith@flyonit.com.au", "host": "teams"}),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"access": "granted", "allowedDomain": "flyonit.com.au"})
    );
}

#[tokio::test]
async fn test_domain_match_is_case_sensitive() {
    let router = test_router(test_config());

    let (status, body) = post_json(
        router,
        SESSION_PATH,
        &json!({"username": "Pat.Smith@FlyOnIT.com.au", "host": "teams"}),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["error"], "domain_restricted");
    assert_eq!(body["signOut"], false);
}

#[tokio::test]
async fn test_outsider_in_teams_is_denied_without_sign_out() {
    let router = test_router(test_config());

    let (status, body) = post_json(
        router,
        SESSION_PATH,
        &json!({"username": "sam@example.com", "host": "teams"}),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body,
        json!({
            "error": "domain_restricted",
            "message": "Access is limited to @flyonit.com.au users only.",
            "signOut": false
        })
    );
}

#[tokio::test]
async fn test_outsider_in_browser_is_signed_out() {
    let router = test_router(test_config());

    let (status, body) = post_json(
        router,
        SESSION_PATH,
        &json!({"username": "sam@example.com", "host": "browser"}),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["signOut"], true);
}

#[tokio::test]
async fn test_lookalike_domain_is_denied() {
    let router = test_router(test_config());

    let (status, _) = post_json(
        router,
        SESSION_PATH,
        &json!({"username": "pat@notflyonit.com.au.evil.com", "host": "browser"}),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_host_defaults_to_teams() {
    let router = test_router(test_config());

    let (status, body) =
        post_json(router, SESSION_PATH, &json!({"username": "sam@example.com"})).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["signOut"], false);
}

#[tokio::test]
async fn test_missing_username() {
    let router = test_router(test_config());

    let (status, body) = post_json(router, SESSION_PATH, &json!({"host": "teams"})).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Username is required"}));
}

#[tokio::test]
async fn test_unknown_host_is_invalid_input() {
    let router = test_router(test_config());

    let (status, body) = post_json(
        router,
        SESSION_PATH,
        &json!({"username": "pat@flyonit.com.au", "host": "outlook"}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid request body"));
}

#[tokio::test]
async fn test_session_non_post_is_rejected() {
    let router = test_router(test_config());

    let (status, body) = request(router, "GET", SESSION_PATH).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body["error"], "Method not allowed");
}

#[tokio::test]
async fn test_auth_config_exposes_public_settings_only() {
    let router = test_router(test_config());

    let (status, body) = request(router, "GET", "/api/auth/config").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["clientId"], "test-client-id");
    assert_eq!(
        body["authority"],
        format!("http://127.0.0.1:9/{TEST_TENANT}")
    );
    assert_eq!(
        body["redirectUri"],
        "https://kapcha.example.com/auth/redirect"
    );
    assert_eq!(body["scopes"], json!(["User.Read"]));
    assert_eq!(body["allowedDomain"], "flyonit.com.au");
    assert!(!body.to_string().contains("test-client-secret"));
}

#[tokio::test]
async fn test_health_and_ready() {
    let (status, body) = request(test_router(test_config()), "GET", "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["service"], "kapcha-server");

    let (status, body) = request(test_router(test_config()), "GET", "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}
