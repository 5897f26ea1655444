// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides logging init, configuration builders, router requests, and in-process mock servers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `kapcha_server`

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use kapcha_server::{
    config::environment::{
        AccessConfig, AzureAdConfig, CorsConfig, Environment, GatewayConfig, GraphConfig,
        LogLevel, ServerConfig, SmsConfig, TwilioConfig,
    },
    resources::ServerResources,
    routes::build_router,
};
use serde_json::Value;
use std::sync::{Arc, Once};
use tokio::net::TcpListener;
use tower::ServiceExt;

static INIT_LOGGER: Once = Once::new();

/// Tenant used by every test configuration
pub const TEST_TENANT: &str = "test-tenant";

/// Initialize quiet test logging once
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Configuration with Azure AD settings and every SMS provider unconfigured
///
/// Outbound hosts point at a closed local port until a test overrides them.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        http_port: 0,
        host: "127.0.0.1".to_owned(),
        environment: Environment::Testing,
        log_level: LogLevel::Warn,
        azure: AzureAdConfig {
            client_id: "test-client-id".to_owned(),
            client_secret: Some("test-client-secret".to_owned()),
            tenant_id: TEST_TENANT.to_owned(),
            redirect_uri: "https://kapcha.example.com/auth/redirect".to_owned(),
            app_uri: Some("api://kapcha.example.com/test-client-id".to_owned()),
            api_scope: "https://graph.microsoft.com/.default".to_owned(),
            authority_host: "http://127.0.0.1:9".to_owned(),
        },
        graph: GraphConfig {
            base_url: "http://127.0.0.1:9/v1.0".to_owned(),
        },
        sms: SmsConfig {
            twilio: TwilioConfig {
                account_sid: None,
                auth_token: None,
                from_number: None,
                api_base_url: "http://127.0.0.1:9".to_owned(),
            },
            local_gateway: GatewayConfig::default(),
            cloud_gateway: GatewayConfig::default(),
        },
        access: AccessConfig {
            allowed_domain: "flyonit.com.au".to_owned(),
        },
        cors: CorsConfig {
            allowed_origins: "*".to_owned(),
        },
    }
}

/// Full router for a configuration
pub fn test_router(config: ServerConfig) -> Router {
    init_test_logging();
    build_router(Arc::new(ServerResources::new(config)))
}

/// Serve a mock downstream on an ephemeral local port and return its base URL
pub async fn spawn_mock(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{address}")
}

/// POST a JSON body through the router
pub async fn post_json(router: Router, uri: &str, body: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap();
    send(router, request).await
}

/// Issue a bodiless request through the router
pub async fn request(router: Router, method: &str, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(router, request).await
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

/// Decode an `application/x-www-form-urlencoded` body into pairs
pub fn form_pairs(body: &str) -> Vec<(String, String)> {
    url::form_urlencoded::parse(body.as_bytes())
        .into_owned()
        .collect()
}

/// Value of one form field
pub fn form_value(body: &str, key: &str) -> Option<String> {
    form_pairs(body)
        .into_iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value)
}

/// Assertion the identity mock exchanges for a Graph token of an allowed user
pub const VALID_SSO: &str = "valid-sso";
/// Assertion exchanged for a token of a user outside the allowed domain
pub const OUTSIDER_SSO: &str = "outsider-sso";
/// Assertion answered with `invalid_grant`
pub const CONSENT_SSO: &str = "needs-consent";
/// Assertion answered with `interaction_required`
pub const INTERACTION_SSO: &str = "needs-interaction";
/// Assertion answered with a success body lacking `access_token`
pub const NO_TOKEN_SSO: &str = "no-token";
/// Assertion exchanged for a token Graph refuses
pub const GRAPH_FORBIDDEN_SSO: &str = "graph-forbidden";
/// Assertion exchanged for a token Graph answers with a 2xx HTML page
pub const GRAPH_HTML_SSO: &str = "graph-html";

async fn mock_token_endpoint(body: String) -> axum::response::Response {
    use axum::{response::IntoResponse, Json};
    use serde_json::json;

    if form_value(&body, "grant_type").as_deref()
        != Some("urn:ietf:params:oauth:grant-type:jwt-bearer")
        || form_value(&body, "requested_token_use").as_deref() != Some("on_behalf_of")
        || form_value(&body, "client_secret").as_deref() != Some("test-client-secret")
    {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "unsupported_grant_type"})),
        )
            .into_response();
    }

    let token = |access_token: &str| {
        Json(json!({
            "token_type": "Bearer",
            "access_token": access_token,
            "expires_in": 3599
        }))
        .into_response()
    };

    match form_value(&body, "assertion").unwrap_or_default().as_str() {
        VALID_SSO => token("member-token"),
        OUTSIDER_SSO => token("outsider-token"),
        GRAPH_FORBIDDEN_SSO => token("forbidden-token"),
        GRAPH_HTML_SSO => token("html-token"),
        NO_TOKEN_SSO => Json(json!({"token_type": "Bearer"})).into_response(),
        CONSENT_SSO => (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "error": "invalid_grant",
                "error_description": "AADSTS65001: The user or administrator has not consented"
            })),
        )
            .into_response(),
        INTERACTION_SSO => (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "interaction_required"})),
        )
            .into_response(),
        _ => (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "invalid_request",
                "error_description": "AADSTS50013: Assertion failed signature validation"
            })),
        )
            .into_response(),
    }
}

async fn mock_graph_me(headers: axum::http::HeaderMap) -> axum::response::Response {
    use axum::{response::IntoResponse, Json};
    use serde_json::json;

    let bearer = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .unwrap_or_default();

    match bearer {
        "member-token" => Json(json!({
            "@odata.context": "https://graph.microsoft.com/v1.0/$metadata#users/$entity",
            "displayName": "Pat Smith",
            "jobTitle": "Dispatcher",
            "mail": "pat.smith@flyonit.com.au",
            "mobilePhone": "0412345678",
            "userPrincipalName": "Pat.Smith@flyonit.com.au",
            "id": "00000000-0000-0000-0000-000000000001"
        }))
        .into_response(),
        "outsider-token" => Json(json!({
            "displayName": "Sam Guest",
            "userPrincipalName": "sam@example.com",
            "id": "00000000-0000-0000-0000-000000000002"
        }))
        .into_response(),
        "html-token" => (
            StatusCode::OK,
            [("content-type", "text/html")],
            "<html><body>Service maintenance</body></html>",
        )
            .into_response(),
        _ => (StatusCode::FORBIDDEN, "Insufficient privileges to complete the operation.")
            .into_response(),
    }
}

/// Start a combined Azure AD token endpoint and Graph `/me` mock
///
/// Returns a configuration whose authority host and Graph base URL point at it.
pub async fn config_with_identity_mock() -> ServerConfig {
    use axum::routing::{get, post};

    let router = Router::new()
        .route(
            &format!("/{TEST_TENANT}/oauth2/v2.0/token"),
            post(mock_token_endpoint),
        )
        .route("/v1.0/me", get(mock_graph_me));
    let base_url = spawn_mock(router).await;

    let mut config = test_config();
    config.azure.authority_host.clone_from(&base_url);
    config.graph.base_url = format!("{base_url}/v1.0");
    config
}

/// Twilio account used by the SMS mock
pub const TEST_TWILIO_SID: &str = "AC123";
/// Destination the Twilio mock always rejects
pub const TWILIO_REJECTED_NUMBER: &str = "+61400000000";

async fn mock_twilio_messages(
    headers: axum::http::HeaderMap,
    body: String,
) -> axum::response::Response {
    use axum::{response::IntoResponse, Json};
    use serde_json::json;

    let authorized = headers
        .get("authorization")
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("Basic "));
    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({"code": 20003, "message": "Authenticate"})),
        )
            .into_response();
    }

    let to = form_value(&body, "To").unwrap_or_default();
    if to == TWILIO_REJECTED_NUMBER {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "code": 21211,
                "message": format!("The 'To' number {to} is not a valid phone number."),
                "status": 400
            })),
        )
            .into_response();
    }

    let digits: String = to.chars().filter(char::is_ascii_digit).collect();
    (
        StatusCode::CREATED,
        Json(json!({
            "sid": format!("SM{digits}"),
            "to": to,
            "from": form_value(&body, "From"),
            "body": form_value(&body, "Body"),
            "status": "queued"
        })),
    )
        .into_response()
}

async fn mock_gateway_accept(
    headers: axum::http::HeaderMap,
    axum::Json(body): axum::Json<Value>,
) -> axum::Json<Value> {
    axum::Json(serde_json::json!({
        "id": "gateway-message-1",
        "received": body,
        "authorized": headers.contains_key("authorization")
    }))
}

async fn mock_gateway_offline() -> (StatusCode, &'static str) {
    (StatusCode::SERVICE_UNAVAILABLE, "gateway offline")
}

/// Start a mock of the Twilio Messages API and both SMS gateways
///
/// Local gateway lives at `{base}/local` (so sends go to `{base}/local/message`),
/// cloud gateway at `{base}/cloud/send`, and a failing gateway at `{base}/offline`.
pub async fn spawn_sms_mock() -> String {
    use axum::routing::post;

    let router = Router::new()
        .route(
            &format!("/2010-04-01/Accounts/{TEST_TWILIO_SID}/Messages.json"),
            post(mock_twilio_messages),
        )
        .route("/local/message", post(mock_gateway_accept))
        .route("/cloud/send", post(mock_gateway_accept))
        .route("/offline/message", post(mock_gateway_offline))
        .route("/offline", post(mock_gateway_offline));
    spawn_mock(router).await
}

/// Configuration with every SMS provider pointed at [`spawn_sms_mock`]
pub async fn config_with_sms_mock() -> ServerConfig {
    let base_url = spawn_sms_mock().await;
    let mut config = test_config();
    config.sms.twilio = TwilioConfig {
        account_sid: Some(TEST_TWILIO_SID.to_owned()),
        auth_token: Some("test-auth-token".to_owned()),
        from_number: Some("+61480000000".to_owned()),
        api_base_url: base_url.clone(),
    };
    config.sms.local_gateway = GatewayConfig {
        url: Some(format!("{base_url}/local")),
        username: Some("sms".to_owned()),
        password: Some("gateway-pass".to_owned()),
    };
    config.sms.cloud_gateway = GatewayConfig {
        url: Some(format!("{base_url}/cloud/send")),
        username: None,
        password: None,
    };
    config
}
