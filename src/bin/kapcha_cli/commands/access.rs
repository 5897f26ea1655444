// ABOUTME: Domain access command for kapcha-cli
// ABOUTME: Asks the server's session endpoint whether an account may use the app
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

use anyhow::{bail, Context, Result};
use kapcha_server::{
    constants::endpoints, identity::HostKind, routes::session::AccessDeniedResponse,
    utils::http_client::shared_client,
};
use reqwest::StatusCode;
use serde_json::json;

/// Check an account against the server's domain gate
pub async fn check(server: &str, username: &str, host: HostKind) -> Result<()> {
    let url = format!("{}{}", server.trim_end_matches('/'), endpoints::SESSION);
    let response = shared_client()
        .post(&url)
        .json(&json!({ "username": username, "host": host }))
        .send()
        .await
        .with_context(|| format!("Failed to reach {url}"))?;

    match response.status() {
        status if status.is_success() => {
            println!("Access granted for {username} ({host})");
            Ok(())
        }
        StatusCode::FORBIDDEN => {
            let denied: AccessDeniedResponse = response.json().await?;
            println!("Access denied for {username} ({host}): {}", denied.message);
            if denied.sign_out {
                println!("The browser session would be signed out.");
            }
            Ok(())
        }
        status => bail!("Session check failed with {status}: {}", response.text().await?),
    }
}
