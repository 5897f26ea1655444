// ABOUTME: SMS commands for kapcha-cli
// ABOUTME: Sends through the server and previews cloud-gateway number formatting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

use anyhow::Result;
use kapcha_server::client::{Signature, SmsPanelClient};
use kapcha_server::sms::phone::normalize_phone_number;
use tracing::info;

use crate::helpers::display::{display_normalized, display_send_results};

/// Send a message through the server
pub async fn send(
    server: &str,
    destinations: &[String],
    message: &str,
    provider: &str,
    signature: Option<(String, String)>,
) -> Result<()> {
    let signature = signature.map(|(name, email)| Signature::now(name, email));
    info!(provider = %provider, destinations = destinations.len(), "Sending SMS");

    let client = SmsPanelClient::new(server);
    let responses = client
        .send(destinations, message, provider, signature.as_ref())
        .await?;

    display_send_results(provider, &responses);
    Ok(())
}

/// Print each number next to its normalized form
pub fn normalize(numbers: &[String]) {
    let pairs: Vec<(&str, String)> = numbers
        .iter()
        .map(|number| (number.as_str(), normalize_phone_number(number)))
        .collect();
    display_normalized(&pairs);
}
