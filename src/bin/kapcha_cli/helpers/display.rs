// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA
// ABOUTME: Output formatting helpers for kapcha-cli
// ABOUTME: Provides consistent display of send results and normalized numbers

use kapcha_server::routes::sms::SendSmsResponse;

/// Display the outcome of a successful send
pub fn display_send_results(provider: &str, responses: &[SendSmsResponse]) {
    println!("\nMessages sent via {provider}");
    println!("{}", "=".repeat(60));
    for response in responses {
        if let Some(ids) = &response.message_ids {
            for id in ids {
                println!("   Message ID: {id}");
            }
        } else if let Some(id) = &response.message_id {
            println!("   Message ID: {id}");
        }
        if let Some(result) = &response.result {
            println!("   Gateway result: {result}");
        }
    }
    println!("{}", "=".repeat(60));
}

/// Display raw and normalized numbers side by side
pub fn display_normalized(pairs: &[(&str, String)]) {
    let width = pairs.iter().map(|(raw, _)| raw.len()).max().unwrap_or(0);
    for (raw, normalized) in pairs {
        println!("{raw:<width$}  ->  {normalized}");
    }
}
