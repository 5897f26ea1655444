// ABOUTME: Phone number normalization to Australian international format and destination cleanup
// ABOUTME: Pure functions shared by the cloud gateway provider, the HTTP route and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

use crate::constants::sms::AU_COUNTRY_PREFIX;
use std::collections::HashSet;

/// Normalize a phone number to `+<country><number>` form
///
/// Everything except digits and `+` is removed first. Numbers already starting
/// with `+` are kept, a leading `0` becomes `+61`, a leading `4` (Australian
/// mobile without trunk prefix) gets `+61`, and anything else gets a bare `+`.
/// The function is total and idempotent.
///
/// ```
/// use kapcha_server::sms::phone::normalize_phone_number;
///
/// assert_eq!(normalize_phone_number("0412 345 678"), "+61412345678");
/// assert_eq!(normalize_phone_number("61412345678"), "+61412345678");
/// ```
#[must_use]
pub fn normalize_phone_number(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    if cleaned.starts_with('+') {
        cleaned
    } else if let Some(rest) = cleaned.strip_prefix('0') {
        format!("{AU_COUNTRY_PREFIX}{rest}")
    } else if cleaned.starts_with('4') {
        format!("{AU_COUNTRY_PREFIX}{cleaned}")
    } else {
        format!("+{cleaned}")
    }
}

/// Trim destinations, drop empty ones, and remove exact duplicates keeping first occurrence
pub fn dedupe_destinations<I, S>(destinations: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    destinations
        .into_iter()
        .map(|destination| destination.as_ref().trim().to_owned())
        .filter(|destination| !destination.is_empty())
        .filter(|destination| seen.insert(destination.clone()))
        .collect()
}
