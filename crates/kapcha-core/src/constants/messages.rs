// ABOUTME: Error and status strings returned to web clients
// ABOUTME: Clients display or match on these, so they are kept stable in one place
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

/// OBO request without an assertion
pub const SSO_TOKEN_REQUIRED: &str = "SSO token is required";
/// Token endpoint answered without an access token
pub const TOKEN_ACQUISITION_FAILED: &str = "Failed to acquire token";
/// Consent-required explanation sent alongside `consent_required`
pub const CONSENT_REQUIRED: &str = "User consent required for Graph permissions";
/// Graph `/me` returned a non-success status
pub const GRAPH_CALL_FAILED: &str = "Error calling Graph API";

/// SMS request without destination or body
pub const SMS_FIELDS_REQUIRED: &str = "Phone number and message are required";
/// Provider selector not recognized
pub const INVALID_SMS_PROVIDER: &str = "Invalid SMS provider";
/// Any provider failure after dispatch
pub const SMS_SEND_FAILED: &str = "Failed to send SMS";
/// Twilio selected without credentials
pub const TWILIO_NOT_CONFIGURED: &str = "Twilio credentials not configured";
/// Local gateway selected without URL
pub const LOCAL_GATEWAY_NOT_CONFIGURED: &str = "Local SMS Gateway URL not configured";
/// Cloud gateway selected without URL
pub const CLOUD_GATEWAY_NOT_CONFIGURED: &str = "Cloud SMS Gateway URL not configured";
/// Client-side send with an empty destination list
pub const NO_DESTINATIONS: &str = "Please add at least one phone number";
/// Prefix for aggregated bulk failures
pub const BULK_SEND_FAILED_PREFIX: &str = "Failed to send messages";

/// Machine-checkable `error` value for domain denials
pub const DOMAIN_RESTRICTED: &str = "domain_restricted";
/// Twilio credentials present but no sender number
pub const TWILIO_SENDER_NOT_CONFIGURED: &str = "Twilio phone number not configured";
