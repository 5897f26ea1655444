// ABOUTME: Environment variable names consumed by ServerConfig::from_env
// ABOUTME: Aliases keep deployments that still export the web client's variable names working
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

/// Azure AD application (client) ID
pub const AZURE_CLIENT_ID: &[&str] = &["AZURE_CLIENT_ID", "NEXT_PUBLIC_AZURE_CLIENT_ID"];
/// Azure AD directory (tenant) ID
pub const AZURE_TENANT_ID: &[&str] = &["AZURE_TENANT_ID", "NEXT_PUBLIC_AZURE_TENANT_ID"];
/// Redirect URI registered for the web client
pub const AZURE_REDIRECT_URI: &[&str] = &["AZURE_REDIRECT_URI", "NEXT_PUBLIC_REDIRECT_URI"];
/// Application ID URI that Teams SSO tokens are issued for
pub const AZURE_APP_URI: &[&str] = &["AZURE_APP_URI", "NEXT_PUBLIC_APP_URI"];
/// Confidential client secret
pub const AZURE_CLIENT_SECRET: &str = "AZURE_CLIENT_SECRET";
/// Scope requested in the OBO exchange
pub const AZURE_API_SCOPE: &str = "AZURE_API_SCOPE";
/// Login host, overridable for sovereign clouds and tests
pub const AZURE_AUTHORITY_HOST: &str = "AZURE_AUTHORITY_HOST";
/// Graph base URL including API version
pub const GRAPH_API_BASE_URL: &str = "GRAPH_API_BASE_URL";

/// Twilio account SID
pub const TWILIO_ACCOUNT_SID: &str = "TWILIO_ACCOUNT_SID";
/// Twilio auth token
pub const TWILIO_AUTH_TOKEN: &str = "TWILIO_AUTH_TOKEN";
/// Twilio sender number
pub const TWILIO_PHONE_NUMBER: &str = "TWILIO_PHONE_NUMBER";
/// Twilio REST API base URL
pub const TWILIO_API_BASE_URL: &str = "TWILIO_API_BASE_URL";

/// Local SMS gateway base URL
pub const LOCAL_SMS_GATEWAY_URL: &str = "LOCAL_SMS_GATEWAY_URL";
/// Local SMS gateway basic-auth user
pub const LOCAL_SMS_USERNAME: &str = "LOCAL_SMS_USERNAME";
/// Local SMS gateway basic-auth password
pub const LOCAL_SMS_PASSWORD: &str = "LOCAL_SMS_PASSWORD";
/// Cloud SMS gateway endpoint URL
pub const CLOUD_SMS_GATEWAY_URL: &str = "CLOUD_SMS_GATEWAY_URL";
/// Cloud SMS gateway basic-auth user
pub const CLOUD_SMS_USERNAME: &str = "CLOUD_SMS_USERNAME";
/// Cloud SMS gateway basic-auth password
pub const CLOUD_SMS_PASSWORD: &str = "CLOUD_SMS_PASSWORD";

/// Organizational domain allowed to sign in
pub const ALLOWED_DOMAIN: &str = "ALLOWED_DOMAIN";
/// HTTP listen port
pub const HTTP_PORT: &str = "HTTP_PORT";
/// HTTP listen address
pub const HOST: &str = "HOST";
/// Deployment environment name
pub const ENVIRONMENT: &str = "ENVIRONMENT";
/// Comma-separated CORS origins, or `*`
pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
