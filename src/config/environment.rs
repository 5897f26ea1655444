// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Assembles one immutable ServerConfig at startup from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

//! Environment-based configuration management
//!
//! Every setting is read exactly once by [`ServerConfig::from_env`] and the resulting
//! struct is shared read-only (behind an `Arc`) with all request handlers. Azure AD
//! settings needed for sign-in are mandatory and abort startup when absent; SMS
//! providers are optional and are checked by each provider when it is selected.

use crate::constants::{access, env_keys, oauth, ports, sms};
use anyhow::{anyhow, Context, Result};
use std::env;
use std::fmt;
use tracing::{info, warn};
use url::Url;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational (default)
    #[default]
    Info,
    /// Debug output
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Server configuration assembled once at process start
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// HTTP API port
    pub http_port: u16,
    /// Listen address
    pub host: String,
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// Azure AD application registration
    pub azure: AzureAdConfig,
    /// Microsoft Graph endpoint
    pub graph: GraphConfig,
    /// SMS provider settings
    pub sms: SmsConfig,
    /// Organizational access gate
    pub access: AccessConfig,
    /// Cross-origin settings for the web client
    pub cors: CorsConfig,
}

/// Azure AD confidential-client settings
#[derive(Clone)]
pub struct AzureAdConfig {
    /// Application (client) ID
    pub client_id: String,
    /// Client secret, required only for the OBO exchange
    pub client_secret: Option<String>,
    /// Directory (tenant) ID
    pub tenant_id: String,
    /// Redirect URI registered for the web client
    pub redirect_uri: String,
    /// Application ID URI that Teams SSO tokens target
    pub app_uri: Option<String>,
    /// Scope requested in the OBO exchange
    pub api_scope: String,
    /// Login host, without the tenant segment
    pub authority_host: String,
}

impl AzureAdConfig {
    /// Authority URL (`{host}/{tenant}`)
    #[must_use]
    pub fn authority(&self) -> String {
        format!(
            "{}/{}",
            self.authority_host.trim_end_matches('/'),
            self.tenant_id
        )
    }

    /// v2.0 token endpoint for this tenant
    #[must_use]
    pub fn token_endpoint(&self) -> String {
        format!("{}/oauth2/v2.0/token", self.authority())
    }
}

impl fmt::Debug for AzureAdConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AzureAdConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &self.client_secret.as_ref().map(|_| "[REDACTED]"))
            .field("tenant_id", &self.tenant_id)
            .field("redirect_uri", &self.redirect_uri)
            .field("app_uri", &self.app_uri)
            .field("api_scope", &self.api_scope)
            .field("authority_host", &self.authority_host)
            .finish()
    }
}

/// Microsoft Graph settings
#[derive(Debug, Clone)]
pub struct GraphConfig {
    /// Base URL including the API version segment
    pub base_url: String,
}

/// All SMS provider settings
#[derive(Debug, Clone)]
pub struct SmsConfig {
    /// Twilio REST API
    pub twilio: TwilioConfig,
    /// Gateway app on the local network
    pub local_gateway: GatewayConfig,
    /// Cloud-hosted gateway service
    pub cloud_gateway: GatewayConfig,
}

/// Twilio account settings
#[derive(Clone)]
pub struct TwilioConfig {
    /// Account SID
    pub account_sid: Option<String>,
    /// Auth token
    pub auth_token: Option<String>,
    /// Sender number
    pub from_number: Option<String>,
    /// REST API base URL
    pub api_base_url: String,
}

impl TwilioConfig {
    /// SID and token, when both are present
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &str)> {
        self.account_sid
            .as_deref()
            .zip(self.auth_token.as_deref())
    }
}

impl fmt::Debug for TwilioConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwilioConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &self.auth_token.as_ref().map(|_| "[REDACTED]"))
            .field("from_number", &self.from_number)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

/// HTTP SMS gateway settings
#[derive(Clone, Default)]
pub struct GatewayConfig {
    /// Gateway URL
    pub url: Option<String>,
    /// Basic-auth user
    pub username: Option<String>,
    /// Basic-auth password
    pub password: Option<String>,
}

impl GatewayConfig {
    /// Basic-auth pair, only when both halves are configured
    #[must_use]
    pub fn basic_auth(&self) -> Option<(&str, &str)> {
        self.username.as_deref().zip(self.password.as_deref())
    }
}

impl fmt::Debug for GatewayConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GatewayConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

/// Organizational access gate
#[derive(Debug, Clone)]
pub struct AccessConfig {
    /// Allowed sign-in domain, without the `@`
    pub allowed_domain: String,
}

/// CORS settings
#[derive(Debug, Clone)]
pub struct CorsConfig {
    /// Comma-separated origins, or `*`
    pub allowed_origins: String,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// A `.env` file in the working directory is loaded first when present.
    ///
    /// # Errors
    ///
    /// Returns an error if a mandatory Azure AD variable is missing or a numeric
    /// variable cannot be parsed.
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            info!("No .env file loaded: {e}");
        }

        let config = Self {
            http_port: optional_var(env_keys::HTTP_PORT)
                .map(|port| port.parse())
                .transpose()
                .context("Invalid HTTP_PORT value")?
                .unwrap_or(ports::DEFAULT_HTTP_PORT),
            host: optional_var(env_keys::HOST).unwrap_or_else(|| "0.0.0.0".to_owned()),
            environment: Environment::from_str_or_default(
                &optional_var(env_keys::ENVIRONMENT).unwrap_or_default(),
            ),
            log_level: LogLevel::from_str_or_default(
                &optional_var("RUST_LOG").unwrap_or_default(),
            ),
            azure: AzureAdConfig {
                client_id: required_any(env_keys::AZURE_CLIENT_ID)?,
                client_secret: optional_var(env_keys::AZURE_CLIENT_SECRET),
                tenant_id: required_any(env_keys::AZURE_TENANT_ID)?,
                redirect_uri: required_any(env_keys::AZURE_REDIRECT_URI)?,
                app_uri: optional_any(env_keys::AZURE_APP_URI),
                api_scope: optional_var(env_keys::AZURE_API_SCOPE)
                    .unwrap_or_else(|| oauth::DEFAULT_GRAPH_SCOPE.to_owned()),
                authority_host: optional_var(env_keys::AZURE_AUTHORITY_HOST)
                    .unwrap_or_else(|| oauth::DEFAULT_AUTHORITY_HOST.to_owned()),
            },
            graph: GraphConfig {
                base_url: optional_var(env_keys::GRAPH_API_BASE_URL)
                    .unwrap_or_else(|| oauth::DEFAULT_GRAPH_BASE_URL.to_owned()),
            },
            sms: SmsConfig {
                twilio: TwilioConfig {
                    account_sid: optional_var(env_keys::TWILIO_ACCOUNT_SID),
                    auth_token: optional_var(env_keys::TWILIO_AUTH_TOKEN),
                    from_number: optional_var(env_keys::TWILIO_PHONE_NUMBER),
                    api_base_url: optional_var(env_keys::TWILIO_API_BASE_URL)
                        .unwrap_or_else(|| sms::DEFAULT_TWILIO_API_BASE_URL.to_owned()),
                },
                local_gateway: GatewayConfig {
                    url: optional_var(env_keys::LOCAL_SMS_GATEWAY_URL),
                    username: optional_var(env_keys::LOCAL_SMS_USERNAME),
                    password: optional_var(env_keys::LOCAL_SMS_PASSWORD),
                },
                cloud_gateway: GatewayConfig {
                    url: optional_var(env_keys::CLOUD_SMS_GATEWAY_URL),
                    username: optional_var(env_keys::CLOUD_SMS_USERNAME),
                    password: optional_var(env_keys::CLOUD_SMS_PASSWORD),
                },
            },
            access: AccessConfig {
                allowed_domain: optional_var(env_keys::ALLOWED_DOMAIN)
                    .map(|domain| domain.trim_start_matches('@').to_owned())
                    .unwrap_or_else(|| access::DEFAULT_ALLOWED_DOMAIN.to_owned()),
            },
            cors: CorsConfig {
                allowed_origins: optional_var(env_keys::CORS_ALLOWED_ORIGINS)
                    .unwrap_or_else(|| "*".to_owned()),
            },
        };

        config.validate();
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Warn about integrations that can be selected but will fail when used
    pub fn validate(&self) {
        if self.azure.client_secret.is_none() {
            warn!("AZURE_CLIENT_SECRET is not set; On-Behalf-Of profile requests will fail");
        }

        if self.sms.twilio.credentials().is_none() {
            warn!("Twilio SMS provider is not configured");
        } else if self.sms.twilio.from_number.is_none() {
            warn!("Twilio credentials are set but TWILIO_PHONE_NUMBER is missing");
        }

        if self.sms.local_gateway.url.is_none() {
            warn!("Local SMS gateway URL is not configured");
        }

        if self.sms.cloud_gateway.url.is_none() {
            warn!("Cloud SMS gateway URL is not configured");
        }

        for (key, value) in [
            (env_keys::GRAPH_API_BASE_URL, Some(self.graph.base_url.as_str())),
            (env_keys::AZURE_AUTHORITY_HOST, Some(self.azure.authority_host.as_str())),
            (env_keys::LOCAL_SMS_GATEWAY_URL, self.sms.local_gateway.url.as_deref()),
            (env_keys::CLOUD_SMS_GATEWAY_URL, self.sms.cloud_gateway.url.as_deref()),
        ] {
            if let Some(value) = value.filter(|value| Url::parse(value).is_err()) {
                warn!("{key} is not a valid URL: {value}");
            }
        }
    }

    /// Get a summary of the configuration for logging (without secrets)
    #[must_use]
    pub fn summary(&self) -> String {
        let enabled = |on: bool| if on { "Enabled" } else { "Disabled" };
        format!(
            "KAPCHA Server Configuration:\n\
             - Listen: {}:{}\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Authority: {}\n\
             - OBO Scope: {}\n\
             - OBO Exchange: {}\n\
             - Twilio: {}\n\
             - Local SMS Gateway: {}\n\
             - Cloud SMS Gateway: {}\n\
             - Allowed Domain: @{}",
            self.host,
            self.http_port,
            self.environment,
            self.log_level,
            self.azure.authority(),
            self.azure.api_scope,
            enabled(self.azure.client_secret.is_some()),
            enabled(self.sms.twilio.credentials().is_some()),
            enabled(self.sms.local_gateway.url.is_some()),
            enabled(self.sms.cloud_gateway.url.is_some()),
            self.access.allowed_domain,
        )
    }
}

/// Read a variable, treating empty values as unset
fn optional_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// First non-empty value among a variable and its aliases
fn optional_any(keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| optional_var(key))
}

/// Like [`optional_any`] but fails naming the primary variable
fn required_any(keys: &[&str]) -> Result<String> {
    optional_any(keys).ok_or_else(|| {
        anyhow!(
            "Missing {} environment variable",
            keys.first().copied().unwrap_or("required")
        )
    })
}
