// ABOUTME: Confidential-client On-Behalf-Of token exchange against the Azure AD v2.0 token endpoint
// ABOUTME: Trades a Teams SSO assertion for a Graph access token, one request per call with no cache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

use crate::config::environment::AzureAdConfig;
use crate::constants::{messages, oauth};
use crate::errors::AppError;
use crate::logging::AppLogger;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::fmt;
use thiserror::Error;
use tracing::debug;

/// Failures of the On-Behalf-Of exchange
#[derive(Debug, Error)]
pub enum OboError {
    /// The user or an administrator has to grant consent interactively
    #[error("{code}: {description}")]
    ConsentRequired {
        /// Identity-provider error code
        code: String,
        /// Identity-provider explanation
        description: String,
    },
    /// The token endpoint answered successfully but without a usable token
    #[error("Token response did not contain an access token")]
    MissingAccessToken,
    /// The confidential client has no secret to authenticate with
    #[error("AZURE_CLIENT_SECRET is not configured")]
    MissingClientSecret,
    /// Any other identity-provider rejection
    #[error("{error}: {description}")]
    Rejected {
        /// Identity-provider error code, or the HTTP status when the body was not an error document
        error: String,
        /// Identity-provider explanation or raw response text
        description: String,
    },
    /// Network or decoding failure
    #[error("Token endpoint request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl From<OboError> for AppError {
    fn from(error: OboError) -> Self {
        match error {
            OboError::ConsentRequired { .. } => {
                Self::consent_required(messages::CONSENT_REQUIRED).with_source(error)
            }
            OboError::MissingAccessToken => {
                Self::auth_invalid(messages::TOKEN_ACQUISITION_FAILED).with_source(error)
            }
            other => Self::internal(other.to_string()).with_source(other),
        }
    }
}

/// Access token obtained on behalf of the signed-in user
#[derive(Clone)]
pub struct OboToken {
    /// Bearer token for the downstream API
    pub access_token: String,
    /// Token type, normally `Bearer`
    pub token_type: Option<String>,
    /// Lifetime in seconds
    pub expires_in: Option<u64>,
    /// Granted scopes
    pub scope: Option<String>,
}

impl fmt::Debug for OboToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OboToken")
            .field("access_token", &"[REDACTED]")
            .field("token_type", &self.token_type)
            .field("expires_in", &self.expires_in)
            .field("scope", &self.scope)
            .finish()
    }
}

#[derive(Deserialize)]
struct TokenEndpointResponse {
    access_token: Option<String>,
    token_type: Option<String>,
    expires_in: Option<u64>,
    scope: Option<String>,
}

#[derive(Deserialize)]
struct TokenErrorResponse {
    error: String,
    #[serde(default)]
    error_description: Option<String>,
    #[serde(default)]
    suberror: Option<String>,
}

/// On-Behalf-Of client bound to one application registration and one scope
#[derive(Clone)]
pub struct OnBehalfOfClient {
    client: Client,
    token_endpoint: String,
    client_id: String,
    client_secret: Option<String>,
    scope: String,
}

impl OnBehalfOfClient {
    /// Create a client using the given HTTP client
    #[must_use]
    pub fn with_client(config: &AzureAdConfig, client: Client) -> Self {
        Self {
            client,
            token_endpoint: config.token_endpoint(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            scope: config.api_scope.clone(),
        }
    }

    /// Exchange an SSO assertion for an access token
    ///
    /// Every call hits the token endpoint; tokens are never cached.
    ///
    /// # Errors
    ///
    /// Returns [`OboError::ConsentRequired`] for `invalid_grant` and
    /// `interaction_required`, [`OboError::MissingAccessToken`] when the endpoint
    /// succeeds without a token, and other variants for every remaining failure.
    pub async fn acquire_token(&self, assertion: &str) -> Result<OboToken, OboError> {
        let client_secret = self
            .client_secret
            .as_deref()
            .ok_or(OboError::MissingClientSecret)?;

        let params = [
            ("grant_type", oauth::OBO_GRANT_TYPE),
            ("client_id", self.client_id.as_str()),
            ("client_secret", client_secret),
            ("assertion", assertion),
            ("scope", self.scope.as_str()),
            ("requested_token_use", oauth::OBO_REQUESTED_TOKEN_USE),
        ];

        debug!(endpoint = %self.token_endpoint, "Requesting On-Behalf-Of token");

        let response = self
            .client
            .post(&self.token_endpoint)
            .form(&params)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;

        let result = parse_token_response(status, &body);
        AppLogger::log_obo_event(
            &self.scope,
            match &result {
                Ok(_) => "token_acquired",
                Err(OboError::ConsentRequired { .. }) => "consent_required",
                Err(_) => "token_failed",
            },
            result.is_ok(),
        );
        result
    }
}

/// Interpret a token endpoint response
fn parse_token_response(status: StatusCode, body: &str) -> Result<OboToken, OboError> {
    if status.is_success() {
        let response: TokenEndpointResponse =
            serde_json::from_str(body).map_err(|e| OboError::Rejected {
                error: "invalid_response".to_owned(),
                description: e.to_string(),
            })?;

        return match response.access_token.filter(|token| !token.is_empty()) {
            Some(access_token) => Ok(OboToken {
                access_token,
                token_type: response.token_type,
                expires_in: response.expires_in,
                scope: response.scope,
            }),
            None => Err(OboError::MissingAccessToken),
        };
    }

    match serde_json::from_str::<TokenErrorResponse>(body) {
        Ok(error) => {
            let description = error.error_description.unwrap_or_default();
            let is_consent = oauth::CONSENT_ERROR_CODES.contains(&error.error.as_str())
                || error
                    .suberror
                    .as_deref()
                    .is_some_and(|sub| sub == "consent_required");

            if is_consent {
                Err(OboError::ConsentRequired {
                    code: error.error,
                    description,
                })
            } else {
                Err(OboError::Rejected {
                    error: error.error,
                    description,
                })
            }
        }
        Err(_) => Err(OboError::Rejected {
            error: format!("HTTP {}", status.as_u16()),
            description: body.to_owned(),
        }),
    }
}
