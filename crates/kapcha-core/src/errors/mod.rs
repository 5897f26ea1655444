// ABOUTME: Unified error type, error codes, and HTTP wire format for the KAPCHA backend
// ABOUTME: Maps every failure to a status code and the {error, message, details} response body
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

//! # Unified Error Handling System
//!
//! Every handler in the service returns [`AppResult`]. An [`AppError`] carries an
//! [`ErrorCode`] (which decides the HTTP status), a human-readable message and
//! optional diagnostic details. The serialized body always has the shape
//!
//! ```json
//! { "error": "<short string or machine code>", "message": "...", "details": ... }
//! ```
//!
//! where `message` and `details` are omitted when absent. Codes with a fixed
//! machine label (for example `consent_required`) put the label in `error` and the
//! human text in `message`, so web clients can branch on `error` alone.

#[cfg(feature = "http-response")]
mod response;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation
    /// Request body or parameter is invalid
    InvalidInput,
    /// A required request field is missing or empty
    MissingRequiredField,
    /// The route exists but does not accept this HTTP method
    MethodNotAllowed,

    // Authentication & Authorization
    /// Token acquisition or validation failed
    AuthInvalid,
    /// The identity provider requires interactive user consent
    ConsentRequired,
    /// The principal is not allowed to use this application
    PermissionDenied,

    // External Services
    /// A downstream API (Graph, Twilio, SMS gateway) returned an error
    ExternalServiceError,

    // Configuration
    /// A provider or integration is selected but not configured
    ConfigMissing,

    // Internal
    /// Unexpected failure
    InternalError,
    /// JSON encoding or decoding failed
    SerializationError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput | Self::MissingRequiredField => 400,
            Self::AuthInvalid | Self::ConsentRequired => 401,
            Self::PermissionDenied => 403,
            Self::MethodNotAllowed => 405,
            Self::ExternalServiceError
            | Self::ConfigMissing
            | Self::InternalError
            | Self::SerializationError => 500,
        }
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing from the request",
            Self::MethodNotAllowed => "The HTTP method is not allowed for this endpoint",
            Self::AuthInvalid => "Authentication with the identity provider failed",
            Self::ConsentRequired => "User consent is required",
            Self::PermissionDenied => "You do not have permission to perform this action",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::ConfigMissing => "Required configuration is missing",
            Self::InternalError => "An internal server error occurred",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }

    /// Fixed value for the `error` field of the response body
    ///
    /// `None` means the error message itself is used as the `error` field.
    #[must_use]
    pub const fn wire_label(self) -> Option<&'static str> {
        match self {
            Self::ConsentRequired => Some("consent_required"),
            Self::InternalError | Self::SerializationError => Some("Internal server error"),
            Self::InvalidInput
            | Self::MissingRequiredField
            | Self::MethodNotAllowed
            | Self::AuthInvalid
            | Self::PermissionDenied
            | Self::ExternalServiceError
            | Self::ConfigMissing => None,
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Diagnostic payload, usually the downstream response text
    pub details: Option<serde_json::Value>,
    /// Status relayed from a downstream service instead of the code's default
    pub status_override: Option<u16>,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
            status_override: None,
            source: None,
        }
    }

    /// Attach diagnostic details
    #[must_use]
    pub fn with_details(mut self, details: impl Into<serde_json::Value>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Respond with a downstream status code instead of the code's default
    #[must_use]
    pub const fn with_status(mut self, status: u16) -> Self {
        self.status_override = Some(status);
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub fn http_status(&self) -> u16 {
        self.status_override
            .unwrap_or_else(|| self.code.http_status())
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Short error string or machine-checkable code
    pub error: String,
    /// Human-readable explanation when `error` is a fixed label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Downstream diagnostics
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        match error.code.wire_label() {
            Some(label) => Self {
                error: label.to_owned(),
                message: Some(error.message),
                details: error.details,
            },
            None => Self {
                error: error.message,
                message: None,
                details: error.details,
            },
        }
    }
}

/// Convenience functions for creating common errors
impl AppError {
    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Missing required field
    pub fn missing_field(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingRequiredField, message)
    }

    /// Method not allowed on this route
    #[must_use]
    pub fn method_not_allowed() -> Self {
        Self::new(ErrorCode::MethodNotAllowed, "Method not allowed")
    }

    /// Token acquisition or validation failed
    pub fn auth_invalid(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::AuthInvalid, message)
    }

    /// Interactive consent required
    pub fn consent_required(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConsentRequired, message)
    }

    /// Principal not permitted
    pub fn permission_denied(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::PermissionDenied, message)
    }

    /// Downstream service error
    pub fn external_service(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ExternalServiceError, message)
    }

    /// Missing configuration for a selected integration
    pub fn config_missing(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigMissing, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(ErrorCode::SerializationError, error.to_string()).with_source(error)
    }
}

#[cfg(feature = "provider-errors")]
impl From<reqwest::Error> for AppError {
    fn from(error: reqwest::Error) -> Self {
        Self::new(ErrorCode::ExternalServiceError, error.to_string()).with_source(error)
    }
}
