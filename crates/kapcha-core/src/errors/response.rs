// ABOUTME: Axum integration for AppError: IntoResponse and JSON body rejection mapping
// ABOUTME: Enabled by the http-response feature so non-HTTP consumers avoid the axum dependency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 KAPCHA

use super::{AppError, ErrorResponse};
use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::{error, warn};

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(
                error.code = ?self.code,
                http.status = status.as_u16(),
                "{}",
                self.message
            );
        } else {
            warn!(
                error.code = ?self.code,
                http.status = status.as_u16(),
                "{}",
                self.message
            );
        }

        (status, Json(ErrorResponse::from(self))).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::invalid_input(format!("Invalid request body: {}", rejection.body_text()))
    }
}
