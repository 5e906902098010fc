// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Errors surfaced to API clients.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use saas_auth::AuthzError;
use serde::{Deserialize, Serialize};

/// JSON body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
	pub error: String,
	pub message: String,
}

impl ErrorResponse {
	pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
		Self {
			error: error.into(),
			message: message.into(),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
	#[error("bad request: {0}")]
	BadRequest(String),
	#[error("unauthorized: {0}")]
	Unauthorized(String),
	#[error("forbidden: {0}")]
	Forbidden(String),
	#[error("not found: {0}")]
	NotFound(String),
	#[error("internal error: {0}")]
	Internal(String),
}

impl ApiError {
	pub fn status(&self) -> StatusCode {
		match self {
			ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
			ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
			ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
			ApiError::NotFound(_) => StatusCode::NOT_FOUND,
			ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}

	/// Body sent to the client. Internal details stay in the logs.
	pub fn to_response_body(&self) -> ErrorResponse {
		match self {
			ApiError::BadRequest(msg) => ErrorResponse::new("bad_request", msg.clone()),
			ApiError::Unauthorized(msg) => ErrorResponse::new("unauthorized", msg.clone()),
			ApiError::Forbidden(msg) => ErrorResponse::new("forbidden", msg.clone()),
			ApiError::NotFound(msg) => ErrorResponse::new("not_found", msg.clone()),
			ApiError::Internal(_) => ErrorResponse::new("internal_error", "Internal server error"),
		}
	}
}

impl From<AuthzError> for ApiError {
	fn from(e: AuthzError) -> Self {
		tracing::error!(error = %e, "authorization engine misuse");
		ApiError::Internal(e.to_string())
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		if let ApiError::Internal(detail) = &self {
			tracing::error!(error = %detail, "request failed");
		}
		(self.status(), Json(self.to_response_body())).into_response()
	}
}
