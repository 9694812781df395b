//! Error types shared by the dashboard handlers and store clients

use axum::{
  http::StatusCode,
  response::{IntoResponse, Json, Response},
};
use thiserror::Error;

use crate::server::types::ErrorResponse;

/// Failures talking to the hosted store
#[derive(Error, Debug)]
pub enum StoreError {
  #[error("Store rejected request with HTTP {status}: {body}")]
  Rejected { status: u16, body: String },

  #[error("Store request failed: {0}")]
  Transport(#[from] reqwest::Error),

  #[error("Failed to decode store response: {0}")]
  Decode(#[from] serde_json::Error),

  #[error("Invalid store URL: {0}")]
  Url(#[from] url::ParseError),
}

impl StoreError {
  pub fn rejected(status: u16, body: impl Into<String>) -> Self {
    Self::Rejected { status, body: body.into() }
  }
}

/// Errors surfaced to HTTP clients
///
/// Only the public message reaches the response body. Handlers log the
/// detail of an internal error against the request context before returning.
#[derive(Error, Debug)]
pub enum ApiError {
  #[error("{message}")]
  NotFound { message: String },

  #[error("{message}: {detail}")]
  Internal { message: String, detail: String },
}

impl ApiError {
  pub fn not_found(message: impl Into<String>) -> Self {
    Self::NotFound { message: message.into() }
  }

  pub fn internal(message: impl Into<String>, detail: impl std::fmt::Display) -> Self {
    Self::Internal { message: message.into(), detail: detail.to_string() }
  }

  pub fn status_code(&self) -> StatusCode {
    match self {
      ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
      ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  pub fn public_message(&self) -> &str {
    match self {
      ApiError::NotFound { message } | ApiError::Internal { message, .. } => message,
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let body = ErrorResponse { error: self.public_message().to_string() };
    (self.status_code(), Json(body)).into_response()
  }
}
