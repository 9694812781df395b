//! Request context middleware for the dashboard REST API
//!
//! Every request gets a UUID that is logged with its start and completion,
//! made available to handlers through `Extension<RequestContext>`, and echoed
//! back in the `x-request-id` response header.

use axum::{
  extract::Request,
  http::{HeaderMap, HeaderName, HeaderValue, Method, Uri},
  middleware::Next,
  response::Response,
};
use std::time::Instant;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Request metadata shared with handlers
#[derive(Debug, Clone)]
pub struct RequestContext {
  /// Unique ID for this request
  pub request_id: Uuid,
  /// HTTP method
  pub method: Method,
  /// Request URI
  pub uri: Uri,
  /// Client user agent, if sent
  pub user_agent: Option<String>,
}

impl RequestContext {
  pub fn new(method: Method, uri: Uri, headers: &HeaderMap) -> Self {
    let user_agent = headers.get("user-agent").and_then(|v| v.to_str().ok()).map(str::to_string);
    Self { request_id: Uuid::new_v4(), method, uri, user_agent }
  }

  pub fn log_info(&self, message: &str, component: &str) {
    tracing::info!(request_id = %self.request_id, method = %self.method, path = self.uri.path(), component, "{message}");
  }

  pub fn log_warn(&self, message: &str, component: &str) {
    tracing::warn!(request_id = %self.request_id, method = %self.method, path = self.uri.path(), component, "{message}");
  }

  pub fn log_error(&self, message: &str, component: &str) {
    tracing::error!(request_id = %self.request_id, method = %self.method, path = self.uri.path(), component, "{message}");
  }

  fn log_request_start(&self) {
    tracing::debug!(
      request_id = %self.request_id,
      method = %self.method,
      path = self.uri.path(),
      user_agent = self.user_agent.as_deref().unwrap_or("none"),
      "Request started"
    );
  }

  fn log_request_complete(&self, status_code: u16, duration_ms: f64) {
    tracing::info!(
      request_id = %self.request_id,
      method = %self.method,
      path = self.uri.path(),
      status = status_code,
      duration_ms,
      "Request completed"
    );
  }
}

/// Middleware to inject RequestContext into all requests
pub async fn request_context_middleware(mut request: Request, next: Next) -> Response {
  let context = RequestContext::new(request.method().clone(), request.uri().clone(), request.headers());

  let start_time = Instant::now();
  context.log_request_start();

  request.extensions_mut().insert(context.clone());

  let mut response = next.run(request).await;

  let duration_ms = start_time.elapsed().as_secs_f64() * 1000.0;
  context.log_request_complete(response.status().as_u16(), duration_ms);

  if let Ok(value) = HeaderValue::from_str(&context.request_id.to_string()) {
    response.headers_mut().insert(REQUEST_ID_HEADER, value);
  }

  response
}
