//! REST API module for the dashboard service
//!
//! Provides the HTTP endpoints consumed by the dashboard front end.
//! Uses axum for routing and schemars for response schema generation.

pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routing;
pub mod services;
pub mod startup;
pub mod state;
pub mod types;
