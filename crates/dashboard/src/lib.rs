//! Dashboard - ROI Dashboard Backend
//!
//! HTTP endpoints backing the ROI dashboard: a KPI snapshot, upload
//! processing status proxied from the hosted Supabase store, and the email
//! subsystem's demo/live mode.

pub mod config;
pub mod error;
pub mod server;
