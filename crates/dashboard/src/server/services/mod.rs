pub mod kpi_source;
pub mod mode_source;
pub mod supabase;
pub mod upload_store;
