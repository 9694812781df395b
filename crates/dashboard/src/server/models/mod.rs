pub mod kpi;
pub mod mode;
pub mod upload;
