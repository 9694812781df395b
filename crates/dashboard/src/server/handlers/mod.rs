pub mod kpis;
pub mod mode;
pub mod status;
pub mod uploads;
