pub mod analysis;
pub mod config;
pub mod error;
pub mod lang;
pub mod reporting;
pub mod scan;
pub mod types;
