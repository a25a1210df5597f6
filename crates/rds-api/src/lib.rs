//! Request models for the relational-database query API.

mod types;

pub use types::*;

pub const SERVICE_NAME: &str = "AmazonRDS";
pub const API_VERSION: &str = "2014-10-31";
