//! Data models for the CDN origin-access-identity API.
//!
//! Only the list page is modelled; fetching and parsing pages is left to
//! the transport.

mod types;

pub use types::*;

pub const API_VERSION: &str = "2012-03-15";
