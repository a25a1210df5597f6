//! Request models for the identity-management query API.
//!
//! Covers the operations needed for auditing attached policies:
//! listing a user's managed policies and pulling the account-wide
//! authorization snapshot. Marshal with [`query_protocol::marshall`].

mod types;

pub use types::*;

pub const SERVICE_NAME: &str = "AmazonIdentityManagement";
pub const API_VERSION: &str = "2010-05-08";
