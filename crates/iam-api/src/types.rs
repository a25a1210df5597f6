use std::fmt;

use query_protocol::{Field, Operation, describe};

use crate::{API_VERSION, SERVICE_NAME};

// ── Attached user policies ──────────────────────────────────────────

/// Lists the managed policies attached to a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ListAttachedUserPoliciesRequest {
    pub user_name: Option<String>,
    pub path_prefix: Option<String>,
    pub marker: Option<String>,
    pub max_items: Option<i32>,
}

impl ListAttachedUserPoliciesRequest {
    pub fn builder() -> ListAttachedUserPoliciesRequestBuilder {
        ListAttachedUserPoliciesRequestBuilder::default()
    }
}

#[derive(Debug, Default)]
pub struct ListAttachedUserPoliciesRequestBuilder {
    request: ListAttachedUserPoliciesRequest,
}

impl ListAttachedUserPoliciesRequestBuilder {
    pub fn user_name(mut self, user_name: impl Into<String>) -> Self {
        self.request.user_name = Some(user_name.into());
        self
    }

    pub fn path_prefix(mut self, path_prefix: impl Into<String>) -> Self {
        self.request.path_prefix = Some(path_prefix.into());
        self
    }

    /// Pagination marker from a previous truncated response.
    pub fn marker(mut self, marker: impl Into<String>) -> Self {
        self.request.marker = Some(marker.into());
        self
    }

    pub fn max_items(mut self, max_items: i32) -> Self {
        self.request.max_items = Some(max_items);
        self
    }

    pub fn build(self) -> ListAttachedUserPoliciesRequest {
        self.request
    }
}

impl Operation for ListAttachedUserPoliciesRequest {
    const SERVICE: &'static str = SERVICE_NAME;
    const ACTION: &'static str = "ListAttachedUserPolicies";
    const VERSION: &'static str = API_VERSION;
    const FIELDS: &'static [Field<Self>] = &[
        Field::string("UserName", |r| r.user_name.as_deref()),
        Field::string("PathPrefix", |r| r.path_prefix.as_deref()),
        Field::string("Marker", |r| r.marker.as_deref()),
        Field::int("MaxItems", |r| r.max_items.map(i64::from)),
    ];
}

impl fmt::Display for ListAttachedUserPoliciesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", describe(self))
    }
}

// ── Account authorization details ───────────────────────────────────

/// Entity kinds accepted by [`GetAccountAuthorizationDetailsRequest::filter`].
pub const ENTITY_TYPES: [&str; 5] = [
    "User",
    "Role",
    "Group",
    "LocalManagedPolicy",
    "AWSManagedPolicy",
];

/// Snapshot of users, groups, roles and policies in the account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GetAccountAuthorizationDetailsRequest {
    /// Restricts the result to these entity kinds; sent as `Filter.member.N`.
    pub filter: Option<Vec<String>>,
    pub max_items: Option<i32>,
    pub marker: Option<String>,
}

impl Operation for GetAccountAuthorizationDetailsRequest {
    const SERVICE: &'static str = SERVICE_NAME;
    const ACTION: &'static str = "GetAccountAuthorizationDetails";
    const VERSION: &'static str = API_VERSION;
    const FIELDS: &'static [Field<Self>] = &[
        Field::list("Filter", |r| r.filter.as_deref()),
        Field::int("MaxItems", |r| r.max_items.map(i64::from)),
        Field::string("Marker", |r| r.marker.as_deref()),
    ];
}

impl fmt::Display for GetAccountAuthorizationDetailsRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", describe(self))
    }
}
