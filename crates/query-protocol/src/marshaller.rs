use std::env::VarError;

use tracing::{debug, info};

use crate::field::{FieldValue, ListStyle};
use crate::{Error, Operation, ParameterSet, Result};

/// Environment variable selecting the list-key convention (`member` or `flat`).
pub const LIST_STYLE_ENV: &str = "QUERY_LIST_STYLE";

/// Projects request models onto query parameters.
///
/// Holds only the list-key convention, so one instance can be shared
/// freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Marshaller {
    list_style: ListStyle,
}

impl Marshaller {
    pub fn new(list_style: ListStyle) -> Self {
        Self { list_style }
    }

    /// Create from env vars: `QUERY_LIST_STYLE` (default: `member`).
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let list_style = match std::env::var(LIST_STYLE_ENV) {
            Ok(raw) => raw.trim().parse::<ListStyle>()?,
            Err(VarError::NotPresent) => ListStyle::default(),
            Err(VarError::NotUnicode(raw)) => {
                return Err(Error::UnknownListStyle(raw.to_string_lossy().into_owned()));
            }
        };
        if list_style != ListStyle::default() {
            info!(%list_style, "using non-default list style");
        }

        Ok(Self::new(list_style))
    }

    pub fn list_style(&self) -> ListStyle {
        self.list_style
    }

    /// Marshal `request` into its parameter set.
    ///
    /// `None` stands for a missing request and is rejected before anything
    /// is emitted. Output is `Action`, `Version`, then every set field in
    /// declaration order. List elements are numbered from 1.
    pub fn marshall<R: Operation>(&self, request: Option<&R>) -> Result<ParameterSet> {
        let request = request.ok_or(Error::InvalidArgument("request is missing"))?;

        let mut params = ParameterSet::new();
        params.push("Action", R::ACTION);
        params.push("Version", R::VERSION);

        for field in R::FIELDS {
            match field.value(request) {
                FieldValue::Absent => {}
                FieldValue::Scalar(value) => params.push(field.name(), value),
                FieldValue::List(items) => {
                    for (i, item) in items.iter().enumerate() {
                        let key = self.list_style.key(field.name(), field.member(), i + 1);
                        params.push(key, item.as_str());
                    }
                }
            }
        }

        debug!(
            service = R::SERVICE,
            action = R::ACTION,
            params = params.len(),
            "marshalled request"
        );
        Ok(params)
    }
}

/// Marshal with the default (`member`) list convention.
pub fn marshall<R: Operation>(request: Option<&R>) -> Result<ParameterSet> {
    Marshaller::default().marshall(request)
}
