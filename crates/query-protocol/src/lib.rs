//! Query-protocol request marshalling.
//!
//! Turns a typed request model into the ordered `Action` / `Version` /
//! field parameter list that query-style cloud APIs expect in a query
//! string or form body. Each model declares a [`Field`] table; a single
//! [`Marshaller`] walks it.
//!
//! Sending, signing and response parsing belong to the transport.

mod field;
mod marshaller;
mod params;

pub use field::{Field, FieldValue, ListStyle};
pub use marshaller::{LIST_STYLE_ENV, Marshaller, marshall};
pub use params::ParameterSet;

use std::fmt;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid argument passed to marshall: {0}")]
    InvalidArgument(&'static str),

    #[error("unknown list style: {0}")]
    UnknownListStyle(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A remote operation whose request model can be marshalled.
///
/// `FIELDS` lists the model's parameters in declaration order; that order
/// is the order they appear on the wire.
pub trait Operation: Sized + 'static {
    /// Service name the transport uses to pick an endpoint.
    const SERVICE: &'static str;
    const ACTION: &'static str;
    const VERSION: &'static str;
    const FIELDS: &'static [Field<Self>];
}

/// Renders the set fields of a request as `{Name: value, List: [a, b]}`.
///
/// Unset fields are skipped, matching what [`marshall`] would emit.
pub fn describe<R: Operation>(request: &R) -> Described<'_, R> {
    Described(request)
}

pub struct Described<'a, R>(&'a R);

impl<R: Operation> fmt::Display for Described<'_, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        let mut first = true;
        for field in R::FIELDS {
            let value = field.value(self.0);
            if value.is_absent() {
                continue;
            }
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{}: {value}", field.name())?;
        }
        f.write_str("}")
    }
}
