use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

const DEFAULT_MEMBER: &str = "member";

/// Reads one field off a request model.
enum Getter<R> {
    Str(fn(&R) -> Option<&str>),
    Int(fn(&R) -> Option<i64>),
    Bool(fn(&R) -> Option<bool>),
    List(fn(&R) -> Option<&[String]>),
}

impl<R> Clone for Getter<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Getter<R> {}

/// One entry of a model's descriptor table: the wire name plus how to read it.
pub struct Field<R> {
    name: &'static str,
    member: &'static str,
    getter: Getter<R>,
}

impl<R> Field<R> {
    pub const fn string(name: &'static str, get: fn(&R) -> Option<&str>) -> Self {
        Self::new(name, Getter::Str(get))
    }

    pub const fn int(name: &'static str, get: fn(&R) -> Option<i64>) -> Self {
        Self::new(name, Getter::Int(get))
    }

    pub const fn bool(name: &'static str, get: fn(&R) -> Option<bool>) -> Self {
        Self::new(name, Getter::Bool(get))
    }

    /// A list parameter using the default `member` element name.
    pub const fn list(name: &'static str, get: fn(&R) -> Option<&[String]>) -> Self {
        Self::new(name, Getter::List(get))
    }

    /// A list parameter whose elements are keyed `Name.<member>.N`.
    pub const fn list_of(
        name: &'static str,
        member: &'static str,
        get: fn(&R) -> Option<&[String]>,
    ) -> Self {
        Self {
            name,
            member,
            getter: Getter::List(get),
        }
    }

    const fn new(name: &'static str, getter: Getter<R>) -> Self {
        Self {
            name,
            member: DEFAULT_MEMBER,
            getter,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn member(&self) -> &'static str {
        self.member
    }

    pub fn value<'a>(&self, request: &'a R) -> FieldValue<'a> {
        match self.getter {
            Getter::Str(get) => get(request).map_or(FieldValue::Absent, |s| {
                FieldValue::Scalar(Cow::Borrowed(s))
            }),
            Getter::Int(get) => get(request).map_or(FieldValue::Absent, |n| {
                FieldValue::Scalar(Cow::Owned(n.to_string()))
            }),
            Getter::Bool(get) => get(request).map_or(FieldValue::Absent, |b| {
                FieldValue::Scalar(Cow::Borrowed(if b { "true" } else { "false" }))
            }),
            Getter::List(get) => get(request).map_or(FieldValue::Absent, FieldValue::List),
        }
    }
}

/// The current value of a field in its wire form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Absent,
    Scalar(Cow<'a, str>),
    List(&'a [String]),
}

impl FieldValue<'_> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Absent => Ok(()),
            Self::Scalar(s) => f.write_str(s),
            Self::List(items) => write!(f, "[{}]", items.join(", ")),
        }
    }
}

/// How list elements are keyed on the wire.
///
/// `Member` produces `Name.member.1`, `Name.member.2`, ... (or the field's
/// own member name in place of `member`). `Flat` produces `Name.1`, `Name.2`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    #[default]
    Member,
    Flat,
}

impl ListStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Flat => "flat",
        }
    }

    /// Key for the `index`-th (1-based) element of list `name`.
    pub fn key(&self, name: &str, member: &str, index: usize) -> String {
        match self {
            Self::Member => format!("{name}.{member}.{index}"),
            Self::Flat => format!("{name}.{index}"),
        }
    }
}

impl fmt::Display for ListStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ListStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "member" => Ok(Self::Member),
            "flat" => Ok(Self::Flat),
            other => Err(Error::UnknownListStyle(other.to_string())),
        }
    }
}
