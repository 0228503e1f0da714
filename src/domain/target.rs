//! Tagged unions replacing "string or list" arguments.
//!
//! The remote API picks a different payload key depending on whether the caller passes a
//! single value or a collection. Callers state that intent through these enums.

use serde_json::{Map, Value};

use crate::domain::options::ResultFormat;
use crate::domain::payload::PayloadBuilder;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Members addressed either by a whole group or by an explicit address list.
///
/// Maps to `group` or `list`.
pub enum Audience {
    Group(String),
    List(Vec<String>),
}

impl Audience {
    pub fn group(id: impl Into<String>) -> Self {
        Self::Group(id.into())
    }

    pub fn list<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(addresses.into_iter().map(Into::into).collect())
    }

    pub(crate) fn apply(self, builder: PayloadBuilder) -> PayloadBuilder {
        match self {
            Self::Group(id) => builder.field("group", id),
            Self::List(list) => builder.field("list", list),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One address or several. Maps to `email` or `list`.
pub enum Addresses {
    Email(String),
    List(Vec<String>),
}

impl Addresses {
    pub fn email(address: impl Into<String>) -> Self {
        Self::Email(address.into())
    }

    pub fn list<I, S>(addresses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::List(addresses.into_iter().map(Into::into).collect())
    }

    pub(crate) fn insert_into(self, target: &mut Map<String, Value>) {
        match self {
            Self::Email(email) => {
                target.insert("email".to_owned(), Value::String(email));
            }
            Self::List(list) => {
                target.insert("list".to_owned(), list.into());
            }
        }
    }

    pub(crate) fn apply(self, builder: PayloadBuilder) -> PayloadBuilder {
        match self {
            Self::Email(email) => builder.field("email", email),
            Self::List(list) => builder.field("list", list),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// Which members `group.clean` removes from a list group.
pub enum GroupCleanScope {
    /// Every member (`all = true`).
    #[default]
    All,
    /// A subset given as one address or a list.
    Only(Addresses),
}

impl GroupCleanScope {
    pub(crate) fn apply(self, builder: PayloadBuilder) -> PayloadBuilder {
        match self {
            Self::All => builder.field("all", true),
            Self::Only(addresses) => addresses.apply(builder),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A single identifier or a list of them, sent under the same key either way.
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn one(value: impl Into<T>) -> Self {
        Self::One(value.into())
    }

    pub fn many<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<T>,
    {
        Self::Many(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<OneOrMany<T>> for Value {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::One(one) => one.into(),
            OneOrMany::Many(many) => Value::Array(many.into_iter().map(Into::into).collect()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
/// How a statistics request delivers its report.
pub enum StatResult {
    /// Store the report on the server (`result = "save"`).
    #[default]
    Save,
    /// Return rows in the response body (`result = "response"`).
    Response,
    /// Mail the report to these recipients (`result = "email"`, `email = [...]`).
    Email(Vec<String>),
}

impl StatResult {
    pub fn email<I, S>(recipients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Email(recipients.into_iter().map(Into::into).collect())
    }

    /// Shape `result`, `email` and `result.format` for every statistics action.
    ///
    /// `result.format` only applies when the report is saved or mailed.
    pub(crate) fn apply(self, builder: PayloadBuilder, format: ResultFormat) -> PayloadBuilder {
        match self {
            Self::Save => builder
                .field("result", "save")
                .field("result.format", format),
            Self::Response => builder.field("result", "response"),
            Self::Email(recipients) => builder
                .field("result", "email")
                .field("email", recipients)
                .field("result.format", format),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Where `member.import` takes its subscribers from (`users.list`).
pub enum ImportSource {
    /// Link to a UTF-8 CSV file; the first line is the header.
    Url(String),
    /// Identifier of data uploaded earlier.
    Upload(u64),
    /// Inline rows; the first row is the header.
    Rows(Vec<Value>),
}

impl From<ImportSource> for Value {
    fn from(source: ImportSource) -> Self {
        match source {
            ImportSource::Url(url) => Value::String(url),
            ImportSource::Upload(id) => Value::from(id),
            ImportSource::Rows(rows) => Value::Array(rows),
        }
    }
}
