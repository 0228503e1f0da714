use std::fmt;

use serde_json::{Map, Value};

use crate::domain::validation::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Sendsay account login (the shared, company-wide login).
///
/// Invariant: not blank. The value is kept exactly as given.
pub struct Login(String);

impl Login {
    /// Field name inside `one_time_auth` (`login`).
    pub const FIELD: &'static str = "login";

    /// Create a validated [`Login`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the validated login.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Personal login of a user under the shared account.
///
/// Allowed to be empty: accounts without sub-users send an empty value.
pub struct Sublogin(String);

impl Sublogin {
    /// Field name inside `one_time_auth` (`sublogin`).
    pub const FIELD: &'static str = "sublogin";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// Account password.
///
/// Invariant: must not be empty (whitespace is preserved and allowed).
/// The `Debug` output is masked.
pub struct Password(String);

impl Password {
    /// Field name inside `one_time_auth` (`passwd`).
    pub const FIELD: &'static str = "passwd";

    /// Create a validated [`Password`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::Empty { field: Self::FIELD });
        }
        Ok(Self(value))
    }

    /// Borrow the password as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Static credentials sent with every authenticated request.
///
/// Set once when the client is built and never mutated afterwards. On the wire they are
/// embedded under the top-level `one_time_auth` key.
pub struct Credentials {
    login: Login,
    sublogin: Sublogin,
    password: Password,
}

impl Credentials {
    /// Top-level payload key holding the credential triple.
    pub const FIELD: &'static str = "one_time_auth";

    /// Validate and bundle the credential triple.
    pub fn new(
        login: impl Into<String>,
        sublogin: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            login: Login::new(login)?,
            sublogin: Sublogin::new(sublogin),
            password: Password::new(password)?,
        })
    }

    pub fn login(&self) -> &Login {
        &self.login
    }

    pub fn sublogin(&self) -> &Sublogin {
        &self.sublogin
    }

    /// JSON object placed under [`Credentials::FIELD`].
    pub fn to_json(&self) -> Value {
        let mut auth = Map::new();
        auth.insert(Login::FIELD.to_owned(), self.login.as_str().into());
        auth.insert(Sublogin::FIELD.to_owned(), self.sublogin.as_str().into());
        auth.insert(Password::FIELD.to_owned(), self.password.as_str().into());
        Value::Object(auth)
    }
}
