use std::fmt;

/// Wildcard selector understood by SuperSMS for `channel`, `country` and `pid`.
pub const ANY: &str = "any";

#[derive(Clone, PartialEq, Eq, Hash)]
/// SuperSMS secret key, sent as `secret_key` on every request.
///
/// No validation is applied: an empty key is accepted and rejected server side.
/// `Debug` output is redacted.
pub struct ApiKey(String);

impl ApiKey {
    /// Query parameter name used by SuperSMS (`secret_key`).
    pub const FIELD: &'static str = "secret_key";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the key as provided.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl From<&str> for ApiKey {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ApiKey {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Referral code attached to a client.
///
/// Kept for callers that track it; SuperSMS has no request parameter for it.
pub struct Referral(String);

impl Referral {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Identifier of a pending code-retrieval task (`taskid`).
pub struct TaskId(i64);

impl TaskId {
    /// Query parameter name used by SuperSMS (`taskid`).
    pub const FIELD: &'static str = "taskid";

    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for TaskId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Phone number as the service reports it (`phone`).
///
/// The value is passed through untouched; no format checks are made locally.
pub struct Phone(String);

impl Phone {
    /// Query parameter name used by SuperSMS (`phone`).
    pub const FIELD: &'static str = "phone";

    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Phone {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Phone {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Free-form selector for `channel`, `country` or `pid`.
pub struct Selector(String);

impl Selector {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The [`ANY`] wildcard.
    pub fn any() -> Self {
        Self(ANY.to_owned())
    }

    pub fn is_any(&self) -> bool {
        self.0 == ANY
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Selector {
    fn default() -> Self {
        Self::any()
    }
}

impl From<&str> for Selector {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Selector {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}
