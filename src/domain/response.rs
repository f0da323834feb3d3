use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// JSON fields of a response object that have no typed accessor.
pub type ExtraFields = BTreeMap<String, Value>;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
/// Result of a code lookup (`getcode` with `taskid`).
///
/// Serializes back to the flat JSON object the service sent, with scalars as strings.
pub struct CodeDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
/// Result of a number release (`getcode` with `phone`).
pub struct ReleaseDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
/// Result of acquiring an activation number (`getnumber`).
pub struct NumberDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(flatten)]
    pub extra: ExtraFields,
}

impl CodeDetail {
    /// Look up a field the service returned beyond the typed ones.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.extra.get(field)
    }
}

impl ReleaseDetail {
    /// Look up a field the service returned beyond the typed ones.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.extra.get(field)
    }
}

impl NumberDetail {
    /// Look up a field the service returned beyond the typed ones.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.extra.get(field)
    }
}
