//! Wire types for the record store and the profile service.
//!
//! List rows come back as loosely-typed mappings whose field names are
//! operator-configured, so `RawRow` keeps the dynamic fields as a JSON map
//! and exposes schema-checked accessors. Absent fields are treated as
//! missing, never as errors.

use serde::Deserialize;

/// One row from the source list, as returned by the record store.
#[derive(Clone, Debug, Deserialize)]
pub struct RawRow {
    /// The list item identifier. Always selected, independent of the
    /// configured field names.
    #[serde(rename = "ID", alias = "Id")]
    pub id: i64,
    /// Remaining fields, keyed by their configured names.
    #[serde(flatten)]
    pub fields: serde_json::Map<String, serde_json::Value>,
}

impl RawRow {
    /// A scalar text field by its configured name, if present and a string.
    pub fn text(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(serde_json::Value::as_str)
    }

    /// The expanded user lookup under `field`, if present and well-formed.
    pub fn user_lookup(&self, field: &str) -> Option<UserLookup> {
        self.fields
            .get(field)
            .and_then(|value| serde_json::from_value(value.clone()).ok())
    }
}

/// Expanded sub-fields of the user lookup column.
///
/// Every sub-field is optional: a row whose lookup is unfilled, or a list
/// whose lookup lacks one of the projections, still aggregates (with
/// defaults) instead of failing.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct UserLookup {
    #[serde(rename = "Title")]
    pub title: Option<String>,
    #[serde(rename = "EMail")]
    pub email: Option<String>,
    #[serde(rename = "JobTitle")]
    pub job_title: Option<String>,
    #[serde(rename = "Id")]
    pub id: Option<i64>,
}

/// Envelope for a `nometadata` list items response.
#[derive(Clone, Debug, Deserialize)]
pub struct ListResponse {
    pub value: Vec<RawRow>,
}

/// Profile record returned by the identity/profile service.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ProfileProperties {
    #[serde(rename = "PictureUrl")]
    pub picture_url: Option<String>,
}
