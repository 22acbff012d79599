//! Collaborator seams: the record store and the profile service.
//!
//! The aggregation pipeline is generic over these traits so it runs
//! unchanged against the browser REST client and against in-crate mocks.

use thiserror::Error;

use crate::config::FieldSelection;
use crate::net::types::RawRow;

/// Failure fetching rows from the source list.
///
/// Any variant fails the whole fetch cycle soft: the pipeline logs it and
/// yields an empty item sequence, never a partial one.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("list '{0}' was not found")]
    ListNotFound(String),
    #[error("access to list '{0}' was denied")]
    PermissionDenied(String),
    #[error("record store request failed: {0}")]
    Request(String),
    #[error("unexpected record store response: {0}")]
    Malformed(String),
}

/// Failure looking up one profile record.
///
/// Absorbed per row: the affected item degrades to the fallback photo.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("profile lookup request failed: {0}")]
    Request(String),
    #[error("unexpected profile response: {0}")]
    Malformed(String),
}

/// Query access to the external record store.
#[allow(async_fn_in_trait)]
pub trait RecordStore {
    /// Fetch all rows of `list_name`, selecting the identifier, the expanded
    /// user lookup sub-fields, and the two scalar fields.
    async fn fetch_rows(
        &self,
        list_name: &str,
        fields: &FieldSelection,
    ) -> Result<Vec<RawRow>, FetchError>;
}

/// Lookup access to the external identity/profile service.
#[allow(async_fn_in_trait)]
pub trait ProfileService {
    /// Look up the profile record for `claim` and return its picture URI
    /// attribute, if any. `Ok(None)` means the profile exists but carries no
    /// picture (or the subject was not found).
    async fn picture_url(&self, claim: &str) -> Result<Option<String>, ProfileError>;
}
