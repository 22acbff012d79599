//! List aggregation pipeline.
//!
//! Turns raw list rows into normalized [`UserItem`]s: one row fetch, then a
//! concurrent per-row photo resolution fanned in by row order. Both failure
//! classes are absorbed here — a store failure yields an empty sequence, a
//! photo failure degrades that one item to the fallback asset. Callers never
//! see an error.

#[cfg(test)]
#[path = "pipeline_test.rs"]
mod pipeline_test;

use futures::StreamExt;
use futures::stream;

use crate::config::GalleryConfig;
use crate::net::store::{ProfileService, RecordStore};
use crate::net::types::RawRow;
use crate::state::gallery::UserItem;

/// Fixed fallback asset shown whenever photo resolution yields nothing.
pub const FALLBACK_PHOTO_URL: &str = "/assets/person.png";

/// Identity-claim prefix understood by the profile service.
pub const CLAIM_PREFIX: &str = "i:0#.f|membership|";

/// Cap on in-flight photo lookups per fetch cycle, so a large list cannot
/// flood the profile service.
pub const MAX_CONCURRENT_PHOTO_LOOKUPS: usize = 6;

/// Display-name default for rows whose user lookup is unfilled.
const UNKNOWN_USER: &str = "Unknown User";

/// Fetch the configured list and aggregate its rows into display items.
///
/// Returns items in list row order. An empty `list_name` returns an empty
/// sequence without contacting either collaborator.
pub async fn fetch_items<S, P>(store: &S, profiles: &P, config: &GalleryConfig) -> Vec<UserItem>
where
    S: RecordStore,
    P: ProfileService,
{
    if config.list_name.is_empty() {
        return Vec::new();
    }

    let fields = config.field_selection();
    let rows = match store.fetch_rows(&config.list_name, &fields).await {
        Ok(rows) => rows,
        Err(err) => {
            log::error!("failed to fetch items from list '{}': {err}", config.list_name);
            return Vec::new();
        }
    };

    // Photo lookups run concurrently (bounded), but `buffered` yields in
    // input order, so the final sequence always matches row order no matter
    // which lookups complete first.
    stream::iter(rows)
        .map(|row| build_item(profiles, row, &fields.user, &fields.description, &fields.certification))
        .buffered(MAX_CONCURRENT_PHOTO_LOOKUPS)
        .collect()
        .await
}

/// Resolve one row into a display item, applying the field defaults and the
/// per-row photo resolution.
async fn build_item<P: ProfileService>(
    profiles: &P,
    row: RawRow,
    user_field: &str,
    description_field: &str,
    certification_field: &str,
) -> UserItem {
    let user = row.user_lookup(user_field).unwrap_or_default();
    let title = user.title.clone().unwrap_or_else(|| UNKNOWN_USER.to_owned());
    let email = user.email.clone().unwrap_or_default();

    let photo_url = if email.is_empty() {
        FALLBACK_PHOTO_URL.to_owned()
    } else {
        resolve_photo(profiles, &email, &title).await
    };

    UserItem {
        id: row.id,
        position: user.job_title.unwrap_or_default(),
        description: row.text(description_field).unwrap_or_default().to_owned(),
        certification: row.text(certification_field).unwrap_or_default().to_owned(),
        title,
        photo_url,
        email,
    }
}

/// Resolve a fallback-safe photo URI for one identity.
///
/// Exactly one lookup attempt; anything short of a non-empty picture URI
/// degrades to [`FALLBACK_PHOTO_URL`] with a warning naming the subject.
pub async fn resolve_photo<P: ProfileService>(profiles: &P, email: &str, subject: &str) -> String {
    let claim = format!("{CLAIM_PREFIX}{email}");
    match profiles.picture_url(&claim).await {
        Ok(Some(url)) if !url.is_empty() => url,
        Ok(_) => {
            log::warn!("no profile photo for {subject}, using fallback");
            FALLBACK_PHOTO_URL.to_owned()
        }
        Err(err) => {
            log::warn!("failed to resolve profile photo for {subject}: {err}");
            FALLBACK_PHOTO_URL.to_owned()
        }
    }
}
