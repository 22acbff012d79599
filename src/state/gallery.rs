#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use serde::{Deserialize, Serialize};

/// One normalized gallery entry, ready for tile rendering.
///
/// `photo_url` is never empty: it is either a resolved profile picture URI
/// or the fixed fallback asset.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserItem {
    pub id: i64,
    /// Display name; `"Unknown User"` when the source row has no lookup.
    pub title: String,
    /// Job title; empty when unknown.
    pub position: String,
    pub photo_url: String,
    pub description: String,
    pub certification: String,
    pub email: String,
}

/// The item sequence plus fetch-cycle bookkeeping.
///
/// Each fetch cycle gets a generation token from [`begin_fetch`]; a result is
/// applied only if its token is still the latest, so a superseded cycle that
/// completes late is discarded instead of overwriting newer data. In-flight
/// calls are never cancelled.
///
/// [`begin_fetch`]: GalleryState::begin_fetch
#[derive(Clone, Debug, Default)]
pub struct GalleryState {
    pub items: Vec<UserItem>,
    pub loading: bool,
    generation: u64,
}

impl GalleryState {
    /// Start a new fetch cycle, returning its generation token.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    /// Replace the item sequence if `generation` is still current.
    ///
    /// Returns whether the result was applied. A stale token leaves the
    /// state untouched (a newer cycle owns it now).
    pub fn apply_fetch(&mut self, generation: u64, items: Vec<UserItem>) -> bool {
        if generation != self.generation {
            return false;
        }
        self.items = items;
        self.loading = false;
        true
    }
}
