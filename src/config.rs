//! Gallery configuration record.
//!
//! Configuration is externally edited (by the host page operator) and
//! read-only from the gallery's point of view. The host embeds it as a JSON
//! `<script>` element; every field has a serde default so a partial payload
//! still deserializes.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

/// Effective field names used when querying the record store.
///
/// Produced by [`GalleryConfig::field_selection`] so empty configured names
/// fall back to the list's conventional column names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldSelection {
    pub user: String,
    pub description: String,
    pub certification: String,
}

/// Read-only configuration for one gallery instance.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GalleryConfig {
    pub title: String,
    /// Name of the source list. Empty means "not configured yet": nothing is
    /// fetched and the gallery shows its empty state.
    pub list_name: String,
    /// Operator-selected tiles per view, meaningful range 1-4.
    pub items_per_page: u32,
    pub user_field_name: String,
    pub description_field_name: String,
    pub certification_field_name: String,
    /// Base URL of the site hosting the list. Empty means same-origin.
    pub site_url: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            title: "Subject Matter Experts".to_owned(),
            list_name: String::new(),
            items_per_page: 4,
            user_field_name: "User".to_owned(),
            description_field_name: "Description".to_owned(),
            certification_field_name: "Certification".to_owned(),
            site_url: String::new(),
        }
    }
}

impl GalleryConfig {
    /// The configured items-per-page target, clamped into `[1, 4]`.
    pub fn configured_max(&self) -> usize {
        self.items_per_page.clamp(1, 4) as usize
    }

    /// Effective field names, substituting defaults for empty strings.
    pub fn field_selection(&self) -> FieldSelection {
        fn or_default(name: &str, fallback: &str) -> String {
            if name.trim().is_empty() {
                fallback.to_owned()
            } else {
                name.to_owned()
            }
        }

        FieldSelection {
            user: or_default(&self.user_field_name, "User"),
            description: or_default(&self.description_field_name, "Description"),
            certification: or_default(&self.certification_field_name, "Certification"),
        }
    }

    /// Read the configuration embedded in the host page as
    /// `<script type="application/json" id="expert-gallery-config">`.
    ///
    /// Missing or malformed payloads fall back to the defaults so a
    /// misconfigured host still gets a rendered (empty) gallery.
    pub fn from_host() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let text = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id("expert-gallery-config"))
                .map(|el| el.text_content().unwrap_or_default());

            match text {
                Some(json) => match serde_json::from_str(&json) {
                    Ok(config) => config,
                    Err(err) => {
                        log::error!("invalid gallery configuration, using defaults: {err}");
                        Self::default()
                    }
                },
                None => Self::default(),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}
