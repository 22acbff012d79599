//! Root application component with context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};

use crate::config::GalleryConfig;
use crate::pages::gallery::GalleryPage;
use crate::state::gallery::GalleryState;
use crate::state::layout::LayoutState;
use crate::state::modal::ModalState;
use crate::util::theme;

/// Root component.
///
/// Reads the host-embedded configuration, provides all shared state
/// contexts, and renders the gallery view.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = GalleryConfig::from_host();
    let title = config.title.clone();

    let gallery = RwSignal::new(GalleryState::default());
    let layout = RwSignal::new(LayoutState::new(config.configured_max()));
    let modal = RwSignal::new(ModalState::default());
    let dark = RwSignal::new(theme::prefers_dark());
    theme::apply(dark.get_untracked());

    provide_context(config);
    provide_context(gallery);
    provide_context(layout);
    provide_context(modal);
    provide_context(dark);

    view! {
        <Stylesheet id="leptos" href="/pkg/expert-gallery.css"/>
        <Title text=title/>

        <GalleryPage/>
    }
}
