//! Gallery page: measured container, tile grid, navigation, detail dialog.

use leptos::prelude::*;

use crate::components::pagination::Pagination;
use crate::components::user_modal_dialog::UserModalDialog;
use crate::components::user_tile::UserTile;
use crate::config::GalleryConfig;
use crate::state::gallery::GalleryState;
use crate::state::layout::LayoutState;

/// The gallery view.
///
/// On hydration this wires the two event sources the state machines consume:
/// a `ResizeObserver` feeding container widths into the layout engine, and
/// one fetch cycle feeding the aggregation pipeline's items into the gallery
/// state (stale cycles are discarded by generation token).
#[component]
pub fn GalleryPage() -> impl IntoView {
    let config = expect_context::<GalleryConfig>();
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let layout = expect_context::<RwSignal<LayoutState>>();

    let container_ref = NodeRef::<leptos::html::Div>::new();

    // Container measurement: initial width on mount, then resize
    // notifications until unmount.
    #[cfg(feature = "hydrate")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        let observer: Rc<RefCell<Option<web_sys::ResizeObserver>>> = Rc::new(RefCell::new(None));
        let observer_for_mount = Rc::clone(&observer);
        Effect::new(move || {
            let Some(el) = container_ref.get() else {
                return;
            };
            if observer_for_mount.borrow().is_some() {
                return;
            }

            let el: &web_sys::Element = el.as_ref();
            layout.update(|l| l.observe_width(f64::from(el.client_width())));

            *observer_for_mount.borrow_mut() = crate::util::resize::observe_width(el, move |width| {
                layout.update(|l| l.observe_width(width));
            });
        });

        on_cleanup(move || {
            if let Some(observer) = observer.borrow_mut().take() {
                observer.disconnect();
            }
        });
    }

    // Fetch cycle on mount.
    #[cfg(feature = "hydrate")]
    {
        let fetch_config = config.clone();
        Effect::new(move || {
            let cfg = fetch_config.clone();
            let Some(token) = gallery.try_update(GalleryState::begin_fetch) else {
                return;
            };
            leptos::task::spawn_local(async move {
                let client = crate::net::api::SiteClient::new(&cfg.site_url);
                let items = crate::net::pipeline::fetch_items(&client, &client, &cfg).await;
                let item_count = items.len();
                let applied = gallery
                    .try_update(|g| g.apply_fetch(token, items))
                    .unwrap_or(false);
                if applied {
                    layout.update(|l| l.reconcile_item_count(item_count));
                }
            });
        });
    }

    let title = config.title.clone();

    let visible_items = move || {
        let gallery = gallery.get();
        let range = layout.get().visible_range(gallery.items.len());
        gallery.items[range].to_vec()
    };

    let grid_class = move || match layout.get().effective_items_per_page() {
        1 => "gallery__grid gallery__grid--one",
        2 => "gallery__grid gallery__grid--two",
        3 => "gallery__grid gallery__grid--three",
        _ => "gallery__grid gallery__grid--four",
    };

    view! {
        <div class="gallery" node_ref=container_ref>
            <header class="gallery__header">
                <h1>{title}</h1>
            </header>

            <div class="gallery__container">
                {move || {
                    let state = gallery.get();
                    if state.loading {
                        view! {
                            <div class="gallery__spinner">
                                <p>"Loading team members..."</p>
                            </div>
                        }
                            .into_any()
                    } else if state.items.is_empty() {
                        view! {
                            <div class="gallery__no-items">
                                <p>
                                    "No team members found. Please check the list configuration."
                                </p>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="gallery__carousel">
                                <div class=grid_class>
                                    {visible_items()
                                        .into_iter()
                                        .map(|item| view! { <UserTile item=item/> })
                                        .collect::<Vec<_>>()}
                                </div>
                                <Pagination/>
                            </div>
                        }
                            .into_any()
                    }
                }}
            </div>

            <UserModalDialog/>
        </div>
    }
}
