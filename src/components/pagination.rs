//! Previous/next navigation controls with a page indicator.

use leptos::prelude::*;

use crate::state::gallery::GalleryState;
use crate::state::layout::LayoutState;

/// Navigation controls below the tile grid.
///
/// Rendered only when there is more than one page. The buttons are no-ops
/// (and disabled) at their respective boundaries.
#[component]
pub fn Pagination() -> impl IntoView {
    let gallery = expect_context::<RwSignal<GalleryState>>();
    let layout = expect_context::<RwSignal<LayoutState>>();

    let total_pages = move || layout.get().total_pages(gallery.get().items.len());
    let current_page = move || layout.get().current_page();

    let at_first = move || current_page() == 0;
    let at_last = move || current_page() + 1 >= total_pages();

    let on_previous = move |_| layout.update(LayoutState::previous);
    let on_next = move |_| {
        let item_count = gallery.get_untracked().items.len();
        layout.update(|l| l.next(item_count));
    };

    view! {
        <Show when=move || { total_pages() > 1 }>
            <div class="pagination">
                <button
                    class="pagination__button"
                    disabled=at_first
                    aria-label="Previous page"
                    on:click=on_previous
                >
                    {"\u{2039}"}
                </button>
                <div class="pagination__indicator">
                    {move || format!("{} / {}", current_page() + 1, total_pages())}
                </div>
                <button
                    class="pagination__button"
                    disabled=at_last
                    aria-label="Next page"
                    on:click=on_next
                >
                    {"\u{203a}"}
                </button>
            </div>
        </Show>
    }
}
