//! Clickable tile representing one person in the gallery grid.

use leptos::prelude::*;

use crate::state::gallery::UserItem;
use crate::state::modal::ModalState;

/// A tile showing photo, name, and position. Click or Enter/Space opens the
/// detail dialog for this person.
#[component]
pub fn UserTile(item: UserItem) -> impl IntoView {
    let modal = expect_context::<RwSignal<ModalState>>();

    let open_item = item.clone();
    let activate = Callback::new(move |()| {
        let item = open_item.clone();
        modal.update(|m| m.open(item));
    });

    let alt = item.title.clone();

    view! {
        <div
            class="user-tile"
            role="button"
            tabindex="0"
            on:click=move |_| activate.run(())
            on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                if ev.key() == "Enter" || ev.key() == " " {
                    ev.prevent_default();
                    activate.run(());
                }
            }
        >
            <div class="user-tile__image">
                <img src=item.photo_url.clone() alt=alt/>
            </div>
            <div class="user-tile__content">
                <h3 class="user-tile__title">{item.title.clone()}</h3>
                <p class="user-tile__position">{item.position.clone()}</p>
                <span class="user-tile__arrow" aria-hidden="true">{"\u{2192}"}</span>
            </div>
        </div>
    }
}
