//! Detail dialog for the selected person.

use leptos::prelude::*;

use crate::state::gallery::UserItem;
use crate::state::modal::ModalState;

/// Modal dialog showing the selected person's full record.
///
/// Rendered only while the modal state is open with a selection. Clicking
/// the backdrop or the close button dismisses it; dismissal never triggers
/// a fetch.
#[component]
pub fn UserModalDialog() -> impl IntoView {
    let modal = expect_context::<RwSignal<ModalState>>();
    let dark = expect_context::<RwSignal<bool>>();

    let dismiss = Callback::new(move |()| modal.update(ModalState::dismiss));

    let dialog_class = move || {
        if dark.get() {
            "user-dialog user-dialog--dark"
        } else {
            "user-dialog"
        }
    };

    view! {
        <Show when=move || modal.get().visible_item().is_some()>
            {move || {
                modal
                    .get()
                    .visible_item()
                    .cloned()
                    .map(|user| {
                        view! {
                            <div class="user-dialog__backdrop" on:click=move |_| dismiss.run(())>
                                <div class=dialog_class on:click=move |ev| ev.stop_propagation()>
                                    <div class="user-dialog__header">
                                        <button
                                            class="user-dialog__close"
                                            aria-label="Close"
                                            on:click=move |_| dismiss.run(())
                                        >
                                            {"\u{2715}"}
                                        </button>
                                    </div>
                                    <div class="user-dialog__content">
                                        {persona_header(&user)}
                                        <div class="user-dialog__section">
                                            <h3 class="user-dialog__section-title">"About"</h3>
                                            <p class="user-dialog__section-text">{user.description.clone()}</p>
                                        </div>
                                        <div class="user-dialog__section">
                                            <h3 class="user-dialog__section-title">"Certifications"</h3>
                                            <p class="user-dialog__section-text">{user.certification.clone()}</p>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        }
                    })
            }}
        </Show>
    }
}

fn persona_header(user: &UserItem) -> impl IntoView + use<> {
    view! {
        <div class="user-dialog__persona">
            <img class="user-dialog__photo" src=user.photo_url.clone() alt=user.title.clone()/>
            <div class="user-dialog__persona-info">
                <span class="user-dialog__name">{user.title.clone()}</span>
                <span class="user-dialog__position">{user.position.clone()}</span>
                <span class="user-dialog__email">{user.email.clone()}</span>
            </div>
        </div>
    }
}
