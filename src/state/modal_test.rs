use super::*;

fn item(id: i64) -> UserItem {
    UserItem {
        id,
        title: format!("User {id}"),
        photo_url: "/assets/person.png".to_owned(),
        ..UserItem::default()
    }
}

#[test]
fn modal_state_defaults_closed_with_no_selection() {
    let state = ModalState::default();
    assert!(!state.open);
    assert!(state.selected.is_none());
    assert!(state.visible_item().is_none());
}

#[test]
fn open_sets_selection_and_visibility() {
    let mut state = ModalState::default();
    state.open(item(1));
    assert!(state.open);
    assert_eq!(state.visible_item().map(|i| i.id), Some(1));
}

#[test]
fn dismiss_hides_without_clearing_selection() {
    let mut state = ModalState::default();
    state.open(item(1));
    state.dismiss();
    assert!(!state.open);
    assert!(state.selected.is_some());
    assert!(state.visible_item().is_none());
}

#[test]
fn reopening_replaces_the_selection() {
    let mut state = ModalState::default();
    state.open(item(1));
    state.dismiss();
    state.open(item(2));
    assert_eq!(state.visible_item().map(|i| i.id), Some(2));
}
