#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::state::gallery::UserItem;

/// Selection/visibility state for the detail dialog.
///
/// Holds at most one selected item. Dismissing only hides the dialog; the
/// selection is retained (and is irrelevant until the next `open`), and no
/// fetch is triggered by either transition.
#[derive(Clone, Debug, Default)]
pub struct ModalState {
    pub selected: Option<UserItem>,
    pub open: bool,
}

impl ModalState {
    pub fn open(&mut self, item: UserItem) {
        self.selected = Some(item);
        self.open = true;
    }

    pub fn dismiss(&mut self) {
        self.open = false;
    }

    /// The item to show, present only while the dialog is visible.
    pub fn visible_item(&self) -> Option<&UserItem> {
        if self.open { self.selected.as_ref() } else { None }
    }
}
