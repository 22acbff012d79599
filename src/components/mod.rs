//! Reusable view components for the gallery.

pub mod pagination;
pub mod user_modal_dialog;
pub mod user_tile;
