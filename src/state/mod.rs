//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`gallery`, `layout`, `modal`) so individual
//! components can depend on small focused models. All three are plain Rust
//! with no browser types, held in `RwSignal` contexts by the app shell.

pub mod gallery;
pub mod layout;
pub mod modal;
