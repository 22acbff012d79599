//! Browser-facing helpers shared by components.

pub mod resize;
pub mod theme;
