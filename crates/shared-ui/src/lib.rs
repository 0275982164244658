//! Styled Dioxus components shared by every dashboard.

pub mod components;
pub mod theme;

pub use components::*;
