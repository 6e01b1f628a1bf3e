//! Client-side UI state: MVI primitives and the theme store.

pub mod mvi;
pub mod theme;
