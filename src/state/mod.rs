//! Application state shared through Leptos contexts.
//!
//! DESIGN
//! ======
//! State lives in plain structs with pure transition methods. Pages and
//! components are adapters: they read signals and dispatch transitions,
//! so the state machine tests without a browser.

pub mod explorer;
pub mod selection;
