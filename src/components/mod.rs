//! Presentational components for the explorer page.
//!
//! ARCHITECTURE
//! ============
//! Components translate the pure render model and shared state into DOM;
//! decisions about what to show are made upstream in `state` and `render`.

pub mod category_section;
pub mod date_selector;
pub mod fact_card;
pub mod filter_tabs;
pub mod status_pill;
pub mod view_states;
