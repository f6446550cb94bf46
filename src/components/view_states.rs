//! Panels for the non-results view-states.
//!
//! Exactly one of Loading/Error/Empty/Results shows at a time; the page
//! picks which panel to mount from `ViewState`, so nothing here needs to
//! hide siblings.

#[cfg(test)]
#[path = "view_states_test.rs"]
mod view_states_test;

use leptos::prelude::*;

use crate::render::facts::category_meta;
use crate::state::explorer::CategoryFilter;

/// Message for the in-results "no matches for this filter" panel.
pub(crate) fn no_matches_message(filter: CategoryFilter) -> String {
    let noun = match filter {
        CategoryFilter::All => "events".to_owned(),
        other => category_meta(other.tag()).title.to_lowercase(),
    };
    format!("No {noun} found for this date.")
}

/// Spinner shown while a fetch is outstanding.
#[component]
pub fn LoadingPanel() -> impl IntoView {
    view! {
        <div class="state-panel state-panel--loading">
            <div class="state-panel__spinner" aria-hidden="true"></div>
            <p>"Digging through the archives..."</p>
        </div>
    }
}

/// Generic failure affordance; recovery is always a new user action.
#[component]
pub fn ErrorPanel(message: String) -> impl IntoView {
    view! {
        <div class="state-panel state-panel--error">
            <h3>"⚠️ Something Went Wrong"</h3>
            <p>{message}</p>
        </div>
    }
}

/// Shown when a fetch succeeded but carried nothing to display.
#[component]
pub fn EmptyPanel() -> impl IntoView {
    view! {
        <div class="state-panel state-panel--empty">
            <h3>"🗓️ Nothing Here"</h3>
            <p>"No historical facts were found. Try another date."</p>
        </div>
    }
}

/// Rendered inside Results when the active filter matches no group,
/// with a control to reset the filter back to All.
#[component]
pub fn NoMatchesPanel(filter: CategoryFilter, on_reset: Callback<()>) -> impl IntoView {
    view! {
        <div class="state-panel state-panel--no-matches">
            <h3>"🔍 No Results Found"</h3>
            <p>{no_matches_message(filter)}</p>
            <button class="btn" on:click=move |_| on_reset.run(())>
                "Show All Events"
            </button>
        </div>
    }
}
