//! Category filter tabs for the results view.

#[cfg(test)]
#[path = "filter_tabs_test.rs"]
mod filter_tabs_test;

use leptos::prelude::*;

use crate::state::explorer::{CategoryFilter, ExplorerState};

pub(crate) fn tab_label(filter: CategoryFilter) -> &'static str {
    match filter {
        CategoryFilter::All => "All",
        CategoryFilter::Events => "Events",
        CategoryFilter::Births => "Births",
        CategoryFilter::Deaths => "Deaths",
        CategoryFilter::Holidays => "Holidays",
    }
}

pub(crate) fn tab_class(active: bool) -> &'static str {
    if active { "filter-tab filter-tab--active" } else { "filter-tab" }
}

/// One tab per category. Selecting a tab re-projects the loaded data;
/// re-selecting the active tab re-renders rather than toggling off.
#[component]
pub fn FilterTabs() -> impl IntoView {
    let explorer = expect_context::<RwSignal<ExplorerState>>();

    view! {
        <div class="filter-tabs" role="tablist">
            {CategoryFilter::TABS
                .into_iter()
                .map(|filter| {
                    view! {
                        <button
                            class=move || tab_class(explorer.get().current_filter == filter)
                            on:click=move |_| {
                                explorer.update(|s| {
                                    s.set_filter(filter);
                                });
                            }
                        >
                            {tab_label(filter)}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
