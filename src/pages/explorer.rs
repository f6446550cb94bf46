//! Explorer page: actions, fetch dispatch, and view-state switching.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It probes API health on mount, schedules the
//! one-shot first-visit auto-load, and maps button/select/tab interactions
//! to state transitions. Fetches are single best-effort attempts; while one
//! is outstanding nothing is disabled, so a second action races the first
//! and whichever response resolves last wins the render.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};

use crate::components::category_section::CategorySection;
use crate::components::date_selector::DateSelector;
use crate::components::fact_card::FactCard;
use crate::components::filter_tabs::FilterTabs;
use crate::components::status_pill::StatusPill;
use crate::components::view_states::{EmptyPanel, ErrorPanel, LoadingPanel, NoMatchesPanel};
#[cfg(feature = "hydrate")]
use crate::net::api;
use crate::render::facts::{FactsPlan, RandomPlan, plan_facts, plan_random};
use crate::state::explorer::{CategoryFilter, ExplorerState, ViewState};
use crate::state::selection::DateSelection;

/// The explorer screen.
#[component]
pub fn ExplorerPage() -> impl IntoView {
    let explorer = expect_context::<RwSignal<ExplorerState>>();
    let selection = expect_context::<RwSignal<DateSelection>>();

    // One-shot health probe for the header pill.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let online = api::check_health().await;
        explorer.update(|s| s.set_api_status(online));
    });

    // First-visit auto-load. The timer is not cancelable and the visited
    // flag is checked after the delay, so it fires at most once per
    // storage scope.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_secs(2)).await;
        if !crate::util::visit::has_visited() {
            crate::util::visit::mark_visited();
            load_today(explorer);
        }
    });

    let on_today = move |_| load_today(explorer);
    let on_random = move |_| load_random(explorer);
    let on_search = Callback::new(move |()| {
        if let Some((month, day)) = selection.get_untracked().complete() {
            load_for_date(explorer, month, day);
        }
    });
    let on_reset_filter = Callback::new(move |()| {
        explorer.update(|s| {
            s.set_filter(CategoryFilter::All);
        });
    });

    let results = move || {
        let state = explorer.get();
        match state.view.clone() {
            ViewState::Idle => ().into_any(),
            ViewState::Loading => view! { <LoadingPanel/> }.into_any(),
            ViewState::Error(message) => view! { <ErrorPanel message/> }.into_any(),
            ViewState::Empty => view! { <EmptyPanel/> }.into_any(),
            ViewState::Results => render_results(&state, on_reset_filter),
        }
    };

    view! {
        <div class="explorer-page">
            <header class="explorer-page__header">
                <h1>"Historical Facts Explorer"</h1>
                <p class="explorer-page__tagline">
                    "Discover what happened on this day in history"
                </p>
                <StatusPill/>
            </header>

            <div class="explorer-page__actions">
                <button class="btn btn--primary" on:click=on_today>
                    "Today's Facts"
                </button>
                <button class="btn" on:click=on_random>
                    "🎲 Random Fact"
                </button>
                <DateSelector on_search=on_search/>
            </div>

            <Show when=move || explorer.get().filter_tabs_visible>
                <FilterTabs/>
            </Show>

            <div class="explorer-page__results" id="results">
                {results}
            </div>
        </div>
    }
}

/// Results body: date facts while the tabs are visible, the last random
/// fact otherwise. Both paths go through the pure plan builders.
fn render_results(state: &ExplorerState, on_reset: Callback<()>) -> AnyView {
    if state.filter_tabs_visible {
        let Some(data) = &state.current_data else {
            return ().into_any();
        };
        match plan_facts(data, state.current_filter) {
            FactsPlan::Empty => view! { <EmptyPanel/> }.into_any(),
            FactsPlan::NoMatches { filter } => {
                view! { <NoMatchesPanel filter on_reset/> }.into_any()
            }
            FactsPlan::Sections { date, sections } => view! {
                <div class="results">
                    <header class="results__header">
                        <span class="results__emoji" aria-hidden="true">"📜"</span>
                        <h3>{format!("Historical Facts for {date}")}</h3>
                    </header>
                    {sections
                        .into_iter()
                        .map(|section| view! { <CategorySection section date=date.clone()/> })
                        .collect::<Vec<_>>()}
                </div>
            }
            .into_any(),
        }
    } else {
        let Some(random) = &state.last_random else {
            return ().into_any();
        };
        match plan_random(random) {
            RandomPlan::Empty => view! { <EmptyPanel/> }.into_any(),
            RandomPlan::Fact { date, card } => view! {
                <div class="results">
                    <header class="results__header">
                        <span class="results__emoji" aria-hidden="true">"🎲"</span>
                        <h3>"Random Historical Discovery"</h3>
                    </header>
                    <p class="results__date">{format!("From {date}")}</p>
                    <div class="results__grid results__grid--single">
                        <FactCard card/>
                    </div>
                </div>
            }
            .into_any(),
        }
    }
}

fn load_today(explorer: RwSignal<ExplorerState>) {
    explorer.update(ExplorerState::begin_fetch);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match api::fetch_today().await {
            Ok(resp) => {
                explorer.update(|s| s.apply_facts(resp));
                scroll_to_results().await;
            }
            Err(e) => {
                log::error!("today's facts request failed: {e}");
                explorer.update(|s| s.apply_failure(api::today_failed_message()));
            }
        }
    });
}

fn load_random(explorer: RwSignal<ExplorerState>) {
    explorer.update(ExplorerState::begin_fetch);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match api::fetch_random().await {
            Ok(resp) => {
                explorer.update(|s| s.apply_random(resp));
                scroll_to_results().await;
            }
            Err(e) => {
                log::error!("random fact request failed: {e}");
                explorer.update(|s| s.apply_failure(api::random_failed_message()));
            }
        }
    });
}

fn load_for_date(explorer: RwSignal<ExplorerState>, month: u8, day: u8) {
    explorer.update(ExplorerState::begin_fetch);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        match api::fetch_for_date(month, day).await {
            Ok(resp) => {
                explorer.update(|s| s.apply_facts(resp));
                scroll_to_results().await;
            }
            Err(e) => {
                log::error!("date facts request failed for {month}/{day}: {e}");
                explorer.update(|s| s.apply_failure(api::date_failed_message(month, day)));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (month, day);
}

/// Bring the results area into view once the reactive update has landed.
#[cfg(feature = "hydrate")]
async fn scroll_to_results() {
    gloo_timers::future::sleep(std::time::Duration::from_millis(100)).await;
    if let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("results"))
    {
        el.scroll_into_view();
    }
}
