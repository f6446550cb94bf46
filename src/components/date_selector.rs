//! Dependent month/day selects plus the date-search button.
//!
//! Changing the month rebuilds the day list for that month's length and
//! clears any previously selected day; the search button stays disabled
//! until both controls hold a value. Enter in either select triggers the
//! search when it is enabled.

#[cfg(test)]
#[path = "date_selector_test.rs"]
mod date_selector_test;

use leptos::prelude::*;

use crate::state::selection::DateSelection;
use crate::util::dates::{day_options, month_name};

/// Parse a select-control value; the empty placeholder maps to `None`.
pub(crate) fn parse_select_value(raw: &str) -> Option<u8> {
    raw.trim().parse::<u8>().ok().filter(|v| *v >= 1)
}

/// Month and day selects with a search action.
#[component]
pub fn DateSelector(on_search: Callback<()>) -> impl IntoView {
    let selection = expect_context::<RwSignal<DateSelection>>();

    let on_month_change = move |ev| {
        selection.update(|s| s.set_month(parse_select_value(&event_target_value(&ev))));
    };
    let on_day_change = move |ev| {
        selection.update(|s| s.set_day(parse_select_value(&event_target_value(&ev))));
    };
    let on_key = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            if selection.get_untracked().is_complete() {
                on_search.run(());
            }
        }
    };

    let month_value = move || selection.get().month.map(|m| m.to_string()).unwrap_or_default();
    let day_value = move || selection.get().day.map(|d| d.to_string()).unwrap_or_default();
    let search_disabled = move || !selection.get().is_complete();

    view! {
        <div class="date-selector">
            <select
                class="date-selector__month"
                prop:value=month_value
                on:change=on_month_change
                on:keydown=on_key
            >
                <option value="">"Month"</option>
                {(1..=12u8)
                    .map(|m| {
                        view! {
                            <option value=m.to_string()>{month_name(m).unwrap_or_default()}</option>
                        }
                    })
                    .collect::<Vec<_>>()}
            </select>
            <select
                class="date-selector__day"
                prop:value=day_value
                on:change=on_day_change
                on:keydown=on_key
            >
                <option value="">"Day"</option>
                {move || {
                    day_options(selection.get().month.unwrap_or(0))
                        .into_iter()
                        .map(|d| view! { <option value=d.to_string()>{d.to_string()}</option> })
                        .collect::<Vec<_>>()
                }}
            </select>
            <button
                class="btn date-selector__search"
                disabled=search_disabled
                on:click=move |_| on_search.run(())
            >
                "Search Date"
            </button>
        </div>
    }
}
