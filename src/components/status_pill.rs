//! Header pill reflecting the `/health` probe outcome.

#[cfg(test)]
#[path = "status_pill_test.rs"]
mod status_pill_test;

use leptos::prelude::*;

use crate::state::explorer::{ApiStatus, ExplorerState};

pub(crate) fn status_label(status: ApiStatus) -> &'static str {
    match status {
        ApiStatus::Unknown => "Checking API...",
        ApiStatus::Online => "API Online",
        ApiStatus::Offline => "API Offline",
    }
}

pub(crate) fn status_class(status: ApiStatus) -> &'static str {
    match status {
        ApiStatus::Unknown => "status-pill status-pill--unknown",
        ApiStatus::Online => "status-pill status-pill--online",
        ApiStatus::Offline => "status-pill status-pill--offline",
    }
}

/// API liveness indicator. Independent of the results view-state.
#[component]
pub fn StatusPill() -> impl IntoView {
    let explorer = expect_context::<RwSignal<ExplorerState>>();

    view! {
        <span class=move || status_class(explorer.get().api_status)>
            <span class="status-pill__dot" aria-hidden="true"></span>
            {move || status_label(explorer.get().api_status)}
        </span>
    }
}
