//! Explorer client state and its view-state machine.
//!
//! DESIGN
//! ======
//! One struct owns the last fetched payloads, the active category filter,
//! and the mutually exclusive view-state. Every user action maps to one
//! transition method; fetch handlers overwrite state unconditionally in
//! arrival order, so when two fetches race the later response wins.

#[cfg(test)]
#[path = "explorer_test.rs"]
mod explorer_test;

use crate::net::types::{FactsResponse, RandomFactResponse};

/// Category filter tags for the results view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Events,
    Births,
    Deaths,
    Holidays,
}

impl CategoryFilter {
    /// All tags in tab order.
    pub const TABS: [CategoryFilter; 5] = [
        CategoryFilter::All,
        CategoryFilter::Events,
        CategoryFilter::Births,
        CategoryFilter::Deaths,
        CategoryFilter::Holidays,
    ];

    /// The wire tag this filter matches against (`all`, `events`, ...).
    pub fn tag(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Events => "events",
            CategoryFilter::Births => "births",
            CategoryFilter::Deaths => "deaths",
            CategoryFilter::Holidays => "holidays",
        }
    }

    /// Parse a wire tag back into a filter.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::TABS.into_iter().find(|f| f.tag() == tag)
    }

    /// Whether a group with `kind` survives this filter.
    pub fn matches(self, kind: &str) -> bool {
        self == CategoryFilter::All || self.tag() == kind
    }
}

/// Liveness of the remote API, shown in the header pill.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ApiStatus {
    /// Probe has not answered yet.
    #[default]
    Unknown,
    Online,
    Offline,
}

/// Mutually exclusive view-states for the results area.
///
/// `Idle` is the pre-first-fetch page; the other four are the post-action
/// screens. Exactly one is ever active — the enum makes that structural
/// instead of a hide-the-other-three discipline.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ViewState {
    #[default]
    Idle,
    Loading,
    Error(String),
    Empty,
    Results,
}

/// Process-wide client state, one instance per page lifetime.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExplorerState {
    /// Last date-facts payload; untouched by failures and random fetches.
    pub current_data: Option<FactsResponse>,
    /// Active category filter; reset to `All` by every date-facts fetch.
    pub current_filter: CategoryFilter,
    /// Last random-fact payload, rendered while the tabs are hidden.
    pub last_random: Option<RandomFactResponse>,
    pub view: ViewState,
    /// Tabs show for date-facts results and hide for a random fact.
    pub filter_tabs_visible: bool,
    pub api_status: ApiStatus,
}

impl ExplorerState {
    /// A fetch just started: show Loading. Loaded data is kept so a failure
    /// can fall back without losing it.
    pub fn begin_fetch(&mut self) {
        self.view = ViewState::Loading;
    }

    /// A date-facts fetch succeeded. Stores the payload, resets the filter,
    /// and lands on Results, or Empty when the payload has no groups.
    pub fn apply_facts(&mut self, resp: FactsResponse) {
        self.view = if resp.event_types.is_empty() {
            ViewState::Empty
        } else {
            ViewState::Results
        };
        self.current_data = Some(resp);
        self.current_filter = CategoryFilter::All;
        self.filter_tabs_visible = true;
    }

    /// A random-fact fetch succeeded. Leaves `current_data` and the filter
    /// alone; random facts are not filterable, so the tabs hide.
    pub fn apply_random(&mut self, resp: RandomFactResponse) {
        self.view = if resp.fact.is_none() {
            ViewState::Empty
        } else {
            ViewState::Results
        };
        self.last_random = Some(resp);
        self.filter_tabs_visible = false;
    }

    /// Any fetch failed. Shows the message; previously loaded data stays.
    pub fn apply_failure(&mut self, message: String) {
        self.view = ViewState::Error(message);
    }

    /// Change the category filter. Silently ignored without loaded data.
    /// Re-selecting the active tab is an idempotent re-render, not a toggle.
    /// Returns whether the change took effect.
    pub fn set_filter(&mut self, filter: CategoryFilter) -> bool {
        let Some(data) = &self.current_data else {
            return false;
        };
        self.current_filter = filter;
        self.view = if data.event_types.is_empty() {
            ViewState::Empty
        } else {
            ViewState::Results
        };
        self.filter_tabs_visible = true;
        true
    }

    /// Record the `/health` probe outcome.
    pub fn set_api_status(&mut self, online: bool) {
        self.api_status = if online { ApiStatus::Online } else { ApiStatus::Offline };
    }
}
