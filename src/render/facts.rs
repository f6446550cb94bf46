//! Fragment planning for facts and random-fact results.
//!
//! Planning is a pure function of (payload, filter): the same inputs always
//! produce the same plan, so re-rendering after a no-op filter change is
//! idempotent by construction.

#[cfg(test)]
#[path = "facts_test.rs"]
mod facts_test;

use crate::net::types::{Event, EventTypeGroup, FactsResponse, RandomFactResponse};
use crate::state::explorer::CategoryFilter;
use crate::util::dates::format_date;
use crate::util::text::truncate;

/// Character budget for the optional source-page extract on a card.
pub const EXTRACT_BUDGET: usize = 150;

/// At most this many cards render per category; the rest collapse into a
/// count-only "N more" indicator. No pagination.
pub const MAX_CARDS_PER_SECTION: usize = 10;

/// Placeholder glyph shown when a card has no thumbnail (or it fails to load).
pub const THUMBNAIL_FALLBACK_GLYPH: &str = "📚";

/// Display metadata for a category tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryMeta {
    pub title: &'static str,
    pub emoji: &'static str,
}

const ALL_META: CategoryMeta = CategoryMeta {
    title: "All Events",
    emoji: "📜",
};

/// Emoji and display title for a wire tag. Unknown tags fall back to the
/// "all" metadata rather than failing the render.
pub fn category_meta(kind: &str) -> CategoryMeta {
    match kind {
        "events" => CategoryMeta {
            title: "Historical Events",
            emoji: "⚔️",
        },
        "births" => CategoryMeta {
            title: "Notable Births",
            emoji: "👶",
        },
        "deaths" => CategoryMeta {
            title: "Notable Deaths",
            emoji: "🕊️",
        },
        "holidays" => CategoryMeta {
            title: "Holidays & Observances",
            emoji: "🎉",
        },
        _ => ALL_META,
    }
}

/// Singular/plural noun for a category header count.
pub fn item_noun(count: u32) -> &'static str {
    if count == 1 { "item" } else { "items" }
}

/// Everything a fact card renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FactCardModel {
    pub year: i32,
    pub text: String,
    /// Source-page title, used as the thumbnail alt text.
    pub title: Option<String>,
    /// Extract already truncated to [`EXTRACT_BUDGET`].
    pub extract: Option<String>,
    pub url: Option<String>,
    pub thumbnail: Option<String>,
}

/// One category section: header plus up to ten cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CategorySectionModel {
    pub meta: CategoryMeta,
    /// Server-reported category total for the header badge.
    pub count: u32,
    pub cards: Vec<FactCardModel>,
    /// Events beyond the card cap, surfaced as a count-only indicator.
    pub more: usize,
}

/// Plan for the date-facts results area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FactsPlan {
    /// Payload had no category groups at all.
    Empty,
    /// Data is loaded but the active filter matches no group.
    NoMatches { filter: CategoryFilter },
    Sections {
        /// Human date heading, e.g. "July 4".
        date: String,
        sections: Vec<CategorySectionModel>,
    },
}

/// Plan for the random-fact results area.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RandomPlan {
    /// Server had no fact to offer.
    Empty,
    Fact { date: String, card: FactCardModel },
}

/// Keep only groups surviving `filter`, in original order.
pub fn filter_groups<'a>(groups: &'a [EventTypeGroup], filter: CategoryFilter) -> Vec<&'a EventTypeGroup> {
    groups.iter().filter(|g| filter.matches(&g.kind)).collect()
}

/// Build the date-facts plan from a payload and the active filter.
pub fn plan_facts(data: &FactsResponse, filter: CategoryFilter) -> FactsPlan {
    if data.event_types.is_empty() {
        return FactsPlan::Empty;
    }
    let groups = filter_groups(&data.event_types, filter);
    if groups.is_empty() {
        return FactsPlan::NoMatches { filter };
    }
    FactsPlan::Sections {
        date: format_date(&data.date),
        sections: groups.into_iter().map(section_from_group).collect(),
    }
}

/// Build the random-fact plan.
pub fn plan_random(data: &RandomFactResponse) -> RandomPlan {
    match &data.fact {
        Some(fact) => RandomPlan::Fact {
            date: format_date(&data.date),
            card: card_from_event(fact),
        },
        None => RandomPlan::Empty,
    }
}

fn section_from_group(group: &EventTypeGroup) -> CategorySectionModel {
    let cards = group
        .events
        .iter()
        .take(MAX_CARDS_PER_SECTION)
        .map(card_from_event)
        .collect();
    CategorySectionModel {
        meta: category_meta(&group.kind),
        count: group.count,
        cards,
        more: group.events.len().saturating_sub(MAX_CARDS_PER_SECTION),
    }
}

fn card_from_event(event: &Event) -> FactCardModel {
    let page = event.pages.first();
    FactCardModel {
        year: event.year,
        text: event.text.clone(),
        title: page.and_then(|p| p.title.clone()),
        extract: page
            .and_then(|p| p.extract.as_deref())
            .map(|e| truncate(e, EXTRACT_BUDGET)),
        url: page.and_then(|p| p.url.clone()),
        thumbnail: page.and_then(|p| p.thumbnail.clone()),
    }
}
