//! Wire schema for the historical facts API.
//!
//! All collection and optional fields default when absent so a sparse
//! payload decodes instead of failing; "no event types" and "no fact"
//! are meaningful empty results, not errors.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// Response from `/historical-facts/today` and `/historical-facts/{month}/{day}`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FactsResponse {
    /// Date the facts belong to, formatted `MM/DD`.
    #[serde(default)]
    pub date: String,
    /// Category groups in server order; empty means no facts for the date.
    #[serde(default)]
    pub event_types: Vec<EventTypeGroup>,
}

/// One category of facts (events, births, deaths, or holidays).
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EventTypeGroup {
    /// Category tag: `events`, `births`, `deaths`, or `holidays`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Server-reported total for the category.
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub events: Vec<Event>,
}

/// A single historical occurrence.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Event {
    /// Year as reported by the API (negative for BC).
    #[serde(default)]
    pub year: i32,
    #[serde(default)]
    pub text: String,
    /// Linked source pages; only the first is rendered.
    #[serde(default)]
    pub pages: Vec<WikiPage>,
}

/// Source-page metadata attached to an event. Every field is optional.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WikiPage {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub extract: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

/// Response from `/historical-facts/random`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RandomFactResponse {
    /// Date the fact was drawn from, formatted `MM/DD`.
    #[serde(default)]
    pub date: String,
    /// Absent when the server had nothing to offer.
    #[serde(default)]
    pub fact: Option<Event>,
}
