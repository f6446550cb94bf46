use super::*;
use crate::net::types::WikiPage;

fn event(year: i32, text: &str) -> Event {
    Event {
        year,
        text: text.to_owned(),
        pages: Vec::new(),
    }
}

fn group(kind: &str, events: Vec<Event>) -> EventTypeGroup {
    EventTypeGroup {
        kind: kind.to_owned(),
        count: u32::try_from(events.len()).unwrap(),
        events,
    }
}

fn facts(date: &str, groups: Vec<EventTypeGroup>) -> FactsResponse {
    FactsResponse {
        date: date.to_owned(),
        event_types: groups,
    }
}

// =============================================================
// Category metadata
// =============================================================

#[test]
fn category_meta_covers_all_five_tags() {
    assert_eq!(category_meta("events").title, "Historical Events");
    assert_eq!(category_meta("births").title, "Notable Births");
    assert_eq!(category_meta("deaths").title, "Notable Deaths");
    assert_eq!(category_meta("holidays").title, "Holidays & Observances");
    assert_eq!(category_meta("all").title, "All Events");
}

#[test]
fn unknown_category_falls_back_to_all_meta() {
    assert_eq!(category_meta("weddings"), category_meta("all"));
}

#[test]
fn item_noun_pluralizes() {
    assert_eq!(item_noun(1), "item");
    assert_eq!(item_noun(0), "items");
    assert_eq!(item_noun(2), "items");
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn all_filter_keeps_every_group_in_order() {
    let groups = vec![
        group("events", vec![event(1776, "a")]),
        group("births", vec![event(1867, "b")]),
        group("deaths", vec![event(1900, "c")]),
    ];
    let kept = filter_groups(&groups, CategoryFilter::All);
    let kinds: Vec<&str> = kept.iter().map(|g| g.kind.as_str()).collect();
    assert_eq!(kinds, ["events", "births", "deaths"]);
}

#[test]
fn births_filter_keeps_only_birth_groups() {
    let groups = vec![
        group("events", vec![event(1776, "a")]),
        group("births", vec![event(1867, "b")]),
    ];
    let kept = filter_groups(&groups, CategoryFilter::Births);
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].kind, "births");
}

// =============================================================
// Facts plan
// =============================================================

#[test]
fn empty_payload_plans_empty() {
    assert_eq!(plan_facts(&facts("07/04", Vec::new()), CategoryFilter::All), FactsPlan::Empty);
}

#[test]
fn unmatched_filter_plans_no_matches() {
    let data = facts("07/04", vec![group("events", vec![event(1776, "a")])]);
    assert_eq!(
        plan_facts(&data, CategoryFilter::Holidays),
        FactsPlan::NoMatches {
            filter: CategoryFilter::Holidays
        }
    );
}

#[test]
fn twelve_events_plan_ten_cards_and_two_more() {
    let events = (1..=12).map(|i| event(1900 + i, "fact")).collect();
    let data = facts("07/04", vec![group("events", events)]);
    let FactsPlan::Sections { date, sections } = plan_facts(&data, CategoryFilter::All) else {
        panic!("expected sections");
    };
    assert_eq!(date, "July 4");
    assert_eq!(sections.len(), 1);
    assert_eq!(sections[0].cards.len(), 10);
    assert_eq!(sections[0].more, 2);
    assert_eq!(sections[0].count, 12);
}

#[test]
fn ten_or_fewer_events_plan_no_more_indicator() {
    let data = facts("01/01", vec![group("births", (1..=10).map(|i| event(i, "f")).collect())]);
    let FactsPlan::Sections { sections, .. } = plan_facts(&data, CategoryFilter::All) else {
        panic!("expected sections");
    };
    assert_eq!(sections[0].cards.len(), 10);
    assert_eq!(sections[0].more, 0);
}

#[test]
fn planning_is_idempotent_for_identical_inputs() {
    let data = facts("02/29", vec![group("events", (1..=12).map(|i| event(i, "f")).collect())]);
    assert_eq!(
        plan_facts(&data, CategoryFilter::Events),
        plan_facts(&data, CategoryFilter::Events)
    );
}

// =============================================================
// Random plan
// =============================================================

#[test]
fn absent_random_fact_plans_empty() {
    let data = RandomFactResponse {
        date: "03/15".to_owned(),
        fact: None,
    };
    assert_eq!(plan_random(&data), RandomPlan::Empty);
}

#[test]
fn present_random_fact_plans_one_card() {
    let data = RandomFactResponse {
        date: "03/15".to_owned(),
        fact: Some(event(-44, "Ides of March")),
    };
    let RandomPlan::Fact { date, card } = plan_random(&data) else {
        panic!("expected a fact");
    };
    assert_eq!(date, "March 15");
    assert_eq!(card.year, -44);
    assert_eq!(card.text, "Ides of March");
}

// =============================================================
// Card mapping
// =============================================================

#[test]
fn card_uses_first_page_and_truncates_extract() {
    let long_extract = "x".repeat(400);
    let data = facts(
        "07/04",
        vec![group(
            "events",
            vec![Event {
                year: 1776,
                text: "Adopted.".to_owned(),
                pages: vec![
                    WikiPage {
                        title: Some("First".to_owned()),
                        extract: Some(long_extract.clone()),
                        url: Some("https://example.org/first".to_owned()),
                        thumbnail: Some("https://example.org/first.jpg".to_owned()),
                    },
                    WikiPage {
                        title: Some("Second".to_owned()),
                        ..WikiPage::default()
                    },
                ],
            }],
        )],
    );
    let FactsPlan::Sections { sections, .. } = plan_facts(&data, CategoryFilter::All) else {
        panic!("expected sections");
    };
    let card = &sections[0].cards[0];
    assert_eq!(card.title.as_deref(), Some("First"));
    assert_eq!(card.url.as_deref(), Some("https://example.org/first"));
    assert_eq!(card.thumbnail.as_deref(), Some("https://example.org/first.jpg"));
    assert_eq!(card.extract.as_deref(), Some(format!("{}...", "x".repeat(150)).as_str()));
}

#[test]
fn card_without_pages_has_no_page_fields() {
    let data = facts("07/04", vec![group("events", vec![event(1776, "Adopted.")])]);
    let FactsPlan::Sections { sections, .. } = plan_facts(&data, CategoryFilter::All) else {
        panic!("expected sections");
    };
    let card = &sections[0].cards[0];
    assert_eq!(card.title, None);
    assert_eq!(card.extract, None);
    assert_eq!(card.url, None);
    assert_eq!(card.thumbnail, None);
}
