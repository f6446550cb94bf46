//! One category of results: header, card grid, and overflow indicator.

use leptos::prelude::*;

use crate::components::fact_card::FactCard;
use crate::render::facts::{CategorySectionModel, item_noun};

/// A category section. At most ten cards render; the remainder shows as a
/// count-only indicator, never paginated.
#[component]
pub fn CategorySection(section: CategorySectionModel, date: String) -> impl IntoView {
    let more_label = (section.more > 0).then(|| {
        format!(
            "... and {} more {}",
            section.more,
            section.meta.title.to_lowercase()
        )
    });

    view! {
        <section class="category-section">
            <header class="category-section__header">
                <span class="category-section__emoji" aria-hidden="true">{section.meta.emoji}</span>
                <div class="category-section__title">
                    <h3>{section.meta.title}</h3>
                    <p class="category-section__date">{date}</p>
                </div>
                <span class="category-section__count">
                    {format!("{} {}", section.count, item_noun(section.count))}
                </span>
            </header>
            <div class="category-section__grid">
                {section
                    .cards
                    .into_iter()
                    .map(|card| view! { <FactCard card/> })
                    .collect::<Vec<_>>()}
            </div>
            {more_label.map(|label| view! { <p class="category-section__more">{label}</p> })}
        </section>
    }
}
