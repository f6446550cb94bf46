//! Card rendering one historical event plus optional source-page metadata.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::render::facts::{FactCardModel, THUMBNAIL_FALLBACK_GLYPH};

/// One fact card: year badge, event text, optional thumbnail, optional
/// truncated extract, optional outbound source link. A thumbnail that
/// fails to load degrades to the placeholder glyph.
#[component]
pub fn FactCard(card: FactCardModel) -> impl IntoView {
    let image_failed = RwSignal::new(false);

    let thumbnail = card.thumbnail;
    let alt = card.title.unwrap_or_else(|| "Historical fact".to_owned());
    let media = move || {
        if let Some(src) = thumbnail.clone() {
            if !image_failed.get() {
                return view! {
                    <img
                        class="fact-card__thumbnail"
                        src=src
                        alt=alt.clone()
                        loading="lazy"
                        on:error=move |_| image_failed.set(true)
                    />
                }
                .into_any();
            }
        }
        view! {
            <div class="fact-card__thumbnail fact-card__thumbnail--fallback" aria-hidden="true">
                {THUMBNAIL_FALLBACK_GLYPH}
            </div>
        }
        .into_any()
    };

    view! {
        <div class="fact-card">
            {media}
            <div class="fact-card__content">
                <span class="fact-card__year">{card.year}</span>
                <p class="fact-card__text">{card.text}</p>
                {card.extract.map(|extract| view! { <p class="fact-card__extract">{extract}</p> })}
                {card
                    .url
                    .map(|url| {
                        view! {
                            <a
                                class="fact-card__link"
                                href=url
                                target="_blank"
                                rel="noopener noreferrer"
                            >
                                "Read more on Wikipedia ↗"
                            </a>
                        }
                    })}
            </div>
        </div>
    }
}
