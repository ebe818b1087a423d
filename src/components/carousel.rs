//! Photo carousel with previous/next controls.

use leptos::prelude::*;

use crate::state::content::ContentState;
use crate::state::slideshow::{Direction, SlideshowState};

/// Slide strip rendered from `ContentState.slides`.
///
/// Exactly one slide carries the `active` class, driven by
/// `SlideshowState.current`. Rebuilds its slides whenever the content is
/// replaced.
#[component]
pub fn Carousel() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentState>>();
    let slideshow = expect_context::<RwSignal<SlideshowState>>();

    let step = move |direction: Direction| slideshow.update(|s| s.advance(direction));

    view! {
        <div class="carousel">
            <div class="carousel-slides" id="carouselSlides">
                {move || {
                    content
                        .get()
                        .slides
                        .into_iter()
                        .enumerate()
                        .map(|(index, slide)| {
                            let is_active = move || slideshow.get().is_active(index);
                            let alt = slide.title.clone();
                            view! {
                                <div class="slide" class:active=is_active>
                                    <img src=slide.image alt=alt class="slide-image"/>
                                    <div class="slide-title">{slide.title}</div>
                                    <div class="slide-caption">{slide.caption}</div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </div>
            <button class="carousel-btn carousel-btn--prev" title="Anterior" on:click=move |_| step(Direction::Prev)>
                "\u{276E}"
            </button>
            <button class="carousel-btn carousel-btn--next" title="Siguiente" on:click=move |_| step(Direction::Next)>
                "\u{276F}"
            </button>
        </div>
    }
}

/// Advance the carousel every `period_ms` for the rest of the page's life.
#[cfg(feature = "csr")]
pub fn start_autoplay(slideshow: RwSignal<SlideshowState>, period_ms: u32) {
    gloo_timers::callback::Interval::new(period_ms, move || {
        slideshow.update(|s| s.advance(Direction::Next));
    })
    .forget();
}
