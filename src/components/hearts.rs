//! Decorative hearts floating up the page.

use leptos::prelude::*;

use crate::state::hearts::{HEART_GLYPH, HeartsState};

/// Renders the live hearts.
///
/// Keyed by heart id so spawning a new heart leaves the running animations
/// of the others untouched.
#[component]
pub fn Hearts() -> impl IntoView {
    let hearts = expect_context::<RwSignal<HeartsState>>();

    view! {
        <div class="hearts-layer" aria-hidden="true">
            <For
                each=move || hearts.get().live
                key=|heart| heart.id
                children=move |heart| {
                    view! { <div class="heart" style=heart.style()>{HEART_GLYPH}</div> }
                }
            />
        </div>
    }
}

/// Spawn a heart every `heart_interval_ms`, each removed again after
/// `heart_lifetime_ms`.
#[cfg(feature = "csr")]
pub fn start_spawner(hearts: RwSignal<HeartsState>, config: &crate::config::PageConfig) {
    use gloo_timers::callback::{Interval, Timeout};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    let lifetime_ms = config.heart_lifetime_ms;
    let mut rng = SmallRng::seed_from_u64(js_sys::Date::now().to_bits());
    Interval::new(config.heart_interval_ms, move || {
        let Some(id) = hearts.try_update(|h| h.spawn(&mut rng)) else {
            return;
        };
        Timeout::new(lifetime_ms, move || {
            hearts.update(|h| {
                h.remove(id);
            });
        })
        .forget();
    })
    .forget();
}
