//! Root application component and context providers.

use leptos::prelude::*;

use crate::components::carousel::Carousel;
use crate::components::drawing_pad::DrawingPad;
use crate::components::hearts::Hearts;
use crate::components::messages::Messages;
use crate::components::music_control::MusicControl;
use crate::config::PageConfig;
use crate::state::{
    audio::AudioState, content::ContentState, hearts::HeartsState, slideshow::SlideshowState, ui::UiState,
};

/// Root application component.
///
/// Provides the page configuration and every shared state signal, starts the
/// content load, and lays out the page sections. The carousel and heart
/// timers start once the load settles, whichever path it took.
#[component]
pub fn App() -> impl IntoView {
    let config = PageConfig::default();

    let content = RwSignal::new(ContentState::default());
    let slideshow = RwSignal::new(SlideshowState::default());
    let audio = RwSignal::new(AudioState::default());
    let hearts = RwSignal::new(HeartsState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(config.clone());
    provide_context(content);
    provide_context(slideshow);
    provide_context(audio);
    provide_context(hearts);
    provide_context(ui);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        use crate::net::content::{HttpSource, load};

        let loaded = load(&HttpSource::from_config(&config)).await;
        slideshow.update(|s| s.load(loaded.slides.len()));
        content.update(|c| c.apply(loaded));

        crate::components::carousel::start_autoplay(slideshow, config.slide_interval_ms);
        crate::components::hearts::start_spawner(hearts, &config);
    });

    view! {
        <header class="page-header">
            <h1 class="page-title">"Para Ti \u{2764}\u{FE0F}"</h1>
            <p class="page-subtitle">"Un pequeño lugar para nuestros recuerdos"</p>
        </header>
        <main class="page">
            <section class="page-section page-section--carousel">
                <Carousel/>
            </section>
            <section class="page-section page-section--messages">
                <Messages/>
            </section>
            <section class="page-section page-section--composer">
                <h2 class="section-title">"Déjame un mensaje"</h2>
                <DrawingPad/>
            </section>
        </main>
        <MusicControl/>
        <Hearts/>
    }
}
