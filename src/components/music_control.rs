//! Background music element and its play/pause button.

use leptos::prelude::*;

use crate::config::PageConfig;
use crate::state::audio::{AudioState, Playback};

/// Looping `<audio>` element plus a floating toggle button.
///
/// On mount it attempts autoplay; browsers that block it leave the state
/// `Paused` until the user clicks.
#[component]
pub fn MusicControl() -> impl IntoView {
    let config = expect_context::<PageConfig>();
    let audio = expect_context::<RwSignal<AudioState>>();
    let audio_ref = NodeRef::<leptos::html::Audio>::new();

    Effect::new(move || {
        let Some(el) = audio_ref.get() else {
            return;
        };
        #[cfg(feature = "csr")]
        {
            el.set_loop(true);
            leptos::task::spawn_local(async move {
                let started = request_play(&el).await;
                if !started {
                    log::info!("autoplay blocked, waiting for a click to play");
                }
                audio.update(|a| a.autoplay_settled(started));
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = el;
        }
    });

    let on_click = move |_| {
        let Some(next) = audio.try_update(AudioState::toggle) else {
            return;
        };
        #[cfg(feature = "csr")]
        {
            let Some(el) = audio_ref.get_untracked() else {
                return;
            };
            match next {
                Playback::Playing => leptos::task::spawn_local(async move {
                    if !request_play(&el).await {
                        log::warn!("play request rejected");
                        audio.update(AudioState::play_rejected);
                    }
                }),
                Playback::Paused => {
                    if let Err(e) = el.pause() {
                        log::warn!("pause failed: {e:?}");
                    }
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = next;
        }
    };

    let icon = move || audio.get().playback.icon();
    let tooltip = move || audio.get().playback.tooltip();
    let playing = move || audio.get().playback == Playback::Playing;

    view! {
        <audio id="backgroundMusic" node_ref=audio_ref src=config.music_src preload="auto"></audio>
        <button
            class="music-control"
            class:music-control--playing=playing
            id="musicControl"
            title=tooltip
            on:click=on_click
        >
            <span class="music-icon">{icon}</span>
        </button>
    }
}

/// Ask the element to play and wait for the browser's verdict.
#[cfg(feature = "csr")]
async fn request_play(el: &web_sys::HtmlMediaElement) -> bool {
    match el.play() {
        Ok(promise) => wasm_bindgen_futures::JsFuture::from(promise).await.is_ok(),
        Err(_) => false,
    }
}
