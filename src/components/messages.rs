//! Message cards.

use leptos::prelude::*;

use crate::state::content::ContentState;

#[component]
pub fn Messages() -> impl IntoView {
    let content = expect_context::<RwSignal<ContentState>>();

    view! {
        <div class="love-messages" id="loveMessages">
            {move || {
                content
                    .get()
                    .messages
                    .into_iter()
                    .map(|message| {
                        view! {
                            <div class="message-card">
                                <p class="message-text">{message.text}</p>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
