//! Content loading for the carousel and the message list.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests): [`HttpSource`] reports itself unavailable, which
//! exercises the same fallback path a network failure takes.
//!
//! ERROR HANDLING
//! ==============
//! Loading is all-or-nothing. Any failure on either file discards whatever
//! was already fetched and substitutes the embedded defaults for BOTH
//! collections. The error only reaches the log; callers always get content.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

use std::future::Future;

use thiserror::Error;

use super::types::{Message, Slide};
use crate::config::PageConfig;

/// Why a content file could not be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContentError {
    #[error("request to {url} failed: {reason}")]
    Network { url: String, reason: String },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("{url} is not valid content: {reason}")]
    Parse { url: String, reason: String },
    #[error("fetching is only available in the browser")]
    Unavailable,
}

/// Which path produced the content on screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContentOrigin {
    /// Both files were fetched and parsed.
    Remote,
    /// Something failed; both collections are the embedded defaults.
    Fallback,
}

/// The two collections the page renders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Content {
    pub slides: Vec<Slide>,
    pub messages: Vec<Message>,
    pub origin: ContentOrigin,
}

impl Content {
    /// The embedded fallback pair.
    #[must_use]
    pub fn defaults() -> Self {
        Self { slides: default_slides(), messages: default_messages(), origin: ContentOrigin::Fallback }
    }
}

/// Something that can produce the two collections.
pub trait ContentSource {
    fn fetch_slides(&self) -> impl Future<Output = Result<Vec<Slide>, ContentError>>;
    fn fetch_messages(&self) -> impl Future<Output = Result<Vec<Message>, ContentError>>;
}

/// Load both collections, falling back to defaults as a unit on any failure.
pub async fn load<S: ContentSource>(source: &S) -> Content {
    match fetch_both(source).await {
        Ok((slides, messages)) => {
            log::info!("loaded {} slides and {} messages", slides.len(), messages.len());
            Content { slides, messages, origin: ContentOrigin::Remote }
        }
        Err(e) => {
            log::error!("error loading content, using defaults: {e}");
            Content::defaults()
        }
    }
}

async fn fetch_both<S: ContentSource>(source: &S) -> Result<(Vec<Slide>, Vec<Message>), ContentError> {
    let slides = source.fetch_slides().await?;
    let messages = source.fetch_messages().await?;
    Ok((slides, messages))
}

/// Fetches the two JSON files over HTTP.
#[derive(Clone, Debug)]
pub struct HttpSource {
    slides_url: String,
    messages_url: String,
}

impl HttpSource {
    #[must_use]
    pub fn from_config(config: &PageConfig) -> Self {
        Self { slides_url: config.slides_url.clone(), messages_url: config.messages_url.clone() }
    }
}

impl ContentSource for HttpSource {
    async fn fetch_slides(&self) -> Result<Vec<Slide>, ContentError> {
        get_json(&self.slides_url).await
    }

    async fn fetch_messages(&self) -> Result<Vec<Message>, ContentError> {
        get_json(&self.messages_url).await
    }
}

#[allow(clippy::unused_async)]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ContentError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| ContentError::Network { url: url.to_owned(), reason: e.to_string() })?;
        if !resp.ok() {
            return Err(ContentError::Status { url: url.to_owned(), status: resp.status() });
        }
        resp.json::<T>()
            .await
            .map_err(|e| ContentError::Parse { url: url.to_owned(), reason: e.to_string() })
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = url;
        Err(ContentError::Unavailable)
    }
}

/// Slides shown when the remote file cannot be used.
#[must_use]
pub fn default_slides() -> Vec<Slide> {
    vec![
        Slide {
            image: "https://images.unsplash.com/photo-1516589178581-6cd7833ae3b2?w=800&h=600&fit=crop".to_owned(),
            title: "Nuestro Primer Momento".to_owned(),
            caption: "Aquí puedes escribir lo que sentiste en este momento. Recuerdo cuando nos conocimos, tu sonrisa iluminó mi mundo.".to_owned(),
        },
        Slide {
            image: "https://images.unsplash.com/photo-1518199266791-5375a83190b7?w=800&h=600&fit=crop".to_owned(),
            title: "Cuando Éramos Nosotros".to_owned(),
            caption: "Cada risa, cada abrazo, cada mirada... todo construyó algo hermoso que vale la pena recuperar.".to_owned(),
        },
    ]
}

/// Messages shown when the remote file cannot be used.
#[must_use]
pub fn default_messages() -> Vec<Message> {
    vec![Message {
        text: "Hay amores que marcan tu vida de tal manera que, aunque el tiempo pase, siempre encuentras tu camino de regreso a ellos.".to_owned(),
    }]
}
