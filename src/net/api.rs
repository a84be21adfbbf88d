//! REST helper for reading the current session.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR): returns `None`; the session is only fetched in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Fetch failures yield `None`, which the gate treats as an unknown license
//! signal rather than an invalid one.

#![allow(clippy::unused_async)]

use super::types::SessionData;

pub const SESSION_ENDPOINT: &str = "/api/auth/session";

/// Fetch the current session from `/api/auth/session`.
/// Returns `None` if unauthenticated, on failure, or on the server.
pub async fn fetch_session() -> Option<SessionData> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(SESSION_ENDPOINT)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            leptos::logging::warn!("session fetch failed: {}", resp.status());
            return None;
        }
        let body = resp.text().await.ok()?;
        super::types::parse_session(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
