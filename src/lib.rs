//! # license-gate
//!
//! Leptos components that gate feature content on the current session's
//! license signal.
//!
//! `LicenseRequired` renders its children as-is while the license is valid
//! or still unknown, and prepends a warning banner once the session reports
//! an invalid license. `with_license_required` wraps any component function
//! in that gate.
//!
//! Host applications call [`provide_license_context`] once near the root and
//! (in the browser) [`state::session::install_session_loader`] to populate
//! the session signal.

pub mod components;
pub mod config;
pub mod i18n;
pub mod net;
pub mod state;

use leptos::prelude::*;

use crate::config::GateConfig;
use crate::i18n::Locale;
use crate::state::session::SessionState;

pub use crate::components::license_required::{LicenseRequired, with_license_required};

/// Provide the gate's shared contexts: configuration, translations, and an
/// empty (not yet loaded) session signal.
///
/// Returns the session signal so the caller can populate it.
pub fn provide_license_context(config: GateConfig, locale: Locale) -> RwSignal<SessionState> {
    let session = RwSignal::new(SessionState::default());

    provide_context(config);
    provide_context(locale);
    provide_context(session);

    session
}

/// Install the browser panic hook and route `log` output to the console.
#[cfg(feature = "hydrate")]
pub fn init_logging() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}
