//! Session state and the license signal derived from it.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host application provides `RwSignal<SessionState>` via context. The
//! gate only reads it; `install_session_loader` is the one writer.
//! `NoticeSink` receives the development-mode setup notice.
//!
//! DESIGN
//! ======
//! The license flag is tri-state. A session that has not loaded yet is
//! `Unknown`, and `Unknown` gates exactly like `Valid` (fail-open).

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::Arc;

use leptos::prelude::*;

use crate::config::BuildMode;
use crate::net::types::SessionData;

/// Current session as seen by the browser.
///
/// `data` stays `None` until the session endpoint answers with a session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub data: Option<SessionData>,
}

/// License validity as reported by the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LicenseSignal {
    Valid,
    Invalid,
    /// No session data yet (loading, signed out, or fetch failed).
    Unknown,
}

impl LicenseSignal {
    pub fn from_session(session: &SessionState) -> Self {
        match &session.data {
            Some(data) if data.has_valid_license => Self::Valid,
            Some(_) => Self::Invalid,
            None => Self::Unknown,
        }
    }

    pub fn outcome(self) -> GateOutcome {
        match self {
            Self::Valid | Self::Unknown => GateOutcome::ChildrenOnly,
            Self::Invalid => GateOutcome::WarningThenChildren,
        }
    }
}

/// What the gate renders for a given signal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateOutcome {
    ChildrenOnly,
    WarningThenChildren,
}

impl GateOutcome {
    pub fn shows_warning(self) -> bool {
        self == Self::WarningThenChildren
    }
}

/// Whether the mount-time setup notice should be logged.
pub fn should_log_license_notice(mode: BuildMode, signal: LicenseSignal) -> bool {
    mode.is_development() && signal == LicenseSignal::Invalid
}

/// Operator-facing notice pointing at the license setup page.
pub fn license_notice(setup_url: &str) -> String {
    format!("You're using a feature that requires a valid license. Please go to {setup_url} to enter a license key.")
}

/// Operator-facing channel the setup notice is written to.
///
/// Defaults to the console via `leptos::logging`; hosts may provide their
/// own through context.
#[derive(Clone)]
pub struct NoticeSink(Arc<dyn Fn(&str) + Send + Sync>);

impl NoticeSink {
    pub fn new(write: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self(Arc::new(write))
    }

    pub fn emit(&self, message: &str) {
        (self.0)(message);
    }
}

impl Default for NoticeSink {
    fn default() -> Self {
        Self::new(|message| leptos::logging::log!("{message}"))
    }
}

impl fmt::Debug for NoticeSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NoticeSink")
    }
}

/// Populate `session` from the session endpoint once, in the browser.
///
/// A failed fetch leaves `data` empty, so the license signal stays
/// `Unknown`.
pub fn install_session_loader(session: RwSignal<SessionState>) {
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(async move {
            let data = crate::net::api::fetch_session().await;
            session.set(SessionState { data });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = session;
    }
}
