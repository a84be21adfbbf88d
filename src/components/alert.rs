//! Generic alert banner.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Warning,
    Error,
}

impl Severity {
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Info => "alert--info",
            Self::Warning => "alert--warning",
            Self::Error => "alert--error",
        }
    }

    /// Errors interrupt assistive technology; everything else is polite.
    pub fn aria_role(self) -> &'static str {
        match self {
            Self::Error => "alert",
            Self::Info | Self::Warning => "status",
        }
    }
}

pub(crate) fn alert_class(severity: Severity, extra: Option<&str>) -> String {
    match extra {
        Some(extra) if !extra.trim().is_empty() => format!("alert {} {}", severity.css_modifier(), extra.trim()),
        _ => format!("alert {}", severity.css_modifier()),
    }
}

/// Banner with a severity style and arbitrary title content.
#[component]
pub fn Alert(
    severity: Severity,
    title: AnyView,
    #[prop(optional, into)] class: Option<String>,
) -> impl IntoView {
    let classes = alert_class(severity, class.as_deref());

    view! {
        <div class=classes role=severity.aria_role()>
            <div class="alert__title">{title}</div>
        </div>
    }
}
