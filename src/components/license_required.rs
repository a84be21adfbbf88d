//! License gate wrapper.
//!
//! SYSTEM CONTEXT
//! ==============
//! Feature pages wrap enterprise-only content in `LicenseRequired`. The gate
//! never hides content: an invalid license only adds a warning banner above
//! the children, and an unknown license (session still loading) renders the
//! children alone.
//!
//! Attributes spread at the call site (`attr:data-testid="..."`) land on the
//! container element when one is selected and are dropped otherwise.

#[cfg(test)]
#[path = "license_required_test.rs"]
mod license_required_test;

use std::fmt;
use std::str::FromStr;

use leptos::attr::{Attribute, any_attribute::AnyAttribute};
use leptos::either::Either;
use leptos::prelude::*;
use leptos::tachys::hydration::Cursor;
use leptos::tachys::ssr::StreamBuilder;
use leptos::tachys::view::any_view::AnyViewState;
use leptos::tachys::view::{Position, PositionState};

use crate::components::alert::{Alert, Severity};
use crate::config::{ConfigError, GateConfig};
use crate::i18n::{KEY_CONTACT_SALES, KEY_LICENSE_LOCALLY, KEY_LICENSE_SALES, Locale};
use crate::state::session::{LicenseSignal, NoticeSink, SessionState, license_notice, should_log_license_notice};

pub const SALES_URL: &str = "https://cal.com/sales";

/// Element the gate may render as its container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerTag {
    Div,
    Section,
    Article,
    Main,
    Aside,
    Span,
    Li,
}

impl ContainerTag {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::Section => "section",
            Self::Article => "article",
            Self::Main => "main",
            Self::Aside => "aside",
            Self::Span => "span",
            Self::Li => "li",
        }
    }

    /// Parse an optional tag name; the empty string selects no container.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownContainerTag`] for unsupported tags.
    pub fn parse_optional(raw: &str) -> Result<Option<Self>, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(None);
        }
        raw.parse().map(Some)
    }
}

impl FromStr for ContainerTag {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "div" => Ok(Self::Div),
            "section" => Ok(Self::Section),
            "article" => Ok(Self::Article),
            "main" => Ok(Self::Main),
            "aside" => Ok(Self::Aside),
            "span" => Ok(Self::Span),
            "li" => Ok(Self::Li),
            _ => Err(ConfigError::UnknownContainerTag(raw.to_owned())),
        }
    }
}

impl fmt::Display for ContainerTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the gate's content is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderTarget {
    Element(ContainerTag),
    /// Children are emitted directly into the parent with no wrapper.
    Transparent,
}

impl RenderTarget {
    pub fn resolve(container: Option<ContainerTag>) -> Self {
        container.map_or(Self::Transparent, Self::Element)
    }
}

/// Render `children`, preceded by a license warning when the session
/// reports an invalid license.
///
/// In development builds, an invalid license at mount time also logs a
/// pointer to the license setup page. The check runs once per mount and
/// does not follow later session changes.
#[component]
pub fn LicenseRequired(
    children: Children,
    /// Container element; `None` renders the children without a wrapper.
    #[prop(optional)]
    container: Option<ContainerTag>,
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional, into)] role: Option<String>,
) -> impl IntoView {
    let session = use_context::<RwSignal<SessionState>>();
    let config = use_context::<GateConfig>().unwrap_or_default();
    let locale = use_context::<Locale>().unwrap_or_default();
    let sink = use_context::<NoticeSink>().unwrap_or_default();

    let signal = move || session.map_or(LicenseSignal::Unknown, |s| s.with(LicenseSignal::from_session));

    // Mount-only: the signal is read untracked so later updates don't re-run this.
    Effect::new(move || {
        let at_mount = session.map_or(LicenseSignal::Unknown, |s| s.with_untracked(LicenseSignal::from_session));
        if should_log_license_notice(config.build_mode, at_mount) {
            sink.emit(&license_notice(&config.setup_url()));
        }
    });

    let banner = move || {
        signal()
            .outcome()
            .shows_warning()
            .then(|| view! { <LicenseWarning locale=locale.clone()/> })
    };

    let body = view! {
        {banner}
        {children()}
    }
    .into_any();

    match RenderTarget::resolve(container) {
        RenderTarget::Transparent => Either::Left(Unspread(body)),
        RenderTarget::Element(tag) => Either::Right(wrap_in(tag, class, role, body)),
    }
}

/// Wrap `component` so every render goes through `LicenseRequired`.
///
/// Props are forwarded unchanged and the gate gets no container options.
pub fn with_license_required<P, V, F>(component: F) -> impl Fn(P) -> AnyView + Clone + Send + Sync + 'static
where
    P: Send + 'static,
    V: IntoView + 'static,
    F: Fn(P) -> V + Clone + Send + Sync + 'static,
{
    move |props: P| {
        let component = component.clone();
        view! {
            <LicenseRequired>
                {component(props)}
            </LicenseRequired>
        }
        .into_any()
    }
}

#[component]
fn LicenseWarning(locale: Locale) -> impl IntoView {
    let title = view! {
        {locale.t(KEY_LICENSE_LOCALLY)}
        " "
        {locale.t(KEY_LICENSE_SALES)}
        " "
        <a class="underline" href=SALES_URL>
            {locale.t(KEY_CONTACT_SALES)}
        </a>
    }
    .into_any();

    view! { <Alert severity=Severity::Warning title=title class="mb-4"/> }
}

fn wrap_in(tag: ContainerTag, class: Option<String>, role: Option<String>, body: AnyView) -> AnyView {
    let el = leptos::html::custom(tag.as_str()).role(role).child(body);
    match class {
        Some(class) => el.class(class).into_any(),
        None => el.into_any(),
    }
}

/// Transparent group: renders its view unchanged and ignores attributes
/// spread onto it, so they never reach the banner or the children.
pub struct Unspread(AnyView);

impl Render for Unspread {
    type State = AnyViewState;

    fn build(self) -> Self::State {
        self.0.build()
    }

    fn rebuild(self, state: &mut Self::State) {
        self.0.rebuild(state);
    }
}

impl AddAnyAttr for Unspread {
    type Output<SomeNewAttr: Attribute> = Self;

    fn add_any_attr<NewAttr: Attribute>(self, _attr: NewAttr) -> Self::Output<NewAttr>
    where
        Self::Output<NewAttr>: RenderHtml,
    {
        self
    }
}

impl RenderHtml for Unspread {
    type AsyncOutput = Self;
    type Owned = Self;

    const MIN_LENGTH: usize = 0;

    fn dry_resolve(&mut self) {
        self.0.dry_resolve();
    }

    async fn resolve(self) -> Self::AsyncOutput {
        Self(self.0.resolve().await)
    }

    fn html_len(&self) -> usize {
        self.0.html_len()
    }

    fn to_html_with_buf(
        self,
        buf: &mut String,
        position: &mut Position,
        escape: bool,
        mark_branches: bool,
        _extra_attrs: Vec<AnyAttribute>,
    ) {
        self.0.to_html_with_buf(buf, position, escape, mark_branches, vec![]);
    }

    fn to_html_async_with_buf<const OUT_OF_ORDER: bool>(
        self,
        buf: &mut StreamBuilder,
        position: &mut Position,
        escape: bool,
        mark_branches: bool,
        _extra_attrs: Vec<AnyAttribute>,
    ) where
        Self: Sized,
    {
        self.0
            .to_html_async_with_buf::<OUT_OF_ORDER>(buf, position, escape, mark_branches, vec![]);
    }

    fn hydrate<const FROM_SERVER: bool>(self, cursor: &Cursor, position: &PositionState) -> Self::State {
        self.0.hydrate::<FROM_SERVER>(cursor, position)
    }

    async fn hydrate_async(self, cursor: &Cursor, position: &PositionState) -> Self::State {
        self.0.hydrate_async(cursor, position).await
    }

    fn into_owned(self) -> Self::Owned {
        self
    }
}
