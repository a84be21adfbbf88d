use std::sync::{Arc, Mutex};

use any_spawner::Executor;
use leptos::tachys::view::RenderHtml;

use super::*;
use crate::config::BuildMode;
use crate::net::types::SessionData;

// =============================================================
// Helpers
// =============================================================

#[component]
fn Feature(label: String) -> impl IntoView {
    view! { <p class="feature">{label}</p> }
}

fn session(has_valid_license: Option<bool>) -> SessionState {
    SessionState {
        data: has_valid_license.map(|has_valid_license| SessionData { has_valid_license, user: None, expires: None }),
    }
}

/// Reactive owner on a thread whose local executor can run the mount effect.
fn owner() -> Owner {
    let _ = Executor::init_futures_executor();
    Owner::new()
}

/// Render `view_fn` to HTML with the gate contexts provided.
fn render(state: SessionState, view_fn: impl FnOnce() -> AnyView) -> String {
    let owner = owner();
    owner.with(|| {
        provide_context(GateConfig::new(BuildMode::Production, "http://localhost:3000").unwrap());
        provide_context(Locale::english());
        provide_context(RwSignal::new(state));
        view_fn().to_html()
    })
}

fn gated_feature() -> AnyView {
    view! {
        <LicenseRequired>
            <Feature label="Workflows".to_owned()/>
        </LicenseRequired>
    }
    .into_any()
}

// =============================================================
// ContainerTag / RenderTarget
// =============================================================

#[test]
fn container_tag_parses_known_names() {
    assert_eq!("section".parse::<ContainerTag>(), Ok(ContainerTag::Section));
    assert_eq!("DIV".parse::<ContainerTag>(), Ok(ContainerTag::Div));
    assert_eq!(ContainerTag::Li.to_string(), "li");
}

#[test]
fn container_tag_rejects_unknown_name() {
    assert_eq!(
        "marquee".parse::<ContainerTag>(),
        Err(ConfigError::UnknownContainerTag("marquee".to_owned()))
    );
}

#[test]
fn empty_tag_selects_no_container() {
    assert_eq!(ContainerTag::parse_optional(""), Ok(None));
    assert_eq!(ContainerTag::parse_optional("main"), Ok(Some(ContainerTag::Main)));
}

#[test]
fn render_target_resolves_from_option() {
    assert_eq!(RenderTarget::resolve(None), RenderTarget::Transparent);
    assert_eq!(RenderTarget::resolve(Some(ContainerTag::Aside)), RenderTarget::Element(ContainerTag::Aside));
}

// =============================================================
// Branches
// =============================================================

#[test]
fn valid_license_renders_children_only() {
    let html = render(session(Some(true)), gated_feature);
    assert!(html.contains("Workflows"));
    assert!(!html.contains("alert--warning"));
}

#[test]
fn unknown_license_renders_children_only() {
    let html = render(session(None), gated_feature);
    assert!(html.contains("Workflows"));
    assert!(!html.contains("alert--warning"));
}

#[test]
fn unresolved_session_never_shows_warning() {
    let html = render(SessionState::default(), gated_feature);
    assert!(!html.contains("alert--warning"));
}

#[test]
fn invalid_license_renders_warning_before_children() {
    let html = render(session(Some(false)), gated_feature);
    let banner = html.find("alert--warning").unwrap();
    let feature = html.find("Workflows").unwrap();
    assert!(banner < feature);
    assert!(html.contains("mb-4"));
}

#[test]
fn warning_links_to_sales() {
    let html = render(session(Some(false)), gated_feature);
    assert!(html.contains(r#"href="https://cal.com/sales""#));
    assert!(html.contains("Contact Sales"));
    assert!(html.contains("You can test this feature locally but not on production."));
}

#[test]
fn missing_session_context_is_unknown() {
    let owner = owner();
    let html = owner.with(|| gated_feature().to_html());
    assert!(html.contains("Workflows"));
    assert!(!html.contains("alert--warning"));
}

// =============================================================
// Container attributes
// =============================================================

#[test]
fn transparent_gate_emits_no_wrapper() {
    let html = render(session(Some(true)), gated_feature);
    assert!(html.contains(r#"<p class="feature">"#));
    assert!(!html.contains("<div"));
    assert!(!html.contains("<section"));
}

#[test]
fn class_and_role_land_on_container() {
    let html = render(session(Some(false)), || {
        view! {
            <LicenseRequired container=ContainerTag::Section class="gate" role="region">
                <Feature label="Insights".to_owned()/>
            </LicenseRequired>
        }
        .into_any()
    });
    assert!(html.starts_with("<section"));
    assert!(html.contains(r#"class="gate""#));
    assert!(html.contains(r#"role="region""#));
    assert_eq!(html.matches("gate").count(), 1);
    assert_eq!(html.matches("region").count(), 1);
}

#[test]
fn spread_attrs_land_on_container_only() {
    let html = render(session(Some(false)), || {
        view! {
            <LicenseRequired container=ContainerTag::Div attr:data-testid="gate-x">
                <Feature label="Insights".to_owned()/>
            </LicenseRequired>
        }
        .into_any()
    });
    assert!(html.starts_with("<div"));
    assert_eq!(html.matches("gate-x").count(), 1);
    let banner = html.find("alert--warning").unwrap();
    assert!(html.find("gate-x").unwrap() < banner);
}

#[test]
fn spread_attrs_dropped_without_container() {
    let html = render(session(Some(false)), || {
        view! {
            <LicenseRequired attr:data-testid="gate-x">
                <Feature label="Insights".to_owned()/>
            </LicenseRequired>
        }
        .into_any()
    });
    assert!(html.contains("alert--warning"));
    assert!(html.contains("Insights"));
    assert!(!html.contains("gate-x"));
}

#[test]
fn container_without_class_emits_no_class_attr() {
    let html = render(session(Some(true)), || {
        view! {
            <LicenseRequired container=ContainerTag::Section attr:data-testid="gate-x">
                <Feature label="Insights".to_owned()/>
            </LicenseRequired>
        }
        .into_any()
    });
    let open_tag = &html[..html.find('>').unwrap()];
    assert!(open_tag.starts_with("<section"));
    assert!(open_tag.contains("gate-x"));
    assert!(!open_tag.contains("class="));
    assert!(!open_tag.contains("role="));
}

// =============================================================
// Mount notice
// =============================================================

/// Mount a gate, run its effects, then apply each session update and run
/// effects again. Returns every notice written.
fn notices_after(mode: BuildMode, initial: Option<bool>, updates: &[Option<bool>]) -> Vec<String> {
    let notices = Arc::new(Mutex::new(Vec::new()));
    let owner = owner();
    owner.with(|| {
        provide_context(GateConfig::new(mode, "http://localhost:3000").unwrap());
        provide_context(Locale::english());
        provide_context(NoticeSink::new({
            let notices = Arc::clone(&notices);
            move |message| notices.lock().unwrap().push(message.to_owned())
        }));
        let state = RwSignal::new(session(initial));
        provide_context(state);

        let _html = gated_feature().to_html();
        Executor::poll_local();

        for update in updates {
            state.set(session(*update));
            Executor::poll_local();
        }
    });
    notices.lock().unwrap().clone()
}

#[test]
fn notice_written_once_for_invalid_license_in_development() {
    let notices = notices_after(BuildMode::Development, Some(false), &[Some(true), Some(false)]);
    assert_eq!(notices.len(), 1);
    assert!(notices[0].contains("http://localhost:3000/auth/setup"));
}

#[test]
fn notice_never_written_in_production() {
    assert!(notices_after(BuildMode::Production, Some(false), &[Some(false)]).is_empty());
}

#[test]
fn notice_never_written_for_valid_or_unknown_license() {
    assert!(notices_after(BuildMode::Development, Some(true), &[]).is_empty());
    assert!(notices_after(BuildMode::Development, None, &[]).is_empty());
}

#[test]
fn notice_checks_only_the_mount_time_signal() {
    assert!(notices_after(BuildMode::Development, None, &[Some(false)]).is_empty());
}

// =============================================================
// with_license_required
// =============================================================

#[test]
fn wrapped_component_matches_manual_nesting() {
    for state in [Some(true), Some(false), None] {
        let wrapped = with_license_required(Feature);
        let via_wrapper = render(session(state), || {
            wrapped(FeatureProps::builder().label("Routing".to_owned()).build())
        });
        let manual = render(session(state), || {
            view! {
                <LicenseRequired>
                    <Feature label="Routing".to_owned()/>
                </LicenseRequired>
            }
            .into_any()
        });
        assert_eq!(via_wrapper, manual);
    }
}

#[test]
fn wrapped_component_forwards_props() {
    let wrapped = with_license_required(Feature);
    let html = render(session(Some(true)), || wrapped(FeatureProps::builder().label("Payments".to_owned()).build()));
    assert!(html.contains("Payments"));
}

#[test]
fn provided_context_starts_unknown_then_follows_session() {
    let owner = owner();
    owner.with(|| {
        let config = GateConfig::new(BuildMode::Development, "http://localhost:3000").unwrap();
        let state = crate::provide_license_context(config, Locale::english());
        assert!(!gated_feature().to_html().contains("alert--warning"));

        state.set(session(Some(false)));
        assert!(gated_feature().to_html().contains("alert--warning"));
    });
}
