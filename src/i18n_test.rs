use super::*;

#[test]
fn english_resolves_gate_keys() {
    let locale = Locale::english();
    assert_eq!(locale.t(KEY_CONTACT_SALES), "Contact Sales");
    assert!(locale.t(KEY_LICENSE_LOCALLY).contains("locally"));
    assert!(locale.t(KEY_LICENSE_SALES).contains("sales team"));
}

#[test]
fn catalog_overrides_english() {
    let locale = Locale::from_json("de", r#"{"contact_sales": "Vertrieb kontaktieren"}"#).unwrap();
    assert_eq!(locale.lang, "de");
    assert_eq!(locale.t(KEY_CONTACT_SALES), "Vertrieb kontaktieren");
}

#[test]
fn missing_catalog_key_falls_back_to_english() {
    let locale = Locale::from_json("de", "{}").unwrap();
    assert_eq!(locale.t(KEY_CONTACT_SALES), "Contact Sales");
}

#[test]
fn unknown_key_resolves_to_itself() {
    assert_eq!(Locale::english().t("no_such_key"), "no_such_key");
}

#[test]
fn non_string_catalog_is_rejected() {
    let err = Locale::from_json("fr", r#"{"contact_sales": 3}"#).unwrap_err();
    assert!(err.to_string().starts_with("invalid translation catalog"));
}

#[test]
fn default_locale_is_english() {
    assert_eq!(Locale::default().lang, "en");
}
