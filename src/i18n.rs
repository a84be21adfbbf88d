//! Translation lookup for gate copy.
//!
//! SYSTEM CONTEXT
//! ==============
//! Host applications provide a `Locale` through Leptos context. Components
//! resolve opaque message keys with `Locale::t`; a missing key falls back to
//! the English catalog and then to the key itself.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

use std::collections::HashMap;
use std::sync::Arc;

pub const KEY_LICENSE_LOCALLY: &str = "enterprise_license_locally";
pub const KEY_LICENSE_SALES: &str = "enterprise_license_sales";
pub const KEY_CONTACT_SALES: &str = "contact_sales";

const ENGLISH: &[(&str, &str)] = &[
    (KEY_LICENSE_LOCALLY, "You can test this feature locally but not on production."),
    (
        KEY_LICENSE_SALES,
        "To upgrade to the enterprise edition, please reach out to our sales team. If a license key is already in place, please contact support for help.",
    ),
    (KEY_CONTACT_SALES, "Contact Sales"),
];

#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    #[error("invalid translation catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A language tag plus its flat key -> message catalog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Locale {
    pub lang: String,
    messages: Arc<HashMap<String, String>>,
}

impl Locale {
    pub fn english() -> Self {
        let messages = ENGLISH
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        Self { lang: "en".to_owned(), messages: Arc::new(messages) }
    }

    /// Load a catalog from a flat JSON object of string values.
    ///
    /// # Errors
    ///
    /// Returns [`LocaleError::Parse`] if `json` is not an object of strings.
    pub fn from_json(lang: &str, json: &str) -> Result<Self, LocaleError> {
        let messages: HashMap<String, String> = serde_json::from_str(json)?;
        Ok(Self { lang: lang.to_owned(), messages: Arc::new(messages) })
    }

    /// Resolve `key` to a localized message.
    pub fn t(&self, key: &str) -> String {
        if let Some(msg) = self.messages.get(key) {
            return msg.clone();
        }
        ENGLISH
            .iter()
            .find(|(k, _)| *k == key)
            .map_or_else(|| key.to_owned(), |(_, v)| (*v).to_owned())
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::english()
    }
}
