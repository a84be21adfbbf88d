//! Gate configuration: build mode and the web application base URL.
//!
//! WASM builds have no process environment at runtime, so values are read
//! from the compile-time environment with `option_env!`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::str::FromStr;
use std::sync::LazyLock;

pub const DEFAULT_WEBAPP_URL: &str = "http://localhost:3000";
pub const SETUP_PATH: &str = "/auth/setup";

static BUILD_CONFIG: LazyLock<GateConfig> = LazyLock::new(GateConfig::from_build_env);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid build mode: {0}")]
    InvalidBuildMode(String),
    #[error("invalid webapp url: {0}")]
    InvalidWebappUrl(String),
    #[error("unknown container tag: {0}")]
    UnknownContainerTag(String),
}

/// Build configuration the gate was compiled for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    /// Mode implied by the compiler profile.
    pub fn from_profile() -> Self {
        if cfg!(debug_assertions) { Self::Development } else { Self::Production }
    }

    pub fn is_development(self) -> bool {
        self == Self::Development
    }
}

impl FromStr for BuildMode {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ConfigError::InvalidBuildMode(raw.to_owned())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateConfig {
    pub build_mode: BuildMode,
    pub webapp_url: String,
}

impl GateConfig {
    /// Build a config, validating and normalizing the base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidWebappUrl`] when the URL lacks an
    /// `http://` or `https://` scheme.
    pub fn new(build_mode: BuildMode, webapp_url: &str) -> Result<Self, ConfigError> {
        let webapp_url = normalize_webapp_url(webapp_url)?;
        Ok(Self { build_mode, webapp_url })
    }

    /// Build config from the compile-time environment.
    ///
    /// Optional:
    /// - `LICENSE_GATE_BUILD_MODE`: `development` or `production`; defaults
    ///   to the compiler profile
    /// - `WEBAPP_URL`: default `http://localhost:3000`
    ///
    /// Invalid values fall back to their defaults with a warning.
    pub fn from_build_env() -> Self {
        let build_mode = match parse_build_mode(option_env!("LICENSE_GATE_BUILD_MODE")) {
            Ok(mode) => mode,
            Err(e) => {
                leptos::logging::warn!("{e}; using profile default");
                BuildMode::from_profile()
            }
        };
        let webapp_url = match normalize_webapp_url(option_env!("WEBAPP_URL").unwrap_or(DEFAULT_WEBAPP_URL)) {
            Ok(url) => url,
            Err(e) => {
                leptos::logging::warn!("{e}; using {DEFAULT_WEBAPP_URL}");
                DEFAULT_WEBAPP_URL.to_owned()
            }
        };
        Self { build_mode, webapp_url }
    }

    /// Config from the compile-time environment, parsed once per process.
    pub fn build_default() -> &'static Self {
        &BUILD_CONFIG
    }

    /// Page where an operator enters a license key.
    pub fn setup_url(&self) -> String {
        format!("{}{SETUP_PATH}", self.webapp_url)
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        Self::build_default().clone()
    }
}

pub(crate) fn parse_build_mode(raw: Option<&str>) -> Result<BuildMode, ConfigError> {
    match raw {
        None => Ok(BuildMode::from_profile()),
        Some(raw) => raw.parse(),
    }
}

fn normalize_webapp_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"));
    match host {
        Some(host) if !host.is_empty() => Ok(trimmed.to_owned()),
        _ => Err(ConfigError::InvalidWebappUrl(raw.to_owned())),
    }
}
