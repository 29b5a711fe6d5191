use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;
use types::{Locale, Result, SiteSettings};

/// Looked up in the working directory.
pub const CONFIG_FILE: &str = "fedportal.toml";
/// Prefix for environment overrides, e.g. `FEDPORTAL_LOCALE=fr-FR`.
pub const ENV_PREFIX: &str = "FEDPORTAL";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_federation_name")]
    pub federation_name: String,
    #[serde(default)]
    pub locale: Locale,
    /// Demo data file. Without one every dashboard renders its empty state.
    #[serde(default)]
    pub roster_path: Option<PathBuf>,
    /// Used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_federation_name() -> String {
    SiteSettings::default().federation_name
}

fn default_log_filter() -> String {
    "info".into()
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Read `file` if it exists, then apply environment overrides.
    pub fn load_from(file: &Path) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::from(file).required(false))
            .add_source(config::Environment::with_prefix(ENV_PREFIX))
            .build()
            .context("failed to read configuration")?;

        Ok(settings
            .try_deserialize()
            .context("invalid configuration")?)
    }

    pub fn site_settings(&self) -> SiteSettings {
        SiteSettings {
            federation_name: self.federation_name.clone(),
            locale: self.locale,
        }
    }
}
