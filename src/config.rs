//! Configuration management.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{highlight::DEFAULT_VARIANTS, profile::Profile};

/// File picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "folio.toml";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSettings,

    #[serde(default)]
    pub highlight: HighlightConfig,

    #[serde(default)]
    pub profile: Profile,
}

/// Where the site lives and how to reach it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    /// Site directory or base URL used when no source is given on the command line.
    #[serde(default)]
    pub base: Option<String>,

    /// Whole-request timeout, in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self {
            base: None,
            timeout_secs: default_timeout(),
            connect_timeout_secs: default_connect_timeout(),
        }
    }
}

fn default_timeout() -> u64 {
    15
}

fn default_connect_timeout() -> u64 {
    5
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightConfig {
    /// Spellings of the page owner's name to emphasise in author lists.
    #[serde(default = "default_variants")]
    pub variants: Vec<String>,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            variants: default_variants(),
        }
    }
}

fn default_variants() -> Vec<String> {
    DEFAULT_VARIANTS.iter().map(|v| v.to_string()).collect()
}

/// Load the configuration from `path`, or from `./folio.toml` when present, or fall back to the
/// built-in defaults.
pub fn load(path: Option<&Path>) -> anyhow::Result<SiteConfig> {
    match path {
        Some(path) => read(path),
        None => match find_config_file() {
            Some(path) => {
                info!("Using config file: {}", path.display());
                read(&path)
            }
            None => Ok(SiteConfig::default()),
        },
    }
}

fn find_config_file() -> Option<PathBuf> {
    let path = PathBuf::from(DEFAULT_CONFIG_FILE);
    path.is_file().then_some(path)
}

fn read(path: &Path) -> anyhow::Result<SiteConfig> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    parse(&text).with_context(|| format!("invalid config file {}", path.display()))
}

pub fn parse(text: &str) -> anyhow::Result<SiteConfig> {
    Ok(toml::from_str(text)?)
}
