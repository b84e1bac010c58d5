use anyhow::{Context, Result};
use pngprompt_chunks::ReaderConfig;
use pngprompt_extract::ExtractorConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Contents of the optional `--config` TOML file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub reader: ReaderConfig,
    pub extractor: ExtractorConfig,
}

impl Settings {
    /// Load settings from `path`, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("Invalid config {}", path.display()))
    }

    fn parse(raw: &str) -> Result<Self> {
        let settings: Self = toml::from_str(raw).context("parse TOML")?;
        settings.reader.validate().map_err(anyhow::Error::msg)?;
        settings.extractor.validate().map_err(anyhow::Error::msg)?;
        Ok(settings)
    }
}
