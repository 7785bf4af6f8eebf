use std::path::Path;

use anyhow::Context;
use btc_ipld_types::Base;
use serde::{Deserialize, Serialize};

/// Multibase used when printing links in text output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LinkBase {
    #[default]
    Base58btc,
    Base32,
}

impl LinkBase {
    pub fn base(&self) -> Base {
        match self {
            Self::Base58btc => Base::Base58Btc,
            Self::Base32 => Base::Base32Lower,
        }
    }
}

/// Settings loaded from `--config <file>`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Multibase for CIDs in text output. JSON output always uses base58btc.
    pub link_base: LinkBase,
    /// Also print the display-order hash next to each link.
    pub display_hashes: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            link_base: LinkBase::Base58btc,
            display_hashes: true,
        }
    }
}

impl CliConfig {
    /// Read a TOML config file. Missing keys take their defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml_str(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
