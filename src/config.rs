//! Run configuration: which countries, where to write, which languages win.

use crate::extract::DEFAULT_LANGUAGE_PRIORITY;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Output path used when neither the CLI nor the config file names one.
pub const DEFAULT_OUTPUT: &str = "output/countries.xml";

/// Country list used by the CLI when nothing else is given.
pub const DEFAULT_COUNTRIES: &str = "india,japan,germany,france,brazil";

/// Settings shared by the extractor and the formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Language codes tried in order when picking the local name.
    pub language_priority: Vec<String>,
    /// Destination of the XML document.
    pub output: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            language_priority: DEFAULT_LANGUAGE_PRIORITY
                .iter()
                .map(|s| s.to_string())
                .collect(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

/// Contents of a JSON config file.
///
/// ```json
/// { "countries": ["india", "japan"], "output": "out/c.xml", "language_priority": ["jpn"] }
/// ```
/// Only `countries` is required.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub output: Option<PathBuf>,
    #[serde(default)]
    pub language_priority: Option<Vec<String>>,
}

impl ConfigFile {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let txt = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
        serde_json::from_str(&txt).with_context(|| format!("parse {}", path.display()))
    }

    /// Overlay the optional settings of this file onto `base`.
    pub fn apply(&self, mut base: GeneratorConfig) -> GeneratorConfig {
        if let Some(out) = &self.output {
            base.output = out.clone();
        }
        if let Some(langs) = &self.language_priority {
            base.language_priority = langs.clone();
        }
        base
    }
}

/// Split a comma-separated country list; entries are trimmed and lowercased,
/// empty entries dropped.
pub fn parse_country_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_lowercase())
        .filter(|x| !x.is_empty())
        .collect()
}
