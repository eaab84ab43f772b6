use crate::error::Result;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::debug;

pub const CONFIG_FILENAME: &str = "config.json";
pub const DEFAULT_SECTION: &str = "default";

/// Configuration for nota, stored as JSON in the config home (or given via `--config`).
///
/// Every top-level object other than `root` is an option section; `default` is the
/// section consulted when an option's own section lacks a field. Top-level keys that
/// hold anything but an object (e.g. `"version": 1`) are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NotaConfig {
    /// Global root directory for all notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<String>,

    #[serde(flatten, deserialize_with = "object_sections")]
    pub sections: BTreeMap<String, OptionSection>,
}

fn object_sections<'de, D>(
    deserializer: D,
) -> std::result::Result<BTreeMap<String, OptionSection>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
    let mut sections = BTreeMap::new();
    for (key, value) in raw {
        if !value.is_object() {
            debug!(%key, "ignoring non-object config key");
            continue;
        }
        let section = serde_json::from_value(value).map_err(serde::de::Error::custom)?;
        sections.insert(key, section);
    }
    Ok(sections)
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OptionSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directories: Option<DirEntry>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

/// A directory name or an arbitrarily nested group of them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum DirEntry {
    Leaf(String),
    Group(Vec<DirEntry>),
}

impl DirEntry {
    pub fn empty() -> Self {
        DirEntry::Group(Vec::new())
    }

    /// True when the entry holds no directory names at any depth.
    pub fn is_empty(&self) -> bool {
        match self {
            DirEntry::Leaf(_) => false,
            DirEntry::Group(items) => items.iter().all(DirEntry::is_empty),
        }
    }
}

impl From<&str> for DirEntry {
    fn from(value: &str) -> Self {
        DirEntry::Leaf(value.to_string())
    }
}

impl From<String> for DirEntry {
    fn from(value: String) -> Self {
        DirEntry::Leaf(value)
    }
}

impl<T: Into<DirEntry>> From<Vec<T>> for DirEntry {
    fn from(values: Vec<T>) -> Self {
        DirEntry::Group(values.into_iter().map(Into::into).collect())
    }
}

impl NotaConfig {
    /// Load the config document at `path`.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: NotaConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Write the config as pretty-printed JSON to `path`.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path.as_ref(), content)?;
        Ok(())
    }

    pub fn section(&self, option: &str) -> Option<&OptionSection> {
        self.sections.get(option)
    }

    pub fn default_section(&self) -> Option<&OptionSection> {
        self.sections.get(DEFAULT_SECTION)
    }
}
