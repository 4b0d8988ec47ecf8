//! Editable copy shown on assembled reports.

mod reference;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One block of report copy.
///
/// `items` holds the trait list, reflection questions, business ideas or
/// action steps depending on the table the entry lives in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContentEntry {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub items: Vec<String>,
}

/// All report copy, keyed by the stable strings carried on scoring results
/// and selections ("Tiger", "High", "Money", "Digital", ...).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ContentCatalog {
    #[serde(default)]
    pub archetypes: BTreeMap<String, ContentEntry>,
    #[serde(default)]
    pub risk_levels: BTreeMap<String, ContentEntry>,
    #[serde(default)]
    pub reward_levels: BTreeMap<String, ContentEntry>,
    #[serde(default)]
    pub drivers: BTreeMap<String, ContentEntry>,
    #[serde(default)]
    pub areas: BTreeMap<String, ContentEntry>,
    #[serde(default)]
    pub strategies: BTreeMap<String, ContentEntry>,
}

/// A catalog entry resolved for a specific key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentSection {
    pub key: String,
    pub title: String,
    pub description: String,
    pub items: Vec<String>,
}

impl ContentSection {
    /// Look `key` up in `table`. Missing copy degrades to the key as title.
    pub fn resolve(table: &BTreeMap<String, ContentEntry>, key: &str) -> Self {
        match table.get(key) {
            Some(entry) => Self {
                key: key.to_string(),
                title: if entry.title.is_empty() {
                    key.to_string()
                } else {
                    entry.title.clone()
                },
                description: entry.description.clone(),
                items: entry.items.clone(),
            },
            None => Self {
                key: key.to_string(),
                title: key.to_string(),
                description: String::new(),
                items: Vec::new(),
            },
        }
    }
}
