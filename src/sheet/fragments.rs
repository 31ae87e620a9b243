// ABOUTME: The dictionary of named sheet fragments
// ABOUTME: Gathers every generated row, option list, macro and stylesheet under its template name

use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, info};

use super::documentation::render_markdown;
use super::error::{Result, SheetError};
use super::{fatigue, rolls, rows, translations};

/// Banner placed at the top of generated files
pub const GENERATED_HEADER: &str =
    "<!-- This file is automatically generated from a template. Any change will be overwritten -->";

/// Named fragments, ordered by name
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Fragments {
    entries: BTreeMap<String, String>,
}

impl Fragments {
    /// Generate every fragment that does not depend on external files
    pub fn generate() -> Result<Self> {
        let mut fragments = Self::default();
        fragments.insert("header", GENERATED_HEADER);

        for (name, value) in rows::fragments()?
            .into_iter()
            .chain(rolls::fragments()?)
            .chain(fatigue::fragments()?)
        {
            fragments.insert(name, value);
        }

        let keys = translations::collect_keys(fragments.entries.values().map(String::as_str))?;
        debug!("Collected {} translation keys", keys.len());
        fragments.insert("translation_attrs", translations::translation_attrs(&keys));
        fragments.insert(
            "translation_attrs_setup",
            translations::translation_attrs_setup(&keys),
        );

        info!("Generated {} sheet fragments", fragments.len());
        Ok(fragments)
    }

    /// Add the rendered documentation tab
    pub fn with_documentation(mut self, markdown: &str) -> Self {
        self.insert("documentation", render_markdown(markdown));
        self
    }

    /// Add or replace a fragment
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(name.into(), value.into());
    }

    /// Look up a fragment by name
    pub fn get(&self, name: &str) -> Result<&str> {
        self.entries
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| SheetError::UnknownFragment(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the fragments as a JSON object
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(SheetError::JsonError)
    }

    /// Serialize the fragments as pretty-printed JSON text
    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(SheetError::JsonError)
    }
}
