// ABOUTME: Template context for sheet rendering
// ABOUTME: Exposes every fragment at the top level next to build information

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::error::{Result, TemplateError};
use crate::sheet::Fragments;

/// Name under which build information is exposed to templates
pub const BUILD_KEY: &str = "build";

#[derive(Debug, Clone, Serialize)]
pub struct TemplateContext {
    #[serde(flatten)]
    pub fragments: Fragments,
    pub build: BuildInfo,
}

#[derive(Debug, Clone, Serialize)]
pub struct BuildInfo {
    pub generator: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
}

impl TemplateContext {
    pub fn new(fragments: Fragments) -> Self {
        Self {
            fragments,
            build: BuildInfo::default(),
        }
    }

    /// Add or replace a fragment
    pub fn set_fragment(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fragments.insert(name, value);
    }

    /// Whether the name resolves to something in this context
    pub fn contains(&self, name: &str) -> bool {
        name == BUILD_KEY || self.fragments.contains(name)
    }

    /// Convert context to JSON for handlebars rendering
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(TemplateError::JsonError)
    }
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self {
            generator: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_json_conversion() {
        let mut fragments = Fragments::default();
        fragments.insert("reputation_rows", "<tr></tr>");
        let context = TemplateContext::new(fragments);
        let json = context.to_json().unwrap();

        assert!(json.is_object());
        assert_eq!(json["reputation_rows"], "<tr></tr>");
        assert_eq!(json["build"]["version"], env!("CARGO_PKG_VERSION"));
        assert!(json["build"]["timestamp"].is_string());
    }

    #[test]
    fn test_set_fragment() {
        let mut context = TemplateContext::new(Fragments::default());
        assert!(!context.contains("documentation"));
        context.set_fragment("documentation", "<p>docs</p>");
        assert!(context.contains("documentation"));
        assert!(context.contains(BUILD_KEY));
    }
}
