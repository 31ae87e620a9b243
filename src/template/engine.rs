// ABOUTME: Main template engine implementation using Handlebars
// ABOUTME: Renders sheet templates with the fragment dictionary, and checks the names they reference

use handlebars::Handlebars;
use regex::Regex;
use serde_json::Value as JsonValue;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, warn};

use super::context::TemplateContext;
use super::error::{Result, TemplateError};
use super::helpers;
use crate::sheet::{AlertRegistry, Fragments};

/// Roll20 rolltemplate sections must sit inside raw blocks so their `{{...}}` survive
const RAW_BLOCK_PATTERN: &str = r"(?s)\{\{\{\{\s*raw\s*\}\}\}\}.*?\{\{\{\{\s*/raw\s*\}\}\}\}";
const TAG_PATTERN: &str = r"(\\)?\{\{\{?~?\s*([^}]*?)\s*~?\}?\}\}";

/// Keywords and literals that look like references but are not
const KEYWORDS: &[&str] = &["else", "this", "true", "false", "null", "undefined"];

/// Blocks whose body resolves names against the block's own value
const SCOPED_BLOCKS: &[&str] = &["each", "with"];

/// Helpers shipped with handlebars itself
const BUILTIN_HELPERS: &[&str] = &[
    "if", "unless", "each", "with", "lookup", "raw", "log", "eq", "ne", "gt", "gte", "lt", "lte",
    "and", "or", "not", "len",
];

#[derive(Clone)]
pub struct TemplateEngine {
    handlebars: Handlebars<'static>,
    alerts: Arc<AlertRegistry>,
}

impl TemplateEngine {
    /// Create a new template engine with all sheet helpers
    pub fn new() -> Result<Self> {
        Self::with_strict_mode(false)
    }

    /// Create an engine; in strict mode a missing fragment is a render error
    pub fn with_strict_mode(strict: bool) -> Result<Self> {
        let mut handlebars = Handlebars::new();

        handlebars.set_strict_mode(strict);
        handlebars.set_dev_mode(false);

        // Fragments are markup and macros, they must reach the sheet untouched
        handlebars.register_escape_fn(handlebars::no_escape);

        helpers::register_helpers(&mut handlebars)
            .map_err(|e| TemplateError::SetupError(e.to_string()))?;

        let alerts = Arc::new(AlertRegistry::new());
        helpers::register_alert_helper(&mut handlebars, Arc::clone(&alerts));

        debug!("Template engine ready (strict mode: {})", strict);
        Ok(Self { handlebars, alerts })
    }

    /// Registry numbering the alert banners rendered by this engine
    pub fn alerts(&self) -> &Arc<AlertRegistry> {
        &self.alerts
    }

    /// Render a template string with the given context
    pub fn render(&self, template: &str, context: &TemplateContext) -> Result<String> {
        let json_context = context.to_json()?;
        self.render_with_json(template, &json_context)
    }

    /// Render a template string with the fragments and default build information
    pub fn render_fragments(&self, template: &str, fragments: &Fragments) -> Result<String> {
        self.render(template, &TemplateContext::new(fragments.clone()))
    }

    /// Render a template string with JSON context
    pub fn render_with_json(&self, template: &str, context: &JsonValue) -> Result<String> {
        self.handlebars
            .render_template(template, context)
            .map_err(TemplateError::HandlebarsError)
    }

    /// Validate template syntax without rendering
    pub fn validate_template(&self, template: &str) -> Result<()> {
        match handlebars::Template::compile(template) {
            Ok(_) => Ok(()),
            Err(e) => Err(TemplateError::SyntaxError(e.to_string())),
        }
    }

    /// Check if a string contains template expressions
    pub fn has_templates(&self, text: &str) -> bool {
        text.contains("{{") && text.contains("}}")
    }

    /// Top-level names used by the template's expressions and helper arguments.
    ///
    /// Raw blocks, escaped braces, comments and partials are skipped, and so are
    /// the bodies of `#each` and `#with`, whose names belong to the block's value.
    pub fn referenced_names(&self, template: &str) -> Result<BTreeSet<String>> {
        let raw_blocks = Regex::new(RAW_BLOCK_PATTERN)
            .map_err(|e| TemplateError::SetupError(e.to_string()))?;
        let tags =
            Regex::new(TAG_PATTERN).map_err(|e| TemplateError::SetupError(e.to_string()))?;

        let stripped = raw_blocks.replace_all(template, "");
        let mut names = BTreeSet::new();
        // One entry per open block, true when it opens a nested scope
        let mut blocks: Vec<bool> = Vec::new();

        for tag in tags.captures_iter(&stripped) {
            if tag.get(1).is_some() {
                continue;
            }
            let body = &tag[2];
            if body.starts_with(['!', '>', '*']) {
                continue;
            }
            if body.starts_with('/') {
                blocks.pop();
                continue;
            }
            // Inverse sections and partial blocks open a block without adding names
            if let Some(rest) = body.strip_prefix('^').or_else(|| body.strip_prefix("#>")) {
                if !rest.trim().is_empty() {
                    blocks.push(false);
                }
                continue;
            }

            let (is_block, expression) = match body.strip_prefix('#') {
                Some(rest) => (true, rest),
                None => (false, body),
            };
            let tokens = expression_tokens(expression);
            let nested = blocks.iter().any(|scoped| *scoped);

            if is_block {
                let scoped = tokens
                    .first()
                    .map_or(false, |head| SCOPED_BLOCKS.contains(&head.as_str()));
                blocks.push(scoped);
            }
            if nested {
                continue;
            }

            let Some((head, arguments)) = tokens.split_first() else {
                continue;
            };
            if head == "else" {
                continue;
            }
            if !is_block {
                names.extend(reference_root(head));
            }
            for argument in arguments {
                let value = match argument.split_once('=') {
                    Some((_, value)) if !argument.starts_with(['"', '\'']) => value,
                    _ => argument.as_str(),
                };
                names.extend(reference_root(value));
            }
        }

        Ok(names)
    }

    /// Referenced names that are neither in the context nor a helper
    pub fn unknown_references(
        &self,
        template: &str,
        context: &TemplateContext,
    ) -> Result<Vec<String>> {
        let unknown: Vec<String> = self
            .referenced_names(template)?
            .into_iter()
            .filter(|name| !context.contains(name) && !Self::is_helper(name))
            .collect();

        if !unknown.is_empty() {
            warn!("Template references unknown names: {}", unknown.join(", "));
        }
        Ok(unknown)
    }

    fn is_helper(name: &str) -> bool {
        helpers::HELPER_NAMES.contains(&name) || BUILTIN_HELPERS.contains(&name)
    }

    /// Register a custom helper function
    pub fn register_helper<F>(&mut self, name: &str, helper: F) -> Result<()>
    where
        F: handlebars::HelperDef + Send + Sync + 'static,
    {
        self.handlebars.register_helper(name, Box::new(helper));
        Ok(())
    }
}

/// Split an expression on whitespace and parentheses, keeping quoted strings whole
fn expression_tokens(expression: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;

    for c in expression.chars() {
        match quote {
            Some(q) => {
                current.push(c);
                if c == q {
                    quote = None;
                }
            }
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                current.push(c);
            }
            None if c.is_whitespace() || c == '(' || c == ')' => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            None => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// The context name a path token starts from, if it is a plain reference
fn reference_root(token: &str) -> Option<String> {
    if token.starts_with(['"', '\'', '@', '.']) || token.parse::<f64>().is_ok() {
        return None;
    }
    let root = token.split(['.', '/']).next()?;
    let mut chars = root.chars();
    let valid = chars
        .next()
        .map_or(false, |c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    (valid && !KEYWORDS.contains(&root)).then(|| root.to_string())
}
