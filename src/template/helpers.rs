// ABOUTME: Handlebars helper functions for sheet template rendering
// ABOUTME: Exposes the xp inputs, alert banners, markdown, and small text helpers to templates

use chrono::Utc;
use handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, Output, RenderContext, RenderError,
};
use std::fmt::Write;
use std::sync::Arc;

use crate::sheet::{capitalize, render_markdown, xp, AlertRegistry, XpSuffixes};

/// Required string parameter at `index`
fn param_str<'a>(
    h: &'a Helper,
    index: usize,
    helper: &str,
    what: &str,
) -> Result<&'a str, RenderError> {
    h.param(index)
        .and_then(|v| v.value().as_str())
        .ok_or_else(|| RenderError::new(format!("{} helper requires {} parameter", helper, what)))
}

/// Optional string hash argument
fn hash_str<'a>(h: &'a Helper, key: &str) -> Option<&'a str> {
    h.hash_get(key).and_then(|v| v.value().as_str())
}

/// Xp helper - experience inputs of an art or ability
///
/// `{{xp "Creo"}}`, with optional `suffix`, `adv_suffix` and `tot_suffix` hash arguments.
pub fn xp_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let name = param_str(h, 0, "xp", "name")?;

    let mut suffixes = XpSuffixes::default();
    if let Some(suffix) = hash_str(h, "suffix") {
        suffixes.exp = suffix.to_string();
    }
    if let Some(suffix) = hash_str(h, "adv_suffix") {
        suffixes.advancement = suffix.to_string();
    }
    if let Some(suffix) = hash_str(h, "tot_suffix") {
        suffixes.total = suffix.to_string();
    }

    out.write(&xp(name, &suffixes))?;
    Ok(())
}

/// Markdown helper - renders a markdown string to HTML
pub fn markdown_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let input = param_str(h, 0, "markdown", "input")?;
    out.write(&render_markdown(input))?;
    Ok(())
}

/// Timestamp helper - formats current time with optional format string
pub fn timestamp_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let format = h
        .param(0)
        .and_then(|v| v.value().as_str())
        .unwrap_or("%Y-%m-%d %H:%M:%S");

    let mut formatted = String::new();
    write!(formatted, "{}", Utc::now().format(format))
        .map_err(|_| RenderError::new(format!("Invalid timestamp format '{}'", format)))?;

    out.write(&formatted)?;
    Ok(())
}

/// Uppercase helper
pub fn upper_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let input = param_str(h, 0, "upper", "input")?;
    out.write(&input.to_uppercase())?;
    Ok(())
}

/// Lowercase helper
pub fn lower_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let input = param_str(h, 0, "lower", "input")?;
    out.write(&input.to_lowercase())?;
    Ok(())
}

/// Capitalize helper - `strength` becomes `Strength`
pub fn capitalize_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let input = param_str(h, 0, "capitalize", "input")?;
    out.write(&capitalize(input))?;
    Ok(())
}

/// Join helper - joins array elements with separator
pub fn join_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let separator = h.param(0).and_then(|v| v.value().as_str()).unwrap_or(",");

    let array = h
        .param(1)
        .and_then(|v| v.value().as_array())
        .ok_or_else(|| RenderError::new("join helper requires array parameter"))?;

    let strings: Result<Vec<&str>, RenderError> = array
        .iter()
        .map(|v| {
            v.as_str()
                .ok_or_else(|| RenderError::new("Array elements must be strings"))
        })
        .collect();

    out.write(&strings?.join(separator))?;
    Ok(())
}

/// Default helper - provides default value if variable is empty
pub fn default_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _rc: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let value = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");
    let default_value = param_str(h, 1, "default", "default value")?;

    out.write(if value.is_empty() { default_value } else { value })?;
    Ok(())
}

/// Alert helper - dismissable banner numbered by the shared registry
///
/// `{{alert "Title" "Text" level="info" id="name"}}`; `level` defaults to `warning`.
pub struct AlertHelper {
    alerts: Arc<AlertRegistry>,
}

impl AlertHelper {
    pub fn new(alerts: Arc<AlertRegistry>) -> Self {
        Self { alerts }
    }
}

impl HelperDef for AlertHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'reg, 'rc>,
        _: &'reg Handlebars<'reg>,
        _: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let title = param_str(h, 0, "alert", "title")?;
        let text = param_str(h, 1, "alert", "text")?;
        let level = hash_str(h, "level").unwrap_or("warning");
        let id = h.hash_get("id").map(|v| match v.value().as_str() {
            Some(s) => s.to_string(),
            None => v.value().to_string(),
        });

        let html = self
            .alerts
            .alert_with_level(title, text, level, id.as_deref())
            .map_err(|e| RenderError::new(e.to_string()))?;
        out.write(&html)?;
        Ok(())
    }
}

/// Register all stateless helpers with a Handlebars instance
pub fn register_helpers(handlebars: &mut Handlebars) -> Result<(), Box<dyn std::error::Error>> {
    handlebars.register_helper("xp", Box::new(xp_helper));
    handlebars.register_helper("markdown", Box::new(markdown_helper));
    handlebars.register_helper("timestamp", Box::new(timestamp_helper));
    handlebars.register_helper("upper", Box::new(upper_helper));
    handlebars.register_helper("lower", Box::new(lower_helper));
    handlebars.register_helper("capitalize", Box::new(capitalize_helper));
    handlebars.register_helper("join", Box::new(join_helper));
    handlebars.register_helper("default", Box::new(default_helper));
    Ok(())
}

/// Register the alert helper backed by the given registry
pub fn register_alert_helper(handlebars: &mut Handlebars, alerts: Arc<AlertRegistry>) {
    handlebars.register_helper("alert", Box::new(AlertHelper::new(alerts)));
}

/// Names of every helper a sheet template may call
pub const HELPER_NAMES: &[&str] = &[
    "xp",
    "markdown",
    "timestamp",
    "upper",
    "lower",
    "capitalize",
    "join",
    "default",
    "alert",
];

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_handlebars() -> (Handlebars<'static>, Arc<AlertRegistry>) {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(handlebars::no_escape);
        register_helpers(&mut handlebars).unwrap();
        let alerts = Arc::new(AlertRegistry::new());
        register_alert_helper(&mut handlebars, Arc::clone(&alerts));
        (handlebars, alerts)
    }

    #[test]
    fn test_xp_helper() {
        let (handlebars, _) = create_test_handlebars();
        let result = handlebars
            .render_template("{{xp \"Magic_Theory\"}}", &serde_json::json!({}))
            .unwrap();
        assert!(result.contains(r#"name="attr_Magic_Theory_exp""#));
        assert!(result.contains(r#"name="attr_Magic_Theory_totalExp""#));

        let custom = handlebars
            .render_template(
                "{{xp \"Ability\" suffix=\"_xp\" tot_suffix=\"_tot\"}}",
                &serde_json::json!({}),
            )
            .unwrap();
        assert!(custom.contains("attr_Ability_xp"));
        assert!(custom.contains("attr_Ability_advancementExp"));
        assert!(custom.contains("attr_Ability_tot"));
    }

    #[test]
    fn test_alert_helper_numbering() {
        let (handlebars, alerts) = create_test_handlebars();
        let result = handlebars
            .render_template(
                "{{alert \"One\" \"first\"}}{{alert \"Two\" \"second\" level=\"info\"}}{{alert \"Three\" \"named\" id=\"v2\"}}",
                &serde_json::json!({}),
            )
            .unwrap();

        assert!(result.contains("attr_alert-0"));
        assert!(result.contains("<h3> Warning - One</h3>"));
        assert!(result.contains("attr_alert-1"));
        assert!(result.contains("<h3> Info - Two</h3>"));
        assert!(result.contains("attr_alert-v2"));
        assert_eq!(alerts.issued(), 2);
    }

    #[test]
    fn test_alert_helper_invalid_level() {
        let (handlebars, _) = create_test_handlebars();
        let result = handlebars.render_template(
            "{{alert \"Title\" \"Text\" level=\"danger\"}}",
            &serde_json::json!({}),
        );
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Level must be among"));
    }

    #[test]
    fn test_timestamp_helper() {
        let (handlebars, _) = create_test_handlebars();
        let year = handlebars
            .render_template("{{timestamp \"%Y\"}}", &serde_json::json!({}))
            .unwrap();
        assert_eq!(year.len(), 4);
        assert!(year.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_timestamp_helper_invalid_format() {
        let (handlebars, _) = create_test_handlebars();
        let result = handlebars.render_template("{{timestamp \"%Q\"}}", &serde_json::json!({}));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid timestamp format"));
    }

    #[test]
    fn test_markdown_helper() {
        let (handlebars, _) = create_test_handlebars();
        let result = handlebars
            .render_template("{{markdown \"# Title\"}}", &serde_json::json!({}))
            .unwrap();
        assert_eq!(result.trim(), r#"<h1 class="sheet-heading_label">Title</h1>"#);
    }

    #[test]
    fn test_case_helpers() {
        let (handlebars, _) = create_test_handlebars();
        let upper = handlebars
            .render_template("{{upper \"creo\"}}", &serde_json::json!({}))
            .unwrap();
        assert_eq!(upper, "CREO");

        let capitalized = handlebars
            .render_template("{{capitalize \"iNTELLEGO\"}}", &serde_json::json!({}))
            .unwrap();
        assert_eq!(capitalized, "Intellego");

        let lower = handlebars
            .render_template("{{lower \"VIM\"}}", &serde_json::json!({}))
            .unwrap();
        assert_eq!(lower, "vim");
    }

    #[test]
    fn test_join_and_default_helpers() {
        let (handlebars, _) = create_test_handlebars();
        let joined = handlebars
            .render_template(
                "{{join \", \" arts}}",
                &serde_json::json!({"arts": ["creo", "rego"]}),
            )
            .unwrap();
        assert_eq!(joined, "creo, rego");

        let fallback = handlebars
            .render_template("{{default \"\" \"fallback\"}}", &serde_json::json!({}))
            .unwrap();
        assert_eq!(fallback, "fallback");
    }

    #[test]
    fn test_timestamp_helper_year_length() {
        let (handlebars, _) = create_test_handlebars();
        let year = handlebars
            .render_template("{{timestamp \"%Y\"}}", &serde_json::json!({}))
            .unwrap();
        assert_eq!(year.len(), 4);
    }
}
