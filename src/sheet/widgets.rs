// ABOUTME: Small reusable HTML widgets of the sheet
// ABOUTME: Experience inputs for arts and abilities, and dismissable alert banners

use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::debug;

use super::error::{Result, SheetError};

/// Attribute suffixes of the three experience inputs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XpSuffixes {
    pub exp: String,
    pub advancement: String,
    pub total: String,
}

impl Default for XpSuffixes {
    fn default() -> Self {
        Self {
            exp: "_exp".to_string(),
            advancement: "_advancementExp".to_string(),
            total: "_totalExp".to_string(),
        }
    }
}

/// Experience, advancement and total inputs of an art or ability
pub fn xp(name: &str, suffixes: &XpSuffixes) -> String {
    format!(
        r#"[<input type="text" class="sheet-number_3" name="attr_{name}{exp}" value="0"/>/<input type="text" class="sheet-number_3 advance" name="attr_{name}{adv}" value="0" readonly/>/<input type="text" class="sheet-number_3 total" name="attr_{name}{tot}" value="0" readonly/>]"#,
        name = name,
        exp = suffixes.exp,
        adv = suffixes.advancement,
        tot = suffixes.total,
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlertLevel {
    Info,
    #[default]
    Warning,
}

impl AlertLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertLevel::Info => "info",
            AlertLevel::Warning => "warning",
        }
    }

    /// Label shown in the banner heading
    pub fn title(&self) -> &'static str {
        match self {
            AlertLevel::Info => "Info",
            AlertLevel::Warning => "Warning",
        }
    }
}

impl FromStr for AlertLevel {
    type Err = SheetError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "info" => Ok(AlertLevel::Info),
            "warning" => Ok(AlertLevel::Warning),
            other => Err(SheetError::InvalidAlertLevel(other.to_string())),
        }
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Issues alert banners, numbering the ones rendered without an explicit id.
///
/// Banners are used to tell players about important changes in sheet updates;
/// the player can hide each one permanently, which is stored in the
/// `attr_alert-{id}` attribute. Explicit ids must not be numbers so they never
/// collide with the generated ones.
#[derive(Debug, Default)]
pub struct AlertRegistry {
    next_id: AtomicUsize,
}

impl AlertRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of ids handed out so far
    pub fn issued(&self) -> usize {
        self.next_id.load(Ordering::SeqCst)
    }

    /// Render a banner with the given title, text, level and optional id
    pub fn alert(&self, title: &str, text: &str, level: AlertLevel, id: Option<&str>) -> String {
        let id = match id {
            Some(id) => id.to_string(),
            None => self.next_id.fetch_add(1, Ordering::SeqCst).to_string(),
        };
        debug!("Rendering {} alert '{}' with id {}", level, title, id);

        format!(
            r#"<input type="hidden" class="sheet-alert-hidder" name="attr_alert-{id}" value="0"/>
<div class="sheet-alert sheet-alert-{level}">
    <div>
        <h3> {label} - {title}</h3>
        {text}
    </div>
    <label class="sheet-fakebutton">
        <input type="checkbox" name="attr_alert-{id}" value="1" /> ×
    </label>
</div>"#,
            id = id,
            level = level.as_str(),
            label = level.title(),
            title = title,
            text = text,
        )
    }

    /// Same as [`AlertRegistry::alert`] with the level given as text
    pub fn alert_with_level(
        &self,
        title: &str,
        text: &str,
        level: &str,
        id: Option<&str>,
    ) -> Result<String> {
        let level: AlertLevel = level.parse()?;
        Ok(self.alert(title, text, level, id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_xp_default_suffixes() {
        let html = xp("Creo", &XpSuffixes::default());
        assert!(html.starts_with('['));
        assert!(html.ends_with(']'));
        assert!(html.contains(r#"name="attr_Creo_exp" value="0"/>"#));
        assert!(html.contains(r#"class="sheet-number_3 advance" name="attr_Creo_advancementExp""#));
        assert!(html.contains(r#"class="sheet-number_3 total" name="attr_Creo_totalExp""#));
    }

    #[test]
    fn test_xp_custom_suffixes() {
        let suffixes = XpSuffixes {
            exp: "_xp".to_string(),
            ..XpSuffixes::default()
        };
        let html = xp("Ability", &suffixes);
        assert!(html.contains("attr_Ability_xp"));
        assert!(html.contains("attr_Ability_totalExp"));
    }

    #[test]
    fn test_alert_level_parsing() {
        assert_eq!("info".parse::<AlertLevel>().unwrap(), AlertLevel::Info);
        assert_eq!("warning".parse::<AlertLevel>().unwrap(), AlertLevel::Warning);

        let err = "error".parse::<AlertLevel>().unwrap_err();
        assert!(err.to_string().contains("Level must be among 'info', 'warning'"));
    }

    #[test]
    fn test_alert_numbering() {
        let registry = AlertRegistry::new();

        let first = registry.alert("A", "first", AlertLevel::Info, None);
        let named = registry.alert("B", "named", AlertLevel::Warning, Some("update-note"));
        let second = registry.alert("C", "second", AlertLevel::Warning, None);

        assert!(first.contains(r#"name="attr_alert-0""#));
        assert!(named.contains(r#"name="attr_alert-update-note""#));
        assert!(second.contains(r#"name="attr_alert-1""#));
        assert_eq!(registry.issued(), 2);
    }

    #[test]
    fn test_alert_markup() {
        let registry = AlertRegistry::new();
        let html = registry.alert("New version", "<p>Read me</p>", AlertLevel::Warning, None);

        assert!(html.contains(r#"<div class="sheet-alert sheet-alert-warning">"#));
        assert!(html.contains("<h3> Warning - New version</h3>"));
        assert!(html.contains("<p>Read me</p>"));
        assert!(html.contains(r#"<input type="checkbox" name="attr_alert-0" value="1" /> ×"#));
    }

    #[test]
    fn test_alert_with_invalid_level_keeps_counter() {
        let registry = AlertRegistry::new();
        assert!(registry.alert_with_level("T", "x", "danger", None).is_err());
        assert_eq!(registry.issued(), 0);
    }
}
