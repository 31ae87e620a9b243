// ABOUTME: Translated label attributes referenced by roll macros
// ABOUTME: Collects the i18n keys, renders their hidden inputs and the sheet worker filling them

use regex::Regex;
use std::collections::BTreeSet;

use super::data::{CHARACTERISTICS, FORMS, TECHNIQUES};
use super::error::Result;

const I18N_ATTRIBUTE_PATTERN: &str = r"@\{([A-Za-z0-9_-]+?)_i18n\}";

/// Every key used as `@{key_i18n}` in the given texts, plus the domain labels
pub fn collect_keys<'a, I>(texts: I) -> Result<BTreeSet<String>>
where
    I: IntoIterator<Item = &'a str>,
{
    let pattern = Regex::new(I18N_ATTRIBUTE_PATTERN)?;

    let mut keys: BTreeSet<String> = CHARACTERISTICS
        .iter()
        .chain(TECHNIQUES)
        .chain(FORMS)
        .map(|label| label.to_string())
        .collect();

    for text in texts {
        keys.extend(pattern.captures_iter(text).map(|c| c[1].to_string()));
    }

    Ok(keys)
}

/// Hidden inputs holding the translated label of each key
pub fn translation_attrs(keys: &BTreeSet<String>) -> String {
    keys.iter()
        .map(|key| format!(r#"<input type="hidden" name="attr_{key}_i18n" value="{key}"/>"#))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Sheet worker code filling the hidden inputs when the sheet opens.
///
/// Meant to be placed inside the sheet's `text/worker` script block.
pub fn translation_attrs_setup(keys: &BTreeSet<String>) -> String {
    let assignments: Vec<String> = keys
        .iter()
        .map(|key| format!(r#"        "{key}_i18n": getTranslationByKey("{key}"),"#))
        .collect();

    format!(
        "on(\"sheet:opened\", function() {{\n    setAttrs({{\n{}\n    }});\n}});",
        assignments.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_keys() {
        let keys = collect_keys([
            "[[ @{simple-die} ]] [@{fatigue_i18n}] + [@{botch_num_i18n}]",
            "@{sys_at}@{character_name}@{sys_pipe}@{Ability_CharacName}_i18n@{sys_rbk}",
        ])
        .unwrap();

        assert!(keys.contains("fatigue"));
        assert!(keys.contains("botch_num"));
        assert!(keys.contains("strength"));
        assert!(keys.contains("vim"));
        assert!(!keys.contains("Ability_CharacName"));
        assert_eq!(
            keys.len(),
            2 + CHARACTERISTICS.len() + TECHNIQUES.len() + FORMS.len()
        );
    }

    #[test]
    fn test_translation_attrs() {
        let keys: BTreeSet<String> = ["aura", "wounds"].iter().map(|k| k.to_string()).collect();
        assert_eq!(
            translation_attrs(&keys),
            "<input type=\"hidden\" name=\"attr_aura_i18n\" value=\"aura\"/>\n<input type=\"hidden\" name=\"attr_wounds_i18n\" value=\"wounds\"/>"
        );
    }

    #[test]
    fn test_translation_attrs_setup() {
        let keys: BTreeSet<String> = ["aura"].iter().map(|k| k.to_string()).collect();
        let script = translation_attrs_setup(&keys);
        assert!(script.starts_with("on(\"sheet:opened\", function() {"));
        assert!(script.contains(r#""aura_i18n": getTranslationByKey("aura"),"#));
        assert!(script.ends_with("});"));
    }
}
