// ABOUTME: Common utilities and helpers for integration tests
// ABOUTME: Provides scratch directories with sheet templates and documentation files

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A small but complete sheet template using fragments, helpers and a raw rolltemplate
pub const SHEET_TEMPLATE: &str = r#"{{header}}
{{alert "New version" "<p>Arts now show puissance.</p>" level="info"}}
<div class="sheet-tab-characteristics">
<table>
{{characteristic_rows}}
</table>
<select name="attr_Ability_CharacName">{{characteristic_name_options}}</select>
</div>
<div class="sheet-tab-arts">
<table>{{technique_definitions}}</table>
<table>{{form_definitions_1}}</table>
<table>{{form_definitions_2}}</table>
<input type="text" name="attr_Magic_Theory_Score" value="0"/>{{xp "Magic_Theory"}}
</div>
<div class="sheet-tab-spells">
<button type="roll" name="roll_spell_simple" value="{{spell_roll_simple}}"></button>
<button type="roll" name="roll_spell_stress" value="{{spell_roll_stress}}"></button>
</div>
<div class="sheet-tab-fatigue">
<select name="attr_fatigue_proxy">{{fatigue_levels_options}}</select>
<table>{{additional_fatigue_levels}}</table>
</div>
<div class="sheet-tab-documentation">{{documentation}}</div>
{{translation_attrs}}
{{{{raw}}}}<rolltemplate class="sheet-rolltemplate-generic"><h3>{{Banner}}</h3>{{Result}}</rolltemplate>{{{{/raw}}}}
<script type="text/worker">
{{translation_attrs_setup}}
</script>
<style>
{{fatigue_level_css}}
</style>"#;

pub const DOCUMENTATION: &str = "# Ars Magica 5th edition sheet\n\nRoll with the buttons.\n\n## Spells\n\nUse the *spell* tab.\n";

pub struct TestEnvironment {
    pub temp_dir: TempDir,
}

impl TestEnvironment {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn output_file(&self, name: &str) -> PathBuf {
        self.path().join("build").join(name)
    }

    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.path().join(name);
        std::fs::write(&path, content).expect("Failed to write test file");
        path
    }

    pub fn create_template(&self) -> PathBuf {
        self.write_file("template.html", SHEET_TEMPLATE)
    }

    pub fn create_documentation(&self) -> PathBuf {
        self.write_file("documentation.md", DOCUMENTATION)
    }

    /// Config file pointing at nothing, so tests never pick up a developer's config
    pub fn create_config(&self) -> PathBuf {
        self.write_file("arm5-sheet.yaml", "documentation: null\nlogging:\n  level: warn\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_creation() {
        let env = TestEnvironment::new();
        assert!(env.path().exists());

        let template = env.create_template();
        assert!(template.exists());
        assert!(env.output_file("sheet.html").ends_with("build/sheet.html"));
    }
}
