// ABOUTME: Configuration management for the arm5-sheet application
// ABOUTME: Handles loading and merging configuration from files and environment variables

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_template")]
    pub template: PathBuf,

    #[serde(default = "default_documentation")]
    pub documentation: Option<PathBuf>,

    #[serde(default)]
    pub output: Option<PathBuf>,

    #[serde(default)]
    pub strict_mode: bool,

    #[serde(default)]
    pub fragments: HashMap<String, String>,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: String,
}

fn default_template() -> PathBuf {
    PathBuf::from("template.html")
}

fn default_documentation() -> Option<PathBuf> {
    Some(PathBuf::from("documentation.md"))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            template: default_template(),
            documentation: default_documentation(),
            output: None,
            strict_mode: false,
            fragments: HashMap::new(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from file path or default locations
    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::find_config_file()?,
        };

        let mut config = if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path)?;
            serde_yaml::from_str(&contents)?
        } else {
            Config::default()
        };

        config.merge_env()?;
        Ok(config)
    }

    /// Find configuration file in standard locations
    fn find_config_file() -> Result<PathBuf> {
        let possible_paths = vec![
            PathBuf::from("arm5-sheet.yaml"),
            PathBuf::from("arm5-sheet.yml"),
            PathBuf::from(".arm5-sheet.yaml"),
            PathBuf::from(".arm5-sheet.yml"),
        ];

        for path in possible_paths {
            if path.exists() {
                return Ok(path);
            }
        }

        if let Some(home_dir) = dirs::home_dir() {
            let home_config = home_dir.join(".arm5-sheet").join("config.yaml");
            if home_config.exists() {
                return Ok(home_config);
            }
        }

        // Return default path (may not exist)
        Ok(PathBuf::from("arm5-sheet.yaml"))
    }

    /// Merge environment variables into configuration
    fn merge_env(&mut self) -> Result<()> {
        if let Ok(template) = std::env::var("ARM5_SHEET_TEMPLATE") {
            self.template = PathBuf::from(template);
        }
        if let Ok(documentation) = std::env::var("ARM5_SHEET_DOCUMENTATION") {
            self.documentation = if documentation.is_empty() {
                None
            } else {
                Some(PathBuf::from(documentation))
            };
        }
        if let Ok(output) = std::env::var("ARM5_SHEET_OUTPUT") {
            self.output = Some(PathBuf::from(output));
        }
        if let Ok(strict) = std::env::var("ARM5_SHEET_STRICT") {
            self.strict_mode = parse_strict(&strict)?;
        }

        // Logging configuration
        if let Ok(level) = std::env::var("ARM5_SHEET_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("ARM5_SHEET_LOG_FORMAT") {
            self.logging.format = format;
        }

        Ok(())
    }
}

/// Read an `ARM5_SHEET_STRICT` value: true/false, yes/no, on/off or 1/0
fn parse_strict(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(anyhow::anyhow!(
            "Invalid ARM5_SHEET_STRICT value '{}': expected true/false or 1/0",
            value
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.template, PathBuf::from("template.html"));
        assert_eq!(config.documentation, Some(PathBuf::from("documentation.md")));
        assert!(!config.strict_mode);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_config_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("arm5-sheet.yaml");

        let config_content = r#"
template: sheet/template.html
output: build/arm5.html
strict_mode: true
fragments:
  sheet_version: "2.3"
logging:
  level: debug
  format: compact
"#;
        fs::write(&config_path, config_content).unwrap();

        let config = Config::load(Some(config_path)).unwrap();
        assert_eq!(config.template, PathBuf::from("sheet/template.html"));
        assert_eq!(config.output, Some(PathBuf::from("build/arm5.html")));
        assert_eq!(config.documentation, Some(PathBuf::from("documentation.md")));
        assert!(config.strict_mode);
        assert_eq!(config.fragments.get("sheet_version"), Some(&"2.3".to_string()));
        assert_eq!(config.logging.format, "compact");
    }

    #[test]
    fn test_parse_strict_values() {
        assert!(parse_strict("1").unwrap());
        assert!(parse_strict("TRUE").unwrap());
        assert!(parse_strict(" yes ").unwrap());
        assert!(!parse_strict("0").unwrap());
        assert!(!parse_strict("false").unwrap());

        let err = parse_strict("maybe").unwrap_err();
        assert!(err.to_string().contains("ARM5_SHEET_STRICT"));
    }

    #[test]
    fn test_missing_config_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config = Config::load(Some(temp_dir.path().join("absent.yaml"))).unwrap();
        assert_eq!(config.template, PathBuf::from("template.html"));
    }
}
