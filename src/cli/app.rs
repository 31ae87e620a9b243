// ABOUTME: Main application orchestration for the arm5-sheet CLI
// ABOUTME: Coordinates between CLI arguments, configuration, and command execution

use anyhow::Result;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use super::commands;
use super::{Args, Commands, Config};

pub struct App {
    config: Config,
}

impl App {
    /// Create a new application instance
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Initialize logging based on configuration
    pub fn init_logging(&self, verbose: bool, no_color: bool) -> Result<()> {
        let log_level = if verbose {
            "debug"
        } else {
            self.config.logging.level.as_str()
        };

        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

        // Logs go to stderr so rendered output on stdout stays clean
        match self.config.logging.format.as_str() {
            "compact" => {
                tracing_subscriber::fmt()
                    .compact()
                    .with_env_filter(env_filter)
                    .with_ansi(!no_color)
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .init();
            }
            _ => {
                tracing_subscriber::fmt()
                    .with_env_filter(env_filter)
                    .with_ansi(!no_color)
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .init();
            }
        }

        debug!("Logging initialized with level: {}", log_level);
        Ok(())
    }

    /// Run the application with parsed arguments
    pub async fn run(&mut self, args: Args) -> Result<()> {
        self.init_logging(args.verbose, args.no_color)?;

        info!("Starting arm5-sheet v{}", env!("CARGO_PKG_VERSION"));
        debug!("Configuration loaded from: {:?}", args.config);

        match args.command {
            Commands::Build {
                template,
                documentation,
                output,
                fragments,
                strict,
            } => {
                let overrides = Args::parse_fragments(&fragments)?;
                commands::build_sheet(
                    template,
                    documentation,
                    output,
                    overrides,
                    strict,
                    &self.config,
                )
                .await
            }

            Commands::Export {
                documentation,
                output,
                fragments,
            } => {
                let overrides = Args::parse_fragments(&fragments)?;
                commands::export_fragments(documentation, output, overrides, &self.config).await
            }

            Commands::List { documentation } => {
                commands::list_fragments(documentation, &self.config).await
            }

            Commands::Show {
                name,
                documentation,
            } => commands::show_fragment(name, documentation, &self.config).await,

            Commands::Validate { template } => {
                commands::validate_template(template, &self.config).await
            }
        }
    }

    /// Create application from parsed command line arguments
    pub fn from_args(args: &Args) -> Result<Self> {
        let config = Config::load(args.config.clone())?;
        Ok(Self::new(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_app_creation() {
        let config = Config::default();
        let app = App::new(config);
        assert_eq!(app.config.logging.format, "pretty");
    }

    #[test]
    fn test_app_from_args_with_config_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("arm5-sheet.yaml");
        fs::write(
            &config_path,
            "template: custom.html\nlogging:\n  level: debug\n  format: compact\n",
        )
        .unwrap();

        let args = <Args as clap::Parser>::try_parse_from([
            "arm5-sheet",
            "--config",
            config_path.to_str().unwrap(),
            "list",
        ])
        .unwrap();

        let app = App::from_args(&args).unwrap();
        assert_eq!(app.config.template, std::path::PathBuf::from("custom.html"));
        assert_eq!(app.config.logging.level, "debug");
    }
}
