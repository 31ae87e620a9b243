// ABOUTME: Command line argument definitions and parsing using Clap
// ABOUTME: Defines the main CLI structure and subcommands for arm5-sheet

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "arm5-sheet")]
#[command(about = "Generates the Ars Magica 5th edition Roll20 character sheet from its template")]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Path to configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Disable colored output")]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render the sheet template with every generated fragment
    Build {
        #[arg(short, long, help = "Path to the sheet template")]
        template: Option<PathBuf>,

        #[arg(short, long, help = "Path to the markdown documentation")]
        documentation: Option<PathBuf>,

        #[arg(short, long, help = "Output file (stdout when omitted)")]
        output: Option<PathBuf>,

        #[arg(
            short = 's',
            long = "set",
            help = "Add or override a fragment (name=value)"
        )]
        fragments: Vec<String>,

        #[arg(long, help = "Fail on fragments missing from the context")]
        strict: bool,
    },

    /// Write every fragment as a JSON object
    Export {
        #[arg(short, long, help = "Path to the markdown documentation")]
        documentation: Option<PathBuf>,

        #[arg(short, long, help = "Output file (stdout when omitted)")]
        output: Option<PathBuf>,

        #[arg(
            short = 's',
            long = "set",
            help = "Add or override a fragment (name=value)"
        )]
        fragments: Vec<String>,
    },

    /// List the generated fragment names
    List {
        #[arg(short, long, help = "Path to the markdown documentation")]
        documentation: Option<PathBuf>,
    },

    /// Print a single fragment
    Show {
        #[arg(help = "Fragment name")]
        name: String,

        #[arg(short, long, help = "Path to the markdown documentation")]
        documentation: Option<PathBuf>,
    },

    /// Check the template syntax and the names it references
    Validate {
        #[arg(short, long, help = "Path to the sheet template")]
        template: Option<PathBuf>,
    },
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse fragment overrides from name=value format
    pub fn parse_fragments(
        fragments: &[String],
    ) -> anyhow::Result<std::collections::HashMap<String, String>> {
        let mut parsed = std::collections::HashMap::new();

        for fragment in fragments {
            if let Some((name, value)) = fragment.split_once('=') {
                parsed.insert(name.to_string(), value.to_string());
            } else {
                return Err(anyhow::anyhow!(
                    "Invalid fragment format '{}'. Expected 'name=value'",
                    fragment
                ));
            }
        }

        Ok(parsed)
    }
}
