// ABOUTME: Main library module for the arm5-sheet generator
// ABOUTME: Exports the fragment generators, the template engine, and the CLI

pub mod cli;
pub mod sheet;
pub mod template;

// Re-export commonly used types
pub use cli::{App, Args, Config};
pub use sheet::{AlertLevel, AlertRegistry, Fragments, SheetError};
pub use template::{TemplateContext, TemplateEngine, TemplateError};

// Error handling
pub type Result<T> = anyhow::Result<T>;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
