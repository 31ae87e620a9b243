// ABOUTME: Error types for template engine operations
// ABOUTME: Defines specific error types for sheet template compilation and rendering

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Template syntax error: {0}")]
    SyntaxError(String),

    #[error("Template references unknown names: {}", .0.join(", "))]
    UnknownReferences(Vec<String>),

    #[error("Engine setup error: {0}")]
    SetupError(String),

    #[error("Handlebars error: {0}")]
    HandlebarsError(#[from] handlebars::RenderError),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TemplateError>;
