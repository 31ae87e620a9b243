// ABOUTME: Template engine module for the sheet generator
// ABOUTME: Renders the sheet template with generated fragments and sheet helpers

pub mod context;
pub mod engine;
pub mod error;
pub mod helpers;

pub use context::{BuildInfo, TemplateContext};
pub use engine::TemplateEngine;
pub use error::{Result, TemplateError};
