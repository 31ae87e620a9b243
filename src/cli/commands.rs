// ABOUTME: Command implementations for the arm5-sheet CLI
// ABOUTME: Handles execution of the build, export, list, show, and validate commands

use anyhow::Result;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, warn};

use super::config::Config;
use crate::sheet::Fragments;
use crate::template::{TemplateContext, TemplateEngine, TemplateError};

/// Where the documentation markdown comes from
struct DocumentationSource {
    path: PathBuf,
    required: bool,
}

impl DocumentationSource {
    /// A path given on the command line must exist, the configured one may not
    fn resolve(cli_path: Option<PathBuf>, config: &Config) -> Option<Self> {
        match cli_path {
            Some(path) => Some(Self {
                path,
                required: true,
            }),
            None => config.documentation.clone().map(|path| Self {
                path,
                required: false,
            }),
        }
    }
}

/// Generate every fragment, the documentation and the configured overrides
async fn load_fragments(
    documentation: Option<PathBuf>,
    overrides: &HashMap<String, String>,
    config: &Config,
) -> Result<Fragments> {
    let mut fragments = Fragments::generate()
        .map_err(|e| anyhow::anyhow!("Failed to generate sheet fragments: {}", e))?;

    if let Some(source) = DocumentationSource::resolve(documentation, config) {
        if source.required || source.path.exists() {
            let markdown = fs::read_to_string(&source.path).await.map_err(|e| {
                anyhow::anyhow!(
                    "Failed to read documentation '{}': {}",
                    source.path.display(),
                    e
                )
            })?;
            info!("Loaded documentation: {}", source.path.display());
            fragments = fragments.with_documentation(&markdown);
        } else {
            warn!(
                "Documentation file not found, skipping: {}",
                source.path.display()
            );
        }
    }

    for (name, value) in config.fragments.iter().chain(overrides) {
        debug!("Overriding fragment '{}'", name);
        fragments.insert(name.clone(), value.clone());
    }

    Ok(fragments)
}

/// Write to the file, creating its directory, or print to stdout
async fn write_output(output: Option<PathBuf>, content: &str) -> Result<()> {
    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() && !parent.exists() {
                    fs::create_dir_all(parent).await?;
                }
            }
            fs::write(&path, content).await.map_err(|e| {
                anyhow::anyhow!("Failed to write output file '{}': {}", path.display(), e)
            })?;
            info!("Output written to: {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

async fn read_template(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read template '{}': {}", path.display(), e))
}

/// Render the sheet template with every fragment
pub async fn build_sheet(
    template: Option<PathBuf>,
    documentation: Option<PathBuf>,
    output: Option<PathBuf>,
    overrides: HashMap<String, String>,
    strict: bool,
    config: &Config,
) -> Result<()> {
    let template_path = template.unwrap_or_else(|| config.template.clone());
    info!("Building sheet from template: {}", template_path.display());

    let template_source = read_template(&template_path).await?;
    let fragments = load_fragments(documentation, &overrides, config).await?;

    let engine = TemplateEngine::with_strict_mode(strict || config.strict_mode)?;
    let rendered = engine
        .render(&template_source, &TemplateContext::new(fragments))
        .map_err(|e| anyhow::anyhow!("Failed to render '{}': {}", template_path.display(), e))?;

    info!(
        "Rendered {} bytes with {} numbered alerts",
        rendered.len(),
        engine.alerts().issued()
    );

    write_output(output.or_else(|| config.output.clone()), &rendered).await
}

/// Write every fragment as a JSON object
pub async fn export_fragments(
    documentation: Option<PathBuf>,
    output: Option<PathBuf>,
    overrides: HashMap<String, String>,
    config: &Config,
) -> Result<()> {
    let fragments = load_fragments(documentation, &overrides, config).await?;
    let json = fragments.to_json_string()?;
    info!("Exporting {} fragments", fragments.len());
    write_output(output, &json).await
}

/// Print the fragment names with their sizes
pub async fn list_fragments(documentation: Option<PathBuf>, config: &Config) -> Result<()> {
    let fragments = load_fragments(documentation, &HashMap::new(), config).await?;

    let width = fragments.names().map(str::len).max().unwrap_or(0);
    for (name, value) in fragments.iter() {
        println!("{:<width$}  {:>6} bytes", name, value.len(), width = width);
    }
    println!("{} fragments", fragments.len());

    Ok(())
}

/// Print a single fragment
pub async fn show_fragment(
    name: String,
    documentation: Option<PathBuf>,
    config: &Config,
) -> Result<()> {
    let fragments = load_fragments(documentation, &HashMap::new(), config).await?;
    let value = fragments.get(&name)?;
    println!("{}", value);
    Ok(())
}

/// Check the template syntax and that every name it uses resolves
pub async fn validate_template(template: Option<PathBuf>, config: &Config) -> Result<()> {
    let template_path = template.unwrap_or_else(|| config.template.clone());
    info!("Validating template: {}", template_path.display());

    let template_source = read_template(&template_path).await?;
    let engine = TemplateEngine::new()?;
    engine
        .validate_template(&template_source)
        .map_err(|e| anyhow::anyhow!("Template validation failed: {}", e))?;

    // Documentation and overrides may be missing at validation time; they are still known names
    let mut context = TemplateContext::new(Fragments::generate()?);
    context.set_fragment("documentation", "");
    for name in config.fragments.keys() {
        context.set_fragment(name.clone(), "");
    }

    let referenced = engine.referenced_names(&template_source)?;
    let unknown = engine.unknown_references(&template_source, &context)?;
    if !unknown.is_empty() {
        return Err(TemplateError::UnknownReferences(unknown).into());
    }

    println!("✓ Template '{}' is valid", template_path.display());
    println!("  Referenced names: {}", referenced.len());

    info!("Template validation completed successfully");
    Ok(())
}
