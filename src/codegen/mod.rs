//! Code generation for database entity classes.
//!
//! This module turns a parsed schema description into one PHP entity class
//! file per table plus the shared abstract base class they all extend.

pub mod abstract_entity;
pub mod entity_generator;
pub mod fs_utils;
pub mod php_file;
pub mod project_config;
pub mod schema_loader;
pub mod utils;

// Re-export key types
pub use entity_generator::{EntityGenerator, GenerationSummary, GeneratorConfig};
pub use php_file::{PhpClass, PhpConstant, PhpFile, PhpMethod, PhpProperty};
pub use project_config::ProjectConfig;
pub use schema_loader::{load_tables_from_file, SchemaParser};

/// Generate all entity classes from an entigen.yaml configuration file
///
/// This is the main entry point for file-driven generation.
///
/// # Example
///
/// ```rust,no_run
/// fn main() {
///     entigen::codegen::generate_from_yaml("entigen.yaml")
///         .expect("Entity generation failed");
/// }
/// ```
pub fn generate_from_yaml(
    yaml_path: impl AsRef<std::path::Path>,
) -> Result<GenerationSummary, String> {
    println!(
        "📋 Loading configuration from {}...",
        yaml_path.as_ref().display()
    );

    let project_config = ProjectConfig::from_file(&yaml_path)?;
    project_config.validate()?;

    println!("  ✓ Configuration loaded: {}", project_config.schema);

    let generator =
        EntityGenerator::new(project_config.to_generator_config()).map_err(|e| e.to_string())?;
    let summary = generator
        .generate()
        .map_err(|e| format!("Entity generation failed: {}", e))?;

    println!("✨ Entity generation complete!");

    Ok(summary)
}
