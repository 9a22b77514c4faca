//! Project configuration schema for entigen.yaml
//!
//! Lets a project pin its generation options in a file instead of
//! repeating CLI flags on every run.

use crate::codegen::entity_generator::GeneratorConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Top-level project configuration from entigen.yaml
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProjectConfig {
    /// Path of the schema dump to read
    pub schema: String,

    /// Namespace for generated entities
    #[serde(default = "default_namespace")]
    pub namespace: String,

    /// Database name, empty for none
    #[serde(default)]
    pub db: String,

    /// Emit `__NAME = 'table.column'` constants
    #[serde(default = "default_true")]
    pub absolute_constants: bool,

    /// Backtick-quote names inside generated literals
    #[serde(default)]
    pub enquote_names: bool,

    /// Wipe the destination root before generating
    #[serde(default = "default_true")]
    pub force: bool,

    /// Directory the destination root is created under
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_namespace() -> String {
    "DbEntity".to_string()
}

fn default_true() -> bool {
    true
}

fn default_output_dir() -> String {
    ".".to_string()
}

impl ProjectConfig {
    /// Load project configuration from entigen.yaml
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read {}: {}", path.as_ref().display(), e))?;

        serde_yaml::from_str(&contents)
            .map_err(|e| format!("Failed to parse {}: {}", path.as_ref().display(), e))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.schema.is_empty() {
            return Err("schema is required".to_string());
        }
        Ok(())
    }

    /// Convert to GeneratorConfig for code generation
    pub fn to_generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            schema_path: self.schema.clone(),
            root_namespace: self.namespace.clone(),
            db_name: self.db.clone(),
            generate_absolute_constants: self.absolute_constants,
            enquote_names: self.enquote_names,
            force: self.force,
            output_base: PathBuf::from(&self.output_dir),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let yaml = r#"
schema: dumps/movies.sql
namespace: Movies
db: archive
absolute_constants: false
enquote_names: true
force: false
output_dir: generated
"#;

        let config: ProjectConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.schema, "dumps/movies.sql");
        assert_eq!(config.namespace, "Movies");
        assert_eq!(config.db, "archive");
        assert!(!config.absolute_constants);
        assert!(config.enquote_names);
        assert!(!config.force);
        assert_eq!(config.output_dir, "generated");
    }

    #[test]
    fn test_defaults_applied() {
        let config: ProjectConfig = serde_yaml::from_str("schema: schema.sql\n").unwrap();
        assert_eq!(config.namespace, "DbEntity");
        assert_eq!(config.db, "");
        assert!(config.absolute_constants);
        assert!(!config.enquote_names);
        assert!(config.force);
        assert_eq!(config.output_dir, ".");
    }

    #[test]
    fn test_validate_rejects_empty_schema() {
        let config: ProjectConfig = serde_yaml::from_str("schema: \"\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_to_generator_config() {
        let config: ProjectConfig =
            serde_yaml::from_str("schema: schema.sql\nnamespace: Shop\ndb: main\n").unwrap();
        let generator_config = config.to_generator_config();
        assert_eq!(generator_config.schema_path, "schema.sql");
        assert_eq!(generator_config.root_namespace, "Shop");
        assert_eq!(generator_config.db_name, "main");
        assert_eq!(generator_config.output_base, PathBuf::from("."));
    }

    #[test]
    fn test_from_file_missing() {
        let err = ProjectConfig::from_file("no-such-entigen.yaml").unwrap_err();
        assert!(err.contains("Failed to read"));
    }
}
