//! # Entigen: Database Entity Class Generator
//!
//! Entigen reads a SQL schema dump (the `CREATE TABLE` statements of a
//! `mysqldump`-style export) and generates one entity class per table,
//! together with the abstract base class all entities extend.
//!
//! ## Features
//!
//! - **Schema parsing**: Line-oriented recognition of `CREATE TABLE` headers,
//!   backtick-quoted column definitions and statement terminators
//! - **Type inference**: SQL column types mapped onto string, integer, float
//!   and date-time properties
//! - **Entity emission**: Per-column name constants, typed properties and the
//!   mapping methods the shared base class drives
//! - **Project configuration**: Optional entigen.yaml pinning a project's
//!   generation options
//!
//! ## Example: schema input
//!
//! ```sql
//! CREATE TABLE `user` (
//!   `user_id` int(11) NOT NULL AUTO_INCREMENT,
//!   `name` varchar(100) NOT NULL,
//!   PRIMARY KEY (`user_id`)
//! ) ENGINE=InnoDB;
//! ```
//!
//! ## Example: running the generator
//!
//! ```rust,no_run
//! fn main() {
//!     let config = entigen::GeneratorConfig {
//!         schema_path: "schema.sql".to_string(),
//!         ..Default::default()
//!     };
//!     let generator = entigen::EntityGenerator::new(config).expect("invalid configuration");
//!     generator.generate().expect("generation failed");
//! }
//! ```

// Core schema model
pub mod table;

// Code generation framework
pub mod codegen;

// Re-export key types
pub use table::{infer_column_type, ColumnInfo, ColumnType, GeneratorError, TableDescriptor};

// Re-export codegen types
pub use codegen::{
    load_tables_from_file, EntityGenerator, GenerationSummary, GeneratorConfig, ProjectConfig,
    SchemaParser,
};
