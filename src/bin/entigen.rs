//! entigen CLI - generate database entity classes from a SQL schema dump
//!
//! This CLI tool parses the `CREATE TABLE` statements of a schema dump and
//! writes one entity class file per table.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "entigen")]
#[command(version, about = "Generate database entity classes from a SQL schema dump", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate entity classes from a schema dump
    Generate {
        /// Path to the SQL schema dump
        #[arg(short, long)]
        schema: PathBuf,

        /// Namespace for generated entities, also names the output directory
        #[arg(short, long, default_value = "DbEntity")]
        namespace: String,

        /// Database name, added as sub-namespace and subdirectory
        #[arg(short, long, default_value = "")]
        db: String,

        /// Emit `__NAME = 'table.column'` constants
        #[arg(short, long, default_value_t = true, action = clap::ArgAction::Set)]
        absolute: bool,

        /// Backtick-quote table and column names in generated literals
        #[arg(short, long)]
        enquote: bool,

        /// Wipe the output directory before generating
        #[arg(short, long, default_value_t = true, action = clap::ArgAction::Set)]
        force: bool,
    },

    /// Parse a schema dump and report its tables without generating code
    Validate {
        /// Path to the SQL schema dump
        #[arg(short, long)]
        schema: PathBuf,
    },

    /// Generate entity classes from an entigen.yaml project configuration
    BuildFromConfig {
        /// Path to entigen.yaml configuration file
        #[arg(short, long, default_value = "entigen.yaml")]
        config: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            schema,
            namespace,
            db,
            absolute,
            enquote,
            force,
        } => generate_entities(schema, namespace, db, absolute, enquote, force),
        Commands::Validate { schema } => validate_schema(schema),
        Commands::BuildFromConfig { config } => build_from_config(config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Generate entity classes from a schema dump
fn generate_entities(
    schema: PathBuf,
    namespace: String,
    db: String,
    absolute: bool,
    enquote: bool,
    force: bool,
) -> Result<(), String> {
    println!("🔧 Generating entity classes from {}...", schema.display());

    let config = entigen::GeneratorConfig {
        schema_path: schema
            .to_str()
            .ok_or("Invalid schema path")?
            .to_string(),
        root_namespace: namespace,
        db_name: db,
        generate_absolute_constants: absolute,
        enquote_names: enquote,
        force,
        ..Default::default()
    };

    let generator = entigen::EntityGenerator::new(config).map_err(|e| e.to_string())?;
    let summary = generator.generate().map_err(|e| e.to_string())?;

    println!("  ✓ Generated {} entity classes", summary.entity_files.len());
    for table in &summary.table_names {
        println!("    - {}", table);
    }
    println!("  ✓ Output directory: {}", summary.dest_root.display());

    println!("✨ Entity generation complete!");

    Ok(())
}

/// Parse a schema dump and report its tables without generating code
fn validate_schema(schema: PathBuf) -> Result<(), String> {
    println!("🔍 Validating schema {}...", schema.display());

    let tables = entigen::load_tables_from_file(&schema)
        .map_err(|e| format!("Failed to parse schema: {}", e))?;

    println!("  ✓ Parsed {} tables", tables.len());
    for table in &tables {
        println!(
            "    - {} ({} columns)",
            table.table_name,
            table.columns.len()
        );
        for (name, info) in &table.columns {
            println!("        {}: {:?}", name, info.inferred_type);
        }
    }

    println!("✅ Schema is valid!");

    Ok(())
}

/// Generate entity classes from an entigen.yaml project configuration
fn build_from_config(config_file: PathBuf) -> Result<(), String> {
    let summary = entigen::codegen::generate_from_yaml(&config_file)?;

    println!(
        "  ✓ {} entity classes under {}",
        summary.entity_files.len(),
        summary.dest_root.display()
    );

    Ok(())
}
