//! Entity class generation.
//!
//! `EntityGenerator` owns the whole run: open the schema, prepare the
//! destination (clear-if-forced, create), materialize the shared base
//! class, parse the schema, then emit one entity class file per table.

use crate::codegen::abstract_entity;
use crate::codegen::fs_utils;
use crate::codegen::php_file::{PhpClass, PhpFile, PhpMethod, PhpProperty};
use crate::codegen::schema_loader::SchemaParser;
use crate::codegen::utils::{escape_php_string, to_camel_case, to_const_case, to_pascal_case};
use crate::table::{GeneratorError, TableDescriptor};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Configuration for one generation run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Path of the schema dump to read
    pub schema_path: String,

    /// Namespace for generated entities; the destination root directory
    /// is named after it (as given, before PascalCasing)
    pub root_namespace: String,

    /// Database name; when non-empty it becomes a sub-namespace and a
    /// subdirectory under the destination root
    pub db_name: String,

    /// Also emit `__NAME = 'table.column'` constants per column
    pub generate_absolute_constants: bool,

    /// Wrap table and column names in backticks inside generated string
    /// literals
    pub enquote_names: bool,

    /// Delete the destination root first when it already exists
    pub force: bool,

    /// Directory the destination root is created under
    pub output_base: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            schema_path: String::new(),
            root_namespace: "DbEntity".to_string(),
            db_name: String::new(),
            generate_absolute_constants: true,
            enquote_names: false,
            force: true,
            output_base: PathBuf::from("."),
        }
    }
}

/// What a completed run produced
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    pub dest_root: PathBuf,
    pub table_names: Vec<String>,
    pub entity_files: Vec<PathBuf>,
}

/// Generates one entity class file per schema table plus the shared base
/// class, laid out under `<output_base>/<root_namespace>[/<db_name>]`
#[derive(Debug)]
pub struct EntityGenerator {
    config: GeneratorConfig,
    root_namespace: String,
    db_namespace: String,
    dest_root: PathBuf,
}

impl EntityGenerator {
    pub fn new(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        if config.schema_path.is_empty() {
            return Err(GeneratorError::Config("no schema file given".to_string()));
        }
        if config.root_namespace.is_empty() {
            return Err(GeneratorError::Config(
                "root namespace must not be empty".to_string(),
            ));
        }

        // Namespaces are PascalCased; directories keep the raw strings
        let root_namespace = to_pascal_case(&config.root_namespace);
        let db_namespace = to_pascal_case(&config.db_name);
        let dest_root = config.output_base.join(&config.root_namespace);

        Ok(EntityGenerator {
            config,
            root_namespace,
            db_namespace,
            dest_root,
        })
    }

    /// Run the full pipeline.
    ///
    /// The schema file is opened before the destination is touched, so a
    /// bad schema path leaves any existing output alone.
    pub fn generate(&self) -> Result<GenerationSummary, GeneratorError> {
        let schema_path = Path::new(&self.config.schema_path);
        let schema_file =
            File::open(schema_path).map_err(|e| GeneratorError::io(schema_path, e))?;

        self.prepare_destination()?;
        abstract_entity::materialize(&self.dest_root, &self.root_namespace)?;

        let parser = SchemaParser::new();
        let tables = parser.parse(BufReader::new(schema_file), schema_path)?;

        let mut table_names = Vec::new();
        let mut entity_files = Vec::new();
        for table in &tables {
            let path = self.write_entity_file(table)?;
            table_names.push(table.table_name.clone());
            entity_files.push(path);
        }

        tracing::info!(
            "Generated {} entity classes under {}",
            entity_files.len(),
            self.dest_root.display()
        );

        Ok(GenerationSummary {
            dest_root: self.dest_root.clone(),
            table_names,
            entity_files,
        })
    }

    fn prepare_destination(&self) -> Result<(), GeneratorError> {
        if self.config.force {
            fs_utils::clear_directory(&self.dest_root)
                .map_err(|e| GeneratorError::io(&self.dest_root, e))?;
        }
        fs_utils::ensure_directory(&self.dest_root)
            .map_err(|e| GeneratorError::io(&self.dest_root, e))
    }

    /// The name as emitted into string literals, backtick-quoted when
    /// configured
    fn quoted(&self, name: &str) -> String {
        if self.config.enquote_names {
            format!("`{}`", name)
        } else {
            name.to_string()
        }
    }

    fn entity_namespace(&self) -> String {
        if self.db_namespace.is_empty() {
            self.root_namespace.clone()
        } else {
            format!("{}\\{}", self.root_namespace, self.db_namespace)
        }
    }

    fn entity_path(&self, class_name: &str) -> PathBuf {
        let mut path = self.dest_root.clone();
        if !self.config.db_name.is_empty() {
            path.push(&self.config.db_name);
        }
        path.push(format!("{}.php", class_name));
        path
    }

    fn build_entity_file(&self, table: &TableDescriptor) -> PhpFile {
        let mut class = PhpClass::new(to_pascal_case(&table.table_name));
        class.extends = Some(format!("\\{}\\AbstractDBEntity", self.root_namespace));

        for name in table.columns.keys() {
            class.add_constant(to_const_case(name), self.quoted(name));
        }

        if self.config.generate_absolute_constants {
            for name in table.columns.keys() {
                class.add_constant(
                    format!("__{}", to_const_case(name)),
                    format!(
                        "{}.{}",
                        self.quoted(&table.table_name),
                        self.quoted(name)
                    ),
                );
            }
        }

        for (name, info) in &table.columns {
            let mut property = PhpProperty::new(to_camel_case(name));
            property.type_hint = info
                .inferred_type
                .php_name()
                .map(|php_type| format!("?{}", php_type));

            let mut var_parts = vec!["@var".to_string()];
            if let Some(php_type) = info.inferred_type.php_name() {
                var_parts.push(php_type.to_string());
            }
            if !info.raw_attributes.is_empty() {
                var_parts.push(info.raw_attributes.clone());
            }
            if var_parts.len() > 1 {
                property.doc = Some(var_parts.join(" "));
            }

            class.add_property(property);
        }

        let mut get_table_name = PhpMethod::new("getTableName");
        get_table_name.is_static = true;
        get_table_name.doc.push("@return string".to_string());
        get_table_name.body.push(format!(
            "return '{}';",
            escape_php_string(&self.quoted(&table.table_name))
        ));
        class.add_method(get_table_name);

        let mut mapping = PhpMethod::new("getMappingArray");
        mapping.visibility = "protected".to_string();
        mapping.doc.push("@return array".to_string());
        if table.columns.is_empty() {
            mapping.body.push("return array();".to_string());
        } else {
            mapping.body.push("return array(".to_string());
            for name in table.columns.keys() {
                mapping.body.push(format!(
                    "\tself::{} => $this->{},",
                    to_const_case(name),
                    to_camel_case(name)
                ));
            }
            mapping.body.push(");".to_string());
        }
        class.add_method(mapping);

        let mut setter = PhpMethod::new("setMappedValue");
        setter.visibility = "protected".to_string();
        setter.params.push("$column".to_string());
        setter.params.push("$value".to_string());
        setter.doc.push("@param string $column".to_string());
        setter.doc.push("@param mixed $value".to_string());
        setter.body.push("switch ($column) {".to_string());
        for name in table.columns.keys() {
            setter.body.push(format!("\tcase self::{}:", to_const_case(name)));
            setter
                .body
                .push(format!("\t\t$this->{} = $value;", to_camel_case(name)));
            setter.body.push("\t\tbreak;".to_string());
        }
        setter.body.push("}".to_string());
        class.add_method(setter);

        let mut file = PhpFile::new(self.entity_namespace());
        file.add_class(class);
        file
    }

    fn write_entity_file(&self, table: &TableDescriptor) -> Result<PathBuf, GeneratorError> {
        let class_name = to_pascal_case(&table.table_name);
        let file = self.build_entity_file(table);
        let path = self.entity_path(&class_name);
        fs_utils::write_file(&path, file.render())
            .map_err(|e| GeneratorError::io(path.clone(), e))?;
        tracing::debug!("Wrote {}", path.display());
        Ok(path)
    }
}
