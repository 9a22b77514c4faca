//! Schema dump loader.
//!
//! Streams a SQL schema dump line by line and collects one `TableDescriptor`
//! per `CREATE TABLE` block. Classification is strictly line-oriented: a
//! block opens on a header line, accumulates column lines, and closes on the
//! next header or on the first line ending with `;`. Anything else (blank
//! lines, comments, key and constraint definitions) is ignored. A block
//! still open at end of input is dropped without a descriptor.

use crate::table::{ColumnInfo, GeneratorError, TableDescriptor};
use regex::Regex;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Line-oriented parser for `CREATE TABLE` dumps
pub struct SchemaParser {
    header_re: Regex,
    column_re: Regex,
}

impl SchemaParser {
    pub fn new() -> Self {
        SchemaParser {
            // CREATE TABLE `name` ( -- keywords case-insensitive, anything
            // (IF NOT EXISTS, schema qualifiers) allowed before the name
            header_re: Regex::new(r"(?i)^\s*create table.*`(.*)` \($").unwrap(),
            // `column_name` rest-of-definition
            column_re: Regex::new(r"^\s*`(\w+)`\s+(.*)$").unwrap(),
        }
    }

    /// Parse schema text from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - Schema source, consumed line by line
    /// * `origin` - Path reported in IO and parse errors
    ///
    /// # Returns
    ///
    /// Table descriptors in declaration order
    pub fn parse<R: BufRead>(
        &self,
        reader: R,
        origin: &Path,
    ) -> Result<Vec<TableDescriptor>, GeneratorError> {
        let mut tables: Vec<TableDescriptor> = Vec::new();
        let mut current: Option<TableDescriptor> = None;

        for line in reader.lines() {
            let line = line.map_err(|e| GeneratorError::io(origin, e))?;

            if let Some(caps) = self.header_re.captures(&line) {
                if let Some(finished) = current.take() {
                    tables.push(finished);
                }
                current = Some(TableDescriptor::new(&caps[1]));
            } else if let Some(caps) = self.column_re.captures(&line) {
                let name = caps[1].to_string();
                let attributes = caps[2].trim_matches(|c| c == ' ' || c == ',');
                match current.as_mut() {
                    Some(table) => {
                        table.columns.insert(name, ColumnInfo::new(attributes));
                    }
                    None => {
                        return Err(GeneratorError::ParseState {
                            line,
                            message: "column definition before any CREATE TABLE header"
                                .to_string(),
                        });
                    }
                }
            } else if line.ends_with(';') {
                if let Some(finished) = current.take() {
                    tables.push(finished);
                }
            }
        }

        if let Some(open) = current {
            tracing::debug!(
                "Dropping table '{}' left open at end of {}",
                open.table_name,
                origin.display()
            );
        }

        tracing::debug!("Parsed {} tables from {}", tables.len(), origin.display());
        Ok(tables)
    }
}

impl Default for SchemaParser {
    fn default() -> Self {
        SchemaParser::new()
    }
}

/// Load all table descriptors from a schema dump file
///
/// # Example
///
/// ```ignore
/// use entigen::codegen::load_tables_from_file;
///
/// let tables = load_tables_from_file("schema.sql").unwrap();
/// ```
pub fn load_tables_from_file<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<TableDescriptor>, GeneratorError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| GeneratorError::io(path, e))?;
    SchemaParser::new().parse(BufReader::new(file), path)
}
