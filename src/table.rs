//! Core types for parsed schema tables.
//!
//! A `TableDescriptor` is the parsed representation of one `CREATE TABLE`
//! block: the raw table name plus its columns in declaration order, each
//! column carrying the raw definition text and the semantic type inferred
//! from it.

use indexmap::IndexMap;
use regex::Regex;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Semantic type inferred from the SQL type token of a column definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    String,
    Integer,
    Float,
    DateTime,
    Unknown,
}

impl ColumnType {
    /// PHP-side name used in docblocks and property type hints.
    /// `None` for `Unknown` (the annotation is omitted).
    pub fn php_name(&self) -> Option<&'static str> {
        match self {
            ColumnType::String => Some("string"),
            ColumnType::Integer => Some("int"),
            ColumnType::Float => Some("float"),
            ColumnType::DateTime => Some("\\DateTime"),
            ColumnType::Unknown => None,
        }
    }
}

const STRING_TOKENS: &[&str] = &[
    "CHAR",
    "VARCHAR",
    "TINYTEXT",
    "TEXT",
    "BLOB",
    "MEDIUMTEXT",
    "MEDIUMBLOB",
    "LONGTEXT",
    "LONGBLOB",
    "ENUM",
    "SET",
    "TIME",
];

const INTEGER_TOKENS: &[&str] = &[
    "TINYINT",
    "SMALLINT",
    "MEDIUMINT",
    "INT",
    "BIGINT",
    "TIMESTAMP",
    "YEAR",
];

const FLOAT_TOKENS: &[&str] = &["FLOAT", "DOUBLE", "DECIMAL"];

const DATETIME_TOKENS: &[&str] = &["DATE", "DATETIME"];

/// Infer the semantic type from column definition text.
///
/// Only the first space-delimited token is considered. Matching is
/// case-insensitive and a trailing size/precision group is ignored, so
/// `int(11)`, `INT` and `int` all infer `Integer`. Anything outside the
/// fixed token table infers `Unknown`.
pub fn infer_column_type(raw_attributes: &str) -> ColumnType {
    // First token, optionally followed by a parenthesized size, e.g. "varchar(255)".
    let token_re = Regex::new(r"^([A-Za-z]+)\s*(\(.*\))?$").unwrap();
    let first = raw_attributes.split(' ').next().unwrap_or("");
    let base = match token_re.captures(first) {
        Some(caps) => caps[1].to_uppercase(),
        None => return ColumnType::Unknown,
    };
    if STRING_TOKENS.contains(&base.as_str()) {
        ColumnType::String
    } else if INTEGER_TOKENS.contains(&base.as_str()) {
        ColumnType::Integer
    } else if FLOAT_TOKENS.contains(&base.as_str()) {
        ColumnType::Float
    } else if DATETIME_TOKENS.contains(&base.as_str()) {
        ColumnType::DateTime
    } else {
        ColumnType::Unknown
    }
}

/// One parsed column definition
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnInfo {
    /// Definition text after the column name, trimmed of surrounding
    /// spaces and commas, e.g. `varchar(255) NOT NULL`
    pub raw_attributes: String,
    pub inferred_type: ColumnType,
}

impl ColumnInfo {
    pub fn new<S: Into<String>>(raw_attributes: S) -> Self {
        let raw_attributes = raw_attributes.into();
        let inferred_type = infer_column_type(&raw_attributes);
        ColumnInfo {
            raw_attributes,
            inferred_type,
        }
    }
}

/// Parsed representation of one schema table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableDescriptor {
    /// Raw name as it appeared between backticks in the schema
    pub table_name: String,
    /// Column name -> column info, in declaration order. Inserting an
    /// existing name overwrites the value but keeps the original position.
    pub columns: IndexMap<String, ColumnInfo>,
}

impl TableDescriptor {
    pub fn new<S: Into<String>>(table_name: S) -> Self {
        TableDescriptor {
            table_name: table_name.into(),
            columns: IndexMap::new(),
        }
    }
}

/// Error type for schema parsing and entity generation
#[derive(Debug)]
pub enum GeneratorError {
    /// Missing or invalid configuration, reported before any work begins
    Config(String),
    /// Column data encountered with no open table
    ParseState { line: String, message: String },
    /// Schema unreadable or destination unwritable
    Io { path: PathBuf, source: io::Error },
}

impl GeneratorError {
    pub fn io<P: Into<PathBuf>>(path: P, source: io::Error) -> Self {
        GeneratorError::Io {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeneratorError::Config(msg) => write!(f, "Configuration error: {}", msg),
            GeneratorError::ParseState { line, message } => {
                write!(f, "Parse error at line '{}': {}", line, message)
            }
            GeneratorError::Io { path, source } => {
                write!(f, "IO error on '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for GeneratorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeneratorError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
