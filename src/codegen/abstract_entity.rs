//! Shared base-entity source file.
//!
//! The template ships inside the crate and is written into the destination
//! root once per run, with its namespace declaration rewritten to the
//! configured root namespace. Generated entity classes extend it and
//! implement the two mapping members it declares abstract; hydration and
//! serialization never inspect an entity beyond those members.

use crate::codegen::fs_utils;
use crate::table::GeneratorError;
use regex::Regex;
use std::path::Path;

pub const ABSTRACT_ENTITY_FILE_NAME: &str = "AbstractDBEntity.php";

const ABSTRACT_ENTITY_TEMPLATE: &str = r#"<?php

namespace DbEntity;

interface IDBEntity
{

	/**
	 * @return string
	 */
	public static function getTableName();
}

/**
 * Every entity extending this defines constants for its table column
 * names, one public property per column, and the mapping methods wiring
 * them together.
 */
abstract class AbstractDBEntity implements IDBEntity
{

	/**
	 * @param array|\ArrayAccess $row [optional]
	 */
	public function __construct($row = null)
	{
		if (!is_null($row)) {
			$this->loadFromRow($row);
		}
	}

	/**
	 * @param array|\ArrayAccess $row
	 * @return static
	 */
	public function loadFromRow($row)
	{
		foreach (array_keys($this->getMappingArray()) as $column) {
			if (isset($row[$column])) {
				$this->setMappedValue($column, $row[$column]);
			}
		}
		return $this;
	}

	/**
	 * Return ID for row representing NULL value in all lists.
	 * @return int
	 */
	public static function getNullId()
	{
		return -1;
	}

	/**
	 * Mapping of table column constant => current property value.
	 * @return array
	 */
	abstract protected function getMappingArray();

	/**
	 * Assign a value to the property mapped to the given column constant.
	 * @param string $column
	 * @param mixed $value
	 */
	abstract protected function setMappedValue($column, $value);

	/**
	 * Return as array only values that were set in the entity.
	 * @return array
	 */
	public function getArray()
	{
		$result = array();
		foreach ($this->getMappingArray() as $column => $value) {
			if (!is_null($value)) {
				$result[$column] = $value;
			}
		}
		return $result;
	}

}
"#;

/// Write the base-entity file into `dest_root`, rewriting the first
/// namespace declaration to `root_namespace`
pub fn materialize<P: AsRef<Path>>(
    dest_root: P,
    root_namespace: &str,
) -> Result<(), GeneratorError> {
    let namespace_re = Regex::new(r"namespace \w+;").unwrap();
    let content = namespace_re.replace(
        ABSTRACT_ENTITY_TEMPLATE,
        format!("namespace {};", root_namespace).as_str(),
    );
    let path = dest_root.as_ref().join(ABSTRACT_ENTITY_FILE_NAME);
    fs_utils::write_file(&path, content.as_bytes()).map_err(|e| GeneratorError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_materialize_rewrites_namespace() {
        let temp_dir = TempDir::new().unwrap();
        materialize(temp_dir.path(), "MyEntities").unwrap();

        let content =
            fs::read_to_string(temp_dir.path().join(ABSTRACT_ENTITY_FILE_NAME)).unwrap();
        assert!(content.starts_with("<?php\n\nnamespace MyEntities;\n"));
        assert!(!content.contains("namespace DbEntity;"));
    }

    #[test]
    fn test_template_declares_mapping_members_abstract() {
        let temp_dir = TempDir::new().unwrap();
        materialize(temp_dir.path(), "DbEntity").unwrap();

        let content =
            fs::read_to_string(temp_dir.path().join(ABSTRACT_ENTITY_FILE_NAME)).unwrap();
        assert!(content.contains("abstract class AbstractDBEntity implements IDBEntity"));
        assert!(content.contains("abstract protected function getMappingArray();"));
        assert!(content.contains("abstract protected function setMappedValue($column, $value);"));
        // The interface every generated class ultimately satisfies
        assert!(content.contains("public static function getTableName();"));
    }

    #[test]
    fn test_template_hydrates_through_the_mutator() {
        let temp_dir = TempDir::new().unwrap();
        materialize(temp_dir.path(), "DbEntity").unwrap();

        let content =
            fs::read_to_string(temp_dir.path().join(ABSTRACT_ENTITY_FILE_NAME)).unwrap();
        assert!(content.contains("$this->setMappedValue($column, $row[$column]);"));
        assert!(content.contains("return -1;"));
    }
}
