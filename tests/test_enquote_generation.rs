//! Integration test for name quoting and constant emission options

use entigen::{EntityGenerator, GeneratorConfig};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const SCHEMA: &str = "CREATE TABLE `user` (\n  `user_id` int(11) NOT NULL\n) ENGINE=InnoDB;\n";

fn run(dir: &Path, enquote: bool, absolute: bool) -> String {
    let schema = dir.join("schema.sql");
    fs::write(&schema, SCHEMA).unwrap();

    let config = GeneratorConfig {
        schema_path: schema.to_str().unwrap().to_string(),
        generate_absolute_constants: absolute,
        enquote_names: enquote,
        output_base: dir.to_path_buf(),
        ..Default::default()
    };
    EntityGenerator::new(config).unwrap().generate().unwrap();

    fs::read_to_string(dir.join("DbEntity/User.php")).unwrap()
}

#[test]
fn test_plain_names_by_default() {
    let dir = TempDir::new().unwrap();
    let user = run(dir.path(), false, true);

    assert!(user.contains("const USER_ID = 'user_id';"));
    assert!(user.contains("const __USER_ID = 'user.user_id';"));
    assert!(user.contains("return 'user';"));
}

#[test]
fn test_enquote_wraps_names_in_backticks() {
    let dir = TempDir::new().unwrap();
    let user = run(dir.path(), true, true);

    assert!(user.contains("const USER_ID = '`user_id`';"));
    assert!(user.contains("const __USER_ID = '`user`.`user_id`';"));
    assert!(user.contains("return '`user`';"));

    // Property names and mapping keys stay unquoted
    assert!(user.contains("public ?int $userId = null;"));
    assert!(user.contains("self::USER_ID => $this->userId,"));
}

#[test]
fn test_absolute_constants_disabled() {
    let dir = TempDir::new().unwrap();
    let user = run(dir.path(), false, false);

    assert!(user.contains("const USER_ID = 'user_id';"));
    assert!(!user.contains("__USER_ID"));
}
