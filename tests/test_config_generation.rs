//! Integration test for entigen.yaml driven generation

use entigen::codegen::generate_from_yaml;
use std::fs;
use tempfile::TempDir;

const SCHEMA: &str = "CREATE TABLE `movie` (\n  `movie_id` int(11) NOT NULL,\n  `title` varchar(200) NOT NULL\n) ENGINE=InnoDB;\n";

#[test]
fn test_generate_from_yaml_config() {
    let dir = TempDir::new().unwrap();
    let schema = dir.path().join("schema.sql");
    fs::write(&schema, SCHEMA).unwrap();

    let config = dir.path().join("entigen.yaml");
    fs::write(
        &config,
        format!(
            "schema: {}\nnamespace: Movies\noutput_dir: {}\n",
            schema.display(),
            dir.path().display()
        ),
    )
    .unwrap();

    let summary = generate_from_yaml(&config).unwrap();
    assert_eq!(summary.table_names, vec!["movie".to_string()]);

    let movie = fs::read_to_string(dir.path().join("Movies/Movie.php")).unwrap();
    assert!(movie.contains("namespace Movies;"));
    assert!(movie.contains("const MOVIE_ID = 'movie_id';"));
    assert!(movie.contains("public ?string $title = null;"));
}

#[test]
fn test_generate_from_yaml_rejects_empty_schema() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("entigen.yaml");
    fs::write(&config, "schema: \"\"\n").unwrap();

    let err = generate_from_yaml(&config).unwrap_err();
    assert!(err.contains("schema is required"));
}

#[test]
fn test_generate_from_yaml_missing_file() {
    let err = generate_from_yaml("definitely-missing-entigen.yaml").unwrap_err();
    assert!(err.contains("Failed to read"));
}
