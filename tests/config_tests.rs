use pathquill::config::Config;
use pathquill::file::output::OutputFormat;
use pathquill::AccessOptions;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert!(!config.strict_reserved);
    assert_eq!(config.max_depth, 512);
    assert_eq!(config.output_format, OutputFormat::Yaml);
    assert_eq!(config.indent_size, 2);
}

#[test]
fn test_custom_config() {
    let config = Config {
        strict_reserved: true,
        max_depth: 16,
        output_format: OutputFormat::Json,
        indent_size: 4,
    };

    assert!(config.strict_reserved);
    assert_eq!(config.max_depth, 16);
    assert_eq!(config.output_format, OutputFormat::Json);
    assert_eq!(config.indent_size, 4);
}

#[test]
fn test_load_from_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(
        &path,
        "strict_reserved = true\nmax_depth = 8\noutput_format = \"json\"\n",
    )
    .unwrap();

    let config = Config::load_from(&path);
    assert!(config.strict_reserved);
    assert_eq!(config.max_depth, 8);
    assert_eq!(config.output_format, OutputFormat::Json);
    assert_eq!(config.indent_size, 2);
}

#[test]
fn test_load_missing_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml"));
    assert_eq!(config, Config::default());
}

#[test]
fn test_load_invalid_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "max_depth = \"lots\"").unwrap();
    assert_eq!(Config::load_from(&path), Config::default());
}

#[test]
fn test_config_serialization_round_trip() {
    let config = Config {
        output_format: OutputFormat::Json,
        ..Config::default()
    };
    let toml_string = toml::to_string_pretty(&config).unwrap();
    assert!(toml_string.contains("output_format = \"json\""));
    let parsed: Config = toml::from_str(&toml_string).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn test_save_then_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("pathquill").join("config.toml");
    let config = Config {
        strict_reserved: true,
        max_depth: 64,
        output_format: OutputFormat::Json,
        indent_size: 4,
    };

    config.save_to(&path).unwrap();
    assert!(path.exists());
    assert_eq!(Config::load_from(&path), config);
}

#[test]
fn test_save_into_file_path_fails() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();

    let err = Config::default()
        .save_to(&blocker.join("config.toml"))
        .unwrap_err();
    assert!(format!("{:#}", err).contains("Failed to create"));
}

#[test]
fn test_access_options_from_config() {
    let config = Config {
        strict_reserved: true,
        max_depth: 3,
        ..Config::default()
    };
    let options = AccessOptions::from(&config);
    assert!(options.strict_reserved);
    assert_eq!(options.max_depth, 3);
}
