use meteo_core::Config;

#[test]
fn missing_file_loads_defaults() {
    let dir = tempfile::tempdir().unwrap();

    let cfg = Config::load_from(&dir.path().join("config.toml")).unwrap();

    assert_eq!(cfg, Config::default());
}

#[test]
fn save_creates_parent_dirs_and_reloads() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let cfg = Config {
        language: "en".to_string(),
        timeout_secs: Some(15),
        ..Config::default()
    };
    cfg.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), cfg);
}

#[test]
fn broken_file_names_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "timeout_secs = \"soon\"").unwrap();

    let err = Config::load_from(&path).unwrap_err();

    assert!(err.to_string().contains("Failed to parse config file"));
}
