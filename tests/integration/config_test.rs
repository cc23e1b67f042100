//! Config file loading and saving.

use std::fs;

use hacktyper::audio::AudioBackend;
use hacktyper::config::ConfigError;
use hacktyper::Config;
use tempfile::TempDir;

#[test]
fn missing_file_gives_defaults() {
    let dir = TempDir::new().unwrap();
    let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn saved_config_loads_back() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    let mut config = Config::default();
    config.typewriter.step_size = 4;
    config.game.threshold = 3;
    config.audio.backend = AudioBackend::Bell;
    config.assets.sounds_dir = Some(dir.path().join("sounds"));
    config.save_to(&path).unwrap();

    assert_eq!(Config::load_from(&path).unwrap(), config);
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[ui]\ntheme = \"amber\"\n").unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.ui.theme, "amber");
    assert_eq!(config.overlay.close_settle_ms, 1000);
}

#[test]
fn invalid_values_name_the_field() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[game]\nthreshold = 0\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { .. }));
    assert!(err.to_string().contains("threshold"));
}

#[test]
fn syntax_errors_name_the_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "this is not toml").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse { .. }));
    assert!(err.to_string().contains("config.toml"));
}
