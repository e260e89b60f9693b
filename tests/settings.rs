use desktop_pet::settings::Settings;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn missing_file_yields_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let settings = Settings::load(path.to_str().unwrap()).unwrap();
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.sprite_dir(), PathBuf::from("assets"));
    assert!(!settings.debug_logging);
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{ "debug_logging": true, "start_position": [10, 20] }"#).unwrap();

    let settings = Settings::load(path.to_str().unwrap()).unwrap();
    assert!(settings.debug_logging);
    assert_eq!(settings.sprite_dir.as_deref(), Some("assets"));
    assert_eq!(settings.start_position((1920, 1080)), (10, 20));
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(Settings::load(path.to_str().unwrap()).is_err());
}

#[test]
fn default_start_is_near_bottom_right() {
    let settings = Settings::default();
    assert_eq!(settings.start_position((1920, 1040)), (1820, 940));
}

#[test]
fn saved_settings_load_back() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("settings.json");
    let settings = Settings {
        log_file: Some("pet.log".into()),
        sprite_dir: Some("sprites/susie".into()),
        ..Settings::default()
    };
    settings.save(path.to_str().unwrap()).unwrap();
    let loaded = Settings::load(path.to_str().unwrap()).unwrap();
    assert_eq!(loaded.log_path(), Some(PathBuf::from("pet.log")));
    assert_eq!(loaded.sprite_dir(), PathBuf::from("sprites/susie"));
}
