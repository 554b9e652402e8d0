//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use turtle_art::config::AppConfig;
use turtle_art_core::Composition;
use serial_test::serial;

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("ART_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("ART_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_art_parameters() {
    std::env::set_var("ART_ART__SYMMETRY", "8");
    std::env::set_var("ART_SPIRAL__COLOR", "#ff00ff");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("ART_ART__SYMMETRY");
    std::env::remove_var("ART_SPIRAL__COLOR");

    assert_eq!(config.art.symmetry, 8);
    let composition = config.to_composition().unwrap();
    assert_eq!(composition.mandala().symmetry(), 8);
    assert_eq!(composition.spiral().color, turtle_art_core::Color::from_rgb8(255, 0, 255));
}

#[test]
#[serial]
fn test_env_override_background() {
    std::env::set_var("ART_ART__BACKGROUND", "white");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("ART_ART__BACKGROUND");

    assert_eq!(config.art.background, "white");
    let composition = config.to_composition().unwrap();
    assert_eq!(composition.background(), turtle_art_core::Color::WHITE);
}

#[test]
#[serial]
fn test_env_override_too_deep_is_rejected() {
    std::env::set_var("ART_ART__DEPTH", "12");
    let config = AppConfig::load().unwrap();
    std::env::remove_var("ART_ART__DEPTH");

    assert!(matches!(
        config.to_composition(),
        Err(turtle_art_core::ArtError::RecursionTooDeep { what: "Mandala depth", value: 12, .. })
    ));
}

#[test]
#[serial]
fn test_default_file_matches_builtin_defaults() {
    std::env::remove_var("ART_WINDOW__TITLE");

    let cwd = std::env::current_dir().unwrap();
    assert!(cwd.join("config/default.toml").exists());

    // Only meaningful without a local override file
    if cwd.join("config/user.toml").exists() {
        return;
    }

    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Turtle Art");
    assert_eq!(config.art.palette, AppConfig::default().art.palette);
    assert_eq!(config.to_composition().unwrap(), Composition::default());
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.window.width, 1280);
    assert_eq!(config.art.depth, 5);
}
