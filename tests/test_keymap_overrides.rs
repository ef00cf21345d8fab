use crossterm::event::{KeyCode, KeyModifiers};
use roster::config::Config;
use roster::keymap::{Action, KeyBinding, Keymap, KeymapPreset};
use tempfile::TempDir;

#[test]
fn test_keymap_override_in_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let mut config = Config::default();
    config.keymap.preset = KeymapPreset::Vim;
    config
        .keymap
        .overrides
        .push(KeyBinding::new("x", Action::Quit));
    config
        .keymap
        .overrides
        .push(KeyBinding::new("w", Action::MoveUp));

    config.save(&config_path).unwrap();
    let loaded = Config::load_or_default(&config_path).unwrap();

    assert_eq!(loaded.keymap.preset, KeymapPreset::Vim);
    assert_eq!(loaded.keymap.overrides.len(), 2);
    assert_eq!(
        loaded.keymap.get_action(KeyCode::Char('x'), KeyModifiers::NONE),
        Some(Action::Quit)
    );
    assert_eq!(
        loaded.keymap.get_action(KeyCode::Char('w'), KeyModifiers::NONE),
        Some(Action::MoveUp)
    );
    // Preset binding for a non-overridden action still works
    assert_eq!(
        loaded.keymap.get_action(KeyCode::Char('j'), KeyModifiers::NONE),
        Some(Action::MoveDown)
    );
}

#[test]
fn test_override_shadows_preset_binding() {
    let keymap = Keymap {
        preset: KeymapPreset::Vim,
        overrides: vec![KeyBinding::new("w", Action::MoveUp)],
    };

    assert_eq!(
        keymap.get_action(KeyCode::Char('w'), KeyModifiers::NONE),
        Some(Action::MoveUp)
    );
    assert_eq!(keymap.get_action(KeyCode::Char('k'), KeyModifiers::NONE), None);
    assert!(keymap.footer_list().starts_with("w/j: Navigate"));
}

#[test]
fn test_keymap_toml_shape() {
    let toml_str = r#"
[keymap]
preset = "emacs"

[[keymap.overrides]]
key = "ctrl+o"
action = "open_menu"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.keymap.preset, KeymapPreset::Emacs);
    assert_eq!(
        config
            .keymap
            .get_action(KeyCode::Char('o'), KeyModifiers::CONTROL),
        Some(Action::OpenMenu)
    );
    // The default roster is kept when no students are listed
    assert_eq!(config.students.len(), 2);
}

#[test]
fn test_keymap_json_roundtrip() {
    let keymap = Keymap {
        preset: KeymapPreset::Standard,
        overrides: vec![KeyBinding::new("ctrl+m", Action::OpenMenu)],
    };
    let json = serde_json::to_string(&keymap).unwrap();
    assert!(json.contains("\"open_menu\""));
    let parsed: Keymap = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, keymap);
}

#[test]
fn test_invalid_override_is_reported() {
    let keymap = Keymap {
        preset: KeymapPreset::Standard,
        overrides: vec![KeyBinding::new("hyper+z", Action::Quit)],
    };
    assert_eq!(keymap.invalid_overrides().len(), 1);
}
