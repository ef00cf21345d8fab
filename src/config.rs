use crate::keymap::Keymap;
use crate::model::{Roster, StudentEntry, DEFAULT_RETAKE_SUBJECTS};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Title shown in the top bar
    pub title: String,
    /// UI theme: "dark", "light" or "nocolor"
    pub theme: String,
    /// Slide the drawer in and out instead of snapping
    pub animations: bool,
    /// Subjects listed in every "Пересдачи" block
    pub retake_subjects: Vec<String>,
    /// Keyboard bindings
    pub keymap: Keymap,
    /// The student roster
    pub students: Vec<StudentEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: default_title(),
            theme: "dark".to_string(),
            animations: true,
            retake_subjects: DEFAULT_RETAKE_SUBJECTS
                .iter()
                .map(|s| (*s).to_string())
                .collect(),
            keymap: Keymap::default(),
            students: vec![
                StudentEntry::new("Ivan Petrov", "G101"),
                StudentEntry::new("Anna Smirnova", "G102"),
            ],
        }
    }
}

fn default_title() -> String {
    "Список студентов".to_string()
}

const CONFIG_HEADER: &str = indoc::indoc! {"
    # roster configuration
    #
    # theme: dark | light | nocolor
    # keymap.preset: standard | vim | emacs
    # Students may carry an explicit `id`; missing ids are assigned in order.

"};

impl Config {
    /// Load configuration from file, falling back to defaults if it is missing
    pub fn load_or_default(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::info!("No config at {:?}, using built-in defaults", config_path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
        let mut config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config file")?;

        if config.title.trim().is_empty() {
            config.title = default_title();
        }

        Ok(config)
    }

    /// Save configuration to file, creating parent directories
    pub fn save(&self, config_path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        std::fs::write(config_path, format!("{}{}", CONFIG_HEADER, content))
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    /// Build the roster described by this config
    pub fn roster(&self) -> Result<Roster> {
        Roster::from_entries(&self.students, self.retake_subjects.clone())
            .with_context(|| "Invalid student roster in config")
    }
}
