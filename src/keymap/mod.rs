//! Keymap configuration module
//!
//! Provides customizable keyboard shortcuts with preset keymaps (standard, vim, emacs).

mod actions;
mod binding;
mod presets;

pub use actions::Action;
pub use binding::{format_key_display, parse_key_string, KeyBinding, ParsedKey};
pub use presets::KeymapPreset;

use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// Keymap configuration with preset and optional overrides
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Keymap {
    /// Base preset keymap
    #[serde(default)]
    pub preset: KeymapPreset,

    /// User-defined overrides (checked before preset)
    #[serde(default)]
    pub overrides: Vec<KeyBinding>,
}

impl Keymap {
    /// Get the action for a key event, checking overrides first then preset
    pub fn get_action(&self, code: KeyCode, modifiers: KeyModifiers) -> Option<Action> {
        self.all_bindings()
            .into_iter()
            .find(|binding| binding.matches(code, modifiers))
            .map(|binding| binding.action)
    }

    /// Overrides followed by preset bindings.
    /// An overridden action loses all of its preset bindings.
    pub fn all_bindings(&self) -> Vec<KeyBinding> {
        let mut bindings = self.overrides.clone();
        bindings.extend(
            self.preset
                .bindings()
                .into_iter()
                .filter(|p| !self.overrides.iter().any(|o| o.action == p.action)),
        );
        bindings
    }

    /// Display string of the first key bound to `action`
    pub fn key_for(&self, action: Action) -> String {
        self.all_bindings()
            .into_iter()
            .find(|b| b.action == action)
            .map(|b| b.display())
            .unwrap_or_else(|| format!("{:?}", action))
    }

    /// Override keys that do not parse, for reporting at startup
    pub fn invalid_overrides(&self) -> Vec<String> {
        self.overrides
            .iter()
            .filter_map(|b| parse_key_string(&b.key).err())
            .collect()
    }

    /// Footer hints for the student list
    pub fn footer_list(&self) -> String {
        format!(
            "{}/{}: Navigate | {}: Open | {}: Menu | {}: Help | {}: Quit",
            self.key_for(Action::MoveUp),
            self.key_for(Action::MoveDown),
            self.key_for(Action::Confirm),
            self.key_for(Action::OpenMenu),
            self.key_for(Action::Help),
            self.key_for(Action::Quit),
        )
    }

    /// Footer hints for the detail page
    pub fn footer_detail(&self) -> String {
        format!(
            "{}: Back | {}: Menu | {}: Help | {}: Quit",
            self.key_for(Action::Cancel),
            self.key_for(Action::OpenMenu),
            self.key_for(Action::Help),
            self.key_for(Action::Quit),
        )
    }

    /// Footer hints while the drawer is open
    pub fn footer_drawer(&self) -> String {
        format!(
            "{}/{}: Navigate | {}: Select | {}: Close",
            self.key_for(Action::MoveUp),
            self.key_for(Action::MoveDown),
            self.key_for(Action::Confirm),
            self.key_for(Action::Cancel),
        )
    }
}
