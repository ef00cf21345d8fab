//! Preset keymaps: Standard, Vim, Emacs

use super::{Action, KeyBinding};
use serde::{Deserialize, Serialize};

/// Available keymap presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum KeymapPreset {
    /// Arrows, Enter, Esc
    #[default]
    Standard,
    /// hjkl and friends
    Vim,
    /// Ctrl+N/P and friends
    Emacs,
}

impl KeymapPreset {
    /// Get all key bindings for this preset
    pub fn bindings(&self) -> Vec<KeyBinding> {
        let specific: &[(&str, Action)] = match self {
            KeymapPreset::Standard => &[
                ("up", Action::MoveUp),
                ("down", Action::MoveDown),
                ("pageup", Action::PageUp),
                ("pagedown", Action::PageDown),
                ("home", Action::GoToTop),
                ("end", Action::GoToEnd),
                ("enter", Action::Confirm),
                ("esc", Action::Cancel),
                ("m", Action::OpenMenu),
            ],
            KeymapPreset::Vim => &[
                ("k", Action::MoveUp),
                ("up", Action::MoveUp),
                ("j", Action::MoveDown),
                ("down", Action::MoveDown),
                ("ctrl+u", Action::PageUp),
                ("ctrl+d", Action::PageDown),
                ("g", Action::GoToTop),
                ("G", Action::GoToEnd),
                ("l", Action::Confirm),
                ("enter", Action::Confirm),
                ("h", Action::Cancel),
                ("esc", Action::Cancel),
                ("m", Action::OpenMenu),
            ],
            KeymapPreset::Emacs => &[
                ("ctrl+p", Action::MoveUp),
                ("up", Action::MoveUp),
                ("ctrl+n", Action::MoveDown),
                ("down", Action::MoveDown),
                ("alt+v", Action::PageUp),
                ("ctrl+v", Action::PageDown),
                ("alt+<", Action::GoToTop),
                ("alt+>", Action::GoToEnd),
                ("enter", Action::Confirm),
                ("ctrl+g", Action::Cancel),
                ("esc", Action::Cancel),
                ("alt+m", Action::OpenMenu),
            ],
        };

        // Shared across every preset
        let global: &[(&str, Action)] = &[
            ("q", Action::Quit),
            ("ctrl+c", Action::Quit),
            ("?", Action::Help),
        ];

        specific
            .iter()
            .chain(global)
            .map(|(key, action)| KeyBinding::new(key, *action))
            .collect()
    }

    /// Get human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            KeymapPreset::Standard => "Standard",
            KeymapPreset::Vim => "Vim",
            KeymapPreset::Emacs => "Emacs",
        }
    }
}
