//! Semantic actions that keys are bound to.

use crate::state::Message;
use serde::{Deserialize, Serialize};

/// All user actions the roster understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    // ============ Navigation ============
    /// Move selection up in a list
    MoveUp,
    /// Move selection down in a list
    MoveDown,
    PageUp,
    PageDown,
    GoToTop,
    GoToEnd,

    // ============ Selection ============
    /// Open the selected student / pick the drawer item (Enter)
    Confirm,
    /// Close the drawer or go back (Esc)
    Cancel,

    // ============ Global ============
    /// Open the side drawer
    OpenMenu,
    Quit,
    Help,
}

impl Action {
    /// Get a human-readable description of this action
    pub fn description(&self) -> &'static str {
        match self {
            Action::MoveUp => "Move up",
            Action::MoveDown => "Move down",
            Action::PageUp => "Page up",
            Action::PageDown => "Page down",
            Action::GoToTop => "Go to top",
            Action::GoToEnd => "Go to end",
            Action::Confirm => "Open / select",
            Action::Cancel => "Back / close drawer",
            Action::OpenMenu => "Open menu",
            Action::Quit => "Quit",
            Action::Help => "Show help",
        }
    }

    /// Get action category for grouping in help display
    pub fn category(&self) -> &'static str {
        match self {
            Action::MoveUp
            | Action::MoveDown
            | Action::PageUp
            | Action::PageDown
            | Action::GoToTop
            | Action::GoToEnd => "Navigation",
            Action::Confirm | Action::Cancel => "Selection",
            Action::OpenMenu | Action::Quit | Action::Help => "Global",
        }
    }

    /// The update message this action produces
    pub fn message(&self) -> Message {
        match self {
            Action::MoveUp => Message::MoveUp,
            Action::MoveDown => Message::MoveDown,
            Action::PageUp => Message::PageUp,
            Action::PageDown => Message::PageDown,
            Action::GoToTop => Message::GoToTop,
            Action::GoToEnd => Message::GoToEnd,
            Action::Confirm => Message::Activate,
            Action::Cancel => Message::Back,
            Action::OpenMenu => Message::OpenDrawer,
            Action::Quit => Message::Quit,
            Action::Help => Message::ToggleHelp,
        }
    }
}
