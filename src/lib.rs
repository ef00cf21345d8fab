//! roster - a terminal student roster browser
//!
//! A list of students, a detail page per student with their retake
//! subjects, and a side drawer, driven by a small route table and an
//! explicit state/update/render loop.

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod keymap;
pub mod model;
pub mod router;
pub mod state;
pub mod styles;
pub mod tui;
pub mod ui;
pub mod utils;
pub mod widgets;

// Re-exports for convenience
pub use config::Config;
pub use keymap::{Action, KeyBinding, Keymap, KeymapPreset};
pub use model::{Roster, Student, StudentEntry, StudentId};
pub use router::{Route, RouteError, View};
pub use state::{update, AppState, DrawerScreen, Effect, Message};
