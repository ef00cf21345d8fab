// Reusable UI widgets

pub mod menu;

pub use menu::{Menu, MenuItem, MenuState};
