//! Shared helpers for integration tests: a sample roster and headless
//! rendering through ratatui's `TestBackend`.

#![allow(dead_code)]

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;
use roster::keymap::Keymap;
use roster::model::{Roster, StudentEntry, DEFAULT_RETAKE_SUBJECTS};
use roster::state::AppState;
use roster::ui::{render, RenderContext};

pub const WIDTH: u16 = 60;
pub const HEIGHT: u16 = 40;

/// The two-student roster used throughout the tests
pub fn sample_roster() -> Roster {
    roster_of(&[("Ivan Petrov", "G101"), ("Anna Smirnova", "G102")])
}

pub fn roster_of(students: &[(&str, &str)]) -> Roster {
    let entries: Vec<StudentEntry> = students
        .iter()
        .map(|(name, group)| StudentEntry::new(name, group))
        .collect();
    Roster::from_entries(
        &entries,
        DEFAULT_RETAKE_SUBJECTS.iter().map(|s| s.to_string()).collect(),
    )
    .unwrap()
}

/// Render one frame into a buffer of `WIDTH` x `HEIGHT`
pub fn render_buffer(state: &AppState, roster: &Roster) -> Buffer {
    let keymap = Keymap::default();
    let ctx = RenderContext::new(roster, &keymap, "Список студентов");

    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap();
    terminal
        .draw(|frame| render(frame, state, &ctx).unwrap())
        .unwrap();
    terminal.backend().buffer().clone()
}

/// Render one frame and return it as one string per screen row
pub fn render_rows(state: &AppState, roster: &Roster) -> Vec<String> {
    let buffer = render_buffer(state, roster);
    (0..buffer.area.height)
        .map(|y| row_text(&buffer, y))
        .collect()
}

pub fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect()
}

pub fn screen_contains(rows: &[String], needle: &str) -> bool {
    rows.iter().any(|row| row.contains(needle))
}

/// Rows between the header and the footer
pub fn body_rows(rows: &[String]) -> &[String] {
    &rows[3..rows.len() - 2]
}
