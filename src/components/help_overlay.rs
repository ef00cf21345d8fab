//! Key binding reference, toggled with `?`.

use crate::keymap::{Action, Keymap};
use crate::styles::theme;
use crate::utils::center_popup;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Cell, Clear, Paragraph, Row, Table};

pub struct HelpOverlay;

/// Table rows: a heading row per category, then "keys | description".
///
/// Keys bound to the same action are joined, e.g. "k, ↑".
fn help_rows(keymap: &Keymap) -> Vec<(Option<&'static str>, String, &'static str)> {
    let bindings = keymap.all_bindings();
    let mut actions: Vec<Action> = Vec::new();
    for binding in &bindings {
        if !actions.contains(&binding.action) {
            actions.push(binding.action);
        }
    }

    let mut rows = Vec::new();
    let mut category = "";
    for action in actions {
        if action.category() != category {
            category = action.category();
            rows.push((Some(category), String::new(), ""));
        }
        let keys = bindings
            .iter()
            .filter(|b| b.action == action)
            .map(|b| b.display())
            .collect::<Vec<_>>()
            .join(", ");
        rows.push((None, keys, action.description()));
    }
    rows
}

impl HelpOverlay {
    pub fn render(frame: &mut Frame, area: Rect, keymap: &Keymap) -> Result<()> {
        let t = theme();
        let popup = center_popup(area, 80, 80);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .title(format!(" Keys ({}) ", keymap.preset.name()))
            .title_alignment(Alignment::Center)
            .title_bottom(Line::from(" Enter/Esc: close ").centered())
            .border_style(t.border_focused_style());
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        if inner.height == 0 {
            return Ok(());
        }

        let rows: Vec<Row> = help_rows(keymap)
            .into_iter()
            .map(|(heading, keys, description)| match heading {
                Some(heading) => Row::new(vec![Cell::from(heading).style(t.title_style())]),
                None => Row::new(vec![
                    Cell::from(format!("  {}", keys)).style(t.strong_style()),
                    Cell::from(description).style(t.text_style()),
                ]),
            })
            .collect();

        if rows.is_empty() {
            frame.render_widget(
                Paragraph::new("No key bindings").style(t.muted_style()),
                inner,
            );
            return Ok(());
        }

        let table = Table::new(rows, [Constraint::Length(18), Constraint::Min(10)]);
        frame.render_widget(table, inner);

        Ok(())
    }
}
