//! Scrollable column of student cards (route `studentList`).

use crate::components::retake_block::RetakeBlock;
use crate::model::Roster;
use crate::styles::theme;
use crate::utils::layout::ScreenLayout;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

pub struct StudentList;

impl StudentList {
    /// Draw the cards that fit in the body, starting at the layout's offset.
    ///
    /// A card cut off by the bottom edge is drawn partially.
    pub fn render(
        frame: &mut Frame,
        layout: &ScreenLayout,
        roster: &Roster,
        selected: usize,
    ) -> Result<()> {
        let t = theme();
        let body = layout.body;

        if roster.is_empty() {
            frame.render_widget(
                Paragraph::new("Нет студентов")
                    .style(t.muted_style())
                    .alignment(Alignment::Center),
                body,
            );
            return Ok(());
        }

        let mut y = body.y;
        for (index, student) in roster.students().iter().enumerate().skip(layout.list_offset) {
            if y >= body.bottom() {
                break;
            }
            let height = layout.card_height.min(body.bottom() - y);
            let card = Rect::new(body.x, y, body.width, height);
            y += height;

            let is_selected = index == selected;
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(if is_selected {
                    BorderType::Thick
                } else {
                    BorderType::Rounded
                })
                .border_style(if is_selected {
                    t.border_focused_style()
                } else {
                    t.border_style()
                });
            let inner = block.inner(card);
            frame.render_widget(block, card);

            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(2), Constraint::Min(0)])
                .split(inner);

            let [name, group] = student.summary_lines();
            frame.render_widget(
                Paragraph::new(vec![Line::from(name), Line::from(group)])
                    .style(t.strong_style())
                    .alignment(Alignment::Center),
                chunks[0],
            );
            RetakeBlock::render(frame, chunks[1], roster.retake_subjects(), Alignment::Center);
        }

        Ok(())
    }
}
