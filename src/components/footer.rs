use crate::styles::theme;
use crate::utils::layout::MENU_BUTTON_LABEL;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Bottom app bar: the menu button followed by key hints
pub struct Footer;

impl Footer {
    /// Render the bottom bar
    ///
    /// `hints` uses the "Label: keys | Label: keys" format; labels and keys
    /// get different colors.
    ///
    /// # Returns
    /// The height used (2 lines: 1 for border, 1 for text)
    pub fn render(frame: &mut Frame, area: Rect, hints: &str) -> Result<u16> {
        let t = theme();

        let mut spans = vec![
            Span::styled(MENU_BUTTON_LABEL, t.bar_style().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
        ];

        for (i, part) in hints.split(" | ").enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", t.muted_style()));
            }
            if let Some((keys, label)) = part.split_once(": ") {
                spans.push(Span::styled(format!("{}: ", keys), t.title_style()));
                spans.push(Span::styled(label.to_string(), t.text_style()));
            } else {
                spans.push(Span::styled(part.to_string(), t.text_style()));
            }
        }

        let footer_block = Block::default()
            .borders(Borders::TOP)
            .border_style(t.border_style())
            .border_type(BorderType::Rounded);

        let footer_inner = footer_block.inner(area);
        frame.render_widget(footer_block, area);
        frame.render_widget(Paragraph::new(Line::from(spans)), footer_inner);

        Ok(2)
    }
}
