use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Top app bar
pub struct Header;

impl Header {
    /// Render the top bar with a centered title
    ///
    /// # Arguments
    /// * `frame` - The frame to render to
    /// * `area` - The area to render the header in
    /// * `title` - Bar title (e.g., "Список студентов")
    /// * `subtitle` - Optional route hint shown in the border
    ///
    /// # Returns
    /// The height of the header (for layout calculations)
    pub fn render(frame: &mut Frame, area: Rect, title: &str, subtitle: Option<&str>) -> Result<u16> {
        let t = theme();
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style());
        if let Some(subtitle) = subtitle {
            block = block
                .title_bottom(Line::from(format!(" {} ", subtitle)).right_aligned())
                .title_style(t.muted_style());
        }

        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(title)
                .style(t.title_style())
                .alignment(Alignment::Center),
            inner,
        );

        Ok(area.height)
    }
}
