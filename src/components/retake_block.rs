//! The "Пересдачи" block listed under every student.

use crate::styles::theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Heading of the block
pub const RETAKE_TITLE: &str = "Пересдачи";

/// Lines of the block: the heading, then one line per subject
pub fn retake_lines(subjects: &[String]) -> Vec<String> {
    std::iter::once(RETAKE_TITLE.to_string())
        .chain(subjects.iter().map(|s| format!("Предмет: {}", s)))
        .collect()
}

/// Renders the block on its own background
pub struct RetakeBlock;

impl RetakeBlock {
    /// Lines needed for the given subjects
    pub fn height(subjects: &[String]) -> u16 {
        1 + subjects.len() as u16
    }

    pub fn render(frame: &mut Frame, area: Rect, subjects: &[String], alignment: Alignment) {
        let t = theme();
        let style = t.retake_style();
        let lines: Vec<Line> = retake_lines(subjects)
            .into_iter()
            .enumerate()
            .map(|(i, text)| {
                if i == 0 {
                    Line::styled(text, style.add_modifier(Modifier::BOLD))
                } else {
                    Line::styled(text, style)
                }
            })
            .collect();

        frame.render_widget(
            Paragraph::new(lines).style(style).alignment(alignment),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retake_lines() {
        let subjects = vec!["Сети".to_string(), "История".to_string()];
        assert_eq!(
            retake_lines(&subjects),
            vec!["Пересдачи", "Предмет: Сети", "Предмет: История"]
        );
        assert_eq!(RetakeBlock::height(&subjects), 3);
    }
}
