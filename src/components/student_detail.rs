//! Detail page for one student.

use crate::components::retake_block::{retake_lines, RetakeBlock};
use crate::model::Student;
use crate::styles::theme;
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Plain-text body of the detail page, also used by `roster show`.
///
/// Empty when there is no student, matching the blank body on screen.
pub fn detail_lines(student: Option<&Student>, subjects: &[String]) -> Vec<String> {
    match student {
        Some(student) => student
            .summary_lines()
            .into_iter()
            .chain(retake_lines(subjects))
            .collect(),
        None => Vec::new(),
    }
}

pub struct StudentDetail;

impl StudentDetail {
    /// Render the student centered in `area`; render nothing for `None`.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        student: Option<&Student>,
        subjects: &[String],
    ) -> Result<()> {
        let Some(student) = student else {
            return Ok(());
        };
        let t = theme();

        let content_height = 2 + 1 + RetakeBlock::height(subjects);
        let width = area.width.min(48);
        let top = area.y + area.height.saturating_sub(content_height) / 2;
        let left = area.x + (area.width - width) / 2;
        let content = Rect::new(left, top, width, content_height.min(area.height));

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(content);

        let [name, group] = student.summary_lines();
        frame.render_widget(
            Paragraph::new(vec![Line::from(name), Line::from(group)])
                .style(t.strong_style())
                .alignment(Alignment::Center),
            chunks[0],
        );
        RetakeBlock::render(frame, chunks[2], subjects, Alignment::Center);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StudentId;

    #[test]
    fn test_detail_lines() {
        let student = Student::new(StudentId(2), "Anna Smirnova", "G102");
        let lines = detail_lines(Some(&student), &["Сети".to_string()]);
        assert_eq!(
            lines,
            vec!["ФИО: Anna Smirnova", "Группа: G102", "Пересдачи", "Предмет: Сети"]
        );
    }

    #[test]
    fn test_detail_lines_blank_without_student() {
        assert!(detail_lines(None, &["Сети".to_string()]).is_empty());
    }
}
