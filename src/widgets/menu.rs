//! Card-style menu widget used by the side drawer.
//!
//! Each item is a 3-line card. Two things are tracked separately: the
//! *current* item (background highlight) and the keyboard *cursor*
//! (left edge marker).

use crate::styles::{theme, CURSOR_SYMBOL};
use crate::utils::layout::DRAWER_ITEM_HEIGHT;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{StatefulWidget, Widget},
};

/// A single menu item
#[derive(Debug, Clone)]
pub struct MenuItem {
    pub text: String,
}

impl MenuItem {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// State for the Menu widget
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    /// Highlighted (current) item
    pub current: usize,
    /// Keyboard focus, shown only when `show_cursor` is set
    pub cursor: usize,
    pub show_cursor: bool,
}

/// Menu widget that renders items as cards
#[derive(Debug, Clone)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }
}

impl StatefulWidget for Menu {
    type State = MenuState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        let t = theme();
        let item_height = DRAWER_ITEM_HEIGHT;

        for (i, item) in self.items.iter().enumerate() {
            let y = area.y + item_height * i as u16;
            if y + item_height > area.y + area.height {
                break;
            }

            let style = if state.current == i {
                t.highlight_style()
            } else {
                t.text_style()
            };
            let marker = if state.show_cursor && state.cursor == i {
                CURSOR_SYMBOL
            } else {
                "  "
            };

            let blank = Line::from(Span::styled(" ".repeat(area.width as usize), style));
            blank.clone().render(Rect::new(area.x, y, area.width, 1), buf);

            let content = Line::from(vec![
                Span::styled(marker, style.patch(t.border_focused_style())),
                Span::styled(item.text.clone(), style),
            ]);
            let pad = (area.width as usize).saturating_sub(content.width());
            let mut spans = content.spans;
            spans.push(Span::styled(" ".repeat(pad), style));
            Line::from(spans).render(Rect::new(area.x, y + 1, area.width, 1), buf);

            blank.render(Rect::new(area.x, y + 2, area.width, 1), buf);
        }
    }
}
