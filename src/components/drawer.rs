//! Side drawer overlay.

use crate::state::{AppState, DrawerScreen};
use crate::styles::theme;
use crate::widgets::{Menu, MenuItem, MenuState};
use anyhow::Result;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear};

pub struct Drawer;

impl Drawer {
    /// Draw the visible part of the drawer over whatever is underneath.
    pub fn render(frame: &mut Frame, area: Rect, state: &AppState) -> Result<()> {
        let t = theme();
        frame.render_widget(Clear, area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(t.border_focused_style());
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let items = DrawerScreen::ALL
            .iter()
            .map(|screen| MenuItem::new(screen.label()))
            .collect();
        let mut menu_state = MenuState {
            current: state.current_screen.index(),
            cursor: state.drawer.cursor,
            show_cursor: state.drawer.is_settled_open(),
        };
        frame.render_stateful_widget(Menu::new(items), inner, &mut menu_state);

        Ok(())
    }
}
