//! Screen geometry shared by rendering and mouse hit-testing.
//!
//! Both sides compute the same [`ScreenLayout`] from the same state, so a
//! click always lands on what was drawn.

use crate::model::Roster;
use crate::state::{AppState, DrawerScreen};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Full width of the open drawer
pub const DRAWER_WIDTH: u16 = 28;
/// Height of one drawer item card
pub const DRAWER_ITEM_HEIGHT: u16 = 3;
/// Label of the bottom-bar menu button
pub const MENU_BUTTON_LABEL: &str = " ≡ Меню ";

const HEADER_HEIGHT: u16 = 3;
const FOOTER_HEIGHT: u16 = 2;

/// What a mouse click at a given cell refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    MenuButton,
    StudentRow(usize),
    DrawerItem(DrawerScreen),
    /// Outside an open drawer
    Scrim,
    Nothing,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
    pub menu_button: Rect,
    /// Visible part of the drawer, if any
    pub drawer: Option<Rect>,
    /// Height of one student card
    pub card_height: u16,
    /// Index of the first card drawn in the body
    pub list_offset: usize,
}

/// Lines taken by one student card: borders, two fields, the retake
/// heading and one line per subject.
pub fn card_height(subject_count: usize) -> u16 {
    (2 + 2 + 1 + subject_count) as u16
}

/// Number of whole cards that fit in `height`, at least one
pub fn visible_cards(height: u16, card_height: u16) -> usize {
    (height / card_height.max(1)).max(1) as usize
}

/// First visible card so that `selected` sits inside the viewport
pub fn list_offset(selected: usize, visible: usize) -> usize {
    selected.saturating_sub(visible.saturating_sub(1))
}

impl ScreenLayout {
    pub fn compute(area: Rect, state: &AppState, roster: &Roster) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);
        let (header, body, footer) = (chunks[0], chunks[1], chunks[2]);

        // Footer text sits below its top border
        let button_width = (MENU_BUTTON_LABEL.chars().count() as u16).min(footer.width);
        let menu_button = Rect::new(
            footer.x,
            footer.y + footer.height.saturating_sub(1),
            button_width,
            1.min(footer.height),
        );

        let drawer = state.drawer.is_visible().then(|| {
            let full = DRAWER_WIDTH.min(area.width);
            Rect::new(area.x, area.y, state.drawer.visible_width(full).max(1), area.height)
        });

        let card_height = card_height(roster.retake_subjects().len());
        let list_offset = list_offset(state.selected, visible_cards(body.height, card_height));

        Self {
            header,
            body,
            footer,
            menu_button,
            drawer,
            card_height,
            list_offset,
        }
    }

    /// Rect of drawer item `index` inside a fully drawn drawer
    pub fn drawer_item(&self, index: usize) -> Option<Rect> {
        let drawer = self.drawer?;
        let inner = Rect::new(
            drawer.x + 1,
            drawer.y + 1,
            drawer.width.saturating_sub(2),
            drawer.height.saturating_sub(2),
        );
        let y = inner.y + DRAWER_ITEM_HEIGHT * index as u16;
        (y + DRAWER_ITEM_HEIGHT <= inner.y + inner.height)
            .then(|| Rect::new(inner.x, y, inner.width, DRAWER_ITEM_HEIGHT))
    }

    /// Resolve a click at (column, row)
    pub fn hit(&self, column: u16, row: u16, state: &AppState, roster: &Roster) -> Hit {
        let inside = |r: Rect| {
            column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
        };

        if state.drawer.is_open() {
            if let Some(drawer) = self.drawer {
                if inside(drawer) {
                    return DrawerScreen::ALL
                        .iter()
                        .enumerate()
                        .find(|(i, _)| self.drawer_item(*i).is_some_and(|r| inside(r)))
                        .map_or(Hit::Nothing, |(_, screen)| Hit::DrawerItem(*screen));
                }
            }
            return Hit::Scrim;
        }

        if inside(self.menu_button) {
            return Hit::MenuButton;
        }

        if inside(self.body) && !state.route().is_detail() {
            let index = self.list_offset + ((row - self.body.y) / self.card_height.max(1)) as usize;
            if index < roster.len() {
                return Hit::StudentRow(index);
            }
        }

        Hit::Nothing
    }
}

/// Centered rect taking the given percentages of `area`
pub fn center_popup(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let width = area.width * percent_x.min(100) / 100;
    let height = area.height * percent_y.min(100) / 100;
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
