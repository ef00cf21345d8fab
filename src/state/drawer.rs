//! Side drawer state: which item is current and how far the panel is open.

/// Number of ticks the drawer takes to slide fully in or out.
pub const DRAWER_ANIMATION_TICKS: u16 = 4;

/// Top-level items offered by the drawer.
///
/// The selected item only drives highlighting; it does not change which
/// route is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawerScreen {
    #[default]
    Home,
    Menu,
}

impl DrawerScreen {
    pub const ALL: [DrawerScreen; 2] = [DrawerScreen::Home, DrawerScreen::Menu];

    pub fn label(&self) -> &'static str {
        match self {
            DrawerScreen::Home => "Главная",
            DrawerScreen::Menu => "Меню",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            DrawerScreen::Home => 0,
            DrawerScreen::Menu => 1,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Drawer visibility plus its slide animation.
///
/// `open` is the target; `progress` moves toward `0` or
/// `DRAWER_ANIMATION_TICKS` one step per tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drawer {
    open: bool,
    progress: u16,
    animated: bool,
    /// Keyboard cursor over the drawer items
    pub cursor: usize,
}

impl Drawer {
    pub fn new(animated: bool) -> Self {
        Self {
            open: false,
            progress: 0,
            animated,
            cursor: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether any part of the drawer is on screen
    pub fn is_visible(&self) -> bool {
        self.progress > 0
    }

    /// Fully open and settled, so items accept input
    pub fn is_settled_open(&self) -> bool {
        self.open && self.progress == DRAWER_ANIMATION_TICKS
    }

    pub fn is_animating(&self) -> bool {
        let target = if self.open { DRAWER_ANIMATION_TICKS } else { 0 };
        self.progress != target
    }

    pub fn progress(&self) -> u16 {
        self.progress
    }

    /// Open the drawer, placing the cursor on the current item.
    pub fn open(&mut self, current: DrawerScreen) {
        if !self.open {
            self.cursor = current.index();
        }
        self.open = true;
        if !self.animated {
            self.progress = DRAWER_ANIMATION_TICKS;
        }
    }

    pub fn close(&mut self) {
        self.open = false;
        if !self.animated {
            self.progress = 0;
        }
    }

    /// Advance the animation one step. Returns true if anything moved.
    pub fn tick(&mut self) -> bool {
        if self.open && self.progress < DRAWER_ANIMATION_TICKS {
            self.progress += 1;
            true
        } else if !self.open && self.progress > 0 {
            self.progress -= 1;
            true
        } else {
            false
        }
    }

    /// Width of the visible part of a drawer whose full width is `full`
    pub fn visible_width(&self, full: u16) -> u16 {
        (u32::from(full) * u32::from(self.progress) / u32::from(DRAWER_ANIMATION_TICKS)) as u16
    }

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        self.cursor = (self.cursor + 1).min(DrawerScreen::ALL.len() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initially_closed() {
        let drawer = Drawer::new(true);
        assert!(!drawer.is_open());
        assert!(!drawer.is_visible());
        assert!(!drawer.is_animating());
    }

    #[test]
    fn test_animated_open_takes_ticks() {
        let mut drawer = Drawer::new(true);
        drawer.open(DrawerScreen::Home);
        assert!(drawer.is_open());
        assert!(!drawer.is_settled_open());

        for _ in 0..DRAWER_ANIMATION_TICKS {
            assert!(drawer.tick());
        }
        assert!(drawer.is_settled_open());
        assert!(!drawer.tick());
        assert_eq!(drawer.visible_width(28), 28);
    }

    #[test]
    fn test_close_mid_animation_reverses() {
        let mut drawer = Drawer::new(true);
        drawer.open(DrawerScreen::Home);
        drawer.tick();
        drawer.tick();
        drawer.close();
        assert_eq!(drawer.progress(), 2);
        drawer.tick();
        drawer.tick();
        assert!(!drawer.is_visible());
    }

    #[test]
    fn test_unanimated_snaps() {
        let mut drawer = Drawer::new(false);
        drawer.open(DrawerScreen::Menu);
        assert!(drawer.is_settled_open());
        assert_eq!(drawer.cursor, 1);
        drawer.close();
        assert!(!drawer.is_visible());
    }

    #[test]
    fn test_cursor_clamped() {
        let mut drawer = Drawer::new(false);
        drawer.cursor_up();
        assert_eq!(drawer.cursor, 0);
        drawer.cursor_down();
        drawer.cursor_down();
        assert_eq!(drawer.cursor, 1);
    }

    #[test]
    fn test_screen_labels() {
        assert_eq!(DrawerScreen::Home.label(), "Главная");
        assert_eq!(DrawerScreen::Menu.label(), "Меню");
        assert_eq!(DrawerScreen::from_index(1), Some(DrawerScreen::Menu));
        assert_eq!(DrawerScreen::from_index(2), None);
    }
}
