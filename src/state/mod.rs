//! Application state and the update function that changes it.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐   Message   ┌──────────────────────────┐   Effect
//! │ App loop │ ──────────▶ │ update(state, roster, m) │ ─────────▶ render / quit
//! └──────────┘             └──────────────────────────┘
//! ```
//!
//! All state lives in [`AppState`]. It is only changed by [`update`], and
//! rendering reads it without mutating it, so the screen is always a
//! function of the state.

pub mod drawer;
pub mod navigation;

pub use drawer::{Drawer, DrawerScreen, DRAWER_ANIMATION_TICKS};
pub use navigation::NavStack;

use crate::model::Roster;
use crate::router::Route;

/// Number of rows moved by page up/down in the student list.
pub const LIST_PAGE_SIZE: usize = 5;

/// Everything the UI needs to know to draw a frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub nav: NavStack,
    /// Drawer item currently highlighted. Initially Home.
    pub current_screen: DrawerScreen,
    pub drawer: Drawer,
    /// Index of the highlighted row in the student list
    pub selected: usize,
    pub show_help: bool,
}

impl AppState {
    pub fn new(animated: bool) -> Self {
        Self {
            nav: NavStack::new(),
            current_screen: DrawerScreen::Home,
            drawer: Drawer::new(animated),
            selected: 0,
            show_help: false,
        }
    }

    pub fn route(&self) -> &Route {
        self.nav.current()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(true)
    }
}

/// Discrete UI events, already translated from raw terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Timer tick, drives the drawer animation
    Tick,
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    GoToTop,
    GoToEnd,
    /// Enter on whatever has focus
    Activate,
    /// Tap on a list row
    SelectStudent(usize),
    /// Menu button
    OpenDrawer,
    CloseDrawer,
    /// Tap on a drawer item
    SelectDrawerItem(DrawerScreen),
    Navigate(Route),
    Back,
    ToggleHelp,
    Quit,
}

/// What the app loop should do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing visible changed
    None,
    /// State changed, draw a new frame
    Render,
    Quit,
}

fn changed(did_change: bool) -> Effect {
    if did_change {
        Effect::Render
    } else {
        Effect::None
    }
}

/// Apply one message to the state.
pub fn update(state: &mut AppState, roster: &Roster, message: Message) -> Effect {
    match message {
        Message::Quit => return Effect::Quit,
        Message::Tick => return changed(state.drawer.tick()),
        Message::ToggleHelp => {
            state.show_help = !state.show_help;
            return Effect::Render;
        }
        _ => {}
    }

    if state.show_help {
        // Help overlay swallows input until dismissed
        return match message {
            Message::Back | Message::Activate => {
                state.show_help = false;
                Effect::Render
            }
            _ => Effect::None,
        };
    }

    if state.drawer.is_open() {
        return update_drawer(state, message);
    }

    match message {
        Message::OpenDrawer => {
            state.drawer.open(state.current_screen);
            Effect::Render
        }
        Message::Navigate(route) => {
            state.nav.push(route);
            Effect::Render
        }
        Message::Back => {
            if state.nav.pop() {
                Effect::Render
            } else {
                Effect::Quit
            }
        }
        // The detail page has nothing to move or activate
        _ if state.route().is_detail() => Effect::None,
        message => update_list(state, roster, message),
    }
}

fn update_list(state: &mut AppState, roster: &Roster, message: Message) -> Effect {
    let total = roster.len();
    if total == 0 {
        return Effect::None;
    }
    let last = total - 1;
    let before = state.selected;

    match message {
        Message::MoveUp => state.selected = state.selected.saturating_sub(1),
        Message::MoveDown => state.selected = (state.selected + 1).min(last),
        Message::PageUp => state.selected = state.selected.saturating_sub(LIST_PAGE_SIZE),
        Message::PageDown => state.selected = (state.selected + LIST_PAGE_SIZE).min(last),
        Message::GoToTop => state.selected = 0,
        Message::GoToEnd => state.selected = last,
        Message::Activate => return open_student(state, roster, state.selected),
        Message::SelectStudent(index) => return open_student(state, roster, index),
        _ => return Effect::None,
    }

    changed(state.selected != before)
}

fn open_student(state: &mut AppState, roster: &Roster, index: usize) -> Effect {
    let Some(student) = roster.get(index) else {
        return Effect::None;
    };
    state.selected = index;
    state.nav.push(Route::for_student(student, roster));
    Effect::Render
}

fn update_drawer(state: &mut AppState, message: Message) -> Effect {
    match message {
        Message::CloseDrawer | Message::Back => {
            state.drawer.close();
            Effect::Render
        }
        Message::MoveUp | Message::GoToTop | Message::PageUp => {
            state.drawer.cursor_up();
            Effect::Render
        }
        Message::MoveDown | Message::GoToEnd | Message::PageDown => {
            state.drawer.cursor_down();
            Effect::Render
        }
        Message::Activate => match DrawerScreen::from_index(state.drawer.cursor) {
            Some(screen) => select_drawer_item(state, screen),
            None => Effect::None,
        },
        Message::SelectDrawerItem(screen) => select_drawer_item(state, screen),
        // Modal: the list underneath does not receive input
        _ => Effect::None,
    }
}

/// Selecting the current item does nothing; selecting the other one
/// switches the highlight and closes the drawer. The route is untouched.
fn select_drawer_item(state: &mut AppState, screen: DrawerScreen) -> Effect {
    if !state.drawer.is_settled_open() || screen == state.current_screen {
        return Effect::None;
    }
    tracing::info!("Drawer selection: {:?} -> {:?}", state.current_screen, screen);
    state.current_screen = screen;
    state.drawer.cursor = screen.index();
    state.drawer.close();
    Effect::Render
}
