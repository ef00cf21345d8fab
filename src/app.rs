use crate::config::Config;
use crate::keymap::Keymap;
use crate::model::Roster;
use crate::router::Route;
use crate::state::{update, AppState, Effect, Message};
use crate::tui::Tui;
use crate::ui::{render, RenderContext};
use crate::utils::{Hit, ScreenLayout};
use anyhow::Result;
use crossterm::event::{Event, KeyEventKind, MouseButton, MouseEventKind};
use ratatui::layout::Rect;
use std::time::Duration;
use tracing::{debug, info};

/// Poll timeout while idle
const IDLE_TICK: Duration = Duration::from_millis(250);
/// Poll timeout while the drawer is sliding
const ANIMATION_TICK: Duration = Duration::from_millis(40);

/// Main application: owns the terminal, the roster and the UI state.
pub struct App {
    config: Config,
    roster: Roster,
    state: AppState,
    tui: Tui,
}

impl App {
    pub fn new(config: Config, roster: Roster, initial_route: Option<Route>) -> Result<Self> {
        let mut state = AppState::new(config.animations);
        if let Some(route) = initial_route {
            state.nav.push(route);
        }
        Ok(Self {
            config,
            roster,
            state,
            tui: Tui::new()?,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        info!("Started with {} students", self.roster.len());

        let result = self.event_loop();

        self.tui.exit()?;
        info!("Exited on route {}", self.state.route());
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true;
        loop {
            if dirty {
                self.draw()?;
                dirty = false;
            }

            let timeout = if self.state.drawer.is_animating() {
                ANIMATION_TICK
            } else {
                IDLE_TICK
            };

            let message = match self.tui.poll_event(timeout)? {
                Some(Event::Resize(..)) => {
                    dirty = true;
                    continue;
                }
                Some(event) => {
                    let size = self.tui.terminal_mut().size()?;
                    let area = Rect::new(0, 0, size.width, size.height);
                    match translate_event(&event, &self.state, &self.roster, &self.config.keymap, area) {
                        Some(message) => message,
                        None => continue,
                    }
                }
                None => Message::Tick,
            };

            if message != Message::Tick {
                debug!("Message: {:?}", message);
            }

            match update(&mut self.state, &self.roster, message) {
                Effect::Quit => return Ok(()),
                Effect::Render => dirty = true,
                Effect::None => {}
            }
        }
    }

    fn draw(&mut self) -> Result<()> {
        let ctx = RenderContext::new(&self.roster, &self.config.keymap, &self.config.title);
        let state = &self.state;
        let mut result = Ok(());
        self.tui.terminal_mut().draw(|frame| {
            result = render(frame, state, &ctx);
        })?;
        result
    }
}

/// Translate a raw terminal event into an update message.
///
/// Keys go through the keymap; left clicks are hit-tested against the
/// layout the current state would draw into `area`.
pub fn translate_event(
    event: &Event,
    state: &AppState,
    roster: &Roster,
    keymap: &Keymap,
    area: Rect,
) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => keymap
            .get_action(key.code, key.modifiers)
            .map(|action| action.message()),
        Event::Mouse(mouse) => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let layout = ScreenLayout::compute(area, state, roster);
                match layout.hit(mouse.column, mouse.row, state, roster) {
                    Hit::MenuButton => Some(Message::OpenDrawer),
                    Hit::StudentRow(index) => Some(Message::SelectStudent(index)),
                    Hit::DrawerItem(screen) => Some(Message::SelectDrawerItem(screen)),
                    Hit::Scrim => Some(Message::CloseDrawer),
                    Hit::Nothing => None,
                }
            }
            MouseEventKind::ScrollDown => Some(Message::MoveDown),
            MouseEventKind::ScrollUp => Some(Message::MoveUp),
            _ => None,
        },
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{StudentEntry, DEFAULT_RETAKE_SUBJECTS};
    use crate::state::DrawerScreen;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};

    fn roster() -> Roster {
        Roster::from_entries(
            &[
                StudentEntry::new("Ivan Petrov", "G101"),
                StudentEntry::new("Anna Smirnova", "G102"),
            ],
            DEFAULT_RETAKE_SUBJECTS.iter().map(|s| s.to_string()).collect(),
        )
        .unwrap()
    }

    fn click(column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    const AREA: Rect = Rect::new(0, 0, 60, 40);

    #[test]
    fn test_key_translation() {
        let state = AppState::default();
        let event = Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(
            translate_event(&event, &state, &roster(), &Keymap::default(), AREA),
            Some(Message::Activate)
        );

        let event = Event::Key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::NONE));
        assert_eq!(
            translate_event(&event, &state, &roster(), &Keymap::default(), AREA),
            None
        );
    }

    #[test]
    fn test_tap_row_then_detail() {
        let roster = roster();
        let keymap = Keymap::default();
        let mut state = AppState::new(false);

        // Second card starts one card height below the body top
        let layout = ScreenLayout::compute(AREA, &state, &roster);
        let row = layout.body.y + layout.card_height + 2;
        let message = translate_event(&click(5, row), &state, &roster, &keymap, AREA).unwrap();
        assert_eq!(message, Message::SelectStudent(1));

        update(&mut state, &roster, message);
        assert_eq!(state.route().to_string(), "studentDetail/Anna Smirnova/G102");

        // Tapping the body of the detail page does nothing
        assert_eq!(
            translate_event(&click(5, row), &state, &roster, &keymap, AREA),
            None
        );
    }

    #[test]
    fn test_menu_button_and_drawer_clicks() {
        let roster = roster();
        let keymap = Keymap::default();
        let mut state = AppState::new(false);

        let message = translate_event(&click(1, 39), &state, &roster, &keymap, AREA).unwrap();
        assert_eq!(message, Message::OpenDrawer);
        update(&mut state, &roster, message);

        let layout = ScreenLayout::compute(AREA, &state, &roster);
        let menu_item = layout.drawer_item(1).unwrap();
        let message =
            translate_event(&click(menu_item.x, menu_item.y + 1), &state, &roster, &keymap, AREA)
                .unwrap();
        assert_eq!(message, Message::SelectDrawerItem(DrawerScreen::Menu));

        assert_eq!(
            translate_event(&click(55, 5), &state, &roster, &keymap, AREA),
            Some(Message::CloseDrawer)
        );
    }
}
