//! Pure rendering of [`AppState`].
//!
//! `render` reads state and never changes it; everything a frame shows is
//! derived from the state, the roster and the keymap.

use crate::components::{Drawer, Footer, HelpOverlay, Header, StudentDetail, StudentList};
use crate::keymap::Keymap;
use crate::model::Roster;
use crate::router::View;
use crate::state::AppState;
use crate::utils::ScreenLayout;
use anyhow::Result;
use ratatui::Frame;

/// Read-only resources needed for rendering.
pub struct RenderContext<'a> {
    pub roster: &'a Roster,
    pub keymap: &'a Keymap,
    /// Top bar title
    pub title: &'a str,
}

impl<'a> RenderContext<'a> {
    pub fn new(roster: &'a Roster, keymap: &'a Keymap, title: &'a str) -> Self {
        Self {
            roster,
            keymap,
            title,
        }
    }
}

/// Draw one frame.
pub fn render(frame: &mut Frame, state: &AppState, ctx: &RenderContext) -> Result<()> {
    let area = frame.area();
    let layout = ScreenLayout::compute(area, state, ctx.roster);
    let route = state.route();

    let subtitle = route.is_detail().then(|| route.to_string());
    Header::render(frame, layout.header, ctx.title, subtitle.as_deref())?;

    match route.resolve(ctx.roster) {
        View::List => StudentList::render(frame, &layout, ctx.roster, state.selected)?,
        View::Detail(student) => {
            StudentDetail::render(frame, layout.body, student, ctx.roster.retake_subjects())?;
        }
    }

    let hints = if state.drawer.is_open() {
        ctx.keymap.footer_drawer()
    } else if route.is_detail() {
        ctx.keymap.footer_detail()
    } else {
        ctx.keymap.footer_list()
    };
    Footer::render(frame, layout.footer, &hints)?;

    if let Some(drawer_area) = layout.drawer {
        Drawer::render(frame, drawer_area, state)?;
    }

    if state.show_help {
        HelpOverlay::render(frame, area, ctx.keymap)?;
    }

    Ok(())
}
