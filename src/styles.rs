//! Theme and style system
//!
//! A theme is either a color palette or "plain", in which case every style
//! falls back to terminal defaults plus text modifiers.

use ratatui::style::{Color, Modifier, Style};
use std::str::FromStr;
use std::sync::RwLock;

/// Marker shown next to the focused drawer item
pub const CURSOR_SYMBOL: &str = "» ";

static THEME: RwLock<Theme> = RwLock::new(Theme::dark());

/// Replace the global theme; called once from `main`
pub fn init_theme(theme_type: ThemeType) {
    let mut theme = THEME.write().unwrap();
    *theme = Theme::new(theme_type);
}

/// Snapshot of the global theme
pub fn theme() -> Theme {
    THEME.read().unwrap().clone()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeType {
    #[default]
    Dark,
    Light,
    /// Terminal default colors only (`NO_COLOR=1` / `--no-colors`)
    NoColor,
}

impl FromStr for ThemeType {
    type Err = ();

    /// Unknown names fall back to the dark theme
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "light" => ThemeType::Light,
            "nocolor" | "no-color" | "no_color" | "none" => ThemeType::NoColor,
            _ => ThemeType::Dark,
        })
    }
}

/// Colors of one themed variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Titles and focused borders
    pub accent: Color,
    pub foreground: Color,
    pub dimmed: Color,
    pub frame: Color,
    /// Bottom bar (menu button)
    pub bar: (Color, Color),
    /// "Пересдачи" block, white on red
    pub retake: (Color, Color),
    /// Background of the current drawer item
    pub selection: Color,
}

const DARK: Palette = Palette {
    accent: Color::Cyan,
    foreground: Color::White,
    dimmed: Color::DarkGray,
    frame: Color::DarkGray,
    bar: (Color::White, Color::Blue),
    retake: (Color::White, Color::Red),
    selection: Color::DarkGray,
};

const LIGHT: Palette = Palette {
    accent: Color::Blue,
    foreground: Color::Black,
    dimmed: Color::DarkGray,
    frame: Color::Gray,
    bar: (Color::White, Color::Blue),
    retake: (Color::White, Color::Red),
    selection: Color::Gray,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub theme_type: ThemeType,
    /// `None` for the plain theme
    pub palette: Option<Palette>,
}

impl Theme {
    pub const fn new(theme_type: ThemeType) -> Self {
        let palette = match theme_type {
            ThemeType::Dark => Some(DARK),
            ThemeType::Light => Some(LIGHT),
            ThemeType::NoColor => None,
        };
        Self {
            theme_type,
            palette,
        }
    }

    pub const fn dark() -> Self {
        Self::new(ThemeType::Dark)
    }

    /// `colored` built from the palette, or `plain` when there is none
    fn pick(&self, plain: Style, colored: impl FnOnce(&Palette) -> Style) -> Style {
        self.palette.as_ref().map_or(plain, colored)
    }

    /// Top bar title and footer key names
    pub fn title_style(&self) -> Style {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        self.pick(bold, |p| bold.fg(p.accent))
    }

    pub fn text_style(&self) -> Style {
        self.pick(Style::default(), |p| Style::default().fg(p.foreground))
    }

    /// Student fields
    pub fn strong_style(&self) -> Style {
        self.text_style().add_modifier(Modifier::BOLD)
    }

    pub fn muted_style(&self) -> Style {
        self.pick(Style::default().add_modifier(Modifier::DIM), |p| {
            Style::default().fg(p.dimmed)
        })
    }

    pub fn border_style(&self) -> Style {
        self.pick(Style::default(), |p| Style::default().fg(p.frame))
    }

    pub fn border_focused_style(&self) -> Style {
        self.pick(Style::default().add_modifier(Modifier::BOLD), |p| {
            Style::default().fg(p.accent)
        })
    }

    pub fn bar_style(&self) -> Style {
        self.pick(Style::default().add_modifier(Modifier::REVERSED), |p| {
            Style::default().fg(p.bar.0).bg(p.bar.1)
        })
    }

    pub fn retake_style(&self) -> Style {
        self.pick(Style::default().add_modifier(Modifier::REVERSED), |p| {
            Style::default().fg(p.retake.0).bg(p.retake.1)
        })
    }

    /// Current drawer item
    pub fn highlight_style(&self) -> Style {
        let reversed = Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED);
        self.pick(reversed, |p| {
            Style::default()
                .fg(p.foreground)
                .bg(p.selection)
                .add_modifier(Modifier::BOLD)
        })
    }
}
