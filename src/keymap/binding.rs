//! Key bindings and key-string parsing
//!
//! Key strings look like "j", "down", "ctrl+n", "shift+tab".

use super::Action;
use crossterm::event::{KeyCode, KeyModifiers};
use serde::{Deserialize, Serialize};

/// A single key binding mapping a key combination to an action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Key string (e.g., "j", "down", "ctrl+n")
    pub key: String,
    pub action: Action,
}

/// Parsed key representation for matching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedKey {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

/// Named keys: (accepted spellings, code, display label)
const NAMED_KEYS: &[(&[&str], KeyCode, &str)] = &[
    (&["up", "arrow_up"], KeyCode::Up, "↑"),
    (&["down", "arrow_down"], KeyCode::Down, "↓"),
    (&["left", "arrow_left"], KeyCode::Left, "←"),
    (&["right", "arrow_right"], KeyCode::Right, "→"),
    (&["home"], KeyCode::Home, "Home"),
    (&["end"], KeyCode::End, "End"),
    (&["pageup", "page_up", "pgup"], KeyCode::PageUp, "PgUp"),
    (&["pagedown", "page_down", "pgdn"], KeyCode::PageDown, "PgDn"),
    (&["enter", "return"], KeyCode::Enter, "Enter"),
    (&["esc", "escape"], KeyCode::Esc, "Esc"),
    (&["space"], KeyCode::Char(' '), "Space"),
    (&["tab"], KeyCode::Tab, "Tab"),
    (&["backspace", "bs"], KeyCode::Backspace, "Backspace"),
];

impl KeyBinding {
    pub fn new(key: &str, action: Action) -> Self {
        Self {
            key: key.to_string(),
            action,
        }
    }

    /// Check if this binding matches the given key event
    pub fn matches(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match parse_key_string(&self.key) {
            Ok(parsed) => {
                parsed.code == code && normalize(code, parsed.modifiers) == normalize(code, modifiers)
            }
            Err(_) => false,
        }
    }

    /// Get the display string for this binding
    pub fn display(&self) -> String {
        format_key_display(&self.key)
    }
}

/// Terminals report SHIFT alongside shifted characters like '?', so it is
/// ignored for character keys.
fn normalize(code: KeyCode, modifiers: KeyModifiers) -> KeyModifiers {
    if matches!(code, KeyCode::Char(_)) {
        modifiers.difference(KeyModifiers::SHIFT)
    } else {
        modifiers
    }
}

/// Parse a key string like "ctrl+shift+n" into KeyCode and KeyModifiers
pub fn parse_key_string(key: &str) -> Result<ParsedKey, String> {
    let key = key.trim();
    // "+" on its own is a key, not a separator
    let (mods, key_part) = match key.rsplit_once('+') {
        Some((mods, "")) => (mods.strip_suffix('+').unwrap_or(mods), "+"),
        Some((mods, last)) => (mods, last),
        None => ("", key),
    };

    let mut modifiers = KeyModifiers::NONE;
    for part in mods.split('+').map(str::trim).filter(|p| !p.is_empty()) {
        modifiers |= match part.to_lowercase().as_str() {
            "ctrl" | "control" => KeyModifiers::CONTROL,
            "alt" | "option" => KeyModifiers::ALT,
            "shift" => KeyModifiers::SHIFT,
            _ => return Err(format!("Unknown modifier: {}", part)),
        };
    }

    let code = parse_key_code(key_part)?;
    Ok(ParsedKey { code, modifiers })
}

/// Named keys are case-insensitive; single characters keep their case.
fn parse_key_code(key: &str) -> Result<KeyCode, String> {
    let key = key.trim();
    let lower = key.to_lowercase();
    if let Some((_, code, _)) = NAMED_KEYS
        .iter()
        .find(|(names, _, _)| names.contains(&lower.as_str()))
    {
        return Ok(*code);
    }

    let mut chars = key.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(KeyCode::Char(c)),
        _ => Err(format!("Unknown key: {}", key)),
    }
}

/// Format a key string for display (e.g., "ctrl+n" -> "Ctrl+n", "up" -> "↑")
pub fn format_key_display(key: &str) -> String {
    key.split('+')
        .map(|part| {
            let part = part.trim();
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => "Ctrl".to_string(),
                "alt" | "option" => "Alt".to_string(),
                "shift" => "Shift".to_string(),
                lower => NAMED_KEYS
                    .iter()
                    .find(|(names, _, _)| names.contains(&lower))
                    .map(|(_, _, label)| (*label).to_string())
                    .unwrap_or_else(|| part.to_string()),
            }
        })
        .collect::<Vec<_>>()
        .join("+")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_key() {
        let parsed = parse_key_string("j").unwrap();
        assert_eq!(parsed.code, KeyCode::Char('j'));
        assert_eq!(parsed.modifiers, KeyModifiers::NONE);
    }

    #[test]
    fn test_parse_named_keys() {
        assert_eq!(parse_key_string("up").unwrap().code, KeyCode::Up);
        assert_eq!(parse_key_string("enter").unwrap().code, KeyCode::Enter);
        assert_eq!(parse_key_string("esc").unwrap().code, KeyCode::Esc);
        assert_eq!(parse_key_string("space").unwrap().code, KeyCode::Char(' '));
    }

    #[test]
    fn test_parse_modifiers() {
        let parsed = parse_key_string("ctrl+n").unwrap();
        assert_eq!(parsed.code, KeyCode::Char('n'));
        assert_eq!(parsed.modifiers, KeyModifiers::CONTROL);

        let parsed = parse_key_string("ctrl+shift+n").unwrap();
        assert_eq!(parsed.modifiers, KeyModifiers::CONTROL | KeyModifiers::SHIFT);

        let parsed = parse_key_string("CTRL+Up").unwrap();
        assert_eq!(parsed.code, KeyCode::Up);
        assert_eq!(parsed.modifiers, KeyModifiers::CONTROL);
    }

    #[test]
    fn test_characters_keep_case() {
        assert_eq!(parse_key_string("G").unwrap().code, KeyCode::Char('G'));
        assert_eq!(parse_key_string("g").unwrap().code, KeyCode::Char('g'));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_key_string("hyper+x").is_err());
        assert!(parse_key_string("nonsense").is_err());
    }

    #[test]
    fn test_format_key_display() {
        assert_eq!(format_key_display("ctrl+n"), "Ctrl+n");
        assert_eq!(format_key_display("up"), "↑");
        assert_eq!(format_key_display("enter"), "Enter");
        assert_eq!(format_key_display("G"), "G");
        assert_eq!(format_key_display("m"), "m");
    }

    #[test]
    fn test_shift_ignored_for_characters() {
        let binding = KeyBinding::new("?", Action::Help);
        assert!(binding.matches(KeyCode::Char('?'), KeyModifiers::SHIFT));
        assert!(binding.matches(KeyCode::Char('?'), KeyModifiers::NONE));

        let binding = KeyBinding::new("ctrl+n", Action::MoveDown);
        assert!(binding.matches(KeyCode::Char('n'), KeyModifiers::CONTROL));
        assert!(!binding.matches(KeyCode::Char('n'), KeyModifiers::NONE));
    }
}
