//! Keybinding system
//!
//! Maps keyboard input to command IDs. Key patterns are textual and
//! serializable so they can later be loaded from configuration.
//!
//! # Design
//!
//! - `KeyBinding`: a mapping from a key pattern to a command ID
//! - `Keymap`: collection of bindings with matching logic

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};

use crate::command_id::CommandId;

/// A single keybinding that maps a key pattern to a command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Textual representation of the key - e.g., "ctrl+k", "/", "tab"
    pub keys: String,
    /// Display hint for the UI - e.g., "Ctrl+K", "/"
    pub hint: String,
    /// The command this binding triggers
    pub command: CommandId,
}

impl KeyBinding {
    pub fn new(keys: impl Into<String>, hint: impl Into<String>, command: CommandId) -> Self {
        Self {
            keys: keys.into(),
            hint: hint.into(),
            command,
        }
    }
}

/// Parsed key pattern for matching
#[derive(Debug, Clone)]
pub struct ParsedKeyPattern {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

/// Parse a textual key pattern into a matchable form
///
/// Supported formats:
/// - Single char: "q", "/", "1" (case-sensitive)
/// - With modifiers: "ctrl+k", "shift+tab", "cmd+k"
/// - Special keys: "tab", "enter", "esc", "backspace", "up", "down"
pub fn parse_key_pattern(pattern: &str) -> Option<ParsedKeyPattern> {
    let pattern = pattern.trim();

    // Single characters preserve case; uppercase letters arrive with
    // SHIFT from the terminal
    if pattern.chars().count() == 1 {
        let c = pattern.chars().next()?;
        let modifiers = if c.is_ascii_uppercase() {
            KeyModifiers::SHIFT
        } else {
            KeyModifiers::NONE
        };
        return Some(ParsedKeyPattern {
            code: KeyCode::Char(c),
            modifiers,
        });
    }

    // Everything else (modifiers, special keys) matches lowercased
    let pattern_lower = pattern.to_lowercase();

    let mut modifiers = KeyModifiers::NONE;
    let mut key_part = pattern_lower.as_str();

    while key_part.contains('+') {
        if let Some((modifier, rest)) = key_part.split_once('+') {
            match modifier {
                "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                "alt" => modifiers |= KeyModifiers::ALT,
                "cmd" | "super" => modifiers |= KeyModifiers::SUPER,
                _ => break, // Not a modifier, might be the key itself
            }
            key_part = rest;
        } else {
            break;
        }
    }

    let code = parse_key_code(key_part)?;

    Some(ParsedKeyPattern { code, modifiers })
}

/// Parse a key code string into a KeyCode
fn parse_key_code(s: &str) -> Option<KeyCode> {
    match s {
        "tab" => Some(KeyCode::Tab),
        "backtab" => Some(KeyCode::BackTab),
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "backspace" | "bs" => Some(KeyCode::Backspace),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "space" => Some(KeyCode::Char(' ')),

        s if s.starts_with('f') && s.len() > 1 => {
            let num: u8 = s[1..].parse().ok()?;
            Some(KeyCode::F(num))
        }

        s if s.chars().count() == 1 => {
            let c = s.chars().next()?;
            Some(KeyCode::Char(c))
        }

        _ => None,
    }
}

/// The keymap - a collection of keybindings with matching logic
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: Vec<(KeyBinding, ParsedKeyPattern)>,
}

impl Keymap {
    /// Create a new keymap from a list of bindings; unparseable
    /// patterns are skipped
    pub fn new(bindings: Vec<KeyBinding>) -> Self {
        let parsed: Vec<_> = bindings
            .into_iter()
            .filter_map(|binding| {
                let pattern = parse_key_pattern(&binding.keys)?;
                Some((binding, pattern))
            })
            .collect();

        Self { bindings: parsed }
    }

    /// Match a key event against the keymap
    ///
    /// Multiple commands can match the same key (e.g., Down can mean
    /// different things to different views); the middleware picks the
    /// one the active view accepts.
    pub fn match_key(&self, key: &KeyEvent) -> Vec<CommandId> {
        self.bindings
            .iter()
            .filter(|(_, pattern)| {
                // BackTab arrives with or without SHIFT depending on
                // the terminal, so match it loosely
                if pattern.code == KeyCode::BackTab {
                    key.code == KeyCode::BackTab
                } else {
                    key.code == pattern.code && key.modifiers == pattern.modifiers
                }
            })
            .map(|(binding, _)| binding.command)
            .collect()
    }

    /// Get all bindings (for the footer hint line)
    pub fn bindings(&self) -> impl Iterator<Item = &KeyBinding> {
        self.bindings.iter().map(|(b, _)| b)
    }

    /// Get a compact hint string for a command (e.g., "↓/Ctrl+N"),
    /// deduplicated and joined with "/"
    pub fn compact_hint_for_command(&self, command: CommandId) -> Option<String> {
        let hints: Vec<&str> = self
            .bindings
            .iter()
            .filter(|(b, _)| b.command == command)
            .map(|(b, _)| b.hint.as_str())
            .collect();

        if hints.is_empty() {
            return None;
        }

        let mut unique_hints: Vec<&str> = Vec::new();
        for hint in hints {
            if !unique_hints.contains(&hint) {
                unique_hints.push(hint);
            }
        }

        Some(unique_hints.join("/"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_keymap() -> Keymap {
        use CommandId::*;
        Keymap::new(vec![
            KeyBinding::new("ctrl+k", "Ctrl+K", DockOpenCommands),
            KeyBinding::new("/", "/", DockOpenSearch),
            KeyBinding::new("down", "↓", NavigateNext),
            KeyBinding::new("ctrl+n", "Ctrl+N", NavigateNext),
            KeyBinding::new("up", "↑", NavigatePrevious),
            KeyBinding::new("esc", "Esc", GlobalClose),
        ])
    }

    #[test]
    fn test_modifier_pattern_matches() {
        let keymap = test_keymap();
        let key = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::CONTROL);
        assert_eq!(keymap.match_key(&key), vec![CommandId::DockOpenCommands]);
    }

    #[test]
    fn test_plain_char_does_not_match_modified_binding() {
        let keymap = test_keymap();
        let key = KeyEvent::new(KeyCode::Char('k'), KeyModifiers::NONE);
        assert!(keymap.match_key(&key).is_empty());
    }

    #[test]
    fn test_slash_matches_search_open() {
        let keymap = test_keymap();
        let key = KeyEvent::new(KeyCode::Char('/'), KeyModifiers::NONE);
        assert_eq!(keymap.match_key(&key), vec![CommandId::DockOpenSearch]);
    }

    #[test]
    fn test_special_key_matches() {
        let keymap = test_keymap();
        let key = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(keymap.match_key(&key), vec![CommandId::GlobalClose]);
    }

    #[test]
    fn test_cmd_modifier_parses_to_super() {
        let pattern = parse_key_pattern("cmd+k").unwrap();
        assert_eq!(pattern.code, KeyCode::Char('k'));
        assert_eq!(pattern.modifiers, KeyModifiers::SUPER);
    }

    #[test]
    fn test_compact_hint_joins_with_slash() {
        let keymap = test_keymap();
        assert_eq!(
            keymap.compact_hint_for_command(CommandId::NavigateNext),
            Some("↓/Ctrl+N".to_string())
        );
    }

    #[test]
    fn test_compact_hint_returns_none_for_unmapped() {
        let keymap = test_keymap();
        assert_eq!(keymap.compact_hint_for_command(CommandId::GlobalQuit), None);
    }
}
