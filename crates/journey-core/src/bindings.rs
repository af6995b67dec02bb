//! Keyboard input model and configurable shortcut chords.

use crate::session::JourneyCommand;

/// Keys the engine distinguishes; everything else is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyToken {
    Space,
    Escape,
    Home,
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Char(char),
}

impl KeyToken {
    /// Parse the key part of a chord such as `"space"` or `"q"`.
    pub fn parse(raw: &str) -> Option<Self> {
        let token = raw.trim().to_ascii_lowercase();
        let key = match token.as_str() {
            "space" | "spacebar" => KeyToken::Space,
            "escape" | "esc" => KeyToken::Escape,
            "home" => KeyToken::Home,
            "arrowup" | "up" => KeyToken::ArrowUp,
            "arrowdown" | "down" => KeyToken::ArrowDown,
            "arrowleft" | "left" => KeyToken::ArrowLeft,
            "arrowright" | "right" => KeyToken::ArrowRight,
            other => {
                let mut chars = other.chars();
                let ch = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                KeyToken::Char(ch)
            }
        };
        Some(key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub logo: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyPress {
    pub key: KeyToken,
    pub modifiers: Modifiers,
}

impl KeyPress {
    pub fn plain(key: KeyToken) -> Self {
        Self {
            key,
            modifiers: Modifiers::default(),
        }
    }
}

/// A key plus the exact modifiers it requires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyChord {
    key: KeyToken,
    modifiers: Modifiers,
}

impl KeyChord {
    /// Parse `ctrl+alt+shift+logo+key`; an empty or unparsable chord falls
    /// back to `fallback`.
    pub fn parse(raw: &str, fallback: &str) -> Self {
        Self::try_parse(raw)
            .or_else(|| Self::try_parse(fallback))
            .unwrap_or(KeyChord {
                key: KeyToken::Space,
                modifiers: Modifiers::default(),
            })
    }

    fn try_parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_ascii_lowercase();
        let mut modifiers = Modifiers::default();
        let mut key = None;
        for token in normalized
            .split('+')
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            match token {
                "ctrl" | "control" => modifiers.ctrl = true,
                "alt" => modifiers.alt = true,
                "logo" | "meta" | "super" | "cmd" | "command" => modifiers.logo = true,
                "shift" => modifiers.shift = true,
                other => key = Some(KeyToken::parse(other)?),
            }
        }
        Some(KeyChord {
            key: key?,
            modifiers,
        })
    }

    pub fn matches(&self, press: &KeyPress) -> bool {
        self.key == press.key && self.modifiers == press.modifiers
    }
}

/// Shortcut table resolved against each key press.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    pub toggle_autoplay: KeyChord,
    pub pause: KeyChord,
    pub reset: KeyChord,
    pub scroll_down: KeyChord,
    pub scroll_up: KeyChord,
    pub quit: KeyChord,
    pub arrow_step: f32,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            toggle_autoplay: KeyChord::parse("space", "space"),
            pause: KeyChord::parse("escape", "escape"),
            reset: KeyChord::parse("home", "home"),
            scroll_down: KeyChord::parse("arrowdown", "arrowdown"),
            scroll_up: KeyChord::parse("arrowup", "arrowup"),
            quit: KeyChord::parse("q", "q"),
            arrow_step: 100.0,
        }
    }
}

impl KeyBindings {
    pub fn command_for(&self, press: &KeyPress) -> Option<JourneyCommand> {
        if self.toggle_autoplay.matches(press) {
            Some(JourneyCommand::ToggleAutoplay)
        } else if self.pause.matches(press) {
            Some(JourneyCommand::Pause)
        } else if self.reset.matches(press) {
            Some(JourneyCommand::Reset)
        } else if self.scroll_down.matches(press) {
            Some(JourneyCommand::ScrollBy {
                delta: self.arrow_step,
                smooth: true,
            })
        } else if self.scroll_up.matches(press) {
            Some(JourneyCommand::ScrollBy {
                delta: -self.arrow_step,
                smooth: true,
            })
        } else if self.quit.matches(press) {
            Some(JourneyCommand::Quit)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_spacebar_alias() {
        let chord = KeyChord::parse(" SpaceBar ", "x");
        assert!(chord.matches(&KeyPress::plain(KeyToken::Space)));
    }

    #[test]
    fn matches_ctrl_chord() {
        let chord = KeyChord::parse("ctrl+r", "home");
        let press = KeyPress {
            key: KeyToken::Char('r'),
            modifiers: Modifiers {
                ctrl: true,
                ..Modifiers::default()
            },
        };
        assert!(chord.matches(&press));
    }

    #[test]
    fn rejects_unexpected_extra_modifier() {
        let chord = KeyChord::parse("ctrl+r", "home");
        let press = KeyPress {
            key: KeyToken::Char('r'),
            modifiers: Modifiers {
                ctrl: true,
                shift: true,
                ..Modifiers::default()
            },
        };
        assert!(!chord.matches(&press));
    }

    #[test]
    fn invalid_chord_uses_fallback() {
        let chord = KeyChord::parse("ctrl+nonsense", "escape");
        assert!(chord.matches(&KeyPress::plain(KeyToken::Escape)));
    }

    #[test]
    fn default_bindings_follow_documented_keys() {
        let bindings = KeyBindings::default();
        assert_eq!(
            bindings.command_for(&KeyPress::plain(KeyToken::Space)),
            Some(JourneyCommand::ToggleAutoplay)
        );
        assert_eq!(
            bindings.command_for(&KeyPress::plain(KeyToken::Escape)),
            Some(JourneyCommand::Pause)
        );
        assert_eq!(
            bindings.command_for(&KeyPress::plain(KeyToken::Home)),
            Some(JourneyCommand::Reset)
        );
        assert_eq!(
            bindings.command_for(&KeyPress::plain(KeyToken::ArrowUp)),
            Some(JourneyCommand::ScrollBy {
                delta: -100.0,
                smooth: true
            })
        );
        assert_eq!(
            bindings.command_for(&KeyPress::plain(KeyToken::ArrowLeft)),
            None
        );
    }
}
