use super::super::super::state::App;
use iced::keyboard::{Key, Modifiers, key};
use journey_core::{KeyPress, KeyToken};

impl App {
    /// Translate an iced key event into the engine's key model.
    ///
    /// Keys the engine has no use for are dropped here.
    pub(super) fn key_press_for(key: Key, modifiers: Modifiers) -> Option<KeyPress> {
        let token = match key.as_ref() {
            Key::Named(key::Named::Space) => KeyToken::Space,
            Key::Named(key::Named::Escape) => KeyToken::Escape,
            Key::Named(key::Named::Home) => KeyToken::Home,
            Key::Named(key::Named::ArrowUp) => KeyToken::ArrowUp,
            Key::Named(key::Named::ArrowDown) => KeyToken::ArrowDown,
            Key::Named(key::Named::ArrowLeft) => KeyToken::ArrowLeft,
            Key::Named(key::Named::ArrowRight) => KeyToken::ArrowRight,
            Key::Character(ch) => {
                let mut chars = ch.chars();
                let first = chars.next()?;
                if chars.next().is_some() {
                    return None;
                }
                KeyToken::Char(first.to_ascii_lowercase())
            }
            _ => return None,
        };

        Some(KeyPress {
            key: token,
            modifiers: journey_core::Modifiers {
                ctrl: modifiers.control(),
                alt: modifiers.alt(),
                shift: modifiers.shift(),
                logo: modifiers.logo(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_keys_map_to_tokens() {
        let press = App::key_press_for(Key::Named(key::Named::ArrowDown), Modifiers::empty())
            .expect("arrow key");
        assert_eq!(press, KeyPress::plain(KeyToken::ArrowDown));
    }

    #[test]
    fn characters_are_lowercased_with_modifiers_kept() {
        let press = App::key_press_for(Key::Character("B".into()), Modifiers::SHIFT)
            .expect("letter key");
        assert_eq!(press.key, KeyToken::Char('b'));
        assert!(press.modifiers.shift);
        assert!(!press.modifiers.ctrl);
    }

    #[test]
    fn ctrl_chord_carries_control() {
        let press =
            App::key_press_for(Key::Character("q".into()), Modifiers::CTRL).expect("ctrl+q");
        assert!(press.modifiers.ctrl);
    }

    #[test]
    fn unrelated_keys_are_ignored() {
        assert!(App::key_press_for(Key::Named(key::Named::F5), Modifiers::empty()).is_none());
    }
}
