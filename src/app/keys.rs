//! Keyboard mapping from Zellij key events to application events.
//!
//! | Key | Event |
//! |---|---|
//! | `Enter` | `Key(Confirm)`, runs the search |
//! | `Esc` | `Key(Escape)`, hides the plugin |
//! | `Backspace`, plain or shifted characters | edit the search text |
//! | `Down` / `Ctrl+n` | `ScrollDown` |
//! | `Up` / `Ctrl+p` | `ScrollUp` |
//!
//! Characters typed with Ctrl, Alt or Super held are shortcuts, not text,
//! and are ignored unless bound above.

use crate::app::Event;
use crate::search::Key;
use zellij_tile::prelude::{BareKey, KeyModifier, KeyWithModifier};

/// Maps a key press to an application event, or `None` if it is unbound.
#[must_use]
pub fn map_key(key: &KeyWithModifier) -> Option<Event> {
    if key.bare_key == BareKey::Char('n') && key.has_modifiers(&[KeyModifier::Ctrl]) {
        return Some(Event::ScrollDown);
    }
    if key.bare_key == BareKey::Char('p') && key.has_modifiers(&[KeyModifier::Ctrl]) {
        return Some(Event::ScrollUp);
    }

    Some(match key.bare_key {
        BareKey::Enter => Event::Key(Key::Confirm),
        BareKey::Esc => Event::Key(Key::Escape),
        BareKey::Backspace => Event::Key(Key::Backspace),
        BareKey::Down => Event::ScrollDown,
        BareKey::Up => Event::ScrollUp,
        BareKey::Char(_) if is_shortcut(key) => return None,
        BareKey::Char(c) => Event::Key(Key::Char(c)),
        _ => return None,
    })
}

fn is_shortcut(key: &KeyWithModifier) -> bool {
    [KeyModifier::Ctrl, KeyModifier::Alt, KeyModifier::Super]
        .iter()
        .any(|modifier| key.key_modifiers.contains(modifier))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_and_shifted_characters_are_typed() {
        assert_eq!(
            map_key(&KeyWithModifier::new(BareKey::Char('b'))),
            Some(Event::Key(Key::Char('b')))
        );
        assert_eq!(
            map_key(&KeyWithModifier::new(BareKey::Char('B')).with_shift_modifier()),
            Some(Event::Key(Key::Char('B')))
        );
    }

    #[test]
    fn modified_characters_are_not_typed() {
        assert_eq!(map_key(&KeyWithModifier::new(BareKey::Char('c')).with_ctrl_modifier()), None);
        assert_eq!(map_key(&KeyWithModifier::new(BareKey::Char('x')).with_alt_modifier()), None);
    }

    #[test]
    fn ctrl_n_and_p_scroll() {
        assert_eq!(
            map_key(&KeyWithModifier::new(BareKey::Char('n')).with_ctrl_modifier()),
            Some(Event::ScrollDown)
        );
        assert_eq!(
            map_key(&KeyWithModifier::new(BareKey::Char('p')).with_ctrl_modifier()),
            Some(Event::ScrollUp)
        );
    }

    #[test]
    fn enter_confirms_and_escape_closes() {
        assert_eq!(map_key(&KeyWithModifier::new(BareKey::Enter)), Some(Event::Key(Key::Confirm)));
        assert_eq!(map_key(&KeyWithModifier::new(BareKey::Esc)), Some(Event::Key(Key::Escape)));
        assert_eq!(map_key(&KeyWithModifier::new(BareKey::Tab)), None);
    }
}
