//! Signals that can start a search.

/// Keys the search input reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// The confirm key (`Enter`).
    Confirm,
    Char(char),
    Backspace,
    Escape,
}

/// A UI signal delivered to the search filter.
///
/// Only two signals run a search: activating the search button, and
/// releasing the confirm key in the input field. Every other key release is
/// plain text editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Activate,
    KeyRelease(Key),
}

impl Trigger {
    /// Returns true if this signal runs a search.
    ///
    /// # Examples
    ///
    /// ```
    /// use notesift::search::{Key, Trigger};
    ///
    /// assert!(Trigger::Activate.fires());
    /// assert!(Trigger::KeyRelease(Key::Confirm).fires());
    /// assert!(!Trigger::KeyRelease(Key::Char('a')).fires());
    /// ```
    #[must_use]
    pub const fn fires(&self) -> bool {
        matches!(self, Self::Activate | Self::KeyRelease(Key::Confirm))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn editing_keys_do_not_fire() {
        for key in [Key::Char('x'), Key::Backspace, Key::Escape] {
            assert!(!Trigger::KeyRelease(key).fires(), "{key:?}");
        }
    }
}
