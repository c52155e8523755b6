//! Second-key resolution for two-key Normal mode commands

use crate::core::input::Key;
use crate::vi::action::{Action, Edit, Motion};
use crate::vi::mode::Pending;

/// (prefix, next key) -> action. Anything not listed cancels the prefix.
const RESOLUTIONS: &[(Pending, Key, Action)] = &[
    (Pending::Delete, Key::Char('d'), Action::Edit(Edit::DeleteLine)),
    (Pending::Delete, Key::Char('w'), Action::Edit(Edit::DeleteWord)),
    (Pending::Delete, Key::Char('$'), Action::Edit(Edit::DeleteToLineEnd)),
    (Pending::Delete, Key::Char('0'), Action::Edit(Edit::DeleteToLineStart)),
    (Pending::Goto, Key::Char('g'), Action::Motion(Motion::DocumentStart)),
];

/// Resolve the key that follows a pending prefix
pub fn resolve(pending: Pending, key: &Key) -> Action {
    RESOLUTIONS
        .iter()
        .find(|(prefix, next, _)| *prefix == pending && next == key)
        .map_or(Action::Cancel, |(_, _, action)| *action)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_continuations() {
        assert_eq!(
            resolve(Pending::Delete, &Key::Char('d')),
            Action::Edit(Edit::DeleteLine)
        );
        assert_eq!(
            resolve(Pending::Delete, &Key::Char('w')),
            Action::Edit(Edit::DeleteWord)
        );
        assert_eq!(
            resolve(Pending::Delete, &Key::Char('$')),
            Action::Edit(Edit::DeleteToLineEnd)
        );
        assert_eq!(
            resolve(Pending::Delete, &Key::Char('0')),
            Action::Edit(Edit::DeleteToLineStart)
        );
    }

    #[test]
    fn test_goto_continuation() {
        assert_eq!(
            resolve(Pending::Goto, &Key::Char('g')),
            Action::Motion(Motion::DocumentStart)
        );
    }

    #[test]
    fn test_unknown_second_key_cancels() {
        assert_eq!(resolve(Pending::Delete, &Key::Char('z')), Action::Cancel);
        assert_eq!(resolve(Pending::Delete, &Key::Char('g')), Action::Cancel);
        assert_eq!(resolve(Pending::Goto, &Key::Char('d')), Action::Cancel);
        assert_eq!(resolve(Pending::Goto, &Key::Esc), Action::Cancel);
        // Named keys never stand in for their character twins
        assert_eq!(resolve(Pending::Delete, &Key::End), Action::Cancel);
        assert_eq!(resolve(Pending::Delete, &Key::Char('D')), Action::Cancel);
    }
}
