//! What a Normal mode key resolves to

use crate::vi::mode::Mode;

/// Cursor motion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Left,
    Right,
    Up,
    Down,
    WordForward,
    WordBackward,
    /// Lands on the next word start, same as `WordForward`
    WordEnd,
    LineStart,
    LineEnd,
    DocumentStart,
    DocumentEnd,
}

/// Text mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit {
    DeleteChar,
    DeleteWord,
    DeleteToLineEnd,
    DeleteToLineStart,
    DeleteLine,
    InsertNewline,
}

/// One step of a Normal mode command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Motion(Motion),
    Edit(Edit),
    ModeChange(Mode),
    /// A pending command that did not match; nothing happens
    Cancel,
}
