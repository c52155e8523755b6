//! Modal state and cursor shape policy

use crate::core::handle::CursorShape;

/// Editing mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Keys insert text literally
    #[default]
    Insert,
    /// Keys are motions and edit commands
    Normal,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Insert => "INSERT",
            Mode::Normal => "NORMAL",
        }
    }
}

/// First key of a two-key Normal mode command, waiting for the second
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pending {
    /// `d`, waiting for a motion or a second `d`
    Delete,
    /// `g`, waiting for a second `g`
    Goto,
}

impl Pending {
    pub fn as_str(&self) -> &'static str {
        match self {
            Pending::Delete => "d",
            Pending::Goto => "g",
        }
    }
}

/// Per-widget modal editing state.
///
/// `pending` is only ever set while `mode` is Normal. When `enabled` is false
/// the mode and pending prefix are ignored and the widget behaves as a plain
/// insertion field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeState {
    enabled: bool,
    mode: Mode,
    pending: Option<Pending>,
    /// Cursor shape configured for Insert mode; Normal mode always uses Block
    base_cursor_shape: CursorShape,
}

impl ModeState {
    pub fn new(enabled: bool, base_cursor_shape: CursorShape) -> Self {
        Self {
            enabled,
            mode: Mode::Insert,
            pending: None,
            base_cursor_shape,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// True only when modal editing is on and the mode is Normal
    pub fn is_normal(&self) -> bool {
        self.enabled && self.mode == Mode::Normal
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn pending(&self) -> Option<Pending> {
        self.pending
    }

    pub fn base_cursor_shape(&self) -> CursorShape {
        self.base_cursor_shape
    }

    /// Short status-line text: empty when disabled, the pending prefix while a
    /// two-key command is in flight, otherwise the mode name.
    pub fn indicator(&self) -> &'static str {
        if !self.enabled {
            return "";
        }
        match (self.mode, self.pending) {
            (Mode::Normal, Some(pending)) => pending.as_str(),
            (mode, _) => mode.as_str(),
        }
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Switch mode. Any pending prefix is dropped on every switch.
    pub(crate) fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.pending = None;
    }

    pub(crate) fn set_pending(&mut self, pending: Pending) {
        debug_assert_eq!(self.mode, Mode::Normal, "pending outside Normal mode");
        self.pending = Some(pending);
    }

    pub(crate) fn take_pending(&mut self) -> Option<Pending> {
        self.pending.take()
    }
}

/// Cursor shape the widget should show for a state
pub fn cursor_shape_for(state: &ModeState) -> CursorShape {
    if state.is_normal() {
        CursorShape::Block
    } else {
        state.base_cursor_shape
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(enabled: bool, mode: Mode, pending: Option<Pending>) -> ModeState {
        ModeState {
            enabled,
            mode,
            pending,
            base_cursor_shape: CursorShape::Bar,
        }
    }

    #[test]
    fn test_defaults() {
        let vs = ModeState::new(false, CursorShape::Bar);
        assert!(!vs.is_enabled());
        assert_eq!(vs.mode(), Mode::Insert);
        assert_eq!(vs.pending(), None);
    }

    #[test]
    fn test_indicator_disabled_is_empty() {
        assert_eq!(state(false, Mode::Insert, None).indicator(), "");
        assert_eq!(state(false, Mode::Normal, Some(Pending::Delete)).indicator(), "");
    }

    #[test]
    fn test_indicator_modes() {
        assert_eq!(state(true, Mode::Normal, None).indicator(), "NORMAL");
        assert_eq!(state(true, Mode::Insert, None).indicator(), "INSERT");
    }

    #[test]
    fn test_indicator_pending() {
        assert_eq!(state(true, Mode::Normal, Some(Pending::Delete)).indicator(), "d");
        assert_eq!(state(true, Mode::Normal, Some(Pending::Goto)).indicator(), "g");
    }

    #[test]
    fn test_is_normal_requires_enabled() {
        let mut vs = state(true, Mode::Insert, None);
        assert!(!vs.is_normal());

        vs.set_mode(Mode::Normal);
        assert!(vs.is_normal());

        vs.set_enabled(false);
        assert!(!vs.is_normal());
    }

    #[test]
    fn test_set_mode_clears_pending() {
        let mut vs = state(true, Mode::Normal, Some(Pending::Goto));
        vs.set_mode(Mode::Normal);
        assert_eq!(vs.pending(), None);
    }

    #[test]
    fn test_take_pending() {
        let mut vs = state(true, Mode::Normal, None);
        vs.set_pending(Pending::Delete);
        assert_eq!(vs.take_pending(), Some(Pending::Delete));
        assert_eq!(vs.take_pending(), None);
    }

    #[test]
    fn test_cursor_shape_policy() {
        assert_eq!(
            cursor_shape_for(&state(true, Mode::Normal, None)),
            CursorShape::Block
        );
        assert_eq!(
            cursor_shape_for(&state(true, Mode::Insert, None)),
            CursorShape::Bar
        );
        // Disabled widgets keep the configured shape even if mode says Normal
        assert_eq!(
            cursor_shape_for(&state(false, Mode::Normal, None)),
            CursorShape::Bar
        );
    }
}
