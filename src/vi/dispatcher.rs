//! Key dispatcher for vi-style modal editing
//!
//! `ViEngine` is the single entry point the host calls for every key press.
//! It owns the widget's `ModeState` and drives a `BufferHandle`:
//!
//! - **Disabled / Insert**: nothing is consumed; the host inserts text as usual
//! - **Normal**: single keys map to a short list of actions, `d` and `g` start
//!   a two-key command
//! - **Pending**: the next key always completes or cancels the command and
//!   the engine returns to Normal
//!
//! Leaving Insert mode is up to the host: it calls `enter_normal` from
//! whatever key it binds for that.

use crate::config::Config;
use crate::core::handle::{BufferHandle, CursorShape};
use crate::core::input::Key;
use crate::vi::action::{Action, Edit, Motion};
use crate::vi::mode::{Mode, ModeState, Pending, cursor_shape_for};
use crate::vi::{edit, motion, pending};

/// What a key does in Normal mode with nothing pending
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NormalBinding {
    /// Apply these actions in order
    Run(&'static [Action]),
    /// Wait for the second key of a two-key command
    Await(Pending),
}

use Action::{Edit as E, ModeChange, Motion as M};

const TO_INSERT: Action = ModeChange(Mode::Insert);

fn normal_binding(key: &Key) -> Option<NormalBinding> {
    use NormalBinding::{Await, Run};

    let binding = match key {
        // Mode switching
        Key::Char('i') => Run(&[TO_INSERT]),
        Key::Char('I') => Run(&[M(Motion::LineStart), TO_INSERT]),
        Key::Char('a') => Run(&[M(Motion::Right), TO_INSERT]),
        Key::Char('A') => Run(&[M(Motion::LineEnd), TO_INSERT]),
        Key::Char('o') => Run(&[M(Motion::LineEnd), E(Edit::InsertNewline), TO_INSERT]),
        Key::Char('O') => Run(&[
            M(Motion::LineStart),
            E(Edit::InsertNewline),
            M(Motion::Up),
            TO_INSERT,
        ]),

        // Movement
        Key::Char('h') | Key::Left => Run(&[M(Motion::Left)]),
        Key::Char('l') | Key::Right => Run(&[M(Motion::Right)]),
        Key::Char('j') | Key::Down => Run(&[M(Motion::Down)]),
        Key::Char('k') | Key::Up => Run(&[M(Motion::Up)]),
        Key::Char('w') => Run(&[M(Motion::WordForward)]),
        Key::Char('b') => Run(&[M(Motion::WordBackward)]),
        Key::Char('e') => Run(&[M(Motion::WordEnd)]),
        Key::Char('0') | Key::Home => Run(&[M(Motion::LineStart)]),
        Key::Char('$') | Key::End => Run(&[M(Motion::LineEnd)]),

        // Document movement
        Key::Char('G') => Run(&[M(Motion::DocumentEnd)]),
        Key::Char('g') => Await(Pending::Goto),

        // Editing
        Key::Char('x') | Key::Delete => Run(&[E(Edit::DeleteChar)]),
        Key::Char('d') => Await(Pending::Delete),
        Key::Char('C') => Run(&[E(Edit::DeleteToLineEnd), TO_INSERT]),
        Key::Char('D') => Run(&[E(Edit::DeleteToLineEnd)]),
        Key::Char('s') => Run(&[E(Edit::DeleteChar), TO_INSERT]),
        Key::Char('S') => Run(&[E(Edit::DeleteLine), TO_INSERT]),

        _ => return None,
    };
    Some(binding)
}

/// Modal input engine for one editable widget
#[derive(Debug, Clone)]
pub struct ViEngine {
    state: ModeState,
    /// Land in Normal instead of Insert whenever modal editing is switched on
    start_in_normal: bool,
}

impl ViEngine {
    /// Create an engine in Insert mode
    pub fn new(enabled: bool, base_cursor_shape: CursorShape) -> Self {
        Self {
            state: ModeState::new(enabled, base_cursor_shape),
            start_in_normal: false,
        }
    }

    /// Create an engine from the `vi-mode`, `vi-start-normal` and
    /// `cursor-shape` settings
    pub fn from_config(config: &Config) -> Self {
        let enabled = config.get_bool("vi-mode").unwrap_or(false);
        let shape = match config.get_string("cursor-shape") {
            Some(name) => name.parse().unwrap_or_else(|err| {
                log::warn!("{}, using default cursor shape", err);
                CursorShape::default()
            }),
            None => CursorShape::default(),
        };
        Self {
            state: ModeState::new(enabled, shape),
            start_in_normal: config.get_bool("vi-start-normal").unwrap_or(false),
        }
    }

    /// Put the widget in the engine's initial mode and cursor shape.
    /// Call once when the widget is created.
    pub fn attach<B: BufferHandle + ?Sized>(&mut self, buf: &mut B) {
        if self.state.is_enabled() && self.start_in_normal {
            self.enter_normal(buf);
        } else {
            self.enter_insert(buf);
        }
    }

    pub fn state(&self) -> &ModeState {
        &self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.state.is_enabled()
    }

    pub fn is_normal(&self) -> bool {
        self.state.is_normal()
    }

    /// Status-line text: "", "INSERT", "NORMAL" or the pending prefix
    pub fn indicator(&self) -> &'static str {
        self.state.indicator()
    }

    /// Turn modal editing on or off
    pub fn set_enabled<B: BufferHandle + ?Sized>(&mut self, buf: &mut B, enabled: bool) {
        if self.state.is_enabled() == enabled {
            return;
        }
        log::debug!("vi mode {}", if enabled { "enabled" } else { "disabled" });
        self.state.set_enabled(enabled);
        self.attach(buf);
    }

    /// Switch to Normal mode, dropping any pending prefix
    pub fn enter_normal<B: BufferHandle + ?Sized>(&mut self, buf: &mut B) {
        if self.state.mode() != Mode::Normal {
            log::debug!("mode: {} -> NORMAL", self.state.mode().as_str());
        }
        self.state.set_mode(Mode::Normal);
        self.update_cursor(buf);
    }

    /// Switch to Insert mode
    pub fn enter_insert<B: BufferHandle + ?Sized>(&mut self, buf: &mut B) {
        if self.state.mode() != Mode::Insert {
            log::debug!("mode: {} -> INSERT", self.state.mode().as_str());
        }
        self.state.set_mode(Mode::Insert);
        self.update_cursor(buf);
    }

    fn update_cursor<B: BufferHandle + ?Sized>(&self, buf: &mut B) {
        buf.set_cursor_shape(cursor_shape_for(&self.state));
    }

    /// Process one key press. Returns true if the key was consumed; false
    /// means the host should apply its default handling.
    pub fn handle_key<B: BufferHandle + ?Sized>(&mut self, buf: &mut B, key: &Key) -> bool {
        if !self.state.is_normal() {
            return false;
        }

        // The key after a prefix is always consumed, matched or not
        if let Some(prefix) = self.state.take_pending() {
            let action = pending::resolve(prefix, key);
            log::trace!("{}{} -> {:?}", prefix.as_str(), key, action);
            if action == Action::Cancel {
                log::debug!("cancelled '{}' on {}", prefix.as_str(), key);
            }
            self.apply(buf, action);
            return true;
        }

        match normal_binding(key) {
            Some(NormalBinding::Run(actions)) => {
                log::trace!("{} -> {:?}", key, actions);
                for action in actions {
                    self.apply(buf, *action);
                }
                true
            }
            Some(NormalBinding::Await(prefix)) => {
                log::trace!("{} -> pending '{}'", key, prefix.as_str());
                self.state.set_pending(prefix);
                true
            }
            None => false,
        }
    }

    fn apply<B: BufferHandle + ?Sized>(&mut self, buf: &mut B, action: Action) {
        match action {
            Action::Motion(m) => motion::apply_motion(buf, m),
            Action::Edit(e) => edit::apply_edit(buf, e),
            Action::ModeChange(Mode::Insert) => self.enter_insert(buf),
            Action::ModeChange(Mode::Normal) => self.enter_normal(buf),
            Action::Cancel => {}
        }
    }
}
