//! Terminal event handler module
//!
//! Routes each key in a fixed order: host key bindings, then the modal
//! engine, then default text-field handling.

use crate::core::app::EditorApp;
use crate::core::dispatcher::{DispatchResult, dispatch};
use crate::terminal::events::EditorEvent;
use crate::terminal::keybinds::KeyBindingManager;

/// Processes a single editor event and returns true if exit is requested.
pub fn process_terminal_event(
    app: &mut EditorApp,
    keybind_manager: &KeyBindingManager,
    event: EditorEvent,
) -> bool {
    match event {
        EditorEvent::Key(key) => {
            app.message = None;

            if let Some(command) = keybind_manager.lookup(&key) {
                match dispatch(app, command) {
                    DispatchResult::Exit => return true,
                    DispatchResult::Info(msg) => app.message = Some(msg),
                    DispatchResult::Success => {}
                    // Command does not apply; let the key through
                    DispatchResult::NotHandled => {
                        app.handle_key(key);
                    }
                }
                return false;
            }

            if !app.handle_key(key) {
                log::trace!("unhandled key {}", key);
            }
        }
        EditorEvent::Resize(cols, rows) => {
            // Last row is the status line
            app.textarea
                .set_dimensions(cols as usize, (rows as usize).saturating_sub(1));
        }
        EditorEvent::None => {}
    }
    false
}
