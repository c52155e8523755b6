use std::fmt;
use std::str::FromStr;

use crate::core::app::EditorApp;
use crate::core::buffer::BufferError;

/// Commands owned by the host rather than the modal engine.
///
/// Host bindings are looked up before the engine sees a key, so they work in
/// every mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HostCommand {
    /// Leave Insert mode (usually bound to Esc)
    EnterNormalMode,
    /// Write the buffer to its file
    SaveBuffer,
    /// Exit; asks for a second press when there are unsaved changes
    Quit,
    /// Switch modal editing on or off
    ToggleViMode,
}

impl HostCommand {
    pub fn name(&self) -> &'static str {
        match self {
            HostCommand::EnterNormalMode => "enter-normal-mode",
            HostCommand::SaveBuffer => "save-buffer",
            HostCommand::Quit => "quit",
            HostCommand::ToggleViMode => "toggle-vi-mode",
        }
    }
}

impl fmt::Display for HostCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HostCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "enter-normal-mode" => Ok(HostCommand::EnterNormalMode),
            "save-buffer" => Ok(HostCommand::SaveBuffer),
            "quit" => Ok(HostCommand::Quit),
            "toggle-vi-mode" => Ok(HostCommand::ToggleViMode),
            _ => Err(format!("Unknown command: {}", s)),
        }
    }
}

/// Result of command dispatch
#[derive(Debug, PartialEq)]
pub enum DispatchResult {
    /// Command executed successfully
    Success,
    /// Command does not apply right now; the key falls through
    NotHandled,
    /// Exit requested
    Exit,
    /// Informational message to display
    Info(String),
}

/// Run a host command against the editor state
pub fn dispatch(app: &mut EditorApp, command: HostCommand) -> DispatchResult {
    log::debug!("dispatch {}", command);

    // Any command other than a repeated quit disarms the quit confirmation
    if command != HostCommand::Quit {
        app.quit_armed = false;
    }

    match command {
        HostCommand::EnterNormalMode => {
            if !app.engine.is_enabled() {
                return DispatchResult::NotHandled;
            }
            app.engine.enter_normal(&mut app.textarea);
            DispatchResult::Success
        }
        HostCommand::SaveBuffer => match app.textarea.buffer.save() {
            Ok(()) => DispatchResult::Info(format!(
                "Wrote {} lines to {}",
                app.textarea.buffer.line_count(),
                app.textarea.buffer.display_name()
            )),
            Err(BufferError::NoFilename) => {
                DispatchResult::Info("No file name; start with: vimodal FILE".to_string())
            }
            Err(err) => {
                log::error!("save failed: {}", err);
                DispatchResult::Info(format!("Save failed: {}", err))
            }
        },
        HostCommand::Quit => {
            if app.textarea.buffer.modified && !app.quit_armed {
                app.quit_armed = true;
                return DispatchResult::Info(
                    "Buffer modified; press quit again to discard changes".to_string(),
                );
            }
            DispatchResult::Exit
        }
        HostCommand::ToggleViMode => {
            let enabled = !app.engine.is_enabled();
            app.engine.set_enabled(&mut app.textarea, enabled);
            DispatchResult::Info(format!("vi mode {}", if enabled { "on" } else { "off" }))
        }
    }
}
