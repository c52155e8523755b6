//! Terminal (TUI) mode implementation.

use std::io;
use std::path::Path;
use std::time::Duration;

use vimodal::config::Config;
use vimodal::core::app::EditorApp;
use vimodal::terminal;
use vimodal::terminal::events::EditorEvent;

/// Run in terminal (TUI) mode.
pub fn run_terminal_mode(
    file: Option<&Path>,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let keybind_manager = terminal::keybinds::KeyBindingManager::from_config(config);
    let mut app = EditorApp::initialize_with_config(config, file)?;

    let (cols, rows) = crossterm::terminal::size()?;
    app.textarea
        .set_dimensions(cols as usize, (rows as usize).saturating_sub(1));

    let _raw_mode = terminal::raw::RawMode::new()?;
    let mut stdout = io::stdout();
    terminal::render::render(&mut app, &mut stdout)?;

    let mut event_handler = terminal::events::EventHandler::new();
    loop {
        if !event_handler.poll(Duration::from_millis(100))? {
            continue;
        }

        let event = event_handler.read()?;
        if event == EditorEvent::None {
            continue;
        }

        let exit = terminal::event_handler::process_terminal_event(
            &mut app,
            &keybind_manager,
            event,
        );
        if exit {
            log::info!("exit requested");
            break;
        }

        terminal::render::render(&mut app, &mut stdout)?;
    }
    Ok(())
}
