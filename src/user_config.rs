// vimodal Configuration
// Edit this file to customize your editor, then rebuild

use crate::config::Config;

/// User configuration function
pub fn configure(config: &mut Config) {
    // Host keybindings
    // These are checked before the modal engine sees a key, in every mode.
    config.bind("Esc", "enter-normal-mode");
    config.bind("^S", "save-buffer");
    config.bind("^Q", "quit");
    config.bind("^V", "toggle-vi-mode");

    // =========================================================================
    // MODAL EDITING
    // =========================================================================
    // Enable vi-style Normal/Insert modes.
    // CLI override: --no-vi
    config.set("vi-mode", true);

    // Start in Normal mode instead of Insert.
    // CLI override: --normal
    config.set("vi-start-normal", false);

    // Cursor shape outside Normal mode (Normal is always a block).
    // Values: "block" | "bar" | "underline"
    // CLI override: --cursor SHAPE
    config.set("cursor-shape", "bar");

    // =========================================================================
    // DISPLAY
    // =========================================================================
    config.set("tab-width", 4i64); // Columns per tab stop
}
