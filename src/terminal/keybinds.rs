use std::collections::HashMap;

use crate::config::Config;
use crate::core::dispatcher::HostCommand;
use crate::core::input::Key;

/// KeyBindingManager maps single keys to host commands
#[derive(Debug, Default)]
pub struct KeyBindingManager {
    bindings: HashMap<Key, HostCommand>,
}

impl KeyBindingManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from the config's keybinding table. Entries with an unknown key
    /// or command are skipped with a warning.
    pub fn from_config(config: &Config) -> Self {
        let mut manager = Self::new();
        for (key, command) in &config.keybindings {
            if let Err(err) = manager.bind(key, command) {
                log::warn!("ignoring binding {} -> {}: {}", key, command, err);
            }
        }
        manager
    }

    /// Add a key binding from strings like ("^S", "save-buffer")
    pub fn bind(&mut self, key: &str, command: &str) -> Result<(), String> {
        let key: Key = key.parse()?;
        let command: HostCommand = command.parse()?;
        if let Some(previous) = self.bindings.insert(key, command) {
            log::debug!("rebinding {}: {} -> {}", key, previous, command);
        }
        Ok(())
    }

    /// Look up the host command bound to a key
    pub fn lookup(&self, key: &Key) -> Option<HostCommand> {
        self.bindings.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_and_lookup() {
        let mut manager = KeyBindingManager::new();
        manager.bind("^S", "save-buffer").unwrap();
        manager.bind("Esc", "enter-normal-mode").unwrap();

        assert_eq!(manager.lookup(&Key::Ctrl('s')), Some(HostCommand::SaveBuffer));
        assert_eq!(manager.lookup(&Key::Esc), Some(HostCommand::EnterNormalMode));
        assert_eq!(manager.lookup(&Key::Char('s')), None);
    }

    #[test]
    fn test_bind_rejects_unknown() {
        let mut manager = KeyBindingManager::new();
        assert!(manager.bind("^S", "search-forward").is_err());
        assert!(manager.bind("Hyper-Q", "quit").is_err());
        assert!(manager.is_empty());
    }

    #[test]
    fn test_from_config_skips_bad_entries() {
        let mut config = Config::default();
        crate::user_config::configure(&mut config);
        config.bind("^X", "no-such-command");

        let manager = KeyBindingManager::from_config(&config);
        assert_eq!(manager.len(), 4);
        assert_eq!(manager.lookup(&Key::Ctrl('q')), Some(HostCommand::Quit));
        assert_eq!(manager.lookup(&Key::Ctrl('v')), Some(HostCommand::ToggleViMode));
        assert_eq!(manager.lookup(&Key::Ctrl('x')), None);
    }
}
