//! App Configuration
//!
//! Defaults for every page, with a debug override read from storage.

use log::LevelFilter;

use crate::storage::KeyValueStore;

/// Storage keys, one per persisted value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StorageKeys {
    pub tasks: &'static str,
    pub lists: &'static str,
    pub theme: &'static str,
    pub log_level: &'static str,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            tasks: "tasks",
            lists: "savedLists",
            theme: "theme",
            log_level: "logLevel",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub keys: StorageKeys,
    /// Color of a list created without one
    pub default_list_color: &'static str,
    pub pomodoro_minutes: u32,
    pub toast_duration_ms: u32,
    /// Records kept by the console logger
    pub log_capacity: usize,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            keys: StorageKeys::default(),
            default_list_color: "#ff6b9d",
            pomodoro_minutes: 25,
            toast_duration_ms: 3000,
            log_capacity: 200,
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    /// Defaults plus the `logLevel` override, if one is stored
    pub fn load(store: &impl KeyValueStore) -> Self {
        let mut config = Self::default();
        match store.get(config.keys.log_level) {
            Ok(Some(raw)) => match raw.trim().parse::<LevelFilter>() {
                Ok(level) => config.log_level = level,
                Err(_) => log::warn!("[config] ignoring unknown log level {:?}", raw),
            },
            Ok(None) => {}
            Err(err) => log::warn!("[config] {}", err),
        }
        config
    }

    pub fn pomodoro_secs(&self) -> u32 {
        self.pomodoro_minutes * 60
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_defaults() {
        let config = Config::load(&MemoryStore::new());
        assert_eq!(config.keys.tasks, "tasks");
        assert_eq!(config.keys.lists, "savedLists");
        assert_eq!(config.default_list_color, "#ff6b9d");
        assert_eq!(config.pomodoro_secs(), 1500);
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_log_level_override() {
        let store = MemoryStore::new();
        store.set("logLevel", "debug").unwrap();
        assert_eq!(Config::load(&store).log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_bad_log_level_keeps_default() {
        let store = MemoryStore::new();
        store.set("logLevel", "loud").unwrap();
        assert_eq!(Config::load(&store).log_level, LevelFilter::Info);
    }
}
