//! Theme Preference

use crate::models::Theme;
use crate::storage::KeyValueStore;

pub struct ThemeController<S> {
    theme: Theme,
    key: &'static str,
    store: S,
}

impl<S: KeyValueStore> ThemeController<S> {
    pub fn load(store: S, key: &'static str) -> Self {
        let theme = match store.get(key) {
            Ok(saved) => saved.as_deref().map(Theme::parse).unwrap_or_default(),
            Err(err) => {
                log::warn!("[theme] {}", err);
                Theme::default()
            }
        };
        Self { theme, key, store }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Switch and persist. A failed write keeps the new theme for the session.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        if let Err(err) = self.store.set(self.key, self.theme.as_str()) {
            log::warn!("[theme] {}", err);
        }
        self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::testing::ReadOnlyStore;
    use crate::storage::MemoryStore;

    #[test]
    fn test_defaults_to_light() {
        let theme = ThemeController::load(MemoryStore::new(), "theme");
        assert_eq!(theme.theme(), Theme::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let store = MemoryStore::new();
        let mut theme = ThemeController::load(store.clone(), "theme");

        assert_eq!(theme.toggle(), Theme::Dark);
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));

        let reloaded = ThemeController::load(store.clone(), "theme");
        assert_eq!(reloaded.theme(), Theme::Dark);

        theme.toggle();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("light"));
    }

    #[test]
    fn test_failed_write_still_switches() {
        let mut theme = ThemeController::load(ReadOnlyStore::default(), "theme");
        assert_eq!(theme.toggle(), Theme::Dark);
        assert_eq!(theme.theme(), Theme::Dark);
    }
}
