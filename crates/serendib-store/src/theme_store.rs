//! # Theme Store
//!
//! Persists the display-mode preference and applies it to the view.
//!
//! Independent of the cart and catalog: a two-state machine whose current
//! state lives under one storage key, with the initial state inferred from
//! an OS-level light/dark signal when nothing is saved.

use serendib_core::Theme;
use tracing::{debug, warn};

use crate::error::StoreResult;
use crate::storage::KeyValueStorage;

/// Storage key for the persisted theme string (`"dark"` / `"light"`).
pub const THEME_KEY: &str = "theme";

/// A view root that can carry the active theme (the `data-theme` attribute
/// analog).
pub trait ThemeSurface {
    fn apply_theme(&self, theme: Theme);
}

/// Theme persistence over a [`KeyValueStorage`] backend.
pub struct ThemeStore<S: KeyValueStorage> {
    storage: S,
    surfaces: Vec<Box<dyn ThemeSurface>>,
}

impl<S: KeyValueStorage> ThemeStore<S> {
    pub fn new(storage: S) -> Self {
        ThemeStore {
            storage,
            surfaces: Vec::new(),
        }
    }

    /// Registers a surface; every apply reaches all of them.
    pub fn register_surface(&mut self, surface: Box<dyn ThemeSurface>) {
        self.surfaces.push(surface);
    }

    /// The saved theme, if a valid one is persisted.
    ///
    /// An unparseable saved value is ignored (with a warning) so the caller
    /// falls back to the system-preference chain.
    pub fn saved(&self) -> Option<Theme> {
        let raw = match self.storage.get(THEME_KEY) {
            Ok(raw) => raw?,
            Err(err) => {
                warn!(%err, "theme storage read failed, using defaults");
                return None;
            }
        };
        match raw.parse::<Theme>() {
            Ok(theme) => Some(theme),
            Err(()) => {
                warn!(value = %raw, "unrecognized saved theme, using defaults");
                None
            }
        }
    }

    /// The effective theme: saved value, else the OS signal, else dark.
    pub fn current(&self, system: Option<Theme>) -> Theme {
        Theme::initial(self.saved(), system)
    }

    /// Applies the effective theme to all surfaces at view load.
    ///
    /// Does not persist: a theme only becomes a saved preference once the
    /// user actually toggles, matching the original behavior.
    pub fn init(&self, system: Option<Theme>) -> Theme {
        let theme = self.current(system);
        debug!(theme = %theme, "initial theme applied");
        self.apply(theme);
        theme
    }

    /// Flips between the two states, applies the new one to every surface,
    /// and persists it.
    pub fn toggle(&mut self, system: Option<Theme>) -> StoreResult<Theme> {
        let next = self.current(system).toggled();
        debug!(theme = %next, "theme toggled");

        self.apply(next);
        self.storage.set(THEME_KEY, next.as_str())?;
        Ok(next)
    }

    fn apply(&self, theme: Theme) {
        for surface in &self.surfaces {
            surface.apply_theme(theme);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct FakeRoot {
        attr: Rc<RefCell<Option<Theme>>>,
    }

    impl ThemeSurface for FakeRoot {
        fn apply_theme(&self, theme: Theme) {
            *self.attr.borrow_mut() = Some(theme);
        }
    }

    #[test]
    fn test_default_chain() {
        let store = ThemeStore::new(MemoryStorage::new());
        assert_eq!(store.current(None), Theme::Dark);
        assert_eq!(store.current(Some(Theme::Light)), Theme::Light);
    }

    #[test]
    fn test_saved_theme_wins_over_system() {
        let mut storage = MemoryStorage::new();
        storage.set(THEME_KEY, "light").unwrap();

        let store = ThemeStore::new(storage);
        assert_eq!(store.current(Some(Theme::Dark)), Theme::Light);
    }

    #[test]
    fn test_unrecognized_saved_value_falls_back() {
        let mut storage = MemoryStorage::new();
        storage.set(THEME_KEY, "solarized").unwrap();

        let store = ThemeStore::new(storage);
        assert_eq!(store.saved(), None);
        assert_eq!(store.current(None), Theme::Dark);
    }

    #[test]
    fn test_toggle_flips_and_persists_each_step() {
        let mut store = ThemeStore::new(MemoryStorage::new());

        // dark → light → dark, each persisted
        assert_eq!(store.toggle(None).unwrap(), Theme::Light);
        assert_eq!(store.storage.get(THEME_KEY).unwrap().as_deref(), Some("light"));

        assert_eq!(store.toggle(None).unwrap(), Theme::Dark);
        assert_eq!(store.storage.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn test_init_applies_without_persisting() {
        let attr = Rc::new(RefCell::new(None));
        let mut store = ThemeStore::new(MemoryStorage::new());
        store.register_surface(Box::new(FakeRoot {
            attr: Rc::clone(&attr),
        }));

        let theme = store.init(Some(Theme::Light));
        assert_eq!(theme, Theme::Light);
        assert_eq!(*attr.borrow(), Some(Theme::Light));
        assert_eq!(store.storage.get(THEME_KEY).unwrap(), None);
    }

    #[test]
    fn test_toggle_applies_to_surfaces() {
        let attr = Rc::new(RefCell::new(None));
        let mut store = ThemeStore::new(MemoryStorage::new());
        store.register_surface(Box::new(FakeRoot {
            attr: Rc::clone(&attr),
        }));

        store.toggle(None).unwrap();
        assert_eq!(*attr.borrow(), Some(Theme::Light));
    }
}
