//! Light/dark theme flag and its persisted preference.
//!
//! SYSTEM CONTEXT
//! ==============
//! The flag is the only piece of state that survives a reload. Every visual
//! reflection (pill label, icon class, `<body>` class) is derived from
//! [`Theme`], so no observer can see a half-applied toggle.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use crate::consts::THEME_STORAGE_KEY;
use crate::util::storage::PreferenceStore;

/// Root-level class present while the dark theme is active.
pub const DARK_THEME_CLASS: &str = "dark-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Parse a persisted value. Only `"dark"` selects the dark theme.
    #[must_use]
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Self::Dark,
            _ => Self::Light,
        }
    }

    #[must_use]
    pub fn stored_value(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Status pill text.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }

    /// Icon on the toggle: the sun offers a way back to light, the moon to dark.
    #[must_use]
    pub fn icon_class(self) -> &'static str {
        match self {
            Self::Light => "moon-icon",
            Self::Dark => "sun-icon",
        }
    }
}

/// Owns the theme flag and writes it through to a [`PreferenceStore`].
#[derive(Clone, Debug)]
pub struct ThemeController<S> {
    theme: Theme,
    store: S,
}

impl<S: PreferenceStore> ThemeController<S> {
    /// Read the persisted flag, defaulting to [`Theme::Light`].
    pub fn initialize(store: S) -> Self {
        let theme = Theme::from_stored(store.read(THEME_STORAGE_KEY).as_deref());
        Self { theme, store }
    }

    /// Flip the flag and persist it. Exactly one storage write per call.
    pub fn toggle(&mut self) -> Theme {
        self.theme = self.theme.toggled();
        self.store.write(THEME_STORAGE_KEY, self.theme.stored_value());
        self.theme
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }
}
