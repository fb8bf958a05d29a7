//! Persisted light/dark theme preference.
//!
//! The preference lives under a fixed key in a [`PreferenceStore`]. It is read
//! once by [`ThemeState::init`] and written back on every change.

use anyhow::{Context, Result};
use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};
use tracing::debug;

use crate::Config;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(anyhow::anyhow!("Unknown theme '{s}'. Supported themes: light, dark.")),
        }
    }
}

/// Flat string key/value persistence.
pub trait PreferenceStore: std::fmt::Debug {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Preferences kept as a flat TOML table in a single file.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `prefs.toml` in the platform data directory.
    pub fn default_location() -> Result<Self> {
        Ok(Self::at(Config::project_dirs()?.data_dir().join("prefs.toml")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read preferences: {}", self.path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse preferences: {}", self.path.display()))
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut all = self.read_all()?;
        all.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create preferences directory: {}", parent.display())
            })?;
        }

        let toml = toml::to_string(&all).context("Failed to serialize preferences to TOML")?;
        fs::write(&self.path, toml)
            .with_context(|| format!("Failed to write preferences: {}", self.path.display()))
    }
}

/// Current theme plus the store it is mirrored to.
#[derive(Debug)]
pub struct ThemeState<S: PreferenceStore> {
    current: Theme,
    store: S,
}

impl<S: PreferenceStore> ThemeState<S> {
    /// Read the stored theme, defaulting to light when absent or unreadable.
    pub fn init(store: S) -> Self {
        let current = match store.get(THEME_KEY) {
            Ok(Some(value)) => value.parse().unwrap_or_else(|err| {
                debug!(%err, "ignoring stored theme");
                Theme::default()
            }),
            Ok(None) => Theme::default(),
            Err(err) => {
                debug!(%err, "theme preference unreadable");
                Theme::default()
            }
        };

        Self { current, store }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Persist the theme, then make it current. A failed write changes nothing.
    pub fn set(&mut self, theme: Theme) -> Result<()> {
        self.store.set(THEME_KEY, theme.as_str())?;
        self.current = theme;
        Ok(())
    }

    pub fn toggle(&mut self) -> Result<Theme> {
        let next = self.current.toggled();
        self.set(next)?;
        Ok(next)
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FilePreferenceStore {
        FilePreferenceStore::at(dir.path().join("data").join("prefs.toml"))
    }

    #[test]
    fn defaults_to_light_when_absent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let state = ThemeState::init(store_in(&dir));
        assert_eq!(state.current(), Theme::Light);
    }

    #[test]
    fn change_is_written_and_read_back() {
        let dir = tempfile::tempdir().expect("tempdir");

        let mut state = ThemeState::init(store_in(&dir));
        assert_eq!(state.toggle().expect("toggle persists"), Theme::Dark);

        let reopened = ThemeState::init(store_in(&dir));
        assert_eq!(reopened.current(), Theme::Dark);
    }

    #[test]
    fn set_keeps_other_keys() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = store_in(&dir);
        store.set("lang", "en").expect("write succeeds");

        let mut state = ThemeState::init(store);
        state.set(Theme::Dark).expect("write succeeds");

        let store = state.into_store();
        assert_eq!(store.get("lang").unwrap().as_deref(), Some("en"));
        assert_eq!(store.get(THEME_KEY).unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn garbage_value_falls_back_to_light() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mut store = store_in(&dir);
        store.set(THEME_KEY, "solarized").expect("write succeeds");

        assert_eq!(ThemeState::init(store).current(), Theme::Light);
    }

    #[derive(Debug)]
    struct ReadOnlyStore;

    impl PreferenceStore for ReadOnlyStore {
        fn get(&self, _key: &str) -> Result<Option<String>> {
            Ok(Some("dark".into()))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(anyhow::anyhow!("read-only filesystem"))
        }
    }

    #[test]
    fn failed_write_keeps_current_theme() {
        let mut state = ThemeState::init(ReadOnlyStore);
        assert_eq!(state.current(), Theme::Dark);

        assert!(state.set(Theme::Light).is_err());
        assert_eq!(state.current(), Theme::Dark);

        assert!(state.toggle().is_err());
        assert_eq!(state.current(), Theme::Dark);
    }

    #[test]
    fn parse_theme() {
        assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!("blue".parse::<Theme>().is_err());
    }
}
