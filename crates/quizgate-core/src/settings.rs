use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::Result;

use crate::storage::{KeyValueStore, THEME_KEY};

/// Theme identifier. Any string is accepted and kept verbatim, so whatever
/// was stored reads back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Theme(Cow<'static, str>);

impl Theme {
    pub const LIGHT: Theme = Theme(Cow::Borrowed("light"));
    pub const DARK: Theme = Theme(Cow::Borrowed("dark"));

    pub fn new(id: impl Into<String>) -> Self {
        Theme(Cow::Owned(id.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_dark(&self) -> bool {
        self.as_str() == Self::DARK.as_str()
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Theme::new(s))
    }
}

/// UI preferences that outlive quiz runs and sessions.
#[derive(Clone)]
pub struct SettingsStore {
    store: Arc<dyn KeyValueStore>,
}

impl SettingsStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn set_theme(&self, theme: &Theme) -> Result<()> {
        self.store.set(THEME_KEY, theme.as_str())
    }

    /// `None` only when unset
    pub fn theme(&self) -> Result<Option<Theme>> {
        Ok(self.store.get(THEME_KEY)?.map(Theme::new))
    }

    pub fn clear(&self) -> Result<()> {
        self.store.remove(THEME_KEY)
    }
}
