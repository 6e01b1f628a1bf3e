use std::fmt;
use std::str::FromStr;

use crate::ui::mvi::UiState;

/// Two-valued visual theme. Persisted as `"light"` / `"dark"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ThemeSetting {
    Light,
    #[default]
    Dark,
}

impl ThemeSetting {
    /// Stable persisted form. Once published, do not rename.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

impl fmt::Display for ThemeSetting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A stored or user-supplied value that is neither `light` nor `dark`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown theme '{0}' (expected 'light' or 'dark')")]
pub struct InvalidTheme(pub String);

impl FromStr for ThemeSetting {
    type Err = InvalidTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(InvalidTheme(other.to_string())),
        }
    }
}

impl UiState for ThemeSetting {}
