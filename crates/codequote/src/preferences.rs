//! Persisted user preferences
//!
//! The only persisted state is the light/dark theme. A missing or unreadable
//! preferences file falls back to the light theme.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::{QuoteError, Result};

const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
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

  pub fn toggled(&self) -> Theme {
    match self {
      Theme::Light => Theme::Dark,
      Theme::Dark => Theme::Light,
    }
  }
}

impl fmt::Display for Theme {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Theme {
  type Err = QuoteError;

  fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "light" => Ok(Theme::Light),
      "dark" => Ok(Theme::Dark),
      _ => Err(QuoteError::unknown_theme(s)),
    }
  }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
  #[serde(default)]
  pub theme: Theme,
}

/// Directory holding codequote state, `CODEQUOTE_HOME` first
pub fn get_state_dir() -> Result<PathBuf> {
  if let Ok(custom_root) = std::env::var("CODEQUOTE_HOME") {
    return Ok(PathBuf::from(custom_root));
  }

  let config_dir = dirs::config_dir().ok_or(QuoteError::NoConfigDir)?;
  Ok(config_dir.join("codequote"))
}

impl Preferences {
  pub fn path_in(dir: &Path) -> PathBuf {
    dir.join(PREFERENCES_FILE)
  }

  /// Read preferences from a directory; anything unreadable yields defaults
  pub fn load_from(dir: &Path) -> Self {
    let path = Self::path_in(dir);
    match fs::read_to_string(&path) {
      Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
        tracing::warn!(path = %path.display(), error = %e, "ignoring malformed preferences");
        Preferences::default()
      }),
      Err(_) => Preferences::default(),
    }
  }

  pub fn load() -> Self {
    match get_state_dir() {
      Ok(dir) => Self::load_from(&dir),
      Err(_) => Preferences::default(),
    }
  }

  pub fn save_to(&self, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = Self::path_in(dir);
    fs::write(&path, serde_json::to_string_pretty(self)?)?;
    Ok(path)
  }

  pub fn save(&self) -> Result<PathBuf> {
    self.save_to(&get_state_dir()?)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use tempfile::TempDir;

  #[test]
  fn test_theme_parse_and_toggle() {
    assert_eq!("Dark".parse::<Theme>().unwrap(), Theme::Dark);
    assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
    assert!("sepia".parse::<Theme>().is_err());
    assert_eq!(Theme::Light.toggled(), Theme::Dark);
    assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
  }

  #[test]
  fn test_missing_file_defaults_to_light() {
    let temp_dir = TempDir::new().unwrap();
    assert_eq!(Preferences::load_from(temp_dir.path()).theme, Theme::Light);
  }

  #[test]
  fn test_malformed_file_defaults_to_light() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(Preferences::path_in(temp_dir.path()), "not json").unwrap();
    assert_eq!(Preferences::load_from(temp_dir.path()).theme, Theme::Light);
  }

  #[test]
  fn test_save_and_load() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("state");

    let prefs = Preferences { theme: Theme::Dark };
    let path = prefs.save_to(&nested).unwrap();

    assert!(path.exists());
    assert_eq!(Preferences::load_from(&nested), prefs);
  }
}
