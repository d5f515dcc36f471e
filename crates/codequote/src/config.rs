//! Configuration management for codequote
//!
//! Handles loading and saving per-line rates, complexity threshold overrides
//! and the directories skipped while collecting source files.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

use crate::complexity::{ThresholdTable, Thresholds};
use crate::estimate::Rates;
use crate::{Category, Result};

/// File names probed, in order, when no explicit config is given
pub const CONFIG_PATHS: [&str; 3] = [".codequote.json", "codequote.json", ".codequote/config.json"];

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
  /// Price per non-blank line, in minor units
  #[serde(default)]
  pub rates: Rates,
  /// Symbol printed in front of amounts
  #[serde(default = "default_currency_symbol")]
  pub currency_symbol: String,
  /// Category-specific threshold overrides
  #[serde(default)]
  pub thresholds: HashMap<Category, Thresholds>,
  /// Directory names skipped during traversal
  #[serde(default = "default_ignore_dirs")]
  pub ignore_dirs: Vec<String>,
}

fn default_currency_symbol() -> String {
  "$".to_string()
}

fn default_ignore_dirs() -> Vec<String> {
  ["node_modules", "target", "build", "dist", ".git"].iter().map(|dir| dir.to_string()).collect()
}

impl Default for Config {
  fn default() -> Self {
    Self {
      rates: Rates::default(),
      currency_symbol: default_currency_symbol(),
      thresholds: HashMap::new(),
      ignore_dirs: default_ignore_dirs(),
    }
  }
}

impl Config {
  /// Load configuration from a file, rejecting out-of-range rates
  pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = serde_json::from_str(&content)?;
    config.rates.validate()?;
    Ok(config)
  }

  /// Load configuration from the current directory or defaults
  pub fn load() -> Result<Self> {
    Self::load_from_dir(Path::new("."))
  }

  pub fn load_from_dir(dir: &Path) -> Result<Self> {
    for name in &CONFIG_PATHS {
      let path = dir.join(name);
      if path.exists() {
        tracing::debug!(path = %path.display(), "loading config");
        return Self::load_from_file(path);
      }
    }

    Ok(Config::default())
  }

  /// Save configuration to a file
  pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
    let content = serde_json::to_string_pretty(self)?;
    std::fs::write(path, content)?;
    Ok(())
  }

  /// Thresholds for a category, honouring overrides
  pub fn thresholds_for(&self, category: Category) -> Thresholds {
    self.thresholds.get(&category).copied().unwrap_or_else(|| Thresholds::for_category(category))
  }

  pub fn threshold_table(&self) -> ThresholdTable {
    ThresholdTable {
      markup: self.thresholds_for(Category::Markup),
      styling: self.thresholds_for(Category::Styling),
      scripting: self.thresholds_for(Category::Scripting),
    }
  }

  /// Check if a directory name is skipped during traversal
  pub fn ignores_dir(&self, name: &str) -> bool {
    self.ignore_dirs.iter().any(|dir| dir == name)
  }
}
