//! Code categories tracked by the estimator
//!
//! Every buffer belongs to exactly one of three categories. The category picks
//! the pattern family, the complexity thresholds and the per-line rate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::QuoteError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
  Markup,
  Styling,
  Scripting,
}

impl Category {
  /// All categories in display order
  pub const ALL: [Category; 3] = [Category::Markup, Category::Styling, Category::Scripting];

  pub fn as_str(&self) -> &'static str {
    match self {
      Category::Markup => "markup",
      Category::Styling => "styling",
      Category::Scripting => "scripting",
    }
  }

  /// Short label used for tabs and table rows
  pub fn label(&self) -> &'static str {
    match self {
      Category::Markup => "HTML",
      Category::Styling => "CSS",
      Category::Scripting => "JS",
    }
  }

  /// Guess a category from a file extension
  pub fn from_extension(ext: &str) -> Option<Self> {
    match ext.to_ascii_lowercase().as_str() {
      "html" | "htm" | "xhtml" | "svg" => Some(Category::Markup),
      "css" | "scss" | "sass" | "less" => Some(Category::Styling),
      "js" | "mjs" | "cjs" | "jsx" | "ts" | "tsx" => Some(Category::Scripting),
      _ => None,
    }
  }

  pub fn from_path(path: &Path) -> Option<Self> {
    path.extension().and_then(|ext| ext.to_str()).and_then(Self::from_extension)
  }
}

impl fmt::Display for Category {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for Category {
  type Err = QuoteError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "markup" | "html" => Ok(Category::Markup),
      "styling" | "css" => Ok(Category::Styling),
      "scripting" | "js" | "javascript" => Ok(Category::Scripting),
      _ => Err(QuoteError::unknown_category(s)),
    }
  }
}
