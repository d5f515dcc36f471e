use std::path::PathBuf;
use thiserror::Error;

use crate::{Category, Money};

#[derive(Error, Debug)]
pub enum QuoteError {
  #[error("I/O error: {0}")]
  Io(#[from] std::io::Error),

  #[error("Invalid JSON: {0}")]
  Json(#[from] serde_json::Error),

  #[error("Unknown category '{name}' (expected markup, styling or scripting)")]
  UnknownCategory { name: String },

  #[error("Unknown theme '{name}' (expected light or dark)")]
  UnknownTheme { name: String },

  #[error("Cannot tell the category of '{}'; pass --category", .path.display())]
  UnsupportedFile { path: PathBuf },

  #[error("Unknown command '{input}' (type 'help' for a list)")]
  UnknownCommand { input: String },

  #[error("'{command}' needs an argument")]
  MissingArgument { command: &'static str },

  #[error("Rate {rate} for {category} exceeds the maximum of {max} per line")]
  RateTooLarge { category: Category, rate: Money, max: Money },

  #[error("No configuration directory available on this platform")]
  NoConfigDir,
}

impl QuoteError {
  pub fn unknown_category(name: impl Into<String>) -> Self {
    Self::UnknownCategory { name: name.into() }
  }

  pub fn unknown_theme(name: impl Into<String>) -> Self {
    Self::UnknownTheme { name: name.into() }
  }

  pub fn unknown_command(input: impl Into<String>) -> Self {
    Self::UnknownCommand { input: input.into() }
  }

  pub fn unsupported_file(path: impl Into<PathBuf>) -> Self {
    Self::UnsupportedFile { path: path.into() }
  }
}

pub type Result<T> = std::result::Result<T, QuoteError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_messages() {
    let err = QuoteError::RateTooLarge {
      category: Category::Styling,
      rate: Money::from_minor(100_000_001),
      max: Money::from_minor(100_000_000),
    };
    assert_eq!(err.to_string(), "Rate 1000000.01 for styling exceeds the maximum of 1000000.00 per line");

    assert_eq!(QuoteError::unknown_command("dance").to_string(), "Unknown command 'dance' (type 'help' for a list)");
    assert_eq!(QuoteError::MissingArgument { command: "load" }.to_string(), "'load' needs an argument");
    assert!(QuoteError::unsupported_file("notes.txt").to_string().contains("--category"));
  }
}
