//! Complexity scoring and tier classification
//!
//! A score is the ratio of pattern matches to non-blank lines, with the line
//! count floored at one. Tiers come from two per-category thresholds compared
//! with strict greater-than, so a score sitting exactly on a threshold lands in
//! the lower tier.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Category;

#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum ComplexityTier {
  #[default]
  Low,
  Medium,
  High,
}

impl ComplexityTier {
  pub fn as_str(&self) -> &'static str {
    match self {
      ComplexityTier::Low => "Low",
      ComplexityTier::Medium => "Medium",
      ComplexityTier::High => "High",
    }
  }

  /// Lines per hour as `(fast, slow)`; the fast pace gives the lower bound
  pub fn lines_per_hour(&self) -> (usize, usize) {
    match self {
      ComplexityTier::High => (20, 10),
      ComplexityTier::Medium => (30, 15),
      ComplexityTier::Low => (50, 25),
    }
  }

  /// Most severe tier of a set, `Low` when empty
  pub fn most_severe<I: IntoIterator<Item = ComplexityTier>>(tiers: I) -> ComplexityTier {
    tiers.into_iter().max().unwrap_or_default()
  }
}

impl fmt::Display for ComplexityTier {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Ratio of pattern matches to non-blank lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
  pub matches: usize,
  pub lines: usize,
}

impl Score {
  pub fn new(matches: usize, lines: usize) -> Self {
    Self { matches, lines }
  }

  /// Denominator used for the ratio; never zero
  pub fn denominator(&self) -> usize {
    self.lines.max(1)
  }

  pub fn value(&self) -> f64 {
    self.matches as f64 / self.denominator() as f64
  }

  pub fn exceeds(&self, threshold: f64) -> bool {
    self.value() > threshold
  }
}

/// Score cut-offs for one category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
  /// Scores strictly above this are High
  pub high: f64,
  /// Scores strictly above this (and not High) are Medium
  pub medium: f64,
}

impl Thresholds {
  pub const fn new(high: f64, medium: f64) -> Self {
    Self { high, medium }
  }

  pub fn for_category(category: Category) -> Self {
    match category {
      Category::Markup => Self::new(1.5, 0.8),
      Category::Styling => Self::new(0.7, 0.4),
      Category::Scripting => Self::new(0.3, 0.15),
    }
  }

  pub fn classify(&self, score: Score) -> ComplexityTier {
    if score.exceeds(self.high) {
      ComplexityTier::High
    } else if score.exceeds(self.medium) {
      ComplexityTier::Medium
    } else {
      ComplexityTier::Low
    }
  }
}

/// Thresholds for all three categories
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdTable {
  #[serde(default = "default_markup_thresholds")]
  pub markup: Thresholds,
  #[serde(default = "default_styling_thresholds")]
  pub styling: Thresholds,
  #[serde(default = "default_scripting_thresholds")]
  pub scripting: Thresholds,
}

fn default_markup_thresholds() -> Thresholds {
  Thresholds::for_category(Category::Markup)
}
fn default_styling_thresholds() -> Thresholds {
  Thresholds::for_category(Category::Styling)
}
fn default_scripting_thresholds() -> Thresholds {
  Thresholds::for_category(Category::Scripting)
}

impl Default for ThresholdTable {
  fn default() -> Self {
    Self {
      markup: default_markup_thresholds(),
      styling: default_styling_thresholds(),
      scripting: default_scripting_thresholds(),
    }
  }
}

impl ThresholdTable {
  pub fn get(&self, category: Category) -> Thresholds {
    match category {
      Category::Markup => self.markup,
      Category::Styling => self.styling,
      Category::Scripting => self.scripting,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn tier(category: Category, matches: usize, lines: usize) -> ComplexityTier {
    Thresholds::for_category(category).classify(Score::new(matches, lines))
  }

  #[test]
  fn test_tier_ordering() {
    assert!(ComplexityTier::Low < ComplexityTier::Medium);
    assert!(ComplexityTier::Medium < ComplexityTier::High);
    assert_eq!(
      ComplexityTier::most_severe([ComplexityTier::Low, ComplexityTier::High, ComplexityTier::Medium]),
      ComplexityTier::High
    );
    assert_eq!(ComplexityTier::most_severe(Vec::new()), ComplexityTier::Low);
  }

  #[test]
  fn test_score_floor() {
    let score = Score::new(3, 0);
    assert_eq!(score.denominator(), 1);
    assert_eq!(score.value(), 3.0);
    assert_eq!(Score::new(0, 0).value(), 0.0);
  }

  #[test]
  fn test_markup_thresholds() {
    assert_eq!(tier(Category::Markup, 20, 10), ComplexityTier::High);
    assert_eq!(tier(Category::Markup, 15, 10), ComplexityTier::Medium); // exactly 1.5
    assert_eq!(tier(Category::Markup, 9, 10), ComplexityTier::Medium);
    assert_eq!(tier(Category::Markup, 8, 10), ComplexityTier::Low); // exactly 0.8
    assert_eq!(tier(Category::Markup, 0, 10), ComplexityTier::Low);
  }

  #[test]
  fn test_styling_thresholds() {
    assert_eq!(tier(Category::Styling, 8, 10), ComplexityTier::High);
    assert_eq!(tier(Category::Styling, 7, 10), ComplexityTier::Medium); // exactly 0.7
    assert_eq!(tier(Category::Styling, 5, 10), ComplexityTier::Medium);
    assert_eq!(tier(Category::Styling, 4, 10), ComplexityTier::Low); // exactly 0.4
    assert_eq!(tier(Category::Styling, 3, 10), ComplexityTier::Low);
  }

  #[test]
  fn test_scripting_thresholds() {
    assert_eq!(tier(Category::Scripting, 4, 10), ComplexityTier::High);
    assert_eq!(tier(Category::Scripting, 3, 10), ComplexityTier::Medium); // exactly 0.3
    assert_eq!(tier(Category::Scripting, 2, 10), ComplexityTier::Medium);
    assert_eq!(tier(Category::Scripting, 3, 20), ComplexityTier::Low); // exactly 0.15
    assert_eq!(tier(Category::Scripting, 1, 10), ComplexityTier::Low);
  }

  #[test]
  fn test_single_line_with_many_matches_is_high() {
    assert_eq!(tier(Category::Markup, 2, 1), ComplexityTier::High);
    assert_eq!(tier(Category::Markup, 2, 0), ComplexityTier::High);
  }

  #[test]
  fn test_lines_per_hour() {
    assert_eq!(ComplexityTier::High.lines_per_hour(), (20, 10));
    assert_eq!(ComplexityTier::Medium.lines_per_hour(), (30, 15));
    assert_eq!(ComplexityTier::Low.lines_per_hour(), (50, 25));
  }

  #[test]
  fn test_threshold_table_partial_json() {
    let table: ThresholdTable = serde_json::from_str(r#"{"markup": {"high": 3.0, "medium": 2.0}}"#).unwrap();
    assert_eq!(table.get(Category::Markup), Thresholds::new(3.0, 2.0));
    assert_eq!(table.get(Category::Styling), Thresholds::for_category(Category::Styling));
  }
}
