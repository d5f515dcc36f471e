//! Price and time estimation
//!
//! Pure functions from three code buffers to an [`EstimateResult`]. Nothing is
//! cached between calls; every estimate is computed from scratch.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, info};

use crate::complexity::{ComplexityTier, Score, ThresholdTable, Thresholds};
use crate::counting::{count_chars, count_lines};
use crate::patterns::count_matches;
use crate::{Category, Money, QuoteError, Result};

/// Raw text of one buffer, tagged with its category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSample {
  pub category: Category,
  pub text: String,
}

impl CodeSample {
  pub fn new(category: Category, text: impl Into<String>) -> Self {
    Self { category, text: text.into() }
  }

  pub fn metrics(&self) -> CategoryMetrics {
    compute_metrics(&self.text, self.category)
  }
}

/// Everything derived from a single buffer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryMetrics {
  pub category: Category,
  pub lines: usize,
  pub chars: usize,
  pub matches: usize,
  pub score: f64,
  pub tier: ComplexityTier,
}

/// Per-line prices in minor units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rates {
  #[serde(default = "default_markup_rate")]
  pub markup: Money,
  #[serde(default = "default_styling_rate")]
  pub styling: Money,
  #[serde(default = "default_scripting_rate")]
  pub scripting: Money,
}

fn default_markup_rate() -> Money {
  Money::from_minor(25)
}
fn default_styling_rate() -> Money {
  Money::from_minor(50)
}
fn default_scripting_rate() -> Money {
  Money::from_minor(75)
}

impl Default for Rates {
  fn default() -> Self {
    Self {
      markup: default_markup_rate(),
      styling: default_styling_rate(),
      scripting: default_scripting_rate(),
    }
  }
}

impl Rates {
  /// Largest accepted per-line rate, 1,000,000.00 in major units
  pub const MAX_RATE: Money = Money::from_minor(100_000_000);

  pub fn get(&self, category: Category) -> Money {
    match category {
      Category::Markup => self.markup,
      Category::Styling => self.styling,
      Category::Scripting => self.scripting,
    }
  }

  /// Reject rates whose totals could leave the exact range
  pub fn validate(&self) -> Result<()> {
    for category in Category::ALL {
      let rate = self.get(category);
      if rate > Self::MAX_RATE {
        return Err(QuoteError::RateTooLarge { category, rate, max: Self::MAX_RATE });
      }
    }
    Ok(())
  }
}

/// Hour bounds of an estimate, lower first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
  pub lower: usize,
  pub upper: usize,
}

impl TimeRange {
  pub fn for_lines(total_lines: usize, tier: ComplexityTier) -> Self {
    let (fast, slow) = tier.lines_per_hour();
    Self { lower: total_lines.div_ceil(fast), upper: total_lines.div_ceil(slow) }
  }
}

impl fmt::Display for TimeRange {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}-{} hours", self.lower, self.upper)
  }
}

/// Metrics and cost of one category inside an estimate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryEstimate {
  pub metrics: CategoryMetrics,
  pub rate: Money,
  pub cost: Money,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimateResult {
  pub markup: CategoryEstimate,
  pub styling: CategoryEstimate,
  pub scripting: CategoryEstimate,
  pub total_cost: Money,
  pub total_lines: usize,
  pub overall_tier: ComplexityTier,
  pub time_range: TimeRange,
}

impl EstimateResult {
  pub fn get(&self, category: Category) -> &CategoryEstimate {
    match category {
      Category::Markup => &self.markup,
      Category::Styling => &self.styling,
      Category::Scripting => &self.scripting,
    }
  }

  /// Category estimates in display order
  pub fn categories(&self) -> [&CategoryEstimate; 3] {
    [&self.markup, &self.styling, &self.scripting]
  }
}

/// Metrics for one buffer using the default thresholds
pub fn compute_metrics(text: &str, category: Category) -> CategoryMetrics {
  compute_metrics_with(text, category, Thresholds::for_category(category))
}

pub fn compute_metrics_with(text: &str, category: Category, thresholds: Thresholds) -> CategoryMetrics {
  let lines = count_lines(text);
  let chars = count_chars(text);
  let matches = count_matches(text, category);
  let score = Score::new(matches, lines);
  let tier = thresholds.classify(score);

  debug!(%category, lines, chars, matches, score = score.value(), %tier, "computed category metrics");

  CategoryMetrics { category, lines, chars, matches, score: score.value(), tier }
}

/// Estimate with the default rates and thresholds
pub fn compute_estimate(markup: &str, styling: &str, scripting: &str) -> EstimateResult {
  compute_estimate_with(markup, styling, scripting, &Rates::default(), &ThresholdTable::default())
}

pub fn compute_estimate_with(
  markup: &str,
  styling: &str,
  scripting: &str,
  rates: &Rates,
  thresholds: &ThresholdTable,
) -> EstimateResult {
  let category_estimate = |text: &str, category: Category| {
    let metrics = compute_metrics_with(text, category, thresholds.get(category));
    let rate = rates.get(category);
    CategoryEstimate { metrics, rate, cost: rate * metrics.lines }
  };

  let markup = category_estimate(markup, Category::Markup);
  let styling = category_estimate(styling, Category::Styling);
  let scripting = category_estimate(scripting, Category::Scripting);

  let parts = [&markup, &styling, &scripting];
  let total_cost: Money = parts.iter().map(|part| part.cost).sum();
  let total_lines: usize = parts.iter().map(|part| part.metrics.lines).sum();
  let overall_tier = ComplexityTier::most_severe(parts.iter().map(|part| part.metrics.tier));
  let time_range = TimeRange::for_lines(total_lines, overall_tier);

  info!(total_lines, total = %total_cost, tier = %overall_tier, hours = %time_range, "estimate computed");

  EstimateResult { markup, styling, scripting, total_cost, total_lines, overall_tier, time_range }
}
