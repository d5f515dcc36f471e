//! Terminal and JSON rendering of estimates
//!
//! Renderers build strings; printing is left to the caller. Colors come from a
//! palette chosen by the theme.

use clap::ValueEnum;
use colored::*;
use serde::Serialize;

use crate::complexity::ComplexityTier;
use crate::estimate::{CategoryMetrics, EstimateResult};
use crate::preferences::Theme;
use crate::Result;

const TOTAL_WIDTH: usize = 60;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
  #[default]
  Pretty,
  Json,
}

/// Colors for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
  pub heading: Color,
  pub amount: Color,
  pub low: Color,
  pub medium: Color,
  pub high: Color,
}

impl Palette {
  pub fn for_theme(theme: Theme) -> Self {
    match theme {
      Theme::Light => Palette {
        heading: Color::Magenta,
        amount: Color::Blue,
        low: Color::Green,
        medium: Color::Yellow,
        high: Color::Red,
      },
      Theme::Dark => Palette {
        heading: Color::BrightMagenta,
        amount: Color::BrightCyan,
        low: Color::BrightGreen,
        medium: Color::BrightYellow,
        high: Color::BrightRed,
      },
    }
  }

  pub fn tier(&self, tier: ComplexityTier) -> Color {
    match tier {
      ComplexityTier::Low => self.low,
      ComplexityTier::Medium => self.medium,
      ComplexityTier::High => self.high,
    }
  }
}

pub struct Renderer {
  palette: Palette,
  currency_symbol: String,
}

impl Renderer {
  pub fn new(theme: Theme, currency_symbol: impl Into<String>) -> Self {
    Self { palette: Palette::for_theme(theme), currency_symbol: currency_symbol.into() }
  }

  /// Label padded with dashes up to the value column
  fn row(&self, label: &str, value: ColoredString) -> String {
    let value_width = value.chars().count();
    let label_width = TOTAL_WIDTH.saturating_sub(value_width + 1);
    let padding = label_width.saturating_sub(label.chars().count());
    format!("{}{} {}", label, "-".repeat(padding), value)
  }

  fn tier(&self, tier: ComplexityTier) -> ColoredString {
    tier.as_str().color(self.palette.tier(tier))
  }

  pub fn estimate(&self, result: &EstimateResult) -> String {
    let mut lines = Vec::new();
    lines.push(format!("{}", "Price estimate".color(self.palette.heading).bold()));
    lines.push("=".repeat(TOTAL_WIDTH));

    for part in result.categories() {
      let metrics = &part.metrics;
      let label = format!(
        "{} ({} lines @ {}, {})",
        metrics.category.label(),
        metrics.lines,
        part.rate.format_with(&self.currency_symbol),
        metrics.tier
      );
      let cost = part.cost.format_with(&self.currency_symbol).color(self.palette.amount);
      lines.push(self.row(&label, cost));
    }

    lines.push("=".repeat(TOTAL_WIDTH));
    let total = result.total_cost.format_with(&self.currency_symbol).color(self.palette.amount).bold();
    lines.push(self.row("Total", total));
    lines.push(self.row("Complexity", self.tier(result.overall_tier)));
    lines.push(self.row("Estimated time", result.time_range.to_string().normal()));

    lines.join("\n")
  }

  pub fn code_info(&self, metrics: &CategoryMetrics) -> String {
    let heading = format!("{} code info", metrics.category.label());
    [
      format!("{}", heading.color(self.palette.heading).bold()),
      "=".repeat(TOTAL_WIDTH),
      self.row("Lines", metrics.lines.to_string().normal()),
      self.row("Characters", metrics.chars.to_string().normal()),
      self.row("Pattern matches", metrics.matches.to_string().normal()),
      self.row("Score", format!("{:.2}", metrics.score).normal()),
      self.row("Complexity", self.tier(metrics.tier)),
    ]
    .join("\n")
  }
}

#[derive(Serialize)]
struct JsonEstimate<'a> {
  currency_symbol: &'a str,
  #[serde(flatten)]
  result: &'a EstimateResult,
  display: JsonDisplay,
}

#[derive(Serialize)]
struct JsonDisplay {
  markup_cost: String,
  styling_cost: String,
  scripting_cost: String,
  total_cost: String,
  time_range: String,
}

/// JSON document with raw values (amounts in minor units) and display strings
pub fn estimate_json(result: &EstimateResult, currency_symbol: &str) -> Result<String> {
  let display = JsonDisplay {
    markup_cost: result.markup.cost.format_with(currency_symbol),
    styling_cost: result.styling.cost.format_with(currency_symbol),
    scripting_cost: result.scripting.cost.format_with(currency_symbol),
    total_cost: result.total_cost.format_with(currency_symbol),
    time_range: result.time_range.to_string(),
  };
  let doc = JsonEstimate { currency_symbol, result, display };
  Ok(serde_json::to_string_pretty(&doc)?)
}

pub fn code_info_json(metrics: &CategoryMetrics) -> Result<String> {
  Ok(serde_json::to_string_pretty(metrics)?)
}
