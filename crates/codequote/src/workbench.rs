//! Explicit editor state: three code buffers, the active tab and the theme
//!
//! Front ends own a `Workbench` and hand it to the renderers instead of
//! reading ambient state.

use crate::config::Config;
use crate::estimate::{compute_estimate_with, compute_metrics_with, CategoryMetrics, EstimateResult};
use crate::preferences::Theme;
use crate::samples::sample;
use crate::Category;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workbench {
  markup: String,
  styling: String,
  scripting: String,
  active: Category,
  theme: Theme,
}

impl Default for Workbench {
  fn default() -> Self {
    Self::new(Theme::default())
  }
}

impl Workbench {
  pub fn new(theme: Theme) -> Self {
    Self {
      markup: String::new(),
      styling: String::new(),
      scripting: String::new(),
      active: Category::Markup,
      theme,
    }
  }

  /// Workbench pre-filled with the bundled sample project
  pub fn with_samples(theme: Theme) -> Self {
    let mut workbench = Self::new(theme);
    workbench.load_samples();
    workbench
  }

  /// Replace every buffer with the bundled sample project
  pub fn load_samples(&mut self) {
    for category in Category::ALL {
      self.set_text(category, sample(category));
    }
  }

  pub fn text(&self, category: Category) -> &str {
    match category {
      Category::Markup => &self.markup,
      Category::Styling => &self.styling,
      Category::Scripting => &self.scripting,
    }
  }

  fn buffer_mut(&mut self, category: Category) -> &mut String {
    match category {
      Category::Markup => &mut self.markup,
      Category::Styling => &mut self.styling,
      Category::Scripting => &mut self.scripting,
    }
  }

  pub fn set_text(&mut self, category: Category, text: impl Into<String>) {
    *self.buffer_mut(category) = text.into();
  }

  /// Append text to a buffer, separated from existing content by a newline
  pub fn append_text(&mut self, category: Category, text: &str) {
    let buffer = self.buffer_mut(category);
    if !buffer.is_empty() {
      buffer.push('\n');
    }
    buffer.push_str(text);
  }

  pub fn active(&self) -> Category {
    self.active
  }

  pub fn switch_tab(&mut self, category: Category) {
    self.active = category;
  }

  pub fn theme(&self) -> Theme {
    self.theme
  }

  pub fn is_empty(&self) -> bool {
    Category::ALL.iter().all(|category| self.text(*category).is_empty())
  }

  /// Metrics for the active tab
  pub fn code_info(&self, config: &Config) -> CategoryMetrics {
    compute_metrics_with(self.text(self.active), self.active, config.thresholds_for(self.active))
  }

  pub fn estimate(&self, config: &Config) -> EstimateResult {
    compute_estimate_with(
      &self.markup,
      &self.styling,
      &self.scripting,
      &config.rates,
      &config.threshold_table(),
    )
  }

  /// Clear every buffer and go back to the first tab; the theme is kept
  pub fn refresh(&mut self) {
    for category in Category::ALL {
      self.buffer_mut(category).clear();
    }
    self.active = Category::Markup;
  }
}
