//! Bundled sample project used to pre-fill the workbench

use crate::Category;

const LANDING_HTML: &str = include_str!("../samples/landing.html");
const LANDING_CSS: &str = include_str!("../samples/landing.css");
const LANDING_JS: &str = include_str!("../samples/landing.js");

pub fn sample(category: Category) -> &'static str {
  match category {
    Category::Markup => LANDING_HTML,
    Category::Styling => LANDING_CSS,
    Category::Scripting => LANDING_JS,
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::complexity::ComplexityTier;
  use crate::estimate::compute_metrics;

  #[test]
  fn test_samples_are_non_empty() {
    for category in Category::ALL {
      assert!(!sample(category).trim().is_empty());
    }
  }

  #[test]
  fn test_sample_metrics() {
    let markup = compute_metrics(sample(Category::Markup), Category::Markup);
    assert_eq!(markup.lines, 46);
    assert_eq!(markup.matches, 68);
    assert_eq!(markup.tier, ComplexityTier::Medium);

    let styling = compute_metrics(sample(Category::Styling), Category::Styling);
    assert_eq!(styling.lines, 86);
    assert_eq!(styling.matches, 16);
    assert_eq!(styling.tier, ComplexityTier::Low);

    let scripting = compute_metrics(sample(Category::Scripting), Category::Scripting);
    assert_eq!(scripting.lines, 50);
    assert_eq!(scripting.matches, 8);
    assert_eq!(scripting.tier, ComplexityTier::Medium);
  }
}
