//! Heuristic price and time estimates for HTML, CSS and JavaScript snippets
//!
//! Line counts drive the price, a crude pattern-per-line score drives the
//! complexity tier, and the tier picks the pace used for the hour range.

pub mod category;
pub mod complexity;
pub mod config;
pub mod counting;
pub mod error;
pub mod estimate;
pub mod money;
pub mod notify;
pub mod patterns;
pub mod preferences;
pub mod render;
pub mod samples;
pub mod shell;
pub mod sources;
pub mod workbench;

pub use category::Category;
pub use complexity::{ComplexityTier, Score, ThresholdTable, Thresholds};
pub use config::Config;
pub use error::{QuoteError, Result};
pub use estimate::{
  compute_estimate, compute_estimate_with, compute_metrics, compute_metrics_with, CategoryEstimate,
  CategoryMetrics, CodeSample, EstimateResult, Rates, TimeRange,
};
pub use money::Money;
pub use preferences::{Preferences, Theme};
pub use workbench::Workbench;
