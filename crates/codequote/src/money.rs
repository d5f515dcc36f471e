//! Exact monetary amounts
//!
//! Amounts are whole minor units (hundredths of the abstract currency unit),
//! so summing category costs never accumulates rounding error. Arithmetic
//! saturates at `Money::MAX` instead of wrapping; configured rates are capped
//! well below the point where that can happen.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

#[derive(
  Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(u64);

impl Money {
  pub const ZERO: Money = Money(0);
  pub const MAX: Money = Money(u64::MAX);

  pub const fn from_minor(minor: u64) -> Self {
    Self(minor)
  }

  pub fn minor_units(&self) -> u64 {
    self.0
  }

  /// Lossy conversion for display and JSON consumers
  pub fn as_f64(&self) -> f64 {
    self.0 as f64 / 100.0
  }

  /// Render with a currency symbol and two decimals, e.g. `$15.00`
  pub fn format_with(&self, symbol: &str) -> String {
    format!("{symbol}{self}")
  }
}

impl fmt::Display for Money {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
  }
}

impl Add for Money {
  type Output = Money;

  fn add(self, rhs: Money) -> Money {
    Money(self.0.saturating_add(rhs.0))
  }
}

impl Mul<usize> for Money {
  type Output = Money;

  fn mul(self, rhs: usize) -> Money {
    let rhs = u64::try_from(rhs).unwrap_or(u64::MAX);
    Money(self.0.saturating_mul(rhs))
  }
}

impl Sum for Money {
  fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
    iter.fold(Money::ZERO, Add::add)
  }
}
