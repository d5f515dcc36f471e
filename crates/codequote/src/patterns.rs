//! Pattern predicates used for complexity scoring
//!
//! One crude token counter per category. None of these parse anything; they
//! count regex matches over the whole buffer, so a match may span lines.

use regex::Regex;
use std::sync::LazyLock;

use crate::Category;

const TAG_PATTERN: &str = r"<[^>]+>";
const SELECTOR_BLOCK_PATTERN: &str = r"[^{}]*\{";
const FUNCTION_PATTERN: &str = r"(function|=>)\s*[{(]";

static TAG_REGEX: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(TAG_PATTERN).expect("tag pattern compiles"));
static SELECTOR_BLOCK_REGEX: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(SELECTOR_BLOCK_PATTERN).expect("selector pattern compiles"));
static FUNCTION_REGEX: LazyLock<Regex> =
  LazyLock::new(|| Regex::new(FUNCTION_PATTERN).expect("function pattern compiles"));

/// Count tag-like tokens such as `<div class="a">` or `</p>`
pub fn count_tags(code: &str) -> usize {
  TAG_REGEX.find_iter(code).count()
}

/// Count selector block openers: a run of non-brace characters ending in `{`
pub fn count_selector_blocks(code: &str) -> usize {
  SELECTOR_BLOCK_REGEX.find_iter(code).count()
}

/// Count `function` or `=>` directly followed (modulo whitespace) by `{` or `(`
pub fn count_functions(code: &str) -> usize {
  FUNCTION_REGEX.find_iter(code).count()
}

/// Dispatch to the counter for a category
pub fn count_matches(code: &str, category: Category) -> usize {
  match category {
    Category::Markup => count_tags(code),
    Category::Styling => count_selector_blocks(code),
    Category::Scripting => count_functions(code),
  }
}
