//! User-facing notifications on stderr
//!
//! Short status messages with a colored bracketed prefix, one prefix per line
//! of the message. Diagnostics belong to `tracing`, not here.

use colored::*;

/// Colored prefix padded so that message bodies line up
fn format_prefix(color: Color, prefix: &str) -> String {
  format!("[{}]{:<width$}", prefix.color(color).bold(), "", width = 7 - prefix.len() - 2)
}

fn prefixed_lines(prefix: &str, message: &str) -> Vec<String> {
  message.lines().map(|line| format!("{prefix} {line}")).collect()
}

fn with_prefix(color: Color, prefix: &str, message: &str) {
  for line in prefixed_lines(&format_prefix(color, prefix), message) {
    eprintln!("{line}");
  }
}

pub fn info(message: &str) {
  with_prefix(Color::Blue, "info", message);
}

pub fn warn(message: &str) {
  with_prefix(Color::Yellow, "warn", message);
}

pub fn error(message: &str) {
  with_prefix(Color::Red, "error", message);
}

pub fn success(message: &str) {
  with_prefix(Color::Green, "sccs", message);
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_prefixes_align() {
    colored::control::set_override(false);
    assert_eq!(format_prefix(Color::Blue, "info"), "[info] ");
    assert_eq!(format_prefix(Color::Green, "sccs"), "[sccs] ");
    assert_eq!(format_prefix(Color::Red, "error"), "[error]");
  }

  #[test]
  fn test_every_line_gets_one_prefix() {
    let lines = prefixed_lines("[info] ", "first\nsecond");
    assert_eq!(lines, vec!["[info]  first", "[info]  second"]);
  }

  #[test]
  fn test_multiline_messages() {
    info("first\nsecond");
    warn("first\nsecond");
    error("first\nsecond");
    success("first\nsecond");
  }
}
