//! Line and character counting
//!
//! Lines are counted after dropping the ones that are blank once trimmed.
//! Characters are counted over the untouched text, blank lines included.

const BYTE_ORDER_MARK: char = '\u{FEFF}';

fn is_blank(c: char) -> bool {
  c.is_whitespace() || c == BYTE_ORDER_MARK
}

/// Number of lines that still hold something after trimming whitespace
///
/// A stray byte order mark counts as whitespace.
pub fn count_lines(text: &str) -> usize {
  text.split('\n').filter(|line| !line.trim_matches(is_blank).is_empty()).count()
}

/// Number of characters in the raw text, in UTF-16 code units
///
/// Characters outside the Basic Multilingual Plane count twice, the way a
/// browser text field reports its length.
pub fn count_chars(text: &str) -> usize {
  text.encode_utf16().count()
}

/// Drop a leading byte order mark left over from file encoding
pub fn strip_bom(text: &str) -> &str {
  text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(text)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_count_lines_skips_blank() {
    assert_eq!(count_lines(""), 0);
    assert_eq!(count_lines("\n\n   \n\t\n"), 0);
    assert_eq!(count_lines("a\n\nb\n   \nc"), 3);
    assert_eq!(count_lines("single"), 1);
    assert_eq!(count_lines("trailing\n"), 1);
  }

  #[test]
  fn test_count_lines_ignores_surrounding_whitespace() {
    let tight = "<div>\n<p>hi</p>\n</div>";
    let loose = "   <div>   \n\t\t<p>hi</p>\r\n  </div>\t";
    assert_eq!(count_lines(tight), count_lines(loose));
    assert_eq!(count_lines(loose), 3);
  }

  #[test]
  fn test_count_chars_counts_everything() {
    assert_eq!(count_chars(""), 0);
    assert_eq!(count_chars("ab\n\ncd"), 6);
    assert_eq!(count_chars("   "), 3);
    assert_eq!(count_chars("©é"), 2);
  }

  #[test]
  fn test_count_chars_uses_utf16_units() {
    assert_eq!(count_chars("😀"), 2);
    assert_eq!(count_chars("a😀b"), 4);
  }

  #[test]
  fn test_bom_only_line_is_blank() {
    assert_eq!(count_lines("\u{FEFF}\n<p>"), 1);
    assert_eq!(count_lines("\u{FEFF}  \n\u{FEFF}"), 0);
    assert_eq!(count_lines("\u{FEFF}<p>"), 1);
  }

  #[test]
  fn test_strip_bom() {
    assert_eq!(strip_bom("\u{FEFF}<p>"), "<p>");
    assert_eq!(strip_bom("<p>"), "<p>");
    assert_eq!(strip_bom("<p>\u{FEFF}"), "<p>\u{FEFF}");
  }
}
