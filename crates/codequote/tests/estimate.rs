use codequote::{
  compute_estimate, compute_metrics, Category, ComplexityTier, Money, TimeRange, Workbench,
};

fn lines_of(line: &str, count: usize) -> String {
  vec![line; count].join("\n")
}

#[test]
fn test_all_empty_estimate() {
  let result = compute_estimate("", "", "");

  for category in Category::ALL {
    let part = result.get(category);
    assert_eq!(part.metrics.lines, 0);
    assert_eq!(part.metrics.chars, 0);
    assert_eq!(part.metrics.tier, ComplexityTier::Low);
  }
  assert_eq!(result.total_cost.format_with("$"), "$0.00");
  assert_eq!(result.time_range.to_string(), "0-0 hours");
  assert_eq!(result.overall_tier, ComplexityTier::Low);
}

#[test]
fn test_high_low_medium_scenario() {
  let markup = lines_of("<td>cell</td>", 10);
  let styling = [".a {", ".b {", ".c {", "}", "}", "}", "x: 1;", "y: 2;", "z: 3;", "w: 4;"].join("\n");
  let scripting = [
    "const a = () => {",
    "};",
    "list.forEach(function (item) {",
    "});",
    "let b = 1;",
    "let c = 2;",
    "let d = 3;",
    "let e = 4;",
    "let f = 5;",
    "let g = 6;",
  ]
  .join("\n");

  let result = compute_estimate(&markup, &styling, &scripting);

  assert_eq!(result.markup.metrics.tier, ComplexityTier::High);
  assert_eq!(result.styling.metrics.tier, ComplexityTier::Low);
  assert_eq!(result.scripting.metrics.tier, ComplexityTier::Medium);
  assert_eq!(result.overall_tier, ComplexityTier::High);

  assert_eq!(result.markup.cost.format_with("$"), "$2.50");
  assert_eq!(result.styling.cost.format_with("$"), "$5.00");
  assert_eq!(result.scripting.cost.format_with("$"), "$7.50");
  assert_eq!(result.total_cost.format_with("$"), "$15.00");
  assert_eq!(result.time_range, TimeRange { lower: 2, upper: 3 });
  assert_eq!(result.time_range.to_string(), "2-3 hours");
}

#[test]
fn test_total_is_exact_sum() {
  let inputs = [
    ("", "", ""),
    ("<a>", "b {}", "f(() => {})"),
    ("<div>\n\n<p>x</p>\n</div>", "a {\n  b: c;\n}", "x\ny\nz"),
    ("plain text\nmore", "\n\n\n", "   "),
  ];

  for (markup, styling, scripting) in inputs {
    let result = compute_estimate(markup, styling, scripting);
    let sum = result.markup.cost + result.styling.cost + result.scripting.cost;
    assert_eq!(result.total_cost, sum);
  }
}

#[test]
fn test_overall_is_most_severe() {
  let cases = [
    ("<a>", "", ""),
    ("", "a {}", ""),
    ("", "", "f(function() {})"),
    ("<a>\nb\nc", "x\ny", "z"),
    ("a\nb", "c\nd", "e\nf"),
  ];

  for (markup, styling, scripting) in cases {
    let result = compute_estimate(markup, styling, scripting);
    let max = [result.markup.metrics.tier, result.styling.metrics.tier, result.scripting.metrics.tier]
      .into_iter()
      .max()
      .unwrap();
    assert_eq!(result.overall_tier, max);
  }
}

#[test]
fn test_estimate_is_idempotent() {
  let workbench = Workbench::with_samples(Default::default());
  let markup = workbench.text(Category::Markup);
  let styling = workbench.text(Category::Styling);
  let scripting = workbench.text(Category::Scripting);

  assert_eq!(compute_estimate(markup, styling, scripting), compute_estimate(markup, styling, scripting));
}

#[test]
fn test_line_count_ignores_indentation() {
  let flat = "<ul>\n<li>a</li>\n</ul>";
  let indented = "\t<ul>\n      <li>a</li>   \n  </ul>\n\n   \n";

  assert_eq!(
    compute_metrics(flat, Category::Markup).lines,
    compute_metrics(indented, Category::Markup).lines
  );
}

#[test]
fn test_single_dense_line_reports_high() {
  let metrics = compute_metrics("<b><i>x</i></b>", Category::Markup);
  assert_eq!(metrics.lines, 1);
  assert_eq!(metrics.matches, 4);
  assert_eq!(metrics.tier, ComplexityTier::High);
}

#[test]
fn test_costs_never_negative_and_scale_with_lines() {
  let one = compute_estimate("", "", "x");
  let two = compute_estimate("", "", "x\ny");
  assert_eq!(one.scripting.cost, Money::from_minor(75));
  assert_eq!(two.scripting.cost, Money::from_minor(150));
  assert!(two.total_cost > one.total_cost);
}
