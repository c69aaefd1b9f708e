//! Fixed-width scorecard rendering.

use regex::Regex;
use stalwart_eval::{DerivedMetrics, RatingCriteria, Rule};
use std::sync::LazyLock;

/// Total width of a report line, frame included.
pub(crate) const REPORT_WIDTH: usize = 120;

static THE_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\(The\).*").expect("valid pattern"));

static SHARE_CLASS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*Commo.*").expect("valid pattern"));

/// Tidy a listed company name for display.
///
/// `"Coca-Cola Company (The)"` becomes `"The Coca-Cola Company"`, and share
/// class suffixes such as `"Common Stock"` are dropped.
pub(crate) fn format_company_name(name: &str) -> String {
    let mut name = name.trim().to_string();
    if name.contains("(The)") {
        name = format!("The {}", THE_SUFFIX.replace(&name, ""));
    }
    if name.contains("Commo") {
        name = SHARE_CLASS.replace(&name, "").into_owned();
    }
    name
}

/// One framed report line: `% ` + text padded to fit + `%`.
fn frame(text: &str) -> String {
    format!("% {text:<width$}%", width = REPORT_WIDTH - 3)
}

/// The value shown next to a rule.
fn rule_value(metrics: &DerivedMetrics, rule: Rule) -> String {
    match rule {
        Rule::ContinuousDividendIncreases => metrics.continuous_dividend_increases.to_string(),
        Rule::DividendYieldInBand => format!("{:.2}%", metrics.dividend_yield),
        Rule::DividendGrowth => format!("{:.2}%", metrics.dividend_cagr),
        Rule::PriceToEarnings => format!("{:.2}", metrics.price_to_earnings_ratio),
        Rule::PayoutRatio => format!("{:.2}%", metrics.dividend_payout_ratio),
        Rule::DebtToEquity => format!("{:.2}", metrics.debt_to_equity),
        Rule::Discount => format!("{:.2}%", metrics.discount),
    }
}

/// Render the scorecard for one ticker, frame lines included.
pub(crate) fn render(metrics: &DerivedMetrics, criteria: &RatingCriteria) -> Vec<String> {
    let rule_line = |rule: Rule| {
        format!(
            "    {}: {}",
            rule.describe(criteria, metrics.periods),
            rule_value(metrics, rule)
        )
    };
    let name = metrics
        .company_name
        .as_deref()
        .map_or_else(|| metrics.ticker.clone(), format_company_name);

    let mut body = vec![" ".to_string(), format!("{name} ({})", metrics.ticker), " ".to_string()];
    if let Some(sector) = metrics.industry.as_deref().or(metrics.sector.as_deref()) {
        body.push(format!("    Sector: {sector}"));
        body.push(" ".to_string());
    }
    body.extend([
        rule_line(Rule::ContinuousDividendIncreases),
        rule_line(Rule::DividendYieldInBand),
        rule_line(Rule::DividendGrowth),
        rule_line(Rule::PayoutRatio),
        " ".to_string(),
        rule_line(Rule::PriceToEarnings),
        rule_line(Rule::DebtToEquity),
        " ".to_string(),
        format!("    Stock's fair value: {:.2} {}", metrics.graham_number, metrics.currency),
    ]);
    let mut price = format!("    Stock's price: {:.2} {}", metrics.price, metrics.currency);
    if metrics.price_substituted {
        price.push_str(&format!(" (last close, {})", metrics.price_date));
    }
    body.extend([
        price,
        rule_line(Rule::Discount),
        " ".to_string(),
        format!("    Star Rating: {}", metrics.rating),
        " ".to_string(),
    ]);

    let rule = "%".repeat(REPORT_WIDTH);
    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(rule.clone());
    lines.extend(body.iter().map(|text| frame(text)));
    lines.push(rule);
    lines
}

/// Print the scorecard to stdout.
pub(crate) fn print(metrics: &DerivedMetrics, criteria: &RatingCriteria) {
    for line in render(metrics, criteria) {
        println!("{line}");
    }
}
