use ansi_term::{Colour, Style};
use std::fmt::Write;

use super::PricingReport;
use crate::pricing::{CostReport, Tier, MARGINAL_RATE};

/// Format an amount as Indonesian Rupiah, e.g. `Rp 1.150.000` or `Rp 50.000,5`
///
/// Uses `.` for thousands and `,` for decimals, keeping at most three
/// fraction digits with trailing zeros dropped.
pub fn format_rupiah(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let millis = (amount.abs() * 1000.0).round() as u64;
    let whole = millis / 1000;
    let fraction = millis % 1000;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if fraction == 0 {
        format!("Rp {}{}", sign, grouped)
    } else {
        let decimals = format!("{:03}", fraction);
        format!("Rp {}{},{}", sign, grouped, decimals.trim_end_matches('0'))
    }
}

/// Quantity in GB without a trailing `.0`; `-0` prints as `0`
pub fn format_quantity(quantity: f64) -> String {
    (quantity + 0.0).to_string()
}

fn paint(text: &str, style: Style, color: bool) -> String {
    if color {
        style.paint(text).to_string()
    } else {
        text.to_string()
    }
}

/// Render the full human readable report
pub fn render_text(report: &PricingReport, color: bool) -> String {
    let heading = Style::new().bold();
    let quantity = format_quantity(report.quantity);
    let mut out = String::new();

    let _ = writeln!(
        out,
        "{}",
        paint(&format!("Cost for {} GB:", quantity), heading, color)
    );
    for entry in &report.costs {
        let _ = writeln!(
            out,
            "  {:<9} {}",
            format!("{}:", entry.tier),
            format_rupiah(entry.cost)
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", paint("Continuity analysis:", heading, color));
    for check in &report.continuity {
        let verdict = if check.continuous {
            paint("continuous", Colour::Green.normal(), color)
        } else {
            paint("discontinuous", Colour::Red.normal(), color)
        };
        let _ = writeln!(
            out,
            "  At x = {} ({} vs {}): left limit = {}, right limit = {}, {}",
            format_quantity(check.boundary),
            check.lower_tier,
            check.upper_tier,
            format_rupiah(check.left),
            format_rupiah(check.right),
            verdict
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", paint("Recommended plans:", heading, color));
    for (i, ranked) in report.ranking.iter().enumerate() {
        let line = format!("{}: {}", ranked.tier, format_rupiah(ranked.report.cost));
        let line = if i == 0 {
            paint(&line, Colour::Green.bold(), color)
        } else {
            line
        };
        let _ = writeln!(out, "  {}. {}", i + 1, line);
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Banded tariff: C({}) = {} ({} band)",
        quantity,
        format_rupiah(report.banded.cost),
        report.banded.tier
    );

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", paint("Derivative analysis:", heading, color));
    for interval in &report.derivatives {
        let _ = writeln!(out, "  {}", interval);
    }
    let _ = writeln!(
        out,
        "  C'(x) = 0 means the cost does not change as storage is added within that interval."
    );
    let _ = write!(
        out,
        "  C'(x) = {} means every additional GB adds {}.",
        MARGINAL_RATE,
        format_rupiah(MARGINAL_RATE)
    );

    out
}

/// Render a single tier's cost, as printed for `--tier`
pub fn render_tier_cost(tier: Tier, report: &CostReport) -> String {
    format!(
        "{}: {} for {} GB",
        tier,
        format_rupiah(report.cost),
        format_quantity(report.quantity)
    )
}

pub fn render_json(report: &PricingReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
