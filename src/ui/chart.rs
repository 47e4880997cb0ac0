use ratatui::{
    layout::Rect,
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

use crate::pricing::{self, Tier, CHART_DOMAIN};

fn tier_color(tier: Tier) -> Color {
    match tier {
        Tier::Basic => Color::LightRed,
        Tier::Standard => Color::LightBlue,
        Tier::Premium => Color::Cyan,
    }
}

/// Axis bounds covering every curve: x over the chart domain, y from 0 to the highest cost
pub fn chart_bounds(curves: &[(Tier, Vec<(f64, f64)>)]) -> ([f64; 2], [f64; 2]) {
    let x_bounds = [
        f64::from(*CHART_DOMAIN.start()),
        f64::from(*CHART_DOMAIN.end()),
    ];
    let y_max = curves
        .iter()
        .flat_map(|(_, curve)| curve.iter().map(|&(_, cost)| cost))
        .fold(0.0_f64, f64::max);
    (x_bounds, [0.0, y_max])
}

/// Format large numbers with K/M suffix
fn format_k(n: f64) -> String {
    let abs_n = n.abs();
    if abs_n >= 1_000_000.0 {
        format!("{:.1}M", n / 1_000_000.0)
    } else if abs_n >= 1_000.0 {
        format!("{:.0}K", n / 1_000.0)
    } else {
        format!("{:.0}", n)
    }
}

/// Draw the three cost curves plus a marker per tier at `quantity`
pub fn draw_cost_chart(
    frame: &mut Frame,
    area: Rect,
    curves: &[(Tier, Vec<(f64, f64)>)],
    quantity: f64,
) {
    let (x_bounds, y_bounds) = chart_bounds(curves);

    let markers: Vec<(f64, f64)> = Tier::ALL
        .iter()
        .map(|&tier| (quantity, pricing::evaluate(tier, quantity).cost))
        .collect();

    let mut datasets: Vec<Dataset> = curves
        .iter()
        .map(|(tier, curve)| {
            Dataset::default()
                .name(tier.name())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(tier_color(*tier)))
                .data(curve)
        })
        .collect();
    datasets.push(
        Dataset::default()
            .name(format!("{} GB", quantity))
            .marker(symbols::Marker::Dot)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(Color::Yellow))
            .data(&markers),
    );

    let x_labels: Vec<Span> = [x_bounds[0], (x_bounds[0] + x_bounds[1]) / 2.0, x_bounds[1]]
        .iter()
        .map(|x| Span::raw(format!("{}", x)))
        .collect();
    let y_labels: Vec<Span> = [y_bounds[0], y_bounds[1] / 2.0, y_bounds[1]]
        .iter()
        .map(|&y| Span::raw(format_k(y)))
        .collect();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(" Storage cost per tier (Rp) ")
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .title("Storage (GB)")
                .style(Style::default().fg(Color::Gray))
                .bounds(x_bounds)
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Cost")
                .style(Style::default().fg(Color::Gray))
                .bounds(y_bounds)
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}
