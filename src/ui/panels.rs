use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::AppState;
use crate::pricing::MARGINAL_RATE;
use crate::report::{format_quantity, format_rupiah, PricingReport};

/// Draw the input box and the four result panels stacked vertically
pub fn draw_panels(frame: &mut Frame, area: Rect, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Input
            Constraint::Length(5), // Costs
            Constraint::Length(5), // Ranking
            Constraint::Length(5), // Continuity
            Constraint::Min(0),    // Derivative
        ])
        .split(area);

    draw_input(frame, chunks[0], state);
    draw_costs(frame, chunks[1], &state.report);
    draw_ranking(frame, chunks[2], &state.report);
    draw_continuity(frame, chunks[3], &state.report);
    draw_derivatives(frame, chunks[4], &state.report);
}

fn draw_input(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut lines = vec![Line::from(vec![
        Span::raw(" Storage (GB): "),
        Span::styled(
            format!("{}_", state.input),
            Style::default().fg(Color::Yellow),
        ),
    ])];
    if let Some(error) = &state.error {
        lines.push(Line::from(Span::styled(
            format!(" {}", error),
            Style::default().fg(Color::Red),
        )));
    }

    let input =
        Paragraph::new(lines).block(Block::default().title(" Input ").borders(Borders::ALL));
    frame.render_widget(input, area);
}

fn draw_costs(frame: &mut Frame, area: Rect, report: &PricingReport) {
    let lines: Vec<Line> = report
        .costs
        .iter()
        .map(|entry| {
            let label = format!("{}:", entry.tier);
            Line::from(format!(" {:<9} {}", label, format_rupiah(entry.cost)))
        })
        .collect();

    let title = format!(" Cost for {} GB ", format_quantity(report.quantity));
    let costs = Paragraph::new(lines).block(Block::default().title(title).borders(Borders::ALL));
    frame.render_widget(costs, area);
}

fn draw_ranking(frame: &mut Frame, area: Rect, report: &PricingReport) {
    let lines: Vec<Line> = report
        .ranking
        .iter()
        .enumerate()
        .map(|(i, ranked)| {
            let cost = format_rupiah(ranked.report.cost);
            let text = format!(" {}. {}: {}", i + 1, ranked.tier, cost);
            if i == 0 {
                Line::from(Span::styled(
                    text,
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(text)
            }
        })
        .collect();

    let ranking = Paragraph::new(lines)
        .block(Block::default().title(" Recommended Plans ").borders(Borders::ALL));
    frame.render_widget(ranking, area);
}

fn draw_continuity(frame: &mut Frame, area: Rect, report: &PricingReport) {
    let lines: Vec<Line> = report
        .continuity
        .iter()
        .map(|check| {
            let verdict = if check.continuous {
                Span::styled("continuous", Style::default().fg(Color::Green))
            } else {
                Span::styled("discontinuous", Style::default().fg(Color::Red))
            };
            Line::from(vec![
                Span::raw(format!(
                    " x = {}: {} vs {}, ",
                    format_quantity(check.boundary),
                    format_rupiah(check.left),
                    format_rupiah(check.right)
                )),
                verdict,
            ])
        })
        .collect();

    let continuity = Paragraph::new(lines)
        .block(Block::default().title(" Continuity ").borders(Borders::ALL));
    frame.render_widget(continuity, area);
}

fn draw_derivatives(frame: &mut Frame, area: Rect, report: &PricingReport) {
    let mut lines: Vec<Line> = report
        .derivatives
        .iter()
        .map(|interval| Line::from(format!(" {}", interval)))
        .collect();
    lines.push(Line::from(Span::styled(
        format!(
            " C(x) band: {} ({})",
            report.banded.tier,
            format_rupiah(report.banded.cost)
        ),
        Style::default().fg(Color::Gray),
    )));
    lines.push(Line::from(Span::styled(
        format!(" +1 GB above a threshold adds {}", format_rupiah(MARGINAL_RATE)),
        Style::default().fg(Color::DarkGray),
    )));

    let derivatives = Paragraph::new(lines)
        .block(Block::default().title(" Marginal Cost C'(x) ").borders(Borders::ALL));
    frame.render_widget(derivatives, area);
}
