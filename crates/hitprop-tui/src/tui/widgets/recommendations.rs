// Recommendations widget: the scored, confidence-ordered bets table.
//
// Columns follow the CSV export order. Recommended rows are green; the
// selected row is highlighted and drives scrolling.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};
use ratatui::Frame;

use hitprop_core::present::{RecommendationRow, COLUMNS};

use crate::tui::ViewState;

/// Render the recommendations table into the given area.
pub fn render(frame: &mut Frame, area: Rect, rows: &[RecommendationRow], state: &ViewState) {
    let header = Row::new(COLUMNS.iter().map(|c| Cell::from(*c)))
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(0);

    let body: Vec<Row> = rows
        .iter()
        .map(|r| {
            let style = if r.is_recommended() {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(r.player.clone()),
                Cell::from(r.matchup.clone()),
                Cell::from(r.over_odds.clone()),
                Cell::from(format!("{:.3}", r.model_hit_prob)),
                Cell::from(format_optional(r.implied_prob, 3)),
                Cell::from(format_optional(r.edge_pct, 1)),
                Cell::from(format!("{:.1}", r.confidence_pct)),
                Cell::from(r.recommended_bet),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Min(18),
        Constraint::Min(12),
        Constraint::Length(9),
        Constraint::Length(14),
        Constraint::Length(12),
        Constraint::Length(8),
        Constraint::Length(12),
        Constraint::Length(15),
    ];

    let table = Table::new(body, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(build_title(rows)),
        )
        .row_highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol(">> ");

    let mut table_state = TableState::default();
    if !rows.is_empty() {
        table_state.select(Some(state.selected.min(rows.len() - 1)));
    }

    frame.render_stateful_widget(table, area, &mut table_state);
}

/// Fixed-precision number, or blank when missing.
pub fn format_optional(value: Option<f64>, precision: usize) -> String {
    value
        .map(|v| format!("{:.*}", precision, v))
        .unwrap_or_default()
}

fn build_title(rows: &[RecommendationRow]) -> Line<'static> {
    let recommended = rows.iter().filter(|r| r.is_recommended()).count();
    Line::from(format!(
        "Recommended Bets ({} of {})",
        recommended,
        rows.len()
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use hitprop_core::present::recommendation_symbol;

    fn make_row(player: &str, confidence: f64) -> RecommendationRow {
        RecommendationRow {
            player: player.to_string(),
            matchup: "NYY @ BOS".to_string(),
            over_odds: "+150".to_string(),
            model_hit_prob: confidence / 100.0,
            implied_prob: Some(0.4),
            edge_pct: Some(confidence - 40.0),
            confidence_pct: confidence,
            recommended_bet: recommendation_symbol(confidence > 37.0),
        }
    }

    #[test]
    fn format_optional_blank_for_none() {
        assert_eq!(format_optional(None, 3), "");
        assert_eq!(format_optional(Some(0.4), 3), "0.400");
        assert_eq!(format_optional(Some(-12.345), 1), "-12.3");
    }

    #[test]
    fn title_counts_recommended() {
        let rows = vec![make_row("A", 80.0), make_row("B", 20.0)];
        assert_eq!(build_title(&rows).to_string(), "Recommended Bets (1 of 2)");
    }

    #[test]
    fn render_does_not_panic_when_empty() {
        let backend = ratatui::backend::TestBackend::new(120, 20);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let state = ViewState::default();
        terminal
            .draw(|frame| render(frame, frame.area(), &[], &state))
            .unwrap();
    }

    #[test]
    fn render_shows_player_names() {
        let backend = ratatui::backend::TestBackend::new(140, 20);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        let mut state = ViewState::default();
        state.selected = 10;
        let rows = vec![make_row("Aaron Judge", 82.9), make_row("Juan Soto", 30.0)];
        terminal
            .draw(|frame| render(frame, frame.area(), &rows, &state))
            .unwrap();

        let buffer = terminal.backend().buffer();
        let text: String = buffer.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("Aaron Judge"));
        assert!(text.contains("Juan Soto"));
        assert!(text.contains("Confidence_%"));
    }
}
