// Column diagnostics panel: the header names of both inputs after renaming,
// for spotting naming mismatches that break the join.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use hitprop_core::normalize::{ColumnDiagnostics, PLAYER};

pub fn render(frame: &mut Frame, area: Rect, columns: Option<&ColumnDiagnostics>) {
    let lines = match columns {
        Some(c) => build_lines(c),
        None => vec![Line::from("No column information.")],
    };

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(Block::default().borders(Borders::ALL).title("Columns"));
    frame.render_widget(paragraph, area);
}

fn build_lines(columns: &ColumnDiagnostics) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(columns.stats.len() + columns.odds.len() + 3);
    push_section(&mut lines, "Player Stats", &columns.stats);
    lines.push(Line::from(""));
    push_section(&mut lines, "Betting Odds", &columns.odds);
    lines
}

fn push_section(lines: &mut Vec<Line<'static>>, title: &str, names: &[String]) {
    lines.push(Line::from(Span::styled(
        format!("{} ({})", title, names.len()),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    for name in names {
        // The join key stands out so a missing one is obvious.
        let style = if name == PLAYER {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        lines.push(Line::from(Span::styled(format!("  {name}"), style)));
    }
}
