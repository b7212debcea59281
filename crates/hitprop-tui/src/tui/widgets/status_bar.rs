// Status bar: which files were scored, how many bets, when.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::tui::{RunOutcome, ViewState};

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        format_status(state),
        Style::default().fg(Color::White),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

pub fn format_status(state: &ViewState) -> String {
    let sources = format!(
        " {} + {}",
        file_label(&state.stats_path),
        file_label(&state.odds_path)
    );
    match &state.outcome {
        RunOutcome::Pending => format!("{sources} | not run"),
        RunOutcome::Ready(report) => format!(
            "{} | {} bets | {} recommended | run {}",
            sources,
            report.rows.len(),
            report.recommended_count(),
            report.generated_at.format("%H:%M:%S")
        ),
        RunOutcome::Failed { .. } => format!("{sources} | FAILED"),
    }
}

fn file_label(path: &std::path::Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
