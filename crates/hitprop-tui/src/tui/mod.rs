// Terminal viewer for a pipeline run.
//
// The viewer owns a `ViewState` holding the input paths and the outcome of
// the latest run. It is synchronous: draw, block on the next key, act.
// Re-running the pipeline is a user decision (`r`), never automatic.

pub mod input;
pub mod layout;
pub mod widgets;

use std::path::PathBuf;

use crossterm::event::{self, Event};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;
use tracing::{error, info};

use hitprop_core::export::write_artifact;
use hitprop_core::normalize::ColumnDiagnostics;
use hitprop_core::{run_files, PipelineError, Report};

use input::UserCommand;
use layout::{build_layout, AppLayout};

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// What the latest pipeline run produced.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Pending,
    Ready(Report),
    Failed {
        message: String,
        columns: Option<ColumnDiagnostics>,
    },
}

impl From<Result<Report, PipelineError>> for RunOutcome {
    fn from(result: Result<Report, PipelineError>) -> Self {
        match result {
            Ok(report) => RunOutcome::Ready(report),
            Err(e) => RunOutcome::Failed {
                message: e.to_string(),
                columns: e.columns().cloned(),
            },
        }
    }
}

/// Viewer state: inputs, the latest outcome, and UI-local bits.
#[derive(Debug)]
pub struct ViewState {
    pub stats_path: PathBuf,
    pub odds_path: PathBuf,
    pub export_dir: PathBuf,
    pub outcome: RunOutcome,
    /// Selected table row.
    pub selected: usize,
    pub show_columns: bool,
    /// Result of the last action (export path, export error).
    pub message: Option<String>,
}

impl Default for ViewState {
    fn default() -> Self {
        ViewState {
            stats_path: PathBuf::new(),
            odds_path: PathBuf::new(),
            export_dir: PathBuf::new(),
            outcome: RunOutcome::Pending,
            selected: 0,
            show_columns: true,
            message: None,
        }
    }
}

impl ViewState {
    pub fn new(stats_path: PathBuf, odds_path: PathBuf, export_dir: PathBuf) -> Self {
        ViewState {
            stats_path,
            odds_path,
            export_dir,
            ..ViewState::default()
        }
    }

    pub fn row_count(&self) -> usize {
        match &self.outcome {
            RunOutcome::Ready(report) => report.rows.len(),
            _ => 0,
        }
    }

    /// Run the pipeline over the configured files, replacing the outcome.
    pub fn rerun(&mut self) {
        let result = run_files(&self.stats_path, &self.odds_path);
        if let Err(ref e) = result {
            error!("pipeline run failed: {}", e);
        }
        self.outcome = RunOutcome::from(result);
        self.selected = 0;
        self.message = None;
    }

    /// Write the current report's CSV. A failed or pending run has nothing
    /// to export.
    pub fn export(&mut self) {
        let RunOutcome::Ready(report) = &self.outcome else {
            self.message = Some("Nothing to export: no successful run.".to_string());
            return;
        };

        let written = report
            .artifact()
            .and_then(|artifact| write_artifact(&self.export_dir, &artifact));
        self.message = Some(match written {
            Ok(path) => format!("Saved {}", path.display()),
            Err(e) => {
                error!("export failed: {}", e);
                format!("Export failed: {e}")
            }
        });
    }
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

fn render_frame(frame: &mut Frame, state: &ViewState) {
    let layout = build_layout(frame.area(), state.show_columns);

    widgets::status_bar::render(frame, layout.status_bar, state);
    render_main_panel(frame, &layout, state);
    if let Some(area) = layout.columns {
        let columns = match &state.outcome {
            RunOutcome::Ready(report) => Some(&report.columns),
            RunOutcome::Failed { columns, .. } => columns.as_ref(),
            RunOutcome::Pending => None,
        };
        widgets::columns::render(frame, area, columns);
    }
    render_message_line(frame, &layout, state);
    render_help_bar(frame, &layout);
}

fn render_main_panel(frame: &mut Frame, layout: &AppLayout, state: &ViewState) {
    match &state.outcome {
        RunOutcome::Ready(report) => {
            widgets::recommendations::render(frame, layout.main_panel, &report.rows, state)
        }
        RunOutcome::Failed { message, .. } => {
            widgets::error_panel::render(frame, layout.main_panel, message)
        }
        RunOutcome::Pending => {
            widgets::error_panel::render(frame, layout.main_panel, "Pipeline has not run yet.")
        }
    }
}

fn render_message_line(frame: &mut Frame, layout: &AppLayout, state: &ViewState) {
    let text = state.message.as_deref().unwrap_or("");
    let paragraph = Paragraph::new(Line::from(Span::styled(
        format!(" {text}"),
        Style::default().fg(Color::Cyan),
    )));
    frame.render_widget(paragraph, layout.message_line);
}

fn render_help_bar(frame: &mut Frame, layout: &AppLayout) {
    let text = " q:Quit | j/k:Scroll | e:Export CSV | r:Re-run | c:Columns";
    let paragraph = Paragraph::new(Line::from(vec![Span::styled(
        text,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::DIM),
    )]))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, layout.help_bar);
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the viewer until the user quits.
///
/// Initializes the terminal, installs a panic hook that restores it, then
/// loops: draw, wait for a key, apply it. The terminal is restored on exit.
pub fn run(mut view_state: ViewState) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let result = (|| -> anyhow::Result<()> {
        loop {
            terminal.draw(|frame| render_frame(frame, &view_state))?;

            let Event::Key(key_event) = event::read()? else {
                continue;
            };
            match input::handle_key(key_event, &mut view_state) {
                Some(UserCommand::Quit) => break,
                Some(UserCommand::Rerun) => {
                    info!("re-running pipeline");
                    view_state.rerun();
                }
                Some(UserCommand::Export) => view_state.export(),
                None => {}
            }
        }
        Ok(())
    })();

    ratatui::restore();
    result
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
