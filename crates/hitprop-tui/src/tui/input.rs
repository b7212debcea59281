// Keyboard input handling.
//
// Navigation keys mutate `ViewState` directly. Keys that need the pipeline or
// the filesystem come back as a `UserCommand` for the loop to execute.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::ViewState;

/// Rows moved by PageUp/PageDown.
const PAGE_SIZE: usize = 10;

/// Actions the event loop carries out on behalf of a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCommand {
    Quit,
    /// Run the pipeline again over the same input files.
    Rerun,
    /// Write `recommended_bets.csv` to the export directory.
    Export,
}

/// Handle a keyboard event. Returns `Some(UserCommand)` when the loop has to
/// act; `None` when the key was handled locally (or ignored).
pub fn handle_key(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    // On Windows crossterm emits both Press and Release events.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    match key_event.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(UserCommand::Quit),
        KeyCode::Char('r') => Some(UserCommand::Rerun),
        KeyCode::Char('e') => Some(UserCommand::Export),

        KeyCode::Char('c') => {
            view_state.show_columns = !view_state.show_columns;
            None
        }

        KeyCode::Up | KeyCode::Char('k') => {
            scroll_up(view_state, 1);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            scroll_down(view_state, 1);
            None
        }
        KeyCode::PageUp => {
            scroll_up(view_state, PAGE_SIZE);
            None
        }
        KeyCode::PageDown => {
            scroll_down(view_state, PAGE_SIZE);
            None
        }
        KeyCode::Home | KeyCode::Char('g') => {
            view_state.selected = 0;
            None
        }
        KeyCode::End | KeyCode::Char('G') => {
            view_state.selected = view_state.row_count().saturating_sub(1);
            None
        }

        _ => None,
    }
}

fn scroll_up(view_state: &mut ViewState, amount: usize) {
    view_state.selected = view_state.selected.saturating_sub(amount);
}

fn scroll_down(view_state: &mut ViewState, amount: usize) {
    let last = view_state.row_count().saturating_sub(1);
    view_state.selected = (view_state.selected + amount).min(last);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
