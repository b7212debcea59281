// Screen layout: panel arrangement and sizing.
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +-------------------------------+------------------+
// | Recommendations (fill)        | Columns (32%)    |
// |                               | (hidden with c)  |
// +-------------------------------+------------------+
// | Message Line (1 row)                              |
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Resolved screen areas for each viewer zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: input sources, row counts, run time.
    pub status_bar: Rect,
    /// Recommendations table (or the error panel when the run failed).
    pub main_panel: Rect,
    /// Column diagnostics. `None` when the panel is hidden.
    pub columns: Option<Rect>,
    /// Last export path or action result.
    pub message_line: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

pub fn build_layout(area: Rect, show_columns: bool) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Min(5),    // table + columns
            Constraint::Length(1), // message line
            Constraint::Length(1), // help bar
        ])
        .split(area);

    let (main_panel, columns) = if show_columns {
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(68), Constraint::Percentage(32)])
            .split(vertical[1]);
        (horizontal[0], Some(horizontal[1]))
    } else {
        (vertical[1], None)
    };

    AppLayout {
        status_bar: vertical[0],
        main_panel,
        columns,
        message_line: vertical[2],
        help_bar: vertical[3],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_with_columns_panel() {
        let area = Rect::new(0, 0, 120, 40);
        let layout = build_layout(area, true);

        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.status_bar.y, 0);
        assert_eq!(layout.help_bar.height, 1);
        assert_eq!(layout.help_bar.y, 39);
        assert_eq!(layout.message_line.y, 38);

        let columns = layout.columns.expect("columns panel shown");
        assert_eq!(layout.main_panel.width + columns.width, 120);
        assert!(layout.main_panel.width > columns.width);
    }

    #[test]
    fn layout_without_columns_panel() {
        let area = Rect::new(0, 0, 100, 30);
        let layout = build_layout(area, false);
        assert!(layout.columns.is_none());
        assert_eq!(layout.main_panel.width, 100);
        assert_eq!(layout.main_panel.height, 27);
    }

    #[test]
    fn layout_small_terminal_does_not_panic() {
        let area = Rect::new(0, 0, 20, 4);
        let _ = build_layout(area, true);
    }
}
