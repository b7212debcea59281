// Plain-text report for `--no-tui` runs.

use std::fmt::Write;
use std::path::Path;

use hitprop_core::normalize::ColumnDiagnostics;
use hitprop_core::Report;

use crate::tui::widgets::recommendations::format_optional;

/// Column lists of both inputs, one line each.
pub fn format_columns(columns: &ColumnDiagnostics) -> String {
    format!(
        "Player Stats Columns: {:?}\nBetting Odds Columns: {:?}\n",
        columns.stats, columns.odds
    )
}

/// Column lists, a one-line tally, the recommended bets, and where the CSV
/// went.
pub fn format_summary(report: &Report, export_path: &Path) -> String {
    let mut out = format_columns(&report.columns);
    let _ = writeln!(
        out,
        "\nScored {} bets, {} recommended.",
        report.rows.len(),
        report.recommended_count()
    );

    let recommended: Vec<_> = report.rows.iter().filter(|r| r.is_recommended()).collect();
    if !recommended.is_empty() {
        let _ = writeln!(
            out,
            "\n{:<24} {:<16} {:>9} {:>8} {:>12}",
            "Player", "Matchup", "Over Odds", "Edge_%", "Confidence_%"
        );
        for row in recommended {
            let _ = writeln!(
                out,
                "{:<24} {:<16} {:>9} {:>8} {:>12.1}",
                row.player,
                row.matchup,
                row.over_odds,
                format_optional(row.edge_pct, 1),
                row.confidence_pct
            );
        }
    }

    let _ = writeln!(out, "\nWrote {}", export_path.display());
    out
}
