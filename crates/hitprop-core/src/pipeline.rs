// The whole run: load → normalize → join/score → present.
//
// `run` is a pure function of its two input streams. Each call is
// independent; callers decide when to re-run.

use std::io::Read;
use std::path::Path;

use chrono::{DateTime, Local};
use tracing::{info, warn};

use crate::error::PipelineError;
use crate::join::{left_join, odds_lines, stat_lines};
use crate::normalize::{normalize, ColumnDiagnostics, PLAYER};
use crate::present::{self, Artifact, RecommendationRow};
use crate::table::{load_table, Source};

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct Report {
    pub columns: ColumnDiagnostics,
    /// Output rows, highest confidence first.
    pub rows: Vec<RecommendationRow>,
    pub generated_at: DateTime<Local>,
}

impl Report {
    pub fn recommended_count(&self) -> usize {
        self.rows.iter().filter(|r| r.is_recommended()).count()
    }

    /// The CSV download for this report.
    pub fn artifact(&self) -> Result<Artifact, PipelineError> {
        present::artifact(&self.rows)
    }
}

/// Run the pipeline over a stats stream and an odds stream.
pub fn run<S: Read, O: Read>(stats: S, odds: O) -> Result<Report, PipelineError> {
    let mut stats = load_table(stats, Source::Stats)?;
    let mut odds = load_table(odds, Source::Odds)?;

    let columns = normalize(&mut stats, &mut odds);
    info!("player stats columns: {:?}", columns.stats);
    info!("betting odds columns: {:?}", columns.odds);

    let stats_missing = !stats.has_column(PLAYER);
    let odds_missing = !odds.has_column(PLAYER);
    if stats_missing || odds_missing {
        return Err(PipelineError::MissingJoinKey {
            stats_missing,
            odds_missing,
            columns,
        });
    }

    if odds.is_empty() {
        warn!("betting odds table has no rows; nothing to score");
    }

    let stat_rows = stat_lines(&stats);
    let joined = left_join(odds_lines(&odds), &stat_rows);

    let mut rows = present::project(joined);
    present::sort_by_confidence(&mut rows);

    let report = Report {
        columns,
        rows,
        generated_at: Local::now(),
    };
    info!(
        "scored {} bets ({} recommended) from {} stats rows",
        report.rows.len(),
        report.recommended_count(),
        stat_rows.len()
    );
    Ok(report)
}

/// Open both files and run the pipeline over them.
pub fn run_files(stats_path: &Path, odds_path: &Path) -> Result<Report, PipelineError> {
    let stats = open(stats_path, Source::Stats)?;
    let odds = open(odds_path, Source::Odds)?;
    run(stats, odds)
}

fn open(path: &Path, source: Source) -> Result<std::fs::File, PipelineError> {
    std::fs::File::open(path).map_err(|e| PipelineError::Io {
        source_name: source.name(),
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATS: &str = "\
Player Name,xba,hard_hit_percent,LD%,sweet_spot_percent,barrel_batted_rate
Aaron Judge,0.300,0.45,0.22,0.35,0.10
Juan Soto,0.150,0.30,0.15,0.20,0.05";

    const ODDS: &str = "\
Player Name,Matchup,Over Odds
Juan Soto,NYM vs ATL,-200
Aaron Judge,NYY @ BOS,+150
Nobody Special,SEA vs OAK,abc";

    #[test]
    fn run_sorts_and_scores() {
        let report = run(STATS.as_bytes(), ODDS.as_bytes()).unwrap();
        assert_eq!(report.rows.len(), 3);

        let top = &report.rows[0];
        assert_eq!(top.player, "Aaron Judge");
        assert_eq!(top.over_odds, "+150");
        assert!((top.model_hit_prob - 0.8289).abs() < 1e-4);
        assert!((top.implied_prob.unwrap() - 0.40).abs() < 1e-12);
        assert_eq!(top.recommended_bet, "✅");

        assert_eq!(report.rows[1].player, "Juan Soto");
        assert_eq!(report.rows[1].over_odds, "-200");

        let unmatched = &report.rows[2];
        assert_eq!(unmatched.player, "Nobody Special");
        assert_eq!(unmatched.over_odds, "");
        assert_eq!(unmatched.confidence_pct, 0.0);
        assert_eq!(unmatched.implied_prob, None);
        assert_eq!(unmatched.recommended_bet, "");
    }

    #[test]
    fn run_reports_columns_after_rename() {
        let report = run(STATS.as_bytes(), ODDS.as_bytes()).unwrap();
        assert_eq!(report.columns.stats[0], "Player");
        assert!(report.columns.stats.contains(&"line_drive_rate".to_string()));
        assert_eq!(report.columns.odds, vec!["Player", "Matchup", "Over Odds"]);
    }

    #[test]
    fn missing_player_in_stats_aborts() {
        let stats = "Name,xba\nAaron Judge,0.300";
        let err = run(stats.as_bytes(), ODDS.as_bytes()).unwrap_err();
        match err {
            PipelineError::MissingJoinKey {
                stats_missing,
                odds_missing,
                columns,
            } => {
                assert!(stats_missing);
                assert!(!odds_missing);
                assert_eq!(columns.stats, vec!["Name", "xba"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_player_in_odds_aborts() {
        let odds = "Batter,Over Odds\nAaron Judge,+150";
        let err = run(STATS.as_bytes(), odds.as_bytes()).unwrap_err();
        assert!(matches!(
            err,
            PipelineError::MissingJoinKey {
                stats_missing: false,
                odds_missing: true,
                ..
            }
        ));
    }

    #[test]
    fn parse_failure_halts_before_scoring() {
        let stats = "Player,xba\nAaron Judge,0.3,extra";
        let err = run(stats.as_bytes(), ODDS.as_bytes()).unwrap_err();
        assert!(matches!(err, PipelineError::Parse { source_name: "player stats", .. }));
    }

    #[test]
    fn odds_row_without_trailing_odds_is_kept() {
        let stats = "Player,xba\nAaron Judge,0.300";
        let odds = "\
Player,Matchup,Over Odds
Aaron Judge,NYY @ BOS,+150
Luis Arraez,SD @ COL";
        let report = run(stats.as_bytes(), odds.as_bytes()).unwrap();
        assert_eq!(report.rows.len(), 2);

        let arraez = report.rows.iter().find(|r| r.player == "Luis Arraez").unwrap();
        assert_eq!(arraez.matchup, "SD @ COL");
        assert_eq!(arraez.over_odds, "");
        assert_eq!(arraez.implied_prob, None);
    }

    #[test]
    fn header_only_odds_give_empty_report() {
        let report = run(STATS.as_bytes(), "Player,Matchup,Over Odds".as_bytes()).unwrap();
        assert!(report.rows.is_empty());
        assert_eq!(report.recommended_count(), 0);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = run_files(
            Path::new("/nonexistent/player_stats.csv"),
            Path::new("/nonexistent/betting_odds.csv"),
        )
        .unwrap_err();
        assert!(matches!(err, PipelineError::Io { source_name: "player stats", .. }));
    }

    #[test]
    fn report_artifact_matches_rows() {
        let report = run(STATS.as_bytes(), ODDS.as_bytes()).unwrap();
        let artifact = report.artifact().unwrap();
        let text = String::from_utf8(artifact.bytes).unwrap();
        assert_eq!(text.lines().count(), report.rows.len() + 1);
        assert!(text.lines().nth(1).unwrap().starts_with("Aaron Judge,NYY @ BOS,+150,"));
        assert_eq!(report.recommended_count(), 2);
    }
}
