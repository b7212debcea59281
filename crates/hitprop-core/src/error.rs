// Error taxonomy for a single pipeline run.
//
// Every variant aborts the whole run: there is no partial recommendation
// table. Missing numeric fields and unparseable odds are not errors; they are
// handled inline by the scorer.

use std::path::PathBuf;

use thiserror::Error;

use crate::normalize::ColumnDiagnostics;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to read {source_name} file {path}: {source}")]
    Io {
        source_name: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not parse {source_name} input as CSV: {source}")]
    Parse {
        source_name: &'static str,
        source: csv::Error,
    },

    #[error("{source_name} input is empty (no header row)")]
    EmptyInput { source_name: &'static str },

    #[error(
        "'Player' column missing after adjustments in {}. Please check your uploaded files.",
        describe_missing(.stats_missing, .odds_missing)
    )]
    MissingJoinKey {
        stats_missing: bool,
        odds_missing: bool,
        columns: ColumnDiagnostics,
    },

    #[error("failed to serialize recommendations: {0}")]
    Serialize(#[source] csv::Error),

    #[error("failed to write export {path}: {source}")]
    Export {
        path: PathBuf,
        source: std::io::Error,
    },
}

fn describe_missing(stats_missing: &bool, odds_missing: &bool) -> &'static str {
    match (*stats_missing, *odds_missing) {
        (true, true) => "both player stats and betting odds",
        (true, false) => "player stats",
        _ => "betting odds",
    }
}

impl PipelineError {
    /// Column lists captured before the failure, when the run got that far.
    pub fn columns(&self) -> Option<&ColumnDiagnostics> {
        match self {
            PipelineError::MissingJoinKey { columns, .. } => Some(columns),
            _ => None,
        }
    }
}
