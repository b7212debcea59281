// Presentation: display formatting, confidence ordering, CSV serialization.

use serde::Serialize;

use crate::error::PipelineError;
use crate::join::JoinedRow;

pub const EXPORT_FILE_NAME: &str = "recommended_bets.csv";
pub const EXPORT_CONTENT_TYPE: &str = "text/csv";
pub const RECOMMENDED_SYMBOL: &str = "✅";

/// Output column order, shared by the rendered table and the CSV export.
pub const COLUMNS: [&str; 8] = [
    "Player",
    "Matchup",
    "Over Odds",
    "Model_Hit_Prob",
    "Implied_Prob",
    "Edge_%",
    "Confidence_%",
    "Recommended_Bet",
];

/// One projected output row, ready to render or serialize.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationRow {
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "Matchup")]
    pub matchup: String,
    #[serde(rename = "Over Odds")]
    pub over_odds: String,
    #[serde(rename = "Model_Hit_Prob")]
    pub model_hit_prob: f64,
    #[serde(rename = "Implied_Prob")]
    pub implied_prob: Option<f64>,
    #[serde(rename = "Edge_%")]
    pub edge_pct: Option<f64>,
    #[serde(rename = "Confidence_%")]
    pub confidence_pct: f64,
    #[serde(rename = "Recommended_Bet")]
    pub recommended_bet: &'static str,
}

impl RecommendationRow {
    pub fn is_recommended(&self) -> bool {
        !self.recommended_bet.is_empty()
    }
}

/// A downloadable file produced by a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: &'static str,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Display form of American odds: `+150`, `-200`, `0`, or blank when
/// missing. Fractional odds truncate toward zero.
pub fn format_odds(odds: Option<f64>) -> String {
    match odds {
        None => String::new(),
        Some(o) if o > 0.0 => format!("+{}", o.trunc() as i64),
        Some(o) => format!("{}", o.trunc() as i64),
    }
}

pub fn recommendation_symbol(recommended: bool) -> &'static str {
    if recommended {
        RECOMMENDED_SYMBOL
    } else {
        ""
    }
}

/// Project joined rows to the output columns.
pub fn project(rows: Vec<JoinedRow>) -> Vec<RecommendationRow> {
    rows.into_iter()
        .map(|row| RecommendationRow {
            over_odds: format_odds(row.odds.over_odds),
            player: row.odds.player,
            matchup: row.odds.matchup,
            model_hit_prob: row.score.model_hit_prob,
            implied_prob: row.score.implied_prob,
            edge_pct: row.score.edge_pct,
            confidence_pct: row.score.confidence_pct,
            recommended_bet: recommendation_symbol(row.score.recommended),
        })
        .collect()
}

/// Highest confidence first. `sort_by` is stable, so ties keep join order.
pub fn sort_by_confidence(rows: &mut [RecommendationRow]) {
    rows.sort_by(|a, b| {
        b.confidence_pct
            .partial_cmp(&a.confidence_pct)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Serialize rows as UTF-8 CSV with a header row and no index column.
pub fn to_csv(rows: &[RecommendationRow]) -> Result<Vec<u8>, PipelineError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    if rows.is_empty() {
        writer
            .write_record(COLUMNS)
            .map_err(PipelineError::Serialize)?;
    }
    for row in rows {
        writer.serialize(row).map_err(PipelineError::Serialize)?;
    }
    writer
        .into_inner()
        .map_err(|e| PipelineError::Serialize(csv::Error::from(e.into_error())))
}

pub fn artifact(rows: &[RecommendationRow]) -> Result<Artifact, PipelineError> {
    Ok(Artifact {
        file_name: EXPORT_FILE_NAME,
        content_type: EXPORT_CONTENT_TYPE,
        bytes: to_csv(rows)?,
    })
}
