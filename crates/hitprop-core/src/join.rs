// Typed row extraction and the odds-onto-stats left join.

use std::collections::HashMap;

use tracing::warn;

use crate::normalize::PLAYER;
use crate::scoring::{HitRates, RateField, Score};
use crate::table::RawTable;

pub const MATCHUP: &str = "Matchup";
pub const OVER_ODDS: &str = "Over Odds";

/// One player's scoring rates from the stats table.
#[derive(Debug, Clone, PartialEq)]
pub struct StatLine {
    pub player: String,
    pub rates: HitRates,
}

/// One prop bet from the odds table. `over_odds` is `None` when the cell was
/// empty or not a number.
#[derive(Debug, Clone, PartialEq)]
pub struct OddsLine {
    pub player: String,
    pub matchup: String,
    pub over_odds: Option<f64>,
}

/// An odds row with its matched stats (if any) and the derived score.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedRow {
    pub odds: OddsLine,
    pub rates: Option<HitRates>,
    pub score: Score,
}

/// Parse a numeric cell the way a lenient CSV reader would: surrounding
/// whitespace and a leading `+` are accepted, everything else that is not a
/// finite number is treated as missing.
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    unsigned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Extract `StatLine`s. Rows without a player name are skipped; a rate column
/// that is absent leaves that rate `None` for every row.
pub fn stat_lines(table: &RawTable) -> Vec<StatLine> {
    let Some(player_idx) = table.column_index(PLAYER) else {
        return Vec::new();
    };
    let rate_cols: Vec<(RateField, Option<usize>)> = RateField::ALL
        .iter()
        .map(|&f| (f, table.column_index(f.column())))
        .collect();

    let mut lines = Vec::with_capacity(table.len());
    for row in 0..table.len() {
        let Some(player) = table.cell(row, player_idx) else {
            warn!("skipping stats row {}: no player name", row + 1);
            continue;
        };

        let mut rates = HitRates::default();
        for &(field, col) in &rate_cols {
            let value = col.and_then(|c| table.cell(row, c)).and_then(|raw| {
                let parsed = parse_number(raw);
                if parsed.is_none() {
                    warn!(
                        "non-numeric {} '{}' for '{}', treating as missing",
                        field.column(),
                        raw,
                        player
                    );
                }
                parsed
            });
            rates.set(field, value);
        }

        lines.push(StatLine {
            player: player.to_string(),
            rates,
        });
    }
    lines
}

/// Extract `OddsLine`s, one per odds row. Every row is kept, including rows
/// with a blank player.
pub fn odds_lines(table: &RawTable) -> Vec<OddsLine> {
    let player_idx = table.column_index(PLAYER);
    let matchup_idx = table.column_index(MATCHUP);
    let odds_idx = table.column_index(OVER_ODDS);

    if matchup_idx.is_none() {
        warn!("betting odds have no '{}' column; matchups left blank", MATCHUP);
    }
    if odds_idx.is_none() {
        warn!("betting odds have no '{}' column; odds left blank", OVER_ODDS);
    }

    (0..table.len())
        .map(|row| {
            let player = player_idx
                .and_then(|c| table.cell(row, c))
                .unwrap_or_default()
                .to_string();
            let matchup = matchup_idx
                .and_then(|c| table.cell(row, c))
                .unwrap_or_default()
                .to_string();
            let over_odds = odds_idx.and_then(|c| table.cell(row, c)).and_then(|raw| {
                let parsed = parse_number(raw);
                if parsed.is_none() {
                    warn!("non-numeric odds '{}' for '{}', left blank", raw, player);
                }
                parsed
            });
            OddsLine {
                player,
                matchup,
                over_odds,
            }
        })
        .collect()
}

/// Left-join odds onto stats by exact player name and score every row.
///
/// Output order matches `odds`, with exactly one row per odds line. When
/// several stats rows share a name, the first one is used.
pub fn left_join(odds: Vec<OddsLine>, stats: &[StatLine]) -> Vec<JoinedRow> {
    let mut index: HashMap<&str, &HitRates> = HashMap::with_capacity(stats.len());
    for line in stats {
        if index.contains_key(line.player.as_str()) {
            warn!("duplicate stats row for '{}', keeping the first", line.player);
            continue;
        }
        index.insert(line.player.as_str(), &line.rates);
    }

    odds.into_iter()
        .map(|line| {
            let rates = if line.player.is_empty() {
                None
            } else {
                index.get(line.player.as_str()).map(|r| **r)
            };
            if rates.is_none() {
                warn!("no stats for '{}'; rates scored as zero", line.player);
            }
            let score = Score::compute(&rates.unwrap_or_default(), line.over_odds);
            if line.over_odds.is_some() && score.implied_prob.is_none() {
                warn!(
                    "odds of 0 for '{}' have no implied probability; edge left blank",
                    line.player
                );
            }
            JoinedRow {
                odds: line,
                rates,
                score,
            }
        })
        .collect()
}
