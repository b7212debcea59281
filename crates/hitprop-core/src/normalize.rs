// Column normalization: header trimming, canonical renames, and the
// `last_name, first_name` split used by Statcast exports.

use tracing::warn;

use crate::table::RawTable;

/// Canonical join-key column name.
pub const PLAYER: &str = "Player";

/// Statcast-style combined name column, formatted `"Last, First"`.
pub const LAST_FIRST: &str = "last_name, first_name";

/// Renames applied to the player stats table.
pub const STATS_RENAMES: &[(&str, &str)] = &[
    ("Player Name", PLAYER),
    ("hard_hit_percent", "hard_hit_rate"),
    ("barrel_batted_rate", "barrel_rate"),
    ("sweet_spot_percent", "sweet_spot_rate"),
    ("line_drive_percent", "line_drive_rate"),
    ("LD%", "line_drive_rate"),
    ("BABIP", "babip"),
    ("xSLG", "xslg"),
    ("xwOBA", "xwoba"),
];

/// Renames applied to the betting odds table.
pub const ODDS_RENAMES: &[(&str, &str)] = &[("Player Name", PLAYER)];

/// Column names of both inputs after trimming and renaming, surfaced to the
/// user so naming mismatches can be diagnosed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnDiagnostics {
    pub stats: Vec<String>,
    pub odds: Vec<String>,
}

/// Trim surrounding whitespace from every header.
pub fn trim_headers(headers: &mut [String]) {
    for h in headers.iter_mut() {
        let trimmed = h.trim();
        if trimmed.len() != h.len() {
            *h = trimmed.to_string();
        }
    }
}

/// Apply a rename map. Names not in the map are left alone, so applying the
/// same map twice is the same as applying it once.
pub fn rename_headers(headers: &mut [String], renames: &[(&str, &str)]) {
    for h in headers.iter_mut() {
        if let Some((_, to)) = renames.iter().find(|(from, _)| *from == h.as_str()) {
            *h = (*to).to_string();
        }
    }
}

/// Turn `"Last, First"` into `"First Last"`. Returns `None` when the value has
/// no `", "` separator.
pub fn first_last(last_first: &str) -> Option<String> {
    let (last, rest) = last_first.split_once(", ")?;
    // Anything after a second separator is dropped.
    let first = rest.split(", ").next().unwrap_or(rest);
    Some(format!("{first} {last}"))
}

/// Synthesize `Player` from the combined name column when it is present.
/// Overwrites any `Player` column that came from renaming.
fn derive_player_from_last_first(table: &mut RawTable) {
    let Some(idx) = table.column_index(LAST_FIRST) else {
        return;
    };

    let names: Vec<String> = (0..table.len())
        .map(|row| match table.cell(row, idx) {
            Some(raw) => first_last(raw).unwrap_or_else(|| {
                warn!("cannot split '{}' into last/first name; player left blank", raw);
                String::new()
            }),
            None => String::new(),
        })
        .collect();

    table.set_column(PLAYER, names);
}

/// Normalize the stats table in place.
pub fn normalize_stats(table: &mut RawTable) {
    trim_headers(table.headers_mut());
    rename_headers(table.headers_mut(), STATS_RENAMES);
}

/// Normalize the odds table in place.
pub fn normalize_odds(table: &mut RawTable) {
    trim_headers(table.headers_mut());
    rename_headers(table.headers_mut(), ODDS_RENAMES);
}

/// Run the full normalizer over both tables and return the column lists as
/// they stand after renaming.
pub fn normalize(stats: &mut RawTable, odds: &mut RawTable) -> ColumnDiagnostics {
    normalize_stats(stats);
    normalize_odds(odds);

    let columns = ColumnDiagnostics {
        stats: stats.headers().to_vec(),
        odds: odds.headers().to_vec(),
    };

    derive_player_from_last_first(stats);
    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Source;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn trims_header_whitespace() {
        let mut h = headers(&["  Player Name ", "xba\t", "Matchup"]);
        trim_headers(&mut h);
        assert_eq!(h, headers(&["Player Name", "xba", "Matchup"]));
    }

    #[test]
    fn stats_renames_statcast_columns() {
        let mut h = headers(&[
            "Player Name",
            "hard_hit_percent",
            "barrel_batted_rate",
            "sweet_spot_percent",
            "line_drive_percent",
            "BABIP",
            "xSLG",
            "xwOBA",
            "xba",
        ]);
        rename_headers(&mut h, STATS_RENAMES);
        assert_eq!(
            h,
            headers(&[
                "Player",
                "hard_hit_rate",
                "barrel_rate",
                "sweet_spot_rate",
                "line_drive_rate",
                "babip",
                "xslg",
                "xwoba",
                "xba",
            ])
        );
    }

    #[test]
    fn ld_percent_maps_to_line_drive_rate() {
        let mut h = headers(&["LD%"]);
        rename_headers(&mut h, STATS_RENAMES);
        assert_eq!(h, headers(&["line_drive_rate"]));
    }

    #[test]
    fn renaming_is_idempotent() {
        let mut once = headers(&["Player Name", "LD%", "xwOBA", "extra", "hard_hit_percent"]);
        rename_headers(&mut once, STATS_RENAMES);
        let mut twice = once.clone();
        rename_headers(&mut twice, STATS_RENAMES);
        assert_eq!(once, twice);
    }

    #[test]
    fn odds_only_rename_player_name() {
        let mut h = headers(&["Player Name", "hard_hit_percent"]);
        rename_headers(&mut h, ODDS_RENAMES);
        assert_eq!(h, headers(&["Player", "hard_hit_percent"]));
    }

    #[test]
    fn first_last_swaps_order() {
        assert_eq!(first_last("Judge, Aaron").as_deref(), Some("Aaron Judge"));
        assert_eq!(
            first_last("Guerrero Jr., Vladimir").as_deref(),
            Some("Vladimir Guerrero Jr.")
        );
    }

    #[test]
    fn first_last_without_separator() {
        assert_eq!(first_last("Ohtani"), None);
        assert_eq!(first_last("Judge,Aaron"), None);
    }

    #[test]
    fn last_first_column_overwrites_player() {
        let mut stats = RawTable::from_parts(
            Source::Stats,
            &["Player Name", "last_name, first_name", "xba"],
            &[&["wrong", "Judge, Aaron", "0.300"], &["wrong", "Soto, Juan", "0.280"]],
        );
        let mut odds = RawTable::from_parts(Source::Odds, &["Player"], &[]);

        normalize(&mut stats, &mut odds);

        let idx = stats.column_index(PLAYER).unwrap();
        assert_eq!(stats.cell(0, idx), Some("Aaron Judge"));
        assert_eq!(stats.cell(1, idx), Some("Juan Soto"));
    }

    #[test]
    fn last_first_column_creates_player() {
        let mut stats = RawTable::from_parts(
            Source::Stats,
            &[" last_name, first_name ", "xba"],
            &[&["Judge, Aaron", "0.300"], &["Ohtani", "0.290"]],
        );
        let mut odds = RawTable::from_parts(Source::Odds, &["Player Name"], &[]);

        let columns = normalize(&mut stats, &mut odds);

        // Diagnostics reflect the columns before the derived Player is added.
        assert_eq!(columns.stats, headers(&["last_name, first_name", "xba"]));
        assert_eq!(columns.odds, headers(&["Player"]));

        let idx = stats.column_index(PLAYER).unwrap();
        assert_eq!(stats.cell(0, idx), Some("Aaron Judge"));
        assert_eq!(stats.cell(1, idx), None);
    }
}
