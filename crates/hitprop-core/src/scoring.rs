// Hit probability model and American odds conversion.
//
// The model is a fixed weighted sum of five Statcast contact-quality rates,
// each scaled by a league benchmark. Weights, benchmarks and the
// recommendation threshold are constants; nothing here reads configuration.

/// Model probability above which a bet is recommended.
pub const RECOMMEND_THRESHOLD: f64 = 0.37;

/// One of the five rate fields the model consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RateField {
    Xba,
    HardHitRate,
    LineDriveRate,
    SweetSpotRate,
    BarrelRate,
}

impl RateField {
    pub const ALL: [RateField; 5] = [
        RateField::Xba,
        RateField::HardHitRate,
        RateField::LineDriveRate,
        RateField::SweetSpotRate,
        RateField::BarrelRate,
    ];

    /// Canonical column name after normalization.
    pub fn column(self) -> &'static str {
        match self {
            RateField::Xba => "xba",
            RateField::HardHitRate => "hard_hit_rate",
            RateField::LineDriveRate => "line_drive_rate",
            RateField::SweetSpotRate => "sweet_spot_rate",
            RateField::BarrelRate => "barrel_rate",
        }
    }

    pub fn weight(self) -> f64 {
        match self {
            RateField::Xba => 0.55,
            RateField::HardHitRate => 0.20,
            RateField::LineDriveRate => 0.10,
            RateField::SweetSpotRate => 0.10,
            RateField::BarrelRate => 0.05,
        }
    }

    /// Reference value the raw rate is divided by.
    pub fn benchmark(self) -> f64 {
        match self {
            RateField::Xba => 0.350,
            RateField::HardHitRate => 0.550,
            RateField::LineDriveRate => 0.280,
            RateField::SweetSpotRate => 0.400,
            RateField::BarrelRate => 0.180,
        }
    }
}

/// The scoring rates for one player. `None` means the value was absent,
/// either because the column is missing or the player had no stats row.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HitRates {
    pub xba: Option<f64>,
    pub hard_hit_rate: Option<f64>,
    pub line_drive_rate: Option<f64>,
    pub sweet_spot_rate: Option<f64>,
    pub barrel_rate: Option<f64>,
}

impl HitRates {
    /// Typed lookup with a 0 fallback for absent values.
    pub fn get(&self, field: RateField) -> f64 {
        self.raw(field).unwrap_or(0.0)
    }

    pub fn raw(&self, field: RateField) -> Option<f64> {
        match field {
            RateField::Xba => self.xba,
            RateField::HardHitRate => self.hard_hit_rate,
            RateField::LineDriveRate => self.line_drive_rate,
            RateField::SweetSpotRate => self.sweet_spot_rate,
            RateField::BarrelRate => self.barrel_rate,
        }
    }

    pub fn set(&mut self, field: RateField, value: Option<f64>) {
        let slot = match field {
            RateField::Xba => &mut self.xba,
            RateField::HardHitRate => &mut self.hard_hit_rate,
            RateField::LineDriveRate => &mut self.line_drive_rate,
            RateField::SweetSpotRate => &mut self.sweet_spot_rate,
            RateField::BarrelRate => &mut self.barrel_rate,
        };
        *slot = value;
    }
}

/// Weighted benchmark-scaled sum of the five rates. Not clamped to [0, 1].
pub fn model_probability(rates: &HitRates) -> f64 {
    RateField::ALL
        .iter()
        .map(|&f| f.weight() * (rates.get(f) / f.benchmark()))
        .sum()
}

/// Break-even probability for American odds.
///
/// Returns `None` for zero and non-finite odds: American odds are never
/// exactly zero, so there is no meaningful probability to report.
pub fn implied_probability(odds: f64) -> Option<f64> {
    if !odds.is_finite() || odds == 0.0 {
        return None;
    }
    if odds > 0.0 {
        Some(100.0 / (odds + 100.0))
    } else {
        let abs = odds.abs();
        Some(abs / (abs + 100.0))
    }
}

/// Derived per-row numbers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub model_hit_prob: f64,
    pub implied_prob: Option<f64>,
    /// Model minus implied, in percentage points.
    pub edge_pct: Option<f64>,
    pub confidence_pct: f64,
    pub recommended: bool,
}

impl Score {
    pub fn compute(rates: &HitRates, over_odds: Option<f64>) -> Score {
        let model = model_probability(rates);
        let implied = over_odds.and_then(implied_probability);
        Score {
            model_hit_prob: model,
            implied_prob: implied,
            edge_pct: implied.map(|p| (model - p) * 100.0),
            confidence_pct: model * 100.0,
            recommended: model > RECOMMEND_THRESHOLD,
        }
    }
}
