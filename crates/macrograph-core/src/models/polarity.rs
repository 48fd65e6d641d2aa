use std::fmt;

use serde::{Deserialize, Serialize};

/// Directional reading of a headline or of one asset within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    Positive,
    Negative,
    Neutral,
}

impl Polarity {
    /// Tie-break precedence for dominant-polarity selection.
    pub const PRECEDENCE: [Polarity; 3] = [Self::Positive, Self::Negative, Self::Neutral];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }

    /// Flip positive and negative; neutral stays neutral.
    pub fn inverted(self) -> Self {
        match self {
            Self::Positive => Self::Negative,
            Self::Negative => Self::Positive,
            Self::Neutral => Self::Neutral,
        }
    }
}

impl fmt::Display for Polarity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Qualitative reading of labor-market data mentioned in a headline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaborStrength {
    Strong,
    Weak,
    Mixed,
}

/// Per-polarity occurrence counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PolarityTally {
    pub positive: u64,
    pub negative: u64,
    pub neutral: u64,
}

impl PolarityTally {
    pub fn record(&mut self, polarity: Polarity) {
        *self.slot(polarity) += 1;
    }

    pub fn merge(&mut self, other: &PolarityTally) {
        self.positive += other.positive;
        self.negative += other.negative;
        self.neutral += other.neutral;
    }

    pub fn count(&self, polarity: Polarity) -> u64 {
        match polarity {
            Polarity::Positive => self.positive,
            Polarity::Negative => self.negative,
            Polarity::Neutral => self.neutral,
        }
    }

    pub fn total(&self) -> u64 {
        self.positive + self.negative + self.neutral
    }

    /// Bucket with the highest count; ties go to the earlier entry of
    /// `Polarity::PRECEDENCE`. An empty tally is neutral.
    pub fn dominant(&self) -> Polarity {
        if self.total() == 0 {
            return Polarity::Neutral;
        }
        let mut best = Polarity::PRECEDENCE[0];
        for p in Polarity::PRECEDENCE.into_iter().skip(1) {
            if self.count(p) > self.count(best) {
                best = p;
            }
        }
        best
    }

    fn slot(&mut self, polarity: Polarity) -> &mut u64 {
        match polarity {
            Polarity::Positive => &mut self.positive,
            Polarity::Negative => &mut self.negative,
            Polarity::Neutral => &mut self.neutral,
        }
    }
}
