use serde::Deserialize;
use serde::Serialize;

/// which predictor answers a serving call.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// uniform random, no modeling at all
    Trivial,
    /// frequency counter with a light psychological blend
    Basic,
    /// strict priority cascade over the pattern detectors
    Tiered,
    /// full confidence-weighted ensemble vote
    Ensemble,
}

impl From<&str> for Difficulty {
    fn from(s: &str) -> Self {
        match s {
            "trivial" => Difficulty::Trivial,
            "basic" => Difficulty::Basic,
            "tiered" => Difficulty::Tiered,
            "ensemble" => Difficulty::Ensemble,
            _ => panic!("Invalid difficulty str: {}", s),
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Difficulty::Trivial => "trivial",
                Difficulty::Basic => "basic",
                Difficulty::Tiered => "tiered",
                Difficulty::Ensemble => "ensemble",
            }
        )
    }
}
