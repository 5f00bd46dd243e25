use super::outcome::Outcome;
use super::throw::Throw;
use serde::Deserialize;
use serde::Serialize;

/// one completed round. immutable once created; the result field is
/// derived from the two throws and never supplied independently.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub player: Throw,
    pub computer: Throw,
    pub result: Outcome,
}

impl From<(Throw, Throw)> for Round {
    fn from((player, computer): (Throw, Throw)) -> Self {
        Self {
            player,
            computer,
            result: Outcome::from((player, computer)),
        }
    }
}

impl std::fmt::Display for Round {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} v {} ({})", self.player, self.computer, self.result)
    }
}
