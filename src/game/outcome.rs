use super::throw::Throw;
use serde::Deserialize;
use serde::Serialize;

/// round result from the serving shell's point of view:
/// Player is the opponent being modeled, Computer is this engine.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Player,
    Computer,
    Tie,
}

/// (player, computer) -> result, determined solely by dominance
impl From<(Throw, Throw)> for Outcome {
    fn from((player, computer): (Throw, Throw)) -> Self {
        if player == computer {
            Outcome::Tie
        } else if player.beats() == computer {
            Outcome::Player
        } else {
            Outcome::Computer
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Outcome::Player => "player",
                Outcome::Computer => "computer",
                Outcome::Tie => "tie",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tie_iff_equal() {
        for throw in Throw::ALL {
            assert!(Outcome::from((throw, throw)) == Outcome::Tie);
        }
    }

    #[test]
    fn counter_always_wins() {
        for throw in Throw::ALL {
            assert!(Outcome::from((throw, throw.counter())) == Outcome::Computer);
            assert!(Outcome::from((throw.counter(), throw)) == Outcome::Player);
        }
    }
}
