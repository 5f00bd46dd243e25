use crate::Probability;
use crate::game::Outcome;

/// running result counts for one game, from the engine's side of the
/// table. wins are rounds the engine took.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    wins: usize,
    losses: usize,
    ties: usize,
}

impl Tally {
    pub fn absorb(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Computer => self.wins += 1,
            Outcome::Player => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
    }
    pub fn wins(&self) -> usize {
        self.wins
    }
    pub fn losses(&self) -> usize {
        self.losses
    }
    pub fn ties(&self) -> usize {
        self.ties
    }
    pub fn rounds(&self) -> usize {
        self.wins + self.losses + self.ties
    }
    pub fn win_rate(&self) -> Probability {
        match self.rounds() {
            0 => 0.,
            n => self.wins as Probability / n as Probability,
        }
    }
}

impl std::fmt::Display for Tally {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}W {}L {}T", self.wins, self.losses, self.ties)
    }
}
