use super::outcome::Outcome;
use super::round::Round;
use super::throw::Throw;

/// insertion-ordered record of completed rounds. the serving shell
/// supplies one of these fresh on every call; the simulator grows one
/// in-process. rounds are never mutated or removed.
///
/// all the windowed queries the signal extractors need live here, so
/// window arithmetic is written once.
#[derive(Debug, Default, Clone)]
pub struct History(Vec<Round>);

impl From<Vec<Round>> for History {
    fn from(rounds: Vec<Round>) -> Self {
        Self(rounds)
    }
}

impl History {
    pub fn push(&mut self, round: Round) {
        self.0.push(round);
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn last(&self) -> Option<&Round> {
        self.0.last()
    }
    pub fn rounds(&self) -> &[Round] {
        &self.0
    }

    /// last n rounds (or all of them, whichever is shorter)
    pub fn tail(&self, n: usize) -> &[Round] {
        &self.0[self.0.len().saturating_sub(n)..]
    }

    /// opponent throws in the last n rounds, oldest first
    pub fn recent(&self, n: usize) -> Vec<Throw> {
        self.tail(n).iter().map(|r| r.player).collect()
    }

    /// distribution of opponent throws over the last n rounds,
    /// indexed by Throw as u8
    pub fn counts(&self, n: usize) -> [usize; 3] {
        self.tail(n)
            .iter()
            .fold([0; 3], |mut counts, r| {
                counts[u8::from(r.player) as usize] += 1;
                counts
            })
    }

    /// modal opponent throw over the last n rounds, with its count and
    /// the effective window length. ties break in fixed Throw order.
    pub fn modal(&self, n: usize) -> Option<(Throw, usize, usize)> {
        let window = self.tail(n).len();
        let counts = self.counts(n);
        Throw::ALL
            .into_iter()
            .rev() // max_by_key keeps the last max, so reverse to prefer Rock
            .max_by_key(|t| counts[u8::from(*t) as usize])
            .filter(|_| window > 0)
            .map(|t| (t, counts[u8::from(t) as usize], window))
    }

    /// aggregate counts for get_statistics()-style reporting
    pub fn player_wins(&self) -> usize {
        self.score(Outcome::Player)
    }
    pub fn computer_wins(&self) -> usize {
        self.score(Outcome::Computer)
    }
    pub fn ties(&self) -> usize {
        self.score(Outcome::Tie)
    }
    fn score(&self, outcome: Outcome) -> usize {
        self.0.iter().filter(|r| r.result == outcome).count()
    }
}
