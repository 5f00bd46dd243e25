use super::super::agent::Agent;
use crate::game::History;
use crate::game::Outcome;
use crate::game::Throw;
use rand::Rng;
use rand::rngs::SmallRng;

/// which throw a lose-shifter reaches for after a loss or tie
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shift {
    /// step up the cycle: rock to paper to scissors to rock
    Sequential,
    /// either of the two other throws, evenly
    Random,
    /// what would have beaten the round just played
    Counter,
}

/// the classic human habit: repeat a winning throw, abandon a losing one
pub struct WinStayLoseShift {
    shift: Shift,
    last: Throw,
}

impl WinStayLoseShift {
    pub fn new(shift: Shift) -> Self {
        Self {
            shift,
            last: Throw::default(),
        }
    }
}

impl Agent for WinStayLoseShift {
    fn name(&self) -> String {
        format!("Win-Stay-Lose-Shift ({:?})", self.shift)
    }
    fn choose(&mut self, history: &History, rng: &mut SmallRng) -> Throw {
        let Some(last) = history.last() else {
            return self.last;
        };
        self.last = match last.result {
            Outcome::Player => last.player,
            _ => match self.shift {
                Shift::Sequential => last.player.counter(),
                Shift::Random => match rng.random::<bool>() {
                    true => last.player.counter(),
                    false => last.player.beats(),
                },
                Shift::Counter => match last.result {
                    Outcome::Computer => last.computer.counter(),
                    _ => last.player.counter(),
                },
            },
        };
        self.last
    }
    fn reset(&mut self, rng: &mut SmallRng) {
        self.last = Throw::random(rng);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Round;
    use rand::SeedableRng;

    #[test]
    fn stays_on_a_win() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut agent = WinStayLoseShift::new(Shift::Sequential);
        let h = History::from(vec![Round::from((Throw::Rock, Throw::Scissors))]);
        assert!(agent.choose(&h, rng) == Throw::Rock);
    }

    #[test]
    fn shifts_sequentially_on_a_loss() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut agent = WinStayLoseShift::new(Shift::Sequential);
        let h = History::from(vec![Round::from((Throw::Rock, Throw::Paper))]);
        assert!(agent.choose(&h, rng) == Throw::Paper);
    }

    #[test]
    fn counter_shift_answers_the_winning_throw() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut agent = WinStayLoseShift::new(Shift::Counter);
        // lost to paper, so reach for scissors
        let h = History::from(vec![Round::from((Throw::Rock, Throw::Paper))]);
        assert!(agent.choose(&h, rng) == Throw::Scissors);
        // tied on rock, so reach for paper
        let h = History::from(vec![Round::from((Throw::Rock, Throw::Rock))]);
        assert!(agent.choose(&h, rng) == Throw::Paper);
    }
}
