use super::super::agent::Agent;
use crate::game::History;
use crate::game::Throw;
use rand::rngs::SmallRng;

/// deterministic first-order chain: each throw is a fixed function of
/// the previous one, stepping up the cycle
pub struct Chain {
    last: Throw,
}

impl Chain {
    pub fn new() -> Self {
        Self {
            last: Throw::default(),
        }
    }
}

impl Agent for Chain {
    fn name(&self) -> String {
        "Markov".to_string()
    }
    fn choose(&mut self, history: &History, _: &mut SmallRng) -> Throw {
        if let Some(last) = history.last() {
            self.last = last.player.counter();
        }
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
    fn transition_is_a_fixed_step_up_the_cycle() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut agent = Chain::new();
        let h = History::from(vec![Round::from((Throw::Scissors, Throw::Rock))]);
        assert!(agent.choose(&h, rng) == Throw::Rock);
    }
}
