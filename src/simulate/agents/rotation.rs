use super::super::agent::Agent;
use crate::game::History;
use crate::game::Throw;
use rand::rngs::SmallRng;

/// walks a fixed three-throw order forever
pub struct Rotation {
    order: [Throw; 3],
    index: usize,
}

impl Rotation {
    /// rock, paper, scissors, rock, ...
    pub fn forward() -> Self {
        Self {
            order: [Throw::Rock, Throw::Paper, Throw::Scissors],
            index: 0,
        }
    }
    /// rock, scissors, paper, rock, ...
    pub fn reverse() -> Self {
        Self {
            order: [Throw::Rock, Throw::Scissors, Throw::Paper],
            index: 0,
        }
    }
}

impl Agent for Rotation {
    fn name(&self) -> String {
        match self.order[1] {
            Throw::Paper => "Cycle".to_string(),
            _ => "Reverse Cycle".to_string(),
        }
    }
    fn choose(&mut self, _: &History, _: &mut SmallRng) -> Throw {
        let throw = self.order[self.index];
        self.index = (self.index + 1) % 3;
        throw
    }
    fn reset(&mut self, _: &mut SmallRng) {
        self.index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn forward_walks_the_ascending_cycle() {
        use Throw::*;
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut agent = Rotation::forward();
        let h = History::default();
        let walk = (0..4).map(|_| agent.choose(&h, rng)).collect::<Vec<_>>();
        assert!(walk == vec![Rock, Paper, Scissors, Rock]);
    }

    #[test]
    fn reset_rewinds_to_the_start() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut agent = Rotation::reverse();
        let h = History::default();
        let first = agent.choose(&h, rng);
        agent.choose(&h, rng);
        agent.reset(rng);
        assert!(agent.choose(&h, rng) == first);
    }
}
