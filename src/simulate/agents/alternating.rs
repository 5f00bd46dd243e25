use super::super::agent::Agent;
use crate::game::History;
use crate::game::Throw;
use rand::rngs::SmallRng;

/// strict two-throw alternation
pub struct Alternating {
    pair: [Throw; 2],
    index: usize,
}

impl Alternating {
    pub fn new(first: Throw, second: Throw) -> Self {
        Self {
            pair: [first, second],
            index: 0,
        }
    }
}

impl Agent for Alternating {
    fn name(&self) -> String {
        format!("Alternating {}/{}", self.pair[0], self.pair[1])
    }
    fn choose(&mut self, _: &History, _: &mut SmallRng) -> Throw {
        let throw = self.pair[self.index];
        self.index = (self.index + 1) % 2;
        throw
    }
    fn reset(&mut self, _: &mut SmallRng) {
        self.index = 0;
    }
}
