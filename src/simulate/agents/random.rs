use super::super::agent::Agent;
use crate::game::History;
use crate::game::Throw;
use rand::rngs::SmallRng;

/// uniform random play, the unexploitable baseline
pub struct Random;

impl Agent for Random {
    fn name(&self) -> String {
        "Random".to_string()
    }
    fn choose(&mut self, _: &History, rng: &mut SmallRng) -> Throw {
        Throw::random(rng)
    }
    fn reset(&mut self, _: &mut SmallRng) {}
}
