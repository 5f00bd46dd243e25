use super::super::agent::Agent;
use crate::Probability;
use crate::game::History;
use crate::game::Throw;
use rand::Rng;
use rand::rngs::SmallRng;

/// leans on a favorite throw at a fixed rate, uniform over the other
/// two the rest of the time
pub struct Bias {
    favorite: Throw,
    rate: Probability,
}

impl Bias {
    pub fn new(favorite: Throw, rate: Probability) -> Self {
        Self { favorite, rate }
    }
}

impl Agent for Bias {
    fn name(&self) -> String {
        format!("Bias {} {:.0}%", self.favorite, self.rate * 100.)
    }
    fn choose(&mut self, _: &History, rng: &mut SmallRng) -> Throw {
        if rng.random::<f32>() < self.rate {
            self.favorite
        } else if rng.random::<bool>() {
            self.favorite.counter()
        } else {
            self.favorite.beats()
        }
    }
    fn reset(&mut self, _: &mut SmallRng) {}
}
