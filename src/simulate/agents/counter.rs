use super::super::agent::Agent;
use crate::game::History;
use crate::game::Throw;
use rand::Rng;
use rand::rngs::SmallRng;

/// level-2 reasoner: advertises a fake rock habit for ten rounds, then
/// plays what beats the counter an attentive engine would choose
pub struct CounterAi;

impl CounterAi {
    const FAVORITE: Throw = Throw::Rock;
    const RAMP_ROUNDS: usize = 10;
    const RAMP_RATE: f32 = 0.7;
    const STRIKE_RATE: f32 = 0.6;
}

impl Agent for CounterAi {
    fn name(&self) -> String {
        "Counter-AI".to_string()
    }
    fn choose(&mut self, history: &History, rng: &mut SmallRng) -> Throw {
        if history.len() < Self::RAMP_ROUNDS {
            if rng.random::<f32>() < Self::RAMP_RATE {
                Self::FAVORITE
            } else if rng.random::<bool>() {
                Self::FAVORITE.counter()
            } else {
                Self::FAVORITE.beats()
            }
        } else if rng.random::<f32>() < Self::STRIKE_RATE {
            // the engine answers the fake habit with its counter;
            // answer that answer
            Self::FAVORITE.counter().counter()
        } else {
            Throw::random(rng)
        }
    }
    fn reset(&mut self, _: &mut SmallRng) {}
}
