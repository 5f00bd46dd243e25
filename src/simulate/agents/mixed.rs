use super::super::agent::Agent;
use crate::game::History;
use crate::game::Outcome;
use crate::game::Throw;
use rand::Rng;
use rand::rngs::SmallRng;

/// a composite of habits drawn fresh every round: sometimes
/// win-stay-lose-shift, sometimes a mild favorite, otherwise random.
/// the closest thing in the suite to an attentive human.
pub struct Mixed {
    favorite: Throw,
}

impl Mixed {
    const STAY_SHIFT: f32 = 0.3;
    const FAVORITE: f32 = 0.6;
    const FAVORITE_RATE: f32 = 0.55;

    pub fn new() -> Self {
        Self {
            favorite: Throw::default(),
        }
    }
}

impl Agent for Mixed {
    fn name(&self) -> String {
        "Mixed Strategy".to_string()
    }
    fn choose(&mut self, history: &History, rng: &mut SmallRng) -> Throw {
        let strategy = rng.random::<f32>();
        if strategy < Self::STAY_SHIFT {
            if let Some(last) = history.last() {
                return match last.result {
                    Outcome::Player => last.player,
                    _ => last.player.counter(),
                };
            }
        } else if strategy < Self::FAVORITE && rng.random::<f32>() < Self::FAVORITE_RATE {
            return self.favorite;
        }
        Throw::random(rng)
    }
    fn reset(&mut self, rng: &mut SmallRng) {
        self.favorite = Throw::random(rng);
    }
}
