use crate::game::History;
use crate::game::Throw;
use rand::rngs::SmallRng;

/// a scripted opponent archetype. agents carry their own state between
/// rounds (cycle indices, remembered favorites) and surrender it on
/// reset, which the simulator calls before every game.
pub trait Agent {
    /// label for logs and tournament breakdowns
    fn name(&self) -> String;
    /// the archetype's next throw given the shared game history
    fn choose(&mut self, history: &History, rng: &mut SmallRng) -> Throw;
    /// drop per-game state and re-roll any randomized favorites
    fn reset(&mut self, rng: &mut SmallRng);
}
