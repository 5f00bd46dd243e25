//! the predictor tiers. the serving entry point is [`predict`]: pure in
//! (history, difficulty, params, rng), no retained state, and total:
//! there is always a throw to play.

pub mod basic;
pub mod difficulty;
pub mod ensemble;
pub mod tiered;

pub use basic::*;
pub use difficulty::*;
pub use ensemble::*;
pub use tiered::*;

use crate::game::History;
use crate::game::Throw;
use crate::params::Params;
use crate::params::TieredParams;
use rand::Rng;

/// the engine's next throw at the requested difficulty.
pub fn predict(
    history: &History,
    difficulty: Difficulty,
    params: &Params,
    rng: &mut impl Rng,
) -> Throw {
    match difficulty {
        Difficulty::Trivial => Throw::random(rng),
        Difficulty::Basic => Basic::predict(history, rng),
        Difficulty::Tiered => Tiered::predict(history, &TieredParams::default(), rng),
        Difficulty::Ensemble => Ensemble::predict(history, params, rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Round;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn every_tier_is_deterministic_per_seed() {
        use Difficulty::*;
        let h = History::from(vec![Round::from((Throw::Rock, Throw::Paper)); 16]);
        let params = Params::default();
        for difficulty in [Trivial, Basic, Tiered, Ensemble] {
            let a = predict(&h, difficulty, &params, &mut SmallRng::seed_from_u64(11));
            let b = predict(&h, difficulty, &params, &mut SmallRng::seed_from_u64(11));
            assert!(a == b);
        }
    }
}
