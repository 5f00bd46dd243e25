use super::tournament::Category;
use super::tournament::Tournament;
use crate::Score;
use crate::params::Params;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// scores a configuration by tournament play. the headline term is the
/// weighted win rate on a 0-100 scale, shaped by two corrections: a
/// bonus for holding up against the complex archetypes and a penalty
/// for drifting off the fair 33% against pure random, which would mean
/// the engine is leaking a pattern of its own.
pub struct Fitness {
    tournament: Tournament,
}

impl Fitness {
    const COMPLEX_BAR: f32 = 0.55;
    const COMPLEX_BONUS: f32 = 20.;
    const FAIR_BAND: (f32, f32) = (0.28, 0.38);
    const FAIR_CENTER: f32 = 0.33;
    const FAIR_PENALTY: f32 = 30.;

    pub fn new(rounds: usize) -> Self {
        Self {
            tournament: Tournament::new(rounds),
        }
    }

    /// fitness of one configuration under one seed. the seed pins every
    /// draw in the tournament, so repeated calls agree exactly.
    pub fn evaluate(&self, params: &Params, seed: u64) -> Score {
        let ref mut rng = SmallRng::seed_from_u64(seed);
        let performance = self.tournament.run(params, rng);
        let mut fitness = performance.weighted() * 100.;
        let complex = performance.category(Category::Complex);
        if complex > Self::COMPLEX_BAR {
            fitness += (complex - Self::COMPLEX_BAR) * Self::COMPLEX_BONUS;
        }
        let random = performance.category(Category::Random);
        if random < Self::FAIR_BAND.0 || random > Self::FAIR_BAND.1 {
            fitness -= (random - Self::FAIR_CENTER).abs() * Self::FAIR_PENALTY;
        }
        fitness
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_fitness() {
        let fitness = Fitness::new(20);
        let params = Params::default();
        assert!(fitness.evaluate(&params, 3) == fitness.evaluate(&params, 3));
    }

    #[test]
    fn defaults_beat_the_suite_handily() {
        let fitness = Fitness::new(100);
        assert!(fitness.evaluate(&Params::default(), 0) > 40.);
    }
}
