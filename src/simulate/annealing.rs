use super::fitness::Fitness;
use super::search::Optimum;
use crate::Score;
use crate::params::Params;
use rand::Rng;
use rand::rngs::SmallRng;

/// simulated annealing over the parameter box. perturbation size and
/// the tolerance for downhill moves both shrink with the temperature,
/// so the walk starts exploratory and ends greedy. the best
/// configuration ever visited is kept separately from the current one,
/// since the walk is allowed to leave it.
pub struct Annealing {
    fitness: Fitness,
    iterations: usize,
    temperature: f32,
    cooling: f32,
}

impl Annealing {
    const TEMPERATURE: f32 = 10.0;
    const COOLING: f32 = 0.95;

    pub fn new(rounds: usize, iterations: usize) -> Self {
        Self {
            fitness: Fitness::new(rounds),
            iterations,
            temperature: Self::TEMPERATURE,
            cooling: Self::COOLING,
        }
    }

    pub fn solve(&self, start: Params, rng: &mut SmallRng) -> Optimum {
        log::info!("{:<32}{:<32}", "annealing   search", self.iterations);
        let mut current = start;
        let mut fitness = self.fitness.evaluate(&current, rng.random());
        let mut winner = current.clone();
        let mut best = fitness;
        let mut temperature = self.temperature;
        let mut trace = Vec::with_capacity(self.iterations);
        for _ in 0..self.iterations {
            let candidate = current.perturb(temperature / self.temperature, rng);
            let score = self.fitness.evaluate(&candidate, rng.random());
            if rng.random::<f32>() < Self::acceptance(fitness, score, temperature) {
                current = candidate;
                fitness = score;
                if score > best {
                    best = score;
                    winner = current.clone();
                    log::info!("{:<32}{:<32}", "improved    fitness", score);
                }
            }
            temperature *= self.cooling;
            trace.push(best);
        }
        Optimum {
            params: winner,
            fitness: best,
            trace,
        }
    }

    /// always take an uphill move; take a downhill one with the
    /// Metropolis probability, which vanishes as the system cools
    fn acceptance(current: Score, candidate: Score, temperature: f32) -> f32 {
        if candidate > current {
            1.0
        } else {
            ((candidate - current) / temperature).exp()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn uphill_moves_always_accepted() {
        assert!(Annealing::acceptance(10., 20., 5.) == 1.0);
    }

    #[test]
    fn downhill_tolerance_cools_off() {
        let hot = Annealing::acceptance(20., 10., 10.);
        let cold = Annealing::acceptance(20., 10., 0.1);
        assert!(hot > cold);
        assert!(cold < 1e-6);
    }

    #[test]
    fn trace_never_decreases() {
        let annealing = Annealing::new(10, 6);
        let ref mut rng = SmallRng::seed_from_u64(2);
        let optimum = annealing.solve(Params::default(), rng);
        assert!(optimum.trace.len() == 6);
        assert!(optimum.trace.windows(2).all(|w| w[1] >= w[0]));
    }
}
