use super::fitness::Fitness;
use crate::Score;
use crate::params::Params;
use rand::Rng;
use rand::rngs::SmallRng;
use rayon::prelude::*;

/// the outcome of a search: the winning configuration, its fitness, and
/// the best-so-far fitness after each iteration. the trace is
/// non-decreasing by construction.
pub struct Optimum {
    pub params: Params,
    pub fitness: Score,
    pub trace: Vec<Score>,
}

/// uniform random sampling over the parameter box. embarrassingly
/// parallel, so candidates and their seeds are drawn up front from the
/// master rng and the evaluations fan out across threads.
pub struct RandomSearch {
    fitness: Fitness,
    iterations: usize,
}

impl RandomSearch {
    pub fn new(rounds: usize, iterations: usize) -> Self {
        Self {
            fitness: Fitness::new(rounds),
            iterations,
        }
    }

    pub fn solve(&self, rng: &mut SmallRng) -> Optimum {
        log::info!("{:<32}{:<32}", "random      search", self.iterations);
        let candidates = (0..self.iterations)
            .map(|_| (Params::random(rng), rng.random::<u64>()))
            .collect::<Vec<_>>();
        let scores = candidates
            .par_iter()
            .map(|(params, seed)| self.fitness.evaluate(params, *seed))
            .collect::<Vec<_>>();
        let mut best = Score::MIN;
        let mut winner = Params::default();
        let mut trace = Vec::with_capacity(self.iterations);
        for ((params, _), score) in candidates.iter().zip(scores.iter()) {
            if *score > best {
                best = *score;
                winner = params.clone();
                log::info!("{:<32}{:<32}", "improved    fitness", score);
            }
            trace.push(best);
        }
        Optimum {
            params: winner,
            fitness: best,
            trace,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn trace_never_decreases() {
        let search = RandomSearch::new(10, 8);
        let optimum = search.solve(&mut SmallRng::seed_from_u64(1));
        assert!(optimum.trace.len() == 8);
        assert!(optimum.trace.windows(2).all(|w| w[1] >= w[0]));
        assert!(optimum.fitness == *optimum.trace.last().unwrap());
    }

    #[test]
    fn same_seed_same_winner() {
        let search = RandomSearch::new(10, 4);
        let a = search.solve(&mut SmallRng::seed_from_u64(5));
        let b = search.solve(&mut SmallRng::seed_from_u64(5));
        assert!(a.params == b.params);
        assert!(a.fitness == b.fitness);
    }
}
