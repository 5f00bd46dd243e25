use super::tiered::Tiered;
use crate::Score;
use crate::game::History;
use crate::game::Throw;
use crate::params::Params;
use crate::params::TieredParams;
use crate::signals;
use crate::signals::Signal;
use rand::Rng;

/// confidence-weighted ensemble vote over every signal extractor.
/// signals are grouped by candidate throw; each candidate scores the sum
/// of its confidences plus a per-vote agreement bonus. the leader is
/// played with a probability set by a step function over its score, and
/// anything else falls through to the tiered cascade.
pub struct Ensemble;

impl Ensemble {
    const WARMUP: usize = 5;
    const OPENING_ROUNDS: usize = 2;

    pub fn predict(history: &History, params: &Params, rng: &mut impl Rng) -> Throw {
        if history.len() < Self::WARMUP {
            if history.len() < Self::OPENING_ROUNDS {
                return Tiered::OPENING;
            }
            return Tiered::predict(history, &TieredParams::default(), rng);
        }
        let signals = Self::signals(history, params, rng);
        if let Some((leader, score)) = Self::elect(&signals, params) {
            log::trace!("ensemble leader {} at {:.2}", leader, score);
            let gates = [
                (params.exploitation_very_high_threshold, params.exploitation_very_high_rate),
                (params.exploitation_high_threshold, params.exploitation_high_rate),
                (params.exploitation_moderate_threshold, params.exploitation_moderate_rate),
                (params.exploitation_low_threshold, params.exploitation_low_rate),
            ];
            // highest qualifying tier only; a declined gate is a
            // deliberate bluff, not a reason to try a lower tier
            if let Some((_, rate)) = gates.iter().find(|(threshold, _)| score >= *threshold) {
                if rng.random::<f32>() < *rate {
                    return leader;
                }
            }
        }
        Tiered::predict(history, &TieredParams::default(), rng)
    }

    /// poll every extractor. absence of a signal is the only negative
    /// answer an extractor can give; none of them can fail.
    pub fn signals(history: &History, params: &Params, rng: &mut impl Rng) -> Vec<Signal> {
        let mut votes = Vec::new();
        votes.extend(signals::markov::detect(history, params));
        votes.extend(signals::randomness::detect(history, params, rng));
        votes.extend(signals::levelk::counter_counter(history, params));
        votes.extend(signals::levelk::balance(history, params, rng));
        votes.extend(signals::frequency::detect(history, params));
        votes.extend(signals::winstay::detect(history, params));
        votes.extend(signals::loseshift::detect(history, params));
        votes.extend(signals::cycle::length_3(history, params));
        votes.extend(signals::cycle::length_2(history, params));
        votes.extend(signals::antitriple::detect(history, params));
        votes
    }

    /// aggregate votes per candidate and pick the leader. tie-break is
    /// deterministic: higher summed score, then the stronger single
    /// signal, then fixed throw order.
    fn elect(signals: &[Signal], params: &Params) -> Option<(Throw, Score)> {
        let mut leader: Option<(Throw, Score, Score)> = None;
        for throw in Throw::ALL {
            let votes = signals.iter().filter(|s| s.candidate == throw);
            let (count, total, top) = votes.fold((0usize, 0f32, 0f32), |(n, sum, top), s| {
                (n + 1, sum + s.confidence, top.max(s.confidence))
            });
            if count == 0 {
                continue;
            }
            let score = total + count as f32 * params.vote_bonus_per_predictor;
            match leader {
                Some((_, best, strongest)) if (score, top) <= (best, strongest) => {}
                _ => leader = Some((throw, score, top)),
            }
        }
        leader.map(|(throw, score, _)| (throw, score))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Round;
    use crate::signals::Source;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn empty_history_opens_with_paper() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let throw = Ensemble::predict(&History::default(), &Params::default(), rng);
        assert!(throw == Tiered::OPENING);
    }

    #[test]
    fn deterministic_per_seed() {
        use Throw::*;
        let h = History::from(
            [Rock, Paper, Rock, Scissors, Rock, Rock, Paper, Rock, Rock, Paper]
                .iter()
                .map(|t| Round::from((*t, Rock)))
                .collect::<Vec<_>>(),
        );
        let params = Params::default();
        let a = Ensemble::predict(&h, &params, &mut SmallRng::seed_from_u64(9));
        let b = Ensemble::predict(&h, &params, &mut SmallRng::seed_from_u64(9));
        assert!(a == b);
    }

    #[test]
    fn agreement_beats_a_single_loud_voice() {
        use Throw::*;
        let params = Params::default();
        let votes = vec![
            Signal::from((Paper, 0.60, Source::Markov)),
            Signal::from((Paper, 0.55, Source::WinStay)),
            Signal::from((Scissors, 0.94, Source::StrongFrequency)),
        ];
        let (leader, score) = Ensemble::elect(&votes, &params).unwrap();
        assert!(leader == Paper);
        assert!((score - (0.60 + 0.55 + 2.0 * params.vote_bonus_per_predictor)).abs() < 1e-6);
    }

    #[test]
    fn tie_breaks_toward_the_stronger_single_signal() {
        use Throw::*;
        let params = Params::default();
        let votes = vec![
            Signal::from((Rock, 0.50, Source::Markov)),
            Signal::from((Scissors, 0.30, Source::WinStay)),
            Signal::from((Scissors, 0.20, Source::AntiTriple)),
        ];
        // rock 0.50 + bonus vs scissors 0.50 + 2 bonuses: scissors leads
        let (leader, _) = Ensemble::elect(&votes, &params).unwrap();
        assert!(leader == Scissors);
        let even = vec![
            Signal::from((Rock, 0.50, Source::Markov)),
            Signal::from((Scissors, 0.50, Source::WinStay)),
        ];
        // identical scores and identical top signals: fixed order wins
        let (leader, _) = Ensemble::elect(&even, &params).unwrap();
        assert!(leader == Rock);
    }

    #[test]
    fn constant_opponent_gets_countered_almost_always() {
        let h = History::from(vec![Round::from((Throw::Rock, Throw::Rock)); 20]);
        let ref mut rng = SmallRng::seed_from_u64(0);
        let papers = (0..1000)
            .map(|_| Ensemble::predict(&h, &Params::default(), rng))
            .filter(|t| *t == Throw::Paper)
            .count();
        assert!(papers > 900);
    }
}
