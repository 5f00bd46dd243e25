use super::basic::Basic;
use crate::game::History;
use crate::game::Outcome;
use crate::game::Throw;
use crate::params::TieredParams;
use rand::Rng;

/// strict priority cascade over the pattern detectors: the first
/// eligible tier whose exploitation gate passes decides the throw, in
/// contrast to the ensemble's weighted vote. doubles as the ensemble's
/// fallback when no weighted signal survives its gates.
pub struct Tiered;

impl Tiered {
    /// the opener: counter the statistically most common human opening
    pub const OPENING: Throw = Throw::Paper;

    const WARMUP: usize = 5;
    const OPENING_ROUNDS: usize = 2;
    const FREQUENCY_ROUNDS: usize = 8;
    const FREQUENCY_WINDOW: usize = 12;
    const PSYCH_ROUNDS: usize = 4;
    const PSYCH_WINDOW: usize = 8;
    const CYCLE_ROUNDS: usize = 4;
    const GENERAL_ROUNDS: usize = 5;
    const GENERAL_WINDOW: usize = 10;

    pub fn predict(history: &History, params: &TieredParams, rng: &mut impl Rng) -> Throw {
        if history.len() < Self::WARMUP {
            if history.len() < Self::OPENING_ROUNDS {
                return Self::OPENING;
            }
            return Basic::predict(history, rng);
        }
        None.or_else(|| Self::frequency(history, params, rng))
            .or_else(|| Self::win_stay(history, params, rng))
            .or_else(|| Self::anti_triple(history, params, rng))
            .or_else(|| Self::lose_shift(history, params, rng))
            .or_else(|| Self::cycle(history, params, rng))
            .or_else(|| Self::general(history, params, rng))
            .unwrap_or_else(|| Throw::random(rng))
    }

    /// tier 1: strong or moderate frequency bias. a strong bias that
    /// fails its gate falls through to tier 2, not to the moderate gate.
    fn frequency(history: &History, params: &TieredParams, rng: &mut impl Rng) -> Option<Throw> {
        if history.len() < Self::FREQUENCY_ROUNDS {
            return None;
        }
        let (modal, count, window) = history.modal(Self::FREQUENCY_WINDOW)?;
        let frequency = count as f32 / window as f32;
        if frequency >= params.strong_frequency_threshold {
            (rng.random::<f32>() < params.strong_frequency_rate).then(|| modal.counter())
        } else if frequency >= params.moderate_frequency_threshold {
            (rng.random::<f32>() < params.moderate_frequency_rate).then(|| modal.counter())
        } else {
            None
        }
    }

    /// tier 2: opponent just won and has a habit of repeating winners
    fn win_stay(history: &History, params: &TieredParams, rng: &mut impl Rng) -> Option<Throw> {
        let last = history.last().filter(|r| r.result == Outcome::Player)?;
        if history.len() < Self::PSYCH_ROUNDS {
            return None;
        }
        let rate = Self::follow_rate(history, Outcome::Player, |prev, next| prev == next)?;
        if rate >= params.win_stay_threshold {
            (rng.random::<f32>() < params.win_stay_confidence).then(|| last.player.counter())
        } else {
            None
        }
    }

    /// tier 3: two in a row; expect a switch to what beats their double
    fn anti_triple(history: &History, params: &TieredParams, rng: &mut impl Rng) -> Option<Throw> {
        if history.len() < 2 {
            return None;
        }
        let recent = history.recent(2);
        if recent[0] == recent[1] {
            let predicted = recent[1].counter();
            (rng.random::<f32>() < params.anti_triple_confidence).then(|| predicted.counter())
        } else {
            None
        }
    }

    /// tier 4: opponent just lost and habitually shifts down the cycle
    fn lose_shift(history: &History, params: &TieredParams, rng: &mut impl Rng) -> Option<Throw> {
        let last = history.last().filter(|r| r.result == Outcome::Computer)?;
        if history.len() < Self::PSYCH_ROUNDS {
            return None;
        }
        let rate = Self::follow_rate(history, Outcome::Computer, |prev, next| prev != next)?;
        if rate >= params.lose_shift_threshold {
            let predicted = last.player.counter();
            (rng.random::<f32>() < params.lose_shift_confidence).then(|| predicted.counter())
        } else {
            None
        }
    }

    /// tier 5: three distinct throws in a row read as a rotation; expect
    /// the one from three rounds back to come around again
    fn cycle(history: &History, params: &TieredParams, rng: &mut impl Rng) -> Option<Throw> {
        if history.len() < Self::CYCLE_ROUNDS {
            return None;
        }
        let recent = history.recent(3);
        if recent[0] != recent[1] && recent[1] != recent[2] && recent[0] != recent[2] {
            (rng.random::<f32>() < params.cycle_confidence).then(|| recent[0].counter())
        } else {
            None
        }
    }

    /// tier 6: plain modal counter at a low gate
    fn general(history: &History, params: &TieredParams, rng: &mut impl Rng) -> Option<Throw> {
        if history.len() < Self::GENERAL_ROUNDS {
            return None;
        }
        let (modal, _, _) = history.modal(Self::GENERAL_WINDOW)?;
        (rng.random::<f32>() < params.general_frequency_confidence).then(|| modal.counter())
    }

    /// rate of `follow(player[i], player[i+1])` among windowed rounds
    /// the opponent finished with the given outcome
    fn follow_rate(
        history: &History,
        outcome: Outcome,
        follow: impl Fn(Throw, Throw) -> bool,
    ) -> Option<f32> {
        let rounds = history.rounds();
        if rounds.len() < 2 {
            return None;
        }
        let start = rounds.len().saturating_sub(Self::PSYCH_WINDOW);
        let mut opportunities = 0;
        let mut followed = 0;
        for i in start..rounds.len() - 1 {
            if rounds[i].result == outcome {
                opportunities += 1;
                if follow(rounds[i].player, rounds[i + 1].player) {
                    followed += 1;
                }
            }
        }
        (opportunities > 0).then(|| followed as f32 / opportunities as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Round;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn empty_history_opens_with_paper() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let throw = Tiered::predict(&History::default(), &TieredParams::default(), rng);
        assert!(throw == Tiered::OPENING);
    }

    #[test]
    fn deterministic_per_seed() {
        use Throw::*;
        let h = History::from(
            [Rock, Paper, Rock, Scissors, Rock, Rock, Paper, Rock]
                .iter()
                .map(|t| Round::from((*t, Rock)))
                .collect::<Vec<_>>(),
        );
        let params = TieredParams::default();
        let a = Tiered::predict(&h, &params, &mut SmallRng::seed_from_u64(7));
        let b = Tiered::predict(&h, &params, &mut SmallRng::seed_from_u64(7));
        assert!(a == b);
    }

    #[test]
    fn strong_bias_mostly_countered() {
        let h = History::from(vec![Round::from((Throw::Rock, Throw::Rock)); 12]);
        let ref mut rng = SmallRng::seed_from_u64(0);
        let papers = (0..1000)
            .map(|_| Tiered::predict(&h, &TieredParams::default(), rng))
            .filter(|t| *t == Throw::Paper)
            .count();
        // 87% tier-1 gate, remainder leaks into the lower tiers
        assert!(papers > 800);
    }
}
