use super::signal::Signal;
use super::source::Source;
use super::winstay::repeat_rate;
use crate::game::History;
use crate::game::Outcome;
use crate::params::Params;

const MIN_ROUNDS: usize = 6;

/// "lost, then moved on." the shift is modeled as the canonical next
/// throw in the three-cycle, so the prediction is that canonical shift
/// and the signal counters it. only fires when the opponent just lost.
pub fn detect(history: &History, params: &Params) -> Option<Signal> {
    let last = history.last().filter(|r| r.result == Outcome::Computer)?;
    if history.len() < MIN_ROUNDS {
        return None;
    }
    let rate = repeat_rate(history, Outcome::Computer, |prev, next| prev != next)?;
    if rate >= params.lose_shift_threshold {
        let predicted = last.player.counter();
        let confidence = params.lose_shift_base_confidence
            + (rate - params.lose_shift_threshold) * params.lose_shift_confidence_scaling;
        Some(Signal::from((predicted.counter(), confidence, Source::LoseShift)))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Round;
    use crate::game::Throw;

    // opponent loses every round and shifts every time
    fn sore_loser(n: usize) -> History {
        use Throw::*;
        History::from(
            (0..n)
                .map(|i| if i % 2 == 0 { Rock } else { Paper })
                .map(|t| Round::from((t, t.counter())))
                .collect::<Vec<_>>(),
        )
    }

    #[test]
    fn abstains_below_minimum_history() {
        assert!(detect(&sore_loser(5), &Params::default()).is_none());
    }

    #[test]
    fn perfect_shift_rate_counters_the_canonical_next() {
        let params = Params::default();
        let signal = detect(&sore_loser(8), &params).unwrap();
        // last throw was paper; canonical shift is scissors; counter rock
        assert!(signal.candidate == Throw::Rock);
        let expect = params.lose_shift_base_confidence
            + (1.0 - params.lose_shift_threshold) * params.lose_shift_confidence_scaling;
        assert!((signal.confidence - expect).abs() < 1e-6);
    }

    #[test]
    fn abstains_unless_opponent_just_lost() {
        let mut h = sore_loser(8);
        h.push(Round::from((Throw::Rock, Throw::Scissors)));
        assert!(detect(&h, &Params::default()).is_none());
    }
}
