use super::signal::Signal;
use super::source::Source;
use crate::game::History;
use crate::game::Outcome;
use crate::params::Params;

const MIN_ROUNDS: usize = 6;
const WINDOW: usize = 12;

/// "won, then repeated the same throw." only fires when the opponent
/// just won, since that is the only moment the pattern predicts
/// anything. confidence scales linearly above the threshold.
pub fn detect(history: &History, params: &Params) -> Option<Signal> {
    let last = history.last().filter(|r| r.result == Outcome::Player)?;
    if history.len() < MIN_ROUNDS {
        return None;
    }
    let rate = repeat_rate(history, Outcome::Player, |prev, next| prev == next)?;
    if rate >= params.win_stay_threshold {
        let confidence = params.win_stay_base_confidence
            + (rate - params.win_stay_threshold) * params.win_stay_confidence_scaling;
        Some(Signal::from((last.player.counter(), confidence, Source::WinStay)))
    } else {
        None
    }
}

/// rate of `follow(player[i], player[i+1])` among windowed rounds the
/// opponent finished with the given outcome. None when no opportunities.
pub(super) fn repeat_rate(
    history: &History,
    outcome: Outcome,
    follow: impl Fn(crate::game::Throw, crate::game::Throw) -> bool,
) -> Option<f32> {
    let rounds = history.rounds();
    if rounds.len() < 2 {
        return None;
    }
    let start = rounds.len().saturating_sub(WINDOW);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Round;
    use crate::game::Throw;

    // opponent rock wins every round and stays on it
    fn stubborn_winner(n: usize) -> History {
        History::from(vec![Round::from((Throw::Rock, Throw::Scissors)); n])
    }

    #[test]
    fn abstains_below_minimum_history() {
        assert!(detect(&stubborn_winner(5), &Params::default()).is_none());
    }

    #[test]
    fn abstains_unless_opponent_just_won() {
        let mut h = stubborn_winner(8);
        h.push(Round::from((Throw::Rock, Throw::Paper)));
        assert!(detect(&h, &Params::default()).is_none());
    }

    #[test]
    fn perfect_stay_rate_maxes_confidence() {
        let params = Params::default();
        let signal = detect(&stubborn_winner(8), &params).unwrap();
        assert!(signal.candidate == Throw::Paper);
        let expect = params.win_stay_base_confidence
            + (1.0 - params.win_stay_threshold) * params.win_stay_confidence_scaling;
        assert!((signal.confidence - expect).abs() < 1e-6);
    }
}
