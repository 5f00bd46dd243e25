use super::signal::Signal;
use super::source::Source;
use crate::game::History;
use crate::params::Params;

const MIN_ROUNDS: usize = 6;
const WINDOW: usize = 9;

/// exact repetition of a 3-throw subsequence: the last three throws
/// repeat the three before them. predicts the cycle continuing, i.e.
/// the throw played three rounds ago comes around again.
pub fn length_3(history: &History, params: &Params) -> Option<Signal> {
    if history.len() < MIN_ROUNDS {
        return None;
    }
    let recent = history.recent(WINDOW);
    let n = recent.len();
    if n >= 6 && recent[n - 6..n - 3] == recent[n - 3..] {
        let predicted = recent[n - 3];
        Some(Signal::from((
            predicted.counter(),
            params.cycle_3_confidence,
            Source::Cycle3,
        )))
    } else {
        None
    }
}

/// strict alternation between two throws over the last four rounds.
/// predicts the alternation continuing.
pub fn length_2(history: &History, params: &Params) -> Option<Signal> {
    if history.len() < MIN_ROUNDS {
        return None;
    }
    let recent = history.recent(WINDOW);
    let n = recent.len();
    if n >= 4 && recent[n - 4] == recent[n - 2] && recent[n - 3] == recent[n - 1] {
        let predicted = recent[n - 2];
        Some(Signal::from((
            predicted.counter(),
            params.cycle_2_confidence,
            Source::Cycle2,
        )))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Round;
    use crate::game::Throw;

    fn history(throws: &[Throw]) -> History {
        History::from(throws.iter().map(|t| Round::from((*t, Throw::Rock))).collect::<Vec<_>>())
    }

    #[test]
    fn three_cycle_predicts_continuation() {
        use Throw::*;
        let h = history(&[Rock, Paper, Scissors, Rock, Paper, Scissors]);
        let signal = length_3(&h, &Params::default()).unwrap();
        // rock comes next; counter with paper
        assert!(signal.candidate == Paper);
        assert!(signal.source == Source::Cycle3);
    }

    #[test]
    fn alternation_predicts_continuation() {
        use Throw::*;
        let h = history(&[Rock, Rock, Rock, Paper, Rock, Paper]);
        let signal = length_2(&h, &Params::default()).unwrap();
        // rock comes next; counter with paper
        assert!(signal.candidate == Paper);
        assert!(signal.source == Source::Cycle2);
    }

    #[test]
    fn broken_cycle_abstains() {
        use Throw::*;
        let h = history(&[Rock, Paper, Scissors, Rock, Paper, Rock]);
        assert!(length_3(&h, &Params::default()).is_none());
    }

    #[test]
    fn abstains_below_minimum_history() {
        use Throw::*;
        let h = history(&[Rock, Paper, Rock, Paper]);
        assert!(length_2(&h, &Params::default()).is_none());
    }
}
