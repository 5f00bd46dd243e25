use super::signal::Signal;
use super::source::Source;
use crate::game::History;
use crate::params::Params;

const MIN_ROUNDS: usize = 2;

/// two identical throws in a row: assume the opponent will not commit to
/// a third, and will instead switch to the throw that beats their own
/// repeated throw. counter that second-order inference.
pub fn detect(history: &History, params: &Params) -> Option<Signal> {
    if history.len() < MIN_ROUNDS {
        return None;
    }
    let recent = history.recent(2);
    if recent[0] == recent[1] {
        let predicted = recent[1].counter();
        Some(Signal::from((
            predicted.counter(),
            params.anti_triple_confidence,
            Source::AntiTriple,
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

    #[test]
    fn doubled_throw_predicts_the_switch() {
        use Throw::*;
        let h = History::from(vec![Round::from((Rock, Rock)); 2]);
        let signal = detect(&h, &Params::default()).unwrap();
        // they doubled rock; expect a switch to paper; counter with scissors
        assert!(signal.candidate == Scissors);
        assert!(signal.source == Source::AntiTriple);
    }

    #[test]
    fn abstains_without_a_double() {
        use Throw::*;
        let h = History::from(vec![
            Round::from((Rock, Rock)),
            Round::from((Paper, Rock)),
        ]);
        assert!(detect(&h, &Params::default()).is_none());
    }

    #[test]
    fn abstains_below_minimum_history() {
        let h = History::from(vec![Round::from((Throw::Rock, Throw::Rock))]);
        assert!(detect(&h, &Params::default()).is_none());
    }
}
