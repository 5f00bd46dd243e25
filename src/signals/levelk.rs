use super::signal::Signal;
use super::source::Source;
use crate::game::History;
use crate::game::Throw;
use crate::params::Params;
use rand::Rng;

const MIN_ROUNDS: usize = 12;
const WINDOW: usize = 12;
const BALANCE_WINDOW: usize = 6;

/// counter-counter detection: work out what a frequency-chasing engine
/// would play against this opponent, then what beats that. an opponent
/// playing that beat at a high rate is reasoning one level above simple
/// frequency-chasing, so reason one level above them.
pub fn counter_counter(history: &History, params: &Params) -> Option<Signal> {
    if history.len() < MIN_ROUNDS {
        return None;
    }
    let recent = history.recent(WINDOW);
    let (modal, _, _) = history.modal(WINDOW)?;
    let engine_would = modal.counter();
    let their_answer = engine_would.counter();
    let rate = recent.iter().filter(|t| **t == their_answer).count() as f32 / recent.len() as f32;
    if rate >= params.level_k_threshold {
        Some(Signal::from((
            their_answer.counter(),
            params.level_k_confidence,
            Source::LevelK,
        )))
    } else {
        None
    }
}

/// deliberate balance: six throws split exactly two-two-two reads as
/// conscious anti-exploitation play. answer with low-confidence noise
/// rather than pattern-chasing.
pub fn balance(history: &History, params: &Params, rng: &mut impl Rng) -> Option<Signal> {
    if history.len() < MIN_ROUNDS {
        return None;
    }
    let counts = history.counts(BALANCE_WINDOW);
    if counts.iter().all(|c| *c > 0) && counts.iter().max() == Some(&2) {
        Some(Signal::from((
            Throw::random(rng),
            params.sophistication_confidence,
            Source::Balance,
        )))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Round;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn history(throws: &[Throw]) -> History {
        History::from(throws.iter().map(|t| Round::from((*t, Throw::Rock))).collect::<Vec<_>>())
    }

    #[test]
    fn counter_counter_escalates_one_level() {
        use Throw::*;
        // modal rock: the engine would answer paper, a level-2 opponent
        // answers scissors. scissors at 5/12 clears the threshold.
        let throws = [
            Rock, Rock, Rock, Rock, Rock, Rock, Scissors, Scissors, Scissors, Scissors, Scissors,
            Paper,
        ];
        let signal = counter_counter(&history(&throws), &Params::default()).unwrap();
        assert!(signal.candidate == Rock);
        assert!(signal.source == Source::LevelK);
    }

    #[test]
    fn counter_counter_abstains_without_the_pattern() {
        let signal = counter_counter(&history(&[Throw::Rock; 12]), &Params::default());
        assert!(signal.is_none());
    }

    #[test]
    fn perfect_balance_reads_as_sophistication() {
        use Throw::*;
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut throws = vec![Rock; 6];
        throws.extend([Rock, Scissors, Paper, Rock, Scissors, Paper]);
        let signal = balance(&history(&throws), &Params::default(), rng).unwrap();
        assert!(signal.source == Source::Balance);
    }

    #[test]
    fn lopsided_six_is_not_balance() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let signal = balance(&history(&[Throw::Rock; 12]), &Params::default(), rng);
        assert!(signal.is_none());
    }
}
