use super::signal::Signal;
use super::source::Source;
use crate::Probability;
use crate::game::History;
use crate::game::Throw;
use crate::params::Params;
use rand::Rng;

const MIN_ROUNDS: usize = 15;
const SCORE_WINDOW: usize = 20;
const EXPLOIT_WINDOW: usize = 15;

/// profile how random the opponent looks over the trailing window.
/// scores in [0, 1]: 0 is a single repeated throw, 1 is a uniform
/// three-way split. predictable opponents get countered hard; random
/// opponents get randomness back, since there is nothing to out-think.
pub fn detect(history: &History, params: &Params, rng: &mut impl Rng) -> Option<Signal> {
    if history.len() < MIN_ROUNDS {
        return None;
    }
    let score = score(&history.counts(SCORE_WINDOW));
    if score < params.predictable_threshold {
        let (modal, _, _) = history.modal(EXPLOIT_WINDOW)?;
        Some(Signal::from((
            modal.counter(),
            params.predictable_confidence,
            Source::Predictable,
        )))
    } else if score > params.random_threshold {
        Some(Signal::from((
            Throw::random(rng),
            params.random_confidence,
            Source::Nash,
        )))
    } else {
        None
    }
}

/// dispersion of the throw distribution, by how many throws appear:
/// one -> 0, two -> ratio of minority to majority, three -> inverse
/// normalized variance around the uniform expectation.
pub fn score(counts: &[usize; 3]) -> Probability {
    let total = counts.iter().sum::<usize>();
    let mut seen = counts.iter().filter(|c| **c > 0).map(|c| *c).collect::<Vec<_>>();
    seen.sort_unstable_by(|a, b| b.cmp(a));
    match seen.len() {
        0 => 0.5,
        1 => 0.0,
        2 => seen[1] as f32 / seen[0] as f32,
        _ => {
            let expected = total as f32 / 3.0;
            let variance = counts
                .iter()
                .map(|c| (*c as f32 - expected).powi(2))
                .sum::<f32>()
                / 3.0;
            let ceiling = (total as f32).powi(2) / 3.0;
            if ceiling > 0.0 { 1.0 - variance / ceiling } else { 0.5 }
        }
    }
}
