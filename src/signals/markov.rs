use super::signal::Signal;
use super::source::Source;
use crate::game::History;
use crate::game::Throw;
use crate::params::Params;

const MIN_ROUNDS: usize = 10;

/// first-order transition table over the full history: what does the
/// opponent play after the throw they just played? fires when the modal
/// successor clears a probability threshold, with confidence scaled by
/// how far it clears.
pub fn detect(history: &History, params: &Params) -> Option<Signal> {
    if history.len() < MIN_ROUNDS {
        return None;
    }
    let last = history.last()?.player;
    let mut successors = [0usize; 3];
    let mut total = 0usize;
    for pair in history.rounds().windows(2) {
        if pair[0].player == last {
            successors[u8::from(pair[1].player) as usize] += 1;
            total += 1;
        }
    }
    if total == 0 {
        return None;
    }
    let predicted = Throw::ALL
        .into_iter()
        .rev() // max_by_key keeps the last max, so reverse to prefer Rock
        .max_by_key(|t| successors[u8::from(*t) as usize])?;
    let probability = successors[u8::from(predicted) as usize] as f32 / total as f32;
    let tier = if probability >= params.markov_strong_threshold {
        Some(
            params.markov_strong_base_confidence
                + (probability - params.markov_strong_threshold) * params.markov_strong_scaling,
        )
    } else if probability >= params.markov_moderate_threshold {
        Some(
            params.markov_moderate_base_confidence
                + (probability - params.markov_moderate_threshold) * params.markov_moderate_scaling,
        )
    } else {
        None
    };
    tier.map(|confidence| Signal::from((predicted.counter(), confidence, Source::Markov)))
}
