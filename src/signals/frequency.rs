use super::signal::Signal;
use super::source::Source;
use crate::game::History;
use crate::params::Params;

const MIN_ROUNDS: usize = 8;
const WINDOW: usize = 15;

/// modal throw over the trailing window, graded against three
/// thresholds. the highest qualifying tier wins; below the weak
/// threshold the extractor abstains.
pub fn detect(history: &History, params: &Params) -> Option<Signal> {
    if history.len() < MIN_ROUNDS {
        return None;
    }
    let (modal, count, window) = history.modal(WINDOW)?;
    let frequency = count as f32 / window as f32;
    let tier = if frequency >= params.strong_frequency_threshold {
        Some((params.strong_frequency_confidence, Source::StrongFrequency))
    } else if frequency >= params.moderate_frequency_threshold {
        Some((params.moderate_frequency_confidence, Source::ModerateFrequency))
    } else if frequency >= params.weak_frequency_threshold {
        Some((params.weak_frequency_confidence, Source::WeakFrequency))
    } else {
        None
    };
    tier.map(|(confidence, source)| Signal::from((modal.counter(), confidence, source)))
}
