use crate::Probability;
use serde::Deserialize;
use serde::Serialize;

/// the lighter record driving the tiered cascade. each tier carries its
/// own Bernoulli exploitation rate; thresholds gate whether the tier is
/// eligible at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TieredParams {
    pub strong_frequency_threshold: Probability,
    pub strong_frequency_rate: Probability,
    pub moderate_frequency_threshold: Probability,
    pub moderate_frequency_rate: Probability,
    pub win_stay_threshold: Probability,
    pub win_stay_confidence: Probability,
    pub lose_shift_threshold: Probability,
    pub lose_shift_confidence: Probability,
    pub anti_triple_confidence: Probability,
    pub cycle_confidence: Probability,
    pub general_frequency_confidence: Probability,
}

impl Default for TieredParams {
    fn default() -> Self {
        Self {
            strong_frequency_threshold: 0.55,
            strong_frequency_rate: 0.87,
            moderate_frequency_threshold: 0.45,
            moderate_frequency_rate: 0.76,
            win_stay_threshold: 0.4,
            win_stay_confidence: 0.73,
            lose_shift_threshold: 0.5,
            lose_shift_confidence: 0.66,
            anti_triple_confidence: 0.69,
            cycle_confidence: 0.62,
            general_frequency_confidence: 0.58,
        }
    }
}
