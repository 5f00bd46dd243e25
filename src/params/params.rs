use crate::Confidence;
use crate::Probability;
use crate::Score;
use rand::Rng;
use serde::Deserialize;
use serde::Serialize;

/// every threshold, confidence, and scaling factor consumed by the
/// ensemble, as one flat strongly-typed record. a missing parameter is a
/// compile error here rather than a runtime lookup failure.
///
/// serializes to a flat name -> float map; round-trips bit-identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Params {
    // frequency bias detection
    pub strong_frequency_threshold: Probability,
    pub moderate_frequency_threshold: Probability,
    pub weak_frequency_threshold: Probability,
    pub strong_frequency_confidence: Confidence,
    pub moderate_frequency_confidence: Confidence,
    pub weak_frequency_confidence: Confidence,
    // win-stay pattern detection
    pub win_stay_threshold: Probability,
    pub win_stay_base_confidence: Confidence,
    pub win_stay_confidence_scaling: Confidence,
    // lose-shift pattern detection
    pub lose_shift_threshold: Probability,
    pub lose_shift_base_confidence: Confidence,
    pub lose_shift_confidence_scaling: Confidence,
    // anti-triple pattern
    pub anti_triple_confidence: Confidence,
    // cycle detection
    pub cycle_3_confidence: Confidence,
    pub cycle_2_confidence: Confidence,
    // markov transition prediction
    pub markov_strong_threshold: Probability,
    pub markov_strong_base_confidence: Confidence,
    pub markov_strong_scaling: Confidence,
    pub markov_moderate_threshold: Probability,
    pub markov_moderate_base_confidence: Confidence,
    pub markov_moderate_scaling: Confidence,
    // opponent randomness profiling
    pub predictable_threshold: Probability,
    pub predictable_confidence: Confidence,
    pub random_threshold: Probability,
    pub random_confidence: Confidence,
    // level-k reasoning
    pub level_k_threshold: Probability,
    pub level_k_confidence: Confidence,
    pub sophistication_confidence: Confidence,
    // ensemble voting
    pub vote_bonus_per_predictor: Score,
    pub exploitation_very_high_threshold: Score,
    pub exploitation_very_high_rate: Probability,
    pub exploitation_high_threshold: Score,
    pub exploitation_high_rate: Probability,
    pub exploitation_moderate_threshold: Score,
    pub exploitation_moderate_rate: Probability,
    pub exploitation_low_threshold: Score,
    pub exploitation_low_rate: Probability,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            strong_frequency_threshold: 0.60,
            moderate_frequency_threshold: 0.50,
            weak_frequency_threshold: 0.42,
            strong_frequency_confidence: 0.94,
            moderate_frequency_confidence: 0.84,
            weak_frequency_confidence: 0.72,
            win_stay_threshold: 0.5,
            win_stay_base_confidence: 0.70,
            win_stay_confidence_scaling: 0.30,
            lose_shift_threshold: 0.55,
            lose_shift_base_confidence: 0.68,
            lose_shift_confidence_scaling: 0.25,
            anti_triple_confidence: 0.74,
            cycle_3_confidence: 0.87,
            cycle_2_confidence: 0.80,
            markov_strong_threshold: 0.5,
            markov_strong_base_confidence: 0.85,
            markov_strong_scaling: 0.2,
            markov_moderate_threshold: 0.4,
            markov_moderate_base_confidence: 0.70,
            markov_moderate_scaling: 0.15,
            predictable_threshold: 0.3,
            predictable_confidence: 0.92,
            random_threshold: 0.7,
            random_confidence: 0.40,
            level_k_threshold: 0.4,
            level_k_confidence: 0.78,
            sophistication_confidence: 0.45,
            vote_bonus_per_predictor: 0.15,
            exploitation_very_high_threshold: 1.5,
            exploitation_very_high_rate: 0.96,
            exploitation_high_threshold: 1.0,
            exploitation_high_rate: 0.88,
            exploitation_moderate_threshold: 0.7,
            exploitation_moderate_rate: 0.75,
            exploitation_low_threshold: 0.5,
            exploitation_low_rate: 0.60,
        }
    }
}

impl Params {
    /// legal (min, max) range per field, in declaration order. consumed
    /// only by the optimizers when generating candidates; manual values
    /// outside these ranges are accepted by the serving path unchecked.
    pub const BOUNDS: [(f32, f32); 37] = [
        (0.50, 0.75), // strong_frequency_threshold
        (0.40, 0.60), // moderate_frequency_threshold
        (0.35, 0.50), // weak_frequency_threshold
        (0.88, 0.98), // strong_frequency_confidence
        (0.75, 0.90), // moderate_frequency_confidence
        (0.65, 0.80), // weak_frequency_confidence
        (0.35, 0.65), // win_stay_threshold
        (0.60, 0.80), // win_stay_base_confidence
        (0.20, 0.40), // win_stay_confidence_scaling
        (0.45, 0.70), // lose_shift_threshold
        (0.60, 0.78), // lose_shift_base_confidence
        (0.20, 0.35), // lose_shift_confidence_scaling
        (0.65, 0.82), // anti_triple_confidence
        (0.82, 0.92), // cycle_3_confidence
        (0.72, 0.87), // cycle_2_confidence
        (0.45, 0.60), // markov_strong_threshold
        (0.80, 0.92), // markov_strong_base_confidence
        (0.15, 0.30), // markov_strong_scaling
        (0.35, 0.50), // markov_moderate_threshold
        (0.65, 0.78), // markov_moderate_base_confidence
        (0.10, 0.20), // markov_moderate_scaling
        (0.20, 0.40), // predictable_threshold
        (0.88, 0.96), // predictable_confidence
        (0.65, 0.80), // random_threshold
        (0.33, 0.50), // random_confidence
        (0.35, 0.50), // level_k_threshold
        (0.70, 0.85), // level_k_confidence
        (0.35, 0.55), // sophistication_confidence
        (0.10, 0.25), // vote_bonus_per_predictor
        (1.30, 1.80), // exploitation_very_high_threshold
        (0.93, 0.98), // exploitation_very_high_rate
        (0.80, 1.20), // exploitation_high_threshold
        (0.83, 0.93), // exploitation_high_rate
        (0.50, 0.90), // exploitation_moderate_threshold
        (0.68, 0.82), // exploitation_moderate_rate
        (0.30, 0.60), // exploitation_low_threshold
        (0.50, 0.70), // exploitation_low_rate
    ];

    /// flatten into a vector aligned with BOUNDS
    #[rustfmt::skip]
    pub fn to_vec(&self) -> Vec<f32> {
        vec![
            self.strong_frequency_threshold,
            self.moderate_frequency_threshold,
            self.weak_frequency_threshold,
            self.strong_frequency_confidence,
            self.moderate_frequency_confidence,
            self.weak_frequency_confidence,
            self.win_stay_threshold,
            self.win_stay_base_confidence,
            self.win_stay_confidence_scaling,
            self.lose_shift_threshold,
            self.lose_shift_base_confidence,
            self.lose_shift_confidence_scaling,
            self.anti_triple_confidence,
            self.cycle_3_confidence,
            self.cycle_2_confidence,
            self.markov_strong_threshold,
            self.markov_strong_base_confidence,
            self.markov_strong_scaling,
            self.markov_moderate_threshold,
            self.markov_moderate_base_confidence,
            self.markov_moderate_scaling,
            self.predictable_threshold,
            self.predictable_confidence,
            self.random_threshold,
            self.random_confidence,
            self.level_k_threshold,
            self.level_k_confidence,
            self.sophistication_confidence,
            self.vote_bonus_per_predictor,
            self.exploitation_very_high_threshold,
            self.exploitation_very_high_rate,
            self.exploitation_high_threshold,
            self.exploitation_high_rate,
            self.exploitation_moderate_threshold,
            self.exploitation_moderate_rate,
            self.exploitation_low_threshold,
            self.exploitation_low_rate,
        ]
    }

    /// inverse of to_vec. a wrong-length vector is an invariant
    /// violation during optimization and fails loudly.
    pub fn from_vec(values: &[f32]) -> Self {
        assert!(
            values.len() == Self::BOUNDS.len(),
            "parameter vector length {} != {}",
            values.len(),
            Self::BOUNDS.len()
        );
        Self {
            strong_frequency_threshold: values[0],
            moderate_frequency_threshold: values[1],
            weak_frequency_threshold: values[2],
            strong_frequency_confidence: values[3],
            moderate_frequency_confidence: values[4],
            weak_frequency_confidence: values[5],
            win_stay_threshold: values[6],
            win_stay_base_confidence: values[7],
            win_stay_confidence_scaling: values[8],
            lose_shift_threshold: values[9],
            lose_shift_base_confidence: values[10],
            lose_shift_confidence_scaling: values[11],
            anti_triple_confidence: values[12],
            cycle_3_confidence: values[13],
            cycle_2_confidence: values[14],
            markov_strong_threshold: values[15],
            markov_strong_base_confidence: values[16],
            markov_strong_scaling: values[17],
            markov_moderate_threshold: values[18],
            markov_moderate_base_confidence: values[19],
            markov_moderate_scaling: values[20],
            predictable_threshold: values[21],
            predictable_confidence: values[22],
            random_threshold: values[23],
            random_confidence: values[24],
            level_k_threshold: values[25],
            level_k_confidence: values[26],
            sophistication_confidence: values[27],
            vote_bonus_per_predictor: values[28],
            exploitation_very_high_threshold: values[29],
            exploitation_very_high_rate: values[30],
            exploitation_high_threshold: values[31],
            exploitation_high_rate: values[32],
            exploitation_moderate_threshold: values[33],
            exploitation_moderate_rate: values[34],
            exploitation_low_threshold: values[35],
            exploitation_low_rate: values[36],
        }
    }

    /// uniform sample within bounds, field by field
    pub fn random(rng: &mut impl Rng) -> Self {
        Self::from_vec(
            &Self::BOUNDS
                .iter()
                .map(|(lo, hi)| rng.random_range(*lo..*hi))
                .collect::<Vec<_>>(),
        )
    }

    /// perturb every field by a uniform delta of up to 10% of its range,
    /// scaled by the annealing temperature ratio, clipped back to bounds
    pub fn perturb(&self, scale: f32, rng: &mut impl Rng) -> Self {
        Self::from_vec(
            &self
                .to_vec()
                .iter()
                .zip(Self::BOUNDS.iter())
                .map(|(value, (lo, hi))| {
                    let delta = (hi - lo) * 0.1 * scale;
                    (value + rng.random_range(-delta..=delta)).clamp(*lo, *hi)
                })
                .collect::<Vec<_>>(),
        )
    }

    pub fn save(&self, path: &str) -> anyhow::Result<()> {
        log::info!("{:<32}{:<32}", "saving      params", path);
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn load(path: &str) -> anyhow::Result<Self> {
        log::info!("{:<32}{:<32}", "loading     params", path);
        Ok(serde_json::from_str(&std::fs::read_to_string(path)?)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn json_roundtrip_is_bit_identical() {
        let params = Params::default();
        let json = serde_json::to_string(&params).unwrap();
        let back = serde_json::from_str::<Params>(&json).unwrap();
        for (a, b) in params.to_vec().iter().zip(back.to_vec().iter()) {
            assert!(a.to_bits() == b.to_bits());
        }
    }

    #[test]
    fn vec_roundtrip() {
        let params = Params::default();
        assert!(params == Params::from_vec(&params.to_vec()));
    }

    #[test]
    fn defaults_within_bounds() {
        for (value, (lo, hi)) in Params::default().to_vec().iter().zip(Params::BOUNDS.iter()) {
            assert!(value >= lo && value <= hi);
        }
    }

    #[test]
    fn random_within_bounds() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        for (value, (lo, hi)) in Params::random(rng).to_vec().iter().zip(Params::BOUNDS.iter()) {
            assert!(value >= lo && value <= hi);
        }
    }

    #[test]
    fn perturbation_stays_within_bounds() {
        let ref mut rng = SmallRng::seed_from_u64(1);
        let mut params = Params::default();
        for _ in 0..32 {
            params = params.perturb(1.0, rng);
        }
        for (value, (lo, hi)) in params.to_vec().iter().zip(Params::BOUNDS.iter()) {
            assert!(value >= lo && value <= hi);
        }
    }
}
