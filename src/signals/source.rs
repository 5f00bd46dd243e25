/// which extractor produced a signal. useful for tracing why the
/// ensemble played what it played.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Source {
    StrongFrequency,
    ModerateFrequency,
    WeakFrequency,
    WinStay,
    LoseShift,
    AntiTriple,
    Cycle3,
    Cycle2,
    Markov,
    Predictable,
    Nash,
    LevelK,
    Balance,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Source::StrongFrequency => "strong_frequency",
                Source::ModerateFrequency => "moderate_frequency",
                Source::WeakFrequency => "weak_frequency",
                Source::WinStay => "win_stay",
                Source::LoseShift => "lose_shift",
                Source::AntiTriple => "anti_triple",
                Source::Cycle3 => "cycle_3",
                Source::Cycle2 => "cycle_2",
                Source::Markov => "markov",
                Source::Predictable => "exploit_predictable",
                Source::Nash => "nash_equilibrium",
                Source::LevelK => "level_3_reasoning",
                Source::Balance => "counter_sophistication",
            }
        )
    }
}
