use super::agent::Agent;
use super::agents::*;
use super::run_game;
use crate::Probability;
use crate::game::Throw;
use crate::params::Params;
use rand::rngs::SmallRng;

/// grouping of archetypes for the per-category breakdown the fitness
/// function reads
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Category {
    Fixed,
    Cycles,
    Psychological,
    Frequency,
    Patterns,
    Complex,
    Random,
}

/// per-category and weighted win rates from one full tournament
#[derive(Debug, Clone)]
pub struct Performance(Vec<(Category, u32, Probability)>);

impl Performance {
    /// win rate averaged over all opponents, weighted by importance
    pub fn weighted(&self) -> Probability {
        let total = self.0.iter().map(|(_, w, _)| w).sum::<u32>();
        let score = self
            .0
            .iter()
            .map(|(_, w, rate)| *w as Probability * rate)
            .sum::<Probability>();
        score / total as Probability
    }
    /// unweighted mean win rate within one category
    pub fn category(&self, category: Category) -> Probability {
        let rates = self
            .0
            .iter()
            .filter(|(c, _, _)| *c == category)
            .map(|(_, _, rate)| *rate)
            .collect::<Vec<_>>();
        match rates.len() {
            0 => 0.,
            n => rates.iter().sum::<Probability>() / n as Probability,
        }
    }
}

/// the fixed suite of weighted opponents the engine is graded against.
/// weights reflect how often each style shows up in human play.
pub struct Tournament {
    rounds: usize,
}

impl Tournament {
    pub fn new(rounds: usize) -> Self {
        Self { rounds }
    }

    #[rustfmt::skip]
    pub fn suite() -> Vec<(Box<dyn Agent>, u32, Category)> {
        use Throw::*;
        vec![
            (Box::new(Constant(Rock)),                             3, Category::Fixed),
            (Box::new(Constant(Paper)),                            3, Category::Fixed),
            (Box::new(Constant(Scissors)),                         3, Category::Fixed),
            (Box::new(Rotation::forward()),                        2, Category::Cycles),
            (Box::new(Rotation::reverse()),                        2, Category::Cycles),
            (Box::new(WinStayLoseShift::new(Shift::Sequential)),   5, Category::Psychological),
            (Box::new(WinStayLoseShift::new(Shift::Counter)),      4, Category::Psychological),
            (Box::new(WinStayLoseShift::new(Shift::Random)),       3, Category::Psychological),
            (Box::new(Bias::new(Rock, 0.60)),                      4, Category::Frequency),
            (Box::new(Bias::new(Paper, 0.65)),                     4, Category::Frequency),
            (Box::new(Bias::new(Scissors, 0.70)),                  4, Category::Frequency),
            (Box::new(AntiTriple),                                 3, Category::Patterns),
            (Box::new(Alternating::new(Rock, Paper)),              2, Category::Patterns),
            (Box::new(Alternating::new(Paper, Scissors)),          2, Category::Patterns),
            (Box::new(Chain::new()),                               3, Category::Patterns),
            (Box::new(CounterAi),                                  4, Category::Complex),
            (Box::new(Mixed::new()),                               5, Category::Complex),
            (Box::new(Random),                                     2, Category::Random),
        ]
    }

    /// one game against every opponent in the suite
    pub fn run(&self, params: &Params, rng: &mut SmallRng) -> Performance {
        Performance(
            Self::suite()
                .into_iter()
                .map(|(mut agent, weight, category)| {
                    let tally = run_game(agent.as_mut(), params, self.rounds, rng);
                    log::debug!("{:<32}{:<32}", agent.name(), tally);
                    (category, weight, tally.win_rate())
                })
                .collect(),
        )
    }
}
