//! offline evaluation: scripted opponent archetypes, the game runner,
//! the weighted tournament, and the two hyperparameter searches that
//! grade configurations by tournament fitness.

pub mod agent;
pub mod agents;
pub mod annealing;
pub mod fitness;
pub mod search;
pub mod tally;
pub mod tournament;

pub use agent::*;
pub use agents::*;
pub use annealing::*;
pub use fitness::*;
pub use search::*;
pub use tally::*;
pub use tournament::*;

use crate::game::History;
use crate::game::Round;
use crate::params::Params;
use crate::predict::Ensemble;
use rand::rngs::SmallRng;

/// one full game between an archetype and the ensemble engine. both
/// sides read the same accumulated history; the agent is reset first so
/// games are independent.
pub fn run_game(agent: &mut dyn Agent, params: &Params, rounds: usize, rng: &mut SmallRng) -> Tally {
    agent.reset(rng);
    let mut history = History::default();
    let mut tally = Tally::default();
    for _ in 0..rounds {
        let player = agent.choose(&history, rng);
        let computer = Ensemble::predict(&history, params, rng);
        let round = Round::from((player, computer));
        tally.absorb(round.result);
        history.push(round);
    }
    tally
}
