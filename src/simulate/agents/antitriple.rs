use super::super::agent::Agent;
use crate::game::History;
use crate::game::Throw;
use rand::Rng;
use rand::rngs::SmallRng;

/// superstitious about triples: never plays the same throw three times
/// running, otherwise uniform
pub struct AntiTriple;

impl Agent for AntiTriple {
    fn name(&self) -> String {
        "Anti-Triple".to_string()
    }
    fn choose(&mut self, history: &History, rng: &mut SmallRng) -> Throw {
        if history.len() < 2 {
            return Throw::random(rng);
        }
        let recent = history.recent(2);
        if recent[0] == recent[1] {
            match rng.random::<bool>() {
                true => recent[1].counter(),
                false => recent[1].beats(),
            }
        } else {
            Throw::random(rng)
        }
    }
    fn reset(&mut self, _: &mut SmallRng) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Round;
    use rand::SeedableRng;

    #[test]
    fn never_completes_a_triple() {
        let ref mut rng = SmallRng::seed_from_u64(0);
        let mut agent = AntiTriple;
        let h = History::from(vec![Round::from((Throw::Rock, Throw::Rock)); 2]);
        for _ in 0..100 {
            assert!(agent.choose(&h, rng) != Throw::Rock);
        }
    }
}
