use super::super::agent::Agent;
use crate::game::History;
use crate::game::Throw;
use rand::rngs::SmallRng;

/// plays the same throw forever
pub struct Constant(pub Throw);

impl Agent for Constant {
    fn name(&self) -> String {
        format!("Always {}", self.0)
    }
    fn choose(&mut self, _: &History, _: &mut SmallRng) -> Throw {
        self.0
    }
    fn reset(&mut self, _: &mut SmallRng) {}
}
