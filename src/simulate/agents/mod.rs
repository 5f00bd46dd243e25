//! the opponent archetype families. each models one recognizable human
//! playing style, from pure habit to level-2 counter-reasoning.

pub mod alternating;
pub mod antitriple;
pub mod bias;
pub mod chain;
pub mod constant;
pub mod counter;
pub mod mixed;
pub mod random;
pub mod rotation;
pub mod winstay;

pub use alternating::*;
pub use antitriple::*;
pub use bias::*;
pub use chain::*;
pub use constant::*;
pub use counter::*;
pub use mixed::*;
pub use random::*;
pub use rotation::*;
pub use winstay::*;
