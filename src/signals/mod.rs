//! signal extractors: independent analyses over a bounded window of
//! history. each is a pure function of (history, params), plus an
//! injected rng where the emitted candidate is itself random, returning
//! at most one Signal. below its minimum history length an extractor
//! abstains rather than guess.

pub mod antitriple;
pub mod cycle;
pub mod frequency;
pub mod levelk;
pub mod loseshift;
pub mod markov;
pub mod randomness;
pub mod signal;
pub mod source;
pub mod winstay;

pub use signal::*;
pub use source::*;
