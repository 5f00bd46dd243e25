use super::source::Source;
use crate::Confidence;
use crate::game::Throw;

/// one extractor's vote: the throw the engine should play (i.e. the
/// counter of whatever the extractor predicts the opponent will throw),
/// how sure it is, and which extractor said so. transient: produced and
/// consumed within a single prediction, never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Signal {
    pub candidate: Throw,
    pub confidence: Confidence,
    pub source: Source,
}

impl From<(Throw, Confidence, Source)> for Signal {
    fn from((candidate, confidence, source): (Throw, Confidence, Source)) -> Self {
        Self {
            candidate,
            confidence,
            source,
        }
    }
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {:.2} ({})", self.candidate, self.confidence, self.source)
    }
}
