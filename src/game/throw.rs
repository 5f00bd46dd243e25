use rand::Rng;
use serde::Deserialize;
use serde::Serialize;

/// the three-cycle: each throw defeats exactly one other
/// and is defeated by exactly one other.
#[derive(Debug, Default, Clone, Copy, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Throw {
    #[default]
    Rock = 0,
    Paper = 1,
    Scissors = 2,
}

impl Throw {
    pub const ALL: [Throw; 3] = [Throw::Rock, Throw::Paper, Throw::Scissors];

    /// the unique throw this one defeats.
    pub fn beats(self) -> Throw {
        match self {
            Throw::Rock => Throw::Scissors,
            Throw::Paper => Throw::Rock,
            Throw::Scissors => Throw::Paper,
        }
    }

    /// the unique throw that defeats this one. also the canonical
    /// "next" in the rock -> paper -> scissors shift sequence.
    pub fn counter(self) -> Throw {
        match self {
            Throw::Rock => Throw::Paper,
            Throw::Paper => Throw::Scissors,
            Throw::Scissors => Throw::Rock,
        }
    }

    /// uniform draw from the injected randomness source.
    pub fn random(rng: &mut impl Rng) -> Throw {
        Throw::from(rng.random_range(0..3u8))
    }
}

/// u8 isomorphism
impl From<u8> for Throw {
    fn from(n: u8) -> Throw {
        match n {
            0 => Throw::Rock,
            1 => Throw::Paper,
            2 => Throw::Scissors,
            _ => panic!("Invalid throw u8: {}", n),
        }
    }
}
impl From<Throw> for u8 {
    fn from(t: Throw) -> u8 {
        t as u8
    }
}

/// str isomorphism, matching the client wire format
impl From<&str> for Throw {
    fn from(s: &str) -> Self {
        match s {
            "rock" => Throw::Rock,
            "paper" => Throw::Paper,
            "scissors" => Throw::Scissors,
            _ => panic!("Invalid throw str: {}", s),
        }
    }
}

impl std::fmt::Display for Throw {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Throw::Rock => "rock",
                Throw::Paper => "paper",
                Throw::Scissors => "scissors",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_u8() {
        for throw in Throw::ALL {
            assert!(throw == Throw::from(u8::from(throw)));
        }
    }

    #[test]
    fn beats_and_counter_are_inverse() {
        for throw in Throw::ALL {
            assert!(throw.beats().counter() == throw);
            assert!(throw.counter().beats() == throw);
        }
    }

    #[test]
    fn dominance_is_total() {
        for throw in Throw::ALL {
            let beaten = Throw::ALL.iter().filter(|t| throw.beats() == **t).count();
            let beaters = Throw::ALL.iter().filter(|t| t.beats() == throw).count();
            assert!(beaten == 1);
            assert!(beaters == 1);
            assert!(throw.beats() != throw);
            assert!(throw.counter() != throw);
        }
    }
}
