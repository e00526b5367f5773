use super::Vector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// ## Source of random directions
///
/// The machine owns one of these for the `x` instruction.

pub trait Randomness {
    fn cardinal(&mut self) -> Vector;
}

/// Uniform choice backed by `rand`.
pub struct Random {
    rng: StdRng,
}

impl Random {
    pub fn from_entropy() -> Random {
        Random {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Random {
        Random {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Randomness for Random {
    fn cardinal(&mut self) -> Vector {
        Vector::CARDINALS[self.rng.gen_range(0..Vector::CARDINALS.len())]
    }
}

/// Replays a fixed list of directions, cycling when exhausted.
pub struct Sequence {
    directions: Vec<Vector>,
    next: usize,
}

impl Sequence {
    pub fn new(directions: Vec<Vector>) -> Sequence {
        debug_assert!(!directions.is_empty());
        Sequence {
            directions,
            next: 0,
        }
    }
}

impl Randomness for Sequence {
    fn cardinal(&mut self) -> Vector {
        if self.directions.is_empty() {
            return Vector::RIGHT;
        }
        let d = self.directions[self.next % self.directions.len()];
        self.next += 1;
        d
    }
}
